use std::cmp::Ordering;

use smallvec::SmallVec;

use super::dcel_operations::ccb;
use super::handles::*;
use crate::{Arrangement, ArrangementTraits, BoundaryCategory, BoundaryType, CurveEnd, HalfedgeDirection};

/// Position of a curve leaving a finite vertex, in counterclockwise order starting just
/// after "straight down".
///
/// Curves of the same class are ordered by the traits' near-point predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum AngleClass {
    Right,
    Up,
    Left,
    Down,
}

impl<T: ArrangementTraits> Arrangement<T> {
    /// Returns the curve and the end of that curve a vertex at infinity is anchored at.
    ///
    /// Every vertex at infinity except the corners is incident to exactly one curve.
    pub(crate) fn anchor_of(&self, vertex: FixedVertexHandle) -> Option<(&T::Curve, CurveEnd)> {
        let first = self.dcel.vertex_halfedge(vertex)?;
        let mut current = first;
        loop {
            if let Some(curve) = self.dcel.curve(current) {
                return Some((curve, self.end_at_target(current)));
            }
            current = self.dcel.cw_incoming(current);
            if current == first {
                return None;
            }
        }
    }

    /// Returns which end of its curve the target of a non fictitious halfedge is.
    pub(crate) fn end_at_target(&self, halfedge: FixedHalfedgeHandle) -> CurveEnd {
        match self.dcel.direction(halfedge) {
            HalfedgeDirection::LeftToRight => CurveEnd::Max,
            HalfedgeDirection::RightToLeft => CurveEnd::Min,
        }
    }

    /// Returns which end of `cv` lies at `vertex`.
    pub(crate) fn curve_end_at_vertex(&self, cv: &T::Curve, vertex: FixedVertexHandle) -> CurveEnd {
        let entry = self.dcel.vertex(vertex);
        match &entry.point {
            Some(point) => {
                if self.traits.is_bounded_end(cv, CurveEnd::Min)
                    && self
                        .traits
                        .equal_points(&self.traits.construct_min_vertex(cv), point)
                {
                    CurveEnd::Min
                } else {
                    CurveEnd::Max
                }
            }
            None => {
                let matches = |end| {
                    self.traits.parameter_space_in_x(cv, end) == entry.ps_x
                        && self.traits.parameter_space_in_y(cv, end) == entry.ps_y
                };
                if matches(CurveEnd::Min) {
                    CurveEnd::Min
                } else {
                    CurveEnd::Max
                }
            }
        }
    }

    /// Compares the x coordinate of a finite point with the x coordinate of a vertex.
    pub(crate) fn compare_x_point_vertex(&self, p: &T::Point, vertex: FixedVertexHandle) -> Ordering {
        let entry = self.dcel.vertex(vertex);
        match entry.ps_x {
            BoundaryType::MinusInfinity => return Ordering::Greater,
            BoundaryType::PlusInfinity => return Ordering::Less,
            BoundaryType::NoBoundary => {}
        }
        if let Some(point) = &entry.point {
            return self.traits.compare_x(p, point);
        }
        if !T::Category::SUPPORTS_UNBOUNDED {
            // Only the corners lie at infinity, they were handled above.
            return Ordering::Equal;
        }
        match self.anchor_of(vertex) {
            Some((curve, end)) => self.traits.compare_x_on_boundary(p, curve, end),
            None => Ordering::Equal,
        }
    }

    /// Compares a finite point with a vertex lexicographically.
    pub(crate) fn compare_xy_point_vertex(&self, p: &T::Point, vertex: FixedVertexHandle) -> Ordering {
        let entry = self.dcel.vertex(vertex);
        if let Some(point) = &entry.point {
            return self.traits.compare_xy(p, point);
        }
        self.compare_x_point_vertex(p, vertex)
            .then(match entry.ps_y {
                BoundaryType::MinusInfinity => Ordering::Greater,
                BoundaryType::PlusInfinity => Ordering::Less,
                BoundaryType::NoBoundary => Ordering::Equal,
            })
    }

    /// Compares two vertices lexicographically. Vertices at infinity are ordered by where
    /// their curve ends approach the boundary.
    pub(crate) fn compare_vertices_xy(&self, v1: FixedVertexHandle, v2: FixedVertexHandle) -> Ordering {
        let e1 = self.dcel.vertex(v1);
        let e2 = self.dcel.vertex(v2);
        if let (Some(p1), Some(p2)) = (&e1.point, &e2.point) {
            return self.traits.compare_xy(p1, p2);
        }
        if let Some(p1) = &e1.point {
            return self.compare_xy_point_vertex(p1, v2);
        }
        if let Some(p2) = &e2.point {
            return self.compare_xy_point_vertex(p2, v1).reverse();
        }
        if e1.ps_x != e2.ps_x {
            return e1.ps_x.cmp(&e2.ps_x);
        }
        if e1.ps_x.is_infinite() {
            // Both on the same vertical side of the rectangle.
            if e1.ps_y != e2.ps_y || e1.ps_y.is_infinite() {
                return e1.ps_y.cmp(&e2.ps_y);
            }
            return match (self.anchor_of(v1), self.anchor_of(v2)) {
                (Some((c1, end)), Some((c2, _))) => self.traits.compare_y_near_boundary(c1, c2, end),
                _ => Ordering::Equal,
            };
        }
        // Both approach y = ±∞ at a finite x.
        let by_x = match (self.anchor_of(v1), self.anchor_of(v2)) {
            (Some((c1, end1)), Some((c2, end2))) => {
                self.traits.compare_x_curve_ends_on_boundary(c1, end1, c2, end2)
            }
            _ => Ordering::Equal,
        };
        by_x.then(e1.ps_y.cmp(&e2.ps_y))
    }

    /// Compares `p` with the curve of a halfedge at the x coordinate of `p`.
    ///
    /// For fictitious halfedges on the bottom or top of the rectangle, `p` is always above
    /// or below, respectively.
    pub(crate) fn compare_y_at_x_halfedge(&self, p: &T::Point, halfedge: FixedHalfedgeHandle) -> Ordering {
        match self.dcel.curve(halfedge) {
            Some(curve) => self.traits.compare_y_at_x(p, curve),
            None => {
                let source = self.dcel.vertex(self.dcel.source(halfedge));
                let target = self.dcel.vertex(self.dcel.target(halfedge));
                if source.ps_y == BoundaryType::MinusInfinity
                    && target.ps_y == BoundaryType::MinusInfinity
                {
                    Ordering::Greater
                } else {
                    debug_assert_eq!(source.ps_y, BoundaryType::PlusInfinity);
                    Ordering::Less
                }
            }
        }
    }

    /// Checks whether an unbounded curve end lies in the interior of the fictitious halfedge
    /// `halfedge`, or coincides with one of its end vertices.
    ///
    /// Returns the comparison results of the curve end against the source and the target,
    /// measured along the side of the rectangle the end lies on. The end lies in the interior
    /// iff both results differ and neither is `Equal`.
    pub(crate) fn locate_on_fictitious_edge(
        &self,
        cv: &T::Curve,
        end: CurveEnd,
        halfedge: FixedHalfedgeHandle,
    ) -> Option<(Ordering, Ordering)> {
        let ps_x = self.traits.parameter_space_in_x(cv, end);
        let ps_y = self.traits.parameter_space_in_y(cv, end);
        let source = self.dcel.source(halfedge);
        let target = self.dcel.target(halfedge);

        let compare = |vertex: FixedVertexHandle| -> Option<Ordering> {
            let entry = self.dcel.vertex(vertex);
            if ps_x.is_infinite() {
                // Left or right side: order by y.
                if entry.ps_x != ps_x {
                    return None;
                }
                Some(match entry.ps_y {
                    BoundaryType::MinusInfinity => Ordering::Greater,
                    BoundaryType::PlusInfinity => Ordering::Less,
                    BoundaryType::NoBoundary => {
                        let (anchor, _) = self.anchor_of(vertex)?;
                        self.traits.compare_y_near_boundary(cv, anchor, end)
                    }
                })
            } else {
                // Bottom or top side: order by x.
                if entry.ps_y != ps_y {
                    return None;
                }
                Some(match entry.ps_x {
                    BoundaryType::MinusInfinity => Ordering::Greater,
                    BoundaryType::PlusInfinity => Ordering::Less,
                    BoundaryType::NoBoundary => {
                        let (anchor, anchor_end) = self.anchor_of(vertex)?;
                        self.traits
                            .compare_x_curve_ends_on_boundary(cv, end, anchor, anchor_end)
                    }
                })
            }
        };

        Some((compare(source)?, compare(target)?))
    }

    fn angle_class(&self, cv: &T::Curve, end_at_vertex: CurveEnd) -> AngleClass {
        match (end_at_vertex, self.traits.is_vertical(cv)) {
            (CurveEnd::Min, false) => AngleClass::Right,
            (CurveEnd::Min, true) => AngleClass::Up,
            (CurveEnd::Max, false) => AngleClass::Left,
            (CurveEnd::Max, true) => AngleClass::Down,
        }
    }

    /// Compares the counterclockwise angles of two curves leaving the finite point `p`.
    pub(crate) fn compare_angles(
        &self,
        p: &T::Point,
        (c1, end1): (&T::Curve, CurveEnd),
        (c2, end2): (&T::Curve, CurveEnd),
    ) -> Ordering {
        let class1 = self.angle_class(c1, end1);
        let class2 = self.angle_class(c2, end2);
        class1.cmp(&class2).then_with(|| match class1 {
            AngleClass::Right => self.traits.compare_y_at_x_right(c1, c2, p),
            AngleClass::Left => self.traits.compare_y_at_x_left(c1, c2, p).reverse(),
            AngleClass::Up | AngleClass::Down => Ordering::Equal,
        })
    }

    /// Returns the curve of an incoming halfedge together with the end at its target.
    ///
    /// Returns `None` for fictitious halfedges, which never end in a finite vertex.
    fn incoming_curve(&self, halfedge: FixedHalfedgeHandle) -> Option<(&T::Curve, CurveEnd)> {
        let curve = self.dcel.curve(halfedge)?;
        Some((curve, self.end_at_target(halfedge)))
    }

    /// Finds the incoming halfedge of `vertex` after which a new curve leaving `vertex` must
    /// be inserted.
    ///
    /// The returned halfedge `prev` satisfies: going clockwise around `vertex`, `cv` lies
    /// strictly between the curve of `prev` and the curve of the next incoming halfedge.
    /// The new curve becomes part of the boundary of `prev`'s face.
    pub(crate) fn locate_around_vertex(
        &self,
        vertex: FixedVertexHandle,
        cv: &T::Curve,
        end: CurveEnd,
    ) -> Option<FixedHalfedgeHandle> {
        let first = self.dcel.vertex_halfedge(vertex)?;
        let next_cw = self.dcel.cw_incoming(first);
        if next_cw == first {
            return Some(first);
        }
        let p = self.dcel.point(vertex)?;
        let new = (cv, end);

        let mut current = first;
        loop {
            let next = self.dcel.cw_incoming(current);
            let a = self.incoming_curve(current)?;
            let b = self.incoming_curve(next)?;
            if self.is_between_cw(p, new, a, b) {
                return Some(current);
            }
            current = next;
            if current == first {
                return None;
            }
        }
    }

    /// Returns `true` if `x` lies strictly between `a` and `b` when sweeping clockwise from
    /// `a` to `b` around `p`.
    fn is_between_cw(
        &self,
        p: &T::Point,
        x: (&T::Curve, CurveEnd),
        a: (&T::Curve, CurveEnd),
        b: (&T::Curve, CurveEnd),
    ) -> bool {
        let x_a = self.compare_angles(p, x, a);
        let x_b = self.compare_angles(p, x, b);
        match self.compare_angles(p, a, b) {
            Ordering::Greater => x_a == Ordering::Less && x_b == Ordering::Greater,
            Ordering::Less => x_a == Ordering::Less || x_b == Ordering::Greater,
            Ordering::Equal => true,
        }
    }

    /// Returns `true` if the curves around a finite vertex are in clockwise order.
    pub(crate) fn is_cw_ordered(&self, vertex: FixedVertexHandle) -> bool {
        let Some(p) = self.dcel.point(vertex) else {
            return true;
        };
        let Some(first) = self.dcel.vertex_halfedge(vertex) else {
            return true;
        };
        let mut curves: SmallVec<[(&T::Curve, CurveEnd); 8]> = SmallVec::new();
        let mut current = first;
        loop {
            let Some(curve) = self.incoming_curve(current) else {
                return false;
            };
            curves.push(curve);
            current = self.dcel.cw_incoming(current);
            if current == first {
                break;
            }
        }
        if curves.len() < 2 {
            return true;
        }
        let mut ascents = 0;
        for index in 0..curves.len() {
            let next = curves[(index + 1) % curves.len()];
            match self.compare_angles(p, curves[index], next) {
                Ordering::Less => ascents += 1,
                Ordering::Equal => return false,
                Ordering::Greater => {}
            }
        }
        ascents == 1
    }

    /// Returns `true` if the boundary cycle containing `start` runs counterclockwise, i.e.
    /// if it can be the outer boundary of a face.
    ///
    /// Cycles containing fictitious halfedges are outer boundaries of unbounded faces. For
    /// other cycles, the test looks at every visit of the cycle's lexicographically smallest
    /// vertex: the cycle is counterclockwise iff each outgoing curve lies below the incoming
    /// one, immediately to the right of that vertex.
    pub(crate) fn is_ccb_ccw(&self, start: FixedHalfedgeHandle) -> bool {
        if super::dcel_operations::ccb_has_fictitious(&self.dcel, start) {
            return true;
        }
        let mut min_vertex = self.dcel.target(start);
        for halfedge in ccb(&self.dcel, start) {
            let target = self.dcel.target(halfedge);
            if self.compare_vertices_xy(target, min_vertex) == Ordering::Less {
                min_vertex = target;
            }
        }
        let Some(p) = self.dcel.point(min_vertex) else {
            return false;
        };
        ccb(&self.dcel, start)
            .filter(|halfedge| self.dcel.target(*halfedge) == min_vertex)
            .all(|incoming| {
                let outgoing = self.dcel.next(incoming);
                match (self.dcel.curve(outgoing), self.dcel.curve(incoming)) {
                    (Some(out_curve), Some(in_curve)) => {
                        outgoing != incoming.twin()
                            && self.traits.compare_y_at_x_right(out_curve, in_curve, p)
                                == Ordering::Less
                    }
                    _ => false,
                }
            })
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::{Arrangement, CurveEnd, LinearCurve, LinearTraits, Point2, Segment, SegmentTraits};

    #[test]
    fn test_locate_around_vertex() {
        let mut arrangement = Arrangement::<SegmentTraits<f64>>::new();
        let face = arrangement.unbounded_face().fix();
        let origin = Point2::new(0.0, 0.0);
        let east = arrangement.insert_in_face_interior(Segment::new(origin, Point2::new(1.0, 0.0)), face);
        let center = arrangement.halfedge(east).source().fix();
        let north = arrangement.insert_from_left_vertex(Segment::new(origin, Point2::new(0.0, 1.0)), center);
        let west = arrangement.insert_from_right_vertex(Segment::new(Point2::new(-1.0, 0.0), origin), center);

        // Incoming halfedges of `center` are the twins of the halfedges leaving it.
        let north_east = Segment::new(origin, Point2::new(1.0, 1.0));
        let prev = arrangement
            .locate_around_vertex(center, &north_east, CurveEnd::Min)
            .unwrap();
        assert_eq!(prev, north.twin());

        let south = Segment::new(Point2::new(0.0, -1.0), origin);
        let prev = arrangement
            .locate_around_vertex(center, &south, CurveEnd::Max)
            .unwrap();
        assert_eq!(prev, east.twin());

        let north_west = Segment::new(Point2::new(-1.0, 1.0), origin);
        let prev = arrangement
            .locate_around_vertex(center, &north_west, CurveEnd::Max)
            .unwrap();
        assert_eq!(prev, west.twin());
        assert!(arrangement.is_cw_ordered(center));
    }

    #[test]
    fn test_compare_vertices_at_infinity() {
        let mut arrangement = Arrangement::<LinearTraits<f64>>::new();
        let face = arrangement.unbounded_face().fix();
        let steep = arrangement.insert_in_face_interior(
            LinearCurve::ray(Point2::new(0.0, 0.0), Point2::new(1.0, 2.0)),
            face,
        );
        let face = arrangement.halfedge(steep).face().fix();
        let flat = arrangement.insert_in_face_interior(
            LinearCurve::ray(Point2::new(0.0, -5.0), Point2::new(1.0, -4.0)),
            face,
        );
        let steep_end = arrangement.halfedge(steep).target().fix();
        let flat_end = arrangement.halfedge(flat).target().fix();
        assert!(arrangement.vertex(steep_end).is_at_open_boundary());
        assert_eq!(
            arrangement.compare_vertices_xy(flat_end, steep_end),
            Ordering::Less
        );
        assert_eq!(
            arrangement.compare_x_point_vertex(&Point2::new(1e9, 0.0), steep_end),
            Ordering::Less
        );
        arrangement.validate().unwrap();
    }
}
