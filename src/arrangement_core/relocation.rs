use std::cmp::Ordering;

use smallvec::SmallVec;

use super::dcel::VertexConnection;
use super::dcel_operations::{ccb, remove_from_list};
use super::handles::*;
use crate::{Arrangement, ArrangementTraits};

impl<T: ArrangementTraits> Arrangement<T> {
    /// Returns `true` if the finite point `p` lies strictly inside the region enclosed by the
    /// boundary cycle starting at `start`.
    ///
    /// Counts the crossings of the cycle with the vertical ray emanating upwards from `p`.
    /// Each halfedge covers the half open x-range between its end vertices, so vertices on
    /// the ray are counted once. Points on the cycle are never inside.
    pub(crate) fn point_is_in(&self, p: &T::Point, start: FixedHalfedgeHandle) -> bool {
        let on_vertex = ccb(&self.dcel, start).any(|halfedge| {
            self.compare_xy_point_vertex(p, self.dcel.target(halfedge)) == Ordering::Equal
        });
        if on_vertex {
            return false;
        }

        let mut inside = false;
        for halfedge in ccb(&self.dcel, start) {
            let source_left = self.compare_x_point_vertex(p, self.dcel.source(halfedge)) != Ordering::Less;
            let target_left = self.compare_x_point_vertex(p, self.dcel.target(halfedge)) != Ordering::Less;
            if source_left == target_left {
                continue;
            }
            match self.compare_y_at_x_halfedge(p, halfedge) {
                Ordering::Less => inside = !inside,
                Ordering::Equal => return false,
                Ordering::Greater => {}
            }
        }
        inside
    }

    /// Returns a finite point on the boundary cycle starting at `start`.
    pub(crate) fn point_on_ccb(&self, start: FixedHalfedgeHandle) -> Option<&T::Point> {
        ccb(&self.dcel, start).find_map(|halfedge| self.dcel.point(self.dcel.target(halfedge)))
    }

    /// Moves every hole and isolated vertex of `old_face` that lies inside the outer boundary
    /// of `new_face` over to `new_face`.
    ///
    /// `split_hole` is the hole whose boundary was just closed into the outer boundary of
    /// `new_face`; it stays where it is.
    pub(crate) fn relocate_in_new_face(
        &mut self,
        old_face: FixedFaceHandle,
        new_face: FixedFaceHandle,
        split_hole: Option<FixedHoleHandle>,
    ) {
        let Some(boundary) = self.dcel.outer_ccb(new_face) else {
            return;
        };

        let holes: SmallVec<[FixedHoleHandle; 8]> = self
            .dcel
            .face_entry(old_face)
            .holes
            .iter()
            .copied()
            .filter(|hole| Some(*hole) != split_hole)
            .filter(|hole| {
                let rep = self.dcel.hole(*hole).halfedge;
                self.point_on_ccb(rep)
                    .map_or(false, |p| self.point_is_in(p, boundary))
            })
            .collect();
        for hole in holes {
            self.move_hole(old_face, new_face, hole);
        }

        let isolated: SmallVec<[FixedVertexHandle; 8]> = self
            .dcel
            .face_entry(old_face)
            .isolated_vertices
            .iter()
            .copied()
            .filter(|vertex| {
                self.dcel
                    .point(*vertex)
                    .map_or(false, |p| self.point_is_in(p, boundary))
            })
            .collect();
        for vertex in isolated {
            self.move_isolated_vertex(old_face, new_face, vertex);
        }
    }

    pub(crate) fn move_hole(&mut self, from: FixedFaceHandle, to: FixedFaceHandle, hole: FixedHoleHandle) {
        let rep = self.dcel.hole(hole).halfedge;
        let scope = self.notification_scope();
        scope.before(|o| o.before_move_hole(self, from, to, rep));
        remove_from_list(&mut self.dcel.face_entry_mut(from).holes, hole);
        self.dcel.face_entry_mut(to).holes.push(hole);
        self.dcel.hole_mut(hole).face = to;
        scope.after(|o| o.after_move_hole(self, rep));
    }

    pub(crate) fn move_isolated_vertex(
        &mut self,
        from: FixedFaceHandle,
        to: FixedFaceHandle,
        vertex: FixedVertexHandle,
    ) {
        let scope = self.notification_scope();
        scope.before(|o| o.before_move_isolated_vertex(self, from, to, vertex));
        remove_from_list(&mut self.dcel.face_entry_mut(from).isolated_vertices, vertex);
        self.dcel.face_entry_mut(to).isolated_vertices.push(vertex);
        self.dcel.vertex_mut(vertex).connection = VertexConnection::Isolated(to);
        scope.after(|o| o.after_move_isolated_vertex(self, vertex));
    }
}

#[cfg(test)]
mod test {
    use crate::{Arrangement, LinearCurve, LinearTraits, Point2, Segment, SegmentTraits};

    fn square(arrangement: &mut Arrangement<SegmentTraits<f64>>, size: f64) -> crate::handles::FixedHalfedgeHandle {
        let p = |x: f64, y: f64| Point2::new(x * size, y * size);
        let face = arrangement.unbounded_face().fix();
        let bottom = arrangement.insert_in_face_interior(Segment::new(p(0.0, 0.0), p(1.0, 0.0)), face);
        let v0 = arrangement.halfedge(bottom).source().fix();
        let v1 = arrangement.halfedge(bottom).target().fix();
        let right = arrangement.insert_from_left_vertex(Segment::new(p(1.0, 0.0), p(1.0, 1.0)), v1);
        let v2 = arrangement.halfedge(right).target().fix();
        let left = arrangement.insert_from_left_vertex(Segment::new(p(0.0, 0.0), p(0.0, 1.0)), v0);
        let v3 = arrangement.halfedge(left).target().fix();
        arrangement.insert_at_vertices(Segment::new(p(0.0, 1.0), p(1.0, 1.0)), v3, v2)
    }

    #[test]
    fn test_point_is_in() {
        let mut arrangement = Arrangement::<SegmentTraits<f64>>::new();
        let top = square(&mut arrangement, 2.0);
        let inner_face = arrangement
            .faces()
            .find(|face| !face.is_unbounded())
            .unwrap();
        let boundary = inner_face.outer_ccb().unwrap().fix();

        assert!(arrangement.point_is_in(&Point2::new(1.0, 1.0), boundary));
        assert!(arrangement.point_is_in(&Point2::new(0.0001, 1.9), boundary));
        assert!(!arrangement.point_is_in(&Point2::new(3.0, 1.0), boundary));
        assert!(!arrangement.point_is_in(&Point2::new(1.0, -1.0), boundary));
        // Directly below a vertex.
        assert!(!arrangement.point_is_in(&Point2::new(0.0, -1.0), boundary));
        // On the boundary.
        assert!(!arrangement.point_is_in(&Point2::new(0.0, 0.0), boundary));
        assert!(!arrangement.point_is_in(&Point2::new(1.0, 2.0), boundary));

        // The hole boundary encloses the same region.
        let hole = arrangement.halfedge(top).twin().fix();
        let hole = if arrangement.halfedge(hole).face().is_unbounded() {
            hole
        } else {
            top
        };
        assert!(arrangement.point_is_in(&Point2::new(1.0, 1.0), hole));
    }

    #[test]
    fn test_point_is_in_unbounded_region() {
        let mut arrangement = Arrangement::<LinearTraits<f64>>::new();
        let face = arrangement.unbounded_face().fix();
        let line = arrangement.insert_in_face_interior(
            LinearCurve::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
            face,
        );
        // The halfedge of the line that runs left to right bounds the upper half plane.
        assert!(arrangement.point_is_in(&Point2::new(5.0, 1.0), line));
        assert!(!arrangement.point_is_in(&Point2::new(5.0, -1.0), line));
        assert!(arrangement.point_is_in(&Point2::new(-5.0, -1.0), line.twin()));
        assert!(!arrangement.point_is_in(&Point2::new(0.0, 0.0), line.twin()));
    }

    #[test]
    fn test_relocation_on_split() {
        let mut arrangement = Arrangement::<SegmentTraits<f64>>::new();
        let unbounded = arrangement.unbounded_face().fix();
        let inside = arrangement.insert_isolated_vertex(Point2::new(1.0, 1.0), unbounded);
        let outside = arrangement.insert_isolated_vertex(Point2::new(5.0, 5.0), unbounded);
        let small = arrangement.insert_in_face_interior(
            Segment::new(Point2::new(0.5, 0.5), Point2::new(1.5, 0.5)),
            unbounded,
        );
        square(&mut arrangement, 2.0);

        let inner_face = arrangement
            .faces()
            .find(|face| !face.is_unbounded())
            .unwrap();
        assert_eq!(arrangement.vertex(inside).face(), Some(inner_face));
        assert_eq!(
            arrangement.vertex(outside).face(),
            Some(arrangement.unbounded_face())
        );
        assert_eq!(arrangement.halfedge(small).face(), inner_face);
        assert_eq!(inner_face.number_of_holes(), 1);
        assert_eq!(arrangement.unbounded_face().number_of_holes(), 1);
        arrangement.validate().unwrap();
    }
}
