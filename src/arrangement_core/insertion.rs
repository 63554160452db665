use log::{debug, trace};

use super::dcel::{HoleEntry, Incidence, VertexConnection};
use super::dcel_operations::{self, ccb_has_fictitious, link, remove_from_list};
use super::handles::*;
use crate::{Arrangement, ArrangementTraits, BoundaryType, CurveEnd, HalfedgeDirection};

/// Direction of a halfedge that starts at the given end of its curve.
fn direction_from(end_at_source: CurveEnd) -> HalfedgeDirection {
    match end_at_source {
        CurveEnd::Min => HalfedgeDirection::LeftToRight,
        CurveEnd::Max => HalfedgeDirection::RightToLeft,
    }
}

impl<T: ArrangementTraits> Arrangement<T> {
    /// Inserts a point as an isolated vertex into the interior of face `f`.
    ///
    /// *Precondition:* `p` lies in the interior of `f`.
    pub fn insert_isolated_vertex(&mut self, p: T::Point, f: FixedFaceHandle) -> FixedVertexHandle {
        trace!("insert_isolated_vertex into {:?}", f);
        let vertex = self.create_finite_vertex(p);
        self.add_isolated_vertex(f, vertex);
        vertex
    }

    /// Inserts a curve whose ends are not incident to any existing vertex into the interior
    /// of face `f`.
    ///
    /// Bounded ends become new vertices. Unbounded ends are anchored on the fictitious
    /// boundary of `f`. Returns the new halfedge directed from the curve's minimal end to its
    /// maximal end.
    ///
    /// *Precondition:* `cv` lies in the interior of `f` and is disjoint from all its holes
    /// and isolated vertices.
    pub fn insert_in_face_interior(&mut self, cv: T::Curve, f: FixedFaceHandle) -> FixedHalfedgeHandle {
        trace!("insert_in_face_interior into {:?}", f);
        let min_bounded = self.traits.is_bounded_end(&cv, CurveEnd::Min);
        let max_bounded = self.traits.is_bounded_end(&cv, CurveEnd::Max);
        if min_bounded && max_bounded {
            let v1 = self.create_finite_vertex(self.traits.construct_min_vertex(&cv));
            let v2 = self.create_finite_vertex(self.traits.construct_max_vertex(&cv));
            return self.insert_in_face_interior_impl(cv, f, v1, v2);
        }

        let min_fictitious =
            (!min_bounded).then(|| self.fictitious_edge_of(&cv, CurveEnd::Min, f));
        let max_fictitious =
            (!max_bounded).then(|| self.fictitious_edge_of(&cv, CurveEnd::Max, f));
        self.insert_with_free_ends(cv, min_fictitious, max_fictitious)
    }

    /// Inserts a curve with at least one unbounded end into the interior of a face.
    ///
    /// `min_fictitious` and `max_fictitious` are the fictitious halfedges on the outer
    /// boundary of the face that contain the respective unbounded ends. Bounded ends must be
    /// passed as `None` and become new vertices.
    ///
    /// Returns the new halfedge directed from the curve's minimal end to its maximal end.
    pub fn insert_unbounded_in_face_interior(
        &mut self,
        cv: T::Curve,
        min_fictitious: Option<FixedHalfedgeHandle>,
        max_fictitious: Option<FixedHalfedgeHandle>,
    ) -> FixedHalfedgeHandle {
        debug_assert!(
            min_fictitious.is_some() || max_fictitious.is_some(),
            "Bounded curves must be inserted with insert_in_face_interior"
        );
        trace!("insert_unbounded_in_face_interior");
        self.insert_with_free_ends(cv, min_fictitious, max_fictitious)
    }

    /// Inserts a curve whose left end is the existing vertex `v`.
    ///
    /// The right end must not be incident to any existing vertex; it becomes a new vertex or,
    /// if unbounded, a new vertex at infinity. `v` may be isolated. Returns the new halfedge
    /// directed from `v` to the new vertex.
    pub fn insert_from_left_vertex(&mut self, cv: T::Curve, v: FixedVertexHandle) -> FixedHalfedgeHandle {
        trace!("insert_from_left_vertex at {:?}", v);
        self.insert_from_vertex(cv, v, CurveEnd::Min)
    }

    /// Inserts a curve whose left end is the target of `prev`.
    ///
    /// The new curve is placed right after `prev` in the clockwise order around the vertex
    /// and lies in the face of `prev`. Returns the new halfedge directed away from the
    /// target of `prev`.
    pub fn insert_from_left_vertex_with_prev(
        &mut self,
        cv: T::Curve,
        prev: FixedHalfedgeHandle,
    ) -> FixedHalfedgeHandle {
        trace!("insert_from_left_vertex_with_prev after {:?}", prev);
        self.insert_from_vertex_with_prev(cv, prev, CurveEnd::Min)
    }

    /// Inserts a curve whose left end is the target of `prev` and whose unbounded right end
    /// lies in the interior of the fictitious halfedge `fictitious`.
    pub fn insert_from_left_vertex_to_fictitious(
        &mut self,
        cv: T::Curve,
        prev: FixedHalfedgeHandle,
        fictitious: FixedHalfedgeHandle,
    ) -> FixedHalfedgeHandle {
        trace!("insert_from_left_vertex_to_fictitious after {:?}", prev);
        self.insert_to_fictitious(cv, prev, fictitious, CurveEnd::Min)
    }

    /// Inserts a curve whose right end is the existing vertex `v`.
    ///
    /// The mirror image of [insert_from_left_vertex](Arrangement::insert_from_left_vertex).
    /// Returns the new halfedge directed from `v` to the new vertex.
    pub fn insert_from_right_vertex(&mut self, cv: T::Curve, v: FixedVertexHandle) -> FixedHalfedgeHandle {
        trace!("insert_from_right_vertex at {:?}", v);
        self.insert_from_vertex(cv, v, CurveEnd::Max)
    }

    /// Like [insert_from_right_vertex](Arrangement::insert_from_right_vertex), with the
    /// insertion position around the target of `prev` given explicitly.
    pub fn insert_from_right_vertex_with_prev(
        &mut self,
        cv: T::Curve,
        prev: FixedHalfedgeHandle,
    ) -> FixedHalfedgeHandle {
        trace!("insert_from_right_vertex_with_prev after {:?}", prev);
        self.insert_from_vertex_with_prev(cv, prev, CurveEnd::Max)
    }

    /// Inserts a curve whose right end is the target of `prev` and whose unbounded left end
    /// lies in the interior of the fictitious halfedge `fictitious`.
    pub fn insert_from_right_vertex_to_fictitious(
        &mut self,
        cv: T::Curve,
        prev: FixedHalfedgeHandle,
        fictitious: FixedHalfedgeHandle,
    ) -> FixedHalfedgeHandle {
        trace!("insert_from_right_vertex_to_fictitious after {:?}", prev);
        self.insert_to_fictitious(cv, prev, fictitious, CurveEnd::Max)
    }

    /// Inserts a curve connecting the two existing vertices `v1` and `v2`.
    ///
    /// Either vertex may be isolated. If both are already connected through the boundary
    /// of a face, that face is split in two and its holes and isolated vertices are
    /// distributed among both parts. If the curve connects two holes, or a hole and the
    /// outer boundary, these boundaries are merged.
    ///
    /// Returns the new halfedge directed from `v1` to `v2`. If a face was split, the new
    /// face is incident to one of the two new halfedges.
    pub fn insert_at_vertices(
        &mut self,
        cv: T::Curve,
        v1: FixedVertexHandle,
        v2: FixedVertexHandle,
    ) -> FixedHalfedgeHandle {
        trace!("insert_at_vertices {:?} {:?}", v1, v2);
        let end1 = self.curve_end_at_vertex(&cv, v1);
        let end2 = end1.opposite();
        let connection1 = self.dcel.vertex(v1).connection;
        let connection2 = self.dcel.vertex(v2).connection;
        match (connection1, connection2) {
            (VertexConnection::Isolated(f1), VertexConnection::Isolated(f2)) => {
                debug_assert_eq!(f1, f2, "Isolated vertices lie in different faces");
                self.detach_isolated_vertex(v1);
                self.detach_isolated_vertex(v2);
                let halfedge = match end1 {
                    CurveEnd::Min => self.insert_in_face_interior_impl(cv, f1, v1, v2),
                    CurveEnd::Max => self.insert_in_face_interior_impl(cv, f1, v2, v1),
                };
                if end1 == CurveEnd::Min {
                    halfedge
                } else {
                    halfedge.twin()
                }
            }
            (VertexConnection::Isolated(_), _) => {
                let prev2 = self.prev_around_vertex(v2, &cv, end2);
                self.detach_isolated_vertex(v1);
                self.insert_from_vertex_impl(cv, prev2, v1, direction_from(end2))
                    .twin()
            }
            (_, VertexConnection::Isolated(_)) => {
                let prev1 = self.prev_around_vertex(v1, &cv, end1);
                self.detach_isolated_vertex(v2);
                self.insert_from_vertex_impl(cv, prev1, v2, direction_from(end1))
            }
            _ => {
                let prev1 = self.prev_around_vertex(v1, &cv, end1);
                let prev2 = self.prev_around_vertex(v2, &cv, end2);
                self.insert_at_vertices_impl(cv, prev1, prev2, direction_from(end1))
            }
        }
    }

    /// Inserts a curve connecting the target of `prev1` with the vertex `v2`.
    ///
    /// The curve is placed right after `prev1` in the clockwise order around its target.
    /// Returns the new halfedge directed from the target of `prev1` to `v2`.
    pub fn insert_at_vertices_with_prev(
        &mut self,
        cv: T::Curve,
        prev1: FixedHalfedgeHandle,
        v2: FixedVertexHandle,
    ) -> FixedHalfedgeHandle {
        trace!("insert_at_vertices_with_prev {:?} {:?}", prev1, v2);
        let end1 = self.curve_end_at_vertex(&cv, self.dcel.target(prev1));
        if let VertexConnection::Isolated(_) = self.dcel.vertex(v2).connection {
            self.detach_isolated_vertex(v2);
            return self.insert_from_vertex_impl(cv, prev1, v2, direction_from(end1));
        }
        let prev2 = self.prev_around_vertex(v2, &cv, end1.opposite());
        self.insert_at_vertices_impl(cv, prev1, prev2, direction_from(end1))
    }

    /// Inserts a curve connecting the targets of `prev1` and `prev2`.
    ///
    /// Both halfedges determine the position of the new curve in the clockwise order
    /// around their targets. Returns the new halfedge directed from the target of `prev1` to
    /// the target of `prev2`.
    pub fn insert_at_vertices_with_prevs(
        &mut self,
        cv: T::Curve,
        prev1: FixedHalfedgeHandle,
        prev2: FixedHalfedgeHandle,
    ) -> FixedHalfedgeHandle {
        trace!("insert_at_vertices_with_prevs {:?} {:?}", prev1, prev2);
        let end1 = self.curve_end_at_vertex(&cv, self.dcel.target(prev1));
        self.insert_at_vertices_impl(cv, prev1, prev2, direction_from(end1))
    }

    /// Replaces the point of a vertex by a geometrically equal point.
    pub fn modify_vertex(&mut self, v: FixedVertexHandle, p: T::Point) -> FixedVertexHandle {
        debug_assert!(
            self.dcel
                .point(v)
                .map_or(false, |old| self.traits.equal_points(old, &p)),
            "modify_vertex must not move a vertex"
        );
        let scope = self.notification_scope();
        scope.before(|o| o.before_modify_vertex(self, v, &p));
        self.dcel.vertex_mut(v).point = Some(p);
        scope.after(|o| o.after_modify_vertex(self, v));
        v
    }

    /// Replaces the curve of an edge by a geometrically equal curve.
    pub fn modify_edge(&mut self, e: FixedHalfedgeHandle, cv: T::Curve) -> FixedHalfedgeHandle {
        debug_assert!(
            self.dcel
                .curve(e)
                .map_or(false, |old| self.traits.equal_curves(old, &cv)),
            "modify_edge must not change the geometry of an edge"
        );
        let scope = self.notification_scope();
        scope.before(|o| o.before_modify_edge(self, e, &cv));
        self.dcel.edge_entry_mut(e.as_edge()).curve = Some(cv);
        scope.after(|o| o.after_modify_edge(self, e));
        e
    }

    /// Splits the edge of `e` into two edges carrying `cv1` and `cv2`.
    ///
    /// The two curves must share one bounded endpoint, which becomes the new vertex, and
    /// together must equal the curve of `e`. Returns the halfedge from the source of `e` to
    /// the new vertex; its successor continues to the old target of `e`.
    pub fn split_edge(
        &mut self,
        e: FixedHalfedgeHandle,
        cv1: T::Curve,
        cv2: T::Curve,
    ) -> FixedHalfedgeHandle {
        debug_assert!(!self.dcel.is_fictitious(e), "Cannot split a fictitious edge");
        let first_is_left = self.traits.is_bounded_end(&cv1, CurveEnd::Max)
            && self.traits.is_bounded_end(&cv2, CurveEnd::Min)
            && self.traits.equal_points(
                &self.traits.construct_max_vertex(&cv1),
                &self.traits.construct_min_vertex(&cv2),
            );
        let split_point = if first_is_left {
            self.traits.construct_max_vertex(&cv1)
        } else {
            self.traits.construct_min_vertex(&cv1)
        };
        trace!("split_edge {:?}", e);

        let vertex = self.create_finite_vertex(split_point);

        let scope = self.notification_scope();
        scope.before(|o| o.before_split_edge(self, e, vertex, &cv1, &cv2));
        let (left, right) = if first_is_left { (cv1, cv2) } else { (cv2, cv1) };
        let (first, second) = match self.dcel.direction(e) {
            HalfedgeDirection::LeftToRight => (left, right),
            HalfedgeDirection::RightToLeft => (right, left),
        };
        let new = dcel_operations::split_edge(&mut self.dcel, e, vertex, Some(first), Some(second));
        scope.after(|o| o.after_split_edge(self, e, new));
        e
    }

    /// Merges two edges sharing a common vertex of degree two into one edge carrying `cv`.
    ///
    /// The common vertex is removed. Returns the merged halfedge, directed like `e1` if `e1`
    /// points into the common vertex.
    pub fn merge_edge(
        &mut self,
        e1: FixedHalfedgeHandle,
        e2: FixedHalfedgeHandle,
        cv: T::Curve,
    ) -> FixedHalfedgeHandle {
        let shared = [self.dcel.target(e1), self.dcel.source(e1)]
            .into_iter()
            .find(|vertex| {
                *vertex == self.dcel.source(e2) || *vertex == self.dcel.target(e2)
            });
        let Some(shared) = shared else {
            panic!("merge_edge: edges do not share a vertex");
        };
        debug_assert_eq!(self.dcel.vertex_degree(shared), 2);
        debug_assert!(self.dcel.point(shared).is_some());

        let first = if self.dcel.target(e1) == shared { e1 } else { e1.twin() };
        let second = if self.dcel.source(e2) == shared { e2 } else { e2.twin() };
        trace!("merge_edge {:?} {:?}", first, second);

        let scope = self.notification_scope();
        scope.before(|o| o.before_merge_edge(self, e1, e2, &cv));
        dcel_operations::merge_edges(&mut self.dcel, first, second);
        self.dcel.vertices.remove(shared);
        self.dcel.edge_entry_mut(first.as_edge()).curve = Some(cv);
        scope.after(|o| o.after_merge_edge(self, first));
        first
    }

    pub(crate) fn create_finite_vertex(&mut self, p: T::Point) -> FixedVertexHandle {
        let scope = self.notification_scope();
        scope.before(|o| o.before_create_vertex(self, &p));
        let vertex = dcel_operations::create_vertex(
            &mut self.dcel,
            Some(p),
            BoundaryType::NoBoundary,
            BoundaryType::NoBoundary,
        );
        scope.after(|o| o.after_create_vertex(self, vertex));
        vertex
    }

    /// Makes the detached vertex `v` an isolated vertex of `f`.
    pub(crate) fn add_isolated_vertex(&mut self, f: FixedFaceHandle, v: FixedVertexHandle) {
        let scope = self.notification_scope();
        scope.before(|o| o.before_add_isolated_vertex(self, f, v));
        self.dcel.vertex_mut(v).connection = VertexConnection::Isolated(f);
        self.dcel.face_entry_mut(f).isolated_vertices.push(v);
        scope.after(|o| o.after_add_isolated_vertex(self, v));
    }

    /// Removes an isolated vertex from its face's list before an edge is attached to it.
    fn detach_isolated_vertex(&mut self, v: FixedVertexHandle) {
        if let VertexConnection::Isolated(face) = self.dcel.vertex(v).connection {
            remove_from_list(&mut self.dcel.face_entry_mut(face).isolated_vertices, v);
            self.dcel.vertex_mut(v).connection = VertexConnection::Detached;
        }
    }

    fn end_point(&self, cv: &T::Curve, end: CurveEnd) -> T::Point {
        match end {
            CurveEnd::Min => self.traits.construct_min_vertex(cv),
            CurveEnd::Max => self.traits.construct_max_vertex(cv),
        }
    }

    fn fictitious_edge_of(
        &self,
        cv: &T::Curve,
        end: CurveEnd,
        f: FixedFaceHandle,
    ) -> FixedHalfedgeHandle {
        let Some(fictitious) = self.locate_curve_end(cv, end, f) else {
            panic!("Unbounded curve end does not lie on the boundary of face {:?}", f);
        };
        fictitious
    }

    fn prev_around_vertex(
        &self,
        v: FixedVertexHandle,
        cv: &T::Curve,
        end: CurveEnd,
    ) -> FixedHalfedgeHandle {
        let Some(prev) = self.locate_around_vertex(v, cv, end) else {
            panic!("Cannot place curve around vertex {:?}", v);
        };
        prev
    }

    fn insert_with_free_ends(
        &mut self,
        cv: T::Curve,
        min_fictitious: Option<FixedHalfedgeHandle>,
        max_fictitious: Option<FixedHalfedgeHandle>,
    ) -> FixedHalfedgeHandle {
        let (min_infinite, max_infinite) =
            self.create_unbounded_ends(&cv, min_fictitious, max_fictitious);

        match (min_infinite, max_infinite) {
            (Some(min_vertex), Some(max_vertex)) => {
                // Both halves of the split fictitious edges end in the new vertices and lie
                // on the boundary of the face.
                let prev1 = self.fictitious_prev_of(min_vertex);
                let prev2 = self.fictitious_prev_of(max_vertex);
                self.insert_at_vertices_impl(cv, prev1, prev2, HalfedgeDirection::LeftToRight)
            }
            (Some(min_vertex), None) => {
                let max_vertex = self.create_finite_vertex(self.traits.construct_max_vertex(&cv));
                let prev = self.fictitious_prev_of(min_vertex);
                self.insert_from_vertex_impl(cv, prev, max_vertex, HalfedgeDirection::LeftToRight)
            }
            (None, Some(max_vertex)) => {
                let min_vertex = self.create_finite_vertex(self.traits.construct_min_vertex(&cv));
                let prev = self.fictitious_prev_of(max_vertex);
                self.insert_from_vertex_impl(cv, prev, min_vertex, HalfedgeDirection::RightToLeft)
                    .twin()
            }
            (None, None) => panic!("Curve has no unbounded end"),
        }
    }

    fn fictitious_prev_of(&self, vertex: FixedVertexHandle) -> FixedHalfedgeHandle {
        let Some(prev) = self.fictitious_prev(vertex) else {
            panic!("Vertex at infinity {:?} is not on a face boundary", vertex);
        };
        prev
    }

    fn insert_from_vertex(
        &mut self,
        cv: T::Curve,
        v: FixedVertexHandle,
        end_at_v: CurveEnd,
    ) -> FixedHalfedgeHandle {
        let VertexConnection::Isolated(face) = self.dcel.vertex(v).connection else {
            let prev = self.prev_around_vertex(v, &cv, end_at_v);
            return self.insert_from_vertex_with_prev(cv, prev, end_at_v);
        };

        self.detach_isolated_vertex(v);
        let free_end = end_at_v.opposite();
        if self.traits.is_bounded_end(&cv, free_end) {
            let other = self.create_finite_vertex(self.end_point(&cv, free_end));
            return match end_at_v {
                CurveEnd::Min => self.insert_in_face_interior_impl(cv, face, v, other),
                CurveEnd::Max => self.insert_in_face_interior_impl(cv, face, other, v).twin(),
            };
        }

        let fictitious = self.fictitious_edge_of(&cv, free_end, face);
        self.split_fictitious_edge(&cv, free_end, fictitious);
        // `fictitious` now ends in the new vertex at infinity.
        self.insert_from_vertex_impl(cv, fictitious, v, direction_from(free_end))
            .twin()
    }

    fn insert_from_vertex_with_prev(
        &mut self,
        cv: T::Curve,
        prev: FixedHalfedgeHandle,
        end_at_anchor: CurveEnd,
    ) -> FixedHalfedgeHandle {
        let free_end = end_at_anchor.opposite();
        if self.traits.is_bounded_end(&cv, free_end) {
            let new_vertex = self.create_finite_vertex(self.end_point(&cv, free_end));
            return self.insert_from_vertex_impl(cv, prev, new_vertex, direction_from(end_at_anchor));
        }
        let face = self.dcel.face_of(prev);
        let fictitious = self.fictitious_edge_of(&cv, free_end, face);
        self.insert_to_fictitious(cv, prev, fictitious, end_at_anchor)
    }

    fn insert_to_fictitious(
        &mut self,
        cv: T::Curve,
        prev: FixedHalfedgeHandle,
        fictitious: FixedHalfedgeHandle,
        end_at_anchor: CurveEnd,
    ) -> FixedHalfedgeHandle {
        debug_assert!(self.dcel.is_fictitious(fictitious));
        self.split_fictitious_edge(&cv, end_at_anchor.opposite(), fictitious);
        self.insert_at_vertices_impl(cv, prev, fictitious, direction_from(end_at_anchor))
    }

    /// Creates a new hole of `f` consisting of a single edge between two detached vertices.
    ///
    /// `v1` must be the minimal end of `cv`. Returns the halfedge `v1 -> v2`.
    fn insert_in_face_interior_impl(
        &mut self,
        cv: T::Curve,
        f: FixedFaceHandle,
        v1: FixedVertexHandle,
        v2: FixedVertexHandle,
    ) -> FixedHalfedgeHandle {
        let scope = self.notification_scope();
        scope.before(|o| o.before_create_edge(self, &cv, v1, v2));
        let placeholder = Incidence::Outer(f);
        let halfedge = dcel_operations::create_edge(
            &mut self.dcel,
            Some(cv),
            v1,
            v2,
            HalfedgeDirection::LeftToRight,
            placeholder,
            placeholder,
        );
        let hole = self.dcel.holes.insert(HoleEntry { face: f, halfedge });
        dcel_operations::set_ccb_incidence(&mut self.dcel, halfedge, Incidence::Inner(hole));
        self.dcel.vertex_mut(v1).connection = VertexConnection::Incident(halfedge.twin());
        self.dcel.vertex_mut(v2).connection = VertexConnection::Incident(halfedge);
        scope.after(|o| o.after_create_edge(self, halfedge));

        scope.before(|o| o.before_add_hole(self, f, halfedge));
        self.dcel.face_entry_mut(f).holes.push(hole);
        scope.after(|o| o.after_add_hole(self, halfedge));
        halfedge
    }

    /// Connects the target `v` of `prev` with the detached vertex `new_vertex`.
    ///
    /// ```text
    ///          prev          halfedge
    ///   ... ---------> v ---------------> new_vertex
    ///                    <---------------
    ///                        twin
    /// ```
    ///
    /// `direction` is the direction of the returned halfedge `v -> new_vertex`.
    fn insert_from_vertex_impl(
        &mut self,
        cv: T::Curve,
        prev: FixedHalfedgeHandle,
        new_vertex: FixedVertexHandle,
        direction: HalfedgeDirection,
    ) -> FixedHalfedgeHandle {
        let v = self.dcel.target(prev);
        let incidence = self.dcel.incidence(prev);
        let old_next = self.dcel.next(prev);

        let scope = self.notification_scope();
        scope.before(|o| o.before_create_edge(self, &cv, v, new_vertex));
        let halfedge = dcel_operations::create_edge(
            &mut self.dcel,
            Some(cv),
            v,
            new_vertex,
            direction,
            incidence,
            incidence,
        );
        link(&mut self.dcel, prev, halfedge);
        link(&mut self.dcel, halfedge.twin(), old_next);
        self.dcel.vertex_mut(new_vertex).connection = VertexConnection::Incident(halfedge);
        scope.after(|o| o.after_create_edge(self, halfedge));
        halfedge
    }

    /// Connects the targets of `prev1` and `prev2` by a new edge.
    ///
    /// ```text
    ///   prev1          halfedge            prev2
    ///  ------> v1 ----------------------> v2 <------
    ///             <----------------------
    ///                      twin
    /// ```
    ///
    /// The new halfedge `v1 -> v2` continues with the old successor of `prev2`, its twin
    /// with the old successor of `prev1`. `direction` is the direction of `v1 -> v2`.
    fn insert_at_vertices_impl(
        &mut self,
        cv: T::Curve,
        prev1: FixedHalfedgeHandle,
        prev2: FixedHalfedgeHandle,
        direction: HalfedgeDirection,
    ) -> FixedHalfedgeHandle {
        let v1 = self.dcel.target(prev1);
        let v2 = self.dcel.target(prev2);
        let next1 = self.dcel.next(prev1);
        let next2 = self.dcel.next(prev2);
        let incidence1 = self.dcel.incidence(prev1);
        let incidence2 = self.dcel.incidence(prev2);
        let face = self.dcel.face_of(prev1);
        debug_assert_eq!(face, self.dcel.face_of(prev2), "Vertices lie in different faces");

        let scope = self.notification_scope();
        scope.before(|o| o.before_create_edge(self, &cv, v1, v2));
        let halfedge = dcel_operations::create_edge(
            &mut self.dcel,
            Some(cv),
            v1,
            v2,
            direction,
            incidence1,
            incidence1,
        );
        let twin = halfedge.twin();
        link(&mut self.dcel, prev1, halfedge);
        link(&mut self.dcel, halfedge, next2);
        link(&mut self.dcel, prev2, twin);
        link(&mut self.dcel, twin, next1);
        scope.after(|o| o.after_create_edge(self, halfedge));

        match (incidence1, incidence2) {
            (Incidence::Inner(hole1), Incidence::Inner(hole2)) if hole1 != hole2 => {
                let rep1 = self.dcel.hole(hole1).halfedge;
                let rep2 = self.dcel.hole(hole2).halfedge;
                scope.before(|o| o.before_merge_hole(self, face, rep1, rep2, halfedge));
                dcel_operations::set_ccb_incidence(&mut self.dcel, halfedge, Incidence::Inner(hole1));
                remove_from_list(&mut self.dcel.face_entry_mut(face).holes, hole2);
                self.dcel.holes.remove(hole2);
                trace!("Merged holes {:?} and {:?}", hole1, hole2);
                scope.after(|o| o.after_merge_hole(self, face, rep1));
            }
            (Incidence::Inner(hole), Incidence::Outer(_))
            | (Incidence::Outer(_), Incidence::Inner(hole)) => {
                let rep = self.dcel.hole(hole).halfedge;
                scope.before(|o| o.before_remove_hole(self, face, rep));
                dcel_operations::set_ccb_incidence(&mut self.dcel, halfedge, Incidence::Outer(face));
                remove_from_list(&mut self.dcel.face_entry_mut(face).holes, hole);
                self.dcel.holes.remove(hole);
                trace!("Connected hole {:?} to the outer boundary of {:?}", hole, face);
                scope.after(|o| o.after_remove_hole(self, face));
            }
            _ => {
                debug_assert_eq!(incidence1, incidence2);
                self.split_face(face, halfedge, incidence1);
            }
        }
        halfedge
    }

    /// Splits `face` after `halfedge` closed a cycle on the boundary with the given
    /// incidence.
    fn split_face(&mut self, face: FixedFaceHandle, halfedge: FixedHalfedgeHandle, incidence: Incidence) {
        let twin = halfedge.twin();
        let scope = self.notification_scope();
        scope.before(|o| o.before_split_face(self, face, halfedge));

        let new_face = dcel_operations::new_face(&mut self.dcel);
        let (new_cycle, old_cycle, split_hole) = match incidence {
            Incidence::Outer(_) => {
                let keep_forward = ccb_has_fictitious(&self.dcel, halfedge)
                    && !ccb_has_fictitious(&self.dcel, twin);
                if keep_forward {
                    (twin, halfedge, None)
                } else {
                    (halfedge, twin, None)
                }
            }
            Incidence::Inner(hole) => {
                if self.is_ccb_ccw(halfedge) {
                    (halfedge, twin, Some(hole))
                } else {
                    (twin, halfedge, Some(hole))
                }
            }
        };

        dcel_operations::set_ccb_incidence(&mut self.dcel, new_cycle, Incidence::Outer(new_face));
        let new_is_unbounded = ccb_has_fictitious(&self.dcel, new_cycle);
        {
            let entry = self.dcel.face_entry_mut(new_face);
            entry.outer_ccb = Some(new_cycle);
            entry.unbounded = new_is_unbounded;
        }
        match split_hole {
            Some(hole) => self.dcel.hole_mut(hole).halfedge = old_cycle,
            None => {
                let old_is_unbounded = ccb_has_fictitious(&self.dcel, old_cycle);
                let entry = self.dcel.face_entry_mut(face);
                entry.outer_ccb = Some(old_cycle);
                entry.unbounded = old_is_unbounded;
            }
        }
        debug!("Split face {:?}, created {:?}", face, new_face);
        let is_hole = split_hole.is_some();
        scope.after(|o| o.after_split_face(self, face, new_face, is_hole));

        self.relocate_in_new_face(face, new_face, split_hole);
    }
}
