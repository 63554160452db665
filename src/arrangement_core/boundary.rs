use std::cmp::Ordering;

use log::debug;

use super::dcel_operations::{self, ccb};
use super::handles::*;
use crate::{Arrangement, ArrangementTraits, CurveEnd};

impl<T: ArrangementTraits> Arrangement<T> {
    /// Finds the fictitious halfedge on the outer boundary of `face` whose interior contains
    /// the unbounded end `end` of `cv`.
    pub(crate) fn locate_curve_end(
        &self,
        cv: &T::Curve,
        end: CurveEnd,
        face: FixedFaceHandle,
    ) -> Option<FixedHalfedgeHandle> {
        let outer = self.dcel.outer_ccb(face)?;
        ccb(&self.dcel, outer)
            .filter(|halfedge| self.dcel.is_fictitious(*halfedge))
            .find(|halfedge| self.is_in_fictitious_edge(cv, end, *halfedge))
    }

    /// Returns `true` if the unbounded end `end` of `cv` lies in the interior of the
    /// fictitious halfedge `halfedge`.
    ///
    /// An end coinciding with an existing vertex at infinity violates the precondition that
    /// curves are interior disjoint.
    pub(crate) fn is_in_fictitious_edge(
        &self,
        cv: &T::Curve,
        end: CurveEnd,
        halfedge: FixedHalfedgeHandle,
    ) -> bool {
        match self.locate_on_fictitious_edge(cv, end, halfedge) {
            Some((at_source, at_target)) => {
                debug_assert!(
                    at_source != Ordering::Equal && at_target != Ordering::Equal,
                    "unbounded curve end coincides with an existing vertex at infinity"
                );
                at_source != at_target
            }
            None => false,
        }
    }

    /// Returns the fictitious halfedge pointing into the vertex at infinity `vertex` that lies
    /// on the boundary of a real face.
    pub(crate) fn fictitious_prev(&self, vertex: FixedVertexHandle) -> Option<FixedHalfedgeHandle> {
        self.vertex(vertex)
            .incident_halfedges()
            .find(|halfedge| halfedge.is_fictitious() && !halfedge.face().is_fictitious())
            .map(|halfedge| halfedge.fix())
    }

    /// Creates a vertex at infinity for the unbounded end `end` of `cv` and splits the
    /// fictitious halfedge `halfedge` there.
    ///
    /// Returns the new vertex. It is incident to the two halves of `halfedge` and nothing else.
    pub(crate) fn split_fictitious_edge(
        &mut self,
        cv: &T::Curve,
        end: CurveEnd,
        halfedge: FixedHalfedgeHandle,
    ) -> FixedVertexHandle {
        debug_assert!(self.dcel.is_fictitious(halfedge));
        let ps_x = self.traits.parameter_space_in_x(cv, end);
        let ps_y = self.traits.parameter_space_in_y(cv, end);

        let scope = self.notification_scope();
        scope.before(|o| o.before_create_vertex_at_infinity(self, ps_x, ps_y));
        let vertex = dcel_operations::create_vertex(&mut self.dcel, None, ps_x, ps_y);
        self.n_inf_verts += 1;
        scope.after(|o| o.after_create_vertex_at_infinity(self, vertex));

        scope.before(|o| o.before_split_fictitious_edge(self, halfedge, vertex));
        let new = dcel_operations::split_edge(&mut self.dcel, halfedge, vertex, None, None);
        debug!(
            "Created vertex at infinity {:?} ({:?}, {:?})",
            vertex, ps_x, ps_y
        );
        scope.after(|o| o.after_split_fictitious_edge(self, halfedge, new));
        vertex
    }

    /// Creates the vertices at infinity for the unbounded ends of `cv`.
    ///
    /// `min_fictitious` and `max_fictitious` are the fictitious halfedges containing the
    /// respective ends, `None` for bounded ends. Both ends may lie on the same fictitious
    /// halfedge, in which case the half containing the maximal end is determined after the
    /// first split.
    pub(crate) fn create_unbounded_ends(
        &mut self,
        cv: &T::Curve,
        min_fictitious: Option<FixedHalfedgeHandle>,
        max_fictitious: Option<FixedHalfedgeHandle>,
    ) -> (Option<FixedVertexHandle>, Option<FixedVertexHandle>) {
        // The source comparison must be taken before the first split detaches anything.
        let max_vs_source = max_fictitious
            .and_then(|halfedge| self.locate_on_fictitious_edge(cv, CurveEnd::Max, halfedge))
            .map(|(at_source, _)| at_source);

        let min_vertex =
            min_fictitious.map(|halfedge| self.split_fictitious_edge(cv, CurveEnd::Min, halfedge));

        let max_vertex = max_fictitious.map(|mut halfedge| {
            if min_fictitious == Some(halfedge) && max_vs_source != Some(Ordering::Less) {
                // The maximal end lies beyond the new vertex, on the second half.
                halfedge = self.dcel.next(halfedge);
            }
            self.split_fictitious_edge(cv, CurveEnd::Max, halfedge)
        });
        (min_vertex, max_vertex)
    }

    /// Removes a vertex at infinity that lost its curve, merging its two fictitious edges.
    pub(crate) fn remove_vertex_at_infinity(&mut self, vertex: FixedVertexHandle) {
        debug_assert_eq!(self.dcel.vertex_degree(vertex), 2);
        debug_assert!(!self.corners.contains(vertex));

        let Some(first) = self.dcel.vertex_halfedge(vertex) else {
            return;
        };
        let second = self.dcel.next(first);

        let scope = self.notification_scope();
        scope.before(|o| o.before_merge_fictitious_edge(self, first, second));
        dcel_operations::merge_edges(&mut self.dcel, first, second);
        scope.after(|o| o.after_merge_fictitious_edge(self, first));

        scope.before(|o| o.before_remove_vertex_at_infinity(self, vertex));
        self.dcel.vertices.remove(vertex);
        self.n_inf_verts -= 1;
        debug!("Removed vertex at infinity {:?}", vertex);
        scope.after(|o| o.after_remove_vertex_at_infinity(self));
    }
}
