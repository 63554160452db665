use super::super::dcel::{Incidence, VertexConnection};
use super::handle_defs::*;
use super::iterators::{
    CcbIterator, CircularIterator, HoleIterator, IsolatedVertexIterator, VertexHalfedgeIterator,
};
use super::public_handles::*;
use crate::{ArrangementTraits, BoundaryType, HalfedgeDirection};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

// Debug implementations
impl<'a, T: ArrangementTraits> Debug for VertexHandle<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "VertexHandle({:?})", self.handle)
    }
}

impl<'a, T: ArrangementTraits> Debug for HalfedgeHandle<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "HalfedgeHandle - id: {:?} ({:?} -> {:?})",
            self.handle,
            self.source().fix(),
            self.target().fix()
        )
    }
}

impl<'a, T: ArrangementTraits> Debug for FaceHandle<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_fictitious() {
            write!(f, "FictitiousFace({:?})", self.handle)
        } else {
            write!(f, "FaceHandle({:?})", self.handle)
        }
    }
}

impl<'a, T: ArrangementTraits, Handle: Copy> Clone for DynamicHandleImpl<'a, T, Handle> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ArrangementTraits, Handle: Copy> Copy for DynamicHandleImpl<'a, T, Handle> {}

impl<'a, T: ArrangementTraits, Handle: PartialEq> PartialEq for DynamicHandleImpl<'a, T, Handle> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<'a, T: ArrangementTraits, Handle: Eq> Eq for DynamicHandleImpl<'a, T, Handle> {}

impl<'a, T: ArrangementTraits, Handle: Hash> Hash for DynamicHandleImpl<'a, T, Handle> {
    fn hash<HA: Hasher>(&self, state: &mut HA) {
        self.handle.hash(state);
    }
}

impl<'a, T: ArrangementTraits, Handle: Ord> Ord for DynamicHandleImpl<'a, T, Handle> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.handle.cmp(&other.handle)
    }
}

impl<'a, T: ArrangementTraits, Handle: PartialOrd> PartialOrd
    for DynamicHandleImpl<'a, T, Handle>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.handle.partial_cmp(&other.handle)
    }
}

impl<'a, T: ArrangementTraits, Handle: Copy> DynamicHandleImpl<'a, T, Handle> {
    /// Converts this dynamic handle to its fixed variant.
    ///
    /// Fixed handles do not borrow the arrangement and can be passed to its modifying
    /// methods.
    ///
    /// *See also the [handles module](crate::handles)*
    pub fn fix(&self) -> Handle {
        self.handle
    }
}

impl<'a, T: ArrangementTraits> VertexHandle<'a, T> {
    /// Returns the vertex's point.
    ///
    /// Returns `None` for vertices at infinity.
    pub fn point(&self) -> Option<&'a T::Point> {
        self.dcel.point(self.handle)
    }

    /// Returns where the vertex lies in the x dimension of the parameter space.
    pub fn parameter_space_in_x(&self) -> BoundaryType {
        self.dcel.vertex(self.handle).ps_x
    }

    /// Returns where the vertex lies in the y dimension of the parameter space.
    pub fn parameter_space_in_y(&self) -> BoundaryType {
        self.dcel.vertex(self.handle).ps_y
    }

    /// Returns `true` if this vertex is an unbounded curve end.
    pub fn is_at_open_boundary(&self) -> bool {
        self.dcel.vertex(self.handle).is_at_infinity()
    }

    /// Returns `true` for the four corners of the fictitious rectangle.
    pub fn is_fictitious(&self) -> bool {
        self.dcel.vertex(self.handle).is_corner()
    }

    /// Returns `true` if the vertex has no incident edges.
    pub fn is_isolated(&self) -> bool {
        matches!(
            self.dcel.vertex(self.handle).connection,
            VertexConnection::Isolated(_)
        )
    }

    /// Returns the number of edges incident to this vertex.
    ///
    /// Vertices at infinity also count their fictitious edges.
    pub fn degree(&self) -> usize {
        self.dcel.vertex_degree(self.handle)
    }

    /// Returns the face containing an isolated vertex.
    ///
    /// Returns `None` if the vertex is not isolated.
    pub fn face(&self) -> Option<FaceHandle<'a, T>> {
        match self.dcel.vertex(self.handle).connection {
            VertexConnection::Isolated(face) => Some(DynamicHandleImpl::new(self.dcel, face)),
            _ => None,
        }
    }

    /// Returns an arbitrary halfedge pointing into this vertex.
    pub fn incoming_halfedge(&self) -> Option<HalfedgeHandle<'a, T>> {
        self.dcel
            .vertex_halfedge(self.handle)
            .map(|halfedge| DynamicHandleImpl::new(self.dcel, halfedge))
    }

    /// Iterates over all halfedges pointing into this vertex in clockwise order.
    ///
    /// The iterator is empty for isolated vertices.
    pub fn incident_halfedges(&self) -> VertexHalfedgeIterator<'a, T> {
        match self.incoming_halfedge() {
            Some(halfedge) => CircularIterator::new(halfedge),
            None => CircularIterator::new_empty(),
        }
    }
}

impl<'a, T: ArrangementTraits> HalfedgeHandle<'a, T> {
    /// Returns the vertex this halfedge starts in.
    pub fn source(&self) -> VertexHandle<'a, T> {
        DynamicHandleImpl::new(self.dcel, self.dcel.source(self.handle))
    }

    /// Returns the vertex this halfedge points to.
    pub fn target(&self) -> VertexHandle<'a, T> {
        DynamicHandleImpl::new(self.dcel, self.dcel.target(self.handle))
    }

    /// Returns the oppositely directed twin halfedge.
    pub fn twin(&self) -> Self {
        DynamicHandleImpl::new(self.dcel, self.handle.twin())
    }

    /// Returns the successor of this halfedge along its boundary cycle.
    pub fn next(&self) -> Self {
        DynamicHandleImpl::new(self.dcel, self.dcel.next(self.handle))
    }

    /// Returns the predecessor of this halfedge along its boundary cycle.
    pub fn prev(&self) -> Self {
        DynamicHandleImpl::new(self.dcel, self.dcel.prev(self.handle))
    }

    /// Returns the face to the left of this halfedge.
    pub fn face(&self) -> FaceHandle<'a, T> {
        DynamicHandleImpl::new(self.dcel, self.dcel.face_of(self.handle))
    }

    /// Returns the curve associated with this halfedge's edge.
    ///
    /// Both twins share the same curve. Returns `None` for fictitious halfedges.
    pub fn curve(&self) -> Option<&'a T::Curve> {
        self.dcel.curve(self.handle)
    }

    /// Returns `true` if this halfedge is part of the fictitious bounding rectangle.
    pub fn is_fictitious(&self) -> bool {
        self.dcel.is_fictitious(self.handle)
    }

    /// Returns whether this halfedge points from the lexicographically smaller end of its
    /// curve to the larger one.
    pub fn direction(&self) -> HalfedgeDirection {
        self.dcel.direction(self.handle)
    }

    /// Returns `true` if the halfedge lies on a hole of its face rather than on its outer
    /// boundary.
    pub fn is_on_hole(&self) -> bool {
        matches!(self.dcel.incidence(self.handle), Incidence::Inner(_))
    }

    /// Iterates over the boundary cycle containing this halfedge, starting with itself.
    pub fn ccb(&self) -> CcbIterator<'a, T> {
        CircularIterator::new(*self)
    }

    /// Returns the edge this halfedge belongs to.
    pub fn as_edge(&self) -> FixedEdgeHandle {
        self.handle.as_edge()
    }
}

impl<'a, T: ArrangementTraits> FaceHandle<'a, T> {
    /// Returns `true` if the face is unbounded.
    pub fn is_unbounded(&self) -> bool {
        self.dcel.face_entry(self.handle).unbounded
    }

    /// Returns `true` for the face outside the fictitious bounding rectangle.
    ///
    /// This face is never reported by [faces](crate::Arrangement::faces).
    pub fn is_fictitious(&self) -> bool {
        self.dcel.face_entry(self.handle).fictitious
    }

    /// Returns a representative halfedge of the face's outer boundary.
    ///
    /// Returns `None` only for the unbounded face of an arrangement without fictitious
    /// rectangle and for the fictitious face.
    pub fn outer_ccb(&self) -> Option<HalfedgeHandle<'a, T>> {
        self.dcel
            .outer_ccb(self.handle)
            .map(|halfedge| DynamicHandleImpl::new(self.dcel, halfedge))
    }

    /// Iterates over the outer boundary of this face.
    ///
    /// The iterator is empty if the face has no outer boundary.
    pub fn outer_ccb_iter(&self) -> CcbIterator<'a, T> {
        match self.outer_ccb() {
            Some(halfedge) => halfedge.ccb(),
            None => CircularIterator::new_empty(),
        }
    }

    /// Iterates over the holes of this face, yielding a representative halfedge per hole.
    pub fn holes(&self) -> HoleIterator<'a, T> {
        HoleIterator::new(self.dcel, self.handle)
    }

    /// Returns the number of holes of this face.
    pub fn number_of_holes(&self) -> usize {
        self.dcel.face_entry(self.handle).holes.len()
    }

    /// Iterates over the isolated vertices lying in the interior of this face.
    pub fn isolated_vertices(&self) -> IsolatedVertexIterator<'a, T> {
        IsolatedVertexIterator::new(self.dcel, self.handle)
    }

    /// Returns the number of isolated vertices lying in this face.
    pub fn number_of_isolated_vertices(&self) -> usize {
        self.dcel.face_entry(self.handle).isolated_vertices.len()
    }
}
