use std::rc::Rc;

use log::trace;

use crate::arrangement_core::dcel_operations::{self, Corners};
use crate::arrangement_core::iterators::{
    EdgeIterator, FaceIterator, HalfedgeIterator, VertexIterator,
};
use crate::arrangement_core::Dcel;
use crate::handles::*;
use crate::observer::{NotificationScope, SharedObserver};
use crate::ArrangementTraits;

/// A planar arrangement of x-monotone curves, stored as a doubly connected edge list.
///
/// The arrangement subdivides the plane into vertices, edges and faces. Curves are inserted
/// and removed incrementally through the `insert_*` and `remove_*` methods, each of which
/// keeps the subdivision consistent: splitting a face relocates the holes and isolated
/// vertices it contained, removing an edge merges the faces on both sides.
///
/// # Fictitious boundary
///
/// Every arrangement is enclosed by a rectangle of four fictitious corner vertices and
/// fictitious edges "at infinity". The region inside the rectangle and outside every
/// curve is the *unbounded face*. The region outside the rectangle is the *fictitious face*,
/// which is never reported by [faces](Arrangement::faces). Unbounded curve ends (rays and
/// lines, see [LinearTraits](crate::LinearTraits)) end in *vertices at infinity* that split
/// the fictitious edges.
///
/// None of this scaffolding is visible in the counters: an empty arrangement reports zero
/// vertices, zero edges and exactly one face.
///
/// # Handles
///
/// Mutating methods take and return *fixed handles*. They can be turned into *dynamic
/// handles* for navigation with [vertex](Arrangement::vertex),
/// [halfedge](Arrangement::halfedge) and [face](Arrangement::face). See the
/// [handles](crate::handles) module.
///
/// # Preconditions
///
/// The arrangement never checks geometric preconditions in release builds. Passing a curve
/// that intersects an existing curve in its interior, or a vertex that is not the curve's
/// endpoint, leaves the arrangement in an unspecified state. Debug builds check the
/// cheaper preconditions with `debug_assert!`. Use [validate](Arrangement::validate) to
/// audit the structure.
///
/// # Example
/// ```
/// use arrangement::{Arrangement, Point2, Segment, SegmentTraits};
///
/// let mut arrangement = Arrangement::<SegmentTraits<f64>>::new();
/// let p0 = Point2::new(0.0, 0.0);
/// let p1 = Point2::new(2.0, 0.0);
/// let p2 = Point2::new(1.0, 2.0);
///
/// let unbounded = arrangement.unbounded_face().fix();
/// let e0 = arrangement.insert_in_face_interior(Segment::new(p0, p1), unbounded);
/// let v0 = arrangement.halfedge(e0).source().fix();
/// let v1 = arrangement.halfedge(e0).target().fix();
/// let e1 = arrangement.insert_from_right_vertex(Segment::new(p1, p2), v1);
/// let v2 = arrangement.halfedge(e1).target().fix();
/// arrangement.insert_at_vertices(Segment::new(p0, p2), v0, v2);
///
/// assert_eq!(arrangement.number_of_vertices(), 3);
/// assert_eq!(arrangement.number_of_edges(), 3);
/// assert_eq!(arrangement.number_of_faces(), 2);
/// assert!(arrangement.is_valid());
/// ```
pub struct Arrangement<T: ArrangementTraits> {
    pub(crate) dcel: Dcel<T::Point, T::Curve>,
    pub(crate) traits: T,
    pub(crate) corners: Corners,
    pub(crate) fictitious_face: FixedFaceHandle,
    /// Number of vertices without a point, including the four corners.
    pub(crate) n_inf_verts: usize,
    observers: Vec<SharedObserver<T>>,
}

impl<T: ArrangementTraits + Default> Default for Arrangement<T> {
    fn default() -> Self {
        Self::with_traits(T::default())
    }
}

impl<T: ArrangementTraits + Clone> Clone for Arrangement<T> {
    /// Clones the arrangement without its observers.
    ///
    /// Fixed handles of `self` refer to the corresponding elements of the clone.
    fn clone(&self) -> Self {
        Arrangement {
            dcel: self.dcel.clone(),
            traits: self.traits.clone(),
            corners: self.corners,
            fictitious_face: self.fictitious_face,
            n_inf_verts: self.n_inf_verts,
            observers: Vec::new(),
        }
    }
}

impl<T: ArrangementTraits> std::fmt::Debug for Arrangement<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arrangement")
            .field("vertices", &self.number_of_vertices())
            .field("vertices_at_infinity", &self.number_of_vertices_at_infinity())
            .field("edges", &self.number_of_edges())
            .field("faces", &self.number_of_faces())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T: ArrangementTraits + Default> Arrangement<T> {
    /// Creates an empty arrangement using the default traits object.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: ArrangementTraits> Arrangement<T> {
    /// Creates an empty arrangement that consults `traits` for all geometric predicates.
    pub fn with_traits(traits: T) -> Self {
        let mut dcel = Dcel::default();
        let scaffold = dcel_operations::new_scaffold(&mut dcel);
        Arrangement {
            dcel,
            traits,
            corners: scaffold.corners,
            fictitious_face: scaffold.fictitious_face,
            n_inf_verts: 4,
            observers: Vec::new(),
        }
    }

    /// Returns the geometry traits used by this arrangement.
    pub fn traits(&self) -> &T {
        &self.traits
    }

    pub(crate) fn notification_scope(&self) -> NotificationScope<T> {
        NotificationScope::new(&self.observers)
    }

    // Observers

    /// Registers an observer.
    ///
    /// The observer's `before_attach` and `after_attach` hooks are invoked around the
    /// registration. The arrangement only holds a shared reference; the observer stays owned
    /// by the caller.
    pub fn register_observer(&mut self, observer: SharedObserver<T>) {
        observer.borrow_mut().before_attach(self);
        self.observers.push(observer.clone());
        observer.borrow_mut().after_attach(self);
    }

    /// Unregisters an observer that was previously passed to
    /// [register_observer](Arrangement::register_observer).
    ///
    /// Returns `false` if the observer is not registered.
    pub fn unregister_observer(&mut self, observer: &SharedObserver<T>) -> bool {
        let Some(index) = self
            .observers
            .iter()
            .position(|registered| Rc::ptr_eq(registered, observer))
        else {
            return false;
        };
        observer.borrow_mut().before_detach(self);
        self.observers.remove(index);
        observer.borrow_mut().after_detach(self);
        true
    }

    /// Returns the number of registered observers.
    pub fn number_of_observers(&self) -> usize {
        self.observers.len()
    }

    // Global operations

    /// Removes all curves and vertices, leaving an empty arrangement.
    ///
    /// Observers stay registered. All handles are invalidated.
    pub fn clear(&mut self) {
        let scope = self.notification_scope();
        scope.before(|o| o.before_clear(self));
        trace!("clear");
        self.dcel.clear();
        let scaffold = dcel_operations::new_scaffold(&mut self.dcel);
        self.corners = scaffold.corners;
        self.fictitious_face = scaffold.fictitious_face;
        self.n_inf_verts = 4;
        scope.after(|o| o.after_clear(self));
    }

    /// Replaces the contents of this arrangement with a copy of `other`.
    ///
    /// The observers of `self` stay registered and are notified; the observers of `other`
    /// are not copied. Fixed handles of `other` refer to the corresponding elements of `self`
    /// afterwards.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        let scope = self.notification_scope();
        scope.before(|o| o.before_assign(self, other));
        trace!("assign");
        self.dcel = other.dcel.clone();
        self.traits = other.traits.clone();
        self.corners = other.corners;
        self.fictitious_face = other.fictitious_face;
        self.n_inf_verts = other.n_inf_verts;
        scope.after(|o| o.after_assign(self));
    }

    // Accessors

    /// Creates a dynamic vertex handle from a fixed vertex handle.
    ///
    /// May panic if the handle was not obtained from this arrangement or if its vertex was
    /// removed.
    pub fn vertex(&self, handle: FixedVertexHandle) -> VertexHandle<'_, T> {
        DynamicHandleImpl::new(&self.dcel, handle)
    }

    /// Creates a dynamic halfedge handle from a fixed halfedge handle.
    pub fn halfedge(&self, handle: FixedHalfedgeHandle) -> HalfedgeHandle<'_, T> {
        DynamicHandleImpl::new(&self.dcel, handle)
    }

    /// Creates a dynamic face handle from a fixed face handle.
    pub fn face(&self, handle: FixedFaceHandle) -> FaceHandle<'_, T> {
        DynamicHandleImpl::new(&self.dcel, handle)
    }

    /// Returns `true` if the handle refers to a vertex of this arrangement.
    pub fn contains_vertex(&self, handle: FixedVertexHandle) -> bool {
        self.dcel.contains_vertex(handle)
    }

    /// Returns `true` if the handle refers to a halfedge of this arrangement.
    pub fn contains_halfedge(&self, handle: FixedHalfedgeHandle) -> bool {
        self.dcel.contains_halfedge(handle)
    }

    /// Returns `true` if the handle refers to a face of this arrangement.
    pub fn contains_face(&self, handle: FixedFaceHandle) -> bool {
        self.dcel.contains_face(handle)
    }

    /// Returns the unbounded face.
    ///
    /// This is the face incident to the top left corner of the fictitious rectangle. For
    /// arrangements of bounded curves it is the only unbounded face.
    pub fn unbounded_face(&self) -> FaceHandle<'_, T> {
        self.face(self.unbounded_face_handle())
    }

    pub(crate) fn unbounded_face_handle(&self) -> FixedFaceHandle {
        // The top left corner has degree two: one incoming halfedge on the inner side of
        // the rectangle and one on the fictitious face's side.
        let incoming = self
            .vertex(self.corners.top_left)
            .incident_halfedges()
            .map(|halfedge| halfedge.face().fix())
            .find(|face| *face != self.fictitious_face);
        incoming.unwrap_or(self.fictitious_face)
    }

    /// Returns the fictitious face enclosing the fictitious rectangle.
    pub fn fictitious_face(&self) -> FaceHandle<'_, T> {
        self.face(self.fictitious_face)
    }

    // Counters

    /// Returns the number of vertices with a finite point, isolated vertices included.
    pub fn number_of_vertices(&self) -> usize {
        self.dcel.num_vertices() - self.n_inf_verts
    }

    /// Returns the number of vertices at infinity, i.e. the number of unbounded curve ends.
    ///
    /// The four fictitious corners are not counted.
    pub fn number_of_vertices_at_infinity(&self) -> usize {
        self.n_inf_verts - 4
    }

    /// Returns the number of vertices without incident edges.
    pub fn number_of_isolated_vertices(&self) -> usize {
        self.vertices().filter(|vertex| vertex.is_isolated()).count()
    }

    /// Returns the number of halfedges associated with curves. This is always twice the
    /// number of edges.
    pub fn number_of_halfedges(&self) -> usize {
        2 * self.number_of_edges()
    }

    /// Returns the number of edges associated with curves.
    ///
    /// The fictitious rectangle has four edges, and every vertex at infinity splits one of
    /// them into two.
    pub fn number_of_edges(&self) -> usize {
        self.dcel.num_edges() - self.n_inf_verts
    }

    /// Returns the number of faces, excluding the fictitious face.
    pub fn number_of_faces(&self) -> usize {
        self.dcel.num_faces() - 1
    }

    /// Returns the number of unbounded faces.
    pub fn number_of_unbounded_faces(&self) -> usize {
        self.unbounded_faces().count()
    }

    /// Returns `true` if the arrangement contains neither vertices nor edges.
    pub fn is_empty(&self) -> bool {
        self.dcel.num_vertices() == 4 && self.dcel.num_halfedges() == 8
    }

    // Iterators

    /// Iterates over all vertices, including vertices at infinity and the four fictitious
    /// corners.
    pub fn all_vertices(&self) -> VertexIterator<'_, T> {
        VertexIterator::new(&self.dcel, |_| true)
    }

    /// Iterates over all vertices with a finite point.
    pub fn vertices(&self) -> VertexIterator<'_, T> {
        VertexIterator::new(&self.dcel, |vertex| !vertex.is_at_infinity())
    }

    /// Iterates over all vertices at infinity, excluding the four fictitious corners.
    pub fn vertices_at_infinity(&self) -> VertexIterator<'_, T> {
        VertexIterator::new(&self.dcel, |vertex| {
            vertex.is_at_infinity() && !vertex.is_corner()
        })
    }

    /// Iterates over all halfedges, including the fictitious ones.
    pub fn all_halfedges(&self) -> HalfedgeIterator<'_, T> {
        HalfedgeIterator::new(EdgeIterator::new(&self.dcel, |_| true))
    }

    /// Iterates over all halfedges associated with a curve.
    pub fn halfedges(&self) -> HalfedgeIterator<'_, T> {
        HalfedgeIterator::new(self.edges())
    }

    /// Iterates over all edges associated with a curve, yielding one halfedge per edge.
    pub fn edges(&self) -> EdgeIterator<'_, T> {
        EdgeIterator::new(&self.dcel, |edge| edge.curve.is_some())
    }

    /// Iterates over all faces, including the fictitious face.
    pub fn all_faces(&self) -> FaceIterator<'_, T> {
        FaceIterator::new(&self.dcel, |_| true)
    }

    /// Iterates over all faces except the fictitious face.
    pub fn faces(&self) -> FaceIterator<'_, T> {
        FaceIterator::new(&self.dcel, |face| !face.fictitious)
    }

    /// Iterates over all unbounded faces.
    ///
    /// Arrangements of bounded curves have exactly one.
    pub fn unbounded_faces(&self) -> FaceIterator<'_, T> {
        FaceIterator::new(&self.dcel, |face| face.unbounded && !face.fictitious)
    }
}
