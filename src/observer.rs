use std::cell::RefCell;
use std::rc::Rc;

use crate::handles::{FixedEdgeHandle, FixedFaceHandle, FixedHalfedgeHandle, FixedVertexHandle};
use crate::{Arrangement, ArrangementTraits, BoundaryType};

/// A listener that is notified before and after every structural change of an
/// [Arrangement].
///
/// Every method has an empty default implementation; observers override only the events
/// they are interested in. Each event comes as a matched pair: the `before_` hook sees the
/// arrangement before the change, the `after_` hook sees the finished change.
///
/// Holes are identified by one of their boundary halfedges.
///
/// For nested registrations, `before_` hooks run in registration order and `after_` hooks in
/// reverse registration order. The first observer to see a change coming is the last to see
/// it completed.
///
/// Observers receive a shared reference to the arrangement and can inspect it freely, but
/// they cannot modify it from within a callback.
///
/// # Example
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use arrangement::{Arrangement, ArrangementObserver, Point2, Segment, SegmentTraits};
/// use arrangement::handles::FixedHalfedgeHandle;
///
/// #[derive(Default)]
/// struct EdgeCounter {
///     created: usize,
/// }
///
/// impl ArrangementObserver<SegmentTraits<f64>> for EdgeCounter {
///     fn after_create_edge(
///         &mut self,
///         _: &Arrangement<SegmentTraits<f64>>,
///         _: FixedHalfedgeHandle,
///     ) {
///         self.created += 1;
///     }
/// }
///
/// let mut arrangement = Arrangement::<SegmentTraits<f64>>::new();
/// let counter = Rc::new(RefCell::new(EdgeCounter::default()));
/// arrangement.register_observer(counter.clone());
///
/// let face = arrangement.unbounded_face().fix();
/// let segment = Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
/// arrangement.insert_in_face_interior(segment, face);
/// assert_eq!(counter.borrow().created, 1);
/// ```
#[allow(unused_variables)]
pub trait ArrangementObserver<T: ArrangementTraits> {
    /// Called before this observer is registered.
    fn before_attach(&mut self, arr: &Arrangement<T>) {}
    /// Called after this observer was registered.
    fn after_attach(&mut self, arr: &Arrangement<T>) {}
    /// Called before this observer is unregistered.
    fn before_detach(&mut self, arr: &Arrangement<T>) {}
    /// Called after this observer was unregistered.
    fn after_detach(&mut self, arr: &Arrangement<T>) {}

    /// Called before the contents of `other` are copied into `arr`.
    fn before_assign(&mut self, arr: &Arrangement<T>, other: &Arrangement<T>) {}
    /// Called after `arr` received its new contents.
    fn after_assign(&mut self, arr: &Arrangement<T>) {}
    /// Called before all curves and vertices of `arr` are removed.
    fn before_clear(&mut self, arr: &Arrangement<T>) {}
    /// Called after `arr` was cleared.
    fn after_clear(&mut self, arr: &Arrangement<T>) {}

    /// Called before a vertex is created for the finite point `p`.
    fn before_create_vertex(&mut self, arr: &Arrangement<T>, p: &T::Point) {}
    /// Called after the finite vertex `v` was created. It is not yet connected.
    fn after_create_vertex(&mut self, arr: &Arrangement<T>, v: FixedVertexHandle) {}

    /// Called before a vertex at infinity is created for an unbounded curve end.
    fn before_create_vertex_at_infinity(
        &mut self,
        arr: &Arrangement<T>,
        ps_x: BoundaryType,
        ps_y: BoundaryType,
    ) {
    }
    /// Called after the vertex at infinity `v` was created.
    fn after_create_vertex_at_infinity(&mut self, arr: &Arrangement<T>, v: FixedVertexHandle) {}

    /// Called before an edge associated with `cv` is created between `v1` and `v2`.
    fn before_create_edge(
        &mut self,
        arr: &Arrangement<T>,
        cv: &T::Curve,
        v1: FixedVertexHandle,
        v2: FixedVertexHandle,
    ) {
    }
    /// Called after the edge `e` was created and linked into the boundary cycles.
    fn after_create_edge(&mut self, arr: &Arrangement<T>, e: FixedHalfedgeHandle) {}

    /// Called before the point of `v` is replaced by `p`.
    fn before_modify_vertex(&mut self, arr: &Arrangement<T>, v: FixedVertexHandle, p: &T::Point) {}
    /// Called after the point of `v` was replaced.
    fn after_modify_vertex(&mut self, arr: &Arrangement<T>, v: FixedVertexHandle) {}

    /// Called before the curve of `e` is replaced by `cv`.
    fn before_modify_edge(&mut self, arr: &Arrangement<T>, e: FixedHalfedgeHandle, cv: &T::Curve) {}
    /// Called after the curve of `e` was replaced.
    fn after_modify_edge(&mut self, arr: &Arrangement<T>, e: FixedHalfedgeHandle) {}

    /// Called before the edge `e` is split at `v` into two edges carrying `cv1` and `cv2`.
    fn before_split_edge(
        &mut self,
        arr: &Arrangement<T>,
        e: FixedHalfedgeHandle,
        v: FixedVertexHandle,
        cv1: &T::Curve,
        cv2: &T::Curve,
    ) {
    }
    /// Called after an edge was split. `e1` ends at the split vertex, `e2` starts there.
    fn after_split_edge(
        &mut self,
        arr: &Arrangement<T>,
        e1: FixedHalfedgeHandle,
        e2: FixedHalfedgeHandle,
    ) {
    }

    /// Called before the fictitious edge `e` is split at the vertex at infinity `v`.
    fn before_split_fictitious_edge(
        &mut self,
        arr: &Arrangement<T>,
        e: FixedHalfedgeHandle,
        v: FixedVertexHandle,
    ) {
    }
    /// Called after a fictitious edge was split into `e1` and `e2`.
    fn after_split_fictitious_edge(
        &mut self,
        arr: &Arrangement<T>,
        e1: FixedHalfedgeHandle,
        e2: FixedHalfedgeHandle,
    ) {
    }

    /// Called before the face `f` is split by the new edge `e`.
    fn before_split_face(&mut self, arr: &Arrangement<T>, f: FixedFaceHandle, e: FixedHalfedgeHandle) {}
    /// Called after `f` was split. `is_hole` is `true` if the new face was carved out of a
    /// hole of `f`.
    fn after_split_face(
        &mut self,
        arr: &Arrangement<T>,
        f: FixedFaceHandle,
        new_f: FixedFaceHandle,
        is_hole: bool,
    ) {
    }

    /// Called before a hole of `f` is split in two by removing the edge `e`.
    fn before_split_hole(&mut self, arr: &Arrangement<T>, f: FixedFaceHandle, e: FixedHalfedgeHandle) {}
    /// Called after a hole of `f` was split into the holes of `h1` and `h2`.
    fn after_split_hole(
        &mut self,
        arr: &Arrangement<T>,
        f: FixedFaceHandle,
        h1: FixedHalfedgeHandle,
        h2: FixedHalfedgeHandle,
    ) {
    }

    /// Called before a new hole, identified by `h`, is added to `f`.
    fn before_add_hole(&mut self, arr: &Arrangement<T>, f: FixedFaceHandle, h: FixedHalfedgeHandle) {}
    /// Called after the hole `h` was added.
    fn after_add_hole(&mut self, arr: &Arrangement<T>, h: FixedHalfedgeHandle) {}

    /// Called before `v` becomes an isolated vertex of `f`.
    fn before_add_isolated_vertex(
        &mut self,
        arr: &Arrangement<T>,
        f: FixedFaceHandle,
        v: FixedVertexHandle,
    ) {
    }
    /// Called after `v` became an isolated vertex.
    fn after_add_isolated_vertex(&mut self, arr: &Arrangement<T>, v: FixedVertexHandle) {}

    /// Called before the edges `e1` and `e2` are merged into one edge carrying `cv`.
    fn before_merge_edge(
        &mut self,
        arr: &Arrangement<T>,
        e1: FixedHalfedgeHandle,
        e2: FixedHalfedgeHandle,
        cv: &T::Curve,
    ) {
    }
    /// Called after two edges were merged into `e`.
    fn after_merge_edge(&mut self, arr: &Arrangement<T>, e: FixedHalfedgeHandle) {}

    /// Called before the fictitious edges `e1` and `e2` are merged.
    fn before_merge_fictitious_edge(
        &mut self,
        arr: &Arrangement<T>,
        e1: FixedHalfedgeHandle,
        e2: FixedHalfedgeHandle,
    ) {
    }
    /// Called after two fictitious edges were merged into `e`.
    fn after_merge_fictitious_edge(&mut self, arr: &Arrangement<T>, e: FixedHalfedgeHandle) {}

    /// Called before `f2` is merged into `f1` by removing the edge `e`.
    fn before_merge_face(
        &mut self,
        arr: &Arrangement<T>,
        f1: FixedFaceHandle,
        f2: FixedFaceHandle,
        e: FixedHalfedgeHandle,
    ) {
    }
    /// Called after two faces were merged into `f`.
    fn after_merge_face(&mut self, arr: &Arrangement<T>, f: FixedFaceHandle) {}

    /// Called before the holes `h1` and `h2` of `f` are joined by the new edge `e`.
    fn before_merge_hole(
        &mut self,
        arr: &Arrangement<T>,
        f: FixedFaceHandle,
        h1: FixedHalfedgeHandle,
        h2: FixedHalfedgeHandle,
        e: FixedHalfedgeHandle,
    ) {
    }
    /// Called after two holes of `f` were merged into the hole of `h`.
    fn after_merge_hole(&mut self, arr: &Arrangement<T>, f: FixedFaceHandle, h: FixedHalfedgeHandle) {}

    /// Called before the hole `h` is moved from `from_f` to `to_f`.
    fn before_move_hole(
        &mut self,
        arr: &Arrangement<T>,
        from_f: FixedFaceHandle,
        to_f: FixedFaceHandle,
        h: FixedHalfedgeHandle,
    ) {
    }
    /// Called after the hole `h` was moved.
    fn after_move_hole(&mut self, arr: &Arrangement<T>, h: FixedHalfedgeHandle) {}

    /// Called before the isolated vertex `v` is moved from `from_f` to `to_f`.
    fn before_move_isolated_vertex(
        &mut self,
        arr: &Arrangement<T>,
        from_f: FixedFaceHandle,
        to_f: FixedFaceHandle,
        v: FixedVertexHandle,
    ) {
    }
    /// Called after the isolated vertex `v` was moved.
    fn after_move_isolated_vertex(&mut self, arr: &Arrangement<T>, v: FixedVertexHandle) {}

    /// Called before the finite vertex `v` is removed.
    fn before_remove_vertex(&mut self, arr: &Arrangement<T>, v: FixedVertexHandle) {}
    /// Called after a finite vertex was removed.
    fn after_remove_vertex(&mut self, arr: &Arrangement<T>) {}

    /// Called before the vertex at infinity `v` is removed.
    fn before_remove_vertex_at_infinity(&mut self, arr: &Arrangement<T>, v: FixedVertexHandle) {}
    /// Called after a vertex at infinity was removed.
    fn after_remove_vertex_at_infinity(&mut self, arr: &Arrangement<T>) {}

    /// Called before the edge of `e` is removed.
    fn before_remove_edge(&mut self, arr: &Arrangement<T>, e: FixedHalfedgeHandle) {}
    /// Called after an edge was removed. `e` is no longer valid.
    fn after_remove_edge(&mut self, arr: &Arrangement<T>, e: FixedEdgeHandle) {}

    /// Called before the hole `h` of `f` disappears.
    fn before_remove_hole(&mut self, arr: &Arrangement<T>, f: FixedFaceHandle, h: FixedHalfedgeHandle) {}
    /// Called after a hole of `f` disappeared.
    fn after_remove_hole(&mut self, arr: &Arrangement<T>, f: FixedFaceHandle) {}
}

/// A shared, registered observer.
pub type SharedObserver<T> = Rc<RefCell<dyn ArrangementObserver<T>>>;

/// Snapshot of the registered observers, taken when an operation starts.
///
/// `before` visits the observers in registration order, `after` in reverse order, so that
/// notifications nest like scopes.
pub(crate) struct NotificationScope<T: ArrangementTraits> {
    observers: Vec<SharedObserver<T>>,
}

impl<T: ArrangementTraits> NotificationScope<T> {
    pub(crate) fn new(observers: &[SharedObserver<T>]) -> Self {
        NotificationScope {
            observers: observers.to_vec(),
        }
    }

    pub(crate) fn before(&self, mut f: impl FnMut(&mut dyn ArrangementObserver<T>)) {
        for observer in &self.observers {
            f(&mut *observer.borrow_mut());
        }
    }

    pub(crate) fn after(&self, mut f: impl FnMut(&mut dyn ArrangementObserver<T>)) {
        for observer in self.observers.iter().rev() {
            f(&mut *observer.borrow_mut());
        }
    }
}
