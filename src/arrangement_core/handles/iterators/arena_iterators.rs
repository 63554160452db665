use super::super::super::dcel::{Dcel, EdgeEntry, FaceEntry, VertexEntry};
use super::super::handle_defs::*;
use super::super::{FaceHandle, HalfedgeHandle, VertexHandle};
use crate::ArrangementTraits;

/// Defines a lazy, predicate filtered view over one of the arrangement's arenas.
///
/// The predicate decides which records are visible (e.g. "not fictitious"). The view holds
/// no state besides its position, creating a new one restarts the traversal.
macro_rules! filtered_arena_iterator {
    ($doc:expr, $name:ident, $key:ty, $entry:ty, $item:ty, $arena:ident, $to_item:expr) => {
        #[doc = $doc]
        pub struct $name<'a, T: ArrangementTraits> {
            dcel: &'a Dcel<T::Point, T::Curve>,
            inner: slotmap::basic::Iter<'a, $key, $entry>,
            predicate: fn(&$entry) -> bool,
        }

        impl<'a, T: ArrangementTraits> $name<'a, T> {
            pub(crate) fn new(
                dcel: &'a Dcel<T::Point, T::Curve>,
                predicate: fn(&$entry) -> bool,
            ) -> Self {
                $name {
                    dcel,
                    inner: dcel.$arena.iter(),
                    predicate,
                }
            }
        }

        impl<'a, T: ArrangementTraits> Clone for $name<'a, T> {
            fn clone(&self) -> Self {
                $name {
                    dcel: self.dcel,
                    inner: self.inner.clone(),
                    predicate: self.predicate,
                }
            }
        }

        impl<'a, T: ArrangementTraits> Iterator for $name<'a, T> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                let predicate = self.predicate;
                let (key, _) = self.inner.by_ref().find(|(_, entry)| predicate(entry))?;
                let to_item: fn($key) -> _ = $to_item;
                Some(DynamicHandleImpl::new(self.dcel, to_item(key)))
            }
        }
    };
}

filtered_arena_iterator!(
    "An iterator over vertices.\n\nCreated by [Arrangement::vertices](crate::Arrangement::vertices) and related methods.",
    VertexIterator,
    FixedVertexHandle,
    VertexEntry<T::Point>,
    VertexHandle<'a, T>,
    vertices,
    |key| key
);

filtered_arena_iterator!(
    "An iterator over edges, yielding the normalized halfedge of each edge.\n\nCreated by [Arrangement::edges](crate::Arrangement::edges).",
    EdgeIterator,
    FixedEdgeHandle,
    EdgeEntry<T::Curve>,
    HalfedgeHandle<'a, T>,
    edges,
    |key| key.as_halfedge()
);

filtered_arena_iterator!(
    "An iterator over faces.\n\nCreated by [Arrangement::faces](crate::Arrangement::faces) and related methods.",
    FaceIterator,
    FixedFaceHandle,
    FaceEntry,
    FaceHandle<'a, T>,
    faces,
    |key| key
);

/// An iterator over halfedges, yielding both halfedges of every visited edge.
///
/// Created by [Arrangement::halfedges](crate::Arrangement::halfedges).
pub struct HalfedgeIterator<'a, T: ArrangementTraits> {
    edges: EdgeIterator<'a, T>,
    pending_twin: Option<HalfedgeHandle<'a, T>>,
}

impl<'a, T: ArrangementTraits> HalfedgeIterator<'a, T> {
    pub(crate) fn new(edges: EdgeIterator<'a, T>) -> Self {
        HalfedgeIterator {
            edges,
            pending_twin: None,
        }
    }
}

impl<'a, T: ArrangementTraits> Clone for HalfedgeIterator<'a, T> {
    fn clone(&self) -> Self {
        HalfedgeIterator {
            edges: self.edges.clone(),
            pending_twin: self.pending_twin,
        }
    }
}

impl<'a, T: ArrangementTraits> Iterator for HalfedgeIterator<'a, T> {
    type Item = HalfedgeHandle<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(twin) = self.pending_twin.take() {
            return Some(twin);
        }
        let halfedge = self.edges.next()?;
        self.pending_twin = Some(halfedge.twin());
        Some(halfedge)
    }
}

/// An iterator over the isolated vertices of a face.
///
/// Created by [FaceHandle::isolated_vertices](crate::handles::FaceHandle::isolated_vertices).
pub struct IsolatedVertexIterator<'a, T: ArrangementTraits> {
    dcel: &'a Dcel<T::Point, T::Curve>,
    inner: std::slice::Iter<'a, FixedVertexHandle>,
}

impl<'a, T: ArrangementTraits> IsolatedVertexIterator<'a, T> {
    pub(crate) fn new(dcel: &'a Dcel<T::Point, T::Curve>, face: FixedFaceHandle) -> Self {
        IsolatedVertexIterator {
            dcel,
            inner: dcel.face_entry(face).isolated_vertices.iter(),
        }
    }
}

impl<'a, T: ArrangementTraits> Iterator for IsolatedVertexIterator<'a, T> {
    type Item = VertexHandle<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = *self.inner.next()?;
        Some(DynamicHandleImpl::new(self.dcel, vertex))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over the holes of a face, yielding one representative halfedge per hole.
///
/// Created by [FaceHandle::holes](crate::handles::FaceHandle::holes).
pub struct HoleIterator<'a, T: ArrangementTraits> {
    dcel: &'a Dcel<T::Point, T::Curve>,
    inner: std::slice::Iter<'a, FixedHoleHandle>,
}

impl<'a, T: ArrangementTraits> HoleIterator<'a, T> {
    pub(crate) fn new(dcel: &'a Dcel<T::Point, T::Curve>, face: FixedFaceHandle) -> Self {
        HoleIterator {
            dcel,
            inner: dcel.face_entry(face).holes.iter(),
        }
    }
}

impl<'a, T: ArrangementTraits> Iterator for HoleIterator<'a, T> {
    type Item = HalfedgeHandle<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let hole = *self.inner.next()?;
        Some(DynamicHandleImpl::new(
            self.dcel,
            self.dcel.hole(hole).halfedge,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
