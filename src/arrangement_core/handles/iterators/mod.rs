mod arena_iterators;
mod circular_iterator;

use super::HalfedgeHandle;
use crate::ArrangementTraits;

pub use arena_iterators::{
    EdgeIterator, FaceIterator, HalfedgeIterator, HoleIterator, IsolatedVertexIterator,
    VertexIterator,
};
pub use circular_iterator::{CircularIterator, NextBackFn};

/// Walks a boundary cycle along `next`, backwards along `prev`.
pub struct CcbNextBackFn;

impl NextBackFn for CcbNextBackFn {
    fn next<T: ArrangementTraits>(halfedge: HalfedgeHandle<T>) -> HalfedgeHandle<T> {
        halfedge.next()
    }

    fn next_back<T: ArrangementTraits>(halfedge: HalfedgeHandle<T>) -> HalfedgeHandle<T> {
        halfedge.prev()
    }
}

/// Walks the incoming halfedges of a vertex in clockwise order.
pub struct AroundVertexNextBackFn;

impl NextBackFn for AroundVertexNextBackFn {
    fn next<T: ArrangementTraits>(halfedge: HalfedgeHandle<T>) -> HalfedgeHandle<T> {
        halfedge.next().twin()
    }

    fn next_back<T: ArrangementTraits>(halfedge: HalfedgeHandle<T>) -> HalfedgeHandle<T> {
        halfedge.twin().prev()
    }
}

macro_rules! circulator {
    ($doc_name:expr, $created_by:expr, $def:item) => {
        #[doc = concat!(
            "An iterator over ", $doc_name, ".\n",
            "\n",
            "This iterator is created by [", $created_by, "](crate::handles::", $created_by, ")."
        )]
        $def
    };
}

circulator!(
    "the halfedges of a connected component of a face boundary",
    "HalfedgeHandle::ccb",
    pub type CcbIterator<'a, T> = CircularIterator<'a, T, CcbNextBackFn>;
);

circulator!(
    "the halfedges pointing into a vertex, in clockwise order",
    "VertexHandle::incident_halfedges",
    pub type VertexHalfedgeIterator<'a, T> = CircularIterator<'a, T, AroundVertexNextBackFn>;
);
