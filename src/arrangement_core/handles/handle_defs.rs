use slotmap::new_key_type;

use super::super::dcel::Dcel;
use crate::ArrangementTraits;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

new_key_type! {
    /// Fixed handle to a vertex.
    ///
    /// *See also the [handles](crate::handles) module.*
    pub struct FixedVertexHandle;

    /// Fixed handle to an edge, i.e. to a pair of twin halfedges.
    ///
    /// *See also the [handles](crate::handles) module.*
    pub struct FixedEdgeHandle;

    /// Fixed handle to a face.
    ///
    /// *See also the [handles](crate::handles) module.*
    pub struct FixedFaceHandle;
}

new_key_type! {
    /// Handle to a hole record. Holes are exposed through their representative halfedge.
    pub(crate) struct FixedHoleHandle;
}

/// Fixed handle to a halfedge.
///
/// Both halfedges of an edge share the edge's storage slot. The low bit (`side`)
/// distinguishes them, which makes [twin](FixedHalfedgeHandle::twin) a pure bit flip.
///
/// *See also the [handles](crate::handles) module.*
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct FixedHalfedgeHandle {
    edge: FixedEdgeHandle,
    side: u8,
}

impl std::fmt::Debug for FixedHalfedgeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedHalfedgeHandle")
            .field("edge", &self.edge)
            .field("side", &self.side)
            .finish()
    }
}

impl FixedHalfedgeHandle {
    #[inline]
    pub(crate) fn new(edge: FixedEdgeHandle, side: usize) -> Self {
        debug_assert!(side < 2);
        FixedHalfedgeHandle {
            edge,
            side: side as u8,
        }
    }

    #[inline]
    pub(crate) fn new_normalized(edge: FixedEdgeHandle) -> Self {
        Self::new(edge, 0)
    }

    /// Returns if this halfedge is the normalized halfedge of its twin pair.
    ///
    /// The normalized halfedge's direction flag is the one stored with the edge.
    #[inline]
    pub(crate) fn is_normalized(self) -> bool {
        self.side == 0
    }

    #[inline]
    pub(crate) fn normalize_index(self) -> usize {
        self.side as usize
    }

    /// Returns the twin of this halfedge.
    ///
    /// If this halfedge points from `v0` to `v1`, the twin points from `v1` to `v0`.
    /// Calling `twin` twice always returns the original halfedge.
    #[inline]
    pub fn twin(self) -> Self {
        FixedHalfedgeHandle {
            edge: self.edge,
            side: self.side ^ 0x1,
        }
    }

    /// Converts this halfedge handle into a handle of its edge.
    #[inline]
    pub fn as_edge(self) -> FixedEdgeHandle {
        self.edge
    }
}

impl FixedEdgeHandle {
    /// Returns the normalized halfedge of this edge.
    #[inline]
    pub fn as_halfedge(self) -> FixedHalfedgeHandle {
        FixedHalfedgeHandle::new_normalized(self)
    }
}

/// Internal type definition that is only exposed for documentation purposes.
///
/// Use the aliases [VertexHandle](crate::handles::VertexHandle),
/// [HalfedgeHandle](crate::handles::HalfedgeHandle) and
/// [FaceHandle](crate::handles::FaceHandle) instead.
pub struct DynamicHandleImpl<'a, T: ArrangementTraits, Handle> {
    pub(crate) dcel: &'a Dcel<T::Point, T::Curve>,
    pub(crate) handle: Handle,
}

impl<'a, T: ArrangementTraits, Handle> DynamicHandleImpl<'a, T, Handle> {
    #[inline]
    pub(crate) fn new(dcel: &'a Dcel<T::Point, T::Curve>, handle: Handle) -> Self {
        Self { dcel, handle }
    }
}

#[cfg(test)]
mod test {
    use super::{FixedEdgeHandle, FixedHalfedgeHandle};
    use slotmap::SlotMap;

    #[test]
    fn test_twin_and_normalization() {
        let mut map: SlotMap<FixedEdgeHandle, ()> = SlotMap::with_key();
        let edge = map.insert(());
        let halfedge = edge.as_halfedge();
        assert!(halfedge.is_normalized());
        assert!(!halfedge.twin().is_normalized());
        assert_eq!(halfedge.twin().twin(), halfedge);
        assert_eq!(halfedge.twin().as_edge(), edge);
        assert_eq!(FixedHalfedgeHandle::new(edge, 1), halfedge.twin());
    }
}
