use slotmap::SlotMap;

use super::handles::*;
use crate::{BoundaryType, HalfedgeDirection};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a vertex is attached to the rest of the subdivision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub(crate) enum VertexConnection {
    /// One of the halfedges pointing *into* the vertex.
    Incident(FixedHalfedgeHandle),
    /// The vertex has no incident edges and lies in the interior of this face.
    Isolated(FixedFaceHandle),
    /// Transient state of a vertex that was just created or just lost its last edge.
    Detached,
}

/// The feature a halfedge bounds: either the outer boundary of a face or one of its holes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub(crate) enum Incidence {
    Outer(FixedFaceHandle),
    Inner(FixedHoleHandle),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub(crate) struct VertexEntry<P> {
    pub(crate) point: Option<P>,
    pub(crate) ps_x: BoundaryType,
    pub(crate) ps_y: BoundaryType,
    pub(crate) connection: VertexConnection,
}

impl<P> VertexEntry<P> {
    /// `true` for vertices without a point: the four corners and all curve ends at infinity.
    pub(crate) fn is_at_infinity(&self) -> bool {
        self.point.is_none()
    }

    /// `true` for the four corners of the fictitious rectangle.
    pub(crate) fn is_corner(&self) -> bool {
        self.ps_x.is_infinite() && self.ps_y.is_infinite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub(crate) struct HalfedgeEntry {
    pub(crate) next: FixedHalfedgeHandle,
    pub(crate) prev: FixedHalfedgeHandle,
    pub(crate) target: FixedVertexHandle,
    pub(crate) incidence: Incidence,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub(crate) struct EdgeEntry<C> {
    pub(crate) entries: [HalfedgeEntry; 2],
    /// `None` for fictitious edges.
    pub(crate) curve: Option<C>,
    /// Direction of the normalized halfedge. Its twin always points the other way.
    pub(crate) direction: HalfedgeDirection,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub(crate) struct FaceEntry {
    pub(crate) outer_ccb: Option<FixedHalfedgeHandle>,
    pub(crate) holes: Vec<FixedHoleHandle>,
    pub(crate) isolated_vertices: Vec<FixedVertexHandle>,
    pub(crate) unbounded: bool,
    pub(crate) fictitious: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub(crate) struct HoleEntry {
    pub(crate) face: FixedFaceHandle,
    /// Representative halfedge of the hole's boundary cycle.
    pub(crate) halfedge: FixedHalfedgeHandle,
}

/// Arena storage of all topological records.
///
/// Records are addressed by generation checked keys. Removing a record never moves any
/// other record, so handles stay valid until their own referent is removed.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub(crate) struct Dcel<P, C> {
    pub(super) vertices: SlotMap<FixedVertexHandle, VertexEntry<P>>,
    pub(super) edges: SlotMap<FixedEdgeHandle, EdgeEntry<C>>,
    pub(super) faces: SlotMap<FixedFaceHandle, FaceEntry>,
    pub(super) holes: SlotMap<FixedHoleHandle, HoleEntry>,
}

impl<P, C> Default for Dcel<P, C> {
    fn default() -> Self {
        Dcel {
            vertices: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            holes: SlotMap::with_key(),
        }
    }
}

impl<P, C> Dcel<P, C> {
    /// Removes all records. Slots are released in place, so keys issued before stay invalid.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.faces.clear();
        self.holes.clear();
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_halfedges(&self) -> usize {
        self.edges.len() * 2
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn num_holes(&self) -> usize {
        self.holes.len()
    }

    pub fn vertex(&self, handle: FixedVertexHandle) -> &VertexEntry<P> {
        &self.vertices[handle]
    }

    pub fn vertex_mut(&mut self, handle: FixedVertexHandle) -> &mut VertexEntry<P> {
        &mut self.vertices[handle]
    }

    pub fn contains_vertex(&self, handle: FixedVertexHandle) -> bool {
        self.vertices.contains_key(handle)
    }

    pub fn edge_entry(&self, handle: FixedEdgeHandle) -> &EdgeEntry<C> {
        &self.edges[handle]
    }

    pub fn edge_entry_mut(&mut self, handle: FixedEdgeHandle) -> &mut EdgeEntry<C> {
        &mut self.edges[handle]
    }

    pub fn contains_halfedge(&self, handle: FixedHalfedgeHandle) -> bool {
        self.edges.contains_key(handle.as_edge())
    }

    pub fn half_edge(&self, handle: FixedHalfedgeHandle) -> &HalfedgeEntry {
        let entry = self.edge_entry(handle.as_edge());
        &entry.entries[handle.normalize_index()]
    }

    pub fn half_edge_mut(&mut self, handle: FixedHalfedgeHandle) -> &mut HalfedgeEntry {
        let entry = self.edge_entry_mut(handle.as_edge());
        &mut entry.entries[handle.normalize_index()]
    }

    pub fn face_entry(&self, handle: FixedFaceHandle) -> &FaceEntry {
        &self.faces[handle]
    }

    pub fn face_entry_mut(&mut self, handle: FixedFaceHandle) -> &mut FaceEntry {
        &mut self.faces[handle]
    }

    pub fn contains_face(&self, handle: FixedFaceHandle) -> bool {
        self.faces.contains_key(handle)
    }

    pub fn hole(&self, handle: FixedHoleHandle) -> &HoleEntry {
        &self.holes[handle]
    }

    pub fn hole_mut(&mut self, handle: FixedHoleHandle) -> &mut HoleEntry {
        &mut self.holes[handle]
    }

    pub fn contains_hole(&self, handle: FixedHoleHandle) -> bool {
        self.holes.contains_key(handle)
    }

    #[inline]
    pub fn next(&self, handle: FixedHalfedgeHandle) -> FixedHalfedgeHandle {
        self.half_edge(handle).next
    }

    #[inline]
    pub fn prev(&self, handle: FixedHalfedgeHandle) -> FixedHalfedgeHandle {
        self.half_edge(handle).prev
    }

    #[inline]
    pub fn target(&self, handle: FixedHalfedgeHandle) -> FixedVertexHandle {
        self.half_edge(handle).target
    }

    #[inline]
    pub fn source(&self, handle: FixedHalfedgeHandle) -> FixedVertexHandle {
        self.half_edge(handle.twin()).target
    }

    #[inline]
    pub fn incidence(&self, handle: FixedHalfedgeHandle) -> Incidence {
        self.half_edge(handle).incidence
    }

    /// Returns the face a halfedge bounds, resolving holes to their containing face.
    pub fn face_of(&self, handle: FixedHalfedgeHandle) -> FixedFaceHandle {
        match self.incidence(handle) {
            Incidence::Outer(face) => face,
            Incidence::Inner(hole) => self.hole(hole).face,
        }
    }

    pub fn curve(&self, handle: FixedHalfedgeHandle) -> Option<&C> {
        self.edge_entry(handle.as_edge()).curve.as_ref()
    }

    pub fn is_fictitious(&self, handle: FixedHalfedgeHandle) -> bool {
        self.edge_entry(handle.as_edge()).curve.is_none()
    }

    pub fn direction(&self, handle: FixedHalfedgeHandle) -> HalfedgeDirection {
        let direction = self.edge_entry(handle.as_edge()).direction;
        if handle.is_normalized() {
            direction
        } else {
            direction.opposite()
        }
    }

    pub fn point(&self, handle: FixedVertexHandle) -> Option<&P> {
        self.vertex(handle).point.as_ref()
    }

    /// One halfedge pointing into `handle`, if the vertex has incident edges.
    pub fn vertex_halfedge(&self, handle: FixedVertexHandle) -> Option<FixedHalfedgeHandle> {
        match self.vertex(handle).connection {
            VertexConnection::Incident(halfedge) => Some(halfedge),
            _ => None,
        }
    }

    /// The next incoming halfedge of the same target vertex in clockwise order.
    #[inline]
    pub fn cw_incoming(&self, handle: FixedHalfedgeHandle) -> FixedHalfedgeHandle {
        self.next(handle).twin()
    }

    pub fn vertex_degree(&self, handle: FixedVertexHandle) -> usize {
        let Some(first) = self.vertex_halfedge(handle) else {
            return 0;
        };
        let mut degree = 1;
        let mut current = self.cw_incoming(first);
        while current != first {
            degree += 1;
            current = self.cw_incoming(current);
        }
        degree
    }

    pub fn outer_ccb(&self, face: FixedFaceHandle) -> Option<FixedHalfedgeHandle> {
        self.face_entry(face).outer_ccb
    }

    #[cfg(test)]
    pub fn sanity_check(&self) {
        assert_eq!(self.num_halfedges() % 2, 0);
        for (edge, entry) in self.edges.iter() {
            for side in [0, 1] {
                let handle = FixedHalfedgeHandle::new(edge, side);
                assert_eq!(handle, handle.twin().twin());
                assert_eq!(self.prev(self.next(handle)), handle);
                assert_eq!(self.next(self.prev(handle)), handle);
                assert_eq!(self.source(self.next(handle)), self.target(handle));
                assert!(self.vertices.contains_key(entry.entries[side].target));
            }
        }
        for (handle, vertex) in self.vertices.iter() {
            match vertex.connection {
                VertexConnection::Incident(halfedge) => {
                    assert_eq!(self.target(halfedge), handle)
                }
                VertexConnection::Isolated(face) => {
                    assert!(self.face_entry(face).isolated_vertices.contains(&handle))
                }
                VertexConnection::Detached => panic!("Detached vertex {:?}", handle),
            }
        }
        for (handle, hole) in self.holes.iter() {
            assert_eq!(self.incidence(hole.halfedge), Incidence::Inner(handle));
            assert!(self.face_entry(hole.face).holes.contains(&handle));
        }
        for (handle, face) in self.faces.iter() {
            if let Some(outer) = face.outer_ccb {
                assert_eq!(self.incidence(outer), Incidence::Outer(handle));
            }
        }
    }
}
