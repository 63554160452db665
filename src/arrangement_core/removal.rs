use log::{debug, trace};

use super::dcel::{HoleEntry, Incidence, VertexConnection};
use super::dcel_operations::{self, link, remove_from_list, replace_representative};
use super::handles::*;
use crate::{Arrangement, ArrangementTraits};

impl<T: ArrangementTraits> Arrangement<T> {
    /// Removes an isolated vertex and returns the face that contained it.
    ///
    /// *Precondition:* `v` is isolated. Release builds leave a vertex with incident edges
    /// untouched and return the unbounded face.
    pub fn remove_isolated_vertex(&mut self, v: FixedVertexHandle) -> FixedFaceHandle {
        let connection = self.dcel.vertex(v).connection;
        debug_assert!(
            matches!(connection, VertexConnection::Isolated(_)),
            "Vertex {:?} is not isolated",
            v
        );
        let VertexConnection::Isolated(face) = connection else {
            return self.unbounded_face_handle();
        };
        trace!("remove_isolated_vertex {:?}", v);
        remove_from_list(&mut self.dcel.face_entry_mut(face).isolated_vertices, v);
        self.dcel.vertex_mut(v).connection = VertexConnection::Detached;
        self.remove_detached_vertex(v);
        face
    }

    /// Removes the edge of `e` and returns the face that now covers its former position.
    ///
    /// If the edge separates two faces, these are merged. Otherwise the boundary cycle
    /// containing both halfedges is split, or vanishes if the edge was the cycle's only edge.
    ///
    /// An end vertex that is left without incident edges is removed if the respective flag
    /// is set and becomes an isolated vertex of the resulting face otherwise. Vertices at
    /// infinity are always removed together with their curve.
    pub fn remove_edge(
        &mut self,
        e: FixedHalfedgeHandle,
        remove_source: bool,
        remove_target: bool,
    ) -> FixedFaceHandle {
        debug_assert!(!self.dcel.is_fictitious(e), "Cannot remove a fictitious edge");
        trace!("remove_edge {:?}", e);
        let source = self.dcel.source(e);
        let target = self.dcel.target(e);

        let scope = self.notification_scope();
        scope.before(|o| o.before_remove_edge(self, e));
        let face = if self.dcel.incidence(e) == self.dcel.incidence(e.twin()) {
            self.remove_edge_in_ccb(e)
        } else {
            self.remove_edge_between_faces(e)
        };
        self.dcel.edges.remove(e.as_edge());
        let edge = e.as_edge();
        scope.after(|o| o.after_remove_edge(self, edge));

        for (vertex, remove) in [(source, remove_source), (target, remove_target)] {
            self.release_end_vertex(vertex, remove, face);
        }
        face
    }

    /// Unlinks an edge whose halfedges both lie on the same boundary cycle.
    fn remove_edge_in_ccb(&mut self, e: FixedHalfedgeHandle) -> FixedFaceHandle {
        let twin = e.twin();
        let face = self.dcel.face_of(e);
        let prev1 = self.dcel.prev(e);
        let next1 = self.dcel.next(e);
        let prev2 = self.dcel.prev(twin);
        let next2 = self.dcel.next(twin);
        let source = self.dcel.source(e);
        let target = self.dcel.target(e);

        if next1 == twin && next2 == e {
            // The edge forms a hole on its own.
            let Incidence::Inner(hole) = self.dcel.incidence(e) else {
                panic!("Isolated edge {:?} bounds a face", e);
            };
            let scope = self.notification_scope();
            scope.before(|o| o.before_remove_hole(self, face, e));
            remove_from_list(&mut self.dcel.face_entry_mut(face).holes, hole);
            self.dcel.holes.remove(hole);
            self.dcel.vertex_mut(source).connection = VertexConnection::Detached;
            self.dcel.vertex_mut(target).connection = VertexConnection::Detached;
            scope.after(|o| o.after_remove_hole(self, face));
            return face;
        }

        if next1 == twin {
            // The target is the tip of an antenna.
            link(&mut self.dcel, prev1, next2);
            self.replace_incoming(source, twin, prev1);
            replace_representative(&mut self.dcel, e, prev1);
            replace_representative(&mut self.dcel, twin, prev1);
            self.dcel.vertex_mut(target).connection = VertexConnection::Detached;
            return face;
        }

        if next2 == e {
            link(&mut self.dcel, prev2, next1);
            self.replace_incoming(target, e, prev2);
            replace_representative(&mut self.dcel, e, prev2);
            replace_representative(&mut self.dcel, twin, prev2);
            self.dcel.vertex_mut(source).connection = VertexConnection::Detached;
            return face;
        }

        // The edge is a bridge. Removing it splits the cycle in two.
        let incidence = self.dcel.incidence(e);
        replace_representative(&mut self.dcel, e, prev1);
        replace_representative(&mut self.dcel, twin, prev1);
        link(&mut self.dcel, prev1, next2);
        link(&mut self.dcel, prev2, next1);
        self.replace_incoming(source, twin, prev1);
        self.replace_incoming(target, e, prev2);

        let scope = self.notification_scope();
        match incidence {
            Incidence::Inner(hole) => {
                scope.before(|o| o.before_split_hole(self, face, e));
                self.dcel.hole_mut(hole).halfedge = prev1;
                let new_hole = self.dcel.holes.insert(HoleEntry {
                    face,
                    halfedge: prev2,
                });
                dcel_operations::set_ccb_incidence(&mut self.dcel, prev2, Incidence::Inner(new_hole));
                self.dcel.face_entry_mut(face).holes.push(new_hole);
                debug!("Split hole {:?} of face {:?}", hole, face);
                scope.after(|o| o.after_split_hole(self, face, prev1, prev2));
            }
            Incidence::Outer(_) => {
                let (outer, inner) = if self.is_ccb_ccw(prev1) {
                    (prev1, prev2)
                } else {
                    (prev2, prev1)
                };
                self.dcel.face_entry_mut(face).outer_ccb = Some(outer);
                scope.before(|o| o.before_add_hole(self, face, inner));
                let hole = self.dcel.holes.insert(HoleEntry {
                    face,
                    halfedge: inner,
                });
                dcel_operations::set_ccb_incidence(&mut self.dcel, inner, Incidence::Inner(hole));
                self.dcel.face_entry_mut(face).holes.push(hole);
                debug!("Outer boundary of {:?} lost a component", face);
                scope.after(|o| o.after_add_hole(self, inner));
            }
        }
        face
    }

    /// Unlinks an edge separating two faces and merges them.
    fn remove_edge_between_faces(&mut self, e: FixedHalfedgeHandle) -> FixedFaceHandle {
        let twin = e.twin();
        let face1 = self.dcel.face_of(e);
        let face2 = self.dcel.face_of(twin);
        let unbounded = self.unbounded_face_handle();

        // A face bounded from the outside by a hole of another face is the one vanishing.
        let (keep_side, keep, die) = match (self.dcel.incidence(e), self.dcel.incidence(twin)) {
            (Incidence::Inner(_), _) => (e, face1, face2),
            (_, Incidence::Inner(_)) => (twin, face2, face1),
            _ if face2 == unbounded => (twin, face2, face1),
            _ => (e, face1, face2),
        };
        let keep_incidence = self.dcel.incidence(keep_side);

        let prev1 = self.dcel.prev(e);
        let next1 = self.dcel.next(e);
        let prev2 = self.dcel.prev(twin);
        let next2 = self.dcel.next(twin);
        let source = self.dcel.source(e);
        let target = self.dcel.target(e);

        let scope = self.notification_scope();
        scope.before(|o| o.before_merge_face(self, keep, die, e));
        link(&mut self.dcel, prev1, next2);
        link(&mut self.dcel, prev2, next1);
        self.replace_incoming(source, twin, prev1);
        self.replace_incoming(target, e, prev2);
        dcel_operations::set_ccb_incidence(&mut self.dcel, prev1, keep_incidence);
        match keep_incidence {
            Incidence::Inner(hole) => self.dcel.hole_mut(hole).halfedge = prev1,
            Incidence::Outer(_) => self.dcel.face_entry_mut(keep).outer_ccb = Some(prev1),
        }

        let dying = self.dcel.faces.remove(die);
        if let Some(dying) = dying {
            for hole in &dying.holes {
                self.dcel.hole_mut(*hole).face = keep;
            }
            for vertex in &dying.isolated_vertices {
                self.dcel.vertex_mut(*vertex).connection = VertexConnection::Isolated(keep);
            }
            let entry = self.dcel.face_entry_mut(keep);
            entry.holes.extend(dying.holes);
            entry.isolated_vertices.extend(dying.isolated_vertices);
            entry.unbounded |= dying.unbounded;
        }
        debug!("Merged face {:?} into {:?}", die, keep);
        scope.after(|o| o.after_merge_face(self, keep));
        keep
    }

    /// Points the vertex record of `vertex` away from the removed halfedge `removed`.
    fn replace_incoming(
        &mut self,
        vertex: FixedVertexHandle,
        removed: FixedHalfedgeHandle,
        replacement: FixedHalfedgeHandle,
    ) {
        if self.dcel.vertex(vertex).connection == VertexConnection::Incident(removed) {
            self.dcel.vertex_mut(vertex).connection = VertexConnection::Incident(replacement);
        }
    }

    /// Cleans up an end vertex of a removed edge.
    fn release_end_vertex(&mut self, vertex: FixedVertexHandle, remove: bool, face: FixedFaceHandle) {
        let entry = self.dcel.vertex(vertex);
        if entry.is_at_infinity() {
            if !entry.is_corner() && self.dcel.vertex_degree(vertex) == 2 {
                self.remove_vertex_at_infinity(vertex);
            }
            return;
        }
        if entry.connection != VertexConnection::Detached {
            return;
        }
        if remove {
            self.remove_detached_vertex(vertex);
        } else {
            self.add_isolated_vertex(face, vertex);
        }
    }

    fn remove_detached_vertex(&mut self, vertex: FixedVertexHandle) {
        let scope = self.notification_scope();
        scope.before(|o| o.before_remove_vertex(self, vertex));
        self.dcel.vertices.remove(vertex);
        scope.after(|o| o.after_remove_vertex(self));
    }
}
