use std::cmp::Ordering;

use hashbrown::HashSet;
use log::warn;
use thiserror::Error;

use super::dcel::{Incidence, VertexConnection};
use super::dcel_operations::{ccb, ccb_has_fictitious};
use super::handles::*;
use crate::{Arrangement, ArrangementTraits, HalfedgeDirection};

/// The first structural inconsistency found by [Arrangement::validate].
///
/// A correctly used arrangement never produces any of these. They indicate either a
/// violated precondition of an earlier insertion or removal, or a bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `next`, `prev` or `twin` links around this halfedge are not mutually consistent.
    #[error("inconsistent links around halfedge {0:?}")]
    BrokenLink(FixedHalfedgeHandle),
    /// Following `next` from this halfedge does not lead back to it.
    #[error("boundary cycle through {0:?} does not close")]
    OpenCycle(FixedHalfedgeHandle),
    /// Not all halfedges of this halfedge's cycle refer to the same face or hole record.
    #[error("halfedges of the cycle through {0:?} disagree on their face")]
    IncidenceMismatch(FixedHalfedgeHandle),
    /// The vertex record refers to a missing or unrelated halfedge or face.
    #[error("invalid record of vertex {0:?}")]
    VertexRecord(FixedVertexHandle),
    /// The face record refers to a missing or unrelated boundary, hole or vertex.
    #[error("invalid record of face {0:?}")]
    FaceRecord(FixedFaceHandle),
    /// Two vertices share the same geometric position.
    #[error("vertices {0:?} and {1:?} coincide")]
    DuplicateVertex(FixedVertexHandle, FixedVertexHandle),
    /// The curves around this vertex are not in clockwise order.
    #[error("curves around vertex {0:?} are not in clockwise order")]
    AngularOrder(FixedVertexHandle),
    /// The stored direction of this halfedge does not match its end vertices.
    #[error("wrong direction flag of halfedge {0:?}")]
    DirectionFlag(FixedHalfedgeHandle),
    /// The unbounded flag of this face does not match its outer boundary.
    #[error("wrong unbounded flag of face {0:?}")]
    UnboundedFlag(FixedFaceHandle),
    /// The number of vertices without a point is off.
    #[error("expected {expected} vertices at infinity, found {found}")]
    VerticesAtInfinity {
        /// Number of vertices at infinity the arrangement accounts for, including corners.
        expected: usize,
        /// Number of vertices without a point actually stored.
        found: usize,
    },
    /// Some boundary cycles are not referenced by any face or hole.
    #[error("only {covered} of {total} halfedges lie on a referenced boundary")]
    Coverage {
        /// Number of halfedges reachable from face and hole records.
        covered: usize,
        /// Total number of halfedges.
        total: usize,
    },
    /// A boundary cycle has the wrong orientation, or a hole or isolated vertex of this
    /// face does not lie inside it.
    #[error("wrong containment in face {0:?}")]
    Containment(FixedFaceHandle),
}

impl<T: ArrangementTraits> Arrangement<T> {
    /// Audits the whole structure.
    ///
    /// Checks the mutual consistency of all links and records, the uniqueness of vertices,
    /// the clockwise order of curves around every vertex and the containment of holes and
    /// isolated vertices. Runs in `O(n log n + h * c)` for `n` elements, `h` holes and
    /// isolated vertices and boundary cycles of size at most `c`.
    ///
    /// Failures are logged with level `warn`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let result = self.check_links()
            .and_then(|_| self.check_vertex_records())
            .and_then(|_| self.check_face_records())
            .and_then(|_| self.check_geometry())
            .and_then(|_| self.check_containment());
        if let Err(error) = &result {
            warn!("Arrangement validation failed: {}", error);
        }
        result
    }

    /// Returns `true` if [validate](Arrangement::validate) succeeds.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn check_links(&self) -> Result<(), ValidationError> {
        for halfedge in self.all_halfedges().map(|h| h.fix()) {
            let next = self.dcel.next(halfedge);
            let prev = self.dcel.prev(halfedge);
            if !self.dcel.contains_halfedge(next)
                || !self.dcel.contains_halfedge(prev)
                || !self.dcel.contains_vertex(self.dcel.target(halfedge))
                || self.dcel.prev(next) != halfedge
                || self.dcel.next(prev) != halfedge
                || self.dcel.source(next) != self.dcel.target(halfedge)
                || self.dcel.is_fictitious(halfedge) != self.dcel.is_fictitious(halfedge.twin())
            {
                return Err(ValidationError::BrokenLink(halfedge));
            }

            let expected = match self.dcel.direction(halfedge) {
                HalfedgeDirection::LeftToRight => Ordering::Less,
                HalfedgeDirection::RightToLeft => Ordering::Greater,
            };
            let actual =
                self.compare_vertices_xy(self.dcel.source(halfedge), self.dcel.target(halfedge));
            if actual != expected {
                return Err(ValidationError::DirectionFlag(halfedge));
            }
        }

        let mut visited: HashSet<FixedHalfedgeHandle> = HashSet::new();
        for halfedge in self.all_halfedges().map(|h| h.fix()) {
            if visited.contains(&halfedge) {
                continue;
            }
            let incidence = self.dcel.incidence(halfedge);
            let mut current = halfedge;
            loop {
                if !visited.insert(current) {
                    return Err(ValidationError::OpenCycle(halfedge));
                }
                if self.dcel.incidence(current) != incidence {
                    return Err(ValidationError::IncidenceMismatch(halfedge));
                }
                current = self.dcel.next(current);
                if current == halfedge {
                    break;
                }
            }
        }
        Ok(())
    }

    fn check_vertex_records(&self) -> Result<(), ValidationError> {
        let mut at_infinity = 0;
        for vertex in self.all_vertices() {
            let handle = vertex.fix();
            let entry = self.dcel.vertex(handle);
            let valid = match entry.connection {
                VertexConnection::Incident(halfedge) => {
                    self.dcel.contains_halfedge(halfedge) && self.dcel.target(halfedge) == handle
                }
                VertexConnection::Isolated(face) => {
                    entry.point.is_some()
                        && self.dcel.contains_face(face)
                        && self.dcel.face_entry(face).isolated_vertices.contains(&handle)
                }
                VertexConnection::Detached => false,
            };
            if !valid {
                return Err(ValidationError::VertexRecord(handle));
            }
            if entry.is_at_infinity() {
                at_infinity += 1;
                let expected_degree = if entry.is_corner() { 2 } else { 3 };
                if self.dcel.vertex_degree(handle) != expected_degree {
                    return Err(ValidationError::VertexRecord(handle));
                }
            }
        }
        if at_infinity != self.n_inf_verts {
            return Err(ValidationError::VerticesAtInfinity {
                expected: self.n_inf_verts,
                found: at_infinity,
            });
        }
        Ok(())
    }

    fn check_face_records(&self) -> Result<(), ValidationError> {
        let mut covered: HashSet<FixedHalfedgeHandle> = HashSet::new();
        for face in self.all_faces() {
            let handle = face.fix();
            let entry = self.dcel.face_entry(handle);
            match entry.outer_ccb {
                Some(outer) => {
                    if entry.fictitious
                        || !self.dcel.contains_halfedge(outer)
                        || self.dcel.incidence(outer) != Incidence::Outer(handle)
                    {
                        return Err(ValidationError::FaceRecord(handle));
                    }
                    if entry.unbounded != ccb_has_fictitious(&self.dcel, outer) {
                        return Err(ValidationError::UnboundedFlag(handle));
                    }
                    covered.extend(ccb(&self.dcel, outer));
                }
                None if !entry.fictitious => return Err(ValidationError::FaceRecord(handle)),
                None => {}
            }

            for hole in &entry.holes {
                if !self.dcel.contains_hole(*hole) {
                    return Err(ValidationError::FaceRecord(handle));
                }
                let record = self.dcel.hole(*hole);
                if record.face != handle
                    || !self.dcel.contains_halfedge(record.halfedge)
                    || self.dcel.incidence(record.halfedge) != Incidence::Inner(*hole)
                {
                    return Err(ValidationError::FaceRecord(handle));
                }
                covered.extend(ccb(&self.dcel, record.halfedge));
            }

            for vertex in &entry.isolated_vertices {
                if !self.dcel.contains_vertex(*vertex)
                    || self.dcel.vertex(*vertex).connection != VertexConnection::Isolated(handle)
                {
                    return Err(ValidationError::FaceRecord(handle));
                }
            }
        }

        let total = self.dcel.num_halfedges();
        if covered.len() != total || self.dcel.num_holes() != self.count_listed_holes() {
            return Err(ValidationError::Coverage {
                covered: covered.len(),
                total,
            });
        }
        Ok(())
    }

    fn count_listed_holes(&self) -> usize {
        self.all_faces().map(|face| face.number_of_holes()).sum()
    }

    fn check_geometry(&self) -> Result<(), ValidationError> {
        let mut sorted: Vec<FixedVertexHandle> = self
            .all_vertices()
            .filter(|vertex| !vertex.is_fictitious())
            .map(|vertex| vertex.fix())
            .collect();
        sorted.sort_by(|v1, v2| self.compare_vertices_xy(*v1, *v2));
        for pair in sorted.windows(2) {
            if self.compare_vertices_xy(pair[0], pair[1]) == Ordering::Equal {
                return Err(ValidationError::DuplicateVertex(pair[0], pair[1]));
            }
        }

        for vertex in self.vertices() {
            if !self.is_cw_ordered(vertex.fix()) {
                return Err(ValidationError::AngularOrder(vertex.fix()));
            }
        }
        Ok(())
    }

    fn check_containment(&self) -> Result<(), ValidationError> {
        for face in self.faces() {
            let handle = face.fix();
            let entry = self.dcel.face_entry(handle);
            let Some(outer) = entry.outer_ccb else {
                return Err(ValidationError::FaceRecord(handle));
            };
            if !self.is_ccb_ccw(outer) {
                return Err(ValidationError::Containment(handle));
            }

            let hole_reps: Vec<FixedHalfedgeHandle> = entry
                .holes
                .iter()
                .map(|hole| self.dcel.hole(*hole).halfedge)
                .collect();
            let mut points: Vec<(&T::Point, Option<FixedHalfedgeHandle>)> = Vec::new();
            for rep in &hole_reps {
                if self.is_ccb_ccw(*rep) {
                    return Err(ValidationError::Containment(handle));
                }
                let Some(p) = self.point_on_ccb(*rep) else {
                    return Err(ValidationError::Containment(handle));
                };
                points.push((p, Some(*rep)));
            }
            for vertex in &entry.isolated_vertices {
                if let Some(p) = self.dcel.point(*vertex) {
                    points.push((p, None));
                }
            }

            for (p, own_hole) in points {
                if !self.point_is_in(p, outer) {
                    return Err(ValidationError::Containment(handle));
                }
                let inside_other_hole = hole_reps
                    .iter()
                    .filter(|rep| Some(**rep) != own_hole)
                    .any(|rep| self.point_is_in(p, *rep));
                if inside_other_hole {
                    return Err(ValidationError::Containment(handle));
                }
            }
        }
        Ok(())
    }
}
