//! # Arrangement
//!
//! Planar arrangements of x-monotone curves.
//!
//! An [Arrangement] subdivides the plane into vertices, edges and faces induced by a set of
//! pairwise interior-disjoint x-monotone curves. The subdivision is stored as a doubly
//! connected edge list and updated incrementally: inserting a curve that closes a cycle
//! splits a face, removing an edge merges the faces on both sides, and holes and isolated
//! vertices are relocated accordingly.
//!
//! # Features
//! * Incremental insertion of curves into face interiors, from existing vertices and
//!   between existing vertices
//! * Edge splitting and merging, vertex and curve replacement
//! * Edge and vertex removal with automatic face merging
//! * Unbounded curves (rays and lines) ending on a fictitious bounding rectangle
//! * Observers that are notified before and after each structural change, see
//!   [ArrangementObserver]
//! * A full structural audit, see [Arrangement::validate]
//! * Pluggable geometry through [ArrangementTraits]. Bundled are [SegmentTraits] for line
//!   segments and [LinearTraits] for segments, rays and lines
//! * Supports `serde` with the `serde` feature
//!
//! Point location, curve intersection and sweep line algorithms are out of scope: every
//! insertion expects the caller to know where the curve goes.
//!
//! # Logging
//! Structural changes are reported through the [log](https://docs.rs/log) facade. Each
//! public operation emits a `trace` record, face splits and merges a `debug` record and
//! failed audits a `warn` record. Nothing is printed unless a logger is installed.

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(missing_docs)]

mod arrangement;
mod arrangement_core;
mod linear_traits;
mod math;
mod observer;
mod point;
mod segment_traits;
mod traits;

#[cfg(test)]
mod test_utilities;

pub use crate::arrangement::Arrangement;
pub use crate::arrangement_core::ValidationError;
pub use crate::linear_traits::{LinearCurve, LinearTraits};
pub use crate::observer::{ArrangementObserver, SharedObserver};
pub use crate::point::{ArrangementNum, Point2};
pub use crate::segment_traits::{Segment, SegmentTraits};
pub use crate::traits::{
    ArrangementTraits, Bounded, BoundaryCategory, BoundaryType, CurveEnd, HalfedgeDirection,
    Unbounded,
};

/// Handle types used for traversal and modification of arrangements.
///
/// A handle can either be a *fixed handle* (e.g. [FixedVertexHandle]) or a *dynamic handle*
/// (e.g. [VertexHandle]). Fixed handles are plain keys: they are `Copy`, hashable and do not
/// borrow the arrangement, which is why all modifying methods take and return them. Dynamic
/// handles borrow the arrangement immutably and are used for navigation:
///
/// ```
/// use arrangement::{Arrangement, Point2, Segment, SegmentTraits};
///
/// let mut arrangement = Arrangement::<SegmentTraits<f64>>::new();
/// let face = arrangement.unbounded_face().fix();
/// let segment = Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
///
/// // Fixed handle, returned by a modifying method
/// let halfedge = arrangement.insert_in_face_interior(segment, face);
/// // Dynamic handle
/// let dynamic = arrangement.halfedge(halfedge);
/// assert_eq!(dynamic.twin().twin(), dynamic);
/// assert_eq!(dynamic.next(), dynamic.twin());
/// // Back to a fixed handle
/// assert_eq!(dynamic.fix(), halfedge);
/// ```
///
/// Fixed handles remain valid until the element they refer to is removed. Removed keys are
/// never reused by the same arrangement, including across
/// [clear](crate::Arrangement::clear). [assign](crate::Arrangement::assign) adopts the keys
/// of the source arrangement.
pub mod handles {
    pub use crate::arrangement_core::{
        DynamicHandleImpl, FaceHandle, FixedEdgeHandle, FixedFaceHandle, FixedHalfedgeHandle,
        FixedVertexHandle, HalfedgeHandle, VertexHandle,
    };

    pub use crate::arrangement_core::iterators;
}
