pub use super::handle_defs::*;

/// Handle to a vertex.
///
/// A vertex is either a finite point, the end of an unbounded curve (a *vertex at infinity*)
/// or one of the four corners of the fictitious rectangle.
///
/// *See also the [handles](crate::handles) module.*
pub type VertexHandle<'a, T> = DynamicHandleImpl<'a, T, FixedVertexHandle>;

/// Handle to a halfedge.
///
/// Every edge is represented by two twin halfedges of opposite direction. The face a
/// halfedge bounds always lies to its left.
///
/// *See also the [handles](crate::handles) module.*
pub type HalfedgeHandle<'a, T> = DynamicHandleImpl<'a, T, FixedHalfedgeHandle>;

/// Handle to a face.
///
/// *See also the [handles](crate::handles) module.*
pub type FaceHandle<'a, T> = DynamicHandleImpl<'a, T, FixedFaceHandle>;
