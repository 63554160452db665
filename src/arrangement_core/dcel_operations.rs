use super::dcel::{Dcel, EdgeEntry, FaceEntry, HalfedgeEntry, HoleEntry, Incidence, VertexConnection, VertexEntry};
use super::handles::*;
use crate::{BoundaryType, HalfedgeDirection};

/// The four corner vertices of the fictitious rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(crate = "serde")
)]
pub(crate) struct Corners {
    pub(crate) bottom_left: FixedVertexHandle,
    pub(crate) top_left: FixedVertexHandle,
    pub(crate) bottom_right: FixedVertexHandle,
    pub(crate) top_right: FixedVertexHandle,
}

impl Corners {
    pub(crate) fn contains(&self, vertex: FixedVertexHandle) -> bool {
        [
            self.bottom_left,
            self.top_left,
            self.bottom_right,
            self.top_right,
        ]
        .contains(&vertex)
    }
}

pub(crate) struct Scaffold {
    pub(crate) corners: Corners,
    pub(crate) fictitious_face: FixedFaceHandle,
}

/// Builds the fictitious rectangle into an empty DCEL.
///
/// ```text
///  tl <------------- tr
///   |                ^
///   |    unbounded   |
///   |      face      |
///   v                |
///  bl -------------> br
///
///  (fictitious face outside)
/// ```
///
/// The inner halfedges form the outer boundary of the unbounded face. Their twins form the
/// single hole of the fictitious face.
pub(crate) fn new_scaffold<P, C>(dcel: &mut Dcel<P, C>) -> Scaffold {
    use BoundaryType::*;
    use HalfedgeDirection::*;

    let unbounded_face = dcel.faces.insert(FaceEntry {
        unbounded: true,
        ..Default::default()
    });
    let fictitious_face = dcel.faces.insert(FaceEntry {
        unbounded: true,
        fictitious: true,
        ..Default::default()
    });

    let bottom_left = create_vertex(dcel, None, MinusInfinity, MinusInfinity);
    let top_left = create_vertex(dcel, None, MinusInfinity, PlusInfinity);
    let bottom_right = create_vertex(dcel, None, PlusInfinity, MinusInfinity);
    let top_right = create_vertex(dcel, None, PlusInfinity, PlusInfinity);

    let inner = Incidence::Outer(unbounded_face);
    // Placeholder, fixed as soon as the hole record exists.
    let outer = Incidence::Outer(fictitious_face);

    let bottom = create_edge(dcel, None, bottom_left, bottom_right, LeftToRight, inner, outer);
    let right = create_edge(dcel, None, bottom_right, top_right, LeftToRight, inner, outer);
    let top = create_edge(dcel, None, top_right, top_left, RightToLeft, inner, outer);
    let left = create_edge(dcel, None, top_left, bottom_left, RightToLeft, inner, outer);

    link(dcel, bottom, right);
    link(dcel, right, top);
    link(dcel, top, left);
    link(dcel, left, bottom);

    link(dcel, left.twin(), top.twin());
    link(dcel, top.twin(), right.twin());
    link(dcel, right.twin(), bottom.twin());
    link(dcel, bottom.twin(), left.twin());

    dcel.vertex_mut(bottom_left).connection = VertexConnection::Incident(left);
    dcel.vertex_mut(bottom_right).connection = VertexConnection::Incident(bottom);
    dcel.vertex_mut(top_right).connection = VertexConnection::Incident(right);
    dcel.vertex_mut(top_left).connection = VertexConnection::Incident(top);

    dcel.face_entry_mut(unbounded_face).outer_ccb = Some(bottom);

    let hole = dcel.holes.insert(HoleEntry {
        face: fictitious_face,
        halfedge: bottom.twin(),
    });
    dcel.face_entry_mut(fictitious_face).holes.push(hole);
    set_ccb_incidence(dcel, bottom.twin(), Incidence::Inner(hole));

    Scaffold {
        corners: Corners {
            bottom_left,
            top_left,
            bottom_right,
            top_right,
        },
        fictitious_face,
    }
}

pub(crate) fn create_vertex<P, C>(
    dcel: &mut Dcel<P, C>,
    point: Option<P>,
    ps_x: BoundaryType,
    ps_y: BoundaryType,
) -> FixedVertexHandle {
    dcel.vertices.insert(VertexEntry {
        point,
        ps_x,
        ps_y,
        connection: VertexConnection::Detached,
    })
}

/// Creates a new twin pair `from -> to` and returns its normalized halfedge, pointing to `to`.
///
/// The pair starts out as a closed 2-cycle: each halfedge is the other's `next` and `prev`.
/// `direction` is the direction of the returned halfedge.
pub(crate) fn create_edge<P, C>(
    dcel: &mut Dcel<P, C>,
    curve: Option<C>,
    from: FixedVertexHandle,
    to: FixedVertexHandle,
    direction: HalfedgeDirection,
    incidence: Incidence,
    twin_incidence: Incidence,
) -> FixedHalfedgeHandle {
    let edge = dcel.edges.insert_with_key(|edge| {
        let normalized = FixedHalfedgeHandle::new(edge, 0);
        let twin = normalized.twin();
        EdgeEntry {
            entries: [
                HalfedgeEntry {
                    next: twin,
                    prev: twin,
                    target: to,
                    incidence,
                },
                HalfedgeEntry {
                    next: normalized,
                    prev: normalized,
                    target: from,
                    incidence: twin_incidence,
                },
            ],
            curve,
            direction,
        }
    });
    edge.as_halfedge()
}

pub(crate) fn new_face<P, C>(dcel: &mut Dcel<P, C>) -> FixedFaceHandle {
    dcel.faces.insert(FaceEntry::default())
}

/// Makes `to` the successor of `from`.
#[inline]
pub(crate) fn link<P, C>(dcel: &mut Dcel<P, C>, from: FixedHalfedgeHandle, to: FixedHalfedgeHandle) {
    dcel.half_edge_mut(from).next = to;
    dcel.half_edge_mut(to).prev = from;
}

/// Iterates over a boundary cycle by following `next` links, starting with `start`.
pub(crate) struct CcbWalk<'a, P, C> {
    dcel: &'a Dcel<P, C>,
    start: FixedHalfedgeHandle,
    current: Option<FixedHalfedgeHandle>,
}

impl<'a, P, C> Iterator for CcbWalk<'a, P, C> {
    type Item = FixedHalfedgeHandle;

    fn next(&mut self) -> Option<FixedHalfedgeHandle> {
        let current = self.current?;
        let next = self.dcel.next(current);
        self.current = if next == self.start { None } else { Some(next) };
        Some(current)
    }
}

pub(crate) fn ccb<P, C>(dcel: &Dcel<P, C>, start: FixedHalfedgeHandle) -> CcbWalk<'_, P, C> {
    CcbWalk {
        dcel,
        start,
        current: Some(start),
    }
}

pub(crate) fn set_ccb_incidence<P, C>(
    dcel: &mut Dcel<P, C>,
    start: FixedHalfedgeHandle,
    incidence: Incidence,
) {
    let mut current = start;
    loop {
        dcel.half_edge_mut(current).incidence = incidence;
        current = dcel.next(current);
        if current == start {
            break;
        }
    }
}

pub(crate) fn ccb_has_fictitious<P, C>(dcel: &Dcel<P, C>, start: FixedHalfedgeHandle) -> bool {
    ccb(dcel, start).any(|current| dcel.is_fictitious(current))
}

/// Splits the edge of `halfedge` at the detached vertex `vertex`.
///
/// ```text
/// Before:
///          halfedge
///   s -------------------> t
///     <-------------------
///          twin
///
/// After:
///      halfedge       new
///   s ----------> v ----------> t
///     <---------    <----------
///        twin        new.twin
/// ```
///
/// `halfedge` keeps its storage and now ends in `vertex`. The returned halfedge continues it
/// up to the old target, with the same direction and incidence. `first_curve` replaces the
/// curve of `halfedge`, `second_curve` becomes the curve of the new edge.
pub(crate) fn split_edge<P, C>(
    dcel: &mut Dcel<P, C>,
    halfedge: FixedHalfedgeHandle,
    vertex: FixedVertexHandle,
    first_curve: Option<C>,
    second_curve: Option<C>,
) -> FixedHalfedgeHandle {
    let twin = halfedge.twin();
    let target = dcel.target(halfedge);
    let halfedge_next = dcel.next(halfedge);
    let twin_prev = dcel.prev(twin);
    let direction = dcel.direction(halfedge);
    let incidence = dcel.incidence(halfedge);
    let twin_incidence = dcel.incidence(twin);

    let new = create_edge(
        dcel,
        second_curve,
        vertex,
        target,
        direction,
        incidence,
        twin_incidence,
    );
    let new_twin = new.twin();

    if halfedge_next == twin {
        // `target` had degree one.
        link(dcel, new, new_twin);
    } else {
        link(dcel, new, halfedge_next);
        link(dcel, twin_prev, new_twin);
    }
    link(dcel, halfedge, new);
    link(dcel, new_twin, twin);

    dcel.half_edge_mut(halfedge).target = vertex;
    dcel.edge_entry_mut(halfedge.as_edge()).curve = first_curve;

    if dcel.vertex(target).connection == VertexConnection::Incident(halfedge) {
        dcel.vertex_mut(target).connection = VertexConnection::Incident(new);
    }
    dcel.vertex_mut(vertex).connection = VertexConnection::Incident(halfedge);

    new
}

/// Merges two consecutive halfedges `first: a -> v` and `second: v -> b` into `first`.
///
/// `v` must have degree two. The edge of `second` is deleted; `v` is left detached and must be
/// removed by the caller. `first` now points to `b`.
pub(crate) fn merge_edges<P, C>(
    dcel: &mut Dcel<P, C>,
    first: FixedHalfedgeHandle,
    second: FixedHalfedgeHandle,
) -> FixedVertexHandle {
    let vertex = dcel.target(first);
    debug_assert_eq!(dcel.next(first), second);
    debug_assert_eq!(dcel.source(second), vertex);

    let target = dcel.target(second);
    let second_next = dcel.next(second);
    let second_twin_prev = dcel.prev(second.twin());

    if second_next == second.twin() {
        link(dcel, first, first.twin());
    } else {
        link(dcel, first, second_next);
        link(dcel, second_twin_prev, first.twin());
    }
    dcel.half_edge_mut(first).target = target;

    if dcel.vertex(target).connection == VertexConnection::Incident(second) {
        dcel.vertex_mut(target).connection = VertexConnection::Incident(first);
    }
    replace_representative(dcel, second, first);
    replace_representative(dcel, second.twin(), first.twin());

    dcel.vertex_mut(vertex).connection = VertexConnection::Detached;
    dcel.edges.remove(second.as_edge());
    vertex
}

/// Points every face or hole record that refers to `old` to `new` instead.
///
/// Both halfedges must lie on the same boundary cycle.
pub(crate) fn replace_representative<P, C>(
    dcel: &mut Dcel<P, C>,
    old: FixedHalfedgeHandle,
    new: FixedHalfedgeHandle,
) {
    match dcel.incidence(old) {
        Incidence::Outer(face) => {
            let entry = dcel.face_entry_mut(face);
            if entry.outer_ccb == Some(old) {
                entry.outer_ccb = Some(new);
            }
        }
        Incidence::Inner(hole) => {
            let entry = dcel.hole_mut(hole);
            if entry.halfedge == old {
                entry.halfedge = new;
            }
        }
    }
}

/// Removes `item` from an ordered record list. Returns `false` if it was not listed.
pub(crate) fn remove_from_list<K: PartialEq>(list: &mut Vec<K>, item: K) -> bool {
    if let Some(index) = list.iter().position(|current| *current == item) {
        list.remove(index);
        true
    } else {
        false
    }
}
