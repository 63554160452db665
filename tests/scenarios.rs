use std::cell::RefCell;
use std::rc::Rc;

use arrangement::handles::{FixedFaceHandle, FixedHalfedgeHandle, FixedVertexHandle};
use arrangement::{
    Arrangement, ArrangementObserver, LinearCurve, LinearTraits, Point2, Segment, SegmentTraits,
    SharedObserver,
};

type Traits = SegmentTraits<f64>;

fn segment(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment<f64> {
    Segment::new(Point2::new(x0, y0), Point2::new(x1, y1))
}

/// Inserts an axis aligned square into face `face` and returns the face it encloses.
fn square(
    arrangement: &mut Arrangement<Traits>,
    face: FixedFaceHandle,
    x: f64,
    y: f64,
    size: f64,
) -> FixedFaceHandle {
    let bottom = arrangement.insert_in_face_interior(segment(x, y, x + size, y), face);
    let v0 = arrangement.halfedge(bottom).source().fix();
    let v1 = arrangement.halfedge(bottom).target().fix();
    let right = arrangement.insert_from_left_vertex(segment(x + size, y, x + size, y + size), v1);
    let v2 = arrangement.halfedge(right).target().fix();
    let left = arrangement.insert_from_left_vertex(segment(x, y, x, y + size), v0);
    let v3 = arrangement.halfedge(left).target().fix();
    let top = arrangement.insert_at_vertices(segment(x, y + size, x + size, y + size), v3, v2);
    // The top edge runs left to right, the enclosed face lies below it.
    arrangement.halfedge(top).twin().face().fix()
}

fn counts<T: arrangement::ArrangementTraits>(arrangement: &Arrangement<T>) -> [usize; 4] {
    [
        arrangement.number_of_vertices(),
        arrangement.number_of_edges(),
        arrangement.number_of_faces(),
        arrangement.number_of_isolated_vertices(),
    ]
}

#[test]
fn fictitious_scaffold() {
    let arrangement = Arrangement::<LinearTraits<f64>>::new();
    assert_eq!(arrangement.all_vertices().count(), 4);
    assert!(arrangement.all_vertices().all(|vertex| vertex.is_fictitious()));
    assert_eq!(arrangement.all_halfedges().count(), 8);
    assert!(arrangement.all_halfedges().all(|halfedge| halfedge.is_fictitious()));
    assert_eq!(arrangement.number_of_faces(), 1);
    assert_eq!(arrangement.all_faces().count(), 2);
    assert!(arrangement.fictitious_face().is_fictitious());
}

#[test]
fn twin_symmetry_and_cycle_closure() {
    let mut arrangement = Arrangement::<LinearTraits<f64>>::new();
    let face = arrangement.unbounded_face().fix();
    let ray = LinearCurve::ray(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
    arrangement.insert_in_face_interior(ray, face);
    let line = LinearCurve::line(Point2::new(0.0, -1.0), Point2::new(1.0, -1.0));
    arrangement.insert_in_face_interior(line, face);
    let segment = LinearCurve::segment(Point2::new(2.0, -3.0), Point2::new(3.0, -2.0));
    let lower = arrangement
        .unbounded_faces()
        .find(|face| {
            face.outer_ccb_iter()
                .any(|halfedge| halfedge.curve() == Some(&line))
                && !face
                    .outer_ccb_iter()
                    .any(|halfedge| halfedge.curve() == Some(&ray))
        })
        .unwrap()
        .fix();
    arrangement.insert_in_face_interior(segment, lower);
    arrangement.validate().unwrap();

    let total = arrangement.all_halfedges().count();
    assert_eq!(total % 2, 0);
    for halfedge in arrangement.all_halfedges() {
        assert_eq!(halfedge.twin().twin(), halfedge);
        assert_eq!(halfedge.twin().curve(), halfedge.curve());
        assert_eq!(halfedge.twin().is_fictitious(), halfedge.is_fictitious());

        let forward: Vec<_> = halfedge.ccb().collect();
        assert!(forward.len() <= total);
        assert_eq!(forward[0], halfedge);
        assert_eq!(forward.last().unwrap().next(), halfedge);

        let mut backward: Vec<_> = halfedge.ccb().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

#[test]
fn split_merge_round_trip() {
    let mut arrangement = Arrangement::<Traits>::new();
    let face = arrangement.unbounded_face().fix();
    let halfedge = arrangement.insert_in_face_interior(segment(0.0, 0.0, 3.0, 3.0), face);
    let before = counts(&arrangement);

    let first = arrangement.split_edge(
        halfedge,
        segment(0.0, 0.0, 1.0, 1.0),
        segment(1.0, 1.0, 3.0, 3.0),
    );
    assert_eq!(arrangement.number_of_edges(), 2);
    let second = arrangement.halfedge(first).next().fix();
    let merged = arrangement.merge_edge(first, second, segment(0.0, 0.0, 3.0, 3.0));

    assert_eq!(counts(&arrangement), before);
    let merged = arrangement.halfedge(merged);
    assert_eq!(merged.source().point(), Some(&Point2::new(0.0, 0.0)));
    assert_eq!(merged.target().point(), Some(&Point2::new(3.0, 3.0)));
    assert_eq!(merged.curve(), Some(&segment(0.0, 0.0, 3.0, 3.0)));
    arrangement.validate().unwrap();
}

#[test]
fn insert_then_remove_keeps_counts() {
    let mut arrangement = Arrangement::<Traits>::new();
    let face = arrangement.unbounded_face().fix();
    let inner = square(&mut arrangement, face, 0.0, 0.0, 4.0);
    arrangement.insert_isolated_vertex(Point2::new(1.0, 1.0), inner);
    let before = counts(&arrangement);

    let corner = arrangement
        .vertices()
        .find(|vertex| vertex.point() == Some(&Point2::new(4.0, 4.0)))
        .unwrap()
        .fix();
    let antenna = arrangement.insert_from_left_vertex(segment(4.0, 4.0, 6.0, 5.0), corner);
    let hole = arrangement.insert_in_face_interior(segment(2.0, 1.0, 3.0, 1.0), inner);
    let isolated = arrangement.insert_isolated_vertex(Point2::new(9.0, 9.0), face);
    assert_ne!(counts(&arrangement), before);

    arrangement.remove_edge(antenna, false, true);
    arrangement.remove_edge(hole, true, true);
    arrangement.remove_isolated_vertex(isolated);
    assert_eq!(counts(&arrangement), before);
    arrangement.validate().unwrap();
}

struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl ArrangementObserver<Traits> for Recorder {
    fn before_create_vertex(&mut self, _: &Arrangement<Traits>, _: &Point2<f64>) {
        self.log.borrow_mut().push(format!("before {}", self.name));
    }

    fn after_create_vertex(&mut self, _: &Arrangement<Traits>, _: FixedVertexHandle) {
        self.log.borrow_mut().push(format!("after {}", self.name));
    }
}

#[test]
fn observer_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut arrangement = Arrangement::<Traits>::new();
    for name in ["A", "B"] {
        let observer: SharedObserver<Traits> = Rc::new(RefCell::new(Recorder {
            name,
            log: log.clone(),
        }));
        arrangement.register_observer(observer);
    }

    let face = arrangement.unbounded_face().fix();
    arrangement.insert_isolated_vertex(Point2::new(0.0, 0.0), face);
    assert_eq!(*log.borrow(), vec!["before A", "before B", "after B", "after A"]);
}

#[test]
fn isolated_vertex_at_origin() {
    let mut arrangement = Arrangement::<Traits>::new();
    let face = arrangement.unbounded_face().fix();
    let vertex = arrangement.insert_isolated_vertex(Point2::new(0.0, 0.0), face);

    assert_eq!(arrangement.number_of_isolated_vertices(), 1);
    assert_eq!(arrangement.number_of_vertices(), 1);
    assert_eq!(arrangement.number_of_edges(), 0);
    assert_eq!(arrangement.number_of_faces(), 1);
    let vertex = arrangement.vertex(vertex);
    assert!(vertex.is_isolated());
    assert_eq!(vertex.face(), Some(arrangement.unbounded_face()));
    assert_eq!(vertex.degree(), 0);
    arrangement.validate().unwrap();
}

#[test]
fn nested_holes() {
    let mut arrangement = Arrangement::<Traits>::new();
    let unbounded = arrangement.unbounded_face().fix();
    let outer = square(&mut arrangement, unbounded, 0.0, 0.0, 10.0);
    let inner = square(&mut arrangement, outer, 2.0, 2.0, 4.0);

    assert_ne!(outer, inner);
    assert_eq!(arrangement.number_of_faces(), 3);
    assert_eq!(arrangement.face(unbounded).number_of_holes(), 1);
    assert_eq!(arrangement.face(outer).number_of_holes(), 1);
    assert_eq!(arrangement.face(inner).number_of_holes(), 0);

    let hole = arrangement.face(outer).holes().next().unwrap();
    assert!(hole.is_on_hole());
    assert!(hole
        .ccb()
        .all(|halfedge| halfedge.twin().face().fix() == inner));
    arrangement.validate().unwrap();
}

#[test]
fn closing_a_loop_relocates_contents() {
    let mut arrangement = Arrangement::<Traits>::new();
    let face = arrangement.unbounded_face().fix();
    let inside_vertex = arrangement.insert_isolated_vertex(Point2::new(2.0, 1.0), face);
    let outside_vertex = arrangement.insert_isolated_vertex(Point2::new(2.0, -1.0), face);
    let inside_hole = arrangement.insert_in_face_interior(segment(1.5, 0.5, 2.5, 0.5), face);
    let outside_hole = arrangement.insert_in_face_interior(segment(5.0, 0.0, 6.0, 0.0), face);

    let e0 = arrangement.insert_in_face_interior(segment(0.0, 0.0, 4.0, 0.0), face);
    let v0 = arrangement.halfedge(e0).source().fix();
    let v1 = arrangement.halfedge(e0).target().fix();
    let e1 = arrangement.insert_from_right_vertex(segment(2.0, 4.0, 4.0, 0.0), v1);
    let v2 = arrangement.halfedge(e1).target().fix();
    assert_eq!(arrangement.number_of_faces(), 1);

    let closing = arrangement.insert_at_vertices(segment(0.0, 0.0, 2.0, 4.0), v0, v2);
    assert_eq!(arrangement.number_of_faces(), 2);
    let closing = arrangement.halfedge(closing);
    let triangle = if closing.face().is_unbounded() {
        closing.twin().face()
    } else {
        closing.face()
    };

    assert_eq!(arrangement.vertex(inside_vertex).face(), Some(triangle));
    assert_eq!(
        arrangement.vertex(outside_vertex).face(),
        Some(arrangement.unbounded_face())
    );
    assert_eq!(arrangement.halfedge(inside_hole).face(), triangle);
    assert_eq!(
        arrangement.halfedge(outside_hole).face(),
        arrangement.unbounded_face()
    );
    assert_eq!(triangle.number_of_holes(), 1);
    assert_eq!(triangle.number_of_isolated_vertices(), 1);
    arrangement.validate().unwrap();
}

#[test]
fn removing_a_divider_merges_contents() {
    let mut arrangement = Arrangement::<Traits>::new();
    let face = arrangement.unbounded_face().fix();
    let b1 = arrangement.insert_in_face_interior(segment(0.0, 0.0, 2.0, 0.0), face);
    let v00 = arrangement.halfedge(b1).source().fix();
    let v20 = arrangement.halfedge(b1).target().fix();
    let b2 = arrangement.insert_from_left_vertex(segment(2.0, 0.0, 4.0, 0.0), v20);
    let v40 = arrangement.halfedge(b2).target().fix();
    let r = arrangement.insert_from_left_vertex(segment(4.0, 0.0, 4.0, 2.0), v40);
    let v42 = arrangement.halfedge(r).target().fix();
    let t2 = arrangement.insert_from_right_vertex(segment(2.0, 2.0, 4.0, 2.0), v42);
    let v22 = arrangement.halfedge(t2).target().fix();
    let t1 = arrangement.insert_from_right_vertex(segment(0.0, 2.0, 2.0, 2.0), v22);
    let v02 = arrangement.halfedge(t1).target().fix();
    arrangement.insert_at_vertices(segment(0.0, 0.0, 0.0, 2.0), v00, v02);
    let divider = arrangement.insert_at_vertices(segment(2.0, 0.0, 2.0, 2.0), v20, v22);
    assert_eq!(arrangement.number_of_faces(), 3);

    // The divider points upwards, the left cell lies to its left.
    let left = arrangement.halfedge(divider).face().fix();
    let right = arrangement.halfedge(divider).twin().face().fix();
    let mut expected_vertices: Vec<FixedVertexHandle> = vec![
        arrangement.insert_isolated_vertex(Point2::new(1.0, 1.5), left),
        arrangement.insert_isolated_vertex(Point2::new(3.0, 1.5), right),
    ];
    let expected_holes: Vec<FixedHalfedgeHandle> = vec![
        arrangement.insert_in_face_interior(segment(0.5, 0.5, 1.5, 0.5), left),
        arrangement.insert_in_face_interior(segment(2.5, 0.5, 3.5, 0.5), right),
    ];
    arrangement.validate().unwrap();

    let survivor = arrangement.remove_edge(divider, false, false);
    assert_eq!(arrangement.number_of_faces(), 2);
    let survivor = arrangement.face(survivor);
    assert!(!survivor.is_unbounded());

    let mut vertices: Vec<_> = survivor.isolated_vertices().map(|v| v.fix()).collect();
    vertices.sort();
    expected_vertices.sort();
    assert_eq!(vertices, expected_vertices);

    let mut holes: Vec<_> = survivor
        .holes()
        .map(|hole| hole.as_edge())
        .collect();
    holes.sort();
    let mut expected_holes: Vec<_> = expected_holes.into_iter().map(|h| h.as_edge()).collect();
    expected_holes.sort();
    assert_eq!(holes, expected_holes);
    arrangement.validate().unwrap();
}

fn vertex_at(arrangement: &Arrangement<Traits>, x: f64, y: f64) -> FixedVertexHandle {
    arrangement
        .vertices()
        .find(|vertex| vertex.point() == Some(&Point2::new(x, y)))
        .unwrap()
        .fix()
}

/// Records the structural notifications of an arrangement by name.
#[derive(Default)]
struct EventLog {
    events: Vec<&'static str>,
    split: Option<(FixedHalfedgeHandle, FixedHalfedgeHandle)>,
}

impl ArrangementObserver<Traits> for EventLog {
    fn before_create_vertex(&mut self, _: &Arrangement<Traits>, _: &Point2<f64>) {
        self.events.push("before_create_vertex");
    }

    fn after_create_vertex(&mut self, _: &Arrangement<Traits>, _: FixedVertexHandle) {
        self.events.push("after_create_vertex");
    }

    fn before_create_edge(
        &mut self,
        _: &Arrangement<Traits>,
        _: &Segment<f64>,
        _: FixedVertexHandle,
        _: FixedVertexHandle,
    ) {
        self.events.push("before_create_edge");
    }

    fn after_create_edge(&mut self, _: &Arrangement<Traits>, _: FixedHalfedgeHandle) {
        self.events.push("after_create_edge");
    }

    fn before_split_edge(
        &mut self,
        _: &Arrangement<Traits>,
        _: FixedHalfedgeHandle,
        _: FixedVertexHandle,
        _: &Segment<f64>,
        _: &Segment<f64>,
    ) {
        self.events.push("before_split_edge");
    }

    fn after_split_edge(
        &mut self,
        _: &Arrangement<Traits>,
        e1: FixedHalfedgeHandle,
        e2: FixedHalfedgeHandle,
    ) {
        self.events.push("after_split_edge");
        self.split = Some((e1, e2));
    }

    fn before_split_face(&mut self, _: &Arrangement<Traits>, _: FixedFaceHandle, _: FixedHalfedgeHandle) {
        self.events.push("before_split_face");
    }

    fn after_split_face(
        &mut self,
        _: &Arrangement<Traits>,
        _: FixedFaceHandle,
        _: FixedFaceHandle,
        is_hole: bool,
    ) {
        self.events.push(if is_hole {
            "after_split_face hole"
        } else {
            "after_split_face outer"
        });
    }

    fn before_merge_hole(
        &mut self,
        _: &Arrangement<Traits>,
        _: FixedFaceHandle,
        _: FixedHalfedgeHandle,
        _: FixedHalfedgeHandle,
        _: FixedHalfedgeHandle,
    ) {
        self.events.push("before_merge_hole");
    }

    fn after_merge_hole(&mut self, _: &Arrangement<Traits>, _: FixedFaceHandle, _: FixedHalfedgeHandle) {
        self.events.push("after_merge_hole");
    }

    fn before_remove_hole(&mut self, _: &Arrangement<Traits>, _: FixedFaceHandle, _: FixedHalfedgeHandle) {
        self.events.push("before_remove_hole");
    }

    fn after_remove_hole(&mut self, _: &Arrangement<Traits>, _: FixedFaceHandle) {
        self.events.push("after_remove_hole");
    }

    fn before_move_hole(
        &mut self,
        _: &Arrangement<Traits>,
        _: FixedFaceHandle,
        _: FixedFaceHandle,
        _: FixedHalfedgeHandle,
    ) {
        self.events.push("before_move_hole");
    }

    fn after_move_hole(&mut self, _: &Arrangement<Traits>, _: FixedHalfedgeHandle) {
        self.events.push("after_move_hole");
    }

    fn before_move_isolated_vertex(
        &mut self,
        _: &Arrangement<Traits>,
        _: FixedFaceHandle,
        _: FixedFaceHandle,
        _: FixedVertexHandle,
    ) {
        self.events.push("before_move_isolated_vertex");
    }

    fn after_move_isolated_vertex(&mut self, _: &Arrangement<Traits>, _: FixedVertexHandle) {
        self.events.push("after_move_isolated_vertex");
    }
}

fn attach_log(arrangement: &mut Arrangement<Traits>) -> Rc<RefCell<EventLog>> {
    let log = Rc::new(RefCell::new(EventLog::default()));
    arrangement.register_observer(log.clone());
    log
}

#[test]
fn connecting_two_holes_merges_them() {
    let mut arrangement = Arrangement::<Traits>::new();
    let face = arrangement.unbounded_face().fix();
    arrangement.insert_in_face_interior(segment(0.0, 0.0, 1.0, 0.0), face);
    arrangement.insert_in_face_interior(segment(2.0, 0.0, 3.0, 1.0), face);
    assert_eq!(arrangement.face(face).number_of_holes(), 2);

    let log = attach_log(&mut arrangement);
    let v1 = vertex_at(&arrangement, 1.0, 0.0);
    let v2 = vertex_at(&arrangement, 2.0, 0.0);
    let bridge = arrangement.insert_at_vertices(segment(1.0, 0.0, 2.0, 0.0), v1, v2);

    assert_eq!(
        log.borrow().events,
        vec![
            "before_create_edge",
            "after_create_edge",
            "before_merge_hole",
            "after_merge_hole",
        ]
    );
    assert_eq!(arrangement.number_of_faces(), 1);
    let face = arrangement.face(face);
    assert_eq!(face.number_of_holes(), 1);
    let hole = face.holes().next().unwrap();
    assert_eq!(hole.ccb().count(), 6);
    assert!(hole.ccb().any(|halfedge| halfedge.fix() == bridge));
    assert!(arrangement.halfedge(bridge).is_on_hole());
    arrangement.validate().unwrap();
}

#[test]
fn connecting_a_hole_to_the_outer_boundary() {
    let mut arrangement = Arrangement::<Traits>::new();
    let unbounded = arrangement.unbounded_face().fix();
    let inner = square(&mut arrangement, unbounded, 0.0, 0.0, 4.0);
    arrangement.insert_in_face_interior(segment(1.0, 1.0, 2.0, 1.0), inner);
    assert_eq!(arrangement.face(inner).number_of_holes(), 1);

    let log = attach_log(&mut arrangement);
    let corner = vertex_at(&arrangement, 0.0, 0.0);
    let hole_end = vertex_at(&arrangement, 1.0, 1.0);
    let bridge = arrangement.insert_at_vertices(segment(0.0, 0.0, 1.0, 1.0), corner, hole_end);

    assert_eq!(
        log.borrow().events,
        vec![
            "before_create_edge",
            "after_create_edge",
            "before_remove_hole",
            "after_remove_hole",
        ]
    );
    assert_eq!(arrangement.number_of_faces(), 2);
    let inner = arrangement.face(inner);
    assert_eq!(inner.number_of_holes(), 0);
    assert_eq!(inner.outer_ccb_iter().count(), 8);
    let bridge = arrangement.halfedge(bridge);
    assert_eq!(bridge.face(), inner);
    assert_eq!(bridge.twin().face(), inner);
    assert!(!bridge.is_on_hole());
    arrangement.validate().unwrap();
}

#[test]
fn closing_a_hole_reports_relocations() {
    let mut arrangement = Arrangement::<Traits>::new();
    let face = arrangement.unbounded_face().fix();
    arrangement.insert_isolated_vertex(Point2::new(2.0, 1.0), face);
    arrangement.insert_isolated_vertex(Point2::new(2.0, -1.0), face);
    arrangement.insert_in_face_interior(segment(1.5, 0.5, 2.5, 0.5), face);
    arrangement.insert_in_face_interior(segment(5.0, 0.0, 6.0, 0.0), face);
    let e0 = arrangement.insert_in_face_interior(segment(0.0, 0.0, 4.0, 0.0), face);
    let v0 = arrangement.halfedge(e0).source().fix();
    let v1 = arrangement.halfedge(e0).target().fix();
    let e1 = arrangement.insert_from_right_vertex(segment(2.0, 4.0, 4.0, 0.0), v1);
    let v2 = arrangement.halfedge(e1).target().fix();

    let log = attach_log(&mut arrangement);
    arrangement.insert_at_vertices(segment(0.0, 0.0, 2.0, 4.0), v0, v2);

    assert_eq!(
        log.borrow().events,
        vec![
            "before_create_edge",
            "after_create_edge",
            "before_split_face",
            "after_split_face hole",
            "before_move_hole",
            "after_move_hole",
            "before_move_isolated_vertex",
            "after_move_isolated_vertex",
        ]
    );
    assert_eq!(arrangement.number_of_faces(), 2);
    assert_eq!(arrangement.face(face).number_of_holes(), 2);
    assert_eq!(arrangement.face(face).number_of_isolated_vertices(), 1);
    arrangement.validate().unwrap();
}

#[test]
fn splitting_an_outer_boundary_moves_one_side() {
    let mut arrangement = Arrangement::<Traits>::new();
    let unbounded = arrangement.unbounded_face().fix();
    let inner = square(&mut arrangement, unbounded, 0.0, 0.0, 4.0);
    arrangement.insert_isolated_vertex(Point2::new(1.0, 3.0), inner);
    arrangement.insert_isolated_vertex(Point2::new(3.0, 1.0), inner);

    let log = attach_log(&mut arrangement);
    let v0 = vertex_at(&arrangement, 0.0, 0.0);
    let v1 = vertex_at(&arrangement, 4.0, 4.0);
    let diagonal = arrangement.insert_at_vertices(segment(0.0, 0.0, 4.0, 4.0), v0, v1);

    assert_eq!(
        log.borrow().events,
        vec![
            "before_create_edge",
            "after_create_edge",
            "before_split_face",
            "after_split_face outer",
            "before_move_isolated_vertex",
            "after_move_isolated_vertex",
        ]
    );
    assert_eq!(arrangement.number_of_faces(), 3);
    let diagonal = arrangement.halfedge(diagonal);
    let (upper, lower) = (diagonal.face(), diagonal.twin().face());
    assert_ne!(upper, lower);
    assert_eq!(
        arrangement.vertex(vertex_at(&arrangement, 1.0, 3.0)).face(),
        Some(upper)
    );
    assert_eq!(
        arrangement.vertex(vertex_at(&arrangement, 3.0, 1.0)).face(),
        Some(lower)
    );
    arrangement.validate().unwrap();
}

#[test]
fn split_edge_notifications() {
    let mut arrangement = Arrangement::<Traits>::new();
    let face = arrangement.unbounded_face().fix();
    let halfedge = arrangement.insert_in_face_interior(segment(0.0, 0.0, 2.0, 0.0), face);

    let log = attach_log(&mut arrangement);
    let first = arrangement.split_edge(
        halfedge,
        segment(0.0, 0.0, 1.0, 0.0),
        segment(1.0, 0.0, 2.0, 0.0),
    );

    let log = log.borrow();
    assert_eq!(
        log.events,
        vec![
            "before_create_vertex",
            "after_create_vertex",
            "before_split_edge",
            "after_split_edge",
        ]
    );
    let (e1, e2) = log.split.unwrap();
    assert_eq!(e1, first);
    let e1 = arrangement.halfedge(e1);
    let e2 = arrangement.halfedge(e2);
    assert_eq!(e1.next(), e2);
    assert_eq!(e1.target(), e2.source());
    assert_eq!(e1.target().point(), Some(&Point2::new(1.0, 0.0)));
    assert_eq!(e2.target().point(), Some(&Point2::new(2.0, 0.0)));
    arrangement.validate().unwrap();
}
