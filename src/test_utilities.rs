#![allow(missing_docs)]
use hashbrown::{HashMap, HashSet};
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::handles::{FixedHalfedgeHandle, FixedVertexHandle};
use crate::{Arrangement, Point2, Segment, SegmentTraits};

pub const SEED: &[u8; 32] = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED2: &[u8; 32] = b"14LzG37Y9EHTcmLW8vBDqWwtYsCeVVyF";

pub type LatticePoint = (i32, i32);
pub type LatticeSegment = [LatticePoint; 2];

/// Returns all unit segments of a `size` x `size` lattice in random order.
///
/// The first lattice point of each segment is lexicographically smaller than the second.
pub fn shuffled_grid_segments(size: i32, seed: &[u8; 32]) -> Vec<LatticeSegment> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let mut segments = Vec::new();
    for x in 0..size {
        for y in 0..size {
            if x + 1 < size {
                segments.push([(x, y), (x + 1, y)]);
            }
            if y + 1 < size {
                segments.push([(x, y), (x, y + 1)]);
            }
        }
    }
    segments.shuffle(&mut rng);
    segments
}

pub fn to_point((x, y): LatticePoint) -> Point2<f64> {
    Point2::new(x as f64, y as f64)
}

pub fn to_segment([from, to]: LatticeSegment) -> Segment<f64> {
    Segment::new(to_point(from), to_point(to))
}

/// Inserts lattice segments such that the arrangement stays connected at all times.
///
/// Segments without an already inserted end point are postponed. Returns the inserted
/// halfedges in insertion order.
pub fn insert_connected(
    arrangement: &mut Arrangement<SegmentTraits<f64>>,
    mut pending: Vec<LatticeSegment>,
    validate_each: bool,
) -> Vec<FixedHalfedgeHandle> {
    let mut vertices: HashMap<LatticePoint, FixedVertexHandle> = HashMap::new();
    let mut result = Vec::with_capacity(pending.len());
    while !pending.is_empty() {
        let index = pending
            .iter()
            .position(|[a, b]| vertices.contains_key(a) || vertices.contains_key(b))
            .unwrap_or(0);
        let [a, b] = pending.remove(index);
        let halfedge = match (vertices.get(&a).copied(), vertices.get(&b).copied()) {
            (Some(va), Some(vb)) => arrangement.insert_at_vertices(to_segment([a, b]), va, vb),
            (Some(va), None) => {
                let halfedge = arrangement.insert_from_left_vertex(to_segment([a, b]), va);
                vertices.insert(b, arrangement.halfedge(halfedge).target().fix());
                halfedge
            }
            (None, Some(vb)) => {
                let halfedge = arrangement.insert_from_right_vertex(to_segment([a, b]), vb);
                vertices.insert(a, arrangement.halfedge(halfedge).target().fix());
                halfedge
            }
            (None, None) => {
                let face = arrangement.unbounded_face().fix();
                let halfedge = arrangement.insert_in_face_interior(to_segment([a, b]), face);
                vertices.insert(a, arrangement.halfedge(halfedge).source().fix());
                vertices.insert(b, arrangement.halfedge(halfedge).target().fix());
                halfedge
            }
        };
        if validate_each {
            arrangement.validate().unwrap();
        }
        result.push(halfedge);
    }
    result
}

/// Counts the connected components formed by the finite vertices and their edges.
pub fn connected_components(arrangement: &Arrangement<SegmentTraits<f64>>) -> usize {
    let mut visited = HashSet::new();
    let mut components = 0;
    for start in arrangement.vertices() {
        if !visited.insert(start.fix()) {
            continue;
        }
        components += 1;
        let mut stack = vec![start];
        while let Some(vertex) = stack.pop() {
            for incoming in vertex.incident_halfedges() {
                let neighbor = incoming.source();
                if visited.insert(neighbor.fix()) {
                    stack.push(neighbor);
                }
            }
        }
    }
    components
}
