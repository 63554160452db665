use arrangement::handles::{FixedHalfedgeHandle, FixedVertexHandle};
use arrangement::{Arrangement, Point2, Segment, SegmentTraits};
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub type GridArrangement = Arrangement<SegmentTraits<f64>>;

pub const SEED: &[u8; 32] = b"\xfb\xdc\x4e\xa0\x30\xde\x82\xba\x69\x97\x3c\x52\x49\x4d\x00\xca
\x5c\x21\xa3\x8d\x5c\xf2\x34\x4e\x58\x7d\x80\x16\x66\x23\x30";

fn segment(from: (usize, usize), to: (usize, usize)) -> Segment<f64> {
    Segment::new(
        Point2::new(from.0 as f64, from.1 as f64),
        Point2::new(to.0 as f64, to.1 as f64),
    )
}

/// Builds a `size` x `size` lattice row by row. Every vertex but the first is created by
/// extending the grid from its left or lower neighbor, every other edge closes a cell.
///
/// Returns the arrangement and all inserted halfedges.
pub fn build_grid(size: usize) -> (GridArrangement, Vec<FixedHalfedgeHandle>) {
    let mut arrangement = GridArrangement::new();
    let mut vertices: Vec<Option<FixedVertexHandle>> = vec![None; size * size];
    let mut halfedges = Vec::with_capacity(2 * size * size);
    let index = |x: usize, y: usize| y * size + x;

    for y in 0..size {
        for x in 0..size {
            if x > 0 {
                let cv = segment((x - 1, y), (x, y));
                let halfedge = match vertices[index(x - 1, y)] {
                    Some(left) => arrangement.insert_from_left_vertex(cv, left),
                    None => {
                        let face = arrangement.unbounded_face().fix();
                        let halfedge = arrangement.insert_in_face_interior(cv, face);
                        vertices[index(x - 1, y)] =
                            Some(arrangement.halfedge(halfedge).source().fix());
                        halfedge
                    }
                };
                vertices[index(x, y)] = Some(arrangement.halfedge(halfedge).target().fix());
                halfedges.push(halfedge);
            }
            if y > 0 {
                let cv = segment((x, y - 1), (x, y));
                let Some(lower) = vertices[index(x, y - 1)] else {
                    continue;
                };
                let halfedge = match vertices[index(x, y)] {
                    Some(upper) => arrangement.insert_at_vertices(cv, lower, upper),
                    None => {
                        let halfedge = arrangement.insert_from_left_vertex(cv, lower);
                        vertices[index(x, y)] =
                            Some(arrangement.halfedge(halfedge).target().fix());
                        halfedge
                    }
                };
                halfedges.push(halfedge);
            }
        }
    }
    (arrangement, halfedges)
}

/// Builds a grid and shuffles its halfedges for removal.
pub fn grid_with_removal_order(size: usize) -> (GridArrangement, Vec<FixedHalfedgeHandle>) {
    let (arrangement, mut halfedges) = build_grid(size);
    let mut rng = rand::rngs::StdRng::from_seed(*SEED);
    halfedges.shuffle(&mut rng);
    (arrangement, halfedges)
}
