//! Axis alignment forces.
//!
//! Per axis, every pair of blocks (at least one movable) whose nearest
//! boundary points lie within the alignment range becomes an edge of a
//! proximity graph, weighted by that axial distance. Only the edges of the
//! graph's minimum spanning forest are pulled together, which keeps the
//! number of simultaneous pulls linear in the block count. The full graph is
//! also folded into a disjoint-set: any pair in the same component is
//! treated as already aligned on that axis and exempt from repulsion there.
//!
//! Walls (the last four blocks, when all static) get an extra bipartite pass: each movable box
//! is pulled onto every wall boundary within the wall range, no MST.

use tracing::trace;

use crate::error::{LayoutError, Result};
use crate::forces::sink::{ForceSink, apply_pair};
use crate::geometry::{Axis, Block, Vector, closest_boundary_pair};
use crate::graph::{DisjointSet, Edge, Graph, kruskal};
use crate::layout::LayoutParams;
use crate::spatial::BoundaryIndex;

/// Number of arena walls at the end of the block list.
pub const WALL_COUNT: usize = 4;

/// What an alignment edge pulls together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentSpan {
    pub axis: Axis,
    /// Boundary point on the source block.
    pub pos_src: Vector,
    /// Boundary point on the target block.
    pub pos_tgt: Vector,
    pub idx_src: usize,
    pub idx_tgt: usize,
}

/// Proximity graph over block indices.
pub type AlignmentGraph = Graph<usize, AlignmentSpan>;

fn span_edge(blocks: &[Block], i: usize, j: usize, axis: Axis, range: f64) -> Option<Edge<usize, AlignmentSpan>> {
    let (src, tgt) = (&blocks[i], &blocks[j]);
    if src.is_static && tgt.is_static {
        return None;
    }
    let (pos_src, pos_tgt, dist) = closest_boundary_pair(src, tgt, axis);
    if dist < range {
        let span = AlignmentSpan {
            axis,
            pos_src,
            pos_tgt,
            idx_src: i,
            idx_tgt: j,
        };
        Some(Edge::with_data(i, j, dist, span))
    } else {
        None
    }
}

/// Build the proximity graph along `axis`.
///
/// Edges come out in `(i, j)` lexicographic order, `i < j`, exactly as a
/// nested scan over all pairs would produce them.
pub fn build_alignment_graph(blocks: &[Block], axis: Axis, range: f64) -> AlignmentGraph {
    let index = BoundaryIndex::build(blocks, axis);
    let edges = index
        .candidate_pairs(range)
        .into_iter()
        .filter_map(|(i, j)| span_edge(blocks, i, j, axis, range))
        .collect();
    Graph::new((0..blocks.len()).collect(), edges)
}

/// True if the last [`WALL_COUNT`] blocks exist and are all static.
pub fn has_walls(blocks: &[Block]) -> bool {
    blocks.len() >= WALL_COUNT && blocks[blocks.len() - WALL_COUNT..].iter().all(|b| b.is_static)
}

/// Build the bipartite (box, wall) graph along `axis`.
///
/// The last [`WALL_COUNT`] blocks are the walls and must be static. Boxes are
/// always the source side of an edge.
pub fn build_wall_alignment_graph(blocks: &[Block], axis: Axis, range: f64) -> Result<AlignmentGraph> {
    if !has_walls(blocks) {
        return Err(LayoutError::MissingWalls {
            blocks: blocks.len(),
        });
    }
    let first_wall = blocks.len() - WALL_COUNT;
    let mut edges = Vec::new();
    for i in 0..first_wall {
        if blocks[i].is_static {
            continue;
        }
        for w in first_wall..blocks.len() {
            if let Some(e) = span_edge(blocks, i, w, axis, range) {
                edges.push(e);
            }
        }
    }
    Ok(Graph::new((0..blocks.len()).collect(), edges))
}

/// Alignment force on the target side of a span at axial distance `dist`.
///
/// Magnitude `coeff * dist + offset`, directed so the target's boundary
/// point moves towards the source's. Flush spans get no force.
pub fn alignment_force(span: &AlignmentSpan, dist: f64, coeff: f64, offset: f64) -> Vector {
    if !(dist > 0.0) {
        return Vector::ZERO;
    }
    let axis = span.axis;
    let sign = if axis.component(span.pos_src) < axis.component(span.pos_tgt) {
        -1.0
    } else {
        1.0
    };
    axis.along(sign * (coeff * dist + offset))
}

fn apply_edge<S: ForceSink + ?Sized>(
    edge: &Edge<usize, AlignmentSpan>,
    params: &LayoutParams,
    sink: &mut S,
) -> Result<()> {
    let span = &edge.data;
    let force = alignment_force(
        span,
        edge.weight,
        params.alignment_force_coeff,
        params.alignment_force_offset,
    );
    apply_pair(
        sink,
        (span.idx_src, span.pos_src),
        (span.idx_tgt, span.pos_tgt),
        force,
    )
}

/// Connectivity of the full proximity graph.
pub fn alignment_components(graph: &AlignmentGraph) -> DisjointSet<usize> {
    let mut uf = DisjointSet::from_labels(graph.vertices.iter().copied());
    for e in &graph.edges {
        uf.connect(&e.data.idx_src, &e.data.idx_tgt);
    }
    uf
}

/// Apply MST-sparsified alignment along `axis`.
///
/// Returns the axis' disjoint-set built from every in-range pair, for use
/// with [`apply_disjoint_repulsion`](crate::forces::apply_disjoint_repulsion).
pub fn apply_alignment<S: ForceSink + ?Sized>(
    blocks: &[Block],
    axis: Axis,
    params: &LayoutParams,
    sink: &mut S,
) -> Result<DisjointSet<usize>> {
    let graph = build_alignment_graph(blocks, axis, params.alignment_force_range);
    let mst = kruskal(&graph);
    trace!(%axis, edges = graph.edges.len(), mst_edges = mst.len(), "alignment graph");

    for edge in mst {
        apply_edge(edge, params, sink)?;
    }
    Ok(alignment_components(&graph))
}

/// Pull every movable box onto the wall boundaries within the wall range.
pub fn apply_wall_alignment<S: ForceSink + ?Sized>(
    blocks: &[Block],
    axis: Axis,
    params: &LayoutParams,
    sink: &mut S,
) -> Result<()> {
    let graph = build_wall_alignment_graph(blocks, axis, params.alignment_force_wall_range)?;
    trace!(%axis, edges = graph.edges.len(), "wall alignment graph");
    for edge in &graph.edges {
        apply_edge(edge, params, sink)?;
    }
    Ok(())
}
