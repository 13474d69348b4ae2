//! Force models.
//!
//! Every force law computes the force on a target block from a source block.
//! The `apply_*` functions emit equal and opposite pairs into a
//! [`ForceSink`], each half at its own block's recorded point.

mod alignment;
mod grouping;
mod poke;
mod repulsion;
mod sink;

pub use alignment::{
    AlignmentGraph, AlignmentSpan, WALL_COUNT, alignment_components, alignment_force,
    apply_alignment, apply_wall_alignment, build_alignment_graph, build_wall_alignment_graph,
    has_walls,
};
pub use grouping::{apply_grouping, grouping_force};
pub use poke::{apply_random_pokes, randn};
pub use repulsion::{
    anti_gravity, anti_gravity_manhattan, anti_gravity_ranged, apply_disjoint_repulsion,
    apply_repulsion, characteristic_size,
};
pub use sink::{AppliedForce, ForceSink, net_force};
