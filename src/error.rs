//! Error type shared by the force computation layer.
//!
//! Degenerate geometry (coincident centres, flush edges) is not an error:
//! the force laws return a zero vector for it. Errors are reserved for input
//! that would corrupt the external integrator if we carried on.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("block {index} has no vertices")]
    EmptyBlock { index: usize },

    #[error("block {index} has a non-finite position, area or vertex")]
    NonFiniteGeometry { index: usize },

    #[error("computed a non-finite force for block {block}")]
    NonFiniteForce { block: usize },

    #[error("wall alignment needs the 4 arena walls as the last blocks, got {blocks} blocks")]
    MissingWalls { blocks: usize },

    #[error("block index {index} out of range (block count {len})")]
    BlockOutOfRange { index: usize, len: usize },

    #[error("{what} buffer has length {len}, expected a multiple of {stride}")]
    MalformedBuffer {
        what: &'static str,
        len: usize,
        stride: usize,
    },

    #[error("invalid layout parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
