use crate::{common::*, direction::Direction};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("both images must have the same dimensions, got {left} and {right}")]
    ShapeMismatch { left: Shape, right: Shape },
    #[error("direction must be one of {:?}, got {:?}", Direction::NAMES, .value)]
    InvalidDirection { value: String },
    #[error("images of rank {rank} have no axis {axis} to merge along")]
    MissingAxis { axis: usize, rank: usize },
}
