//! Shape descriptors for n-dimensional tensors.

mod common;
pub mod shape;

pub use shape::*;
