//! Joins two equally shaped image batches side by side or on top of each
//! other, and exposes the operation as a host graph node.

mod common;
pub mod direction;
pub mod error;
pub mod merge;
pub mod node;
pub mod select;

pub use direction::*;
pub use error::*;
pub use merge::*;
pub use node::*;
pub use node_plugin::Image;
pub use select::*;
pub use tensor_shape::Shape;
