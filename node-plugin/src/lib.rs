//! The contract between graph-execution hosts and the nodes they run.
//!
//! A node publishes its inputs and outputs as plain descriptor data
//! ([InputSchema], [OutputSchema]) and is invoked through the [Node] trait.
//! Hosts look nodes up by identifier in a [NodeRegistry].

mod common;
pub mod error;
pub mod node;
pub mod registry;
pub mod schema;
pub mod value;

pub use error::*;
pub use node::*;
pub use registry::*;
pub use schema::*;
pub use value::*;
