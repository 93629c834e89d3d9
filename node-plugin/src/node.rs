use crate::{
    common::*,
    error::NodeError,
    schema::{InputSchema, OutputSchema},
    value::{NodeInputs, NodeValue},
};

/// A unit of computation a host can place in its graph.
///
/// The descriptor methods return plain data and never run any computation.
/// Hosts call [Node::invoke], which validates the inputs against
/// [Node::describe_inputs], runs [Node::execute] and checks the outputs
/// against [Node::describe_outputs].
pub trait Node: Send + Sync {
    /// The menu category the host files this node under.
    fn category(&self) -> &str;

    fn describe_inputs(&self) -> InputSchema;

    fn describe_outputs(&self) -> OutputSchema;

    /// Runs the node on inputs that already passed schema resolution.
    fn execute(&self, inputs: &NodeInputs) -> Result<Vec<NodeValue>, NodeError>;

    fn invoke(&self, inputs: NodeInputs) -> Result<Vec<NodeValue>, NodeError> {
        let inputs = self.describe_inputs().resolve(inputs)?;
        let outputs = self.execute(&inputs)?;
        self.describe_outputs().check(&outputs)?;
        debug!(
            "node in category '{}' produced {} outputs",
            self.category(),
            outputs.len()
        );
        Ok(outputs)
    }
}

impl fmt::Debug for dyn Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("category", &self.category())
            .field("function", &self.describe_outputs().function)
            .finish()
    }
}
