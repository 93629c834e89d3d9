use crate::{common::*, direction::Direction, merge::execute};
use node_plugin::{
    InputSchema, InputSpec, Node, NodeError, NodeInputs, NodeRegistry, NodeValue, OutputSchema,
    TypeTag,
};

/// Identifier the merge node is registered under.
pub const NODE_ID: &str = "ASVL";
pub const DISPLAY_NAME: &str = "Merge—horizontal_vertical";
pub const CATEGORY: &str = "ASVL";

/// Graph node wrapping [execute].
///
/// Inputs are `image_one`, `image_two` and an optional `direction` string
/// defaulting to `"horizontal"`. The single output is `merged_image`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Merge;

impl Node for Merge {
    fn category(&self) -> &str {
        CATEGORY
    }

    fn describe_inputs(&self) -> InputSchema {
        InputSchema::new()
            .required("image_one", InputSpec::new(TypeTag::Image))
            .required("image_two", InputSpec::new(TypeTag::Image))
            .optional(
                "direction",
                InputSpec::with_default(TypeTag::String, Direction::default().as_str()),
            )
    }

    fn describe_outputs(&self) -> OutputSchema {
        OutputSchema {
            return_types: vec![TypeTag::Image],
            return_names: vec!["merged_image".to_owned()],
            function: "execute".to_owned(),
        }
    }

    fn execute(&self, inputs: &NodeInputs) -> Result<Vec<NodeValue>, NodeError> {
        let image_one = inputs.image("image_one")?;
        let image_two = inputs.image("image_two")?;
        let direction = inputs.string("direction")?;

        let (merged,) = execute(image_one, image_two, direction).map_err(NodeError::execution)?;
        Ok(vec![NodeValue::Image(merged)])
    }
}

/// Registers every node this crate provides.
pub fn register_nodes(registry: &mut NodeRegistry) -> Result<(), NodeError> {
    registry.register(NODE_ID, DISPLAY_NAME, || Box::new(Merge))?;
    debug!("registered merge node as '{}'", NODE_ID);
    Ok(())
}
