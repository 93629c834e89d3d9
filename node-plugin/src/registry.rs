use crate::{
    common::*,
    error::NodeError,
    node::Node,
    schema::{InputSchema, OutputSchema},
};

pub type NodeFactory = Box<dyn Fn() -> Box<dyn Node> + Send + Sync>;

struct NodeEntry {
    display_name: String,
    factory: NodeFactory,
}

/// Maps node identifiers to node constructors and display names.
#[derive(Default)]
pub struct NodeRegistry {
    entries: IndexMap<String, NodeEntry>,
}

/// Everything a host needs to render a node, in serializable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    pub id: String,
    pub display_name: String,
    pub category: String,
    pub input: InputSchema,
    pub output: OutputSchema,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(
        &mut self,
        id: impl Into<String>,
        display_name: impl Into<String>,
        factory: F,
    ) -> Result<(), NodeError>
    where
        F: Fn() -> Box<dyn Node> + Send + Sync + 'static,
    {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(NodeError::DuplicateNode { id });
        }

        let display_name = display_name.into();
        debug!("register node '{}' as '{}'", id, display_name);
        self.entries.insert(
            id,
            NodeEntry {
                display_name,
                factory: Box::new(factory),
            },
        );
        Ok(())
    }

    pub fn create(&self, id: &str) -> Result<Box<dyn Node>, NodeError> {
        let entry = self.entry(id)?;
        Ok((entry.factory)())
    }

    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.entries
            .get(id)
            .map(|entry| entry.display_name.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The identifier to display-name table the host shows in its menus.
    pub fn display_name_mappings(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(id, entry)| (id.clone(), entry.display_name.clone()))
            .collect()
    }

    pub fn describe(&self, id: &str) -> Result<NodeDescription, NodeError> {
        let entry = self.entry(id)?;
        let node = (entry.factory)();

        Ok(NodeDescription {
            id: id.to_owned(),
            display_name: entry.display_name.clone(),
            category: node.category().to_owned(),
            input: node.describe_inputs(),
            output: node.describe_outputs(),
        })
    }

    /// Descriptions of all registered nodes as a JSON object keyed by id.
    pub fn describe_all(&self) -> serde_json::Result<serde_json::Value> {
        let descriptions: IndexMap<&str, NodeDescription> = self
            .entries
            .keys()
            .filter_map(|id| Some((id.as_str(), self.describe(id).ok()?)))
            .collect();
        serde_json::to_value(descriptions)
    }

    fn entry(&self, id: &str) -> Result<&NodeEntry, NodeError> {
        self.entries.get(id).ok_or_else(|| NodeError::UnknownNode {
            id: id.to_owned(),
        })
    }
}

impl fmt::Debug for NodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(id, entry)| (id, &entry.display_name)),
            )
            .finish()
    }
}
