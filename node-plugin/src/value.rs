use crate::{common::*, error::NodeError, schema::TypeTag};
use ndarray::ArrayD;

/// A batch of images, laid out as `(batch, height, width, channels)` or an
/// equivalent batch-first ordering.
pub type Image = ArrayD<f32>;

/// A value flowing along a graph edge.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Image(Image),
    String(String),
}

impl NodeValue {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Self::Image(_) => TypeTag::Image,
            Self::String(_) => TypeTag::String,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn into_image(self) -> Option<Image> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Image> for NodeValue {
    fn from(from: Image) -> Self {
        Self::Image(from)
    }
}

impl From<String> for NodeValue {
    fn from(from: String) -> Self {
        Self::String(from)
    }
}

impl From<&str> for NodeValue {
    fn from(from: &str) -> Self {
        Self::String(from.to_owned())
    }
}

/// Named inputs handed to a node, after defaults have been filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeInputs(IndexMap<String, NodeValue>);

impl NodeInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<NodeValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<NodeValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&NodeValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn image(&self, name: &str) -> Result<&Image, NodeError> {
        let value = self.require(name)?;
        value.as_image().ok_or_else(|| NodeError::TypeMismatch {
            name: name.to_owned(),
            expected: TypeTag::Image,
            found: value.type_tag(),
        })
    }

    pub fn string(&self, name: &str) -> Result<&str, NodeError> {
        let value = self.require(name)?;
        value.as_str().ok_or_else(|| NodeError::TypeMismatch {
            name: name.to_owned(),
            expected: TypeTag::String,
            found: value.type_tag(),
        })
    }

    fn require(&self, name: &str) -> Result<&NodeValue, NodeError> {
        self.0.get(name).ok_or_else(|| NodeError::MissingInput {
            name: name.to_owned(),
        })
    }
}

impl FromIterator<(String, NodeValue)> for NodeInputs {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (String, NodeValue)>,
    {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for NodeInputs {
    type Item = (String, NodeValue);
    type IntoIter = indexmap::map::IntoIter<String, NodeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
