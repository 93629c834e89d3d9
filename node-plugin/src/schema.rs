//! Declarative input and output descriptors.
//!
//! The serialized forms follow the host's conventions: an input is a
//! one- or two-element sequence `["TAG"]` / `["TAG", default]`, and the
//! output descriptor uses upper-case `RETURN_TYPES`, `RETURN_NAMES` and
//! `FUNCTION` keys.

use crate::{
    common::*,
    error::NodeError,
    value::{NodeInputs, NodeValue},
};
use serde_json::Value;

/// Type tags understood by the host.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeTag {
    Image,
    String,
}

/// A single input slot.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSpec {
    pub type_tag: TypeTag,
    pub default: Option<Value>,
}

impl InputSpec {
    pub fn new(type_tag: TypeTag) -> Self {
        Self {
            type_tag,
            default: None,
        }
    }

    pub fn with_default(type_tag: TypeTag, default: impl Into<Value>) -> Self {
        Self {
            type_tag,
            default: Some(default.into()),
        }
    }

    /// Converts the declared default into a value of the slot's type.
    pub fn default_value(&self) -> Option<NodeValue> {
        match (self.type_tag, self.default.as_ref()?) {
            (TypeTag::String, Value::String(text)) => Some(NodeValue::String(text.clone())),
            _ => None,
        }
    }
}

impl Serialize for InputSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.default.is_some() { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.type_tag)?;
        if let Some(default) = &self.default {
            seq.serialize_element(default)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for InputSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<Value>::deserialize(deserializer)?;
        let mut iter = values.into_iter();

        let type_tag = match iter.next() {
            Some(Value::String(tag)) => tag
                .parse::<TypeTag>()
                .map_err(|_| D::Error::custom(format!("'{}' is not a known type tag", tag)))?,
            Some(value) => {
                return Err(D::Error::custom(format!("'{}' is not a type tag", value)));
            }
            None => return Err(D::Error::custom("input spec must not be empty")),
        };
        let default = iter.next();

        if iter.next().is_some() {
            return Err(D::Error::custom(
                "input spec must have at most two elements",
            ));
        }

        Ok(Self { type_tag, default })
    }
}

/// The inputs a node accepts, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    pub required: IndexMap<String, InputSpec>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub optional: IndexMap<String, InputSpec>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: impl Into<String>, spec: InputSpec) -> Self {
        self.required.insert(name.into(), spec);
        self
    }

    pub fn optional(mut self, name: impl Into<String>, spec: InputSpec) -> Self {
        self.optional.insert(name.into(), spec);
        self
    }

    pub fn get(&self, name: &str) -> Option<&InputSpec> {
        self.required.get(name).or_else(|| self.optional.get(name))
    }

    /// Checks `inputs` against the schema and fills in optional defaults.
    ///
    /// Every required input must be present, every value must carry the
    /// declared type tag, and no undeclared names are accepted. An optional
    /// input without a usable default is left absent.
    pub fn resolve(&self, inputs: NodeInputs) -> Result<NodeInputs, NodeError> {
        if let Some(name) = inputs.names().find(|name| self.get(name).is_none()) {
            return Err(NodeError::UnknownInput {
                name: name.to_owned(),
            });
        }

        if let Some(name) = self
            .required
            .keys()
            .find(|name| !inputs.contains(name.as_str()))
        {
            return Err(NodeError::MissingInput { name: name.clone() });
        }

        inputs.names().try_for_each(|name| {
            let expected = self.get(name).map(|spec| spec.type_tag);
            let found = inputs.get(name).map(NodeValue::type_tag);

            match (expected, found) {
                (Some(expected), Some(found)) if expected != found => {
                    Err(NodeError::TypeMismatch {
                        name: name.to_owned(),
                        expected,
                        found,
                    })
                }
                _ => Ok(()),
            }
        })?;

        let mut resolved = inputs;
        self.optional.iter().for_each(|(name, spec)| {
            if resolved.contains(name) {
                return;
            }
            if let Some(value) = spec.default_value() {
                trace!("fill default for optional input '{}'", name);
                resolved.insert(name.clone(), value);
            }
        });

        Ok(resolved)
    }
}

/// The outputs a node produces and the name of its entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSchema {
    #[serde(rename = "RETURN_TYPES")]
    pub return_types: Vec<TypeTag>,
    #[serde(rename = "RETURN_NAMES")]
    pub return_names: Vec<String>,
    #[serde(rename = "FUNCTION")]
    pub function: String,
}

impl OutputSchema {
    pub fn len(&self) -> usize {
        self.return_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.return_types.is_empty()
    }

    /// Checks positional outputs against the declared return types.
    pub fn check(&self, outputs: &[NodeValue]) -> Result<(), NodeError> {
        if outputs.len() != self.return_types.len() {
            return Err(NodeError::OutputArity {
                expected: self.return_types.len(),
                found: outputs.len(),
            });
        }

        self.return_types
            .iter()
            .zip(outputs)
            .enumerate()
            .try_for_each(|(index, (&expected, value))| {
                let found = value.type_tag();
                if expected != found {
                    let name = self
                        .return_names
                        .get(index)
                        .cloned()
                        .unwrap_or_else(|| index.to_string());
                    return Err(NodeError::TypeMismatch {
                        name,
                        expected,
                        found,
                    });
                }
                Ok(())
            })
    }
}
