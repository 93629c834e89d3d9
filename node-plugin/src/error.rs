use crate::{common::*, schema::TypeTag};

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures reported across the host/node boundary.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("missing required input '{name}'")]
    MissingInput { name: String },
    #[error("unknown input '{name}'")]
    UnknownInput { name: String },
    #[error("input '{name}' expects {expected}, but {found} is given")]
    TypeMismatch {
        name: String,
        expected: TypeTag,
        found: TypeTag,
    },
    #[error("node returned {found} outputs, but {expected} are declared")]
    OutputArity { expected: usize, found: usize },
    #[error("node execution failed: {0}")]
    Execution(#[source] BoxedError),
    #[error("node '{id}' is already registered")]
    DuplicateNode { id: String },
    #[error("node '{id}' is not registered")]
    UnknownNode { id: String },
}

impl NodeError {
    /// Wraps a node-specific failure, keeping it reachable through
    /// [std::error::Error::source].
    pub fn execution<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Execution(Box::new(error))
    }

    /// Downcasts the wrapped node-specific failure, if any.
    pub fn execution_error<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Execution(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }
}
