pub use serde::{Deserialize, Serialize};
pub use std::{fmt, ops::Index};
