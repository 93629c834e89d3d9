pub use indexmap::IndexMap;
pub use log::{debug, trace};
pub use serde::{
    de::Error as DeserializeError,
    ser::{Error as SerializeError, SerializeSeq},
    Deserialize, Deserializer, Serialize, Serializer,
};
pub use std::fmt;
pub use strum::{AsRefStr, Display, EnumString};
pub use thiserror::Error;
