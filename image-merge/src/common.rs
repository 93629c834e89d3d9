pub use log::{debug, warn};
pub use ndarray::{concatenate, Axis};
pub use node_plugin::Image;
pub use serde::{Deserialize, Serialize};
pub use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};
pub use strum::{AsRefStr, Display};
pub use tensor_shape::Shape;
pub use thiserror::Error;
