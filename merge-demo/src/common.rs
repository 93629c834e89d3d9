pub use anyhow::{format_err, Context, Error, Result};
pub use image_merge::{execute, select_direction, Image, Shape};
pub use log::info;
pub use ndarray::IxDyn;
pub use once_cell::sync::Lazy;
pub use rand::{prelude::*, rngs::StdRng};
pub use semver::{Version, VersionReq};
pub use serde::{de::Error as DeserializeError, Deserialize, Deserializer, Serialize};
pub use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
};
