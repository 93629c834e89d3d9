use crate::{common::*, error::MergeError};

/// The side on which the second image is attached to the first.
///
/// Images are laid out batch first, so axis 1 runs along the height and
/// axis 2 along the width.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Attach to the right, stacking columns.
    #[default]
    Horizontal,
    /// Attach below, stacking rows.
    Vertical,
}

impl Direction {
    /// All directions in menu order.
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    pub const NAMES: [&'static str; 2] = ["horizontal", "vertical"];

    /// The array axis the images are concatenated along.
    pub fn axis(&self) -> usize {
        match self {
            Self::Vertical => 1,
            Self::Horizontal => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl FromStr for Direction {
    type Err = MergeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str() == text)
            .ok_or_else(|| MergeError::InvalidDirection {
                value: text.to_owned(),
            })
    }
}
