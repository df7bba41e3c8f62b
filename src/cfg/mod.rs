#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conversion [Options].
/// No option currently modifies the conversion process,
/// this is reserved for future use. An empty options document (`{}`)
/// is a valid [Options] description.
#[non_exhaustive]
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Options {}
