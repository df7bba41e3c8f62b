//! Local coordinate systems
use crate::{cfg::Options, position::Position, prelude::Error};

mod custom_origin;
pub use custom_origin::CustomOrigin;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminator of the supported [CoordinateSystem]s
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CoordinateSystemType {
    /// Local frame anchored to a WGS84 origin ("customOrigin")
    CustomOrigin,
}

impl std::fmt::Display for CoordinateSystemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CustomOrigin => write!(f, "customOrigin"),
        }
    }
}

impl std::str::FromStr for CoordinateSystemType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customOrigin" => Ok(Self::CustomOrigin),
            _ => Err(Error::UnknownCoordinateSystem(s.to_string())),
        }
    }
}

/// [CoordinateSystem] describes how a local [Position] should be interpreted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(tag = "type"))]
pub enum CoordinateSystem {
    /// See [CustomOrigin]
    #[cfg_attr(feature = "serde", serde(rename = "customOrigin"))]
    CustomOrigin(CustomOrigin),
}

impl CoordinateSystem {
    /// Returns [CoordinateSystemType] of this [CoordinateSystem]
    pub fn system_type(&self) -> CoordinateSystemType {
        match self {
            Self::CustomOrigin(_) => CoordinateSystemType::CustomOrigin,
        }
    }

    /// Converts a [Position] expressed in this [CoordinateSystem]
    /// to WGS84 (longitude [°], latitude [°], altitude [m]).
    /// The returned [Position] has the same dimension.
    pub fn to_wgs84(&self, position: &Position, _: &Options) -> Position {
        match self {
            Self::CustomOrigin(system) => system.to_wgs84(position),
        }
    }
}

impl From<CustomOrigin> for CoordinateSystem {
    fn from(system: CustomOrigin) -> Self {
        Self::CustomOrigin(system)
    }
}
