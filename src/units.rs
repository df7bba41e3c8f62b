//! Measurement units and offset conversions
use log::trace;

use crate::constants::{FEET_PER_METER, LATITUDE_METERS_PER_DEGREE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [MeasurementUnit] of one axis of a local frame.
/// Any tag we do not recognize is preserved as [MeasurementUnit::Unrecognized]
/// and leaves offsets untouched during conversions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub enum MeasurementUnit {
    /// Decimal degrees ("deg")
    Degrees,
    /// Meters ("m")
    Meters,
    /// Feet ("ft")
    Feet,
    /// Unknown tag
    Unrecognized(String),
}

impl MeasurementUnit {
    /// True unless this is [MeasurementUnit::Unrecognized]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for MeasurementUnit {
    fn from(tag: &str) -> Self {
        match tag {
            "deg" => Self::Degrees,
            "m" => Self::Meters,
            "ft" => Self::Feet,
            _ => Self::Unrecognized(tag.to_string()),
        }
    }
}

impl From<String> for MeasurementUnit {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<MeasurementUnit> for String {
    fn from(unit: MeasurementUnit) -> Self {
        unit.to_string()
    }
}

impl std::fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degrees => write!(f, "deg"),
            Self::Meters => write!(f, "m"),
            Self::Feet => write!(f, "ft"),
            Self::Unrecognized(tag) => write!(f, "{}", tag),
        }
    }
}

/// Resolved [MeasurementUnit] for each axis:
/// x (longitude), y (latitude) and z (altitude).
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementUnits([MeasurementUnit; 3]);

impl Default for MeasurementUnits {
    /// ["deg", "deg", "m"]
    fn default() -> Self {
        Self([
            MeasurementUnit::Degrees,
            MeasurementUnit::Degrees,
            MeasurementUnit::Meters,
        ])
    }
}

impl MeasurementUnits {
    /// Resolves exactly 3 [MeasurementUnit]s from the (optional) user specs.
    /// Missing trailing units are replaced by the [Default] ones,
    /// anything past the third unit is ignored.
    pub fn resolve(units: Option<&[MeasurementUnit]>) -> Self {
        let mut resolved = Self::default();
        if let Some(units) = units {
            for (axis, unit) in units.iter().take(3).enumerate() {
                resolved.0[axis] = unit.clone();
            }
        }
        resolved
    }

    /// x axis (longitude) [MeasurementUnit]
    pub fn longitude(&self) -> &MeasurementUnit {
        &self.0[0]
    }

    /// y axis (latitude) [MeasurementUnit]
    pub fn latitude(&self) -> &MeasurementUnit {
        &self.0[1]
    }

    /// z axis (altitude) [MeasurementUnit]
    pub fn altitude(&self) -> &MeasurementUnit {
        &self.0[2]
    }
}

/// Horizontal axis of an offset
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Axis {
    Longitude,
    Latitude,
}

/// Converts an offset to decimal degrees.
/// Longitude offsets in meters or feet are scaled by the cosine of the origin latitude
/// (in degrees). A null or NaN origin latitude is treated as the equator.
/// Offsets in degrees, or in an unrecognized unit, are returned as is.
pub fn to_degrees_offset(
    offset: f64,
    unit: &MeasurementUnit,
    axis: Axis,
    origin_latitude_deg: f64,
) -> f64 {
    let mut meters_per_degree = LATITUDE_METERS_PER_DEGREE;

    if axis == Axis::Longitude {
        let lat_deg = if origin_latitude_deg.is_nan() {
            0.0
        } else {
            origin_latitude_deg
        };
        meters_per_degree *= lat_deg.to_radians().cos();
    }

    let degrees = match unit {
        MeasurementUnit::Meters => offset / meters_per_degree,
        MeasurementUnit::Feet => offset / FEET_PER_METER / meters_per_degree,
        MeasurementUnit::Degrees | MeasurementUnit::Unrecognized(_) => offset,
    };

    trace!("{:?} offset: {}{} = {}°", axis, offset, unit, degrees);
    degrees
}

/// Converts an offset to meters.
/// Only feet are converted, any other unit is returned as is.
pub fn to_meters_offset(offset: f64, unit: &MeasurementUnit) -> f64 {
    match unit {
        MeasurementUnit::Feet => offset / FEET_PER_METER,
        MeasurementUnit::Meters | MeasurementUnit::Degrees | MeasurementUnit::Unrecognized(_) => {
            offset
        },
    }
}
