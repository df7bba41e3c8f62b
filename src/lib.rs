#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod constants;
mod converter;
mod error;
mod position;
mod rotation;
mod system;
mod units;

#[cfg(feature = "serde")]
mod document;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::Options;
    pub use crate::constants::{FEET_PER_METER, LATITUDE_METERS_PER_DEGREE};
    pub use crate::converter::{to_wgs84, Converter};
    pub use crate::error::Error;
    pub use crate::position::Position;
    pub use crate::rotation::HorizontalRotation;
    pub use crate::system::{CoordinateSystem, CoordinateSystemType, CustomOrigin};
    pub use crate::units::{
        to_degrees_offset, to_meters_offset, Axis, MeasurementUnit, MeasurementUnits,
    };

    #[cfg(feature = "serde")]
    pub use crate::converter::to_wgs84_value;
    #[cfg(feature = "serde")]
    pub use crate::document::{is_valid_coordinate_system, is_valid_position};
    // re-export
    #[cfg(feature = "serde")]
    pub use serde_json::Value;
}

// pub export
pub use error::Error;
