//! Untyped (JSON) documents support.
//! Payloads are often built by third parties: positions and coordinate systems
//! are validated here, before they are turned into typed structures.
use log::debug;
use serde_json::Value;

use crate::{
    position::Position,
    prelude::Error,
    system::{CoordinateSystem, CoordinateSystemType, CustomOrigin},
    units::MeasurementUnit,
};

impl Position {
    /// Parses a [Position] from a document, which must be
    /// an array of 2 or 3 numbers.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let coords = value.as_array().ok_or(Error::InvalidPosition)?;

        if !(2..=3).contains(&coords.len()) {
            return Err(Error::InvalidPositionDimension(coords.len()));
        }

        let coords = coords
            .iter()
            .enumerate()
            .map(|(i, coord)| coord.as_f64().ok_or(Error::NonNumericCoordinate(i)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_from(coords)
    }
}

impl CustomOrigin {
    /// Parses [CustomOrigin] from a coordinate system document.
    /// Only `originOffset` is mandatory. `measurementUnits` that are not an array
    /// are disregarded, non string units are unrecognized units.
    /// A `horizontalPlaneRotation` that is not a number means "not rotated".
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let origin_offset = value
            .get("originOffset")
            .ok_or(Error::InvalidOriginOffset)
            .and_then(|origin| {
                Position::from_value(origin).map_err(|e| {
                    debug!("invalid origin offset: {}", e);
                    Error::InvalidOriginOffset
                })
            })?;

        let measurement_units = value
            .get("measurementUnits")
            .and_then(Value::as_array)
            .map(|units| {
                units
                    .iter()
                    .map(|unit| match unit.as_str() {
                        Some(tag) => MeasurementUnit::from(tag),
                        None => MeasurementUnit::Unrecognized(unit.to_string()),
                    })
                    .collect::<Vec<_>>()
            });

        let horizontal_plane_rotation = value
            .get("horizontalPlaneRotation")
            .and_then(Value::as_f64);

        Ok(Self {
            origin_offset,
            measurement_units,
            horizontal_plane_rotation,
        })
    }
}

impl CoordinateSystem {
    /// Parses a [CoordinateSystem] from a document,
    /// which must describe a supported coordinate system `type`.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let system_type = value
            .get("type")
            .ok_or(Error::MissingCoordinateSystemType)?;

        let system_type = system_type
            .as_str()
            .ok_or_else(|| Error::UnknownCoordinateSystem(system_type.to_string()))?
            .parse::<CoordinateSystemType>()?;

        match system_type {
            CoordinateSystemType::CustomOrigin => {
                CustomOrigin::from_value(value).map(Self::CustomOrigin)
            },
        }
    }
}

/// True if this document is a valid position: an array of 2 or 3 numbers.
pub fn is_valid_position(value: Option<&Value>) -> bool {
    value.is_some_and(|value| Position::from_value(value).is_ok())
}

/// True if this document describes a supported coordinate system,
/// with all its mandatory fields.
pub fn is_valid_coordinate_system(value: Option<&Value>) -> bool {
    value.is_some_and(|value| CoordinateSystem::from_value(value).is_ok())
}
