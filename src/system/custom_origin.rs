use log::debug;

use crate::{
    position::Position,
    rotation::HorizontalRotation,
    units::{to_degrees_offset, to_meters_offset, Axis, MeasurementUnit, MeasurementUnits},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [CustomOrigin] is a local frame anchored to a WGS84 origin.
/// Each axis may use its own [MeasurementUnit] and the horizontal plane
/// may be rotated with respect to true East and North.
///
/// Offsets are converted with a flat earth approximation:
/// only suited for short range offsets (meters to a few kilometers) from the origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CustomOrigin {
    /// Origin of the local frame: longitude [°], latitude [°] and optional altitude [m].
    pub origin_offset: Position,

    /// [MeasurementUnit] for each axis (x, y, z).
    /// Defaults to ["deg", "deg", "m"] for missing axes.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub measurement_units: Option<Vec<MeasurementUnit>>,

    /// Rotation of the local (x, y) plane, in degrees.
    /// None, 0 or a non finite value means the local frame is aligned to East and North.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub horizontal_plane_rotation: Option<f64>,
}

impl CustomOrigin {
    /// Builds a new [CustomOrigin] anchored at this WGS84 [Position],
    /// using default units and no rotation.
    pub fn new(origin_offset: Position) -> Self {
        Self {
            origin_offset,
            measurement_units: None,
            horizontal_plane_rotation: None,
        }
    }

    /// Copies and returns [CustomOrigin] with per axis [MeasurementUnit]s.
    pub fn with_measurement_units<U: Into<MeasurementUnit>>(
        &self,
        units: impl IntoIterator<Item = U>,
    ) -> Self {
        let mut s = self.clone();
        s.measurement_units = Some(units.into_iter().map(Into::into).collect());
        s
    }

    /// Copies and returns [CustomOrigin] with horizontal plane rotation [°].
    pub fn with_horizontal_plane_rotation(&self, angle_deg: f64) -> Self {
        let mut s = self.clone();
        s.horizontal_plane_rotation = Some(angle_deg);
        s
    }

    /// Converts a local [Position] to WGS84.
    pub(crate) fn to_wgs84(&self, position: &Position) -> Position {
        let units = MeasurementUnits::resolve(self.measurement_units.as_deref());
        let origin_latitude = self.origin_offset.y;

        let (lon_offset, lat_offset) =
            match HorizontalRotation::from_degrees(self.horizontal_plane_rotation) {
                Some(rotation) => {
                    debug!("rotated frame: {}°", rotation.angle_deg());

                    let x_m = to_meters_offset(position.x, units.longitude());
                    let y_m = to_meters_offset(position.y, units.latitude());
                    let (lon_m, lat_m) = rotation.rotate_meters(x_m, y_m);

                    (
                        to_degrees_offset(
                            lon_m,
                            &MeasurementUnit::Meters,
                            Axis::Longitude,
                            origin_latitude,
                        ),
                        to_degrees_offset(
                            lat_m,
                            &MeasurementUnit::Meters,
                            Axis::Latitude,
                            origin_latitude,
                        ),
                    )
                },
                None => {
                    debug!("north aligned frame");
                    (
                        to_degrees_offset(
                            position.x,
                            units.longitude(),
                            Axis::Longitude,
                            origin_latitude,
                        ),
                        to_degrees_offset(
                            position.y,
                            units.latitude(),
                            Axis::Latitude,
                            origin_latitude,
                        ),
                    )
                },
            };

        // origin altitude is 0 when not specified
        let altitude = position.z.map(|z| {
            let offset_m = to_meters_offset(z, units.altitude());
            self.origin_offset.z.unwrap_or(0.0) + offset_m
        });

        Position {
            x: self.origin_offset.x + lon_offset,
            y: self.origin_offset.y + lat_offset,
            z: altitude,
        }
    }
}
