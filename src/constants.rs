/// Meters per degree of latitude, in our spherical approximation.
/// Also meters per degree of longitude, at the equator.
pub const LATITUDE_METERS_PER_DEGREE: f64 = 111111.0;

/// Feet in one meter
pub const FEET_PER_METER: f64 = 3.28084;
