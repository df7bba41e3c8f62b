use nalgebra::{Rotation2, Vector2};

/// Rotation of the local horizontal plane (x, y) with respect to
/// true East and North.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HorizontalRotation {
    /// Rotation angle [°]
    angle_deg: f64,
    /// Local (x, y) to (East, North) rotation
    rotation: Rotation2<f64>,
}

impl HorizontalRotation {
    /// Builds [HorizontalRotation] from an angle in degrees.
    /// Returns None when the local frame is not rotated: no angle,
    /// a null angle, or an angle that is not a finite number.
    pub fn from_degrees(angle_deg: Option<f64>) -> Option<Self> {
        let angle_deg = angle_deg?;

        if !angle_deg.is_finite() || angle_deg == 0.0 {
            return None;
        }

        // (x, y) rotated by -θ: lon = x.cos + y.sin, lat = y.cos - x.sin
        Some(Self {
            angle_deg,
            rotation: Rotation2::new(-angle_deg.to_radians()),
        })
    }

    /// Rotation angle [°]
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Rotates local (x, y) offsets, expressed in meters,
    /// into (East, North) offsets, in meters.
    pub fn rotate_meters(&self, x_m: f64, y_m: f64) -> (f64, f64) {
        let rotated = self.rotation * Vector2::new(x_m, y_m);
        (rotated[0], rotated[1])
    }
}
