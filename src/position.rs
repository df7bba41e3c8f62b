//! 2D or 3D coordinates
use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Position] is either expressed in a local frame (x, y, z),
/// or in WGS84 (longitude [°], latitude [°], altitude [m]).
/// It always has 2 or 3 coordinates.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Position {
    /// x coordinate, or longitude in WGS84
    pub x: f64,
    /// y coordinate, or latitude in WGS84
    pub y: f64,
    /// z coordinate, or altitude in WGS84
    pub z: Option<f64>,
}

impl Position {
    /// Builds a 2D [Position]
    pub fn new_2d(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Builds a 3D [Position]
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Number of coordinates (2 or 3)
    pub fn dimension(&self) -> usize {
        if self.z.is_some() {
            3
        } else {
            2
        }
    }

    /// Returns coordinate at index, if it exists.
    pub fn get(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => self.z,
            _ => None,
        }
    }

    /// Returns coordinates as a [Vec] of 2 or 3 elements.
    pub fn as_vec(&self) -> Vec<f64> {
        let mut coords = vec![self.x, self.y];
        if let Some(z) = self.z {
            coords.push(z);
        }
        coords
    }
}

impl TryFrom<&[f64]> for Position {
    type Error = Error;
    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        match coords {
            [x, y] => Ok(Self::new_2d(*x, *y)),
            [x, y, z] => Ok(Self::new_3d(*x, *y, *z)),
            _ => Err(Error::InvalidPositionDimension(coords.len())),
        }
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = Error;
    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(coords.as_slice())
    }
}

impl From<Position> for Vec<f64> {
    fn from(position: Position) -> Self {
        position.as_vec()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.z {
            Some(z) => write!(f, "[{}, {}, {}]", self.x, self.y, z),
            None => write!(f, "[{}, {}]", self.x, self.y),
        }
    }
}
