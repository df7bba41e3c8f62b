use thiserror::Error;

/// Every [Error] describes an invalid input. Conversions are pure,
/// so the same input will always be rejected for the same reason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Position is not a sequence (for example, an object was proposed).
    #[error("invalid position: expecting [x, y] or [x, y, z]")]
    InvalidPosition,

    /// Positions are made of exactly 2 or 3 coordinates.
    #[error("invalid position dimension: {0} (expecting 2 or 3)")]
    InvalidPositionDimension(usize),

    /// Coordinate at this index is not a number.
    #[error("non numeric coordinate #{0}")]
    NonNumericCoordinate(usize),

    #[error("missing coordinate system")]
    MissingCoordinateSystem,

    /// Coordinate system descriptor does not carry a `type` discriminator.
    #[error("missing coordinate system type")]
    MissingCoordinateSystemType,

    #[error("unknown coordinate system \"{0}\"")]
    UnknownCoordinateSystem(String),

    /// `customOrigin` requires a valid `originOffset` position.
    #[error("invalid origin offset")]
    InvalidOriginOffset,
}

impl Error {
    /// All [Error]s belong to the invalid input category:
    /// the conversion was not attempted and no partial result exists.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidPosition
            | Self::InvalidPositionDimension(_)
            | Self::NonNumericCoordinate(_)
            | Self::MissingCoordinateSystem
            | Self::MissingCoordinateSystemType
            | Self::UnknownCoordinateSystem(_)
            | Self::InvalidOriginOffset => true,
        }
    }
}
