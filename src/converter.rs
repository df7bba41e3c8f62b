//! WGS84 converter
use log::debug;

use crate::{cfg::Options, position::Position, system::CoordinateSystem};

#[cfg(feature = "serde")]
use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::Deserialize;

#[cfg(feature = "serde")]
use serde_json::Value;

/// [Converter] converts local [Position]s to WGS84.
/// It is stateless: the same input always produces the same output,
/// and a [Converter] may be shared between threads.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Converter {
    /// Conversion [Options]
    pub cfg: Options,
}

impl Converter {
    /// Builds a new [Converter] with desired [Options]
    pub fn new(cfg: Options) -> Self {
        Self { cfg }
    }

    /// Converts a local [Position] expressed in given [CoordinateSystem]
    /// to WGS84: (longitude [°], latitude [°]) or (longitude [°], latitude [°], altitude [m]).
    pub fn to_wgs84(&self, position: &Position, system: &CoordinateSystem) -> Position {
        let converted = system.to_wgs84(position, &self.cfg);
        debug!(
            "{} ({}) => {} (WGS84)",
            position,
            system.system_type(),
            converted
        );
        converted
    }

    /// Converts an untyped position document (`[x, y]` or `[x, y, z]`) expressed
    /// in given coordinate system document, to WGS84 coordinates.
    /// Both documents are validated prior any calculation:
    /// any invalid input is rejected as a whole.
    #[cfg(feature = "serde")]
    #[cfg_attr(docrs, doc(cfg(feature = "serde")))]
    pub fn to_wgs84_value(
        &self,
        position: Option<&Value>,
        system: Option<&Value>,
    ) -> Result<Vec<f64>, Error> {
        let position = position.ok_or(Error::InvalidPosition)?;
        let system = system.ok_or(Error::MissingCoordinateSystem)?;

        let position = Position::from_value(position).inspect_err(|e| {
            debug!("rejected position: {}", e);
        })?;

        let system = CoordinateSystem::from_value(system).inspect_err(|e| {
            debug!("rejected coordinate system: {}", e);
        })?;

        Ok(self.to_wgs84(&position, &system).as_vec())
    }
}

/// Converts a local [Position] expressed in given [CoordinateSystem] to WGS84.
/// Uses default [Options] when none are specified.
pub fn to_wgs84(position: &Position, system: &CoordinateSystem, opts: Option<&Options>) -> Position {
    let cfg = opts.cloned().unwrap_or_default();
    Converter::new(cfg).to_wgs84(position, system)
}

/// Converts untyped documents to WGS84 coordinates (see [Converter::to_wgs84_value]).
/// The options document is reserved: it is parsed when possible, ignored otherwise.
#[cfg(feature = "serde")]
#[cfg_attr(docrs, doc(cfg(feature = "serde")))]
pub fn to_wgs84_value(
    position: Option<&Value>,
    system: Option<&Value>,
    opts: Option<&Value>,
) -> Result<Vec<f64>, Error> {
    let cfg = opts
        .and_then(|opts| Options::deserialize(opts).ok())
        .unwrap_or_default();

    Converter::new(cfg).to_wgs84_value(position, system)
}

#[cfg(test)]
mod test {
    use super::{to_wgs84, Converter};
    use crate::prelude::{CoordinateSystem, CustomOrigin, Options, Position};

    #[test]
    fn converter_defaults() {
        let converter = Converter::default();
        assert_eq!(converter, Converter::new(Options::default()));

        let system = CoordinateSystem::CustomOrigin(CustomOrigin::new(Position::new_2d(5.0, 5.0)));
        let local = Position::new_2d(-1.0, 1.0);

        assert_eq!(converter.to_wgs84(&local, &system), Position::new_2d(4.0, 6.0));
        assert_eq!(to_wgs84(&local, &system, None), Position::new_2d(4.0, 6.0));
        assert_eq!(
            to_wgs84(&local, &system, Some(&Options::default())),
            Position::new_2d(4.0, 6.0)
        );
    }

    #[test]
    fn converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
        assert_send_sync::<CoordinateSystem>();
        assert_send_sync::<Position>();
    }
}
