mod reference;


use log::LevelFilter;
use std::sync::Once;

use crate::prelude::{CoordinateSystem, CustomOrigin, Position};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .init();
    });
}

/// Reference origin (Montreal, QC), WGS84 (lon [°], lat [°], alt [m])
pub const REFERENCE_ORIGIN: (f64, f64, f64) = (-73.57123, 45.50883, 0.0);

/// Expected WGS84 coordinates, in all reference scenarios
pub const REFERENCE_WGS84: (f64, f64, f64) = (-73.58, 45.52, 10.0);

/// Maximal error we tolerate on reference scenarios [°]
pub const MAX_ERROR_DEG: f64 = 1.0E-9;

/// Reference [CustomOrigin] with default units
pub fn reference_custom_origin() -> CustomOrigin {
    let (lon, lat, alt) = REFERENCE_ORIGIN;
    CustomOrigin::new(Position::new_3d(lon, lat, alt))
}

/// Reference [CoordinateSystem] with default units
pub fn reference_system() -> CoordinateSystem {
    CoordinateSystem::CustomOrigin(reference_custom_origin())
}

/// Verifies this [Position] matches [REFERENCE_WGS84]
pub fn assert_reference_wgs84(position: &Position) {
    let (lon, lat, alt) = REFERENCE_WGS84;

    assert!(
        (position.x - lon).abs() < MAX_ERROR_DEG,
        "bad longitude: {} (expecting {})",
        position.x,
        lon
    );

    assert!(
        (position.y - lat).abs() < MAX_ERROR_DEG,
        "bad latitude: {} (expecting {})",
        position.y,
        lat
    );

    let z = position
        .z
        .unwrap_or_else(|| panic!("missing altitude in {}", position));

    assert!(
        (z - alt).abs() < MAX_ERROR_DEG,
        "bad altitude: {} (expecting {})",
        z,
        alt
    );
}
