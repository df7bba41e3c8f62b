use crate::{
    prelude::{to_wgs84, CoordinateSystem, Converter, Options, Position},
    tests::{assert_reference_wgs84, init_logger, reference_custom_origin, reference_system},
};

use rstest::*;

#[fixture]
fn build_converter() -> Converter {
    Converter::new(Options::default())
}

#[test]
fn reference_degrees() {
    init_logger();

    let converter = build_converter();
    let system = reference_system();

    let local = Position::new_3d(-0.00877, 0.01117, 10.0);
    let wgs84 = converter.to_wgs84(&local, &system);

    assert_reference_wgs84(&wgs84);
}

#[test]
fn reference_feet() {
    init_logger();

    let converter = build_converter();

    let system = CoordinateSystem::CustomOrigin(
        reference_custom_origin().with_measurement_units(["ft", "ft", "ft"]),
    );

    let local = Position::new_3d(-2240.450648739, 4071.88290589, 32.8084);
    let wgs84 = converter.to_wgs84(&local, &system);

    assert_reference_wgs84(&wgs84);
}

#[test]
fn reference_rotated() {
    init_logger();

    let converter = build_converter();

    let system = CoordinateSystem::CustomOrigin(
        reference_custom_origin()
            .with_measurement_units(["m", "m"])
            .with_horizontal_plane_rotation(30.0),
    );

    let local = Position::new_3d(-1211.9544478485, 733.388008366, 10.0);
    let wgs84 = converter.to_wgs84(&local, &system);

    assert_reference_wgs84(&wgs84);
}

#[rstest]
#[case(Position::new_2d(-0.00877, 0.01117))]
#[case(Position::new_3d(-0.00877, 0.01117, 10.0))]
fn output_dimension(#[case] local: Position) {
    init_logger();

    let wgs84 = to_wgs84(&local, &reference_system(), None);
    assert_eq!(wgs84.dimension(), local.dimension());
}

#[test]
fn null_offset_is_origin() {
    init_logger();

    let origin = reference_custom_origin();

    for system in [
        origin.clone(),
        origin.with_measurement_units(["m", "m", "m"]),
        origin.with_measurement_units(["ft", "ft", "ft"]),
        origin
            .with_measurement_units(["m", "m"])
            .with_horizontal_plane_rotation(45.0),
    ] {
        let system = CoordinateSystem::CustomOrigin(system);
        let wgs84 = to_wgs84(&Position::new_3d(0.0, 0.0, 0.0), &system, None);
        assert_eq!(wgs84, origin.origin_offset);
    }
}

#[test]
fn one_kilometer_north() {
    init_logger();

    let system =
        CoordinateSystem::CustomOrigin(reference_custom_origin().with_measurement_units(["m", "m"]));

    let wgs84 = to_wgs84(&Position::new_2d(0.0, 1000.0), &system, None);

    assert_eq!(wgs84.x, reference_custom_origin().origin_offset.x);
    assert!((wgs84.y - (45.50883 + 1000.0 / 111111.0)).abs() < 1.0E-12);
}

#[test]
fn equator_origin() {
    init_logger();

    // null latitude: longitude degrees are as long as latitude degrees
    let system = CoordinateSystem::CustomOrigin(
        crate::prelude::CustomOrigin::new(Position::new_2d(10.0, 0.0))
            .with_measurement_units(["m", "m"]),
    );

    let wgs84 = to_wgs84(&Position::new_2d(111111.0, 111111.0), &system, None);
    assert!((wgs84.x - 11.0).abs() < 1.0E-12);
    assert!((wgs84.y - 1.0).abs() < 1.0E-12);
}
