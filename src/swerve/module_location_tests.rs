use super::*;

#[test]
fn when_getting_the_coordinate_it_should_use_the_signs_of_the_location() {
    let wheelbase = 0.6;
    let track_width = 0.5;

    assert_eq!(
        ModuleLocation::LeftFront.get_coordinate(wheelbase, track_width),
        Vector2::new(0.3, 0.25)
    );
    assert_eq!(
        ModuleLocation::RightFront.get_coordinate(wheelbase, track_width),
        Vector2::new(0.3, -0.25)
    );
    assert_eq!(
        ModuleLocation::LeftRear.get_coordinate(wheelbase, track_width),
        Vector2::new(-0.3, 0.25)
    );
    assert_eq!(
        ModuleLocation::RightRear.get_coordinate(wheelbase, track_width),
        Vector2::new(-0.3, -0.25)
    );
}

#[test]
fn when_getting_all_locations_it_should_return_each_location_once() {
    let all = ModuleLocation::all();

    assert_eq!(all.len(), 4);
    for i in 0..all.len() {
        for j in i + 1..all.len() {
            assert_ne!(all[i], all[j]);
        }
    }
}

#[test]
fn when_getting_the_offset_it_should_match_the_encoder_mounting() {
    assert_eq!(ModuleLocation::LeftFront.get_offset_in_radians(), -FRAC_PI_2);
    assert_eq!(ModuleLocation::RightFront.get_offset_in_radians(), 0.0);
    assert_eq!(ModuleLocation::LeftRear.get_offset_in_radians(), PI);
    assert_eq!(ModuleLocation::RightRear.get_offset_in_radians(), FRAC_PI_2);
}

#[test]
fn when_displaying_a_location_it_should_write_out_the_name() {
    assert_eq!(format!("{}", ModuleLocation::LeftFront), "LeftFront");
    assert_eq!(format!("{}", ModuleLocation::RightRear), "RightRear");
}

#[test]
fn when_getting_the_reduction_it_should_decrease_from_low_to_high_speed() {
    assert_eq!(GearRatio::L1.get_reduction(), 5.50);
    assert_eq!(GearRatio::L2.get_reduction(), 5.08);
    assert_eq!(GearRatio::L3.get_reduction(), 4.71);

    assert!(GearRatio::L1.get_meters_per_motor_rotation() < GearRatio::L2.get_meters_per_motor_rotation());
    assert!(GearRatio::L2.get_meters_per_motor_rotation() < GearRatio::L3.get_meters_per_motor_rotation());
}

#[test]
fn when_getting_the_distance_per_motor_rotation_it_should_divide_the_circumference() {
    let expected = 0.0762 * PI / 4.71;
    assert!((GearRatio::L3.get_meters_per_motor_rotation() - expected).abs() < 1e-12);
}

#[test]
fn when_displaying_a_gear_ratio_it_should_include_the_reduction() {
    assert_eq!(format!("{}", GearRatio::L3), "L3 (4.71:1)");
}

#[test]
fn when_deserializing_a_location_it_should_use_the_variant_name() {
    let location: ModuleLocation = serde_json::from_str("\"RightRear\"").unwrap();
    assert_eq!(location, ModuleLocation::RightRear);

    let ratio: GearRatio = serde_json::from_str("\"L2\"").unwrap();
    assert_eq!(ratio, GearRatio::L2);
}
