use super::*;

#[test]
fn when_getting_the_free_speed_of_a_motor_it_should_match_the_datasheet() {
    assert_eq!(MotorKind::Neo.get_free_speed_in_rpm(), 5676.0);
    assert_eq!(MotorKind::NeoVortex.get_free_speed_in_rpm(), 6784.0);
}

#[test]
fn when_getting_the_free_speed_in_rotations_per_second_it_should_be_the_rpm_divided_by_sixty() {
    assert_eq!(MotorKind::Neo.get_free_speed_in_rotations_per_second(), 94.6);
    assert_eq!(
        MotorKind::NeoVortex.get_free_speed_in_rotations_per_second(),
        6784.0 / 60.0
    );
}

#[test]
fn when_displaying_a_motor_kind_it_should_write_out_the_product_name() {
    assert_eq!(format!("{}", MotorKind::Neo), "NEO");
    assert_eq!(format!("{}", MotorKind::NeoVortex), "NEO Vortex");
}

#[test]
fn when_creating_a_motor_setup_it_should_store_the_values() {
    let setup = MotorSetup::new(0.5, 0.25, Some(40.0));

    assert_eq!(setup.get_position_conversion_factor(), 0.5);
    assert_eq!(setup.get_velocity_conversion_factor(), 0.25);
    assert_eq!(setup.get_current_limit_in_amps(), Some(40.0));
}

#[test]
fn when_creating_a_motor_setup_without_a_current_limit_it_should_report_none() {
    let setup = MotorSetup::new(1.0, 1.0, None);

    assert!(setup.get_current_limit_in_amps().is_none());
}
