use super::*;

fn create_config() -> ModuleConfig {
    ModuleConfig::new(ModuleLocation::LeftFront, GearRatio::L3, 0.6, 0.6)
}

#[test]
fn when_creating_a_config_it_should_fill_in_the_defaults() {
    let config = create_config();

    assert_eq!(config.location, ModuleLocation::LeftFront);
    assert_eq!(config.gear_ratio, GearRatio::L3);
    assert_eq!(config.wheelbase_in_meters, 0.6);
    assert_eq!(config.track_width_in_meters, 0.6);
    assert_eq!(config.auto_lock_time_in_seconds, 3.0);
    assert_eq!(config.max_slipping_time_in_seconds, 0.6);
    assert_eq!(config.drive_current_limit_in_amps, 50.0);
    assert_eq!(config.slip_ratio, 0.08);
    assert_eq!(config.loop_period_in_seconds, 0.02);

    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn when_converting_times_it_should_return_durations() {
    let config = create_config();

    assert_eq!(config.get_auto_lock_time(), Duration::from_secs(3));
    assert!((config.get_max_slipping_time().as_secs_f64() - 0.6).abs() < 1e-9);
    assert!((config.get_loop_period().as_secs_f64() - 0.02).abs() < 1e-9);
}

#[test]
fn when_the_wheelbase_is_not_positive_it_should_fail_validation() {
    let mut config = create_config();
    config.wheelbase_in_meters = 0.0;

    assert_eq!(
        config.validate(),
        Err(Error::InvalidDimension {
            name: "wheelbase",
            value: 0.0
        })
    );
}

#[test]
fn when_the_track_width_is_not_finite_it_should_fail_validation() {
    let mut config = create_config();
    config.track_width_in_meters = f64::INFINITY;

    assert_eq!(
        config.validate(),
        Err(Error::InvalidDimension {
            name: "track width",
            value: f64::INFINITY
        })
    );
}

#[test]
fn when_a_time_is_negative_it_should_fail_validation() {
    let mut config = create_config();
    config.max_slipping_time_in_seconds = -1.0;

    assert_eq!(
        config.validate(),
        Err(Error::InvalidDuration {
            name: "maximum slipping time",
            value: -1.0
        })
    );
}

#[test]
fn when_the_auto_lock_time_is_zero_it_should_pass_validation() {
    let mut config = create_config();
    config.auto_lock_time_in_seconds = 0.0;

    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn when_the_loop_period_is_zero_it_should_fail_validation() {
    let mut config = create_config();
    config.loop_period_in_seconds = 0.0;

    assert_eq!(
        config.validate(),
        Err(Error::InvalidDuration {
            name: "loop period",
            value: 0.0
        })
    );
}

#[test]
fn when_the_current_limit_is_negative_it_should_fail_validation() {
    let mut config = create_config();
    config.drive_current_limit_in_amps = -5.0;

    assert_eq!(
        config.validate(),
        Err(Error::InvalidCurrentLimit { value: -5.0 })
    );
}

#[test]
fn when_the_slip_ratio_is_out_of_range_it_should_fail_validation() {
    let mut config = create_config();

    config.slip_ratio = 0.5;
    assert_eq!(
        config.validate(),
        Err(Error::InvalidSlipRatio { value: 0.5 })
    );

    config.slip_ratio = 0.0;
    assert_eq!(
        config.validate(),
        Err(Error::InvalidSlipRatio { value: 0.0 })
    );

    config.slip_ratio = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn when_deserializing_a_minimal_config_it_should_use_the_defaults() {
    let json = r#"{
        "location": "RightRear",
        "gear_ratio": "L2",
        "wheelbase_in_meters": 0.5,
        "track_width_in_meters": 0.4
    }"#;

    let config: ModuleConfig = serde_json::from_str(json).unwrap();

    let expected = ModuleConfig::new(ModuleLocation::RightRear, GearRatio::L2, 0.5, 0.4);
    assert_eq!(config, expected);
}

#[test]
fn when_deserializing_a_full_config_it_should_use_the_given_values() {
    let json = r#"{
        "location": "LeftRear",
        "gear_ratio": "L1",
        "wheelbase_in_meters": 0.5,
        "track_width_in_meters": 0.4,
        "auto_lock_time_in_seconds": 1.5,
        "max_slipping_time_in_seconds": 0.25,
        "drive_current_limit_in_amps": 40.0,
        "slip_ratio": 0.1,
        "loop_period_in_seconds": 0.01
    }"#;

    let config: ModuleConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.location, ModuleLocation::LeftRear);
    assert_eq!(config.gear_ratio, GearRatio::L1);
    assert_eq!(config.auto_lock_time_in_seconds, 1.5);
    assert_eq!(config.max_slipping_time_in_seconds, 0.25);
    assert_eq!(config.drive_current_limit_in_amps, 40.0);
    assert_eq!(config.slip_ratio, 0.1);
    assert_eq!(config.loop_period_in_seconds, 0.01);
    assert_eq!(config.validate(), Ok(()));
}
