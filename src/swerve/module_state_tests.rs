use super::*;

#[test]
fn when_creating_a_state_it_should_store_the_values() {
    let state = ModuleState::new(1.5, 0.25);

    assert_eq!(state.get_speed_in_meters_per_second(), 1.5);
    assert_eq!(state.get_angle_in_radians(), 0.25);
}

#[test]
fn when_optimizing_a_state_within_a_quarter_turn_it_should_keep_the_direction() {
    let state = ModuleState::new(2.0, 0.4 * PI);
    let optimized = state.optimize(0.0);

    assert_eq!(optimized.get_speed_in_meters_per_second(), 2.0);
    assert_eq!(optimized.get_angle_in_radians(), 0.4 * PI);
}

#[test]
fn when_optimizing_a_state_exactly_a_quarter_turn_away_it_should_keep_the_direction() {
    let state = ModuleState::new(2.0, PI);
    let optimized = state.optimize(0.5 * PI);

    assert_eq!(optimized.get_speed_in_meters_per_second(), 2.0);
    assert_eq!(optimized.get_angle_in_radians(), PI);
}

#[test]
fn when_optimizing_a_state_more_than_a_quarter_turn_away_it_should_flip() {
    let state = ModuleState::new(2.0, 0.75 * PI);
    let optimized = state.optimize(0.0);

    assert_eq!(optimized.get_speed_in_meters_per_second(), -2.0);
    assert!((optimized.get_angle_in_radians() + 0.25 * PI).abs() < 1e-12);
}

#[test]
fn when_optimizing_a_state_across_the_boundary_it_should_take_the_short_way() {
    // 170 degrees and -170 degrees are only 20 degrees apart
    let state = ModuleState::new(1.0, -170.0_f64.to_radians());
    let optimized = state.optimize(170.0_f64.to_radians());

    assert_eq!(optimized.get_speed_in_meters_per_second(), 1.0);
    assert!((optimized.get_angle_in_radians() + 170.0_f64.to_radians()).abs() < 1e-12);
}

#[test]
fn when_optimizing_an_unnormalized_state_it_should_normalize_the_angle() {
    let state = ModuleState::new(1.0, 2.0 * PI + 0.1);
    let optimized = state.optimize(0.0);

    assert_eq!(optimized.get_speed_in_meters_per_second(), 1.0);
    assert!((optimized.get_angle_in_radians() - 0.1).abs() < 1e-12);
}

#[test]
fn when_optimizing_any_state_it_should_end_within_a_quarter_turn_of_the_current_angle() {
    let currents = [-3.0, -1.5, -0.2, 0.0, 0.7, 1.9, 3.1];
    let mut desired = -4.0 * PI;
    while desired <= 4.0 * PI {
        for current in currents {
            let state = ModuleState::new(1.25, desired);
            let optimized = state.optimize(current);

            let travel = angular_difference(current, optimized.get_angle_in_radians());
            assert!(
                travel.abs() <= FRAC_PI_2 + 1e-9,
                "Steering from {} to {} takes {} radians",
                current,
                desired,
                travel
            );

            let raw_travel = angular_difference(current, desired);
            if raw_travel.abs() > FRAC_PI_2 + 1e-9 {
                assert_eq!(optimized.get_speed_in_meters_per_second(), -1.25);
            } else if raw_travel.abs() < FRAC_PI_2 - 1e-9 {
                assert_eq!(optimized.get_speed_in_meters_per_second(), 1.25);
            }
        }

        desired += 0.05;
    }
}

#[test]
fn when_creating_a_position_it_should_store_the_values() {
    let position = ModulePosition::new(-0.04, 0.5);

    assert_eq!(position.get_distance_in_meters(), -0.04);
    assert_eq!(position.get_angle_in_radians(), 0.5);
}

#[test]
fn when_creating_default_values_they_should_be_zero() {
    assert_eq!(ModuleState::default(), ModuleState::new(0.0, 0.0));
    assert_eq!(ModulePosition::default(), ModulePosition::new(0.0, 0.0));
}
