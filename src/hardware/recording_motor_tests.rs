use super::*;

#[test]
fn when_creating_a_recording_motor_it_should_have_no_history() {
    let motor = RecordingMotorController::new(MotorKind::NeoVortex);

    assert_eq!(motor.get_kind(), MotorKind::NeoVortex);
    assert!(motor.get_setup().is_none());
    assert!(motor.get_velocity_setpoints().is_empty());
    assert!(motor.get_position_setpoints().is_empty());
    assert_eq!(motor.get_stop_count(), 0);
    assert!(motor.get_last_velocity_setpoint().is_none());
    assert!(motor.get_last_position_setpoint().is_none());
}

#[test]
fn when_sending_setpoints_it_should_record_them_in_order() {
    let mut motor = RecordingMotorController::new(MotorKind::Neo);

    motor.set_velocity(1.0);
    motor.set_velocity(-2.0);
    motor.set_position(0.5);
    motor.stop();

    assert_eq!(motor.get_velocity_setpoints(), &[1.0, -2.0]);
    assert_eq!(motor.get_position_setpoints(), &[0.5]);
    assert_eq!(motor.get_last_velocity_setpoint(), Some(-2.0));
    assert_eq!(motor.get_last_position_setpoint(), Some(0.5));
    assert_eq!(motor.get_stop_count(), 1);
}

#[test]
fn when_clearing_it_should_forget_the_history() {
    let mut motor = RecordingMotorController::new(MotorKind::Neo);
    motor.set_velocity(1.0);
    motor.set_position(0.5);
    motor.stop();

    motor.clear();

    assert!(motor.get_velocity_setpoints().is_empty());
    assert!(motor.get_position_setpoints().is_empty());
    assert_eq!(motor.get_stop_count(), 0);
}

#[test]
fn when_injecting_telemetry_it_should_be_reported_as_measured() {
    let mut motor = RecordingMotorController::new(MotorKind::Neo);

    motor.set_measured_position(3.0);
    motor.set_measured_velocity(1.5);
    motor.set_measured_current(20.0);

    assert_eq!(motor.get_measured_position(), 3.0);
    assert_eq!(motor.get_measured_velocity(), 1.5);
    assert_eq!(motor.get_measured_current(), 20.0);

    motor.reset_position();
    assert_eq!(motor.get_measured_position(), 0.0);
}

#[test]
fn when_configuring_it_should_keep_the_setup() {
    let mut motor = RecordingMotorController::new(MotorKind::Neo);
    let setup = MotorSetup::new(0.1, 0.2, Some(30.0));

    motor.configure(&setup);

    assert_eq!(motor.get_setup(), Some(&setup));
}
