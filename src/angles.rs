//! Defines the helpers used to work with angles in the periodic angular space of a steer axis.
//!
//! A steer angle lives in a periodic space, i.e. going past the upper boundary of the space
//! wraps around to the lower boundary. All angles in this crate are normalized to the
//! [-PI, PI] range, which matches the range reported by the absolute steer encoders.
//!
//! Because a wheel can drive in both directions, two steer headings that are PI apart describe
//! the same axis of travel. The [nearest_diagonal()] function uses this to find the diagonal
//! heading that takes the least steer travel to reach.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

#[cfg(test)]
#[path = "angles_tests.rs"]
mod angles_tests;

/// Returns the angle in the [-PI, PI] range that is equivalent to the given angle.
///
/// ## Parameters
///
/// * `angle` - The angle in radians that should be normalized.
///
/// ## Example
///
/// ```
/// use core::f64::consts::PI;
/// use max_swerve_module::angles::normalize_angle;
///
/// assert_eq!(0.0, normalize_angle(2.0 * PI));
/// assert_eq!(-0.5 * PI, normalize_angle(1.5 * PI));
/// assert_eq!(PI, normalize_angle(PI));
/// ```
pub fn normalize_angle(angle: f64) -> f64 {
    // reduce the angle to be (-2 PI, 2 PI)
    let normalized = angle % TAU;

    if normalized > PI {
        normalized - TAU
    } else if normalized < -PI {
        normalized + TAU
    } else {
        normalized
    }
}

/// Returns the smallest signed rotation that takes the `start` angle to the `end` angle.
///
/// The result is in the [-PI, PI] range. A positive result indicates a counter-clockwise
/// rotation.
///
/// ## Parameters
///
/// * `start` - The starting angle in radians
/// * `end` - The ending angle in radians
///
/// ## Example
///
/// ```
/// use core::f64::consts::PI;
/// use max_swerve_module::angles::angular_difference;
///
/// assert_eq!(-0.5 * PI, angular_difference(0.0, 1.5 * PI));
/// assert_eq!(0.5 * PI, angular_difference(-0.25 * PI, 0.25 * PI));
/// ```
pub fn angular_difference(start: f64, end: f64) -> f64 {
    normalize_angle(end - start)
}

/// Returns the diagonal heading (PI / 4 plus a multiple of PI / 2) that is closest to the
/// given angle.
///
/// The returned heading is never more than PI / 4 away from `angle`. When the angle is
/// exactly between two diagonals either of them may be returned.
///
/// ## Parameters
///
/// * `angle` - The current angle in radians
///
/// ## Example
///
/// ```
/// use core::f64::consts::PI;
/// use max_swerve_module::angles::nearest_diagonal;
///
/// assert_eq!(0.25 * PI, nearest_diagonal(0.1));
/// assert_eq!(-0.75 * PI, nearest_diagonal(-0.8 * PI));
/// ```
pub fn nearest_diagonal(angle: f64) -> f64 {
    let steps = ((normalize_angle(angle) - FRAC_PI_4) / FRAC_PI_2).round();
    normalize_angle(FRAC_PI_4 + steps * FRAC_PI_2)
}
