use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{sign, SMALL_NUMBER};

/// Wraps an angle into the canonical range `[0, 2π)`.
///
/// `-0.0` is returned as `0.0`. Re-applying the function is a no-op.
#[must_use]
pub fn angle_in_interval_2pi(angle: f64) -> f64 {
    let mut wrapped = angle % TAU;
    if wrapped < 0.0 {
        wrapped += TAU;
    }
    // Tiny negative inputs round up to exactly 2π after the shift.
    if wrapped >= TAU || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

/// Returns the direction of the vector `(x, y)` in `[0, 2π)`.
///
/// Near-vertical vectors have `x` floored to `±SMALL_NUMBER` before `atan2`.
/// The zero vector is undefined and yields `0`.
#[must_use]
pub fn angle_of_vector(x: f64, y: f64) -> f64 {
    let mut x = x;
    if x.abs() < SMALL_NUMBER {
        if y.abs() < SMALL_NUMBER {
            return 0.0;
        }
        x = sign(x) * SMALL_NUMBER;
    }
    angle_in_interval_2pi(y.atan2(x))
}

/// Signed shortest difference `angle1 - angle2`, in `(-π, π]`.
#[must_use]
pub fn angle_difference(angle1: f64, angle2: f64) -> f64 {
    let diff = (angle1 - angle2) % TAU;
    if diff <= -PI {
        diff + TAU
    } else if diff > PI {
        diff - TAU
    } else {
        diff
    }
}

/// Magnitude of the angular separation between two angles, in `[0, π]`.
#[must_use]
pub fn abs_angle_difference(angle1: f64, angle2: f64) -> f64 {
    let mut diff = (angle1 - angle2) % TAU;
    if diff < 0.0 {
        diff += TAU;
    }
    if diff > PI {
        diff = TAU - diff;
    }
    angle_in_interval_2pi(diff)
}

/// Sum of two angles, wrapped to `[0, 2π)`.
#[must_use]
pub fn angle_sum(angle1: f64, angle2: f64) -> f64 {
    angle_in_interval_2pi(angle1 + angle2)
}

/// Returns `true` if `theta` points within ±90° of the reference direction.
///
/// Used to decide whether a heading runs along or against a road or lane
/// direction.
#[must_use]
pub fn is_angle_straight(theta: f64) -> bool {
    let mut t = (theta + PI) % TAU;
    if t < 0.0 {
        t += TAU;
    }
    t -= PI;
    (-FRAC_PI_2..=FRAC_PI_2).contains(&t)
}
