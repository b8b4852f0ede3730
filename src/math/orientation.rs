use tracing::trace;

use super::angle::angle_in_interval_2pi;
use super::{floor_to_epsilon, Matrix3, SMALL_NUMBER};

/// Heading, pitch and roll in radians.
///
/// Vehicle-dynamics convention: the frame matrix is
/// `Rz(heading) · Ry(pitch) · Rx(roll)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hpr {
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Hpr {
    /// Creates a new orientation triple.
    #[must_use]
    pub fn new(heading: f64, pitch: f64, roll: f64) -> Self {
        Self {
            heading,
            pitch,
            roll,
        }
    }

    /// Returns the triple with every component wrapped to `[0, 2π)`.
    #[must_use]
    pub fn wrapped(&self) -> Self {
        Self {
            heading: angle_in_interval_2pi(self.heading),
            pitch: angle_in_interval_2pi(self.pitch),
            roll: angle_in_interval_2pi(self.roll),
        }
    }

    /// Returns `true` if all three components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.heading.is_finite() && self.pitch.is_finite() && self.roll.is_finite()
    }
}

/// Builds the intrinsic Z-Y-Z rotation `R(z0) · R(y) · R(z1)`.
#[must_use]
#[allow(clippy::similar_names)]
pub fn rotation_zyz(z0: f64, y: f64, z1: f64) -> Matrix3 {
    let (sx, cx) = z0.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z1.sin_cos();

    Matrix3::new(
        cx * cy * cz - sx * sz, -cx * cy * sz - sx * cz, cx * sy,
        sx * cy * cz + cx * sz, cx * cz - sx * cy * sz,  sx * sy,
        -sy * cz,               sy * sz,                 cy,
    )
}

/// Builds the frame matrix `Rz(heading) · Ry(pitch) · Rx(roll)`.
#[must_use]
#[allow(clippy::similar_names)]
pub fn rotation_hpr(hpr: &Hpr) -> Matrix3 {
    let (sx, cx) = hpr.heading.sin_cos();
    let (sy, cy) = hpr.pitch.sin_cos();
    let (sz, cz) = hpr.roll.sin_cos();

    Matrix3::new(
        cx * cy, cx * sy * sz - sx * cz, sx * sz + cx * sy * cz,
        sx * cy, cx * cz + sx * sy * sz, sx * sy * cz - cx * sz,
        -sy,     cy * sz,                cy * cz,
    )
}

/// Multiplies `a · b` with a fixed evaluation order.
///
/// Each entry `c[i][j]` starts at `0.0` and accumulates `a[i][k] * b[k][j]`
/// for `k = 0, 1, 2` in that order. The gimbal-lock guard compares entries of
/// the product against [`SMALL_NUMBER`], so the rounding of this sum decides
/// which frames get clamped near the singularity.
#[must_use]
#[allow(clippy::needless_range_loop)]
pub fn multiply_row_major(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut c = Matrix3::zeros();
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                c[(i, j)] += a[(i, k)] * b[(k, j)];
            }
        }
    }
    c
}

/// Converts an intrinsic Z-Y-Z rotation to heading/pitch/roll.
///
/// Outputs come straight from `atan2` and are not wrapped.
#[must_use]
pub fn zyz_to_euler_angles(z0: f64, y: f64, z1: f64) -> Hpr {
    extract_hpr(&rotation_zyz(z0, y, z1))
}

/// Composes a local orientation `frame1` onto a reference orientation `frame0`.
///
/// Computes `R(frame0) · R(frame1)` and extracts the resulting heading, pitch
/// and roll, each wrapped to `[0, 2π)`.
#[must_use]
pub fn r0_r1_to_euler_angles(frame0: &Hpr, frame1: &Hpr) -> Hpr {
    let r0 = rotation_hpr(frame0);
    let r1 = rotation_hpr(frame1);
    extract_hpr(&multiply_row_major(&r0, &r1)).wrapped()
}

/// Extracts heading/pitch/roll from a rotation matrix after guarding against
/// gimbal lock.
fn extract_hpr(m: &Matrix3) -> Hpr {
    let mut m = *m;
    guard_gimbal_lock(&mut m);

    let (m21, m22) = (m[(2, 1)], m[(2, 2)]);
    Hpr {
        heading: m[(1, 0)].atan2(m[(0, 0)]),
        pitch: (-m[(2, 0)]).atan2((m21 * m21 + m22 * m22).sqrt()),
        roll: m21.atan2(m22),
    }
}

/// Floors `m[0][0]` and `m[2][2]` to `±SMALL_NUMBER` so `atan2` never sees `(0, 0)`.
fn guard_gimbal_lock(m: &mut Matrix3) {
    if m[(0, 0)].abs() < SMALL_NUMBER || m[(2, 2)].abs() < SMALL_NUMBER {
        trace!(m00 = m[(0, 0)], m22 = m[(2, 2)], "clamping near gimbal lock");
    }
    m[(0, 0)] = floor_to_epsilon(m[(0, 0)]);
    m[(2, 2)] = floor_to_epsilon(m[(2, 2)]);
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_hpr_eq(actual: &Hpr, expected: &Hpr) {
        assert_relative_eq!(actual.heading, expected.heading, epsilon = TOL);
        assert_relative_eq!(actual.pitch, expected.pitch, epsilon = TOL);
        assert_relative_eq!(actual.roll, expected.roll, epsilon = TOL);
    }

    #[test]
    fn identity_frame_builds_identity_matrix() {
        let m = rotation_hpr(&Hpr::default());
        assert_relative_eq!(m, Matrix3::identity());
    }

    #[test]
    fn frame_matrix_is_orthonormal() {
        let m = rotation_hpr(&Hpr::new(0.7, -0.3, 1.1));
        assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn row_major_product_sums_in_index_order() {
        let a = rotation_hpr(&Hpr::new(0.4, 1.2, -0.8));
        let b = rotation_hpr(&Hpr::new(-2.1, 0.35, 0.9));
        let c = multiply_row_major(&a, &b);
        for i in 0..3 {
            for j in 0..3 {
                let expected =
                    a[(i, 0)] * b[(0, j)] + a[(i, 1)] * b[(1, j)] + a[(i, 2)] * b[(2, j)];
                assert_eq!(c[(i, j)], expected);
            }
        }
        assert_relative_eq!(c, a * b, epsilon = 1e-12);
    }

    #[test]
    fn identity_composed_with_frame_is_frame() {
        let frame = Hpr::new(0.3, 0.2, 0.1);
        let out = r0_r1_to_euler_angles(&Hpr::default(), &frame);
        assert_hpr_eq(&out, &frame);
    }

    #[test]
    fn identity_composed_with_negative_frame_is_wrapped() {
        let frame = Hpr::new(-0.5, -0.2, 2.0);
        let out = r0_r1_to_euler_angles(&Hpr::default(), &frame);
        assert_hpr_eq(&out, &Hpr::new(TAU - 0.5, TAU - 0.2, 2.0));
    }

    #[test]
    fn frame_composed_with_identity_is_frame() {
        let frame = Hpr::new(1.0, 0.4, -0.6);
        let out = r0_r1_to_euler_angles(&frame, &Hpr::default());
        assert_hpr_eq(&out, &frame.wrapped());
    }

    #[test]
    fn headings_add_and_wrap() {
        let out = r0_r1_to_euler_angles(&Hpr::new(0.5, 0.0, 0.0), &Hpr::new(0.25, 0.0, 0.0));
        assert_hpr_eq(&out, &Hpr::new(0.75, 0.0, 0.0));

        let out = r0_r1_to_euler_angles(&Hpr::new(3.0, 0.0, 0.0), &Hpr::new(3.0, 0.0, 0.0));
        assert_hpr_eq(&out, &Hpr::new(6.0, 0.0, 0.0));
    }

    #[test]
    fn pitches_add_without_heading_or_roll() {
        let out = r0_r1_to_euler_angles(&Hpr::new(0.0, 0.2, 0.0), &Hpr::new(0.0, 0.3, 0.0));
        assert_hpr_eq(&out, &Hpr::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn composition_into_gimbal_lock_is_finite() {
        let out = r0_r1_to_euler_angles(
            &Hpr::new(0.3, FRAC_PI_4, 0.0),
            &Hpr::new(0.0, FRAC_PI_4, 0.0),
        );
        assert!(out.is_finite());
        assert!(out.heading >= 0.0 && out.heading < TAU);
        assert_relative_eq!(out.pitch, FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn zyz_identity() {
        assert_hpr_eq(&zyz_to_euler_angles(0.0, 0.0, 0.0), &Hpr::default());
    }

    #[test]
    fn zyz_pure_y_is_pitch() {
        assert_hpr_eq(&zyz_to_euler_angles(0.0, 0.4, 0.0), &Hpr::new(0.0, 0.4, 0.0));
    }

    #[test]
    fn zyz_two_z_rotations_add_to_heading() {
        assert_hpr_eq(&zyz_to_euler_angles(0.3, 0.0, 0.2), &Hpr::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn zyz_at_gimbal_lock_is_finite() {
        let out = zyz_to_euler_angles(0.0, FRAC_PI_2, 0.0);
        assert!(out.is_finite());
        assert_relative_eq!(out.pitch, FRAC_PI_2, epsilon = 1e-6);

        let out = zyz_to_euler_angles(0.7, FRAC_PI_2, 0.3);
        assert!(out.is_finite());
    }

    #[test]
    fn gimbal_guard_floors_with_sign() {
        let mut m = Matrix3::identity();
        m[(0, 0)] = -1e-14;
        m[(2, 2)] = 0.0;
        guard_gimbal_lock(&mut m);
        assert_relative_eq!(m[(0, 0)], -SMALL_NUMBER);
        assert_relative_eq!(m[(2, 2)], SMALL_NUMBER);
        assert_relative_eq!(m[(1, 1)], 1.0);
    }
}
