pub mod angle;
pub mod orientation;
pub mod segment_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 rotation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Shared threshold below which a quantity is treated as zero.
///
/// Every degeneracy check in the crate (normalization, projection, segment
/// containment, intersection, gimbal-lock guards) compares against this value
/// so that the predicates classify geometry consistently.
pub const SMALL_NUMBER: f64 = 1e-10;

/// Returns `-1.0` for negative values and `1.0` otherwise (zero included).
#[inline]
#[must_use]
pub(crate) fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Replaces a value whose magnitude is below [`SMALL_NUMBER`] with
/// `±SMALL_NUMBER`, keeping its sign (zero becomes positive).
#[inline]
#[must_use]
pub(crate) fn floor_to_epsilon(x: f64) -> f64 {
    if x.abs() < SMALL_NUMBER {
        sign(x) * SMALL_NUMBER
    } else {
        x
    }
}
