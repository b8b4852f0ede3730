use tracing::trace;

use super::{Point2, Vector2, SMALL_NUMBER};

/// Returns the z-component of the cross product `(x1, y1) × (x2, y2)`.
#[must_use]
pub fn cross_product_2d(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    x1 * y2 - x2 * y1
}

/// Returns the dot product of `(x1, y1)` and `(x2, y2)`.
#[must_use]
pub fn dot_product_2d(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    x1 * x2 + y1 * y2
}

/// Normalizes `(x, y)` to unit length.
///
/// The magnitude is floored to [`SMALL_NUMBER`] instead of failing. A vector
/// whose components are both below [`SMALL_NUMBER`] has no defined direction;
/// it is treated as `(SMALL_NUMBER, 0)` and maps to `(1, 0)`, matching the
/// zero angle reported by [`angle_of_vector`](super::angle::angle_of_vector).
#[must_use]
pub fn normalize_2d(x: f64, y: f64) -> Vector2 {
    let (x, y) = if x.abs() < SMALL_NUMBER && y.abs() < SMALL_NUMBER {
        trace!(x, y, "normalizing sub-epsilon vector, substituting x-axis direction");
        (SMALL_NUMBER, 0.0)
    } else {
        (x, y)
    };
    let len = (x * x + y * y).sqrt().max(SMALL_NUMBER);
    Vector2::new(x / len, y / len)
}

/// Rotates `(x, y)` counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate_2d(x: f64, y: f64, angle: f64) -> Vector2 {
    let (s, c) = angle.sin_cos();
    Vector2::new(x * c - y * s, x * s + y * c)
}

/// Projects `point` perpendicularly onto the infinite line through `p1` and `p2`.
///
/// If the line is degenerate (both coordinate deltas below [`SMALL_NUMBER`])
/// `p1` is returned unchanged.
#[must_use]
pub fn project_point_on_vector_2d(point: &Point2, p1: &Point2, p2: &Point2) -> Point2 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if dx.abs() < SMALL_NUMBER && dy.abs() < SMALL_NUMBER {
        return *p1;
    }

    let k = (dy * (point.x - p1.x) - dx * (point.y - p1.y)) / (dy * dy + dx * dx);
    Point2::new(point.x - k * dy, point.y + k * dx)
}

/// Returns the segment `p0 → p1` displaced perpendicular to itself by `offset`.
///
/// Positive offsets move the segment to the right of its direction of travel,
/// negative offsets to the left.
#[must_use]
pub fn offset_vec_2d(p0: &Point2, p1: &Point2, offset: f64) -> (Point2, Point2) {
    let heading = (p1.y - p0.y).atan2(p1.x - p0.x);
    let normal = if offset < 0.0 {
        heading + std::f64::consts::FRAC_PI_2
    } else {
        heading - std::f64::consts::FRAC_PI_2
    };
    let (s, c) = normal.sin_cos();
    let shift = Vector2::new(offset.abs() * c, offset.abs() * s);

    (p0 + shift, p1 + shift)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance_2d(a: &Point2, b: &Point2) -> f64 {
    square_distance_2d(a, b).sqrt()
}

/// Squared Euclidean distance between two points, for comparison-only callers.
#[must_use]
pub fn square_distance_2d(a: &Point2, b: &Point2) -> f64 {
    (b.x - a.x) * (b.x - a.x) + (b.y - a.y) * (b.y - a.y)
}

/// Length of the 3D vector `(x, y, z)`.
#[must_use]
pub fn length_3d(x: f64, y: f64, z: f64) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

/// Signed perpendicular distance from `point` to the infinite line `l0 → l1`.
///
/// Positive when the point lies to the left of the line direction. The line
/// length is floored to [`SMALL_NUMBER`].
#[must_use]
pub fn point_to_line_distance_2d_signed(point: &Point2, l0: &Point2, l1: &Point2) -> f64 {
    let lx = l1.x - l0.x;
    let ly = l1.y - l0.y;
    let cp = cross_product_2d(lx, ly, point.x - l0.x, point.y - l0.y);
    let len = (lx * lx + ly * ly).sqrt().max(SMALL_NUMBER);
    cp / len
}

/// Classifies which side of the directed line `v1 → v2` a point lies on.
///
/// Returns `1` for left, `-1` for right and `0` when exactly on the line.
#[must_use]
pub fn point_side_of_vec(point: &Point2, v1: &Point2, v2: &Point2) -> i32 {
    let cp = cross_product_2d(v2.x - v1.x, v2.y - v1.y, point.x - v1.x, point.y - v1.y);
    if cp > 0.0 {
        1
    } else if cp < 0.0 {
        -1
    } else {
        0
    }
}

/// Expresses `target` in the body frame of a host at `host` with heading `host_angle`.
///
/// The result has x pointing along the host heading and y to its left.
#[must_use]
pub fn global_to_local_coordinates(target: &Point2, host: &Point2, host_angle: f64) -> Point2 {
    let local = rotate_2d(target.x - host.x, target.y - host.y, -host_angle);
    Point2::new(local.x, local.y)
}
