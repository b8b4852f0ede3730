use tracing::trace;

use super::vector_2d::{distance_2d, project_point_on_vector_2d};
use super::{Point2, Vector2, SMALL_NUMBER};
use crate::error::IntersectionError;

/// A directed 2D line segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance_2d(&self.start, &self.end)
    }

    /// Returns `true` if both coordinate extents are below [`SMALL_NUMBER`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let d = self.direction();
        d.x.abs() < SMALL_NUMBER && d.y.abs() < SMALL_NUMBER
    }
}

/// Where a point falls relative to a segment's endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Containment {
    /// `true` if the point lies between the endpoints.
    pub inside: bool,
    /// Normalized position along the segment while `inside`.
    ///
    /// When outside this is not a fraction: it is the distance past the
    /// nearer endpoint, negative before `start` and positive beyond `end`.
    pub s_norm: f64,
}

/// Result of a point-to-edge distance query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDistance {
    /// Distance from the query point to `nearest`.
    pub distance: f64,
    /// Closest point on the bounded segment.
    pub nearest: Point2,
}

/// Intersection of the infinite lines through two segments.
///
/// The returned point may lie outside either segment; run
/// [`point_in_between_vector_endpoints`] when a bounded hit is needed.
///
/// # Errors
///
/// Returns [`IntersectionError::Parallel`] if the determinant of the system
/// is below [`SMALL_NUMBER`] in magnitude.
pub fn line_segment_intersection(a: &Segment2, b: &Segment2) -> Result<Point2, IntersectionError> {
    let (ax1, ay1, ax2, ay2) = (a.start.x, a.start.y, a.end.x, a.end.y);
    let (bx1, by1, bx2, by2) = (b.start.x, b.start.y, b.end.x, b.end.y);

    let determinant = (ax1 - ax2) * (by1 - by2) - (ay1 - ay2) * (bx1 - bx2);
    if determinant.abs() < SMALL_NUMBER {
        trace!(determinant, "line intersection rejected as parallel");
        return Err(IntersectionError::Parallel { determinant });
    }

    let t = ((ax1 - bx1) * (by1 - by2) - (ay1 - by1) * (bx1 - bx2)) / determinant;
    Ok(Point2::new(ax1 + t * (ax2 - ax1), ay1 + t * (ay2 - ay1)))
}

/// Classifies whether `point` lies between the endpoints of `seg`.
///
/// The test runs along the axis of larger extent. A zero-length segment
/// contains every point with `s_norm = 0`.
#[must_use]
pub fn point_in_between_vector_endpoints(point: &Point2, seg: &Segment2) -> Containment {
    let (x1, y1, x2, y2) = (seg.start.x, seg.start.y, seg.end.x, seg.end.y);

    if seg.is_degenerate() {
        trace!("containment test against zero-length segment");
        return Containment {
            inside: true,
            s_norm: 0.0,
        };
    }

    let (s_norm, inside) = if (x2 - x1).abs() < (y2 - y1).abs() {
        let s = (point.y - y1) / (y2 - y1);
        let inside = if y2 > y1 {
            !(point.y < y1 || point.y > y2)
        } else {
            !(point.y > y1 || point.y < y2)
        };
        (s, inside)
    } else {
        let s = (point.x - x1) / (x2 - x1);
        let inside = if x2 > x1 {
            !(point.x < x1 || point.x > x2)
        } else {
            !(point.x > x1 || point.x < x2)
        };
        (s, inside)
    };

    if inside {
        return Containment { inside, s_norm };
    }

    let s_norm = if s_norm < 0.0 {
        -distance_2d(point, &seg.start)
    } else {
        distance_2d(point, &seg.end)
    };
    Containment { inside, s_norm }
}

/// Distance from `point` to the bounded segment `seg`.
///
/// The point is projected onto the segment's line; if the projection falls
/// outside the segment the nearer endpoint is used instead.
#[must_use]
pub fn distance_from_point_to_edge_2d(point: &Point2, seg: &Segment2) -> EdgeDistance {
    let projected = project_point_on_vector_2d(point, &seg.start, &seg.end);
    let containment = point_in_between_vector_endpoints(&projected, seg);

    let nearest = if containment.inside {
        projected
    } else if containment.s_norm < 0.0 {
        seg.start
    } else {
        seg.end
    };

    EdgeDistance {
        distance: distance_2d(point, &nearest),
        nearest,
    }
}
