pub mod error;
pub mod log;
pub mod math;

pub use error::{DrivegeomError, IntersectionError, LogError, Result};
pub use math::orientation::Hpr;
pub use math::segment_2d::{Containment, EdgeDistance, Segment2};
pub use math::SMALL_NUMBER;
