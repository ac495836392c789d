#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of planar point sets.
//!
//! The hull is built with a [Graham scan](algorithms::convex_hull): the lowest
//! point becomes the anchor, every point is sorted by polar angle around it, and
//! a monotone stack sweep throws away every point that would make the boundary
//! turn clockwise. The angular sort is pluggable, see [`algorithms::AngularSort`].
//!
//! ```rust
//! # use graham_hull::algorithms::convex_hull;
//! # use graham_hull::data::Point;
//! let square = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([4.0, 0.0]),
//!   Point::new([4.0, 4.0]),
//!   Point::new([0.0, 4.0]),
//!   Point::new([2.0, 2.0]),
//! ];
//! let hull = convex_hull(square).unwrap();
//! assert_eq!(hull.len(), 4);
//! assert_eq!(hull[0], Point::new([0.0, 0.0]));
//! ```
use std::fmt;

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The sweep needed more hull candidates than the stack can hold.
  StackOverflow,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      Error::StackOverflow => write!(
        f,
        "The stack has overflowed because of having too many points"
      ),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
