//! Angular ordering of points around an anchor.
//!
//! Points are ordered by their [polar angle](Point::polar_angle) around the
//! anchor. Points at exactly the same angle are ordered by their distance to the
//! anchor, nearest first. Both sorting strategies in this module share that
//! relation through [`is_larger`] and produce the same permutation whenever no
//! two points tie on both keys.
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::data::Point;

pub mod heap;
pub mod selection;

pub use heap::HeapSort;
pub use selection::SelectionSort;

/// In-place ascending sort of points by angle, then distance, around `anchor`.
pub trait AngularSort {
  fn sort<T: Float>(&self, points: &mut [Point<T>], anchor: &Point<T>);
}

/// Whether `a` comes strictly after `b` in the angular order around `anchor`.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::algorithms::sorting::is_larger;
/// # use graham_hull::data::Point;
/// let anchor = Point::new([2.0, 0.0]);
/// // Steeper angle.
/// assert!(is_larger(&Point::new([5.0, 8.0]), &Point::new([7.0, 5.0]), &anchor));
/// // Same angle, further away.
/// assert!(is_larger(&Point::new([8.0, 6.0]), &Point::new([7.0, 5.0]), &anchor));
/// assert!(!is_larger(&Point::new([7.0, 5.0]), &Point::new([8.0, 6.0]), &anchor));
/// ```
pub fn is_larger<T: Float>(a: &Point<T>, b: &Point<T>, anchor: &Point<T>) -> bool {
  let a_angle = a.polar_angle(anchor);
  let b_angle = b.polar_angle(anchor);
  a_angle > b_angle || (a_angle == b_angle && anchor.distance(a) > anchor.distance(b))
}

/// The order of [`is_larger`] as an [`Ordering`]. Points that tie on both angle
/// and distance compare `Equal`.
pub fn angular_cmp<T: Float>(a: &Point<T>, b: &Point<T>, anchor: &Point<T>) -> Ordering {
  if is_larger(a, b, anchor) {
    Ordering::Greater
  } else if is_larger(b, a, anchor) {
    Ordering::Less
  } else {
    Ordering::Equal
  }
}

/// Strategy picked at runtime. Parses from `selection` or `slow`, and `heap`
/// or `fast`, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
  /// $O(n^2)$ [`SelectionSort`].
  Selection,
  /// $O(n \log n)$ [`HeapSort`].
  #[default]
  Heap,
}

impl AngularSort for SortStrategy {
  fn sort<T: Float>(&self, points: &mut [Point<T>], anchor: &Point<T>) {
    match self {
      SortStrategy::Selection => SelectionSort.sort(points, anchor),
      SortStrategy::Heap => HeapSort.sort(points, anchor),
    }
  }
}

impl fmt::Display for SortStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SortStrategy::Selection => write!(f, "selection"),
      SortStrategy::Heap => write!(f, "heap"),
    }
  }
}

impl FromStr for SortStrategy {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "selection" | "slow" => Ok(SortStrategy::Selection),
      "heap" | "fast" => Ok(SortStrategy::Heap),
      other => Err(format!(
        "unknown sort strategy `{}`, expected `selection` or `heap`",
        other
      )),
    }
  }
}
