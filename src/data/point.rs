use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Index;

use crate::Orientation;

/// A point in the Cartesian plane.
///
/// Points carry no ordering of their own. Sorting happens through angles and
/// distances measured from an anchor, see [`crate::algorithms::sorting`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Point<T = f64> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    let [x, y] = self.array.clone();
    Point { array: [f(x), f(y)] }
  }
}

impl<T: Float> Point<T> {
  /// Euclidean distance between `self` and `other`.
  pub fn distance(&self, other: &Point<T>) -> T {
    let dx = self.array[0] - other.array[0];
    let dy = self.array[1] - other.array[1];
    (dx * dx + dy * dy).sqrt()
  }

  /// Angle of the ray from `anchor` to `self`, in radians, as given by
  /// `atan2(dy, dx)`.
  ///
  /// Returns exactly `0` instead of NaN. That covers `self == anchor` on
  /// platforms where `atan2(0, 0)` is undefined, as well as NaN coordinates.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use graham_hull::data::Point;
  /// let anchor = Point::new([0.0, 0.0]);
  /// assert_eq!(Point::new([0.0, 3.0]).polar_angle(&anchor), std::f64::consts::FRAC_PI_2);
  /// assert_eq!(anchor.polar_angle(&anchor), 0.0);
  /// ```
  pub fn polar_angle(&self, anchor: &Point<T>) -> T {
    let angle = (self.array[1] - anchor.array[1]).atan2(self.array[0] - anchor.array[0]);
    if angle.is_nan() {
      T::zero()
    } else {
      angle
    }
  }

  /// Direction of the turn `self -> q -> r`. See [`Orientation::new`].
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}
