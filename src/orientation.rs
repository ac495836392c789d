use num_traits::Float;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The turn is the sign of the cross product `(p2 - p1) × (p3 - p1)`, compared
  /// against zero exactly. There is no tolerance: a cross product of `1e-300` is
  /// a counter-clockwise turn. A NaN cross product counts as co-linear.
  ///
  /// You should prefer to use [Point::orientation](crate::data::Point::orientation)
  /// when possible.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use graham_hull::Orientation;
  /// let p1 = [0.0, 0.0];
  /// let p2 = [0.0, 1.0]; // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &[0.0, 2.0]).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &[-1.0, 2.0]).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &[1.0, 2.0]).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: Float,
  {
    let area = (p2[0] - p1[0]) * (p3[1] - p1[1]) - (p2[1] - p1[1]) * (p3[0] - p1[0]);
    if area < T::zero() {
      ClockWise
    } else if area > T::zero() {
      CounterClockWise
    } else {
      CoLinear
    }
  }

  /// `-1` for clockwise, `1` for counter-clockwise and `0` for co-linear.
  pub fn sign(self) -> i8 {
    match self {
      ClockWise => -1,
      CounterClockWise => 1,
      CoLinear => 0,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clockwise() {
    let turn = Orientation::new(&[0.0, 0.0], &[2.0, 3.0], &[4.0, 5.0]);
    assert_eq!(turn, ClockWise);
    assert_eq!(turn.sign(), -1);
  }

  #[test]
  fn counter_clockwise() {
    let turn = Orientation::new(&[0.0, 0.0], &[2.0, 3.0], &[0.0, 5.0]);
    assert_eq!(turn, CounterClockWise);
    assert_eq!(turn.sign(), 1);
  }

  #[test]
  fn colinear() {
    let turn = Orientation::new(&[0.0, 0.0], &[2.0, 3.0], &[4.0, 6.0]);
    assert_eq!(turn, CoLinear);
    assert_eq!(turn.sign(), 0);
  }

  #[test]
  fn no_tolerance() {
    // Cross product is 1e-300, far below any epsilon.
    let turn = Orientation::new(&[0.0, 0.0], &[1.0, 0.0], &[0.0, 1e-300]);
    assert_eq!(turn, CounterClockWise);
  }

  #[test]
  fn nan_is_colinear() {
    let turn = Orientation::new(&[0.0, f64::NAN], &[1.0, 0.0], &[0.0, 1.0]);
    assert_eq!(turn, CoLinear);
  }

  #[test]
  fn reverse_twice() {
    for turn in [ClockWise, CounterClockWise, CoLinear] {
      assert_eq!(turn.reverse().reverse(), turn);
      assert_eq!(turn.reverse().sign(), -turn.sign());
    }
  }
}
