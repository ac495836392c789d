// This module contains strategies and checks for:
//  * points
//  * point sets
//  * hulls
// A Strategy is a way to generate a shrinkable value.
use crate::algorithms::sorting::is_larger;
use crate::data::Point;

use core::ops::Range;
use ordered_float::OrderedFloat;
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;

///////////////////////////////////////////////////////////////////////////////
// Points

// Integer coordinates keep every cross product exact.
pub fn any_grid_point() -> impl Strategy<Value = Point> {
  (-1000i32..=1000, -1000i32..=1000).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn grid_points(len: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_grid_point(), len)
}

// Bounded so that squared distances and cross products cannot overflow.
pub fn any_finite_point() -> impl Strategy<Value = Point> {
  (-1e6f64..1e6, -1e6f64..1e6).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_finite_points(len: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_finite_point(), len)
}

///////////////////////////////////////////////////////////////////////////////
// Fixtures

// (k, k²) for k in 0..n. Every point is a hull vertex and all arithmetic stays
// exact well past the default stack capacity.
pub fn parabola(n: usize) -> Vec<Point> {
  (0..n)
    .map(|k| {
      let k = k as f64;
      Point::new([k, k * k])
    })
    .collect()
}

pub fn circle(n: usize, radius: f64) -> Vec<Point> {
  (0..n)
    .map(|k| {
      let theta = std::f64::consts::TAU * k as f64 / n as f64;
      Point::new([radius * theta.cos(), radius * theta.sin()])
    })
    .collect()
}

///////////////////////////////////////////////////////////////////////////////
// Checks

// True if two points share both angle and distance around `anchor`.
pub fn has_angular_ties(points: &[Point], anchor: &Point) -> bool {
  let mut seen = BTreeSet::new();
  !points.iter().all(|pt| {
    seen.insert((
      OrderedFloat(pt.polar_angle(anchor)),
      OrderedFloat(anchor.distance(pt)),
    ))
  })
}

pub fn is_angularly_sorted(points: &[Point], anchor: &Point) -> bool {
  points
    .windows(2)
    .all(|pair| !is_larger(&pair[0], &pair[1], anchor))
}

// No clockwise turn anywhere along the closed boundary.
pub fn is_convex_ccw(hull: &[Point]) -> bool {
  let n = hull.len();
  if n < 3 {
    return true;
  }
  (0..n).all(|i| !hull[i].orientation(&hull[(i + 1) % n], &hull[(i + 2) % n]).is_cw())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fixtures_are_convex() {
    assert!(is_convex_ccw(&parabola(50)));
    assert!(is_convex_ccw(&circle(50, 3.0)));
  }

  #[test]
  fn detects_ties() {
    let anchor = Point::new([0.0, 0.0]);
    let pts = [Point::new([1.0, 1.0]), Point::new([2.0, 2.0])];
    assert!(!has_angular_ties(&pts, &anchor));
    let pts = [Point::new([1.0, 1.0]), Point::new([1.0, 1.0])];
    assert!(has_angular_ties(&pts, &anchor));
  }

  #[test]
  fn detects_clockwise_turn() {
    let cw = [
      Point::new([0.0, 0.0]),
      Point::new([0.0, 1.0]),
      Point::new([1.0, 1.0]),
    ];
    assert!(!is_convex_ccw(&cw));
  }
}
