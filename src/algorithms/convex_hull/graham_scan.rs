use num_traits::Float;

use crate::algorithms::sorting::{AngularSort, HeapSort, SelectionSort};
use crate::data::{MonotoneStack, Point, DEFAULT_CAPACITY};
use crate::Error;

// https://en.wikipedia.org/wiki/Graham_scan

/// Graham scan with a configurable angular sort and stack capacity.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::algorithms::{GrahamScan, SelectionSort};
/// # use graham_hull::data::Point;
/// # use graham_hull::Error;
/// let mut points = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([0.0, 1.0]),
///   Point::new([1.0, 1.0]),
/// ];
/// let scanner = GrahamScan::new(SelectionSort).with_capacity(3);
/// assert_eq!(scanner.scan(&mut points.clone()).err(), Some(Error::StackOverflow));
///
/// let scanner = scanner.with_capacity(4);
/// assert_eq!(scanner.scan(&mut points).unwrap().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrahamScan<S = HeapSort> {
  sorter: S,
  capacity: usize,
}

impl<S: AngularSort> GrahamScan<S> {
  pub fn new(sorter: S) -> GrahamScan<S> {
    GrahamScan {
      sorter,
      capacity: DEFAULT_CAPACITY,
    }
  }

  /// Limit the number of hull candidates the sweep may hold at once.
  #[must_use]
  pub fn with_capacity(self, capacity: usize) -> GrahamScan<S> {
    GrahamScan { capacity, ..self }
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Hull of `points` in counter-clockwise order, starting at the anchor.
  ///
  /// `points` is left sorted by angle around the anchor.
  ///
  /// Fewer than two points are returned as they are. From two points on, the
  /// sweep never keeps a point that is co-linear with the closing edge back to
  /// the anchor, so two points, or any set of co-linear points, collapse to the
  /// anchor alone.
  ///
  /// # Errors
  /// Returns [`Error::StackOverflow`] when the sweep needs more than
  /// [`capacity`](GrahamScan::capacity) points on the stack.
  pub fn scan<T: Float>(&self, points: &mut [Point<T>]) -> Result<Vec<Point<T>>, Error> {
    let anchor = match anchor_point(points) {
      Some(idx) => points[idx],
      None => return Ok(Vec::new()),
    };
    if points.len() < 2 {
      return Ok(vec![anchor]);
    }

    self.sorter.sort(points, &anchor);

    let mut stack = MonotoneStack::with_capacity(self.capacity);
    stack.push(points[0])?;
    stack.push(points[1])?;

    for &next in &points[2..] {
      let Some(current) = stack.pop() else {
        break;
      };
      let current = pop_non_left_turns(&mut stack, current, &next);
      stack.push(current)?;
      if stack.is_full() {
        return Err(Error::StackOverflow);
      }
      stack.push(next)?;
    }

    // The last point survives only if the closing edge to the anchor turns left.
    if let Some(last) = stack.pop() {
      let keep = stack
        .top()
        .is_some_and(|top| top.orientation(&last, &anchor).is_ccw());
      if keep {
        stack.push(last)?;
      }
    }

    Ok(stack.into_vec())
  }
}

impl Default for GrahamScan<HeapSort> {
  fn default() -> Self {
    GrahamScan::new(HeapSort)
  }
}

// Pop the stack until `top -> current -> next` is a left turn, returning the
// point that ends up in front of `next`.
fn pop_non_left_turns<T: Float>(
  stack: &mut MonotoneStack<Point<T>>,
  mut current: Point<T>,
  next: &Point<T>,
) -> Point<T> {
  while let Some(top) = stack.top() {
    if top.orientation(&current, next).is_ccw() {
      break;
    }
    let Some(top) = stack.pop() else {
      break;
    };
    current = top;
  }
  current
}

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Uses [`HeapSort`] and the default stack
/// capacity.
///
/// # Errors
/// Will return [`Error::StackOverflow`] iff more than
/// [`DEFAULT_CAPACITY`] hull candidates are alive during the sweep.
///
/// # Properties
/// * All vertices in the hull are from the input set.
/// * The first vertex is the anchor: lowest y, then lowest x.
/// * No three consecutive vertices turn clockwise, including across the
///   closing edge.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull;
/// # use graham_hull::data::Point;
/// let empty_set: Vec<Point> = vec![];
/// assert_eq!(convex_hull(empty_set), Ok(vec![]));
/// ```
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull;
/// # use graham_hull::data::Point;
/// let colinear = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([2.0, 2.0]),
/// ];
/// assert_eq!(convex_hull(colinear), Ok(vec![Point::new([0.0, 0.0])]));
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T: Float>(mut pts: Vec<Point<T>>) -> Result<Vec<Point<T>>, Error> {
  fast_scan(&mut pts)
}

/// Graham scan using the $O(n^2)$ [`SelectionSort`].
pub fn slow_scan<T: Float>(points: &mut [Point<T>]) -> Result<Vec<Point<T>>, Error> {
  GrahamScan::new(SelectionSort).scan(points)
}

/// Graham scan using the $O(n \log n)$ [`HeapSort`].
pub fn fast_scan<T: Float>(points: &mut [Point<T>]) -> Result<Vec<Point<T>>, Error> {
  GrahamScan::new(HeapSort).scan(points)
}

/// Index of the point with the smallest y coordinate, breaking ties by the
/// smallest x coordinate. The first of several identical points wins.
// O(n)
pub fn anchor_point<T: Float>(pts: &[Point<T>]) -> Option<usize> {
  let mut iter = pts.iter().enumerate();
  let (mut anchor_idx, mut anchor) = iter.next()?;
  for (idx, pt) in iter {
    if pt.y_coord() < anchor.y_coord()
      || (pt.y_coord() == anchor.y_coord() && pt.x_coord() < anchor.x_coord())
    {
      anchor_idx = idx;
      anchor = pt;
    }
  }
  Some(anchor_idx)
}
