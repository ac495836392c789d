use num_traits::Float;

use super::{is_larger, AngularSort};
use crate::data::Point;

/// $O(n^2)$ selection sort.
///
/// Repeatedly moves the smallest point of the unsorted suffix to its front.
/// Performs at most `n - 1` swaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSort;

impl AngularSort for SelectionSort {
  fn sort<T: Float>(&self, points: &mut [Point<T>], anchor: &Point<T>) {
    for i in 0..points.len().saturating_sub(1) {
      let mut smallest = i;
      for j in i + 1..points.len() {
        if is_larger(&points[smallest], &points[j], anchor) {
          smallest = j;
        }
      }
      if smallest != i {
        points.swap(i, smallest);
      }
    }
  }
}
