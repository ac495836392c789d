use num_traits::Float;

use super::{is_larger, AngularSort};
use crate::data::Point;

/// $O(n \log n)$ heap sort.
///
/// Builds a max-heap under [`is_larger`] and then repeatedly swaps the root
/// behind the shrinking heap, which leaves the slice in ascending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapSort;

impl AngularSort for HeapSort {
  fn sort<T: Float>(&self, points: &mut [Point<T>], anchor: &Point<T>) {
    let len = points.len();
    for root in (0..len / 2).rev() {
      sift_down(points, root, anchor);
    }
    for end in (1..len).rev() {
      points.swap(0, end);
      sift_down(&mut points[..end], 0, anchor);
    }
  }
}

// Restore the heap property below `root`, assuming both of its subtrees are
// already heaps.
fn sift_down<T: Float>(heap: &mut [Point<T>], mut root: usize, anchor: &Point<T>) {
  loop {
    let mut largest = root;
    let left = 2 * root + 1;
    if left < heap.len() && is_larger(&heap[left], &heap[largest], anchor) {
      largest = left;
    }
    let right = left + 1;
    if right < heap.len() && is_larger(&heap[right], &heap[largest], anchor) {
      largest = right;
    }
    if largest == root {
      return;
    }
    heap.swap(root, largest);
    root = largest;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algorithms::sorting::tests::*;

  fn is_max_heap(heap: &[Point], anchor: &Point) -> bool {
    (1..heap.len()).all(|child| !is_larger(&heap[child], &heap[(child - 1) / 2], anchor))
  }

  #[test]
  fn sorts_into_increasing_order() {
    let mut points = POINTS;
    HeapSort.sort(&mut points, &ANCHOR);
    assert_strictly_sorted(&points, &ANCHOR);
  }

  #[test]
  fn sift_down_builds_heap() {
    let mut points = POINTS;
    for root in (0..points.len() / 2).rev() {
      sift_down(&mut points, root, &ANCHOR);
    }
    assert!(is_max_heap(&points, &ANCHOR));
    // (1,6) is the only point left of the anchor, so it has the largest angle.
    assert_eq!(points[0], Point::new([1.0, 6.0]));
  }

  #[test]
  fn sift_down_leaf_is_noop() {
    let mut points = POINTS;
    let last = points.len() - 1;
    sift_down(&mut points, last, &ANCHOR);
    assert_eq!(points, POINTS);
  }

  #[test]
  fn empty_and_single() {
    let mut empty: [Point; 0] = [];
    HeapSort.sort(&mut empty, &ANCHOR);
    let mut single = [POINTS[0]];
    HeapSort.sort(&mut single, &ANCHOR);
    assert_eq!(single, [POINTS[0]]);
  }

  #[test]
  fn reversed_input() {
    let mut points = POINTS;
    HeapSort.sort(&mut points, &ANCHOR);
    points.reverse();
    HeapSort.sort(&mut points, &ANCHOR);
    assert_strictly_sorted(&points, &ANCHOR);
  }
}
