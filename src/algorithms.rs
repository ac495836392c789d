pub mod convex_hull;
pub mod sorting;

#[doc(inline)]
pub use convex_hull::graham_scan::{convex_hull, fast_scan, slow_scan, GrahamScan};

#[doc(inline)]
pub use sorting::{AngularSort, HeapSort, SelectionSort, SortStrategy};
