//! Convex hulls of point sets.
pub mod graham_scan;
