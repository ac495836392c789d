pub(crate) mod point;
mod stack;

pub use point::Point;
pub use stack::{MonotoneStack, DEFAULT_CAPACITY};
