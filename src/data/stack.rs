use crate::Error;

/// Largest number of points a [`MonotoneStack`] holds unless told otherwise.
pub const DEFAULT_CAPACITY: usize = 32768;

/// Bounded last-in first-out sequence used by the hull sweep.
///
/// The backing storage grows on demand but never past `capacity`: a push onto
/// a full stack is rejected with [`Error::StackOverflow`] and the element is
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct MonotoneStack<T> {
  items: Vec<T>,
  capacity: usize,
}

impl<T> MonotoneStack<T> {
  pub fn new() -> MonotoneStack<T> {
    MonotoneStack::with_capacity(DEFAULT_CAPACITY)
  }

  pub fn with_capacity(capacity: usize) -> MonotoneStack<T> {
    MonotoneStack {
      items: Vec::new(),
      capacity,
    }
  }

  pub fn push(&mut self, item: T) -> Result<(), Error> {
    if self.is_full() {
      return Err(Error::StackOverflow);
    }
    self.items.push(item);
    Ok(())
  }

  pub fn pop(&mut self) -> Option<T> {
    self.items.pop()
  }

  pub fn top(&self) -> Option<&T> {
    self.items.last()
  }

  pub fn is_full(&self) -> bool {
    self.items.len() >= self.capacity
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Elements from bottom to top.
  pub fn as_slice(&self) -> &[T] {
    &self.items
  }

  /// Elements from bottom to top.
  pub fn into_vec(self) -> Vec<T> {
    self.items
  }
}

impl<T> Default for MonotoneStack<T> {
  fn default() -> Self {
    MonotoneStack::new()
  }
}
