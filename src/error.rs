use std::{error::Error, fmt};

/// A byte lane count outside of `0..=8` was passed to a checked byte interleaving function.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LaneCountError {
  count: usize,
}

impl LaneCountError {
  pub(crate) fn new(count: usize) -> Self {
    LaneCountError { count }
  }

  pub fn count(&self) -> usize {
    self.count
  }
}

impl Error for LaneCountError {}

impl fmt::Display for LaneCountError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Lane count {} outside range 0..=8", self.count)
  }
}

/// A value has more significant bits than its interleaved layout can hold.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CapacityError {
  value: u64,
  capacity: u32,
}

impl CapacityError {
  pub(crate) fn new(value: u64, capacity: u32) -> Self {
    CapacityError { value, capacity }
  }

  /// The offending value.
  pub fn value(&self) -> u64 {
    self.value
  }

  /// Number of bits available to the value.
  pub fn capacity(&self) -> u32 {
    self.capacity
  }
}

impl Error for CapacityError {}

impl fmt::Display for CapacityError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "Value {:#x} does not fit into {} bits",
      self.value, self.capacity
    )
  }
}
