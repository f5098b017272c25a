//! Interleaving of up to 8 bytes packed little-endian into a `u64`. With `n` lanes, bit `k` of
//! lane `i` ends up at bit `k * n + i` of the result.

use crate::{error::LaneCountError, zeros::Doubling};

/// Largest number of byte lanes that fit into a `u64`.
pub const MAX_LANES: usize = 8;

/// Lane count known at compile time. Each lane gets `COUNT - 1` zero bits interleaved.
pub struct Lanes<const COUNT: usize>;

impl<const COUNT: usize> Lanes<COUNT> {
  pub const DOUBLING: Doubling = {
    assert!(COUNT <= MAX_LANES, "at most 8 byte lanes fit into a u64");
    Doubling::new(COUNT.saturating_sub(1) as u32)
  };
}

/// Interleaves the lowest `COUNT` bytes of `bytes`.
pub const fn interleave_bytes_const<const COUNT: usize>(bytes: u64) -> u64 {
  let doubling = Lanes::<COUNT>::DOUBLING;

  let mut result = 0u64;
  let mut bytes = bytes;
  let mut i = 0;
  while i < COUNT {
    result |= doubling.spread((bytes & 0xff) as u32) << i;
    bytes >>= 8;
    i += 1;
  }
  result
}

/// Inverse of [`interleave_bytes_const`]. Bits above the `8 * COUNT` interleaved ones are ignored.
pub const fn deinterleave_bytes_const<const COUNT: usize>(interleaved: u64) -> u64 {
  let doubling = Lanes::<COUNT>::DOUBLING;

  let mut result = 0u64;
  let mut i = 0;
  while i < COUNT {
    // Masking keeps high garbage of one lane from leaking into the next.
    result |= (doubling.compact(interleaved >> i) & 0xff) << (8 * i);
    i += 1;
  }
  result
}

macro_rules! dispatch_lanes {
  ($count: expr, $function: ident, $input: expr) => {
    match $count {
      0 => $function::<0>($input),
      1 => $function::<1>($input),
      2 => $function::<2>($input),
      3 => $function::<3>($input),
      4 => $function::<4>($input),
      5 => $function::<5>($input),
      6 => $function::<6>($input),
      7 => $function::<7>($input),
      8 => $function::<8>($input),
      _ => panic!("byte lane count must be at most 8"),
    }
  };
}

/// Interleaves the lowest `count` little-endian bytes of `bytes`. A count of 0 returns 0.
///
/// ```
/// assert_eq!(ileave::interleave_bytes(0x00ff, 2), 0x5555);
/// assert_eq!(ileave::interleave_bytes(0xff00, 2), 0xaaaa);
/// ```
///
/// # Panics
///
/// If `count` is larger than 8. Use [`try_interleave_bytes`] for unvalidated counts.
pub const fn interleave_bytes(bytes: u64, count: usize) -> u64 {
  dispatch_lanes!(count, interleave_bytes_const, bytes)
}

/// Inverse of [`interleave_bytes`]. A count of 0 returns 0.
///
/// # Panics
///
/// If `count` is larger than 8. Use [`try_deinterleave_bytes`] for unvalidated counts.
pub const fn deinterleave_bytes(interleaved: u64, count: usize) -> u64 {
  dispatch_lanes!(count, deinterleave_bytes_const, interleaved)
}

pub fn try_interleave_bytes(bytes: u64, count: usize) -> Result<u64, LaneCountError> {
  if count > MAX_LANES {
    Err(LaneCountError::new(count))
  } else {
    Ok(interleave_bytes(bytes, count))
  }
}

pub fn try_deinterleave_bytes(interleaved: u64, count: usize) -> Result<u64, LaneCountError> {
  if count > MAX_LANES {
    Err(LaneCountError::new(count))
  } else {
    Ok(deinterleave_bytes(interleaved, count))
  }
}
