//! Bit-by-bit implementations of every codec in this crate.
//!
//! These work for any runtime gap width and are simple enough to be obviously correct, which makes
//! them the reference the [`Doubling`](crate::Doubling) implementations are checked against. The
//! mask tables used by the doubling algorithm are built from them as well.

use crate::util::div_ceil;

/// Interleaves `gap` zero bits after each input bit. Example: `0b11 -> 0b0101` for a gap of 1.
///
/// Input bit `k` ends up at output bit `k * (gap + 1)`. Bits that would land beyond bit 63 are
/// dropped, see [`interleave_capacity`](crate::interleave_capacity).
pub const fn interleave_zeros(input: u32, gap: u32) -> u64 {
  let stride = gap as u64 + 1;
  let limit = min(32, div_ceil(64, stride));

  let mut result = 0u64;
  let mut input = input;
  let mut offset = 0u64;
  let mut i = 0;
  while i < limit {
    result |= ((input & 1) as u64) << offset;
    input >>= 1;
    offset += stride;
    i += 1;
  }
  result
}

/// Removes the `gap` bits following each kept bit. Example: `0b010101 -> 0b111` for a gap of 1.
pub const fn remove_interleaved_zeros(input: u64, gap: u32) -> u64 {
  // Incremented once so a gap of 0 never ends up as a divisor.
  let stride = gap as u64 + 1;

  let mut result = 0u64;
  let mut input = input;
  let mut out = 0u32;
  let mut i = 0u64;
  while i < 64 {
    if i % stride == 0 {
      result |= (input & 1) << out;
      out += 1;
    }
    input >>= 1;
    i += 1;
  }
  result
}

pub const fn interleave3(x: u32, y: u32, z: u32) -> u64 {
  (interleave_zeros(x, 2) << 2) | (interleave_zeros(y, 2) << 1) | interleave_zeros(z, 2)
}

pub const fn deinterleave3(code: u64) -> (u32, u32, u32) {
  (
    remove_interleaved_zeros(code >> 2, 2) as u32,
    remove_interleaved_zeros(code >> 1, 2) as u32,
    remove_interleaved_zeros(code, 2) as u32,
  )
}

/// Interleaves the lowest `count` little-endian bytes of `bytes`.
/// Expects `count <= 8`, larger counts are treated as 8.
pub const fn interleave_bytes(bytes: u64, count: usize) -> u64 {
  let count = min(count as u64, 8);
  let gap = count.saturating_sub(1) as u32;

  let mut result = 0u64;
  let mut bytes = bytes;
  let mut i = 0;
  while i < count {
    result |= interleave_zeros((bytes & 0xff) as u32, gap) << i;
    bytes >>= 8;
    i += 1;
  }
  result
}

/// Inverse of [`interleave_bytes`].
/// Expects `count <= 8`, larger counts are treated as 8.
pub const fn deinterleave_bytes(interleaved: u64, count: usize) -> u64 {
  let count = min(count as u64, 8);
  let gap = count.saturating_sub(1) as u32;

  let mut result = 0u64;
  let mut i = 0;
  while i < count {
    result |= (remove_interleaved_zeros(interleaved >> i, gap) & 0xff) << (8 * i);
    i += 1;
  }
  result
}

const fn min(lhs: u64, rhs: u64) -> u64 {
  if lhs < rhs {
    lhs
  } else {
    rhs
  }
}
