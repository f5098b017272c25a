//! Morton codes, also known as [Z-Order Curve] indices: the bits of two or three coordinates
//! interleaved into a single `u64`, so that coordinates close to each other in space tend to be
//! close to each other numerically as well.
//!
//! [Z-Order Curve]: https://en.wikipedia.org/wiki/Z-order_curve
//!
//! Codes | Bits per coordinate | Max. value
//! :----:|--------------------:|----------:
//!   2   |                  32 | 4294967295
//!   3   |                  21 |    2097151
//!
//! With 3 coordinates, the last coordinate gets a 22nd bit in the otherwise unused highest bit of
//! the code. Only 21 bits round-trip for all three.

use crate::zeros::{interleave_zeros_const, remove_interleaved_zeros_const};

/// Number of bits each coordinate of a 3-way Morton code keeps.
pub const BITS_PER_COORDINATE_3D: u32 = 21;

/// Interleaves 2 integers, where `hi` makes up the upper and `lo` the lower bit of each bit pair.
///
/// ```
/// assert_eq!(ileave::interleave2(0b111, 0b000), 0b101010);
/// ```
#[inline]
pub const fn interleave2(hi: u32, lo: u32) -> u64 {
  (interleave_zeros_const::<1>(hi) << 1) | interleave_zeros_const::<1>(lo)
}

/// Splits a 2-way Morton code back into `(hi, lo)`.
#[inline]
pub const fn deinterleave2(code: u64) -> (u32, u32) {
  (
    remove_interleaved_zeros_const::<1>(code >> 1) as u32,
    remove_interleaved_zeros_const::<1>(code) as u32,
  )
}

/// Interleaves 3 integers, where `x` makes up the uppermost and `z` the lowermost bit of each bit
/// triple. Bits above the 21st (22nd for `z`) don't fit and are dropped.
///
/// ```
/// let code = ileave::interleave3(1, 2, 3);
/// assert_eq!(code, 0b011_101);
/// assert_eq!(ileave::deinterleave3(code), (1, 2, 3));
/// ```
#[inline]
pub const fn interleave3(x: u32, y: u32, z: u32) -> u64 {
  (interleave_zeros_const::<2>(x) << 2)
    | (interleave_zeros_const::<2>(y) << 1)
    | interleave_zeros_const::<2>(z)
}

/// Splits a 3-way Morton code back into `(x, y, z)`. Visualization: `abcdefghi -> (adg, beh, cfi)`
#[inline]
pub const fn deinterleave3(code: u64) -> (u32, u32, u32) {
  (
    remove_interleaved_zeros_const::<2>(code >> 2) as u32,
    remove_interleaved_zeros_const::<2>(code >> 1) as u32,
    remove_interleaved_zeros_const::<2>(code) as u32,
  )
}
