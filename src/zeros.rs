use crate::{
  error::CapacityError,
  linear,
  mask::{mask_table, MASK_TABLE_LEN},
  util::{div_ceil, log2_floor, significant_bits},
};

/// Largest gap width the runtime entry points hand to the doubling algorithm. Wider gaps go
/// through the linear implementation.
pub const MAX_FAST_GAP: u32 = 31;

/// Precomputed state of the O(log n) doubling algorithm for one gap width.
///
/// Each step shifts a copy of the working value by `gap * 2^i`, merges it back in and masks off
/// everything that doesn't belong to the spread (or compacted) layout at that step, so the
/// distance between input bits doubles (or halves) every iteration.
///
/// The step counts are `4 - log2_floor(gap / 2)` for interleaving and one more for removing
/// interleaved bits. They overflow for gaps of 64 or more, so `new` refuses those.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Doubling {
  gap: u32,
  masks: [u64; MASK_TABLE_LEN],
  /// Index of the first (widest) interleaving step. Steps run from here down to 0.
  spread_start: u32,
  /// Number of steps needed to remove interleaved bits.
  compact_steps: u32,
}

impl Doubling {
  /// # Panics
  ///
  /// If `gap` is 64 or larger. In a constant, this is a compile-time error.
  pub const fn new(gap: u32) -> Self {
    assert!(gap < 64, "gap width must be smaller than 64");
    let log = log2_floor(gap >> 1);
    Self {
      gap,
      masks: mask_table(gap),
      spread_start: 4 - log,
      compact_steps: 5 - log,
    }
  }

  pub const fn gap(&self) -> u32 {
    self.gap
  }

  pub const fn masks(&self) -> &[u64; MASK_TABLE_LEN] {
    &self.masks
  }

  /// Interleaves `gap` zero bits after each bit of `input`.
  #[inline(always)]
  pub const fn spread(&self, input: u32) -> u64 {
    // log2 of a zero gap can't be taken, and there's nothing to do anyway.
    if self.gap == 0 {
      return input as u64;
    }
    let mut n = input as u64;
    let mut i = self.spread_start + 1;
    while i > 0 {
      i -= 1;
      n |= n << (self.gap << i);
      n &= self.masks[i as usize];
    }
    n
  }

  /// Removes the `gap` bits following each kept bit of `input`.
  #[inline(always)]
  pub const fn compact(&self, input: u64) -> u64 {
    if self.gap == 0 {
      return input;
    }
    // Drops everything in between the kept bits before they get pulled together.
    let mut n = input & self.masks[0];
    let mut i = 0;
    while i < self.compact_steps {
      n |= n >> (self.gap << i);
      n &= self.masks[i as usize + 1];
      i += 1;
    }
    n
  }
}

/// Gap width known at compile time. Its doubling masks are computed once, as a constant.
pub struct Gap<const BITS: u32>;

impl<const BITS: u32> Gap<BITS> {
  pub const DOUBLING: Doubling = Doubling::new(BITS);
}

/// Interleaves `BITS` zero bits after each input bit, using masks computed at compile time.
#[inline(always)]
pub const fn interleave_zeros_const<const BITS: u32>(input: u32) -> u64 {
  Gap::<BITS>::DOUBLING.spread(input)
}

/// Removes the `BITS` bits following each kept input bit, using masks computed at compile time.
#[inline(always)]
pub const fn remove_interleaved_zeros_const<const BITS: u32>(input: u64) -> u64 {
  Gap::<BITS>::DOUBLING.compact(input)
}

macro_rules! dispatch_gap {
  ($gap: expr, $function: ident, $input: expr, $fallback: expr, [$($bits: literal),*]) => {
    match $gap {
      $($bits => $function::<$bits>($input),)*
      _ => $fallback,
    }
  };
}

/// Interleaves `gap` zero bits after each input bit. Example: `0b11 -> 0b0101` for a gap of 1.
///
/// Only the lowest [`interleave_capacity(gap)`](interleave_capacity) bits of `input` fit into
/// the result, higher bits are silently dropped. A gap of 0 returns the input unchanged.
///
/// ```
/// assert_eq!(ileave::interleave_zeros(0b11, 1), 0b0101);
/// assert_eq!(ileave::interleave_zeros(0b11, 2), 0b1001);
/// ```
pub fn interleave_zeros(input: u32, gap: u32) -> u64 {
  dispatch_gap!(
    gap,
    interleave_zeros_const,
    input,
    linear::interleave_zeros(input, gap),
    [
      0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
      26, 27, 28, 29, 30, 31
    ]
  )
}

/// Removes the `gap` bits following each kept input bit, the inverse of [`interleave_zeros`].
/// A gap of 0 returns the input unchanged.
///
/// ```
/// assert_eq!(ileave::remove_interleaved_zeros(0b010101, 1), 0b111);
/// ```
pub fn remove_interleaved_zeros(input: u64, gap: u32) -> u64 {
  dispatch_gap!(
    gap,
    remove_interleaved_zeros_const,
    input,
    linear::remove_interleaved_zeros(input, gap),
    [
      0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
      26, 27, 28, 29, 30, 31
    ]
  )
}

/// Like [`interleave_zeros`], but returns an error instead of dropping bits that don't fit.
pub fn try_interleave_zeros(input: u32, gap: u32) -> Result<u64, CapacityError> {
  let capacity = interleave_capacity(gap);
  if significant_bits(input) > capacity {
    Err(CapacityError::new(input as u64, capacity))
  } else {
    Ok(interleave_zeros(input, gap))
  }
}

/// Number of low input bits that survive interleaving `gap` zero bits into a 64 bit result.
///
/// Gap | Bits
/// ---:|----:
///   0 |   32
///   1 |   32
///   2 |   22
///   3 |   16
///   7 |    8
///  31 |    2
///  63 |    1
///
/// Never increases with the gap width, but plateaus wherever `ceil(64 / (gap + 1))` does. It
/// can't strictly decrease either: a `u32` input caps gaps 0 and 1 at the same 32 bits.
pub const fn interleave_capacity(gap: u32) -> u32 {
  let bits = div_ceil(64, gap as u64 + 1);
  if bits > 32 {
    32
  } else {
    bits as u32
  }
}
