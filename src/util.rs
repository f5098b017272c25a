use {num_traits::PrimInt, std::mem::size_of};

/// Number of bits needed to represent `value`, i.e. the position of its highest set bit plus one.
/// Zero needs no bits at all.
pub fn significant_bits<T: PrimInt>(value: T) -> u32 {
  // Would make this a constant expression if I could, but trait methods can't be called from
  // a `const fn` yet.
  let bit_size = size_of::<T>() as u32 * 8;
  bit_size - value.leading_zeros()
}

/// Floor of the base 2 logarithm. Unlike the mathematical function, `log2_floor(0) == 0`.
pub const fn log2_floor(value: u32) -> u32 {
  if value == 0 {
    0
  } else {
    31 - value.leading_zeros()
  }
}

/// Integer division rounding towards positive infinity. `rhs` must not be zero.
pub const fn div_ceil(lhs: u64, rhs: u64) -> u64 {
  lhs / rhs + (lhs % rhs != 0) as u64
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn significant_bits_of_primitives() {
    assert_eq!(significant_bits(0u32), 0);
    assert_eq!(significant_bits(1u32), 1);
    assert_eq!(significant_bits(0x1f_ffffu32), 21);
    assert_eq!(significant_bits(0x20_0000u32), 22);
    assert_eq!(significant_bits(u64::MAX), 64);
    assert_eq!(significant_bits(0x80u8), 8);
  }

  #[test]
  fn log2_floor_is_total() {
    assert_eq!(log2_floor(0), 0);
    assert_eq!(log2_floor(1), 0);
    assert_eq!(log2_floor(2), 1);
    assert_eq!(log2_floor(3), 1);
    assert_eq!(log2_floor(31), 4);
    assert_eq!(log2_floor(32), 5);
    assert_eq!(log2_floor(u32::MAX), 31);
  }

  #[test]
  fn div_ceil_rounds_up() {
    assert_eq!(div_ceil(64, 1), 64);
    assert_eq!(div_ceil(64, 3), 22);
    assert_eq!(div_ceil(64, 64), 1);
    assert_eq!(div_ceil(64, 65), 1);
    assert_eq!(div_ceil(0, 7), 0);
  }
}
