use crate::{linear, util::div_ceil};

/// Number of masks needed by the doubling algorithm. Removing interleaved bits needs one more step
/// than interleaving, because it starts out from the wider, spread out representation.
pub const MASK_TABLE_LEN: usize = 6;

/// Duplicates each input bit `factor` times. Example: `0b101 -> 0b110011` for a factor of 2.
///
/// Input bit `k` fills output bits `k * factor .. (k + 1) * factor`. Output bits beyond bit 63
/// are dropped, and a `factor` of 0 produces 0.
pub const fn duplicate_bits(input: u64, factor: u32) -> u64 {
  if factor == 0 {
    return 0;
  }
  let limit = div_ceil(64, factor as u64);

  let mut result = 0u64;
  let mut out = 0u64;
  let mut i = 0u64;
  while i < limit {
    let bit = (input >> i) & 1;
    let mut j = 0;
    while j < factor && out < 64 {
      result |= bit << out;
      out += 1;
      j += 1;
    }
    i += 1;
  }
  result
}

/// The mask applied after doubling step `step` when interleaving `gap` zero bits: every
/// `gap + 1`-th bit of an all-ones input, each duplicated to `2^step` bits.
pub const fn mask(gap: u32, step: u32) -> u64 {
  duplicate_bits(linear::interleave_zeros(u32::MAX, gap), 1 << step)
}

/// All masks the doubling algorithm may use for a gap width, indexed by step.
pub const fn mask_table(gap: u32) -> [u64; MASK_TABLE_LEN] {
  let mut table = [0u64; MASK_TABLE_LEN];
  let mut step = 0;
  while step < MASK_TABLE_LEN {
    table[step] = mask(gap, step as u32);
    step += 1;
  }
  table
}
