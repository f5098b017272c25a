use {
  crate::{
    error::CapacityError,
    morton::{deinterleave3, interleave3, BITS_PER_COORDINATE_3D},
    util::significant_bits,
  },
  serde::{Deserialize, Serialize},
  std::{fmt, ops::*},
};

const MAX_USABLE_BITS: u32 = BITS_PER_COORDINATE_3D * 3;
const USABLE_MASK: u64 = !(u64::MAX << MAX_USABLE_BITS);
const COORDINATE_MASK: u32 = !(u32::MAX << BITS_PER_COORDINATE_3D);

const Z_MASK: u64 = 0x1249_2492_4924_9249 & USABLE_MASK;
const Y_MASK: u64 = Z_MASK << 1;
const X_MASK: u64 = Z_MASK << 2;

const XY_MASK: u64 = X_MASK | Y_MASK;
const XZ_MASK: u64 = X_MASK | Z_MASK;
const YZ_MASK: u64 = Y_MASK | Z_MASK;

/// A 3-way Morton code with 21 bits per coordinate, as produced by [`interleave3`].
///
/// Unlike the plain `u64` code, the highest bit is never set, so every coordinate has the same
/// range (`0..=2_097_151`). The bit layout allows some arithmetic to be done directly on the code,
/// which is handy for walking octrees or voxel grids stored in Z-order.
///
/// # Examples
///
/// ```
/// use ileave::MortonCode;
///
/// let code = MortonCode::new(13, 8, 1).unwrap();
/// assert_eq!(code.coords(), (13, 8, 1));
/// assert_eq!(code.y(), 8);
///
/// assert_eq!((code >> 1).coords(), (6, 4, 0));
/// assert_eq!((code << 2).coords(), (52, 32, 4));
/// assert_eq!(code.inc_z().coords(), (13, 8, 2));
/// assert!(MortonCode::new(1 << 21, 0, 0).is_err());
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct MortonCode(u64);

impl MortonCode {
  /// Largest value each coordinate may take.
  pub const COORDINATE_MAX: u32 = COORDINATE_MASK;

  pub fn new(x: u32, y: u32, z: u32) -> Result<Self, CapacityError> {
    for &coordinate in &[x, y, z] {
      if significant_bits(coordinate) > BITS_PER_COORDINATE_3D {
        return Err(CapacityError::new(coordinate as u64, BITS_PER_COORDINATE_3D));
      }
    }
    Ok(Self(interleave3(x, y, z)))
  }

  /// Wraps an existing code. Bits outside the usable range are cleared.
  pub const fn from_raw(code: u64) -> Self {
    Self(code & USABLE_MASK)
  }

  pub const fn raw(self) -> u64 {
    self.0
  }

  /// Gets coordinate `i`, where 0 is `x`, 1 is `y` and 2 is `z`.
  pub fn decode(self, i: usize) -> u32 {
    assert!(i < 3, "coordinate index out of range");
    let (x, y, z) = self.coords();
    [x, y, z][i]
  }

  pub const fn coords(self) -> (u32, u32, u32) {
    let (x, y, z) = deinterleave3(self.0);
    (x & COORDINATE_MASK, y & COORDINATE_MASK, z & COORDINATE_MASK)
  }

  pub const fn x(self) -> u32 {
    self.coords().0
  }
  pub const fn y(self) -> u32 {
    self.coords().1
  }
  pub const fn z(self) -> u32 {
    self.coords().2
  }

  // Incrementing and decrementing wrap around within the 21 bits of the coordinate.

  pub fn inc_x(self) -> Self {
    let x_sum = (self.0 | YZ_MASK).wrapping_add(1 << 2);
    Self((x_sum & X_MASK) | (self.0 & YZ_MASK))
  }
  pub fn inc_y(self) -> Self {
    let y_sum = (self.0 | XZ_MASK).wrapping_add(1 << 1);
    Self((y_sum & Y_MASK) | (self.0 & XZ_MASK))
  }
  pub fn inc_z(self) -> Self {
    let z_sum = (self.0 | XY_MASK).wrapping_add(1);
    Self((z_sum & Z_MASK) | (self.0 & XY_MASK))
  }

  pub fn dec_x(self) -> Self {
    let x_diff = (self.0 & X_MASK).wrapping_sub(1 << 2);
    Self((x_diff & X_MASK) | (self.0 & YZ_MASK))
  }
  pub fn dec_y(self) -> Self {
    let y_diff = (self.0 & Y_MASK).wrapping_sub(1 << 1);
    Self((y_diff & Y_MASK) | (self.0 & XZ_MASK))
  }
  pub fn dec_z(self) -> Self {
    let z_diff = (self.0 & Z_MASK).wrapping_sub(1);
    Self((z_diff & Z_MASK) | (self.0 & XY_MASK))
  }
}

impl From<u64> for MortonCode {
  fn from(code: u64) -> Self {
    Self::from_raw(code)
  }
}

impl From<MortonCode> for u64 {
  fn from(code: MortonCode) -> Self {
    code.0
  }
}

impl From<MortonCode> for (u32, u32, u32) {
  fn from(code: MortonCode) -> Self {
    code.coords()
  }
}

/// Component-wise addition, wrapping around within each coordinate.
impl Add<Self> for MortonCode {
  type Output = Self;
  fn add(self, rhs: Self) -> Self::Output {
    let x_sum = (self.0 | YZ_MASK).wrapping_add(rhs.0 & X_MASK);
    let y_sum = (self.0 | XZ_MASK).wrapping_add(rhs.0 & Y_MASK);
    let z_sum = (self.0 | XY_MASK).wrapping_add(rhs.0 & Z_MASK);
    Self((x_sum & X_MASK) | (y_sum & Y_MASK) | (z_sum & Z_MASK))
  }
}

/// Component-wise subtraction, wrapping around within each coordinate.
impl Sub<Self> for MortonCode {
  type Output = Self;
  fn sub(self, rhs: Self) -> Self::Output {
    let x_diff = (self.0 & X_MASK).wrapping_sub(rhs.0 & X_MASK);
    let y_diff = (self.0 & Y_MASK).wrapping_sub(rhs.0 & Y_MASK);
    let z_diff = (self.0 & Z_MASK).wrapping_sub(rhs.0 & Z_MASK);
    Self((x_diff & X_MASK) | (y_diff & Y_MASK) | (z_diff & Z_MASK))
  }
}

impl BitAnd<Self> for MortonCode {
  type Output = Self;
  fn bitand(self, rhs: Self) -> Self::Output {
    Self(self.0 & rhs.0)
  }
}

impl BitOr<Self> for MortonCode {
  type Output = Self;
  fn bitor(self, rhs: Self) -> Self::Output {
    Self(self.0 | rhs.0)
  }
}

impl BitXor<Self> for MortonCode {
  type Output = Self;
  fn bitxor(self, rhs: Self) -> Self::Output {
    Self(self.0 ^ rhs.0)
  }
}

/// Shifts every coordinate left by `rhs` bits, dropping bits that leave the coordinate range.
impl Shl<u32> for MortonCode {
  type Output = Self;
  fn shl(self, rhs: u32) -> Self {
    assert!(rhs < BITS_PER_COORDINATE_3D);
    Self((self.0 << (rhs * 3)) & USABLE_MASK)
  }
}

/// Shifts every coordinate right by `rhs` bits.
impl Shr<u32> for MortonCode {
  type Output = Self;
  fn shr(self, rhs: u32) -> Self {
    assert!(rhs < BITS_PER_COORDINATE_3D);
    Self(self.0 >> (rhs * 3))
  }
}

impl fmt::Debug for MortonCode {
  fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(fmt, "MortonCode {:?}", self.coords())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn masks() {
    assert_eq!(MAX_USABLE_BITS, 63);
    assert_eq!(X_MASK | Y_MASK | Z_MASK, USABLE_MASK);
    assert_eq!(X_MASK & Y_MASK, 0);
    assert_eq!(X_MASK.count_ones(), 21);
    assert_eq!(Z_MASK.count_ones(), 21);
    assert_eq!(MortonCode::COORDINATE_MAX, 2_097_151);
  }

  #[test]
  fn decode_and_raw() {
    let code = MortonCode::new(6, 16, 15).unwrap();
    assert_eq!(code.coords(), (6, 16, 15));
    assert_eq!((code.decode(0), code.decode(1), code.decode(2)), (6, 16, 15));

    //                x =  0   0   1   1   0
    //                y =   1   0   0   0   0
    //                z =    0   1   1   1   1
    assert_eq!(code.raw(), 0b010_001_101_101_001);

    let code = MortonCode::new(0, 10, 2u32.pow(21) - 1).unwrap();
    assert_eq!(code.coords(), (0, 10, 2u32.pow(21) - 1));
    assert_eq!(
      code.raw(),
      0b001_001_001_001_001_001_001_001_001_001_001_001_001_001_001_001_001_011_001_011_001
    );
  }

  #[test]
  fn out_of_range_is_an_error() {
    let error = MortonCode::new(0, 0, 2u32.pow(21)).unwrap_err();
    assert_eq!(error.value(), 1 << 21);
    assert_eq!(error.capacity(), 21);
    assert!(MortonCode::new(u32::MAX, 0, 0).is_err());
    assert!(MortonCode::new(0, 1 << 25, 0).is_err());
  }

  #[test]
  fn from_raw_clears_the_highest_bit() {
    assert_eq!(MortonCode::from_raw(u64::MAX).raw(), USABLE_MASK);
    assert_eq!(
      MortonCode::from_raw(u64::MAX).coords(),
      (2_097_151, 2_097_151, 2_097_151)
    );
  }

  #[test]
  fn increment_and_decrement() {
    let code = MortonCode::new(3, 7, 0).unwrap();
    assert_eq!(code.inc_x().coords(), (4, 7, 0));
    assert_eq!(code.inc_y().coords(), (3, 8, 0));
    assert_eq!(code.inc_z().coords(), (3, 7, 1));
    assert_eq!(code.dec_x().coords(), (2, 7, 0));
    assert_eq!(code.dec_y().coords(), (3, 6, 0));
    // Wraps around within the coordinate, leaving the others alone.
    assert_eq!(code.dec_z().coords(), (3, 7, 2_097_151));
    let max = MortonCode::from_raw(u64::MAX);
    assert_eq!(max.inc_x().coords(), (0, 2_097_151, 2_097_151));
  }

  #[test]
  fn arithmetic() {
    let a = MortonCode::new(10, 20, 30).unwrap();
    let b = MortonCode::new(1, 2, 3).unwrap();
    assert_eq!((a + b).coords(), (11, 22, 33));
    assert_eq!((a - b).coords(), (9, 18, 27));
    assert_eq!((b - a).coords(), (2_097_151 - 8, 2_097_151 - 17, 2_097_151 - 26));
    assert_eq!(a & MortonCode::from_raw(0b111), MortonCode::from_raw(0b000));
    // Lowest triple of (1, 2, 3): x bit set, y bit clear, z bit set.
    assert_eq!(b & MortonCode::from_raw(0b111), MortonCode::from_raw(0b101));
    assert_eq!((b & MortonCode::from_raw(0b111)).coords(), (1, 0, 1));
    assert_eq!(a | b, MortonCode::from_raw(a.raw() | b.raw()));
    assert_eq!(a ^ a, MortonCode::default());
  }

  #[test]
  fn accessors_in_constants() {
    const CODE: MortonCode = MortonCode::from_raw(0b010_001_101_101_001);
    const COORDS: [u32; 3] = [CODE.x(), CODE.y(), CODE.z()];
    assert_eq!(COORDS, [6, 16, 15]);
  }

  #[test]
  fn bitwise_shifting() {
    let zero = MortonCode::default();
    assert_eq!(zero >> 3, zero << 0);

    let pos123 = MortonCode::new(1, 2, 3).unwrap();
    assert_eq!(pos123 << 2, MortonCode::new(4, 8, 12).unwrap());
    assert_eq!(MortonCode::new(4, 8, 12).unwrap() >> 2, pos123);
    assert_eq!((pos123 << 20).coords(), (1 << 20, 0, 1 << 20));
  }

  #[test]
  fn ordering_follows_z_order() {
    let mut codes = vec![
      MortonCode::new(1, 1, 1).unwrap(),
      MortonCode::new(0, 0, 1).unwrap(),
      MortonCode::new(1, 0, 0).unwrap(),
      MortonCode::new(0, 0, 0).unwrap(),
    ];
    codes.sort();
    let coords: Vec<_> = codes.into_iter().map(MortonCode::coords).collect();
    assert_eq!(coords, vec![(0, 0, 0), (0, 0, 1), (1, 0, 0), (1, 1, 1)]);
  }

  #[test]
  fn debug_and_serde() {
    let code = MortonCode::new(1, 2, 3).unwrap();
    assert_eq!(format!("{:?}", code), "MortonCode (1, 2, 3)");
    assert_eq!(ron::to_string(&code).unwrap(), "29");
    assert_eq!(ron::from_str::<MortonCode>("29").unwrap(), code);
    // Deserializing goes through `from_raw`.
    let max: MortonCode = ron::from_str("18446744073709551615").unwrap();
    assert_eq!(max.raw(), USABLE_MASK);
  }
}
