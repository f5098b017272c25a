//! Bit interleaving and de-interleaving: spreading the bits of an integer apart with runs of zero
//! bits in between, and packing several integers (coordinates or byte lanes) into a single `u64`
//! so that locality in the individual values carries over to the combined one.
//!
//! Every function here is a pure computation on integers. Most come in two flavors: a linear
//! bit-by-bit version that accepts any parameter at runtime (see [`linear`]), and a faster
//! O(log n) doubling version whose masks are computed at compile time. The runtime entry points
//! such as [`interleave_zeros`] and [`interleave_bytes`] dispatch to the latter.

pub use {bytes::*, error::*, mask::*, morton::*, morton_code::*, zeros::*};

pub mod linear;

mod bytes;
mod error;
mod mask;
mod morton;
mod morton_code;
mod util;
mod zeros;
