//! Kerl: a Keccak-384 sponge over balanced-ternary data.
//!
//! Trits are absorbed in 243-trit blocks. Each block is read as a signed
//! base-3 integer, written into a 48-byte big-endian two's-complement state
//! and run through the permutation. Squeezing walks the same bridge in
//! reverse.

pub mod codec;
pub mod convert;
pub mod permutation;
pub mod sponge;
pub mod utils;
pub mod value;
pub mod vectors;

pub use permutation::{Keccak384, Permutation};
pub use sponge::{hash, Config, Kerl, SqueezeAdvance, TerminalTrit};
pub use value::Value;

/// Balanced-ternary digit in `-1..=1`.
pub type Trit = i8;

/// Trits per sponge block.
pub const HASH_LENGTH: usize = 243;
/// Bytes in the sponge state.
pub const BYTE_HASH_LENGTH: usize = 48;
/// Trytes per sponge block.
pub const TRYTE_HASH_LENGTH: usize = HASH_LENGTH / 3;
/// Headroom reserved for every intermediate [`Value`].
pub const CAPACITY_BITS: u64 = 1536;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("illegal length {length}, not a positive multiple of {}", HASH_LENGTH)]
    InvalidLength { length: usize },
    #[error("invalid tryte {0:?}")]
    InvalidTryte(char),
    #[error("malformed vector at line {line}: {reason}")]
    MalformedVector { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
