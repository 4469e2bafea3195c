//! The numeric bridge between trits and sponge state.
//!
//! [`ternary`] maps a trit block to a signed [`Value`](crate::Value) by
//! base-3 positional weight. [`state`] maps that value to the 48-byte
//! big-endian two's-complement state and back.

pub mod state;
pub mod ternary;
