use crate::codec::state::State;
use digest::Digest;

/// Fixed transform applied to the sponge state after every absorbed block
/// and between squeezed blocks.
pub trait Permutation {
    fn permute(&self, state: &mut State);
}

/// Pre-FIPS Keccak-384 with the `0x01` domain suffix (rate 832, capacity
/// 768), hashing the 48-byte state into a fresh 48-byte state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak384;

impl Permutation for Keccak384 {
    fn permute(&self, state: &mut State) {
        let digest = sha3::Keccak384::digest(&state[..]);
        state.copy_from_slice(digest.as_slice());
    }
}
