//! The Kerl sponge.
//!
//! Unlike a rate/capacity duplex, each absorbed block overwrites the whole
//! state before the permutation runs, so only the last absorbed block
//! reaches the output.


use crate::codec::state::{self, State};
use crate::codec::ternary;
use crate::permutation::{Keccak384, Permutation};
use crate::utils::find_invalid_trit;
use crate::{Error, Result, Trit, BYTE_HASH_LENGTH, HASH_LENGTH};
use tracing::{debug, trace, warn};

/// Which squeezed blocks get their last trit cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalTrit {
    /// Block-relative index 242 of every emitted block.
    #[default]
    PerBlock,
    /// Index 242 of the output slice only; later blocks keep their top trit.
    /// Through [`Kerl::squeeze_at`] that is index `offset + 242` of the
    /// buffer, so it matches the legacy routine only when `offset` is 0.
    FirstBlockOnly,
}

/// When squeeze moves the state on to the next block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqueezeAdvance {
    /// After every emitted block, including the last one of a call. Splitting
    /// a squeeze into several calls yields the same trits.
    #[default]
    AfterEveryBlock,
    /// Only between blocks of the same call. A second call repeats the last
    /// block of the first.
    BetweenBlocks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub terminal_trit: TerminalTrit,
    pub squeeze_advance: SqueezeAdvance,
}

impl Config {
    /// Legacy behavior: only the first block is cleared and the state is
    /// left on the last emitted block. The cleared trit is relative to the
    /// squeezed window, see [`TerminalTrit::FirstBlockOnly`].
    pub fn reference() -> Self {
        Self {
            terminal_trit: TerminalTrit::FirstBlockOnly,
            squeeze_advance: SqueezeAdvance::BetweenBlocks,
        }
    }
}

fn blocks(length: usize) -> Result<usize> {
    if length == 0 || length % HASH_LENGTH != 0 {
        warn!(length, "rejected length");
        return Err(Error::InvalidLength { length });
    }
    Ok(length / HASH_LENGTH)
}

fn window(buf_len: usize, offset: usize, length: usize) -> Result<std::ops::Range<usize>> {
    match offset.checked_add(length) {
        Some(end) if end <= buf_len => Ok(offset..end),
        _ => {
            warn!(buf_len, offset, length, "rejected range");
            Err(Error::InvalidArgument(format!(
                "range {offset}+{length} exceeds buffer of {buf_len} trits"
            )))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Kerl<P: Permutation = Keccak384> {
    state: State,
    permutation: P,
    config: Config,
}

impl Default for Kerl {
    fn default() -> Self {
        Self::new()
    }
}

impl Kerl {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_permutation(Keccak384, config)
    }
}

impl<P: Permutation> Kerl<P> {
    pub fn with_permutation(permutation: P, config: Config) -> Self {
        Self {
            state: [0u8; BYTE_HASH_LENGTH],
            permutation,
            config,
        }
    }

    /// Zero-fills the state.
    pub fn reset(&mut self) {
        self.state = [0u8; BYTE_HASH_LENGTH];
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Absorbs `trits` block by block.
    ///
    /// The last trit of every block in `trits` is set to 0 before the block
    /// is read; callers that need their buffer intact should pass a copy or
    /// use [`hash`]. Length and trit values are checked up front, so
    /// a failed call changes neither the state nor the buffer.
    pub fn absorb(&mut self, trits: &mut [Trit]) -> Result<()> {
        let n_blocks = blocks(trits.len())?;
        if let Some((index, trit)) = find_invalid_trit(trits) {
            warn!(index, trit, "rejected trit");
            return Err(Error::InvalidArgument(format!(
                "trit {trit} at index {index} is outside -1..=1"
            )));
        }
        debug!(blocks = n_blocks, "absorb");

        for block in trits.chunks_exact_mut(HASH_LENGTH) {
            block[HASH_LENGTH - 1] = 0;
            let value = ternary::trits_to_value(block);
            self.state = state::encode(&value);
            self.transform();
        }
        Ok(())
    }

    /// [`Kerl::absorb`] over `buf[offset..offset + length]`.
    pub fn absorb_at(&mut self, buf: &mut [Trit], offset: usize, length: usize) -> Result<()> {
        let range = window(buf.len(), offset, length)?;
        self.absorb(&mut buf[range])
    }

    /// Fills `trits` with output, one 243-trit block at a time.
    pub fn squeeze(&mut self, trits: &mut [Trit]) -> Result<()> {
        let n_blocks = blocks(trits.len())?;
        debug!(blocks = n_blocks, "squeeze");

        for (i, block) in trits.chunks_exact_mut(HASH_LENGTH).enumerate() {
            let value = state::decode(&self.state);
            ternary::value_to_trits(&value, block);
            if i == 0 || self.config.terminal_trit == TerminalTrit::PerBlock {
                block[HASH_LENGTH - 1] = 0;
            }

            let last = i + 1 == n_blocks;
            if !last || self.config.squeeze_advance == SqueezeAdvance::AfterEveryBlock {
                self.state.iter_mut().for_each(|byte| *byte = !*byte);
                self.transform();
            }
        }
        Ok(())
    }

    /// [`Kerl::squeeze`] into `buf[offset..offset + length]`.
    pub fn squeeze_at(&mut self, buf: &mut [Trit], offset: usize, length: usize) -> Result<()> {
        let range = window(buf.len(), offset, length)?;
        self.squeeze(&mut buf[range])
    }

    fn transform(&mut self) {
        trace!(state = %hex::encode(self.state), "before permutation");
        self.permutation.permute(&mut self.state);
        trace!(state = %hex::encode(self.state), "after permutation");
    }
}

/// Absorbs a copy of `input` into a fresh default sponge and squeezes
/// `length` trits. `input` is left untouched.
pub fn hash(input: &[Trit], length: usize) -> Result<Vec<Trit>> {
    let mut kerl = Kerl::new();
    let mut input = input.to_vec();
    kerl.absorb(&mut input)?;
    let mut out = vec![0; length];
    kerl.squeeze(&mut out)?;
    Ok(out)
}
