use crate::Trit;
use itertools::Itertools;

pub fn is_trit(e: Trit) -> bool {
    (-1..=1).contains(&e)
}

/// Position and value of the first element outside `-1..=1`.
pub fn find_invalid_trit(trits: &[Trit]) -> Option<(usize, Trit)> {
    trits.iter().copied().find_position(|&e| !is_trit(e))
}
