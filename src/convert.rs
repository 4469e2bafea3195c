//! Tryte strings to trits and back.
//!
//! A tryte packs three trits `t0 + 3·t1 + 9·t2` into one of 27 symbols:
//! `9` is 0, `A`..=`M` are 1..=13 and `N`..=`Z` are -13..=-1.

use crate::utils::find_invalid_trit;
use crate::{Error, Result, Trit};
use itertools::Itertools;

pub const TRYTE_ALPHABET: &[u8; 27] = b"9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn tryte_value(c: char) -> Result<i8> {
    let index = TRYTE_ALPHABET
        .iter()
        .position(|&b| char::from(b) == c)
        .ok_or(Error::InvalidTryte(c))? as i8;
    Ok(if index > 13 { index - 27 } else { index })
}

pub fn tryte_to_trits(c: char) -> Result<[Trit; 3]> {
    let mut v = tryte_value(c)?;
    let mut trits = [0; 3];
    for trit in trits.iter_mut() {
        *trit = match v.rem_euclid(3) {
            0 => 0,
            1 => 1,
            _ => -1,
        };
        v = (v - *trit) / 3;
    }
    Ok(trits)
}

pub fn trytes_to_trits(trytes: &str) -> Result<Vec<Trit>> {
    trytes
        .chars()
        .map(tryte_to_trits)
        .flatten_ok()
        .try_collect()
}

pub fn trits_to_trytes(trits: &[Trit]) -> Result<String> {
    if trits.len() % 3 != 0 {
        return Err(Error::InvalidLength {
            length: trits.len(),
        });
    }
    if let Some((index, trit)) = find_invalid_trit(trits) {
        return Err(Error::InvalidArgument(format!(
            "trit {trit} at index {index} is outside -1..=1"
        )));
    }
    Ok(trits
        .iter()
        .tuples()
        .map(|(&t0, &t1, &t2)| {
            let v = t0 + 3 * t1 + 9 * t2;
            char::from(TRYTE_ALPHABET[v.rem_euclid(27) as usize])
        })
        .collect())
}
