use crate::{Value, BYTE_HASH_LENGTH};
use num_bigint::BigInt;
use num_traits::One;

pub type State = [u8; BYTE_HASH_LENGTH];

/// Complements every byte and adds one across the whole field.
///
/// `bytes` is addressed least significant byte first. Applied to a
/// magnitude it yields the fixed-width encoding of its negation; applied to
/// such an encoding it recovers the magnitude.
pub fn twos_complement(bytes: &mut State) {
    bytes.iter_mut().for_each(|byte| *byte = !*byte);
    for byte in bytes.iter_mut() {
        let (sum, carry) = byte.overflowing_add(1);
        *byte = sum;
        if !carry {
            break;
        }
    }
}

/// `2^383`: the state holds `[-bound, bound)`.
fn bound() -> BigInt {
    BigInt::one() << (BYTE_HASH_LENGTH * 8 - 1)
}

pub fn in_range(value: &Value) -> bool {
    let bound = bound();
    value.int() >= &-&bound && value.int() < &bound
}

/// Encodes `value` as big-endian two's complement.
///
/// Panics if `value` lies outside `[-2^383, 2^383)`.
pub fn encode(value: &Value) -> State {
    assert!(in_range(value), "{value:?} does not fit the sponge state");
    let mut bytes: State = value.magnitude_le();
    if value.is_negative() {
        twos_complement(&mut bytes);
    }
    bytes.reverse();
    bytes
}

pub fn decode(state: &State) -> Value {
    let mut bytes = *state;
    bytes.reverse();
    if state[0] & 0x80 == 0 {
        Value::from_magnitude_le(&bytes)
    } else {
        twos_complement(&mut bytes);
        -Value::from_magnitude_le(&bytes)
    }
}
