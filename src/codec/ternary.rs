use crate::{Trit, Value};

/// Reads `trits` as a balanced-ternary number, least significant trit first.
pub fn trits_to_value(trits: &[Trit]) -> Value {
    trits
        .iter()
        .rev()
        .fold(Value::zero(), |acc, &trit| acc.mul_small(3) + Value::from(trit))
}

/// Writes the lowest `trits.len()` balanced-ternary digits of `value`.
///
/// Digits above the slice are dropped.
pub fn value_to_trits(value: &Value, trits: &mut [Trit]) {
    let negative = value.is_negative();
    let mut abs = value.abs();

    for trit in trits.iter_mut() {
        let (quotient, remainder) = abs.divmod_small(3);
        abs = quotient;
        *trit = match remainder {
            0 => 0,
            1 => 1,
            _ => {
                // 2 = 3 - 1: emit -1 and carry into the next digit
                abs = &abs + &Value::one();
                -1
            }
        };
    }

    if negative {
        trits.iter_mut().for_each(|trit| *trit = -*trit);
    }
}
