use crate::{Trit, CAPACITY_BITS};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::ops::{Add, Neg};

/// Signed wide integer shared by the ternary and state codecs.
///
/// Thin wrapper over `num_bigint::BigInt` that only offers what the codecs
/// need and asserts the fixed [`CAPACITY_BITS`] ceiling after every step.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Value(BigInt);

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut f = f.debug_struct("Value");
        let f = f.field("int", &self.0.to_str_radix(16));
        f.field("bits", &self.0.bits());
        f.finish()
    }
}

impl From<Trit> for Value {
    fn from(e: Trit) -> Self {
        Self(e.into())
    }
}

impl From<i64> for Value {
    fn from(e: i64) -> Self {
        Self(e.into())
    }
}

impl Neg for Value {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(self.0.neg())
    }
}

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Self::Output {
        Value((&self.0).neg())
    }
}

impl Add for Value {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0).checked()
    }
}

impl Add<&Value> for &Value {
    type Output = Value;
    fn add(self, rhs: &Value) -> Self::Output {
        Value(&self.0 + &rhs.0).checked()
    }
}

impl Value {
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from(1i64)
    }

    pub fn from_int(int: BigInt) -> Self {
        Self(int).checked()
    }

    /// Builds a non-negative value from a least-significant-first magnitude.
    pub fn from_magnitude_le(bytes: &[u8]) -> Self {
        Self(BigInt::from_biguint(Sign::Plus, BigUint::from_bytes_le(bytes))).checked()
    }

    pub fn int(&self) -> &BigInt {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn mul_small(&self, k: u32) -> Self {
        Self(&self.0 * k).checked()
    }

    /// Floor division by a small constant. The remainder lies in `0..k` for
    /// any dividend.
    pub fn divmod_small(&self, k: u32) -> (Self, u32) {
        assert_ne!(k, 0);
        let (quotient, remainder) = self.0.div_mod_floor(&BigInt::from(k));
        let remainder = remainder.magnitude().iter_u32_digits().next().unwrap_or(0);
        (Self(quotient), remainder)
    }

    /// Magnitude zero-extended to `N` bytes, least significant byte first.
    pub fn magnitude_le<const N: usize>(&self) -> [u8; N] {
        let bytes = self.0.magnitude().to_bytes_le();
        assert!(
            bytes.len() <= N,
            "magnitude of {} bytes does not fit {} bytes",
            bytes.len(),
            N
        );
        let mut out = [0u8; N];
        out[..bytes.len()].copy_from_slice(&bytes);
        out
    }

    fn checked(self) -> Self {
        assert!(
            self.0.bits() <= CAPACITY_BITS,
            "value of {} bits exceeds {} bit capacity",
            self.0.bits(),
            CAPACITY_BITS
        );
        self
    }
}
