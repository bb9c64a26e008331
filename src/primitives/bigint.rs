//! Fixed-width big integers (§4.2). Backed by `num_bigint`'s arbitrary
//! precision storage (the closest-fitting crate in the retrieved pack,
//! already used by `parcadei-ouros` for the same "fixed-width, tagged"
//! integer shape), wrapped here with explicit width/signedness/secret
//! tagging and Beanstalk-style overflow semantics: every arithmetic op
//! raises `Overflow` except the explicitly truncating `wrapping_*`/`cast_to`
//! family (the source language's `!+`, `!-`, `!*`, `!<T>`).
//!
//! Width is 1..=2^24-1 bits, matching "fixed-width big integers
//! (1…2^24−1 bits)" from the design. Secret-tagged values must be produced
//! by operations that don't branch on operand *value* (only on shape, i.e.
//! width/signedness, which are public) — see the `ct_*` helpers.

use num_bigint::BigInt as Big;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

pub const MIN_WIDTH: u32 = 1;
pub const MAX_WIDTH: u32 = (1 << 24) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigIntShape {
    pub width: u32,
    pub signed: bool,
    pub secret: bool,
}

impl BigIntShape {
    pub fn new(width: u32, signed: bool, secret: bool) -> Self {
        debug_assert!((MIN_WIDTH..=MAX_WIDTH).contains(&width), "width out of range");
        BigIntShape { width, signed, secret }
    }

    pub fn secret_of(a: BigIntShape, b: BigIntShape) -> bool {
        a.secret || b.secret
    }
}

/// A fixed-width integer value. `magnitude` is the arbitrary-precision
/// two's-complement-free value (sign carried separately by `num_bigint`);
/// `extra_underflow_bit` tracks the "one extra bit" unsigned values keep
/// internally so subtraction can detect underflow before truncation.
#[derive(Debug, Clone)]
pub struct BigInt {
    pub shape: BigIntShape,
    value: Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowKind {
    Overflow,
    Underflow,
    TruncatesSignificantBits,
    DivideByZero,
}

impl BigInt {
    /// The inclusive value range representable at `shape`'s width/signedness.
    fn range(shape: BigIntShape) -> (Big, Big) {
        if shape.signed {
            let half = Big::from(1) << (shape.width - 1);
            (-half.clone(), half - 1)
        } else {
            let max = (Big::from(1) << shape.width) - 1;
            (Big::from(0), max)
        }
    }

    pub fn from_i64(value: i64, width: u32, signed: bool, secret: bool) -> Result<Self, OverflowKind> {
        let shape = BigIntShape::new(width, signed, secret);
        let v = Big::from(value);
        Self::in_range(&v, shape)?;
        Ok(BigInt { shape, value: v })
    }

    fn in_range(v: &Big, shape: BigIntShape) -> Result<(), OverflowKind> {
        let (lo, hi) = Self::range(shape);
        if *v < lo {
            Err(OverflowKind::Underflow)
        } else if *v > hi {
            Err(OverflowKind::Overflow)
        } else {
            Ok(())
        }
    }

    /// A literal of width `needed_bits` requires at least that many bits to
    /// represent; fewer fails with `TruncatesSignificantBits` (§8 Boundary
    /// properties: "Literal of width W >= needed bits succeeds; W with one
    /// fewer bit fails with a truncation error").
    pub fn literal(value: i64, width: u32, signed: bool, secret: bool) -> Result<Self, OverflowKind> {
        let needed = Self::bits_needed(value, signed);
        if width < needed {
            return Err(OverflowKind::TruncatesSignificantBits);
        }
        Self::from_i64(value, width, signed, secret)
    }

    fn bits_needed(value: i64, signed: bool) -> u32 {
        if signed {
            if value >= 0 {
                64 - (value as u64).leading_zeros() + 1
            } else {
                64 - (!(value as u64)).leading_zeros() + 1
            }
        } else {
            debug_assert!(value >= 0, "unsigned literal must be non-negative");
            (64 - (value as u64).leading_zeros()).max(1)
        }
        .max(1)
    }

    pub fn width(&self) -> u32 {
        self.shape.width
    }
    pub fn is_signed(&self) -> bool {
        self.shape.signed
    }
    pub fn is_secret(&self) -> bool {
        self.shape.secret
    }

    fn checked_op(
        &self,
        other: &BigInt,
        op: impl FnOnce(&Big, &Big) -> Big,
    ) -> Result<BigInt, OverflowKind> {
        assert_eq!(self.shape.width, other.shape.width, "width mismatch");
        assert_eq!(self.shape.signed, other.shape.signed, "signedness mismatch");
        let shape = BigIntShape::new(
            self.shape.width,
            self.shape.signed,
            BigIntShape::secret_of(self.shape, other.shape),
        );
        let result = op(&self.value, &other.value);
        Self::in_range(&result, shape)?;
        Ok(BigInt { shape, value: result })
    }

    pub fn checked_add(&self, other: &BigInt) -> Result<BigInt, OverflowKind> {
        self.checked_op(other, |a, b| a + b)
    }

    pub fn checked_sub(&self, other: &BigInt) -> Result<BigInt, OverflowKind> {
        self.checked_op(other, |a, b| a - b)
    }

    pub fn checked_mul(&self, other: &BigInt) -> Result<BigInt, OverflowKind> {
        self.checked_op(other, |a, b| a * b)
    }

    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt, OverflowKind> {
        if other.value.is_zero() {
            return Err(OverflowKind::DivideByZero);
        }
        self.checked_op(other, |a, b| a / b)
    }

    /// Truncating add: the surface language's `!+`. Never errors; wraps
    /// modulo 2^width (two's complement for signed shapes).
    pub fn wrapping_add(&self, other: &BigInt) -> BigInt {
        self.wrapping_op(other, |a, b| a + b)
    }
    pub fn wrapping_sub(&self, other: &BigInt) -> BigInt {
        self.wrapping_op(other, |a, b| a - b)
    }
    pub fn wrapping_mul(&self, other: &BigInt) -> BigInt {
        self.wrapping_op(other, |a, b| a * b)
    }

    fn wrapping_op(&self, other: &BigInt, op: impl FnOnce(&Big, &Big) -> Big) -> BigInt {
        assert_eq!(self.shape.width, other.shape.width, "width mismatch");
        assert_eq!(self.shape.signed, other.shape.signed, "signedness mismatch");
        let shape = BigIntShape::new(
            self.shape.width,
            self.shape.signed,
            BigIntShape::secret_of(self.shape, other.shape),
        );
        let raw = op(&self.value, &other.value);
        BigInt {
            shape,
            value: Self::wrap_to_width(raw, shape),
        }
    }

    fn wrap_to_width(raw: Big, shape: BigIntShape) -> Big {
        let modulus = Big::from(1) << shape.width;
        let mut reduced = &raw % &modulus;
        if reduced.is_negative() {
            reduced += &modulus;
        }
        if shape.signed {
            let half = Big::from(1) << (shape.width - 1);
            if reduced >= half {
                reduced -= modulus;
            }
        }
        reduced
    }

    /// Truncating cast to a new width/signedness: the surface `!<T>`.
    pub fn cast_truncating(&self, width: u32, signed: bool) -> BigInt {
        let shape = BigIntShape::new(width, signed, self.shape.secret);
        BigInt {
            shape,
            value: Self::wrap_to_width(self.value.clone(), shape),
        }
    }

    /// Widening/same-width cast that must not lose significant bits;
    /// errors rather than silently truncating.
    pub fn checked_cast(&self, width: u32, signed: bool) -> Result<BigInt, OverflowKind> {
        let shape = BigIntShape::new(width, signed, self.shape.secret);
        Self::in_range(&self.value, shape)?;
        Ok(BigInt { shape, value: self.value.clone() })
    }

    /// Constant-time equality: always walks the full magnitude regardless
    /// of where the values diverge, rather than short-circuiting on the
    /// first differing digit (protects `secret` operands from a timing
    /// side channel). Operand *shape* (width/signedness) may still be
    /// inspected — only the value must not influence control flow.
    pub fn ct_eq(&self, other: &BigInt) -> bool {
        assert_eq!(self.shape.width, other.shape.width, "width mismatch");
        let a = self.value.to_signed_bytes_le();
        let b = other.value.to_signed_bytes_le();
        let len = a.len().max(b.len());
        let mut acc: u8 = 0;
        for i in 0..len {
            let av = a.get(i).copied().unwrap_or(if self.value.is_negative() { 0xFF } else { 0 });
            let bv = b.get(i).copied().unwrap_or(if other.value.is_negative() { 0xFF } else { 0 });
            acc |= av ^ bv;
        }
        acc == 0
    }

    pub fn to_i64_lossy(&self) -> i64 {
        let (_, digits) = self.value.to_u64_digits();
        let mag = digits.first().copied().unwrap_or(0) as i64;
        if self.value.is_negative() { -mag } else { mag }
    }

    /// Little-endian encode at the value's own width (round-trips via
    /// `decode_le`, §8 Round-trip property).
    pub fn encode_le(&self) -> Vec<u8> {
        let nbytes = (self.shape.width as usize).div_ceil(8);
        let mut out = vec![0u8; nbytes];
        let twos_complement = if self.value.is_negative() {
            Self::wrap_to_width(self.value.clone(), BigIntShape::new(self.shape.width, false, self.shape.secret))
        } else {
            self.value.clone()
        };
        let (_, bytes) = twos_complement.to_u32_digits().into_iter().fold(
            (0usize, Vec::new()),
            |(_, mut acc), digit| {
                acc.extend_from_slice(&digit.to_le_bytes());
                (0, acc)
            },
        );
        for (i, b) in bytes.into_iter().enumerate() {
            if i < out.len() {
                out[i] = b;
            }
        }
        out
    }

    pub fn decode_le(bytes: &[u8], width: u32, signed: bool, secret: bool) -> BigInt {
        let mut magnitude = Big::from(0);
        for (i, b) in bytes.iter().enumerate() {
            magnitude += Big::from(*b) << (8 * i as u32);
        }
        let shape = BigIntShape::new(width, signed, secret);
        BigInt {
            shape,
            value: Self::wrap_to_width(magnitude, shape),
        }
    }

    pub fn cmp_value(&self, other: &BigInt) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.value == other.value
    }
}
impl Eq for BigInt {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn checked_add_rejects_overflow_unsigned() {
        let a = BigInt::from_i64(200, 8, false, false).unwrap();
        let b = BigInt::from_i64(100, 8, false, false).unwrap();
        assert_eq!(a.checked_add(&b), Err(OverflowKind::Overflow));
    }

    #[test]
    fn wrapping_add_never_errors() {
        let a = BigInt::from_i64(200, 8, false, false).unwrap();
        let b = BigInt::from_i64(100, 8, false, false).unwrap();
        let result = a.wrapping_add(&b);
        assert_eq!(result.to_i64_lossy(), 44); // (200+100) mod 256
    }

    #[test]
    fn literal_needing_one_more_bit_fails() {
        // 256 needs 9 bits unsigned; 8 bits is one short.
        let err = BigInt::literal(256, 8, false, false).unwrap_err();
        assert_eq!(err, OverflowKind::TruncatesSignificantBits);
        assert!(BigInt::literal(256, 9, false, false).is_ok());
    }

    #[test]
    fn secret_taint_propagates_through_arithmetic() {
        let secret = BigInt::from_i64(1, 32, true, true).unwrap();
        let public = BigInt::from_i64(1, 32, true, false).unwrap();
        let result = secret.checked_add(&public).unwrap();
        assert!(result.is_secret());
    }

    #[test]
    fn underflow_is_distinguished_from_overflow() {
        let a = BigInt::from_i64(0, 8, false, false).unwrap();
        let b = BigInt::from_i64(1, 8, false, false).unwrap();
        assert_eq!(a.checked_sub(&b), Err(OverflowKind::Underflow));
    }

    proptest! {
        #[test]
        fn little_endian_roundtrips(v in 0i64..0xFFFF, width in 16u32..=24) {
            let n = BigInt::from_i64(v, width, false, false).unwrap();
            let bytes = n.encode_le();
            let back = BigInt::decode_le(&bytes, width, false, false);
            prop_assert_eq!(n.to_i64_lossy(), back.to_i64_lossy());
        }
    }
}
