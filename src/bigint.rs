//! Arbitrary-precision signed integers in sign-magnitude form.
//!
//! A [`BigInt`] is a `Vec` of little-endian [`digit::Digit`]s plus a
//! negative flag; see `bigint::magnitude` for the invariants that keep the
//! digit vector canonical (no leading zero digit, zero is never negative).
//! This file is the front door: the submodules do the actual work and this
//! struct wires their free functions up as inherent methods and trait
//! impls.

use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::str::FromStr;

pub(crate) mod arith;
pub(crate) mod convert;
pub(crate) mod digit;
pub(crate) mod format;
pub(crate) mod magnitude;
pub(crate) mod parse;
pub(crate) mod shift;

use digit::Digit;
use crate::error::{Error, Result};

/// An arbitrary-precision signed integer.
///
/// Represented as a magnitude (least-significant [`digit::Digit`] first,
/// no leading zero digit) and a sign flag that is always `false` when the
/// magnitude is zero.
#[derive(Clone, Debug, Eq)]
pub struct BigInt {
    digits: Vec<Digit>,
    negative: bool,
}

impl BigInt {
    /// The constant `0`.
    pub fn zero() -> Self {
        BigInt { digits: Vec::new(), negative: false }
    }

    /// Build a `BigInt` from already-computed digits and a sign,
    /// normalizing (N1) and clearing the sign on zero (N2).
    pub(crate) fn from_parts(mut digits: Vec<Digit>, negative: bool) -> Self {
        magnitude::normalize_vec(&mut digits);
        convert::assert_normalized(&digits);
        let negative = negative && !digits.is_empty();
        BigInt { digits, negative }
    }

    /// Construct from a signed machine integer.
    pub fn from_i64(value: i64) -> Self {
        let digits = convert::digits_from_u64(convert::magnitude_of_i64(value));
        BigInt::from_parts(digits, value < 0)
    }

    /// Construct from an unsigned machine integer.
    pub fn from_u64(value: u64) -> Self {
        BigInt::from_parts(convert::digits_from_u64(value), false)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// `true` iff the value is strictly greater than zero and its
    /// magnitude has exactly one bit set.
    pub fn is_power_of_two(&self) -> bool {
        !self.negative && magnitude::is_power_of_two(&self.digits)
    }

    /// `-self`.
    pub fn negated(&self) -> Self {
        BigInt::from_parts(self.digits.clone(), !self.negative)
    }

    /// `|self|`.
    pub fn abs(&self) -> Self {
        BigInt { digits: self.digits.clone(), negative: false }
    }

    /// Fallible conversion to `i64`; fails (rather than saturating) if the
    /// value does not fit. See [`BigInt::to_i64_saturating`] for the
    /// saturating counterpart.
    pub fn to_i64(&self) -> Result<i64> {
        convert::magnitude_to_i64(&self.digits, self.negative)
    }

    /// Fallible conversion to `u64`; fails if the value is negative or
    /// does not fit.
    pub fn to_u64(&self) -> Result<u64> {
        convert::magnitude_to_u64(&self.digits, self.negative)
    }

    /// Conversion to `i64` that saturates to `i64::MIN`/`i64::MAX` instead
    /// of failing, matching the C source's `bigint_toi`.
    pub fn to_i64_saturating(&self) -> i64 {
        self.to_i64().unwrap_or(if self.negative { i64::MIN } else { i64::MAX })
    }

    /// Conversion to `u64` that saturates to `u64::MAX` instead of
    /// failing, matching the C source's `bigint_toui`.
    pub fn to_u64_saturating(&self) -> u64 {
        self.to_u64().unwrap_or(u64::MAX)
    }

    /// Conversion to `f64`, rounding to the nearest representable value.
    /// Returns `None` if the magnitude's binary exponent overflows `f64`.
    pub fn to_f64_checked(&self) -> Option<f64> {
        convert::magnitude_to_f64(&self.digits, self.negative)
    }

    /// Conversion to `f64`, saturating to `±infinity` on exponent
    /// overflow instead of failing.
    pub fn to_f64(&self) -> f64 {
        self.to_f64_checked()
            .unwrap_or(if self.negative { f64::NEG_INFINITY } else { f64::INFINITY })
    }

    /// `self << n`, an unconditionally infallible magnitude shift (the
    /// sign is preserved, never inspected).
    pub fn shl(&self, n: u64) -> Self {
        BigInt { digits: shift::shl(&self.digits, n), negative: self.negative }
    }

    /// `self >> n`. Shifting by at least the bit length of the magnitude
    /// yields zero.
    pub fn shr(&self, n: u64) -> Self {
        BigInt::from_parts(shift::shr(&self.digits, n), self.negative)
    }

    /// `self << n` where `n` is itself a `BigInt`: rejects a negative
    /// shift amount and one that doesn't fit a `u64`.
    pub fn shl_checked(&self, n: &BigInt) -> Result<Self> {
        Ok(self.shl(n.shift_amount()?))
    }

    /// `self >> n` where `n` is itself a `BigInt`.
    pub fn shr_checked(&self, n: &BigInt) -> Result<Self> {
        Ok(self.shr(n.shift_amount()?))
    }

    fn shift_amount(&self) -> Result<u64> {
        if self.negative {
            return Err(Error::NegativeShiftAmount);
        }
        self.to_u64().map_err(|_| Error::ShiftAmountOutOfRange)
    }

    /// `(quotient, remainder)`, truncating toward zero. Fails if `d` is
    /// zero.
    pub fn div_rem(&self, d: &BigInt) -> Result<(BigInt, BigInt)> {
        arith::div_rem(self, d)
    }

    /// `self % d`, discarding the quotient.
    pub fn rem(&self, d: &BigInt) -> Result<BigInt> {
        arith::rem(self, d)
    }

    /// `self ^ exp`. Fails if `exp` is negative.
    pub fn pow(&self, exp: &BigInt) -> Result<BigInt> {
        arith::pow(self, exp)
    }

    /// The greatest common divisor of `self` and `other`, always
    /// non-negative. `gcd(a, 0) = |a|`.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        arith::gcd(self, other)
    }

    /// `floor(log_base(self))`. Fails if `base < 2` or `self <= 0`.
    pub fn log(&self, base: u64) -> Result<u64> {
        arith::log(self, base)
    }

    /// The larger of `self` and `other`, cloned.
    pub fn max(&self, other: &BigInt) -> BigInt {
        arith::max(self, other)
    }

    /// The smaller of `self` and `other`, cloned.
    pub fn min(&self, other: &BigInt) -> BigInt {
        arith::min(self, other)
    }

    /// Render in the given base (2, 8, 10, or 16): sign prefix, then a
    /// `0b`/`0o`/`0x` base marker for bases other than 10, then canonical
    /// numerals with no extraneous leading zeros. Panics if `base` is not
    /// one of those four values; use [`BigInt::to_string`] for the
    /// base-10 case via `Display`.
    pub fn to_radix_string(&self, base: u32) -> String {
        format::to_radix_string(&self.digits, self.negative, base)
    }

    /// Parse text in the given base (2, 8, 10, or 16) with no base-prefix
    /// detection (the prefix, if any, is rejected as an unknown
    /// character). Use [`str::parse`] for full base-detecting parsing.
    pub fn from_str_radix(input: &str, base: u32) -> Result<Self> {
        parse::parse_fixed_radix(input, base)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => magnitude::compare(&self.digits, &other.digits),
            (true, true) => magnitude::compare(&other.digits, &self.digits),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_radix_string(10))
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse::parse(s).map(|(value, _fraction_tail)| value)
    }
}

impl ops::Add for BigInt {
    type Output = BigInt;
    fn add(self, rhs: BigInt) -> BigInt {
        arith::add(&self, &rhs)
    }
}

impl ops::Add for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: &BigInt) -> BigInt {
        arith::add(self, rhs)
    }
}

impl ops::Sub for BigInt {
    type Output = BigInt;
    fn sub(self, rhs: BigInt) -> BigInt {
        arith::sub(&self, &rhs)
    }
}

impl ops::Sub for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: &BigInt) -> BigInt {
        arith::sub(self, rhs)
    }
}

impl ops::Mul for BigInt {
    type Output = BigInt;
    fn mul(self, rhs: BigInt) -> BigInt {
        arith::mul(&self, &rhs)
    }
}

impl ops::Mul for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> BigInt {
        arith::mul(self, rhs)
    }
}

/// Panics on division by zero, matching the built-in integer types;
/// `div_rem`/`rem` return a `Result` instead for callers that need to
/// handle that case without a panic.
impl ops::Div for BigInt {
    type Output = BigInt;
    fn div(self, rhs: BigInt) -> BigInt {
        arith::div_rem(&self, &rhs).expect("division by zero").0
    }
}

impl ops::Rem for BigInt {
    type Output = BigInt;
    fn rem(self, rhs: BigInt) -> BigInt {
        arith::rem(&self, &rhs).expect("division by zero")
    }
}

impl ops::Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        self.negated()
    }
}

impl ops::Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        self.negated()
    }
}

/// Shifts by a plain `u64` count are infallible; shifts by a `BigInt`
/// count go through [`BigInt::shl_checked`]/[`BigInt::shr_checked`]
/// instead, since they can fail (negative count, or a count too large to
/// fit a `usize`).
impl ops::Shl<u64> for BigInt {
    type Output = BigInt;
    fn shl(self, rhs: u64) -> BigInt {
        BigInt::shl(&self, rhs)
    }
}

impl ops::Shr<u64> for BigInt {
    type Output = BigInt;
    fn shr(self, rhs: u64) -> BigInt {
        BigInt::shr(&self, rhs)
    }
}
