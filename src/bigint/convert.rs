//! Construction from, and conversion back to, machine integers and `f64`.

use super::digit::{Digit, DIGIT_BITS};
use super::magnitude::{leading_zeros, normalize_vec};
use crate::error::{Error, Result};

/// Split a `u64` into little-endian 32-bit digits, normalized.
pub(crate) fn digits_from_u64(mut value: u64) -> Vec<Digit> {
    let mut out = Vec::with_capacity(2);
    while value != 0 {
        out.push(value as Digit);
        value >>= DIGIT_BITS;
    }
    out
}

/// The magnitude of an `i64`, computed without negating the value
/// directly so `i64::MIN` (whose absolute value doesn't fit in an `i64`)
/// is handled correctly.
pub(crate) fn magnitude_of_i64(value: i64) -> u64 {
    // `i64::MIN.unsigned_abs()` does the two's-complement dance for us
    // without an intermediate negation that would overflow.
    value.unsigned_abs()
}

/// Reassemble up to two digits (little-endian) into a `u64`.
pub(crate) fn digits_to_u64(digits: &[Digit]) -> Option<u64> {
    if digits.len() > 2 {
        return None;
    }
    let mut value: u64 = 0;
    for (i, &digit) in digits.iter().enumerate() {
        value |= u64::from(digit) << (u32::try_from(i).unwrap() * DIGIT_BITS);
    }
    Some(value)
}

/// Convert a magnitude + sign to an `f64`.
///
/// If the magnitude fits in a `u64` this delegates to the native `as f64`
/// cast. Otherwise the exponent is computed from the digit count and
/// leading-zero count of the top digit, the top 64 significant bits are
/// extracted as the mantissa by shifting across the top two (or more)
/// digits, and the result is `mantissa as f64 * 2^exponent`.
///
/// Returns `None` if the magnitude's binary exponent would overflow
/// `f64`'s exponent range; the caller maps that to `Error::OutOfRange`
/// and/or a saturating `±infinity`.
pub(crate) fn magnitude_to_f64(digits: &[Digit], negative: bool) -> Option<f64> {
    if digits.is_empty() {
        return Some(0.0);
    }

    if let Some(small) = digits_to_u64(digits) {
        let v = small as f64;
        return Some(if negative { -v } else { v });
    }

    let len = digits.len();
    let top_zeros = leading_zeros(digits);
    // Bit position (from the least significant bit) of the magnitude's
    // most significant set bit.
    let msb_index = u64::from(DIGIT_BITS) * len as u64 - u64::from(top_zeros) - 1;

    if msb_index > 1023 {
        // Would overflow f64::MAX_EXP - 1.
        return None;
    }

    // Pull the top 64 bits out of the top two (or three, if they straddle
    // awkwardly) digits by shifting the whole magnitude down so the
    // mantissa lands in the low 64 bits, then cast.
    let shift = msb_index.saturating_sub(63);
    let mantissa = shift_right_to_u64(digits, shift);
    let exponent = msb_index as i32 - 63;

    let v = (mantissa as f64) * 2f64.powi(exponent);
    Some(if negative { -v } else { v })
}

/// Shift a magnitude right by `shift` bits and return the low 64 bits of
/// the result, without allocating a full shifted copy.
fn shift_right_to_u64(digits: &[Digit], shift: u64) -> u64 {
    let whole = (shift / u64::from(DIGIT_BITS)) as usize;
    let bits = (shift % u64::from(DIGIT_BITS)) as u32;

    let get = |i: usize| -> u64 {
        digits
            .get(whole + i)
            .copied()
            .map(u64::from)
            .unwrap_or(0)
    };

    if bits == 0 {
        get(0) | (get(1) << DIGIT_BITS)
    } else {
        let lo = get(0) >> bits;
        let mid = get(1) << (u64::from(DIGIT_BITS) - bits);
        let hi = get(2).checked_shl(2 * DIGIT_BITS - bits as u32).unwrap_or(0);
        lo | mid | hi
    }
}

/// Fallible conversion of a magnitude + sign to a `u64`. Fails (rather
/// than saturating) when the value is negative or too large; callers
/// that want the saturating sentinel instead use
/// [`crate::BigInt::to_u64_saturating`].
pub(crate) fn magnitude_to_u64(digits: &[Digit], negative: bool) -> Result<u64> {
    if negative && !digits.is_empty() {
        return Err(Error::OutOfRange);
    }
    digits_to_u64(digits).ok_or(Error::OutOfRange)
}

pub(crate) fn magnitude_to_i64(digits: &[Digit], negative: bool) -> Result<i64> {
    let unsigned = digits_to_u64(digits).ok_or(Error::OutOfRange)?;
    if negative {
        // i64::MIN's magnitude is exactly 2^63, one more than i64::MAX.
        if unsigned <= i64::MAX as u64 + 1 {
            Ok((unsigned as i64).wrapping_neg())
        } else {
            Err(Error::OutOfRange)
        }
    } else if unsigned <= i64::MAX as u64 {
        Ok(unsigned as i64)
    } else {
        Err(Error::OutOfRange)
    }
}

/// Debug-only postcondition: `digits` carries no leading zero digit (N1).
/// Called after every path that produces a [`crate::BigInt`]'s digit
/// vector to catch a normalization bug at its source instead of at
/// whatever later operation happens to notice the corrupt length.
pub(crate) fn assert_normalized(digits: &[Digit]) {
    let mut copy = digits.to_vec();
    normalize_vec(&mut copy);
    debug_assert_eq!(copy.len(), digits.len(), "digits are not normalized");
}
