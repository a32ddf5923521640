//! Parser/formatter edge cases exercised through the public `FromStr` and
//! `Display`/`to_radix_string` surface.

use crate::{BigInt, Error, MalformedReason};

#[test]
fn leading_and_trailing_whitespace_is_not_accepted() {
    crate::cache::init();
    assert!(" 1".parse::<BigInt>().is_err());
}

#[test]
fn multiple_decimal_points_are_malformed() {
    crate::cache::init();
    assert_eq!(
        "1.2.3".parse::<BigInt>().unwrap_err(),
        Error::Malformed(MalformedReason::MultipleDecimalPoints)
    );
}

#[test]
fn multiple_exponents_are_malformed() {
    crate::cache::init();
    assert_eq!(
        "1e2e3".parse::<BigInt>().unwrap_err(),
        Error::Malformed(MalformedReason::MultipleExponents)
    );
}

#[test]
fn case_insensitive_hex_digits() {
    crate::cache::init();
    assert_eq!("0xAB".parse::<BigInt>().unwrap(), "0xab".parse::<BigInt>().unwrap());
}

#[test]
fn octal_digit_out_of_range() {
    crate::cache::init();
    assert_eq!(
        "0o8".parse::<BigInt>().unwrap_err(),
        Error::Malformed(MalformedReason::DigitOutOfRange)
    );
}

#[test]
fn from_str_radix_rejects_prefix_as_unknown_character() {
    crate::cache::init();
    // from_str_radix takes a base explicitly; a "0x" prefix is not
    // special-cased the way the base-detecting parser handles it, so
    // 'x' is just an invalid digit for base 16.
    assert_eq!(
        BigInt::from_str_radix("0xff", 16).unwrap_err(),
        Error::Malformed(MalformedReason::UnknownCharacter)
    );
    assert_eq!(BigInt::from_str_radix("ff", 16).unwrap(), BigInt::from_u64(255));
}
