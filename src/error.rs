use std::fmt;

/// Why a parse attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// A character that is not a digit, sign, base prefix, `.` or `e`/`E`
    /// appeared where a digit was expected.
    UnknownCharacter,
    /// A character was a valid digit in some base, but its value is `>=`
    /// the base actually in effect (e.g. `'8'` in an octal literal).
    DigitOutOfRange,
    /// More than one `.` appeared in the mantissa.
    MultipleDecimalPoints,
    /// More than one `e`/`E` appeared.
    MultipleExponents,
    /// `e`/`E` was the last character, with no exponent digits following.
    EmptyExponent,
    /// The input was empty or contained only a sign.
    EmptyInput,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCharacter => write!(f, "unknown character"),
            Self::DigitOutOfRange => write!(f, "digit out of range for base"),
            Self::MultipleDecimalPoints => write!(f, "multiple decimal points"),
            Self::MultipleExponents => write!(f, "multiple exponents"),
            Self::EmptyExponent => write!(f, "exponent marker with no digits"),
            Self::EmptyInput => write!(f, "empty input"),
        }
    }
}

/// Everything that can go wrong calling into this crate.
///
/// Allocation failure is not a variant here: like the rest of the standard
/// library, this crate lets the global allocator abort the process on OOM
/// rather than threading a fallible-allocation error through every
/// operation. Every other failure kind this crate can report has a variant
/// below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Division or modulo by zero.
    DivisionByZero,
    /// `pow` was called with a negative exponent.
    NegativeExponent,
    /// A shift amount given as a [`crate::BigInt`] was negative.
    NegativeShiftAmount,
    /// A shift amount given as a [`crate::BigInt`] does not fit in a
    /// `usize`.
    ShiftAmountOutOfRange,
    /// `log` was called with a base less than 2.
    LogBaseTooSmall,
    /// `log` was called with a non-positive argument.
    LogArgumentNotPositive,
    /// A conversion to a machine integer does not fit in the target type.
    OutOfRange,
    /// The destination buffer passed to a formatter is too small.
    BufferTooSmall,
    /// The input text could not be parsed as an integer.
    Malformed(MalformedReason),
    /// The digit width configuration is inconsistent (the super-digit is
    /// narrower than twice the digit width).
    UnrecoverableConfig,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NegativeExponent => write!(f, "negative exponent"),
            Self::NegativeShiftAmount => write!(f, "negative shift amount"),
            Self::ShiftAmountOutOfRange => write!(f, "shift amount out of range"),
            Self::LogBaseTooSmall => write!(f, "logarithm base must be at least 2"),
            Self::LogArgumentNotPositive => write!(f, "logarithm argument must be positive"),
            Self::OutOfRange => write!(f, "value out of range for target type"),
            Self::BufferTooSmall => write!(f, "destination buffer too small"),
            Self::Malformed(reason) => write!(f, "malformed integer literal: {reason}"),
            Self::UnrecoverableConfig => {
                write!(f, "super-digit width must be at least twice the digit width")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
