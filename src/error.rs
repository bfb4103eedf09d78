//! Errors that may occur when working with MAC structures.

use std;
use std::fmt;

use hex::FromHexError;

/// MAC decoding errors.
///
/// These signal misuse of the decoding API or malformed text input. Protocol
/// variability, such as unknown opcodes or missing fragments, is never an error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MacError {
    /// A hex string had a non-hex digit or an odd number of digits.
    InvalidHex(FromHexError),
    /// A checked read extended past the end of the buffer, with the offending bit index.
    OutOfBounds(usize),
    /// A structure other than a continuation fragment was offered as one.
    NotContinuation,
}

impl fmt::Display for MacError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::MacError::*;

        match *self {
            InvalidHex(err) => write!(f, "invalid hex: {}", err),
            OutOfBounds(bit) => write!(f, "bit {} is beyond the end of the buffer", bit),
            NotContinuation => write!(f, "structure is not a continuation fragment"),
        }
    }
}

impl std::error::Error for MacError {}

impl From<FromHexError> for MacError {
    fn from(err: FromHexError) -> MacError { MacError::InvalidHex(err) }
}

/// Standard result using `MacError`.
pub type Result<T> = std::result::Result<T, MacError>;
