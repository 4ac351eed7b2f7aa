//! Consuming data in wire format.
//!
//! This module contains the error type shared by all decoding steps. The
//! actual reading happens through the [`Cursor`][super::cursor::Cursor].

use super::name::LabelType;
use core::fmt;

//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding a message.
///
/// Decoding is all-or-nothing: whichever step fails first ends decoding of
/// the whole message and its error is returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// A cursor was created over an empty octets slice.
    EmptyInput,

    /// The message is shorter than the twelve octet header.
    ///
    /// The value is the length of the message.
    TooFewBytes(usize),

    /// An attempt was made to read beyond the end of the message.
    OutOfBounds,

    /// A domain name contained a label type that isn’t decoded.
    ///
    /// This is a compression pointer if compression isn’t being resolved or
    /// one of the reserved label types.
    UnsupportedNameEncoding(LabelType),

    /// A domain name is longer than the 255 octets allowed.
    LongName,

    /// A compression pointer doesn’t point to an earlier label sequence.
    ///
    /// The value is the position the pointer points to.
    BadCompressionPointer(usize),
}

//--- Display and Error

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::EmptyInput => f.write_str("empty input"),
            DecodeError::TooFewBytes(len) => {
                write!(f, "too few bytes for a message: {} octets", len)
            }
            DecodeError::OutOfBounds => f.write_str("unexpected end of input"),
            DecodeError::UnsupportedNameEncoding(ltype) => {
                write!(f, "unsupported name encoding: {}", ltype)
            }
            DecodeError::LongName => f.write_str("long domain name"),
            DecodeError::BadCompressionPointer(ptr) => {
                write!(f, "bad compression pointer to position {}", ptr)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
