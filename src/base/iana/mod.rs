//! IANA Definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that appear in Multicast DNS messages.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes around the raw integer value with associated constants for all
//! well-defined values. Since every integer is a valid value, decoding
//! never fails and never loses information: `from_int()` and `to_int()`
//! convert losslessly in both directions, as do the `From` impls. `FromStr`
//! and `Display` convert from the mnemonics to the values and back.

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;
