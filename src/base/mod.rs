//! Basics.
//!
//! This module provides the types for decoding Multicast DNS messages.
//!
//! Decoding happens through a [`Cursor`] that is positioned at the start
//! of a datagram and moved forward by each step. The steps are arranged in
//! submodules, one for each part of a message:
//!
//! * [header] for the header section with the message ID, the flags, and
//!   the section counts,
//! * [name] for domain names,
//! * [question] for the entries of the question section, and
//! * [record] for the resource records of the answer section.
//!
//! The [message] module ties them together. Its [`Decoder`] takes the
//! octets of a datagram and produces a [`Message`] or the first
//! [`DecodeError`] encountered.
//!
//! The [iana] module contains types for the various integer values defined
//! in IANA registries, such as record types and classes.

pub use self::cursor::Cursor;
pub use self::header::{Flags, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::{decode, Decoder, Message};
pub use self::name::Compression;
pub use self::question::Question;
pub use self::record::Record;
pub use self::wire::DecodeError;

pub mod cursor;
mod dig_printer;
pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod question;
pub mod record;
pub mod wire;
