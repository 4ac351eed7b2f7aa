//! A decoder for Multicast DNS messages.
//!
//! This crate turns the raw octets of a datagram received from the
//! Multicast DNS group into a structured [`Message`]: the header with its
//! flags and section counts, the questions, and the answer records. It
//! only ever reads. It neither builds nor sends messages.
//!
//! Decoding never panics on bad input. Every datagram either decodes
//! completely or results in a [`DecodeError`] describing the first problem
//! encountered.
//!
//! ```
//! use mdns_decode::{decode, Rtype};
//!
//! let msg = decode(
//!     b"\x00\x00\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\
//!       \x05_http\x04_tcp\x05local\x00\x00\x0c\x80\x01",
//!     "192.0.2.1:5353".parse().unwrap(),
//! ).unwrap();
//! let question = &msg.questions()[0];
//! assert_eq!(question.qname(), "_http._tcp.local");
//! assert_eq!(question.qtype(), Rtype::PTR);
//! assert!(question.unicast_response());
//! ```
//!
//! # Modules
//!
//! * [base] contains the decoder itself and the types it produces,
#![cfg_attr(feature = "net", doc = "* [net]:")]
#![cfg_attr(not(feature = "net"), doc = "* net:")]
//!   A listener that receives and decodes messages sent to the Multicast
//!   DNS group, based on the [Tokio](https://tokio.rs/) async runtime.
//!
//! # Reference of Feature Flags
//!
//! * `net`: Enables the
#![cfg_attr(feature = "net", doc = "  [net]")]
#![cfg_attr(not(feature = "net"), doc = "  net")]
//!   module, the logging setup, and the `mdns-listen` binary.
//! * `serde`: Enables serde serialization for a number of basic types.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::base::{
    decode, Class, DecodeError, Decoder, Message, Question, Record, Rtype,
};

pub mod base;
pub mod net;

#[cfg(feature = "net")]
pub mod logging;

mod utils;
