//! Multicast DNS messages.
//!
//! This module defines the [`Message`] type, the result of decoding a
//! datagram received from the Multicast DNS group, and the [`Decoder`] that
//! creates it.
//!
//! Decoding proceeds strictly in wire order: the header section first, then
//! as many questions as the header announces, then as many answer records.
//! The authority and additional sections are not decoded. Their counts are
//! available from the header but whatever follows the answer section is
//! ignored.
//!
//! Decoding is all-or-nothing. If any part of the message fails to decode,
//! the whole message is rejected with the error of that part.

use super::cursor::Cursor;
use super::dig_printer::DigPrinter;
use super::header::{Flags, HeaderCounts, HeaderSection};
use super::name::Compression;
use super::question::Question;
use super::record::Record;
use super::wire::DecodeError;
use core::fmt;
use std::net::SocketAddr;
use tracing::trace;

//------------ Message -------------------------------------------------------

/// A decoded Multicast DNS message.
///
/// A message consists of the address of the sender it was received from,
/// its header, and the content of its question and answer sections. The
/// number of questions and answers always equals the respective count in
/// the header.
///
/// Messages are created by decoding a datagram through [`Message::decode`],
/// the free function [`decode`], or a configured [`Decoder`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    /// The address the message was received from.
    source: SocketAddr,

    /// The header section.
    header: HeaderSection,

    /// The question section.
    questions: Vec<Question>,

    /// The answer section.
    answers: Vec<Record>,
}

/// # Decoding
///
impl Message {
    /// Decodes a message using the default options.
    ///
    /// The `octets` need to be the complete payload of a single datagram.
    /// The `source` is the address the datagram was received from. It is
    /// kept with the message but not otherwise looked at.
    pub fn decode(
        octets: &[u8],
        source: SocketAddr,
    ) -> Result<Self, DecodeError> {
        Decoder::new().decode(octets, source)
    }
}

/// # Field Access
///
impl Message {
    /// Returns the address the message was received from.
    pub fn source(&self) -> SocketAddr {
        self.source
    }

    /// Returns the header section.
    pub fn header(&self) -> HeaderSection {
        self.header
    }

    /// Returns the message ID.
    pub fn id(&self) -> u16 {
        self.header.id
    }

    /// Returns the flags, opcode, and response code.
    pub fn flags(&self) -> Flags {
        self.header.flags
    }

    /// Returns the section counts from the header.
    pub fn counts(&self) -> HeaderCounts {
        self.header.counts
    }

    /// Returns the content of the question section.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the content of the answer section.
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Converts the message into its questions and answers.
    pub fn into_sections(self) -> (Vec<Question>, Vec<Record>) {
        (self.questions, self.answers)
    }
}

/// # Printing
///
impl Message {
    /// Displays the message in the style of the `dig` tool.
    ///
    /// The output starts with the sender address and the header, followed
    /// by the question and answer sections if they are not empty. Record
    /// data is printed in the generic hex format.
    pub fn display_dig_style(&self) -> impl fmt::Display + '_ {
        DigPrinter { msg: self }
    }
}

//------------ Decoder -------------------------------------------------------

/// A configurable message decoder.
///
/// The decoder only keeps options, so it is cheap to copy and can be
/// shared between any number of threads.
///
/// ```
/// use mdns_decode::base::message::Decoder;
///
/// let decoder = Decoder::new().resolve_compression(true);
/// let msg = decoder.decode(
///     b"\x00\x00\x84\x00\x00\x00\x00\x00\x00\x00\x00\x00",
///     "192.0.2.1:5353".parse().unwrap(),
/// ).unwrap();
/// assert!(msg.flags().qr);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoder {
    /// What to do with compressed domain names.
    compression: Compression,
}

impl Decoder {
    /// Creates a new decoder with the default options.
    ///
    /// By default, compressed names are rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether compressed domain names are resolved.
    pub fn resolve_compression(mut self, resolve: bool) -> Self {
        self.compression = if resolve {
            Compression::Resolve
        } else {
            Compression::Reject
        };
        self
    }

    /// Sets what to do with compressed domain names.
    pub fn set_compression(&mut self, compression: Compression) {
        self.compression = compression
    }

    /// Returns what is done with compressed domain names.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Decodes a message.
    ///
    /// The `octets` need to be the complete payload of a single datagram.
    /// The `source` is the address the datagram was received from.
    ///
    /// Returns [`DecodeError::TooFewBytes`] if `octets` is shorter than a
    /// header section. Otherwise, returns the error of the first part of
    /// the message that fails to decode.
    pub fn decode(
        &self,
        octets: &[u8],
        source: SocketAddr,
    ) -> Result<Message, DecodeError> {
        if octets.len() < HeaderSection::LEN {
            return Err(DecodeError::TooFewBytes(octets.len()));
        }
        let mut cursor = Cursor::new(octets)?;
        let header = HeaderSection::parse(&mut cursor)?;
        let questions = (0..header.counts.qdcount)
            .map(|_| Question::parse(&mut cursor, self.compression))
            .collect::<Result<Vec<_>, _>>()?;
        let answers = (0..header.counts.ancount)
            .map(|_| Record::parse(&mut cursor, self.compression))
            .collect::<Result<Vec<_>, _>>()?;
        trace!(
            id = header.id,
            qdcount = header.counts.qdcount,
            ancount = header.counts.ancount,
            ignored = cursor.remaining(),
            "decoded message from {}",
            source
        );
        Ok(Message {
            source,
            header,
            questions,
            answers,
        })
    }
}

//------------ decode --------------------------------------------------------

/// Decodes a message using the default options.
///
/// This is the same as [`Message::decode`].
pub fn decode(
    octets: &[u8],
    source: SocketAddr,
) -> Result<Message, DecodeError> {
    Decoder::new().decode(octets, source)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Rtype};
    use crate::base::name::LabelType;

    fn source() -> SocketAddr {
        "192.0.2.1:5353".parse().unwrap()
    }

    /// A response with one question and one answer.
    ///
    /// The answer reuses the name of the question via a pointer to
    /// position 12.
    static COMPRESSED: &[u8] = b"\x00\x00\x84\x00\x00\x01\x00\x01\x00\x00\
        \x00\x00\x03foo\x05local\x00\x00\x01\x00\x01\
        \xc0\x0c\x00\x01\x80\x01\x00\x00\x00\x78\x00\x04\xc0\xa8\x00\x01";

    #[test]
    fn compression_rejected_by_default() {
        assert_eq!(
            decode(COMPRESSED, source()),
            Err(DecodeError::UnsupportedNameEncoding(LabelType::Compressed(
                12
            )))
        );
    }

    #[test]
    fn compression_resolved() {
        let msg = Decoder::new()
            .resolve_compression(true)
            .decode(COMPRESSED, source())
            .unwrap();
        assert_eq!(
            msg.questions(),
            &[Question::new("foo.local", Rtype::A, Class::IN, false)]
        );
        assert_eq!(msg.answers().len(), 1);
        assert_eq!(msg.answers()[0].owner(), "foo.local");
        assert!(msg.answers()[0].cache_flush());
        assert_eq!(msg.answers()[0].data().as_ref(), b"\xc0\xa8\x00\x01");
    }

    #[test]
    fn decoder_options() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.compression(), Compression::Reject);
        decoder.set_compression(Compression::Resolve);
        assert_eq!(decoder.compression(), Compression::Resolve);
        assert_eq!(
            decoder.resolve_compression(false).compression(),
            Compression::Reject
        );
    }

    #[test]
    fn question_failure_aborts() {
        // Two questions announced, only one present.
        let octets = b"\x00\x00\x00\x00\x00\x02\x00\x00\x00\x00\x00\x00\
            \x00\x00\x01\x00\x01";
        assert_eq!(decode(octets, source()), Err(DecodeError::OutOfBounds));
    }

    #[test]
    fn authority_and_additional_ignored() {
        let octets = b"\x00\x00\x84\x00\x00\x00\x00\x00\x00\x03\x00\x02\
            \xde\xad\xbe\xef";
        let msg = decode(octets, source()).unwrap();
        assert_eq!(msg.counts().nscount, 3);
        assert_eq!(msg.counts().arcount, 2);
        assert!(msg.questions().is_empty());
        assert!(msg.answers().is_empty());
    }

    #[test]
    fn dig_style() {
        let msg = Decoder::new()
            .resolve_compression(true)
            .decode(COMPRESSED, source())
            .unwrap();
        assert_eq!(
            format!("{}", msg.display_dig_style()),
            ";; from 192.0.2.1:5353\n\
             ;; ->>HEADER<<- opcode: QUERY, rcode: NOERROR, id: 0\n\
             ;; flags: QR AA; QUERY: 1, ANSWER: 1, AUTHORITY: 0, \
             ADDITIONAL: 0\n\
             \n\
             ;; QUESTION SECTION:\n\
             ; foo.local.\tA\tIN\n\
             \n\
             ;; ANSWER SECTION:\n\
             foo.local. 120 IN A \\# 4 c0a80001 ; cache-flush\n"
        );
    }
}
