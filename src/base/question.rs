//! A single question in a DNS message.
//!
//! This module defines the type `Question` which represents an entry in
//! the question section of a DNS message.

use super::cursor::Cursor;
use super::iana::{Class, Rtype};
use super::name::{parse_name, Compression};
use super::wire::DecodeError;
use core::fmt;

//------------ Question ------------------------------------------------------

/// A question in a Multicast DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. Multicast
/// DNS takes the top bit of the class field and uses it to ask for a
/// unicast response. This bit is kept separately as
/// [`unicast_response`][Self::unicast_response] and the class contains only
/// the remaining 15 bits.
///
/// In wire format, questions are laid out as the name followed by the
/// record type and the class field, each a 16 bit integer in network byte
/// order. Any value is accepted for both.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// The domain name of the question.
    qname: String,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the question without the unicast-response bit.
    qclass: Class,

    /// Whether a unicast response was requested.
    unicast_response: bool,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its elements.
    pub fn new(
        qname: impl Into<String>,
        qtype: Rtype,
        qclass: Class,
        unicast_response: bool,
    ) -> Self {
        Question {
            qname: qname.into(),
            qtype,
            qclass,
            unicast_response,
        }
    }

    /// Reads a question from the cursor.
    pub fn parse(
        cursor: &mut Cursor,
        compression: Compression,
    ) -> Result<Self, DecodeError> {
        let qname = parse_name(cursor, compression)?;
        let qtype = Rtype::from_int(cursor.read_u16()?);
        let (unicast_response, qclass) =
            Class::split_top_bit(cursor.read_u16()?);
        Ok(Question {
            qname,
            qtype,
            qclass,
            unicast_response,
        })
    }
}

/// # Field Access
///
impl Question {
    /// Returns the requested domain name.
    pub fn qname(&self) -> &str {
        &self.qname
    }

    /// Returns the requested record type.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the requested class.
    pub fn qclass(&self) -> Class {
        self.qclass
    }

    /// Returns whether the querier asked for a unicast response.
    ///
    /// This is the top bit of the class field, the ‘QU’ bit of section
    /// 5.4 of [RFC 6762].
    ///
    /// [RFC 6762]: https://tools.ietf.org/html/rfc6762
    pub fn unicast_response(&self) -> bool {
        self.unicast_response
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.\t{}\t{}", self.qname, self.qtype, self.qclass)?;
        if self.unicast_response {
            f.write_str("\tQU")?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let mut cursor =
            Cursor::new(b"\x05_http\x04_tcp\x05local\x00\x00\x0c\x80\x01\xff")
                .unwrap();
        let question =
            Question::parse(&mut cursor, Compression::Reject).unwrap();
        assert_eq!(
            question,
            Question::new("_http._tcp.local", Rtype::PTR, Class::IN, true)
        );
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(
            format!("{}", question),
            "_http._tcp.local.\tPTR\tIN\tQU"
        );
    }

    #[test]
    fn multicast_response() {
        let mut cursor = Cursor::new(b"\x00\x00\x01\x00\x01").unwrap();
        let question =
            Question::parse(&mut cursor, Compression::Reject).unwrap();
        assert_eq!(question.qname(), "");
        assert_eq!(question.qtype(), Rtype::A);
        assert_eq!(question.qclass(), Class::IN);
        assert!(!question.unicast_response());
        assert_eq!(format!("{}", question), ".\tA\tIN");
    }

    #[test]
    fn truncated() {
        let mut cursor = Cursor::new(b"\x00\x00\x01\x00").unwrap();
        assert_eq!(
            Question::parse(&mut cursor, Compression::Reject),
            Err(DecodeError::OutOfBounds)
        );
    }
}
