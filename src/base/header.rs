//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of records in each of the four sections that follow the header.
//! Its content and format are defined in section 4.1.1 of [RFC 1035].
//! Multicast DNS uses the same header, see section 18 of [RFC 6762] for how
//! it interprets the individual fields.
//!
//! The header section is decoded into a [`HeaderSection`] which consists of
//! the message ID, the [`Flags`], and the [`HeaderCounts`].
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 6762]: https://tools.ietf.org/html/rfc6762

use super::cursor::Cursor;
use super::iana::{Opcode, Rcode};
use super::wire::DecodeError;
use core::fmt;

//------------ Flags ---------------------------------------------------------

/// The flags contained in the DNS message header.
///
/// This type represents the second and third octet of the header, i.e.,
/// everything apart from the ID. The octets are layed out like this:
///
/// ```text
///   0  1  2  3  4  5  6  7  0  1  2  3  4  5  6  7
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// The three `Z` bits are reserved. They are decoded but only kept
/// privately so they show up in the `Debug` output.
///
/// The `Display` impl writes each flag that is set as a two-letter token,
/// the uppercase version of the flag name, separated by spaces. Opcode and
/// response code are not included.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// The `QR` bit specifies whether a message is a query (`false`) or a
    /// response (`true`).
    ///
    /// In other words, this bit is actually stating whether the message is
    /// *not* a query. So, perhaps it might be good to read ‘QR’ as ‘query
    /// response.’
    pub qr: bool,

    /// The kind of query.
    ///
    /// Multicast DNS messages should always use [`Opcode::QUERY`].
    pub opcode: Opcode,

    /// The *authoritative answer* (`AA`) bit.
    ///
    /// Multicast DNS responders always set this bit in their responses.
    pub aa: bool,

    /// The *truncation* (`TC`) bit.
    ///
    /// In Multicast DNS, a querier sets this bit if its known answers
    /// continue in the next message.
    pub tc: bool,

    /// The *recursion desired* (`RD`) bit.
    pub rd: bool,

    /// The *recursion available* (`RA`) bit.
    pub ra: bool,

    /// The response code.
    pub rcode: Rcode,

    /// The reserved bits between `RA` and `RCODE`.
    #[cfg_attr(feature = "serde", serde(skip))]
    z: u8,
}

impl Flags {
    /// Creates new flags.
    ///
    /// All flags will be unset, opcode and response code will be zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the flags from their two octets in wire format.
    pub fn from_octets(octets: [u8; 2]) -> Self {
        let [hi, lo] = octets;
        Flags {
            qr: hi & 0x80 != 0,
            opcode: Opcode::from_int((hi >> 3) & 0x0F),
            aa: hi & 0x04 != 0,
            tc: hi & 0x02 != 0,
            rd: hi & 0x01 != 0,
            ra: lo & 0x80 != 0,
            z: (lo >> 4) & 0x07,
            rcode: Rcode::from_int(lo & 0x0F),
        }
    }

    /// Returns whether the message is a response.
    ///
    /// This is the value of the [QR](Flags::qr) bit.
    pub fn is_response(&self) -> bool {
        self.qr
    }

    /// Reads the flags from the cursor.
    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        let octets = cursor.read(2)?;
        Ok(Flags::from_octets([octets[0], octets[1]]))
    }
}

//--- Display

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        if self.qr {
            write!(f, "QR")?;
            sep = " ";
        }
        if self.aa {
            write!(f, "{}AA", sep)?;
            sep = " ";
        }
        if self.tc {
            write!(f, "{}TC", sep)?;
            sep = " ";
        }
        if self.rd {
            write!(f, "{}RD", sep)?;
            sep = " ";
        }
        if self.ra {
            write!(f, "{}RA", sep)?;
        }
        Ok(())
    }
}

//------------ HeaderCounts --------------------------------------------------

/// The section count part of the header section of a DNS message.
///
/// This part consists of four 16 bit counters for the number of entries in
/// the four sections of a DNS message.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderCounts {
    /// The number of questions in the question section.
    pub qdcount: u16,

    /// The number of records in the answer section.
    pub ancount: u16,

    /// The number of records in the authority section.
    pub nscount: u16,

    /// The number of records in the additional section.
    pub arcount: u16,
}

impl HeaderCounts {
    /// Reads the four counts from the cursor.
    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        Ok(HeaderCounts {
            qdcount: cursor.read_u16()?,
            ancount: cursor.read_u16()?,
            nscount: cursor.read_u16()?,
            arcount: cursor.read_u16()?,
        })
    }
}

//------------ HeaderSection -------------------------------------------------

/// The complete header section of a DNS message.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderSection {
    /// The message ID.
    ///
    /// Multicast DNS responses carry zero here. Queries normally do, too,
    /// except for legacy unicast queries.
    pub id: u16,

    /// The flags, opcode, and response code.
    pub flags: Flags,

    /// The section counts.
    pub counts: HeaderCounts,
}

impl HeaderSection {
    /// The length of the header section in octets.
    pub const LEN: usize = 12;

    /// Reads the header section from the cursor.
    ///
    /// The cursor should be positioned at the start of a message.
    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        Ok(HeaderSection {
            id: cursor.read_u16()?,
            flags: Flags::parse(cursor)?,
            counts: HeaderCounts::parse(cursor)?,
        })
    }
}

//============ Testing =======================================================
