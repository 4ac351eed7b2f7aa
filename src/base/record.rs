//! Resource Records.
//!
//! This module defines the type [`Record`] which represents an entry in the
//! answer section of a Multicast DNS message.
//!
//! In wire format, a record consists of the owner name, the record type,
//! the class field, the TTL, and the length of the record data, followed by
//! that many octets of record data. The record data is kept as is. Its
//! meaning depends on the record type and interpreting it is left to the
//! user.

use super::cursor::Cursor;
use super::iana::{Class, Rtype};
use super::name::{parse_name, Compression};
use super::wire::DecodeError;
use bytes::Bytes;
use core::fmt;

//------------ Record --------------------------------------------------------

/// A resource record from a Multicast DNS message.
///
/// Multicast DNS takes the top bit of the class field and uses it as the
/// cache-flush bit. This bit is kept separately as
/// [`cache_flush`][Self::cache_flush] and the class contains only the
/// remaining 15 bits.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// The owner of the record.
    owner: String,

    /// The type of the record.
    rtype: Rtype,

    /// The class of the record without the cache-flush bit.
    class: Class,

    /// Whether the cache-flush bit is set.
    cache_flush: bool,

    /// The TTL of the record in seconds.
    ttl: u32,

    /// The record data.
    data: Bytes,
}

/// # Creation and Conversion
///
impl Record {
    /// Creates a new record from its elements.
    ///
    /// # Panics
    ///
    /// The function panics if `data` is longer than 65,535 octets.
    pub fn new(
        owner: impl Into<String>,
        rtype: Rtype,
        class: Class,
        cache_flush: bool,
        ttl: u32,
        data: impl Into<Bytes>,
    ) -> Self {
        let data = data.into();
        assert!(data.len() <= usize::from(u16::MAX), "long record data");
        Record {
            owner: owner.into(),
            rtype,
            class,
            cache_flush,
            ttl,
            data,
        }
    }

    /// Reads a record from the cursor.
    ///
    /// The record data is copied out of the message. If the message ends
    /// before all the data announced by the record data length, decoding
    /// fails with [`DecodeError::OutOfBounds`].
    pub fn parse(
        cursor: &mut Cursor,
        compression: Compression,
    ) -> Result<Self, DecodeError> {
        let owner = parse_name(cursor, compression)?;
        let rtype = Rtype::from_int(cursor.read_u16()?);
        let (cache_flush, class) = Class::split_top_bit(cursor.read_u16()?);
        let ttl = cursor.read_u32()?;
        let rdlen = cursor.read_u16()?;
        let data = Bytes::copy_from_slice(cursor.read(usize::from(rdlen))?);
        Ok(Record {
            owner,
            rtype,
            class,
            cache_flush,
            ttl,
            data,
        })
    }
}

/// # Field Access
///
impl Record {
    /// Returns the owner domain name of the record.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns whether the cache-flush bit is set.
    ///
    /// If it is set, the record replaces all cached records of the same
    /// name, type, and class rather than being added to them. See section
    /// 10.2 of [RFC 6762].
    ///
    /// [RFC 6762]: https://tools.ietf.org/html/rfc6762
    pub fn cache_flush(&self) -> bool {
        self.cache_flush
    }

    /// Returns the record’s time-to-live in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the length of the record data in octets.
    pub fn rdlen(&self) -> u16 {
        // Checked on creation.
        self.data.len() as u16
    }

    /// Returns a reference to the raw record data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Converts the record into its raw record data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

//--- Display

/// Uses the generic record data format of [RFC 3597] for the data.
///
/// [RFC 3597]: https://tools.ietf.org/html/rfc3597
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}. {} {} {} \\# {}",
            self.owner,
            self.ttl,
            self.class,
            self.rtype,
            self.data.len()
        )?;
        if !self.data.is_empty() {
            f.write_str(" ")?;
            for ch in self.data.iter() {
                write!(f, "{:02x}", ch)?;
            }
        }
        if self.cache_flush {
            f.write_str(" ; cache-flush")?;
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
        let mut cursor = Cursor::new(
            b"\x03foo\x05local\x00\x00\x01\x80\x01\x00\x00\x00\x78\
              \x00\x04\xc0\xa8\x00\x01\xff",
        )
        .unwrap();
        let record = Record::parse(&mut cursor, Compression::Reject).unwrap();
        assert_eq!(
            record,
            Record::new(
                "foo.local",
                Rtype::A,
                Class::IN,
                true,
                120,
                &b"\xc0\xa8\x00\x01"[..]
            )
        );
        assert_eq!(record.rdlen(), 4);
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(
            format!("{}", record),
            "foo.local. 120 IN A \\# 4 c0a80001 ; cache-flush"
        );
    }

    #[test]
    fn empty_data() {
        let mut cursor = Cursor::new(
            b"\x00\x00\x10\x00\x01\xff\xff\xff\xff\x00\x00",
        )
        .unwrap();
        let record = Record::parse(&mut cursor, Compression::Reject).unwrap();
        assert_eq!(record.owner(), "");
        assert_eq!(record.rtype(), Rtype::TXT);
        assert_eq!(record.class(), Class::IN);
        assert!(!record.cache_flush());
        assert_eq!(record.ttl(), u32::MAX);
        assert_eq!(record.rdlen(), 0);
        assert!(record.data().is_empty());
        assert_eq!(format!("{}", record), ". 4294967295 IN TXT \\# 0");
    }

    #[test]
    fn short_data() {
        let mut cursor = Cursor::new(
            b"\x00\x00\x01\x00\x01\x00\x00\x00\x78\x00\x04\xc0\xa8\x00",
        )
        .unwrap();
        assert_eq!(
            Record::parse(&mut cursor, Compression::Reject),
            Err(DecodeError::OutOfBounds)
        );
    }

    #[test]
    fn short_fixed_fields() {
        let mut cursor =
            Cursor::new(b"\x00\x00\x01\x00\x01\x00\x00\x00").unwrap();
        assert_eq!(
            Record::parse(&mut cursor, Compression::Reject),
            Err(DecodeError::OutOfBounds)
        );
    }
}
