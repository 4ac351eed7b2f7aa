//! Decoding domain names from a message.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use super::super::cursor::Cursor;
use super::super::wire::DecodeError;
use super::label::{push_label, LabelType};

//------------ Compression ---------------------------------------------------

/// What to do with compressed domain names.
///
/// Name compression replaces the tail of a domain name with a pointer to an
/// earlier occurence of the same labels in the message. Multicast DNS
/// responders use it freely.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compression {
    /// Compression pointers are an error.
    ///
    /// Decoding a name that contains one fails with
    /// [`DecodeError::UnsupportedNameEncoding`].
    #[default]
    Reject,

    /// Compression pointers are followed.
    ///
    /// Each pointer has to point to a position before the start of the
    /// label sequence it is part of. Otherwise decoding fails with
    /// [`DecodeError::BadCompressionPointer`].
    Resolve,
}

//------------ parse_name ----------------------------------------------------

/// The maximum length of a domain name in wire format.
const MAX_NAME_LEN: usize = 255;

/// Reads a domain name from the cursor.
///
/// The name is read as a sequence of labels, each preceded by its length,
/// until the empty root label. The cursor is left right after the root
/// label or, for a compressed name, right after the first compression
/// pointer.
///
/// The labels are returned joined by dots without a leading or trailing
/// dot, so the root name becomes the empty string. Labels are UTF-8 text.
/// Dots and backslashes inside a label as well as control characters and
/// octets that aren’t valid UTF-8 are escaped.
///
/// Reaching the end of the message before the root label is
/// [`DecodeError::OutOfBounds`]. A name longer than 255 octets in wire
/// format, counting all length octets, is [`DecodeError::LongName`].
pub fn parse_name(
    cursor: &mut Cursor,
    compression: Compression,
) -> Result<String, DecodeError> {
    let mut name = NameBuf::new();
    let start = cursor.pos();

    // Phase One: No compression pointers have been found yet.
    //
    // Read labels straight off the cursor. If we encounter the root label,
    // we are done. If we find a pointer, continue to phase two.
    let mut ptr = loop {
        match LabelType::parse(cursor)? {
            LabelType::Normal(0) => return Ok(name.finish()),
            LabelType::Normal(len) => {
                name.push(cursor.read(usize::from(len))?)?;
            }
            LabelType::Compressed(ptr)
                if compression == Compression::Resolve =>
            {
                break ptr;
            }
            ltype => return Err(DecodeError::UnsupportedNameEncoding(ltype)),
        }
    };

    // Phase Two: Compression has occured.
    //
    // We continue on a fresh cursor at the position pointed to. The
    // caller’s cursor stays right behind the pointer. Each pointer must
    // point before the label sequence it was found in, so we can never go
    // round in circles.
    let mut seq_start = start;
    loop {
        if ptr >= seq_start {
            return Err(DecodeError::BadCompressionPointer(ptr));
        }
        seq_start = ptr;
        let mut cursor = Cursor::at(cursor.as_slice(), ptr)?;
        loop {
            match LabelType::parse(&mut cursor)? {
                LabelType::Normal(0) => return Ok(name.finish()),
                LabelType::Normal(len) => {
                    name.push(cursor.read(usize::from(len))?)?;
                }
                LabelType::Compressed(new_ptr) => {
                    ptr = new_ptr;
                    break;
                }
                ltype => {
                    return Err(DecodeError::UnsupportedNameEncoding(ltype))
                }
            }
        }
    }
}

//------------ NameBuf -------------------------------------------------------

/// The name under construction along with its wire-format length.
struct NameBuf {
    name: String,
    wire_len: usize,
}

impl NameBuf {
    fn new() -> Self {
        NameBuf {
            name: String::new(),
            wire_len: 0,
        }
    }

    fn push(&mut self, label: &[u8]) -> Result<(), DecodeError> {
        // Content plus length octet, and there must still be room for the
        // root label.
        self.wire_len += label.len() + 1;
        if self.wire_len >= MAX_NAME_LEN {
            return Err(DecodeError::LongName);
        }
        if !self.name.is_empty() {
            self.name.push('.');
        }
        push_label(&mut self.name, label);
        Ok(())
    }

    fn finish(self) -> String {
        self.name
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn parse(
        octets: &[u8],
        start: usize,
        compression: Compression,
    ) -> (Result<String, DecodeError>, usize) {
        let mut cursor = Cursor::at(octets, start).unwrap();
        let res = parse_name(&mut cursor, compression);
        (res, cursor.pos())
    }

    #[test]
    fn plain() {
        let (res, pos) =
            parse(b"\x05_http\x04_tcp\x05local\x00\xff", 0, Compression::Reject);
        assert_eq!(res.unwrap(), "_http._tcp.local");
        assert_eq!(pos, 18);
    }

    #[test]
    fn root() {
        let (res, pos) = parse(b"\x00", 0, Compression::Reject);
        assert_eq!(res.unwrap(), "");
        assert_eq!(pos, 1);
    }

    #[test]
    fn truncated() {
        assert_eq!(
            parse(b"\x05local", 0, Compression::Reject).0,
            Err(DecodeError::OutOfBounds)
        );
        assert_eq!(
            parse(b"\x05loc", 0, Compression::Reject).0,
            Err(DecodeError::OutOfBounds)
        );
    }

    #[test]
    fn reserved_label_types() {
        assert_eq!(
            parse(b"\x41abc\x00", 0, Compression::Resolve).0,
            Err(DecodeError::UnsupportedNameEncoding(LabelType::Extended(
                0x41
            )))
        );
        assert_eq!(
            parse(b"\x05local\x80\x00", 0, Compression::Resolve).0,
            Err(DecodeError::UnsupportedNameEncoding(LabelType::Undefined(
                0x80
            )))
        );
    }

    #[test]
    fn compressed_rejected() {
        let octets = b"\x05local\x00\x03foo\xc0\x00";
        assert_eq!(
            parse(octets, 7, Compression::Reject).0,
            Err(DecodeError::UnsupportedNameEncoding(LabelType::Compressed(
                0
            )))
        );
    }

    #[test]
    fn compressed_once() {
        let octets = b"\x05local\x00\x03foo\xc0\x00\xff";
        let (res, pos) = parse(octets, 7, Compression::Resolve);
        assert_eq!(res.unwrap(), "foo.local");
        assert_eq!(pos, 13);
    }

    #[test]
    fn compressed_twice() {
        let octets = b"\x05local\x00\x04_tcp\xc0\x00\x05_http\xc0\x07";
        let (res, pos) = parse(octets, 14, Compression::Resolve);
        assert_eq!(res.unwrap(), "_http._tcp.local");
        assert_eq!(pos, octets.len());
    }

    #[test]
    fn bare_pointer() {
        let octets = b"\x05local\x00\xc0\x00";
        let (res, pos) = parse(octets, 7, Compression::Resolve);
        assert_eq!(res.unwrap(), "local");
        assert_eq!(pos, 9);
    }

    #[test]
    fn pointer_loops() {
        // Points to itself.
        assert_eq!(
            parse(b"\x03foo\xc0\x04", 4, Compression::Resolve).0,
            Err(DecodeError::BadCompressionPointer(4))
        );
        // Points forward.
        assert_eq!(
            parse(b"\xc0\x02\x00", 0, Compression::Resolve).0,
            Err(DecodeError::BadCompressionPointer(2))
        );
        // Two names pointing at each other.
        assert_eq!(
            parse(b"\x01a\xc0\x04\x01b\xc0\x00", 4, Compression::Resolve).0,
            Err(DecodeError::BadCompressionPointer(4))
        );
        // Points past the end of the message.
        assert_eq!(
            parse(b"\x01a\x00\x01b\xc0\x40", 3, Compression::Resolve).0,
            Err(DecodeError::BadCompressionPointer(0x40))
        );
    }

    #[test]
    fn long_name() {
        // Four labels of 63 octets make 256 octets with the root label.
        let mut octets = Vec::new();
        for _ in 0..4 {
            octets.push(63);
            octets.extend_from_slice(&[b'x'; 63]);
        }
        octets.push(0);
        assert_eq!(
            parse(&octets, 0, Compression::Reject).0,
            Err(DecodeError::LongName)
        );

        // Dropping one octet from the last label makes it fit exactly.
        let mut octets = Vec::new();
        for len in [63, 63, 63, 61] {
            octets.push(len);
            octets.extend_from_slice(&vec![b'x'; usize::from(len)]);
        }
        octets.push(0);
        assert_eq!(octets.len(), 255);
        assert!(parse(&octets, 0, Compression::Reject).0.is_ok());
    }
}
