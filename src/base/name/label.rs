//! Domain name labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::super::cursor::Cursor;
use super::super::wire::DecodeError;
use core::fmt;

//------------ LabelType -----------------------------------------------------

/// The type of a label as given by the top two bits of its first octet.
///
/// The first octet of each label in a wire-format domain name either gives
/// the length of a normal label or starts a compression pointer. The two
/// remaining combinations of the top bits are reserved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelType {
    /// A normal label with its length in octets.
    ///
    /// A length of zero is the root label that ends a name.
    Normal(u8),

    /// A compression pointer with the position it points to.
    Compressed(usize),

    /// An extended label type (top bits `01`) with its full first octet.
    Extended(u8),

    /// An undefined label type (top bits `10`) with its full first octet.
    Undefined(u8),
}

impl LabelType {
    /// Reads a label type from the cursor.
    ///
    /// For normal labels, only the length octet is consumed. For compression
    /// pointers, both octets of the pointer are consumed.
    pub fn parse(cursor: &mut Cursor) -> Result<Self, DecodeError> {
        let ltype = cursor.read_u8()?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(ltype)),
            0x40..=0x7F => Ok(LabelType::Extended(ltype)),
            0x80..=0xBF => Ok(LabelType::Undefined(ltype)),
            0xC0..=0xFF => {
                let res = usize::from(cursor.read_u8()?);
                let res = res | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
        }
    }
}

//--- Display

impl fmt::Display for LabelType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LabelType::Normal(len) => write!(f, "label of length {}", len),
            LabelType::Compressed(ptr) => {
                write!(f, "compression pointer to position {}", ptr)
            }
            LabelType::Extended(value) => {
                write!(f, "extended label type 0x{:02x}", value)
            }
            LabelType::Undefined(value) => {
                write!(f, "undefined label type 0x{:02x}", value)
            }
        }
    }
}

//------------ push_label ----------------------------------------------------

/// Appends the presentation format of a label’s content to `target`.
///
/// Multicast DNS names are UTF-8, so a label that is valid UTF-8 is copied
/// as text. A dot or backslash within the label is escaped with a
/// backslash. Control characters and, if the label isn’t valid UTF-8, all
/// octets outside of printable ASCII become a backslash followed by their
/// three-digit decimal value.
pub(super) fn push_label(target: &mut String, label: &[u8]) {
    match core::str::from_utf8(label) {
        Ok(text) => {
            for ch in text.chars() {
                if ch == '.' || ch == '\\' {
                    target.push('\\');
                    target.push(ch);
                } else if ch.is_control() {
                    let mut buf = [0; 4];
                    for &octet in ch.encode_utf8(&mut buf).as_bytes() {
                        push_decimal_escape(target, octet);
                    }
                } else {
                    target.push(ch);
                }
            }
        }
        Err(_) => {
            for &ch in label {
                if ch == b'.' || ch == b'\\' {
                    target.push('\\');
                    target.push(ch as char);
                } else if !(0x20..0x7F).contains(&ch) {
                    push_decimal_escape(target, ch);
                } else {
                    target.push(ch as char);
                }
            }
        }
    }
}

fn push_decimal_escape(target: &mut String, ch: u8) {
    target.push('\\');
    target.push(char::from(b'0' + ch / 100));
    target.push(char::from(b'0' + (ch / 10) % 10));
    target.push(char::from(b'0' + ch % 10));
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn label_types() {
        fn ltype(octets: &[u8]) -> Result<LabelType, DecodeError> {
            LabelType::parse(&mut Cursor::new(octets).unwrap())
        }

        assert_eq!(ltype(b"\x00"), Ok(LabelType::Normal(0)));
        assert_eq!(ltype(b"\x3f"), Ok(LabelType::Normal(63)));
        assert_eq!(ltype(b"\x41"), Ok(LabelType::Extended(0x41)));
        assert_eq!(ltype(b"\x80"), Ok(LabelType::Undefined(0x80)));
        assert_eq!(ltype(b"\xc0\x0c"), Ok(LabelType::Compressed(12)));
        assert_eq!(ltype(b"\xc1\x02"), Ok(LabelType::Compressed(0x102)));
        assert_eq!(ltype(b"\xc0"), Err(DecodeError::OutOfBounds));
    }

    #[test]
    fn escaping() {
        let mut s = String::new();
        push_label(&mut s, b"My Printer");
        assert_eq!(s, "My Printer");

        let mut s = String::new();
        push_label(&mut s, b"a.b\\c");
        assert_eq!(s, "a\\.b\\\\c");

        let mut s = String::new();
        push_label(&mut s, b"\x00\x7f\xff");
        assert_eq!(s, "\\000\\127\\255");
    }

    #[test]
    fn utf8_labels() {
        let mut s = String::new();
        push_label(&mut s, "Büro Drucker".as_bytes());
        assert_eq!(s, "Büro Drucker");

        let mut s = String::new();
        push_label(&mut s, "Küche.2\n".as_bytes());
        assert_eq!(s, "Küche\\.2\\010");

        // U+0085 is a control character encoded as two octets.
        let mut s = String::new();
        push_label(&mut s, "a\u{85}".as_bytes());
        assert_eq!(s, "a\\194\\133");

        // Not valid UTF-8 as a whole, so the ü is escaped, too.
        let mut s = String::new();
        push_label(&mut s, b"B\xc3\xbcro\xff");
        assert_eq!(s, "B\\195\\188ro\\255");
    }
}
