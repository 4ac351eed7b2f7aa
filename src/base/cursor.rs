//! Reading data from a datagram buffer.
//!
//! All decoding in this crate happens through a [`Cursor`]: a read head
//! over a borrowed octets slice that remembers how far it has got. Each
//! decoding step takes the cursor by mutable reference, reads what it needs,
//! and leaves the cursor positioned right behind the data it consumed. This
//! way, the position is threaded through the whole decoding process without
//! anyone having to do offset arithmetic.
//!
//! Cursors only ever move forward. The one exception is the resolution of
//! compressed domain names which creates a new cursor at an earlier position
//! via [`Cursor::at`] rather than rewinding an existing one.

use super::wire::DecodeError;

//------------ Cursor --------------------------------------------------------

/// A forward-only read head over an octets slice.
///
/// The cursor borrows the slice and never copies it. Its position is always
/// between zero and the length of the slice, inclusive. All reading
/// methods check that enough data is left and return
/// [`DecodeError::OutOfBounds`] otherwise, in which case the position is
/// left unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The underlying octets.
    octets: &'a [u8],

    /// The position of the next octet to be read.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `octets`.
    ///
    /// Returns [`DecodeError::EmptyInput`] if the slice is empty.
    pub fn new(octets: &'a [u8]) -> Result<Self, DecodeError> {
        if octets.is_empty() {
            return Err(DecodeError::EmptyInput);
        }
        Ok(Cursor { octets, pos: 0 })
    }

    /// Creates a new cursor positioned at `pos` within `octets`.
    ///
    /// This is used to follow a compression pointer into an earlier part
    /// of the same message.
    pub fn at(octets: &'a [u8], pos: usize) -> Result<Self, DecodeError> {
        if pos > octets.len() {
            return Err(DecodeError::OutOfBounds);
        }
        Ok(Cursor { octets, pos })
    }

    /// Returns the complete underlying octets slice.
    pub fn as_slice(&self) -> &'a [u8] {
        self.octets
    }

    /// Returns the current position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the number of octets left to read.
    pub fn remaining(&self) -> usize {
        self.octets.len() - self.pos
    }

    /// Returns the next `len` octets without advancing.
    pub fn peek(&self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.check_len(len)?;
        Ok(&self.octets[self.pos..self.pos + len])
    }

    /// Returns the next `len` octets and advances past them.
    ///
    /// Reading zero octets always succeeds, even at the end of the data.
    pub fn read(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let res = self.peek(len)?;
        self.pos += len;
        Ok(res)
    }

    /// Reads a single octet.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read(1)?[0])
    }

    /// Reads a 16 bit integer in network byte order.
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let mut buf = [0u8; 2];
        buf.copy_from_slice(self.read(2)?);
        Ok(u16::from_be_bytes(buf))
    }

    /// Reads a 32 bit integer in network byte order.
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.read(4)?);
        Ok(u32::from_be_bytes(buf))
    }

    fn check_len(&self, len: usize) -> Result<(), DecodeError> {
        if self.remaining() < len {
            Err(DecodeError::OutOfBounds)
        } else {
            Ok(())
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(Cursor::new(b"").unwrap_err(), DecodeError::EmptyInput);
    }

    #[test]
    fn read_and_peek() {
        let mut cursor = Cursor::new(b"\x01\x02\x03\x04\x05").unwrap();
        assert_eq!(cursor.peek(2).unwrap(), b"\x01\x02");
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.read(2).unwrap(), b"\x01\x02");
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.read(3).unwrap(), b"\x03\x04\x05");
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.read(0).unwrap(), b"");
        assert_eq!(cursor.peek(0).unwrap(), b"");
    }

    #[test]
    fn out_of_bounds() {
        let mut cursor = Cursor::new(b"\x01\x02\x03").unwrap();
        assert_eq!(cursor.peek(4), Err(DecodeError::OutOfBounds));
        assert_eq!(cursor.read(4), Err(DecodeError::OutOfBounds));
        assert_eq!(cursor.pos(), 0);
        cursor.read(2).unwrap();
        assert_eq!(cursor.read_u16(), Err(DecodeError::OutOfBounds));
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.read_u8(), Ok(3));
        assert_eq!(cursor.read_u8(), Err(DecodeError::OutOfBounds));
    }

    #[test]
    fn integers() {
        let mut cursor =
            Cursor::new(b"\x12\x34\x56\x78\x9a\xbc\xde").unwrap();
        assert_eq!(cursor.read_u16(), Ok(0x1234));
        assert_eq!(cursor.read_u32(), Ok(0x5678_9abc));
        assert_eq!(cursor.read_u8(), Ok(0xde));
    }

    #[test]
    fn at() {
        let octets = b"\x01\x02\x03";
        let mut cursor = Cursor::at(octets, 1).unwrap();
        assert_eq!(cursor.read_u8(), Ok(2));
        assert!(Cursor::at(octets, 3).is_ok());
        assert_eq!(
            Cursor::at(octets, 4).unwrap_err(),
            DecodeError::OutOfBounds
        );
    }
}
