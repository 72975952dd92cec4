use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::tag::{Result, TagError};

/// Big-endian stream reads shared by the codec.
///
/// Fixed-width primitives come straight from `byteorder`; this trait adds
/// the one length-prefixed encoding the wire format defines. A short read
/// anywhere surfaces as an `UnexpectedEof` IO error.
pub trait WireRead: Read {
	/// Read a string: big-endian `i16` UTF-8 byte length, then payload.
	///
	/// A negative length is a format error; zero length is the empty
	/// string.
	fn read_tag_string(&mut self) -> Result<String> {
		let len = self.read_i16::<BigEndian>()?;
		if len < 0 {
			return Err(TagError::NegativeLength {
				kind: "string",
				len: i32::from(len),
			});
		}
		if len == 0 {
			return Ok(String::new());
		}

		let mut buf = vec![0_u8; len as usize];
		self.read_exact(&mut buf)?;
		Ok(String::from_utf8(buf)?)
	}
}

impl<R: Read + ?Sized> WireRead for R {}

/// Big-endian stream writes shared by the codec.
pub trait WireWrite: Write {
	/// Write a string: big-endian `i16` UTF-8 byte length, then payload.
	///
	/// The prefix counts bytes, not characters; strings longer than
	/// `i16::MAX` bytes cannot be represented on the wire.
	fn write_tag_string(&mut self, value: &str) -> Result<()> {
		let len = value.len();
		if len > i16::MAX as usize {
			return Err(TagError::StringTooLong { len });
		}

		self.write_i16::<BigEndian>(len as i16)?;
		self.write_all(value.as_bytes())?;
		Ok(())
	}
}

impl<W: Write + ?Sized> WireWrite for W {}
