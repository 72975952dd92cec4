use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, TagError>;

/// Errors produced while encoding and decoding tag streams.
///
/// Truncated input surfaces as [`TagError::Io`] carrying
/// [`std::io::ErrorKind::UnexpectedEof`]; every other variant is a format
/// error in the stream itself or in the tree handed to the encoder.
#[derive(Debug, Error)]
pub enum TagError {
	/// Filesystem or stream IO failure, including truncated input and
	/// corrupt compression framing.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Unrecognized wire type id.
	#[error("unknown tag type {type_byte}")]
	UnknownTagType {
		/// Offending type byte.
		type_byte: u8,
	},
	/// Stream root tag is not a compound.
	#[error("root tag type {type_byte} is not a compound")]
	RootNotCompound {
		/// Type byte found where the root compound id was expected.
		type_byte: u8,
	},
	/// Negative declared length for a length-prefixed field.
	#[error("negative {kind} length {len}")]
	NegativeLength {
		/// Logical field kind being decoded.
		kind: &'static str,
		/// Parsed signed length.
		len: i32,
	},
	/// String payload is not valid UTF-8.
	#[error("invalid utf-8 in string payload")]
	InvalidUtf8(#[from] std::string::FromUtf8Error),
	/// String byte length does not fit the 16-bit wire prefix.
	#[error("string of {len} bytes exceeds the 16-bit length prefix")]
	StringTooLong {
		/// UTF-8 byte length of the offending string.
		len: usize,
	},
	/// Array or list does not fit the 32-bit wire count.
	#[error("{kind} of {len} elements exceeds the 32-bit count prefix")]
	LengthOverflow {
		/// Logical field kind being encoded.
		kind: &'static str,
		/// Element count of the offending value.
		len: usize,
	},
	/// Tag nesting exceeded the configured depth ceiling.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthLimitExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Declared element count exceeded the configured ceiling.
	#[error("declared {kind} count {count} exceeds limit {max}")]
	ElementCountTooLarge {
		/// Logical field kind being decoded.
		kind: &'static str,
		/// Declared element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// List elements do not all share the first element's type.
	#[error("mixed list: expected {expected}, got {got}")]
	MixedList {
		/// Wire type fixed by the first element.
		expected: &'static str,
		/// Wire type of the mismatching element.
		got: &'static str,
	},
}
