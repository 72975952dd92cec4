mod codec;
mod compound;
mod error;
mod value;
mod wire;

/// Codec entry points, framing modes, and decode limits.
pub use codec::{DecodeOptions, Encoding, from_bytes, from_file, from_file_with, from_reader, to_bytes, to_file, to_file_with, to_writer};
/// Ordered container of named tag values.
pub use compound::TagCompound;
/// Error and result aliases.
pub use error::{Result, TagError};
/// Tag sum type and wire type ids.
pub use value::{TagType, TagValue};
