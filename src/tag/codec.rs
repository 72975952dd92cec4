use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::tag::wire::{WireRead, WireWrite};
use crate::tag::{Result, TagCompound, TagError, TagType, TagValue};

/// Stream framing applied around the tag payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
	/// GZip-wrapped stream, the on-disk default.
	Gzip,
	/// Raw stream, for embedding inside an already-compressed container.
	Plain,
}

impl Encoding {
	/// Render the framing mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Gzip => "gzip",
			Self::Plain => "plain",
		}
	}
}

/// Runtime limits for decoding streams of unknown provenance.
///
/// A corrupt or hostile stream can declare absurd element counts or nest
/// compounds without bound; these ceilings turn both into errors before
/// any oversized allocation or stack overflow.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum compound/list nesting depth.
	pub max_depth: u32,
	/// Maximum declared element count for lists and arrays.
	pub max_array_elems: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			max_array_elems: 1 << 24,
		}
	}
}

/// Read a gzip-compressed tag file from disk.
pub fn from_file(path: impl AsRef<Path>) -> Result<TagCompound> {
	from_file_with(path, Encoding::Gzip, &DecodeOptions::default())
}

/// Read a tag file from disk with explicit framing and limits.
pub fn from_file_with(path: impl AsRef<Path>, encoding: Encoding, opt: &DecodeOptions) -> Result<TagCompound> {
	let file = File::open(path)?;
	from_reader(BufReader::new(file), encoding, opt)
}

/// Write a tag tree to disk with gzip framing.
pub fn to_file(tag: &TagCompound, path: impl AsRef<Path>) -> Result<()> {
	to_file_with(tag, path, Encoding::Gzip)
}

/// Write a tag tree to disk with explicit framing.
pub fn to_file_with(tag: &TagCompound, path: impl AsRef<Path>, encoding: Encoding) -> Result<()> {
	let file = File::create(path)?;
	let mut out = BufWriter::new(file);
	to_writer(tag, &mut out, encoding)?;
	out.flush()?;
	Ok(())
}

/// Decode one complete tag tree from a stream.
///
/// The whole tree is consumed in one call; there is no partial decode.
/// Any format or truncation error aborts the call with no result.
pub fn from_reader<R: Read>(reader: R, encoding: Encoding, opt: &DecodeOptions) -> Result<TagCompound> {
	let mut reader = reader;
	match encoding {
		Encoding::Gzip => read_root(&mut GzDecoder::new(reader), opt),
		Encoding::Plain => read_root(&mut reader, opt),
	}
}

/// Encode one complete tag tree to a stream.
pub fn to_writer<W: Write>(tag: &TagCompound, writer: W, encoding: Encoding) -> Result<()> {
	let mut writer = writer;
	match encoding {
		Encoding::Gzip => {
			let mut encoder = GzEncoder::new(writer, Compression::default());
			write_root(tag, &mut encoder)?;
			encoder.finish()?;
			Ok(())
		}
		Encoding::Plain => write_root(tag, &mut writer),
	}
}

/// Decode a tag tree from an in-memory buffer.
pub fn from_bytes(bytes: &[u8], encoding: Encoding) -> Result<TagCompound> {
	from_reader(bytes, encoding, &DecodeOptions::default())
}

/// Encode a tag tree into an in-memory buffer.
pub fn to_bytes(tag: &TagCompound, encoding: Encoding) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	to_writer(tag, &mut out, encoding)?;
	Ok(out)
}

fn read_root<R: Read>(reader: &mut R, opt: &DecodeOptions) -> Result<TagCompound> {
	let type_byte = reader.read_u8()?;
	if type_byte != TagType::Compound as u8 {
		return Err(TagError::RootNotCompound { type_byte });
	}

	// The root name is almost always empty; accept and discard any name.
	let _name = reader.read_tag_string()?;
	read_compound_body(reader, opt, 0)
}

fn read_compound_body<R: Read>(reader: &mut R, opt: &DecodeOptions, depth: u32) -> Result<TagCompound> {
	if depth >= opt.max_depth {
		return Err(TagError::DepthLimitExceeded { max_depth: opt.max_depth });
	}

	let mut compound = TagCompound::new();
	loop {
		let type_byte = reader.read_u8()?;
		let Some(tag_type) = TagType::from_byte(type_byte) else {
			return Err(TagError::UnknownTagType { type_byte });
		};
		if tag_type == TagType::End {
			return Ok(compound);
		}

		let name = reader.read_tag_string()?;
		let value = read_payload(reader, tag_type, opt, depth)?;
		compound.set(name, value);
	}
}

fn read_payload<R: Read>(reader: &mut R, tag_type: TagType, opt: &DecodeOptions, depth: u32) -> Result<TagValue> {
	match tag_type {
		// End carries no payload and is only legal as a compound
		// terminator or an empty list's element type.
		TagType::End => Err(TagError::UnknownTagType { type_byte: 0 }),
		TagType::Byte => Ok(TagValue::Byte(reader.read_u8()?)),
		TagType::Short => Ok(TagValue::Short(reader.read_i16::<BigEndian>()?)),
		TagType::Int => Ok(TagValue::Int(reader.read_i32::<BigEndian>()?)),
		TagType::Long => Ok(TagValue::Long(reader.read_i64::<BigEndian>()?)),
		TagType::Float => Ok(TagValue::Float(reader.read_f32::<BigEndian>()?)),
		TagType::Double => Ok(TagValue::Double(reader.read_f64::<BigEndian>()?)),
		TagType::ByteArray => {
			let len = read_count(reader, "byte array", opt)?;
			let mut buf = vec![0_u8; len];
			reader.read_exact(&mut buf)?;
			Ok(TagValue::ByteArray(buf))
		}
		TagType::String => Ok(TagValue::String(reader.read_tag_string()?)),
		TagType::List => read_list(reader, opt, depth),
		TagType::Compound => Ok(TagValue::Compound(read_compound_body(reader, opt, depth + 1)?)),
		TagType::IntArray => {
			let len = read_count(reader, "int array", opt)?;
			let mut values = Vec::with_capacity(len);
			for _ in 0..len {
				values.push(reader.read_i32::<BigEndian>()?);
			}
			Ok(TagValue::IntArray(values))
		}
	}
}

fn read_list<R: Read>(reader: &mut R, opt: &DecodeOptions, depth: u32) -> Result<TagValue> {
	if depth >= opt.max_depth {
		return Err(TagError::DepthLimitExceeded { max_depth: opt.max_depth });
	}

	let elem_byte = reader.read_u8()?;
	let Some(elem_type) = TagType::from_byte(elem_byte) else {
		return Err(TagError::UnknownTagType { type_byte: elem_byte });
	};
	let count = read_count(reader, "list", opt)?;

	if elem_type == TagType::End {
		// Empty lists carry element type End; a nonzero count with no
		// element type is malformed.
		if count == 0 {
			return Ok(TagValue::List(Vec::new()));
		}
		return Err(TagError::UnknownTagType { type_byte: 0 });
	}

	let mut elems = Vec::with_capacity(count);
	for _ in 0..count {
		elems.push(read_payload(reader, elem_type, opt, depth + 1)?);
	}
	Ok(TagValue::List(elems))
}

fn read_count<R: Read>(reader: &mut R, kind: &'static str, opt: &DecodeOptions) -> Result<usize> {
	let len = reader.read_i32::<BigEndian>()?;
	if len < 0 {
		return Err(TagError::NegativeLength { kind, len });
	}

	let count = len as usize;
	if count > opt.max_array_elems {
		return Err(TagError::ElementCountTooLarge {
			kind,
			count,
			max: opt.max_array_elems,
		});
	}
	Ok(count)
}

fn write_root<W: Write>(tag: &TagCompound, writer: &mut W) -> Result<()> {
	writer.write_u8(TagType::Compound as u8)?;
	writer.write_tag_string("")?;
	write_compound_body(tag, writer)
}

fn write_compound_body<W: Write>(tag: &TagCompound, writer: &mut W) -> Result<()> {
	for (name, value) in tag.iter() {
		writer.write_u8(value.wire_type() as u8)?;
		writer.write_tag_string(name)?;
		write_payload(value, writer)?;
	}
	writer.write_u8(TagType::End as u8)?;
	Ok(())
}

fn write_payload<W: Write>(value: &TagValue, writer: &mut W) -> Result<()> {
	match value {
		TagValue::Byte(v) => writer.write_u8(*v)?,
		TagValue::Short(v) => writer.write_i16::<BigEndian>(*v)?,
		TagValue::Int(v) => writer.write_i32::<BigEndian>(*v)?,
		TagValue::Long(v) => writer.write_i64::<BigEndian>(*v)?,
		TagValue::Float(v) => writer.write_f32::<BigEndian>(*v)?,
		TagValue::Double(v) => writer.write_f64::<BigEndian>(*v)?,
		TagValue::ByteArray(bytes) => {
			write_count(writer, "byte array", bytes.len())?;
			writer.write_all(bytes)?;
		}
		TagValue::String(s) => writer.write_tag_string(s)?,
		TagValue::List(elems) => write_list(elems, writer)?,
		TagValue::Compound(nested) => write_compound_body(nested, writer)?,
		TagValue::IntArray(values) => {
			write_count(writer, "int array", values.len())?;
			for v in values {
				writer.write_i32::<BigEndian>(*v)?;
			}
		}
	}
	Ok(())
}

fn write_list<W: Write>(elems: &[TagValue], writer: &mut W) -> Result<()> {
	let Some(first) = elems.first() else {
		writer.write_u8(TagType::End as u8)?;
		writer.write_i32::<BigEndian>(0)?;
		return Ok(());
	};

	// The first element fixes the list's wire type. Validate the rest
	// before emitting the header, so a mixed list fails the write without
	// leaving a partial list on the stream.
	let elem_type = first.wire_type();
	for elem in elems {
		let got = elem.wire_type();
		if got != elem_type {
			return Err(TagError::MixedList {
				expected: elem_type.as_str(),
				got: got.as_str(),
			});
		}
	}

	writer.write_u8(elem_type as u8)?;
	write_count(writer, "list", elems.len())?;
	for elem in elems {
		write_payload(elem, writer)?;
	}
	Ok(())
}

fn write_count<W: Write>(writer: &mut W, kind: &'static str, len: usize) -> Result<()> {
	let count = i32::try_from(len).map_err(|_| TagError::LengthOverflow { kind, len })?;
	writer.write_i32::<BigEndian>(count)?;
	Ok(())
}
