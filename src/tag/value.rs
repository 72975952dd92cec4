use crate::tag::TagCompound;

/// Wire type id preceding each tag entry.
///
/// The numeric values are a wire contract shared with the external modding
/// ecosystem and must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TagType {
	/// Compound terminator; also the element type of an empty list.
	End = 0,
	/// 8-bit unsigned integer.
	Byte = 1,
	/// 16-bit signed integer.
	Short = 2,
	/// 32-bit signed integer.
	Int = 3,
	/// 64-bit signed integer.
	Long = 4,
	/// 32-bit IEEE754 float.
	Float = 5,
	/// 64-bit IEEE754 float.
	Double = 6,
	/// Length-prefixed raw bytes.
	ByteArray = 7,
	/// Length-prefixed UTF-8 string.
	String = 8,
	/// Homogeneous ordered sequence.
	List = 9,
	/// Nested named container.
	Compound = 10,
	/// Length-prefixed sequence of 32-bit signed integers.
	IntArray = 11,
}

impl TagType {
	/// Map a wire byte to its type id, or `None` for unknown bytes.
	pub fn from_byte(byte: u8) -> Option<Self> {
		Some(match byte {
			0 => Self::End,
			1 => Self::Byte,
			2 => Self::Short,
			3 => Self::Int,
			4 => Self::Long,
			5 => Self::Float,
			6 => Self::Double,
			7 => Self::ByteArray,
			8 => Self::String,
			9 => Self::List,
			10 => Self::Compound,
			11 => Self::IntArray,
			_ => return None,
		})
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::End => "end",
			Self::Byte => "byte",
			Self::Short => "short",
			Self::Int => "int",
			Self::Long => "long",
			Self::Float => "float",
			Self::Double => "double",
			Self::ByteArray => "byte_array",
			Self::String => "string",
			Self::List => "list",
			Self::Compound => "compound",
			Self::IntArray => "int_array",
		}
	}
}

/// One typed value in a tag tree.
///
/// Values are constructed through the named variants (or the `From` impls
/// for primitives), so the variant-to-wire-type mapping is an exhaustive
/// match and a tree handed to the encoder can never carry an unencodable
/// value.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
	/// 8-bit unsigned integer; booleans are stored as 0/1.
	Byte(u8),
	/// 16-bit signed integer.
	Short(i16),
	/// 32-bit signed integer.
	Int(i32),
	/// 64-bit signed integer.
	Long(i64),
	/// 32-bit IEEE754 float.
	Float(f32),
	/// 64-bit IEEE754 float.
	Double(f64),
	/// Raw byte payload.
	ByteArray(Vec<u8>),
	/// UTF-8 string.
	String(String),
	/// Homogeneous sequence; homogeneity is enforced when encoding.
	List(Vec<TagValue>),
	/// Nested container.
	Compound(TagCompound),
	/// Sequence of 32-bit signed integers.
	IntArray(Vec<i32>),
}

impl TagValue {
	/// Wire type id for this variant.
	pub fn wire_type(&self) -> TagType {
		match self {
			Self::Byte(_) => TagType::Byte,
			Self::Short(_) => TagType::Short,
			Self::Int(_) => TagType::Int,
			Self::Long(_) => TagType::Long,
			Self::Float(_) => TagType::Float,
			Self::Double(_) => TagType::Double,
			Self::ByteArray(_) => TagType::ByteArray,
			Self::String(_) => TagType::String,
			Self::List(_) => TagType::List,
			Self::Compound(_) => TagType::Compound,
			Self::IntArray(_) => TagType::IntArray,
		}
	}

	/// Widen an integer variant to `i64`, or `None` for any other variant.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Byte(v) => Some(i64::from(*v)),
			Self::Short(v) => Some(i64::from(*v)),
			Self::Int(v) => Some(i64::from(*v)),
			Self::Long(v) => Some(*v),
			_ => None,
		}
	}

	/// Widen a float or integer variant to `f64`, or `None` for any other
	/// variant.
	///
	/// `Byte`, `Short`, and `Int` are always exact in `f64`; a `Long` is
	/// widened only when the conversion is exact, so precision is never
	/// silently lost.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Float(v) => Some(f64::from(*v)),
			Self::Double(v) => Some(*v),
			Self::Byte(v) => Some(f64::from(*v)),
			Self::Short(v) => Some(f64::from(*v)),
			Self::Int(v) => Some(f64::from(*v)),
			Self::Long(v) => {
				let widened = *v as f64;
				// i64::MAX saturates on the cast back and would compare
				// equal despite rounding to 2^63.
				if *v != i64::MAX && widened as i64 == *v {
					Some(widened)
				} else {
					None
				}
			}
			_ => None,
		}
	}
}

impl From<bool> for TagValue {
	fn from(value: bool) -> Self {
		Self::Byte(u8::from(value))
	}
}

impl From<u8> for TagValue {
	fn from(value: u8) -> Self {
		Self::Byte(value)
	}
}

impl From<i16> for TagValue {
	fn from(value: i16) -> Self {
		Self::Short(value)
	}
}

impl From<i32> for TagValue {
	fn from(value: i32) -> Self {
		Self::Int(value)
	}
}

impl From<i64> for TagValue {
	fn from(value: i64) -> Self {
		Self::Long(value)
	}
}

impl From<f32> for TagValue {
	fn from(value: f32) -> Self {
		Self::Float(value)
	}
}

impl From<f64> for TagValue {
	fn from(value: f64) -> Self {
		Self::Double(value)
	}
}

impl From<String> for TagValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<&str> for TagValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<TagCompound> for TagValue {
	fn from(value: TagCompound) -> Self {
		Self::Compound(value)
	}
}

impl From<Vec<TagValue>> for TagValue {
	fn from(value: Vec<TagValue>) -> Self {
		Self::List(value)
	}
}
