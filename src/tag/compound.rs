use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::tag::TagValue;

static EMPTY: LazyLock<TagCompound> = LazyLock::new(TagCompound::new);

/// Ordered map of named, dynamically-typed tag values.
///
/// Keys are unique; setting an existing key overwrites the prior value.
/// Iteration follows insertion order, so encoding the same tree twice
/// produces identical bytes.
///
/// The typed getters are deliberately tolerant: producer schemas drift
/// across versions, so an absent or differently-typed key yields the
/// requested type's default instead of an error. Numeric getters widen
/// (a stored `Int` is readable as a `Long`) but never narrow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagCompound {
	entries: IndexMap<String, TagValue>,
}

impl TagCompound {
	/// Create an empty compound.
	pub fn new() -> Self {
		Self { entries: IndexMap::new() }
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the compound holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Whether a key is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Raw tag lookup, for callers that need to distinguish absence.
	pub fn get(&self, key: &str) -> Option<&TagValue> {
		self.entries.get(key)
	}

	/// Insert or overwrite an entry.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<TagValue>) {
		self.entries.insert(key.into(), value.into());
	}

	/// Insert or overwrite on `Some`, remove the key on `None`.
	pub fn set_opt(&mut self, key: impl Into<String>, value: Option<TagValue>) {
		match value {
			Some(value) => self.set(key, value),
			None => {
				self.remove(&key.into());
			}
		}
	}

	/// Remove an entry, preserving the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<TagValue> {
		self.entries.shift_remove(key)
	}

	/// Remove all entries.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Stored `Byte`, or 0.
	pub fn get_byte(&self, key: &str) -> u8 {
		match self.get(key) {
			Some(TagValue::Byte(v)) => *v,
			_ => 0,
		}
	}

	/// Stored `Byte` or `Short` widened, or 0.
	pub fn get_short(&self, key: &str) -> i16 {
		match self.get(key) {
			Some(TagValue::Byte(v)) => i16::from(*v),
			Some(TagValue::Short(v)) => *v,
			_ => 0,
		}
	}

	/// Stored `Byte`, `Short`, or `Int` widened, or 0.
	pub fn get_int(&self, key: &str) -> i32 {
		match self.get(key) {
			Some(TagValue::Byte(v)) => i32::from(*v),
			Some(TagValue::Short(v)) => i32::from(*v),
			Some(TagValue::Int(v)) => *v,
			_ => 0,
		}
	}

	/// Any stored integer variant widened to `i64`, or 0.
	pub fn get_long(&self, key: &str) -> i64 {
		self.get(key).and_then(TagValue::as_i64).unwrap_or(0)
	}

	/// Stored `Float`, or 0.0. A stored `Double` is refused rather than
	/// narrowed.
	pub fn get_float(&self, key: &str) -> f32 {
		match self.get(key) {
			Some(TagValue::Float(v)) => *v,
			_ => 0.0,
		}
	}

	/// Stored `Float`, `Double`, or integer variant widened to `f64`, or
	/// 0.0. A `Long` too large to represent exactly is refused rather
	/// than rounded.
	pub fn get_double(&self, key: &str) -> f64 {
		self.get(key).and_then(TagValue::as_f64).unwrap_or(0.0)
	}

	/// Stored `Byte` interpreted as a boolean (nonzero = true); any other
	/// stored type is `false`.
	pub fn get_bool(&self, key: &str) -> bool {
		match self.get(key) {
			Some(TagValue::Byte(v)) => *v != 0,
			_ => false,
		}
	}

	/// Stored string, or the empty string.
	pub fn get_string(&self, key: &str) -> &str {
		match self.get(key) {
			Some(TagValue::String(v)) => v,
			_ => "",
		}
	}

	/// Stored byte array, or an empty slice.
	pub fn get_byte_array(&self, key: &str) -> &[u8] {
		match self.get(key) {
			Some(TagValue::ByteArray(v)) => v,
			_ => &[],
		}
	}

	/// Stored int array, or an empty slice.
	pub fn get_int_array(&self, key: &str) -> &[i32] {
		match self.get(key) {
			Some(TagValue::IntArray(v)) => v,
			_ => &[],
		}
	}

	/// Stored list elements, or an empty slice.
	pub fn get_list(&self, key: &str) -> &[TagValue] {
		match self.get(key) {
			Some(TagValue::List(v)) => v,
			_ => &[],
		}
	}

	/// Nested compound, or a shared empty compound when absent or of a
	/// different type. Never fails, so nested paths need no null checks.
	pub fn get_compound(&self, key: &str) -> &TagCompound {
		match self.get(key) {
			Some(TagValue::Compound(v)) => v,
			_ => &EMPTY,
		}
	}

	/// Stored list converted element-wise to `i32`, substituting 0 for
	/// elements that are not `Byte`/`Short`/`Int`.
	pub fn get_int_list(&self, key: &str) -> Vec<i32> {
		self.get_list(key)
			.iter()
			.map(|elem| match elem {
				TagValue::Byte(v) => i32::from(*v),
				TagValue::Short(v) => i32::from(*v),
				TagValue::Int(v) => *v,
				_ => 0,
			})
			.collect()
	}

	/// Stored list converted element-wise to `i64`, substituting 0 for
	/// non-integer elements.
	pub fn get_long_list(&self, key: &str) -> Vec<i64> {
		self.get_list(key)
			.iter()
			.map(|elem| elem.as_i64().unwrap_or(0))
			.collect()
	}

	/// Stored list converted element-wise to owned strings, substituting
	/// the empty string for non-string elements.
	pub fn get_string_list(&self, key: &str) -> Vec<String> {
		self.get_list(key)
			.iter()
			.map(|elem| match elem {
				TagValue::String(v) => v.clone(),
				_ => String::new(),
			})
			.collect()
	}

	/// Stored list converted element-wise to compounds, substituting an
	/// empty compound for non-compound elements.
	pub fn get_compound_list(&self, key: &str) -> Vec<TagCompound> {
		self.get_list(key)
			.iter()
			.map(|elem| match elem {
				TagValue::Compound(v) => v.clone(),
				_ => TagCompound::new(),
			})
			.collect()
	}
}

#[cfg(test)]
mod tests;
