use crate::tag::{TagCompound, TagValue};

#[test]
fn duplicate_key_overwrites_in_place() {
	let mut tag = TagCompound::new();
	tag.set("health", 20_i32);
	tag.set("mana", 50_i32);
	tag.set("health", 35_i32);

	assert_eq!(tag.len(), 2);
	assert_eq!(tag.get_int("health"), 35);
	let keys: Vec<&str> = tag.keys().collect();
	assert_eq!(keys, ["health", "mana"]);
}

#[test]
fn set_opt_none_removes_the_key() {
	let mut tag = TagCompound::new();
	tag.set("marker", 1_u8);
	assert!(tag.contains_key("marker"));

	tag.set_opt("marker", None);
	assert!(!tag.contains_key("marker"));
	assert_eq!(tag.get("marker"), None);

	tag.set_opt("marker", Some(TagValue::Byte(2)));
	assert_eq!(tag.get_byte("marker"), 2);
}

#[test]
fn iteration_follows_insertion_order() {
	let mut tag = TagCompound::new();
	tag.set("c", 1_i32);
	tag.set("a", 2_i32);
	tag.set("b", 3_i32);
	tag.remove("a");
	tag.set("a", 4_i32);

	let keys: Vec<&str> = tag.keys().collect();
	assert_eq!(keys, ["c", "b", "a"]);
}

#[test]
fn numeric_getters_widen_but_never_narrow() {
	let mut tag = TagCompound::new();
	tag.set("stored_int", 1_000_000_i32);
	tag.set("stored_long", i64::from(i32::MAX) + 1);
	tag.set("stored_byte", 7_u8);

	assert_eq!(tag.get_long("stored_int"), 1_000_000);
	assert_eq!(tag.get_int("stored_byte"), 7);
	assert_eq!(tag.get_short("stored_byte"), 7);

	// A Long does not narrow to Int even when the value would fit.
	assert_eq!(tag.get_int("stored_long"), 0);
	tag.set("small_long", 5_i64);
	assert_eq!(tag.get_int("small_long"), 0);
	assert_eq!(tag.get_long("small_long"), 5);
}

#[test]
fn double_getter_widens_stored_integers() {
	let mut tag = TagCompound::new();
	tag.set("n", 3_i32);
	tag.set("b", 7_u8);
	tag.set("big", (1_i64 << 53) + 1);

	assert_eq!(tag.get_double("n"), 3.0);
	assert_eq!(tag.get_double("b"), 7.0);
	// Inexact Long widening falls back to the default.
	assert_eq!(tag.get_double("big"), 0.0);
}

#[test]
fn float_getter_refuses_doubles() {
	let mut tag = TagCompound::new();
	tag.set("ratio", 0.5_f32);
	tag.set("precise", 0.25_f64);

	assert_eq!(tag.get_float("ratio"), 0.5);
	assert_eq!(tag.get_double("ratio"), 0.5);
	assert_eq!(tag.get_double("precise"), 0.25);
	assert_eq!(tag.get_float("precise"), 0.0);
}

#[test]
fn mismatched_getters_return_defaults_instead_of_failing() {
	let mut tag = TagCompound::new();
	tag.set("count", 42_i32);

	assert_eq!(tag.get_string("count"), "");
	assert_eq!(tag.get_byte_array("count"), &[] as &[u8]);
	assert_eq!(tag.get_int_array("count"), &[] as &[i32]);
	assert!(tag.get_list("count").is_empty());
	assert_eq!(tag.get_long("missing"), 0);
	assert_eq!(tag.get_string("missing"), "");
}

#[test]
fn bool_getter_reads_bytes_only() {
	let mut tag = TagCompound::new();
	tag.set("on", true);
	tag.set("off", false);
	tag.set("two", 2_u8);
	tag.set("not_a_byte", 1_i32);

	assert!(tag.get_bool("on"));
	assert!(!tag.get_bool("off"));
	assert!(tag.get_bool("two"));
	assert!(!tag.get_bool("not_a_byte"));
	assert!(!tag.get_bool("missing"));
}

#[test]
fn nested_compound_getter_never_fails() {
	let mut inner = TagCompound::new();
	inner.set("x", 3_i32);
	let mut tag = TagCompound::new();
	tag.set("pos", inner);
	tag.set("flat", 9_i32);

	assert_eq!(tag.get_compound("pos").get_int("x"), 3);
	assert_eq!(tag.get_compound("missing").len(), 0);
	assert_eq!(tag.get_compound("flat").len(), 0);
	// Chained lookups through absent compounds stay safe.
	assert_eq!(tag.get_compound("a").get_compound("b").get_int("c"), 0);
}

#[test]
fn element_wise_list_getters_substitute_defaults() {
	let mut tag = TagCompound::new();
	tag.set(
		"mixed",
		TagValue::List(vec![
			TagValue::Int(1),
			TagValue::String("two".into()),
			TagValue::Int(3),
		]),
	);
	tag.set(
		"names",
		TagValue::List(vec![TagValue::String("a".into()), TagValue::Int(0)]),
	);

	assert_eq!(tag.get_int_list("mixed"), [1, 0, 3]);
	assert_eq!(tag.get_long_list("mixed"), [1, 0, 3]);
	assert_eq!(tag.get_string_list("names"), ["a", ""]);
	assert!(tag.get_int_list("missing").is_empty());
}

#[test]
fn compound_list_getter_clones_elements() {
	let mut entity = TagCompound::new();
	entity.set("id", "chest");
	let mut tag = TagCompound::new();
	tag.set(
		"tileEntities",
		TagValue::List(vec![TagValue::Compound(entity), TagValue::Int(1)]),
	);

	let entities = tag.get_compound_list("tileEntities");
	assert_eq!(entities.len(), 2);
	assert_eq!(entities[0].get_string("id"), "chest");
	assert!(entities[1].is_empty());
}
