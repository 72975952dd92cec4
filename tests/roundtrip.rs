#![allow(missing_docs)]

use std::path::PathBuf;

use bintag::tag::{DecodeOptions, Encoding, TagCompound, TagValue, from_bytes, from_file, from_file_with, to_bytes, to_file, to_file_with};

fn temp_path(name: &str) -> PathBuf {
	let mut path = std::env::temp_dir();
	path.push(format!("bintag-{}-{name}", std::process::id()));
	path
}

fn world_fixture() -> TagCompound {
	let mut spawn = TagCompound::new();
	spawn.set("x", 128_i32);
	spawn.set("y", 64_i32);

	let mut chest = TagCompound::new();
	chest.set("id", "chest");
	chest.set("slots", TagValue::IntArray(vec![0, 3, 7]));

	let mut tag = TagCompound::new();
	tag.set("formatVersion", 2_u8);
	tag.set("seed", -4_611_686_018_427_387_904_i64);
	tag.set("name", "integration world");
	tag.set("hardcore", false);
	tag.set("spawn", spawn);
	tag.set("chunkData", TagValue::ByteArray(vec![0xDE, 0xAD, 0xBE, 0xEF]));
	tag.set(
		"tileEntities",
		TagValue::List(vec![TagValue::Compound(chest)]),
	);
	tag.set("emptyList", TagValue::List(Vec::new()));
	tag
}

#[test]
fn file_round_trip_with_default_gzip_framing() {
	let path = temp_path("gzip.dat");
	let tag = world_fixture();

	to_file(&tag, &path).expect("write file");
	let back = from_file(&path).expect("read file");
	std::fs::remove_file(&path).ok();

	assert_eq!(back, tag);
}

#[test]
fn file_round_trip_with_plain_framing() {
	let path = temp_path("plain.dat");
	let tag = world_fixture();

	to_file_with(&tag, &path, Encoding::Plain).expect("write file");
	let back = from_file_with(&path, Encoding::Plain, &DecodeOptions::default()).expect("read file");
	std::fs::remove_file(&path).ok();

	assert_eq!(back, tag);
}

#[test]
fn gzip_file_bytes_start_with_the_gzip_magic() {
	let path = temp_path("magic.dat");
	to_file(&world_fixture(), &path).expect("write file");
	let raw = std::fs::read(&path).expect("read raw bytes");
	std::fs::remove_file(&path).ok();

	assert_eq!(&raw[..2], &[0x1F, 0x8B]);
}

#[test]
fn plain_encoding_embeds_inside_another_tree() {
	// A tag tree stored uncompressed as a byte-array payload of an outer
	// compressed tree, the embedding case the plain framing exists for.
	let inner = world_fixture();
	let inner_bytes = to_bytes(&inner, Encoding::Plain).expect("encode inner");

	let mut outer = TagCompound::new();
	outer.set("embedded", TagValue::ByteArray(inner_bytes));
	let outer_bytes = to_bytes(&outer, Encoding::Gzip).expect("encode outer");

	let outer_back = from_bytes(&outer_bytes, Encoding::Gzip).expect("decode outer");
	let inner_back = from_bytes(outer_back.get_byte_array("embedded"), Encoding::Plain).expect("decode inner");
	assert_eq!(inner_back, inner);
}

#[test]
fn missing_file_surfaces_as_io_error() {
	let err = from_file(temp_path("does-not-exist.dat")).expect_err("should fail");
	assert!(matches!(err, bintag::tag::TagError::Io(_)));
}
