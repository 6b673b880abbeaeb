//! File-system integration tests
//!
//! Round-trips real files through the files and xml modules inside
//! temporary directories: JSON persistence, log appending, BOM
//! handling, directory discovery and XML config loading.

use std::fs;

use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use webutils::files::{
	FileFinder, append_line, line_count, load_json, mime_of, read_first_lines, relative_to,
	save_json,
};
use webutils::xml::{XmlOptions, load_file_with};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
	name: String,
	tags: Vec<String>,
}

#[test]
fn test_saved_json_is_discoverable_and_loads_back() {
	let dir = TempDir::new().unwrap();
	let exports = dir.path().join("exports");
	fs::create_dir(&exports).unwrap();

	let profile = Profile { name: "ada".to_string(), tags: vec!["admin".to_string()] };
	save_json(exports.join("ada.json"), &profile, true).unwrap();
	save_json(exports.join("bob.json"), &Profile { name: "bob".to_string(), tags: vec![] }, false)
		.unwrap();

	let found = FileFinder::new(&exports).extension("json").paths().unwrap();
	assert_eq!(found.len(), 2);
	assert!(found.windows(2).all(|w| w[0] <= w[1]));

	let loaded: Profile = load_json(&found[0]).unwrap();
	assert_eq!(loaded, profile);

	for path in &found {
		assert_eq!(mime_of(path), "application/json");
		let below = relative_to(path, dir.path()).unwrap();
		assert!(below.starts_with("exports"));
	}
}

#[test]
fn test_append_only_log_reads_back_in_order() {
	let dir = TempDir::new().unwrap();
	let log = dir.path().join("audit.log");

	for event in ["login ada", "logout ada", "login bob"] {
		append_line(&log, event).unwrap();
	}

	assert_eq!(line_count(&log).unwrap(), 3);
	assert_eq!(read_first_lines(&log, 2).unwrap(), vec!["login ada", "logout ada"]);
}

#[test]
fn test_handler_discovery_by_type_name() {
	// Test: a handlers/ directory maps to PascalCase candidates
	let dir = TempDir::new().unwrap();
	for name in ["user_profile.rs", "order_history.rs", "mod.rs"] {
		fs::write(dir.path().join(name), "").unwrap();
	}

	let types = FileFinder::new(dir.path())
		.extension("rs")
		.pattern("*_*.rs")
		.unwrap()
		.type_names()
		.unwrap();
	assert_eq!(types, vec!["OrderHistory", "UserProfile"]);
}

#[test]
fn test_xml_config_with_bom_loads_typed_values() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("app.xml");
	let mut contents = Vec::from(&b"\xEF\xBB\xBF"[..]);
	contents.extend_from_slice(
		b"<app><debug>true</debug><workers>4</workers><workers>8</workers></app>",
	);
	fs::write(&path, contents).unwrap();

	let options = XmlOptions::builder().parse_numbers(true).parse_booleans(true).build();
	let value = load_file_with(&path, &options).unwrap();

	assert_eq!(value["app"]["debug"]["#text"], serde_json::json!(true));
	let workers = value["app"]["workers"].as_array().unwrap();
	assert_eq!(workers[0]["#text"], serde_json::json!(4));
	assert_eq!(workers[1]["#text"], serde_json::json!(8));
}

#[test]
fn test_json_errors_name_the_offending_file() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("broken.json");
	fs::write(&path, "{not json").unwrap();

	let err = load_json::<Profile>(&path).unwrap_err();
	assert!(err.to_string().contains("broken.json"));
}
