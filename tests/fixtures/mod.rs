//! Shared helpers for building fixture directories and in-memory sets
#![allow(dead_code)]

use mockify::internal::fixtures::FixtureSet;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const FIXTURE_COUNT: usize = 5;

/// Mock search payload for 1-based `position`
pub fn sample_fixture(position: usize) -> Value {
    json!({
        "query": format!("query-{}", position),
        "total": position,
        "results": [{ "id": position, "title": format!("Result {}", position) }]
    })
}

pub fn sample_set() -> FixtureSet {
    FixtureSet::new((1..=FIXTURE_COUNT).map(sample_fixture).collect())
        .expect("sample set is not empty")
}

/// Temp directory holding `1.json` .. `count.json`
pub fn fixture_dir(count: usize) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for position in 1..=count {
        write_fixture(dir.path(), position, &sample_fixture(position).to_string());
    }
    dir
}

pub fn write_fixture(dir: &Path, position: usize, content: &str) {
    fs::write(dir.join(format!("{}.json", position)), content)
        .expect("Failed to write fixture file");
}

pub fn remove_fixture(dir: &Path, position: usize) {
    fs::remove_file(dir.join(format!("{}.json", position)))
        .expect("Failed to remove fixture file");
}
