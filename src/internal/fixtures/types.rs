use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// A pre-authored mock payload. Its schema is up to the fixture author.
pub type Fixture = Value;

/// FixtureSet is the ordered, immutable collection of loaded fixtures.
///
/// Position `i` holds the document read from `(i + 1).json`. A set always
/// holds at least one fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    fixtures: Vec<Fixture>,
}

impl FixtureSet {
    pub fn new(fixtures: Vec<Fixture>) -> Result<Self, FixtureLoadError> {
        if fixtures.is_empty() {
            return Err(FixtureLoadError::NoFixtures);
        }
        Ok(Self { fixtures })
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Fixture> {
        self.fixtures.get(index)
    }

    /// Select the fixture for the given minute of the hour
    pub fn select(&self, minute: u32) -> &Fixture {
        &self.fixtures[super::rotation_index(minute, self.fixtures.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter()
    }
}

/// Failure to load a single fixture file
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("fixture file not found: {}", .path.display())]
    Missing { path: PathBuf },
    #[error("failed to read fixture file {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },
    #[error("invalid JSON in fixture file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl FixtureError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Missing { path }
            | Self::Unreadable { path, .. }
            | Self::Malformed { path, .. } => path.as_path(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureLoadError {
    #[error("fixture count must be at least 1")]
    NoFixtures,
    #[error("{} fixture file(s) failed to load: {}", .0.len(), summarize(.0))]
    Failed(Vec<FixtureError>),
}

fn summarize(errors: &[FixtureError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
