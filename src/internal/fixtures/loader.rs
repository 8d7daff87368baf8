use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::types::{Fixture, FixtureError, FixtureLoadError, FixtureSet};
use crate::internal::config::FixtureConfig;

/// FixtureLoader reads `1.json` through `N.json` from a directory
pub struct FixtureLoader {
    dir: PathBuf,
    count: usize,
}

impl FixtureLoader {
    pub fn new(dir: impl Into<PathBuf>, count: usize) -> Self {
        Self {
            dir: dir.into(),
            count,
        }
    }

    pub fn from_config(cfg: &FixtureConfig) -> Self {
        Self::new(cfg.dir.clone(), cfg.count)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the fixture at 1-based `position`
    pub fn fixture_path(&self, position: usize) -> PathBuf {
        self.dir.join(format!("{}.json", position))
    }

    /// Load every fixture in order.
    ///
    /// All files are attempted; if any of them fails, every failure is
    /// returned together and no set is produced.
    pub fn load(&self) -> Result<FixtureSet, FixtureLoadError> {
        if self.count == 0 {
            return Err(FixtureLoadError::NoFixtures);
        }

        info!(
            "Loading {} mock results from {}",
            self.count,
            self.dir.display()
        );

        let mut fixtures = Vec::with_capacity(self.count);
        let mut failures = Vec::new();

        for position in 1..=self.count {
            match self.load_one(position) {
                Ok(fixture) => fixtures.push(fixture),
                Err(e) => {
                    warn!("{}", e);
                    failures.push(e);
                }
            }
        }

        if !failures.is_empty() {
            return Err(FixtureLoadError::Failed(failures));
        }

        let set = FixtureSet::new(fixtures)?;
        info!("Loaded {} mock results", set.len());
        Ok(set)
    }

    fn load_one(&self, position: usize) -> Result<Fixture, FixtureError> {
        let path = self.fixture_path(position);

        let data = fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => FixtureError::Missing { path: path.clone() },
            _ => FixtureError::Unreadable {
                path: path.clone(),
                source,
            },
        })?;

        let fixture = serde_json::from_slice(&data)
            .map_err(|source| FixtureError::Malformed { path: path.clone(), source })?;

        debug!("Loaded fixture {}", path.display());
        Ok(fixture)
    }
}
