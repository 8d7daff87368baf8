// src/internal/fixtures/mod.rs

pub mod loader;
pub mod rotation;
pub mod types;

pub use loader::FixtureLoader;
pub use rotation::{rotation_index, Clock, SystemClock};
pub use types::{Fixture, FixtureError, FixtureLoadError, FixtureSet};

#[cfg(any(test, feature = "test-utils"))]
pub use rotation::FixedClock;
