use chrono::{Local, Timelike};

/// Source of the current minute of the hour (0-59)
pub trait Clock: Send + Sync {
    fn minute_of_hour(&self) -> u32;
}

/// Wall clock in the server's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn minute_of_hour(&self) -> u32 {
        Local::now().minute()
    }
}

/// Index of the fixture to serve at `minute` out of `len` fixtures.
///
/// Cycles through `0..len` and restarts at minute 0 of every hour.
/// `len` must be non-zero.
pub fn rotation_index(minute: u32, len: usize) -> usize {
    minute as usize % len
}

#[cfg(any(test, feature = "test-utils"))]
pub use fixed::FixedClock;

#[cfg(any(test, feature = "test-utils"))]
mod fixed {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::Clock;

    /// Test clock whose minute is set by hand
    #[derive(Debug, Default)]
    pub struct FixedClock {
        minute: AtomicU32,
    }

    impl FixedClock {
        pub fn new(minute: u32) -> Self {
            Self {
                minute: AtomicU32::new(minute),
            }
        }

        pub fn set_minute(&self, minute: u32) {
            self.minute.store(minute, Ordering::SeqCst);
        }
    }

    impl Clock for FixedClock {
        fn minute_of_hour(&self) -> u32 {
            self.minute.load(Ordering::SeqCst)
        }
    }
}
