//! Time-keeping for secret rotation

use std::time::Instant;

/// A type for time, measured in seconds relative to a [Timebase]
pub type Timing = f64;

/// Magic time stamp to indicate some object is ancient; "Before Common Era"
///
/// Used as the creation time of secrets that have never been rotated, so
/// they register as overdue for rotation immediately.
///
/// Using this instead of Timing::MIN or Timing::NEG_INFINITY to avoid
/// floating point math weirdness.
pub const BCE: Timing = -3600.0 * 24.0 * 356.0 * 10_000.0;

/// Monotonic clock yielding [Timing] values.
///
/// All stored timestamps are relative to one `Timebase`; the embedding
/// daemon creates it once at startup and passes it into rotation calls.
#[derive(Clone, Debug)]
pub struct Timebase(Instant);

impl Default for Timebase {
    fn default() -> Self {
        Self(Instant::now())
    }
}

impl Timebase {
    /// Seconds elapsed since this timebase was created
    pub fn now(&self) -> Timing {
        self.0.elapsed().as_secs_f64()
    }
}
