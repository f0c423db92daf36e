//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter driven by
//! the external scheduler.  Every duration in the framework (observation
//! cadence, dissemination windows, neighbor-table timeouts, random-walk
//! phases) is expressed in ticks, so all schedule arithmetic is exact integer
//! math and comparisons are O(1).
//!
//! `SimClock` holds the tick-to-seconds mapping for configuration defaults
//! and human-readable run summaries.  The default rate is 32 ticks per
//! simulated second, matching the controller cadence the framework's
//! durations were tuned against.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at 32 ticks/second a u64 lasts ~18 billion years, so
/// wraparound is never a concern for any conceivable trial length.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many ticks one simulated second spans.  Default: 32.
    pub ticks_per_sec: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Default tick rate, ticks per simulated second.
    pub const DEFAULT_TICKS_PER_SEC: u32 = 32;

    /// Create a clock at tick 0 with the given resolution.
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ticks_per_sec,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0 (truncating).
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 / self.ticks_per_sec as u64
    }

    /// How many ticks span `secs` simulated seconds.
    #[inline]
    pub fn ticks_for_secs(&self, secs: u64) -> u64 {
        secs * self.ticks_per_sec as u64
    }

    /// Break elapsed time into (hours, minutes, seconds) from sim start.
    /// Useful for human-readable run summaries without a datetime library.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total_secs = self.elapsed_secs();
        let hours = total_secs / 3_600;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        let seconds = (total_secs % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TICKS_PER_SEC)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({:02}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}
