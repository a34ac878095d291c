//! Port traits: the boundary between the state machines and the platform.
//!
//! ```text
//!   Adapter ──▶ Clock ──▶ Timer<C, R> (domain)
//! ```
//!
//! The timers never read a process-wide timer directly.  They are handed a
//! [`Clock`] at construction, so the same code runs against the ESP-IDF
//! high-resolution timer, `std::time::Instant`, or a manually advanced test
//! clock.

use serde::{Deserialize, Serialize};

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: platform → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic time source with two resolutions.
///
/// Both readings are free-running 32-bit counters that wrap to zero on
/// overflow (~49.7 days for milliseconds, ~71.6 minutes for microseconds).
/// Consumers must only ever subtract readings with `wrapping_sub`.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch.
    fn millis(&self) -> u32;

    /// Microseconds since an arbitrary epoch.
    fn micros(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn millis(&self) -> u32 {
        (**self).millis()
    }

    fn micros(&self) -> u32 {
        (**self).micros()
    }
}

// ───────────────────────────────────────────────────────────────
// Resolution markers
// ───────────────────────────────────────────────────────────────

/// Unit a timer counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Millis,
    Micros,
}

impl TimeUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Millis => "ms",
            Self::Micros => "us",
        }
    }
}

/// Selects which reading of a [`Clock`] a timer consumes.
pub trait Resolution {
    const UNIT: TimeUnit;

    fn now<C: Clock + ?Sized>(clock: &C) -> u32;
}

/// Coarse, millisecond resolution.
#[derive(Debug, Clone, Copy)]
pub enum Millis {}

/// Fine, microsecond resolution.
#[derive(Debug, Clone, Copy)]
pub enum Micros {}

impl Resolution for Millis {
    const UNIT: TimeUnit = TimeUnit::Millis;

    fn now<C: Clock + ?Sized>(clock: &C) -> u32 {
        clock.millis()
    }
}

impl Resolution for Micros {
    const UNIT: TimeUnit = TimeUnit::Micros;

    fn now<C: Clock + ?Sized>(clock: &C) -> u32 {
        clock.micros()
    }
}
