//! Clock adapters.
//!
//! - [`SystemClock`]: the real monotonic clock.
//!   - **`target_os = "espidf"`**: wraps `esp_timer_get_time()` from the
//!     ESP-IDF high-resolution timer (microsecond precision, monotonic).
//!   - **`not(target_os = "espidf")`**: uses `std::time::Instant`.
//! - [`ManualClock`]: a simulated clock that only moves when told to.
//!   Used by tests and by hosts replaying recorded input traces.
//!
//! Both truncate to 32 bits, so readings wrap exactly like the classic
//! microcontroller `millis()`/`micros()` counters.

use core::cell::Cell;

use crate::ports::Clock;

// ═══════════════════════════════════════════════════════════════
//  SystemClock
// ═══════════════════════════════════════════════════════════════

/// Monotonic platform clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Microseconds since boot, full width.
    #[cfg(target_os = "espidf")]
    fn uptime_us(&self) -> u64 {
        // SAFETY: esp_timer_get_time has no preconditions once the
        // esp_timer component is initialised, which happens before app_main.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    /// Microseconds since construction, full width.
    #[cfg(not(target_os = "espidf"))]
    fn uptime_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u32 {
        (self.uptime_us() / 1_000) as u32
    }

    fn micros(&self) -> u32 {
        self.uptime_us() as u32
    }
}

// ═══════════════════════════════════════════════════════════════
//  ManualClock
// ═══════════════════════════════════════════════════════════════

/// Simulated clock.  Time is a single microsecond counter; the millisecond
/// reading is derived from it so the two resolutions never disagree.
///
/// Interior mutability lets timers hold `&ManualClock` while the test
/// advances it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_us: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at an arbitrary microsecond offset (e.g. just
    /// before a 32-bit wrap).
    pub fn starting_at_us(us: u64) -> Self {
        Self {
            now_us: Cell::new(us),
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms.saturating_mul(1_000));
    }

    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get().wrapping_add(us));
    }

    pub fn set_us(&self, us: u64) {
        self.now_us.set(us);
    }

    pub fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}

impl Clock for ManualClock {
    fn millis(&self) -> u32 {
        (self.now_us.get() / 1_000) as u32
    }

    fn micros(&self) -> u32 {
        self.now_us.get() as u32
    }
}
