//! tickfsm library.
//!
//! Finite-state-machine building blocks for periodically polled control
//! loops: an up/down counter stepped by rising edges ([`EdgeCounter`]) and
//! enable-gated duration timers on a millisecond ([`CoarseTimer`]) or
//! microsecond ([`FineTimer`]) clock.
//!
//! Instances are built once and advanced once per control cycle by the
//! host loop.  Outputs are read back through accessors after each
//! `update`.  Time comes from an injected [`Clock`], never from a global.
//!
//! ```
//! use tickfsm::adapters::time::ManualClock;
//! use tickfsm::{CoarseTimer, EdgeCounter};
//!
//! let clock = ManualClock::new();
//! let mut parts = EdgeCounter::new(2);
//! let mut dwell = CoarseTimer::new(100, &clock);
//!
//! for tick in 0..20u32 {
//!     clock.advance_ms(10);
//!     parts.update(tick % 4 == 0, false, false);
//!     dwell.update(parts.threshold_reached());
//! }
//!
//! assert!(parts.threshold_reached());
//! assert!(dwell.duration_reached());
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod fsm;
pub mod ports;
pub mod telemetry;

pub use error::{Error, Result};
pub use fsm::{CoarseTimer, EdgeCounter, FineTimer};
pub use ports::Clock;
