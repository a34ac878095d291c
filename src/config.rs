//! Configuration parameters
//!
//! Construction-time settings for counters and timers, plus the host
//! simulation loop.  All values are fixed once an instance is built;
//! there is no runtime reconfiguration path.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fsm::counter::DownResetRule;

/// Maximum label length in bytes.
pub const LABEL_CAPACITY: usize = 16;

/// Instance name used in log lines and telemetry.  Fixed capacity, no heap.
pub type Label = heapless::String<LABEL_CAPACITY>;

/// Build a [`Label`], truncating at the last whole character that fits.
pub fn label(name: &str) -> Label {
    let mut out = Label::new();
    for ch in name.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Edge counter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    pub label: Label,
    /// Count at or above which `threshold_reached` is set
    pub preset: i32,
    /// What a reset does while the counter is mid-decrement
    #[serde(default)]
    pub down_reset: DownResetRule,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            label: label("counter"),
            preset: 10,
            down_reset: DownResetRule::default(),
        }
    }
}

impl CounterConfig {
    pub fn new(name: &str, preset: i32) -> Self {
        Self {
            label: label(name),
            preset,
            down_reset: DownResetRule::default(),
        }
    }

    /// Log settings that are legal but almost certainly unintended.
    pub(crate) fn warn_if_trivial(&self) {
        if self.preset <= 0 {
            warn!(
                "{}: preset {} <= 0, threshold is reached from the first tick",
                self.label, self.preset
            );
        }
    }
}

/// Duration timer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub label: Label,
    /// Duration in the timer's own unit (ms for coarse, us for fine)
    pub duration: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            label: label("timer"),
            duration: 1_000,
        }
    }
}

impl TimerConfig {
    pub fn new(name: &str, duration: u32) -> Self {
        Self {
            label: label(name),
            duration,
        }
    }

    pub(crate) fn warn_if_trivial(&self) {
        if self.duration == 0 {
            warn!(
                "{}: duration 0, timer reports reached on every tick",
                self.label
            );
        }
    }
}

/// Largest `pulse_period_ticks` whose reject period still fits in a `u32`.
pub const MAX_PULSE_PERIOD_TICKS: u32 = u32::MAX / 7;

/// Host simulation settings (`tickfsm-sim`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub counter: CounterConfig,
    /// Millisecond timer
    pub coarse_timer: TimerConfig,
    /// Microsecond timer
    pub fine_timer: TimerConfig,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub tick_interval_ms: u32,
    /// Ticks to run before exiting
    pub run_ticks: u32,
    /// Scripted `up` input: one pulse every N ticks
    pub pulse_period_ticks: u32,
    /// Log a telemetry snapshot every N ticks
    pub telemetry_every: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            counter: CounterConfig::new("parts", 5),
            coarse_timer: TimerConfig::new("dwell", 500),
            fine_timer: TimerConfig::new("strobe", 2_500),

            tick_interval_ms: 10, // 100 Hz
            run_ticks: 300,
            pulse_period_ticks: 20,
            telemetry_every: 50,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.  Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_interval_ms must be > 0"));
        }
        if self.telemetry_every == 0 {
            return Err(ConfigError::ValidationFailed("telemetry_every must be > 0"));
        }
        // A pulse needs at least one low tick between highs to produce an edge.
        if self.pulse_period_ticks < 2 {
            return Err(ConfigError::ValidationFailed("pulse_period_ticks must be >= 2"));
        }
        // The reject pulse repeats every seventh period.
        if self.pulse_period_ticks > MAX_PULSE_PERIOD_TICKS {
            return Err(ConfigError::ValidationFailed("pulse_period_ticks too large"));
        }
        Ok(())
    }
}
