//! Enable-gated duration timer.
//!
//! ```text
//!   IDLE ──[enable]──▶ TIMING
//!    ▲  ⟲ [!enable]      │  ⟲ [enable]
//!    └─────[!enable]─────┘
//! ```
//!
//! While Idle the start timestamp is rebased to the current clock reading
//! every tick, so `elapsed` reads 0 and the interval restarts from scratch
//! each time `enable` is raised.  While Timing, `elapsed` is the wrapping
//! difference between now and the start, so a single wrap of the 32-bit
//! clock is harmless as long as the duration is shorter than the wrap
//! period.
//!
//! The same machine serves both resolutions; [`CoarseTimer`] reads the
//! millisecond clock and [`FineTimer`] the microsecond clock.

use core::marker::PhantomData;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::{Label, TimerConfig};
use crate::ports::{Clock, Micros, Millis, Resolution, TimeUnit};
use crate::telemetry::TimerSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TimerState {
    Idle = 0,
    Timing = 1,
}

impl TimerState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Timing => "Timing",
        }
    }
}

/// Pure transition function.  The state follows `enable` directly; the
/// rows are spelled out so the table reads the same as the counter's.
#[allow(clippy::match_same_arms)]
pub fn next_state(state: TimerState, enable: bool) -> TimerState {
    match (state, enable) {
        (TimerState::Idle, true) => TimerState::Timing,
        (TimerState::Idle, false) => TimerState::Idle,
        (TimerState::Timing, true) => TimerState::Timing,
        (TimerState::Timing, false) => TimerState::Idle,
    }
}

/// Millisecond timer.
pub type CoarseTimer<C> = Timer<C, Millis>;

/// Microsecond timer, for short or precise intervals.
pub type FineTimer<C> = Timer<C, Micros>;

/// Duration timer over clock `C` at resolution `R`.
#[derive(Debug, Clone)]
pub struct Timer<C, R> {
    clock: C,
    label: Label,
    duration: u32,
    state: TimerState,
    start: u32,
    elapsed: u32,
    duration_reached: bool,
    _resolution: PhantomData<R>,
}

impl<C: Clock, R: Resolution> Timer<C, R> {
    /// Timer with a generic label.  Reads the clock once to seed the start.
    pub fn new(duration: u32, clock: C) -> Self {
        Self::from_config(
            &TimerConfig {
                duration,
                ..TimerConfig::default()
            },
            clock,
        )
    }

    pub fn from_config(config: &TimerConfig, clock: C) -> Self {
        config.warn_if_trivial();
        let start = R::now(&clock);
        Self {
            clock,
            label: config.label.clone(),
            duration: config.duration,
            state: TimerState::Idle,
            start,
            elapsed: 0,
            duration_reached: config.duration == 0,
            _resolution: PhantomData,
        }
    }

    /// Advance one tick, reading the injected clock.
    pub fn update(&mut self, enable: bool) {
        let now = R::now(&self.clock);
        self.update_at(enable, now);
    }

    /// Advance one tick with a clock reading the host already sampled.
    pub fn update_at(&mut self, enable: bool, now: u32) {
        let next = next_state(self.state, enable);
        if next != self.state {
            debug!("{}: {} -> {}", self.label, self.state.name(), next.name());
            self.state = next;
        }

        if self.state == TimerState::Idle {
            self.start = now;
        }
        self.elapsed = now.wrapping_sub(self.start);

        let reached = self.elapsed >= self.duration;
        if reached && !self.duration_reached {
            info!(
                "{}: {}{} elapsed, duration reached",
                self.label,
                self.elapsed,
                R::UNIT.suffix()
            );
        }
        self.duration_reached = reached;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Configured duration, in [`unit`](Self::unit)s.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// `elapsed >= duration`, as of the last tick.
    pub fn duration_reached(&self) -> bool {
        self.duration_reached
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn unit(&self) -> TimeUnit {
        R::UNIT
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            label: self.label.clone(),
            state: self.state,
            elapsed: self.elapsed,
            duration: self.duration,
            duration_reached: self.duration_reached,
            unit: R::UNIT,
        }
    }
}
