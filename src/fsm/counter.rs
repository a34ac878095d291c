//! Rising-edge up/down counter.
//!
//! ```text
//!          [up edge only]                    [next tick]
//!   IDLE ─────────────────────▶ COUNTING_UP ──────────────┐
//!    │ ▲ ──[down edge only]──▶ COUNTING_DOWN ─────────────┤
//!    │ │                              │ [reset]*          │ [reset]
//!    │ │                              ▼                   ▼
//!    │ └──────[reset released]─── RESETTING ◀─────────────┘
//!    └─────────────[reset]────────────▲   ⟲ [reset held]
//!
//!  IDLE also returns to itself when up and down edges arrive together.
//!  * CountingDown + reset follows the configured [`DownResetRule`].
//! ```
//!
//! CountingUp and CountingDown are one-tick pulse states: the count moves
//! on the tick the edge is seen and the machine is back in Idle on the
//! next one.  Outputs are evaluated from the state *after* the transition.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::edge::RisingEdge;
use crate::config::{CounterConfig, Label};
use crate::telemetry::CounterSnapshot;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CounterState {
    Idle = 0,
    CountingUp = 1,
    CountingDown = 2,
    Resetting = 3,
}

impl CounterState {
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Idle,
        Self::CountingUp,
        Self::CountingDown,
        Self::Resetting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::CountingUp => "CountingUp",
            Self::CountingDown => "CountingDown",
            Self::Resetting => "Resetting",
        }
    }
}

/// How a reset asserted during a CountingDown tick is handled.
///
/// The historical controller guarded this transition with the CountingUp
/// flag, so a reset arriving on a decrement tick fell through to Idle and
/// was only acted on one tick later.  `Legacy` reproduces that; `Reset`
/// treats it like every other reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownResetRule {
    /// CountingDown + reset → Resetting.
    #[default]
    Reset,
    /// CountingDown + reset → Idle; Resetting is entered on the next tick.
    Legacy,
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Raw input levels for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterInputs {
    pub up: bool,
    pub down: bool,
    pub reset: bool,
}

impl CounterInputs {
    pub const fn new(up: bool, down: bool, reset: bool) -> Self {
        Self { up, down, reset }
    }
}

/// Rising edges derived from [`CounterInputs`] this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub up: bool,
    pub down: bool,
}

// ---------------------------------------------------------------------------
// Transition table and output function
// ---------------------------------------------------------------------------

/// Pure transition function.  One arm per table row.
pub fn next_state(
    state: CounterState,
    edges: Edges,
    reset: bool,
    rule: DownResetRule,
) -> CounterState {
    use CounterState::{CountingDown, CountingUp, Idle, Resetting};

    match state {
        // Reset needs no edge and beats any pending edge.
        Idle if reset => Resetting,
        Idle if edges.up && !edges.down => CountingUp,
        Idle if edges.down && !edges.up => CountingDown,
        // No edge, or opposite edges cancelling out.
        Idle => Idle,

        CountingUp if reset => Resetting,
        CountingUp => Idle,

        CountingDown if reset => match rule {
            DownResetRule::Reset => Resetting,
            DownResetRule::Legacy => Idle,
        },
        CountingDown => Idle,

        Resetting if reset => Resetting,
        Resetting => Idle,
    }
}

/// Count after entering `state`.  Saturates at both ends.
pub fn apply_output(state: CounterState, count: u32) -> u32 {
    match state {
        CounterState::CountingUp => count.saturating_add(1),
        CounterState::CountingDown => count.saturating_sub(1),
        CounterState::Resetting => 0,
        CounterState::Idle => count,
    }
}

fn at_or_above(count: u32, preset: i32) -> bool {
    i64::from(count) >= i64::from(preset)
}

// ---------------------------------------------------------------------------
// EdgeCounter
// ---------------------------------------------------------------------------

/// Up/down counter stepped by rising edges, with a level-sensitive reset.
#[derive(Debug, Clone)]
pub struct EdgeCounter {
    label: Label,
    preset: i32,
    rule: DownResetRule,
    state: CounterState,
    count: u32,
    threshold_reached: bool,
    up: RisingEdge,
    down: RisingEdge,
}

impl EdgeCounter {
    /// Counter with the default reset rule and a generic label.
    pub fn new(preset: i32) -> Self {
        Self::from_config(&CounterConfig {
            preset,
            ..CounterConfig::default()
        })
    }

    pub fn from_config(config: &CounterConfig) -> Self {
        config.warn_if_trivial();
        Self {
            label: config.label.clone(),
            preset: config.preset,
            rule: config.down_reset,
            state: CounterState::Idle,
            count: 0,
            threshold_reached: at_or_above(0, config.preset),
            up: RisingEdge::new(),
            down: RisingEdge::new(),
        }
    }

    /// Advance one tick.
    pub fn update(&mut self, up: bool, down: bool, reset: bool) {
        let edges = Edges {
            up: self.up.detect(up),
            down: self.down.detect(down),
        };

        let next = next_state(self.state, edges, reset, self.rule);
        if next != self.state {
            debug!("{}: {} -> {}", self.label, self.state.name(), next.name());
            self.state = next;
        }

        self.count = apply_output(self.state, self.count);

        let reached = at_or_above(self.count, self.preset);
        if reached != self.threshold_reached {
            info!(
                "{}: threshold {} (count={}, preset={})",
                self.label,
                if reached { "reached" } else { "cleared" },
                self.count,
                self.preset
            );
            self.threshold_reached = reached;
        }
    }

    /// Same as [`update`](Self::update) with inputs sampled as one struct.
    pub fn apply(&mut self, inputs: CounterInputs) {
        self.update(inputs.up, inputs.down, inputs.reset);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn preset(&self) -> i32 {
        self.preset
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// `count >= preset`, as of the last tick.
    pub fn threshold_reached(&self) -> bool {
        self.threshold_reached
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn down_reset_rule(&self) -> DownResetRule {
        self.rule
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            label: self.label.clone(),
            state: self.state,
            count: self.count,
            preset: self.preset,
            threshold_reached: self.threshold_reached,
        }
    }
}
