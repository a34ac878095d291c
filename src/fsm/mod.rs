//! Tick-driven state machines.
//!
//! Each machine follows the same four-step shape on every `update` call:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ 1. condition inputs   (edge detection, clock read)       │
//! │ 2. transition table   next_state(state, inputs) -> state │
//! │ 3. commit state       (logged at debug on change)        │
//! │ 4. outputs            derived from the *new* state       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The transition tables are free functions over plain enums so they can
//! be tested row by row without constructing a machine.  The machines own
//! all their state; nothing is shared between instances, and `update`
//! takes `&mut self`, so exactly one caller advances an instance per tick.

pub mod counter;
pub mod edge;
pub mod timer;

pub use counter::{CounterInputs, CounterState, DownResetRule, EdgeCounter};
pub use edge::RisingEdge;
pub use timer::{CoarseTimer, FineTimer, Timer, TimerState};
