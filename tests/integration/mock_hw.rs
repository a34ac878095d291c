//! Mock hardware for integration tests.
//!
//! [`MockPin`] implements `embedded_hal::digital::InputPin` over a shared
//! level cell, so a test can hand the pin to an adapter and keep flipping
//! the wire from outside.  A level of `None` makes reads fail.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

// ── MockPin ──────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockPin {
    level: Rc<Cell<Option<bool>>>,
}

#[allow(dead_code)]
impl MockPin {
    pub fn new(high: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(Some(high))),
        }
    }

    pub fn set_high(&self) {
        self.level.set(Some(true));
    }

    pub fn set_low(&self) {
        self.level.set(Some(false));
    }

    pub fn set(&self, high: bool) {
        self.level.set(Some(high));
    }

    /// Make every subsequent read fail.
    pub fn disconnect(&self) {
        self.level.set(None);
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, ErrorKind> {
        self.level.get().ok_or(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, ErrorKind> {
        self.is_high().map(|h| !h)
    }
}

// ── Scripted wire ────────────────────────────────────────────

/// Per-tick input script for a counter: `(up, down, reset)`.
#[allow(dead_code)]
pub fn script(rows: &[(u8, u8, u8)]) -> Vec<(bool, bool, bool)> {
    rows.iter()
        .map(|&(u, d, r)| (u != 0, d != 0, r != 0))
        .collect()
}
