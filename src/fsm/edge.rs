//! Rising-edge detection on a sampled boolean.

/// Remembers the previous raw level of one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RisingEdge {
    previous: bool,
}

impl RisingEdge {
    pub const fn new() -> Self {
        Self { previous: false }
    }

    /// True when the input is high now and was low on the previous call.
    /// Always stores the raw level, never the edge.
    pub fn detect(&mut self, level: bool) -> bool {
        let edge = level && !self.previous;
        self.previous = level;
        edge
    }

    /// Level seen on the previous call.
    pub fn previous(&self) -> bool {
        self.previous
    }
}
