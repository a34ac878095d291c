//! Telemetry snapshots.
//!
//! Point-in-time copies of a machine's observable attributes, for logging
//! or shipping off-device.  [`encode_frame`] packs one into a caller
//! buffer with `postcard`, so a control loop can emit frames without
//! allocating.

use serde::{Deserialize, Serialize};

use crate::config::Label;
use crate::error::EncodeError;
use crate::fsm::{CounterState, TimerState};
use crate::ports::TimeUnit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub label: Label,
    pub state: CounterState,
    pub count: u32,
    pub preset: i32,
    pub threshold_reached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub label: Label,
    pub state: TimerState,
    pub elapsed: u32,
    pub duration: u32,
    pub duration_reached: bool,
    pub unit: TimeUnit,
}

/// Encode `snapshot` into `buf`, returning the used prefix.
pub fn encode_frame<'a, T: Serialize>(
    snapshot: &T,
    buf: &'a mut [u8],
) -> Result<&'a mut [u8], EncodeError> {
    postcard::to_slice(snapshot, buf).map_err(|e| match e {
        postcard::Error::SerializeBufferFull => EncodeError::BufferTooSmall,
        _ => EncodeError::Serialize,
    })
}
