//! Adapters: concrete implementations at the platform boundary.
//!
//! | Adapter | Provides              | Connects to                         |
//! |---------|-----------------------|-------------------------------------|
//! | `pins`  | `CounterInputs`, bool | `embedded_hal` digital input pins   |
//! | `time`  | `Clock`               | ESP32 system timer / `std` Instant  |
//! |         |                       | manual clock for tests              |

pub mod pins;
pub mod time;
