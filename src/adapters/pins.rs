//! Digital input adapter.
//!
//! Bridges `embedded_hal::digital::InputPin` implementations to the
//! boolean inputs the state machines consume.  Works with any HAL's pin
//! driver (ESP-IDF `PinDriver`, rp-hal, stm32 HALs, test doubles).
//!
//! Pins are sampled once per tick; no debouncing is done here.  A bouncing
//! contact will register one edge per bounce that spans a tick boundary.

use embedded_hal::digital::InputPin;

use crate::error::{InputError, PinRole};
use crate::fsm::CounterInputs;

/// One logical input on a GPIO.
pub struct DigitalInput<P> {
    pin: P,
    role: PinRole,
    active_low: bool,
}

impl<P: InputPin> DigitalInput<P> {
    /// Input that reads true when the pin is high.
    pub fn active_high(pin: P, role: PinRole) -> Self {
        Self {
            pin,
            role,
            active_low: false,
        }
    }

    /// Input that reads true when the pin is low (switch to ground with
    /// a pull-up).
    pub fn active_low(pin: P, role: PinRole) -> Self {
        Self {
            pin,
            role,
            active_low: true,
        }
    }

    /// Sample the logical level.
    pub fn read(&mut self) -> Result<bool, InputError> {
        let high = self
            .pin
            .is_high()
            .map_err(|_| InputError::PinReadFailed(self.role))?;
        Ok(high != self.active_low)
    }

    pub fn role(&self) -> PinRole {
        self.role
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

/// The three inputs of an edge counter, sampled together.
pub struct CounterPins<U, D, R> {
    pub up: DigitalInput<U>,
    pub down: DigitalInput<D>,
    pub reset: DigitalInput<R>,
}

impl<U: InputPin, D: InputPin, R: InputPin> CounterPins<U, D, R> {
    pub fn new(up: DigitalInput<U>, down: DigitalInput<D>, reset: DigitalInput<R>) -> Self {
        Self { up, down, reset }
    }

    /// Read all three pins.  Fails on the first pin that errors.
    pub fn sample(&mut self) -> Result<CounterInputs, InputError> {
        Ok(CounterInputs {
            up: self.up.read()?,
            down: self.down.read()?,
            reset: self.reset.read()?,
        })
    }
}
