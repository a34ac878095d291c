//! Counter and timer fed from `embedded_hal` input pins.

use super::mock_hw::MockPin;

use tickfsm::adapters::pins::{CounterPins, DigitalInput};
use tickfsm::adapters::time::ManualClock;
use tickfsm::error::{Error, InputError, PinRole};
use tickfsm::fsm::{CoarseTimer, EdgeCounter};

struct Bench {
    up: MockPin,
    down: MockPin,
    reset: MockPin,
    pins: CounterPins<MockPin, MockPin, MockPin>,
}

/// Up/down are active-high sensors; reset is an active-low push button.
fn bench() -> Bench {
    let up = MockPin::new(false);
    let down = MockPin::new(false);
    let reset = MockPin::new(true);
    let pins = CounterPins::new(
        DigitalInput::active_high(up.clone(), PinRole::Up),
        DigitalInput::active_high(down.clone(), PinRole::Down),
        DigitalInput::active_low(reset.clone(), PinRole::Reset),
    );
    Bench {
        up,
        down,
        reset,
        pins,
    }
}

fn tick(b: &mut Bench, c: &mut EdgeCounter) -> Result<(), Error> {
    let inputs = b.pins.sample()?;
    c.apply(inputs);
    Ok(())
}

#[test]
fn pin_pulses_drive_the_counter() {
    let mut b = bench();
    let mut c = EdgeCounter::new(2);

    for _ in 0..2 {
        b.up.set_high();
        tick(&mut b, &mut c).unwrap();
        b.up.set_low();
        tick(&mut b, &mut c).unwrap();
    }
    assert_eq!(c.count(), 2);
    assert!(c.threshold_reached());

    b.down.set_high();
    tick(&mut b, &mut c).unwrap();
    assert_eq!(c.count(), 1);
}

#[test]
fn active_low_reset_button() {
    let mut b = bench();
    let mut c = EdgeCounter::new(5);
    b.up.set_high();
    tick(&mut b, &mut c).unwrap();
    assert_eq!(c.count(), 1);

    // Button pulls the line to ground.
    b.reset.set_low();
    tick(&mut b, &mut c).unwrap();
    assert_eq!(c.count(), 0);
}

#[test]
fn unplugged_pin_surfaces_as_input_error() {
    let mut b = bench();
    let mut c = EdgeCounter::new(5);
    b.reset.disconnect();
    let err = tick(&mut b, &mut c).unwrap_err();
    assert_eq!(err, Error::Input(InputError::PinReadFailed(PinRole::Reset)));
    assert_eq!(c.count(), 0, "failed sample must not advance the counter");
}

#[test]
fn enable_pin_gates_a_timer() {
    let clock = ManualClock::new();
    let wire = MockPin::new(false);
    let mut enable = DigitalInput::active_high(wire.clone(), PinRole::Enable);
    let mut t = CoarseTimer::new(30, &clock);

    for _ in 0..3 {
        clock.advance_ms(10);
        t.update(enable.read().unwrap());
    }
    assert_eq!(t.elapsed(), 0);

    wire.set_high();
    for _ in 0..3 {
        clock.advance_ms(10);
        t.update(enable.read().unwrap());
    }
    assert!(t.duration_reached());
}
