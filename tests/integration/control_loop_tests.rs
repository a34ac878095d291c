//! Several blocks composed into one host loop, the way a control program
//! wires them: a batch counter whose threshold enables a dwell timer whose
//! completion resets the counter.

use tickfsm::adapters::time::ManualClock;
use tickfsm::config::{CounterConfig, SimConfig, TimerConfig};
use tickfsm::fsm::{CoarseTimer, CounterInputs, EdgeCounter};
use tickfsm::telemetry::{CounterSnapshot, encode_frame};

#[test]
fn batch_counter_with_dwell_reset() {
    let clock = ManualClock::new();
    let mut parts = EdgeCounter::from_config(&CounterConfig::new("parts", 3));
    let mut dwell = CoarseTimer::from_config(&TimerConfig::new("dwell", 50), &clock);

    let mut resets = 0;
    let mut max_count = 0;
    for tick in 0..200u32 {
        clock.advance_ms(10);
        let inputs = CounterInputs {
            up: tick % 4 == 0,
            down: false,
            reset: dwell.duration_reached(),
        };
        if inputs.reset {
            resets += 1;
        }
        parts.apply(inputs);
        dwell.update(parts.threshold_reached());
        max_count = max_count.max(parts.count());
    }

    assert!(resets > 0, "dwell should have reset the batch");
    assert!(max_count <= 5, "counter must be cleared shortly after dwell");
}

#[test]
fn default_sim_config_builds_blocks() {
    let config = SimConfig::default();
    let clock = ManualClock::new();
    let parts = EdgeCounter::from_config(&config.counter);
    let dwell = CoarseTimer::from_config(&config.coarse_timer, &clock);
    assert_eq!(parts.label(), config.counter.label.as_str());
    assert_eq!(dwell.duration(), config.coarse_timer.duration);
}

#[test]
fn telemetry_frames_survive_the_wire() {
    let mut parts = EdgeCounter::from_config(&CounterConfig::new("parts", 1));
    parts.update(true, false, false);

    let mut buf = [0u8; 48];
    let frame = encode_frame(&parts.snapshot(), &mut buf).unwrap();
    let decoded: CounterSnapshot = postcard::from_bytes(frame).unwrap();
    assert_eq!(decoded, parts.snapshot());
}
