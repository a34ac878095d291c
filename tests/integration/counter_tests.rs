//! Edge counter driven through full input traces.

use super::mock_hw::script;

use tickfsm::config::CounterConfig;
use tickfsm::fsm::{CounterState, DownResetRule, EdgeCounter};

/// Feed a trace and collect `(state, count, threshold_reached)` per tick.
fn run(counter: &mut EdgeCounter, rows: &[(u8, u8, u8)]) -> Vec<(CounterState, u32, bool)> {
    script(rows)
        .into_iter()
        .map(|(up, down, reset)| {
            counter.update(up, down, reset);
            (counter.state(), counter.count(), counter.threshold_reached())
        })
        .collect()
}

#[test]
fn preset_three_trace() {
    use CounterState::{CountingDown, CountingUp, Idle, Resetting};

    let mut c = EdgeCounter::new(3);
    let got = run(
        &mut c,
        &[
            (1, 0, 0),
            (1, 0, 0),
            (0, 0, 0),
            (1, 0, 0),
            (0, 0, 0),
            (1, 0, 0),
            (0, 0, 0),
            (0, 1, 0),
            (0, 0, 1),
            (1, 0, 1),
            (0, 0, 0),
            (1, 0, 0),
        ],
    );

    assert_eq!(
        got,
        vec![
            (CountingUp, 1, false),
            (Idle, 1, false),
            (Idle, 1, false),
            (CountingUp, 2, false),
            (Idle, 2, false),
            (CountingUp, 3, true),
            (Idle, 3, true),
            (CountingDown, 2, false),
            (Resetting, 0, false),
            (Resetting, 0, false),
            (Idle, 0, false),
            (CountingUp, 1, false),
        ]
    );
}

#[test]
fn down_edge_right_after_a_count_is_lost() {
    use CounterState::{CountingUp, Idle};

    let mut c = EdgeCounter::new(3);
    let got = run(&mut c, &[(1, 0, 0), (0, 0, 0), (1, 0, 0), (0, 0, 0), (1, 0, 0), (0, 1, 0)]);
    assert_eq!(got[4], (CountingUp, 3, true));
    assert_eq!(got[5], (Idle, 3, true));
}

#[test]
fn long_reset_swallows_all_edges() {
    let mut c = EdgeCounter::new(1);
    run(&mut c, &[(1, 0, 0), (0, 0, 0)]);
    assert_eq!(c.count(), 1);

    let mut rows = Vec::new();
    for i in 0..40u8 {
        rows.push((i % 2, (i / 2) % 2, 1));
    }
    let got = run(&mut c, &rows);
    assert!(got.iter().all(|&(s, n, _)| s == CounterState::Resetting && n == 0));
}

#[test]
fn reset_during_up_pulse_zeroes_immediately() {
    let mut c = EdgeCounter::new(10);
    run(&mut c, &[(1, 0, 0), (0, 0, 0), (1, 0, 0)]);
    assert_eq!(c.count(), 2);
    assert_eq!(c.state(), CounterState::CountingUp);

    run(&mut c, &[(1, 0, 1)]);
    assert_eq!(c.state(), CounterState::Resetting);
    assert_eq!(c.count(), 0);
}

#[test]
fn legacy_and_default_rules_diverge_for_one_tick_only() {
    let rows = [
        (1, 0, 0),
        (0, 0, 0),
        (1, 0, 0),
        (0, 0, 0),
        (0, 1, 0),
        (0, 1, 1),
        (0, 1, 1),
        (0, 0, 0),
    ];

    let mut modern = EdgeCounter::new(5);
    let mut config = CounterConfig::new("legacy", 5);
    config.down_reset = DownResetRule::Legacy;
    let mut legacy = EdgeCounter::from_config(&config);

    let a = run(&mut modern, &rows);
    let b = run(&mut legacy, &rows);

    for (tick, (x, y)) in a.iter().zip(&b).enumerate() {
        if tick == 5 {
            assert_eq!(x.1, 0);
            assert_eq!(y.1, 1, "legacy keeps the count on the down tick");
        } else {
            assert_eq!(x.1, y.1, "tick {tick} counts should agree");
        }
    }
    assert_eq!(modern.state(), legacy.state());
}

#[test]
fn many_cycles_track_net_edges() {
    let mut c = EdgeCounter::new(100);
    for _ in 0..25 {
        run(&mut c, &[(1, 0, 0), (0, 0, 0), (1, 0, 0), (0, 0, 0), (0, 1, 0), (0, 0, 0)]);
    }
    assert_eq!(c.count(), 25);
    assert!(!c.threshold_reached());
}
