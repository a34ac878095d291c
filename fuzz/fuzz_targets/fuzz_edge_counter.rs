//! Fuzz target: `EdgeCounter`
//!
//! Treats each input byte as one tick: bit 0 = up, bit 1 = down,
//! bit 2 = reset.  The first byte picks the preset and reset rule.
//! Verifies:
//! - No panics for any input sequence
//! - The count moves by at most one step per tick unless reset
//! - `threshold_reached` always equals `count >= preset`
//!
//! cargo fuzz run fuzz_edge_counter

#![no_main]

use libfuzzer_sys::fuzz_target;
use tickfsm::config::CounterConfig;
use tickfsm::fsm::{DownResetRule, EdgeCounter};

fuzz_target!(|data: &[u8]| {
    let Some((&head, ticks)) = data.split_first() else {
        return;
    };

    let mut config = CounterConfig::new("fuzz", i32::from(head as i8));
    config.down_reset = if head & 0x80 != 0 {
        DownResetRule::Legacy
    } else {
        DownResetRule::Reset
    };
    let mut counter = EdgeCounter::from_config(&config);

    for &byte in ticks {
        let before = counter.count();
        let reset = byte & 0b100 != 0;
        counter.update(byte & 0b001 != 0, byte & 0b010 != 0, reset);
        let after = counter.count();

        if reset {
            assert!(after <= before, "reset tick raised the count {before} -> {after}");
        }
        assert!(
            after == 0 || after.abs_diff(before) <= 1,
            "count jumped {before} -> {after}"
        );
        assert_eq!(
            counter.threshold_reached(),
            i64::from(after) >= i64::from(counter.preset())
        );
    }
});
