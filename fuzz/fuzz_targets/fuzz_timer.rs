//! Fuzz target: coarse and fine timers
//!
//! Each 3-byte chunk is one tick: a little-endian `u16` clock advance in
//! microseconds followed by an enable byte.  Verifies:
//! - No panics, including across 32-bit clock wraps
//! - `elapsed` is 0 whenever the timer is disabled
//! - `duration_reached` always equals `elapsed >= duration`
//!
//! cargo fuzz run fuzz_timer

#![no_main]

use libfuzzer_sys::fuzz_target;
use tickfsm::adapters::time::ManualClock;
use tickfsm::fsm::{CoarseTimer, FineTimer};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let start = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]]));
    let duration = u32::from(u16::from_le_bytes([data[4], data[5]]));

    let clock = ManualClock::starting_at_us(start);
    let mut coarse = CoarseTimer::new(duration / 100, &clock);
    let mut fine = FineTimer::new(duration, &clock);

    for chunk in data[6..].chunks_exact(3) {
        clock.advance_us(u64::from(u16::from_le_bytes([chunk[0], chunk[1]])));
        let enable = chunk[2] & 1 != 0;
        coarse.update(enable);
        fine.update(enable);

        for (elapsed, duration, reached) in [
            (coarse.elapsed(), coarse.duration(), coarse.duration_reached()),
            (fine.elapsed(), fine.duration(), fine.duration_reached()),
        ] {
            if !enable {
                assert_eq!(elapsed, 0, "disabled timer reported elapsed time");
            }
            assert_eq!(reached, elapsed >= duration);
        }
    }
});
