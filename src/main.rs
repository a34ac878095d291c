//! tickfsm-sim: a polled control loop built from the tickfsm blocks.
//!
//! Models a batching station:
//!
//! ```text
//!   part sensor ──▶ EdgeCounter ──[batch full]──▶ CoarseTimer (dwell)
//!        ▲               ▲                            │
//!   (scripted pulses)    └──────[dwell done: reset]───┘
//!
//!   FineTimer (strobe) runs while the dwell timer is timing.
//! ```
//!
//! Usage: `tickfsm-sim [config.json]`.  Without a path the defaults from
//! [`SimConfig::default`] are used.

#[cfg(not(target_os = "espidf"))]
mod logging;

use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use tickfsm::adapters::time::SystemClock;
use tickfsm::config::SimConfig;
use tickfsm::fsm::{CoarseTimer, CounterInputs, EdgeCounter, FineTimer, TimerState};

fn main() -> Result<()> {
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_svc::log::EspLogger::initialize_default();
    }

    #[cfg(not(target_os = "espidf"))]
    logging::setup_logger(log::LevelFilter::Info)?;

    let config = load_config()?;
    info!(
        "tickfsm-sim: {} ticks @ {}ms, pulse every {} ticks",
        config.run_ticks, config.tick_interval_ms, config.pulse_period_ticks
    );

    let clock = SystemClock::new();
    let mut parts = EdgeCounter::from_config(&config.counter);
    let mut dwell = CoarseTimer::from_config(&config.coarse_timer, clock);
    let mut strobe = FineTimer::from_config(&config.fine_timer, clock);

    let period = Duration::from_millis(u64::from(config.tick_interval_ms));
    let mut batches = 0u32;
    let reject_period = config.pulse_period_ticks.saturating_mul(7);

    for tick in 0..config.run_ticks {
        // ── Inputs ────────────────────────────────────────────
        let inputs = CounterInputs {
            up: tick % config.pulse_period_ticks == 0,
            // Every seventh pulse is a reject that takes a part back out.
            down: tick % reject_period == config.pulse_period_ticks / 2,
            reset: dwell.duration_reached(),
        };
        if inputs.reset {
            batches += 1;
        }

        // ── Advance ───────────────────────────────────────────
        parts.apply(inputs);
        dwell.update(parts.threshold_reached());
        strobe.update(dwell.state() == TimerState::Timing);

        // ── Telemetry ─────────────────────────────────────────
        if tick % config.telemetry_every == 0 {
            info!(
                "TELEM | tick={} | {} | {} | {}",
                tick,
                serde_json::to_string(&parts.snapshot())?,
                serde_json::to_string(&dwell.snapshot())?,
                serde_json::to_string(&strobe.snapshot())?,
            );
        }

        std::thread::sleep(period);
    }

    info!(
        "tickfsm-sim: done, {} batches, final count {}",
        batches,
        parts.count()
    );
    Ok(())
}

fn load_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        info!("no config path given, using defaults");
        return Ok(SimConfig::default());
    };

    let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = SimConfig::from_json(&json)
        .map_err(tickfsm::Error::from)
        .with_context(|| format!("loading {path}"))?;
    Ok(config)
}
