//! RfNode Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  RcTransmitter     LogStatusSink    HubStatusSink   Esp32Clock │
//! │  (RfTransmitter)   (StatusSink)     (StatusSink)               │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │      DeviceRegistry ──▶ RfSwitch × N (pure logic)      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The hub transport is not part of this binary: it feeds
//! [`INBOUND`] and drains [`OUTBOUND`] from its own task.
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::{Result, anyhow};
use esp_idf_hal::delay::{Ets, FreeRtos};
use log::info;

use rfnode::adapters::hub_channel::{HubStatusSink, INBOUND, OUTBOUND, take_message};
use rfnode::adapters::log_sink::LogStatusSink;
use rfnode::adapters::time::{Esp32Clock, Interval};
use rfnode::app::registry::DeviceRegistry;
use rfnode::config::NodeConfig;
use rfnode::devices::SwitchState;
use rfnode::devices::rf_switch::{RfSwitch, TxParams};
use rfnode::drivers::hw_init::GpioFactory;
use rfnode::drivers::rc_transmitter::RcTransmitter;
use rfnode::pins;
use rfnode::rf::CodeWord;

type Transmitter = RcTransmitter<GpioFactory, Ets>;

fn transmitter() -> Transmitter {
    RcTransmitter::new(GpioFactory, Ets)
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    let config = NodeConfig::load().map_err(|e| anyhow!("{e}"))?;
    log::set_max_level(config.log_level.into());

    info!("╔══════════════════════════════════════╗");
    info!("║  RfNode v{}                          ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Devices ────────────────────────────────────────────
    // Conrad RS-200 outlet, bit-string codes.
    let mut switch2 = RfSwitch::with_bit_strings(
        "switch2",
        pins::RF_TX_GPIO,
        "0000011010100110100101100110010110101010100110101010",
        "0000011010100110100101100110010110101010100101010101",
        TxParams::new(9, 4),
        SwitchState::Off,
        transmitter(),
    );
    // Single-button doorbell: "off" is a dummy one-bit burst.
    let mut switch3 = RfSwitch::with_bit_strings(
        "switch3",
        pins::RF_TX_GPIO,
        "1001100101101010100101101010011001011001100110100110010110101010",
        "0",
        TxParams::new(8, 10),
        SwitchState::Off,
        transmitter(),
    );
    // Etekcity ZAP outlet with a slightly short pulse.
    let mut switch4 = RfSwitch::with_codes(
        "switch4",
        pins::RF_TX_GPIO,
        CodeWord::new(79107, 24),
        CodeWord::new(79116, 24),
        TxParams::default().with_pulse_length(189),
        SwitchState::Off,
        transmitter(),
    );

    // ── 3. Registry ───────────────────────────────────────────
    let mut registry: DeviceRegistry<'_> = DeviceRegistry::new();
    registry.register(&mut switch2).map_err(|e| anyhow!("{e}"))?;
    registry.register(&mut switch3).map_err(|e| anyhow!("{e}"))?;
    registry.register(&mut switch4).map_err(|e| anyhow!("{e}"))?;

    let mut sink = (LogStatusSink::new(), HubStatusSink::new(&OUTBOUND));
    registry.init_all(&mut sink);

    info!("System ready ({} devices). Entering control loop.", registry.len());

    // ── 4. Control loop ───────────────────────────────────────
    let clock = Esp32Clock::new();
    let mut refresh = Interval::new(config.refresh_interval_ms(), clock.uptime_ms());

    loop {
        while let Some(line) = take_message(&INBOUND) {
            registry.dispatch(&line, &mut sink);
        }

        if refresh.poll(clock.uptime_ms()) {
            info!("Refreshing {} devices", registry.len());
            registry.refresh_all(&mut sink);
        }

        FreeRtos::delay_ms(config.loop_interval_ms);
    }
}
