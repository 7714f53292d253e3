//! Integration tests for the RfSwitch → transmitter / status pipeline.
//!
//! Drives a switch through its lifecycle hooks and checks the exact
//! sequence of transmitter calls and hub reports.

use super::mock_hw::{MockTransmitter, RecordingSink, TxCall};

use rfnode::devices::rf_switch::{RfSwitch, TxParams};
use rfnode::devices::{Executor, SwitchState};
use rfnode::rf::{CodeWord, Payload};

fn bits_switch(start: SwitchState) -> RfSwitch<MockTransmitter> {
    RfSwitch::with_bit_strings(
        "rf1",
        9,
        "101",
        "010",
        TxParams::new(1, 4),
        start,
        MockTransmitter::new(),
    )
}

fn etekcity(pulse_length_us: u16) -> RfSwitch<MockTransmitter> {
    RfSwitch::with_codes(
        "rf2",
        9,
        CodeWord::new(79107, 24),
        CodeWord::new(79116, 24),
        TxParams::default().with_pulse_length(pulse_length_us),
        SwitchState::Off,
        MockTransmitter::new(),
    )
}

fn bits(s: &str) -> TxCall {
    TxCall::SendBits(s.to_string())
}

// ── Bit-string scenario: init → on → refresh ─────────────────

#[test]
fn bit_string_init_command_refresh_scenario() {
    let mut sw = bits_switch(SwitchState::Off);
    let mut sink = RecordingSink::new();

    sw.init(&mut sink);
    assert_eq!(sw.transmitter().sends(), vec![&bits("010")]);
    assert_eq!(sink.reports, vec!["rf1 off"]);

    sw.command("x on", &mut sink);
    assert_eq!(sw.transmitter().sends(), vec![&bits("010"), &bits("101")]);
    assert_eq!(sink.last(), Some("rf1 on"));

    sw.refresh(&mut sink);
    assert_eq!(sw.transmitter().sends().len(), 2, "refresh must not transmit");
    assert_eq!(sink.reports, vec!["rf1 off", "rf1 on", "rf1 on"]);
}

// ── Pulse-length sentinel ────────────────────────────────────

#[test]
fn explicit_pulse_length_is_set_once_at_construction() {
    let mut sw = etekcity(189);
    let mut sink = RecordingSink::new();
    sw.init(&mut sink);
    sw.command("rf2 on", &mut sink);
    sw.command("rf2 off", &mut sink);
    sw.refresh(&mut sink);

    let tx = sw.transmitter();
    assert_eq!(tx.count(|c| matches!(c, TxCall::PulseLength(_))), 1);
    assert_eq!(tx.calls[3], TxCall::PulseLength(189));
}

#[test]
fn zero_pulse_length_never_overrides() {
    let mut sw = etekcity(0);
    let mut sink = RecordingSink::new();
    sw.init(&mut sink);
    sw.command("rf2 on", &mut sink);
    sw.set_pin(10);
    assert_eq!(
        sw.transmitter().count(|c| matches!(c, TxCall::PulseLength(_))),
        0
    );
}

#[test]
fn construction_sets_protocol_and_repeats() {
    let sw = bits_switch(SwitchState::Off);
    assert_eq!(
        sw.transmitter().calls,
        vec![TxCall::Arm(9), TxCall::Protocol(1), TxCall::Repeat(4)]
    );
    assert_eq!(sw.pin(), 9);
    assert_eq!(sw.params(), TxParams::new(1, 4));
}

// ── init ─────────────────────────────────────────────────────

#[test]
fn init_reasserts_starting_state_once() {
    for start in [SwitchState::On, SwitchState::Off] {
        let mut sw = bits_switch(start);
        let mut sink = RecordingSink::new();
        sw.init(&mut sink);
        assert_eq!(sw.transmitter().sends().len(), 1);
        assert_eq!(sink.reports, vec![format!("rf1 {start}")]);
        assert_eq!(sw.state(), start);
    }
}

// ── command ──────────────────────────────────────────────────

#[test]
fn numeric_switch_sends_code_for_each_state() {
    let mut sw = etekcity(0);
    let mut sink = RecordingSink::new();
    sw.command("rf2 on", &mut sink);
    sw.command("rf2 off", &mut sink);
    assert_eq!(
        sw.transmitter().sends(),
        vec![
            &TxCall::SendCode { code: 79107, length: 24 },
            &TxCall::SendCode { code: 79116, length: 24 },
        ]
    );
    assert_eq!(sink.reports, vec!["rf2 on", "rf2 off"]);
}

#[test]
fn unrecognised_command_keeps_state_but_still_transmits() {
    let mut sw = bits_switch(SwitchState::On);
    let mut sink = RecordingSink::new();

    sw.command("x frobnicate", &mut sink);

    assert_eq!(sw.state(), SwitchState::On);
    assert_eq!(sw.transmitter().sends(), vec![&bits("101")]);
    assert_eq!(sink.reports, vec!["rf1 on"]);
}

#[test]
fn transmission_is_preceded_by_re_arm() {
    let mut sw = bits_switch(SwitchState::Off);
    let mut sink = RecordingSink::new();
    sw.command("x on", &mut sink);
    let calls = &sw.transmitter().calls;
    let n = calls.len();
    assert_eq!(&calls[n - 2..], &[TxCall::Arm(9), bits("101")]);
}

// ── setPin ───────────────────────────────────────────────────

#[test]
fn set_pin_always_re_arms() {
    let mut sw = bits_switch(SwitchState::Off);
    sw.set_pin(9);
    sw.set_pin(12);
    assert_eq!(sw.pin(), 12);
    let arms: Vec<_> = sw
        .transmitter()
        .calls
        .iter()
        .filter(|c| matches!(c, TxCall::Arm(_)))
        .collect();
    assert_eq!(arms, vec![&TxCall::Arm(9), &TxCall::Arm(9), &TxCall::Arm(12)]);

    let mut sink = RecordingSink::new();
    sw.command("x on", &mut sink);
    assert_eq!(sw.transmitter().calls.iter().rev().nth(1), Some(&TxCall::Arm(12)));
}

// ── Encoder precedence ───────────────────────────────────────

#[test]
fn bit_string_switch_never_emits_codes() {
    let sw = bits_switch(SwitchState::Off);
    for state in [SwitchState::On, SwitchState::Off] {
        assert!(matches!(sw.encoding().payload_for(state), Payload::Bits(_)));
    }
}
