//! End-to-end hub flow: inbound line → registry → switch → outbound report.
//!
//! Mirrors the control loop in `main.rs` with local channels so each test
//! starts from empty queues.

use embassy_sync::channel::Channel;

use super::mock_hw::{MockTransmitter, RecordingSink, TxCall};

use rfnode::adapters::hub_channel::{HubChannel, HubStatusSink, push_message, take_message};
use rfnode::app::registry::DeviceRegistry;
use rfnode::devices::SwitchState;
use rfnode::devices::rf_switch::{RfSwitch, TxParams};
use rfnode::rf::CodeWord;

fn drain<const N: usize>(channel: &HubChannel<N>) -> Vec<String> {
    let mut out = Vec::new();
    while let Some(msg) = take_message(channel) {
        out.push(msg.as_str().to_string());
    }
    out
}

fn outlet(name: &'static str) -> RfSwitch<MockTransmitter> {
    RfSwitch::with_codes(
        name,
        4,
        CodeWord::new(79107, 24),
        CodeWord::new(79116, 24),
        TxParams::default().with_pulse_length(189),
        SwitchState::Off,
        MockTransmitter::new(),
    )
}

fn doorbell(name: &'static str) -> RfSwitch<MockTransmitter> {
    RfSwitch::with_bit_strings(
        name,
        4,
        "10011001",
        "0",
        TxParams::new(8, 10),
        SwitchState::Off,
        MockTransmitter::new(),
    )
}

#[test]
fn boot_reports_every_device_in_registration_order() {
    let outbound: HubChannel<8> = Channel::new();
    let mut a = outlet("switch2");
    let mut b = doorbell("switch3");
    {
        let mut registry: DeviceRegistry<'_, 4> = DeviceRegistry::new();
        registry.register(&mut a).unwrap();
        registry.register(&mut b).unwrap();
        registry.init_all(&mut HubStatusSink::new(&outbound));
    }
    assert_eq!(drain(&outbound), vec!["switch2 off", "switch3 off"]);
    assert_eq!(a.transmitter().sends().len(), 1);
    assert_eq!(b.transmitter().sends(), vec![&TxCall::SendBits("0".into())]);
}

#[test]
fn inbound_commands_reach_only_the_named_device() {
    let inbound: HubChannel<4> = Channel::new();
    let outbound: HubChannel<8> = Channel::new();
    let mut a = outlet("switch2");
    let mut b = doorbell("switch3");

    assert!(push_message(&inbound, "switch3 on"));
    assert!(push_message(&inbound, "switch9 on"));
    assert!(push_message(&inbound, "switch2 on"));

    {
        let mut registry: DeviceRegistry<'_, 4> = DeviceRegistry::new();
        registry.register(&mut a).unwrap();
        registry.register(&mut b).unwrap();
        let mut sink = HubStatusSink::new(&outbound);
        let mut routed = 0;
        while let Some(line) = take_message(&inbound) {
            if registry.dispatch(&line, &mut sink) {
                routed += 1;
            }
        }
        assert_eq!(routed, 2);
    }

    assert_eq!(drain(&outbound), vec!["switch3 on", "switch2 on"]);
    assert_eq!(a.state(), SwitchState::On);
    assert_eq!(b.state(), SwitchState::On);
    assert_eq!(
        a.transmitter().sends(),
        vec![&TxCall::SendCode { code: 79107, length: 24 }]
    );
    assert_eq!(b.transmitter().sends(), vec![&TxCall::SendBits("10011001".into())]);
}

#[test]
fn refresh_reports_without_transmitting() {
    let outbound: HubChannel<8> = Channel::new();
    let mut a = outlet("switch2");
    {
        let mut registry: DeviceRegistry<'_, 2> = DeviceRegistry::new();
        registry.register(&mut a).unwrap();
        let mut sink = HubStatusSink::new(&outbound);
        registry.dispatch("switch2 on", &mut sink);
        registry.refresh_all(&mut sink);
        registry.refresh_all(&mut sink);
    }
    assert_eq!(drain(&outbound), vec!["switch2 on", "switch2 on", "switch2 on"]);
    assert_eq!(a.transmitter().sends().len(), 1);
}

#[test]
fn fan_out_sink_feeds_both_destinations() {
    let outbound: HubChannel<4> = Channel::new();
    let mut a = outlet("switch4");
    let mut sink = (RecordingSink::new(), HubStatusSink::new(&outbound));
    {
        let mut registry: DeviceRegistry<'_, 2> = DeviceRegistry::new();
        registry.register(&mut a).unwrap();
        registry.init_all(&mut sink);
        registry.dispatch("switch4 on", &mut sink);
    }
    assert_eq!(sink.0.reports, vec!["switch4 off", "switch4 on"]);
    assert_eq!(drain(&outbound), vec!["switch4 off", "switch4 on"]);
}

#[test]
fn full_outbound_queue_drops_reports_but_devices_still_act() {
    let outbound: HubChannel<1> = Channel::new();
    let mut a = outlet("switch2");
    {
        let mut registry: DeviceRegistry<'_, 2> = DeviceRegistry::new();
        registry.register(&mut a).unwrap();
        let mut sink = HubStatusSink::new(&outbound);
        registry.init_all(&mut sink);
        registry.dispatch("switch2 on", &mut sink);
    }
    assert_eq!(drain(&outbound), vec!["switch2 off"]);
    assert_eq!(a.state(), SwitchState::On);
    assert_eq!(a.transmitter().sends().len(), 2);
}
