//! Mock adapters for integration tests.
//!
//! Records every transmitter call and every status report so tests can
//! assert on the full history without touching a real radio.

use rfnode::app::events::StatusReport;
use rfnode::app::ports::{RfTransmitter, StatusSink};
use rfnode::rf::Payload;

// ── Transmitter call record ───────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum TxCall {
    Arm(u8),
    Protocol(u8),
    Repeat(u8),
    PulseLength(u16),
    SendBits(String),
    SendCode { code: u64, length: u8 },
}

// ── MockTransmitter ───────────────────────────────────────────

pub struct MockTransmitter {
    pub calls: Vec<TxCall>,
}

#[allow(dead_code)]
impl MockTransmitter {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Only the `transmit` calls, in order.
    pub fn sends(&self) -> Vec<&TxCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, TxCall::SendBits(_) | TxCall::SendCode { .. }))
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&TxCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Default for MockTransmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl RfTransmitter for MockTransmitter {
    fn arm_output(&mut self, pin: u8) {
        self.calls.push(TxCall::Arm(pin));
    }

    fn set_protocol(&mut self, protocol: u8) {
        self.calls.push(TxCall::Protocol(protocol));
    }

    fn set_repeat_count(&mut self, repeats: u8) {
        self.calls.push(TxCall::Repeat(repeats));
    }

    fn set_pulse_length(&mut self, micros: u16) {
        self.calls.push(TxCall::PulseLength(micros));
    }

    fn transmit(&mut self, payload: &Payload<'_>) {
        self.calls.push(match payload {
            Payload::Bits(bits) => TxCall::SendBits((*bits).to_string()),
            Payload::Code(word) => TxCall::SendCode {
                code: word.code,
                length: word.length,
            },
        });
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub reports: Vec<String>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.reports.last().map(String::as_str)
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for RecordingSink {
    fn send(&mut self, report: &StatusReport<'_>) {
        self.reports.push(report.to_string());
    }
}
