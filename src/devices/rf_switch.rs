//! RF-code switch (433 MHz remote outlets, doorbells, blinds).
//!
//! The switch has no feedback channel: the outlet it controls is never
//! polled, so the switch's own [`SwitchState`] is the only truth.  Every
//! `init` and `command` re-sends the payload for that state; `refresh`
//! only re-reports it.
//!
//! ## Construction
//!
//! Two constructors, one per [`RfEncoding`] form.  Both bind the pin and
//! push protocol and repeat count into the transmitter.  The pulse length
//! is pushed only when non-zero; 0 keeps the protocol's own timing.
//!
//! ```ignore
//! let sw = RfSwitch::with_codes(
//!     "switch2",
//!     pins::RF_TX_GPIO,
//!     CodeWord::new(79107, 24),
//!     CodeWord::new(79116, 24),
//!     TxParams::default().with_pulse_length(189),
//!     SwitchState::Off,
//!     tx,
//! );
//! ```

use log::debug;

use crate::app::events::StatusReport;
use crate::app::ports::{RfTransmitter, StatusSink};
use crate::rf::{CodeWord, RfEncoding};

use super::{Executor, SwitchState};

pub const DEFAULT_PROTOCOL: u8 = 1;
pub const DEFAULT_REPEAT_TRANSMIT: u8 = 4;

/// Transmission settings fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxParams {
    pub protocol: u8,
    pub repeat_transmit: u8,
    /// Microseconds; 0 = use the protocol's pulse length.
    pub pulse_length_us: u16,
}

impl TxParams {
    pub const fn new(protocol: u8, repeat_transmit: u8) -> Self {
        Self {
            protocol,
            repeat_transmit,
            pulse_length_us: 0,
        }
    }

    pub const fn with_pulse_length(mut self, micros: u16) -> Self {
        self.pulse_length_us = micros;
        self
    }
}

impl Default for TxParams {
    fn default() -> Self {
        Self::new(DEFAULT_PROTOCOL, DEFAULT_REPEAT_TRANSMIT)
    }
}

pub struct RfSwitch<T: RfTransmitter> {
    name: &'static str,
    pin: u8,
    encoding: RfEncoding,
    params: TxParams,
    state: SwitchState,
    tx: T,
}

impl<T: RfTransmitter> RfSwitch<T> {
    /// Switch driven by numeric code words.
    pub fn with_codes(
        name: &'static str,
        pin: u8,
        on: CodeWord,
        off: CodeWord,
        params: TxParams,
        starting_state: SwitchState,
        tx: T,
    ) -> Self {
        Self::configure(
            name,
            pin,
            RfEncoding::Numeric { on, off },
            params,
            starting_state,
            tx,
        )
    }

    /// Switch driven by literal bit-strings.
    pub fn with_bit_strings(
        name: &'static str,
        pin: u8,
        on: &'static str,
        off: &'static str,
        params: TxParams,
        starting_state: SwitchState,
        tx: T,
    ) -> Self {
        Self::configure(
            name,
            pin,
            RfEncoding::BitString { on, off },
            params,
            starting_state,
            tx,
        )
    }

    fn configure(
        name: &'static str,
        pin: u8,
        encoding: RfEncoding,
        params: TxParams,
        starting_state: SwitchState,
        tx: T,
    ) -> Self {
        let mut sw = Self {
            name,
            pin,
            encoding,
            params,
            state: starting_state,
            tx,
        };
        sw.set_pin(pin);
        sw.tx.set_protocol(params.protocol);
        sw.tx.set_repeat_count(params.repeat_transmit);
        if params.pulse_length_us > 0 {
            sw.tx.set_pulse_length(params.pulse_length_us);
        }
        sw
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Store `pin` and re-arm the transmitter on it, even if unchanged.
    pub fn set_pin(&mut self, pin: u8) {
        self.pin = pin;
        self.tx.arm_output(pin);
    }

    pub fn state(&self) -> SwitchState {
        self.state
    }

    pub fn encoding(&self) -> &RfEncoding {
        &self.encoding
    }

    pub fn params(&self) -> TxParams {
        self.params
    }

    pub fn transmitter(&self) -> &T {
        &self.tx
    }

    // ── Internal ──────────────────────────────────────────────

    fn transmit_state(&mut self) {
        debug!(
            "RfSwitch '{}': pin {}, protocol {}, pulse-length {}, repeats {}, {}",
            self.name,
            self.pin,
            self.params.protocol,
            PulseLength(self.params.pulse_length_us),
            self.params.repeat_transmit,
            self.encoding,
        );

        // rc-switch style drivers drop the pin binding between sends.
        self.tx.arm_output(self.pin);
        let payload = self.encoding.payload_for(self.state);
        self.tx.transmit(&payload);
    }

    fn report(&self, sink: &mut dyn StatusSink) {
        sink.send(&StatusReport::new(self.name, self.state));
    }
}

impl<T: RfTransmitter> Executor for RfSwitch<T> {
    fn name(&self) -> &str {
        self.name
    }

    fn init(&mut self, sink: &mut dyn StatusSink) {
        self.transmit_state();
        self.report(sink);
    }

    /// Unrecognised commands keep the current state but still transmit
    /// it; hubs rely on this to re-assert an outlet that missed a send.
    fn command(&mut self, text: &str, sink: &mut dyn StatusSink) {
        let word = text.split_once(' ').map_or(text, |(_, rest)| rest);
        debug!("RfSwitch '{}': command '{}'", self.name, word);

        if let Some(state) = SwitchState::from_word(word) {
            self.state = state;
        }

        self.transmit_state();
        self.report(sink);
    }

    fn refresh(&mut self, sink: &mut dyn StatusSink) {
        self.report(sink);
    }
}

/// Log helper for the pulse-length sentinel.
struct PulseLength(u16);

impl core::fmt::Display for PulseLength {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            0 => f.write_str("protocol default"),
            us => write!(f, "{us}us"),
        }
    }
}
