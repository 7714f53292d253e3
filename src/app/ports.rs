//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Executor (domain)
//! ```
//!
//! Driven adapters (the RF transmitter, the hub's outbound queue, the
//! serial log) implement these traits.  Devices consume them, so the
//! domain core never touches hardware or the network directly.

use crate::rf::Payload;

use super::events::StatusReport;

// ───────────────────────────────────────────────────────────────
// RF transmitter port (driven adapter: domain → radio)
// ───────────────────────────────────────────────────────────────

/// The radio primitive an RF switch transmits through.
///
/// Transmission is one-way and unacknowledged, so nothing here returns
/// an error.  Whatever goes wrong inside an implementation stays there.
pub trait RfTransmitter {
    /// Bind `pin` as the transmitter output.  Called again whenever the
    /// pin is reassigned and before every transmission; implementations
    /// must rebind even if `pin` is unchanged.
    fn arm_output(&mut self, pin: u8);

    /// Select a timing profile by id.
    fn set_protocol(&mut self, protocol: u8);

    /// How many times each waveform is repeated back to back.
    fn set_repeat_count(&mut self, repeats: u8);

    /// Override the protocol's base pulse length.  Never called with 0.
    fn set_pulse_length(&mut self, micros: u16);

    /// Send `payload` with the current settings.  Blocks until done.
    fn transmit(&mut self, payload: &Payload<'_>);
}

// ───────────────────────────────────────────────────────────────
// Status sink port (driven adapter: domain → hub / logging)
// ───────────────────────────────────────────────────────────────

/// Devices push `"<name> <state>"` reports through this port.
/// Adapters decide where they go (hub queue, serial log, both).
pub trait StatusSink {
    fn send(&mut self, report: &StatusReport<'_>);
}

/// Fan a report out to two sinks, left first.
impl<A: StatusSink, B: StatusSink> StatusSink for (A, B) {
    fn send(&mut self, report: &StatusReport<'_>) {
        self.0.send(report);
        self.1.send(report);
    }
}
