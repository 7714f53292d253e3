//! Bit-banged 433 MHz ASK transmitter (rc-switch compatible).
//!
//! Drives a cheap OOK transmitter module's DATA pin directly: each pulse
//! of the [`Waveform`] is a level held for a busy-wait delay.  The whole
//! transmission blocks the control loop; at protocol 1 a 24-bit code
//! takes about 36 ms per repeat.
//!
//! ## Dual-target design
//!
//! Generic over an `embedded-hal` [`OutputPin`] source and [`DelayNs`].
//! On ESP-IDF `main` plugs in [`GpioFactory`](super::hw_init::GpioFactory)
//! and the ROM busy-wait delay; host tests plug in recorders.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use log::{debug, warn};

use crate::app::ports::RfTransmitter;
use crate::rf::waveform::{is_well_formed, Waveform};
use crate::rf::{Payload, Protocol};

/// Produces an output pin for a GPIO number.
///
/// Called on every arm, so implementations must (re)configure the pin
/// each time rather than caching a handle.
pub trait PinFactory {
    type Pin: OutputPin;

    fn arm(&mut self, gpio: u8) -> Self::Pin;
}

pub struct RcTransmitter<F: PinFactory, D: DelayNs> {
    factory: F,
    delay: D,
    pin: Option<F::Pin>,
    armed_gpio: Option<u8>,
    protocol: Protocol,
    pulse_length_us: u16,
    repeats: u8,
}

/// rc-switch's default repeat count.
const DEFAULT_REPEATS: u8 = 10;

impl<F: PinFactory, D: DelayNs> RcTransmitter<F, D> {
    pub fn new(factory: F, delay: D) -> Self {
        let protocol = Protocol::default();
        Self {
            factory,
            delay,
            pin: None,
            armed_gpio: None,
            protocol,
            pulse_length_us: protocol.pulse_length_us,
            repeats: DEFAULT_REPEATS,
        }
    }

    pub fn armed_gpio(&self) -> Option<u8> {
        self.armed_gpio
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn pulse_length_us(&self) -> u16 {
        self.pulse_length_us
    }

    pub fn repeats(&self) -> u8 {
        self.repeats
    }
}

impl<F: PinFactory, D: DelayNs> RfTransmitter for RcTransmitter<F, D> {
    fn arm_output(&mut self, pin: u8) {
        self.pin = Some(self.factory.arm(pin));
        self.armed_gpio = Some(pin);
    }

    /// Also resets the pulse length to the profile's own.
    fn set_protocol(&mut self, protocol: u8) {
        self.protocol = Protocol::by_id_or_default(protocol);
        self.pulse_length_us = self.protocol.pulse_length_us;
    }

    fn set_repeat_count(&mut self, repeats: u8) {
        self.repeats = repeats;
    }

    fn set_pulse_length(&mut self, micros: u16) {
        self.pulse_length_us = micros;
    }

    fn transmit(&mut self, payload: &Payload<'_>) {
        let Some(pin) = self.pin.as_mut() else {
            warn!("RcTransmitter: transmit before arm, ignored");
            return;
        };
        if let Payload::Bits(bits) = payload {
            if !is_well_formed(bits) {
                warn!("RcTransmitter: skipping non 0/1/F characters in '{}'", bits);
            }
        }

        let waveform = Waveform::new(*payload, self.protocol, self.pulse_length_us);
        debug!(
            "RcTransmitter: {} x {}us on GPIO {:?}",
            self.repeats,
            waveform.duration_us(),
            self.armed_gpio
        );

        for _ in 0..self.repeats {
            for pulse in waveform.pulses() {
                // Errors from the pin are unobservable on a one-way link.
                let _ = pin.set_state(PinState::from(pulse.high));
                self.delay.delay_us(pulse.duration_us);
            }
        }
        let _ = pin.set_low();
    }
}
