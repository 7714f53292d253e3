//! Raw GPIO access for the RF transmitter line.
//!
//! Configures output pins and writes levels using ESP-IDF sys calls.
//! On host builds every call is a no-op so the drivers above stay
//! testable.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use log::warn;

use super::rc_transmitter::PinFactory;

// ── Error type ────────────────────────────────────────────────

/// Errors while configuring a peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

// ── GPIO Outputs ──────────────────────────────────────────────

/// Configure `pin` as a push-pull output and drive it low.
/// Safe to call again on an already-configured pin.
#[cfg(target_os = "espidf")]
pub fn configure_output(pin: i32) -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: gpio_config only touches the registers of the pins in the
    // mask; called from the single control-loop context.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    // SAFETY: pin was configured as an output just above.
    unsafe { gpio_set_level(pin, 0) };
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_output(_pin: i32) -> Result<(), HwInitError> {
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin.
    // Main-loop only.
    unsafe { gpio_set_level(pin, if high { 1 } else { 0 }); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── embedded-hal glue ─────────────────────────────────────────

/// A configured GPIO output, addressed by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioOutput {
    gpio: i32,
}

impl GpioOutput {
    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl ErrorType for GpioOutput {
    type Error = Infallible;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        gpio_write(self.gpio, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        gpio_write(self.gpio, true);
        Ok(())
    }
}

/// Hands out [`GpioOutput`]s, (re)configuring the pin each time.
#[derive(Debug, Default)]
pub struct GpioFactory;

impl PinFactory for GpioFactory {
    type Pin = GpioOutput;

    fn arm(&mut self, gpio: u8) -> GpioOutput {
        let gpio = i32::from(gpio);
        if let Err(e) = configure_output(gpio) {
            warn!("hw_init: {}", e);
        }
        GpioOutput { gpio }
    }
}
