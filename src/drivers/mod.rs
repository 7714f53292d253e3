//! Peripheral drivers: raw GPIO access and the RF transmitter.

pub mod hw_init;
pub mod rc_transmitter;
