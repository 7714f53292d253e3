//! Application core — pure domain wiring, zero I/O.
//!
//! Devices talk to hardware and to the hub only through the **port
//! traits** in [`ports`].  The [`registry`] is the composition root that
//! owns the device list and routes hub traffic to it.

pub mod events;
pub mod ports;
pub mod registry;
