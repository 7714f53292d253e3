//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                   |
//! |----------------|--------------|-------------------------------|
//! | `hub_channel`  | StatusSink   | Static queues to hub transport|
//! | `log_sink`     | StatusSink   | Serial log output             |
//! | `time`         | —            | ESP32 system timer            |
//!
//! The RF transmitter port is implemented by
//! [`RcTransmitter`](crate::drivers::rc_transmitter::RcTransmitter).

pub mod hub_channel;
pub mod log_sink;
pub mod time;
