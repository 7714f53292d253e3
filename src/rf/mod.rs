//! RF encoding, timing profiles, and pulse-train generation.

pub mod encoding;
pub mod protocol;
pub mod waveform;

pub use encoding::{CodeWord, Payload, RfEncoding};
pub use protocol::Protocol;
