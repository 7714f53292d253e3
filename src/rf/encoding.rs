//! RF command encoding: how a switch's ON and OFF states look on the air.
//!
//! A switch is configured once with either a pair of numeric code words
//! (code + bit length) or a pair of literal bit-strings.  The form is a
//! sum type so the choice is made at construction and every later
//! transmission is a plain `match`.

use core::fmt;

use crate::devices::SwitchState;

/// A numeric code and the number of its low bits that go on the air.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeWord {
    pub code: u64,
    pub length: u8,
}

impl CodeWord {
    pub const fn new(code: u64, length: u8) -> Self {
        Self { code, length }
    }
}

/// The ON/OFF representation of one RF switch.
///
/// Bit-strings are drawn from `'0'`, `'1'` and the tri-state float `'F'`.
/// Nothing is validated here; the transmitter decides what to do with
/// characters it does not understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RfEncoding {
    Numeric { on: CodeWord, off: CodeWord },
    BitString { on: &'static str, off: &'static str },
}

/// Exactly what gets handed to the transmitter for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    Bits(&'a str),
    Code(CodeWord),
}

impl RfEncoding {
    /// Payload for `state`.  Pure; bit-string switches never yield a code.
    pub fn payload_for(&self, state: SwitchState) -> Payload<'static> {
        match (self, state) {
            (Self::BitString { on, .. }, SwitchState::On) => Payload::Bits(*on),
            (Self::BitString { off, .. }, SwitchState::Off) => Payload::Bits(*off),
            (Self::Numeric { on, .. }, SwitchState::On) => Payload::Code(*on),
            (Self::Numeric { off, .. }, SwitchState::Off) => Payload::Code(*off),
        }
    }

    pub fn is_bit_string(&self) -> bool {
        matches!(self, Self::BitString { .. })
    }
}

impl fmt::Display for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bits(bits) => write!(f, "{bits}"),
            Self::Code(word) => write!(f, "{}, length: {}", word.code, word.length),
        }
    }
}

impl fmt::Display for RfEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "on: {}, off: {}",
            self.payload_for(SwitchState::On),
            self.payload_for(SwitchState::Off)
        )
    }
}
