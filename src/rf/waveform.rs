//! Payload → pulse train conversion.
//!
//! One repeat of a transmission is the payload's data bits followed by
//! the protocol's sync marker.  Every bit and the sync marker are a
//! (high, low) pair whose widths come from the [`Protocol`].
//!
//! ```text
//!   bit '0'      bit '1'      sync
//!   ┌┐           ┌──┐         ┌┐
//!   ││___        │  │_        ││______________ …
//! ```
//!
//! Bit-strings without an `'F'` send one data bit per `'0'` / `'1'`.
//! A bit-string containing `'F'` is a tri-state word and every symbol
//! widens to two bits: `'0'` → `00`, `'F'` → `01`, `'1'` → `11`.
//! Any other character is skipped (see [`is_well_formed`]).
//!
//! Numeric codes send the low `length` bits of `code`, MSB first.
//! Iteration is lazy; nothing is buffered.

use core::str::Chars;

use super::encoding::{CodeWord, Payload};
use super::protocol::{HighLow, Protocol};

/// One level held for a fixed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub high: bool,
    pub duration_us: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Zero,
    One,
    Sync,
}

/// `true` if every character of `bits` is `'0'`, `'1'` or `'F'`.
pub fn is_well_formed(bits: &str) -> bool {
    bits.chars().all(|c| matches!(c, '0' | '1' | 'F'))
}

/// Widest code a `u64` can carry.
const MAX_CODE_BITS: u8 = 64;

enum DataBits<'a> {
    Bits {
        chars: Chars<'a>,
        pending: Option<Symbol>,
        tri_state: bool,
    },
    Code {
        word: CodeWord,
        remaining: u8,
    },
}

impl<'a> DataBits<'a> {
    fn new(payload: Payload<'a>) -> Self {
        match payload {
            Payload::Bits(bits) => Self::Bits {
                chars: bits.chars(),
                pending: None,
                tri_state: bits.contains('F'),
            },
            Payload::Code(word) => Self::Code {
                word,
                remaining: word.length.min(MAX_CODE_BITS),
            },
        }
    }
}

impl Iterator for DataBits<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        match self {
            Self::Bits {
                chars,
                pending,
                tri_state,
            } => {
                if let Some(sym) = pending.take() {
                    return Some(sym);
                }
                loop {
                    let (first, second) = match chars.next()? {
                        '0' => (Symbol::Zero, Symbol::Zero),
                        '1' => (Symbol::One, Symbol::One),
                        'F' => (Symbol::Zero, Symbol::One),
                        _ => continue,
                    };
                    if *tri_state {
                        *pending = Some(second);
                    }
                    return Some(first);
                }
            }
            Self::Code { word, remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                if (word.code >> *remaining) & 1 == 1 {
                    Some(Symbol::One)
                } else {
                    Some(Symbol::Zero)
                }
            }
        }
    }
}

/// A single repeat of a payload under a given protocol and pulse length.
#[derive(Debug, Clone, Copy)]
pub struct Waveform<'a> {
    payload: Payload<'a>,
    protocol: Protocol,
    pulse_length_us: u16,
}

impl<'a> Waveform<'a> {
    pub fn new(payload: Payload<'a>, protocol: Protocol, pulse_length_us: u16) -> Self {
        Self {
            payload,
            protocol,
            pulse_length_us,
        }
    }

    /// Pulses of one repeat, data bits first, sync marker last.
    pub fn pulses(&self) -> impl Iterator<Item = Pulse> + use<'a> {
        let protocol = self.protocol;
        let unit = u32::from(self.pulse_length_us);
        DataBits::new(self.payload)
            .chain(core::iter::once(Symbol::Sync))
            .flat_map(move |sym| {
                let widths = match sym {
                    Symbol::Zero => protocol.zero,
                    Symbol::One => protocol.one,
                    Symbol::Sync => protocol.sync,
                };
                pair(widths, unit, protocol.inverted)
            })
    }

    /// Total on-air time of one repeat.
    pub fn duration_us(&self) -> u64 {
        self.pulses().map(|p| u64::from(p.duration_us)).sum()
    }
}

fn pair(widths: HighLow, unit: u32, inverted: bool) -> [Pulse; 2] {
    [
        Pulse {
            high: !inverted,
            duration_us: u32::from(widths.high) * unit,
        },
        Pulse {
            high: inverted,
            duration_us: u32::from(widths.low) * unit,
        },
    ]
}
