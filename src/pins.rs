//! GPIO pin assignments for the RfNode board.
//!
//! Single source of truth: `main.rs` references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// 433 MHz transmitter (FS1000A or similar ASK module)
// ---------------------------------------------------------------------------

/// Digital output driving the transmitter's DATA input.
/// Every RF switch on the board shares this line.
pub const RF_TX_GPIO: u8 = 4;
