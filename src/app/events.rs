//! Outbound status reports.
//!
//! Devices emit these through the [`StatusSink`](super::ports::StatusSink)
//! port.  The `Display` form is the exact string the hub expects.

use core::fmt;

use crate::devices::SwitchState;

/// `"<name> on"` / `"<name> off"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport<'a> {
    pub name: &'a str,
    pub state: SwitchState,
}

impl<'a> StatusReport<'a> {
    pub fn new(name: &'a str, state: SwitchState) -> Self {
        Self { name, state }
    }
}

impl fmt::Display for StatusReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.state)
    }
}
