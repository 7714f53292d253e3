//! Hub-visible devices.
//!
//! Every device the hub can address implements [`Executor`]: the
//! [`DeviceRegistry`](crate::app::registry::DeviceRegistry) drives the
//! lifecycle hooks uniformly, without knowing the concrete device type.

use core::fmt;

use crate::app::ports::StatusSink;

pub mod rf_switch;

/// Logical state of a two-state device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchState {
    On,
    #[default]
    Off,
}

impl SwitchState {
    /// Wire word used in status reports and commands.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Parse the wire word.  Case-sensitive; anything else is `None`.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "on" => Some(Self::On),
            "off" => Some(Self::Off),
            _ => None,
        }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle hooks the registry invokes on a device.
///
/// Hooks run to completion on the control loop; none of them may block
/// waiting on the hub.
pub trait Executor {
    /// Name the hub addresses this device by.
    fn name(&self) -> &str;

    /// Called once after every device is registered.
    fn init(&mut self, sink: &mut dyn StatusSink);

    /// Handle an inbound `"<name> <command>"` string.
    fn command(&mut self, text: &str, sink: &mut dyn StatusSink);

    /// Periodic status resync.
    fn refresh(&mut self, sink: &mut dyn StatusSink);
}
