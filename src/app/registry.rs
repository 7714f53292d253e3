//! Device registry — the node's composition root.
//!
//! Owns a fixed-capacity list of borrowed devices and drives their
//! lifecycle hooks.  Inbound hub strings are routed by their first
//! token, which must equal a registered device's name.
//!
//! ```text
//!  hub ──"switch2 on"──▶ dispatch ──▶ devices["switch2"].command(..)
//!                                            │
//!  hub ◀──"switch2 on"── StatusSink ◀────────┘
//! ```

use heapless::Vec;
use log::{info, warn};

use crate::devices::Executor;
use crate::error::{RegistryError, Result};

use super::ports::StatusSink;

/// Default number of device slots.
pub const MAX_DEVICES: usize = 8;

pub struct DeviceRegistry<'a, const N: usize = MAX_DEVICES> {
    devices: Vec<&'a mut dyn Executor, N>,
}

impl<'a, const N: usize> DeviceRegistry<'a, N> {
    pub fn new() -> Self {
        Self { devices: Vec::new() }
    }

    /// Add a device.  Names must be unique.
    pub fn register(&mut self, device: &'a mut dyn Executor) -> Result<()> {
        if self.find(device.name()).is_some() {
            return Err(RegistryError::DuplicateName.into());
        }
        self.devices
            .push(device)
            .map_err(|_| RegistryError::Full)?;
        if let Some(added) = self.devices.last() {
            info!("Registry: added '{}' at slot {}", added.name(), self.devices.len() - 1);
        }
        Ok(())
    }

    /// Run `init` on every device in registration order.
    pub fn init_all(&mut self, sink: &mut dyn StatusSink) {
        for device in &mut self.devices {
            info!("Registry: init '{}'", device.name());
            device.init(sink);
        }
    }

    /// Route `text` to the device named by its first token.
    ///
    /// The device receives the full text.  Returns `false` when no
    /// device matches.
    pub fn dispatch(&mut self, text: &str, sink: &mut dyn StatusSink) -> bool {
        let target = text.split(' ').next().unwrap_or_default();
        match self.find(target) {
            Some(index) => {
                self.devices[index].command(text, sink);
                true
            }
            None => {
                warn!("Registry: no device for '{}'", text);
                false
            }
        }
    }

    /// Re-report every device's state.
    pub fn refresh_all(&mut self, sink: &mut dyn StatusSink) {
        for device in &mut self.devices {
            device.refresh(sink);
        }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.devices.iter().map(|d| d.name())
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.devices.iter().position(|d| d.name() == name)
    }
}

impl<const N: usize> Default for DeviceRegistry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
