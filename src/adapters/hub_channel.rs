//! Hub message channels.
//!
//! Uses `embassy-sync` bounded channels to bridge the hub transport (which
//! may run in its own task) with the synchronous control loop.  Both sides
//! share these static channels without heap allocation.
//!
//! ```text
//! ┌───────────────┐  "switch2 on"  ┌──────────────┐
//! │ Hub transport │───────────────▶│ Control loop │
//! │  (external)   │◀───────────────│  (registry)  │
//! └───────────────┘  "switch2 on"  └──────────────┘
//! ```
//!
//! Both directions are fire-and-forget: a full queue drops the message
//! with a warning.  The periodic refresh re-sends every state anyway.

use core::fmt::Write;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::String;
use log::{debug, warn};

use crate::app::events::StatusReport;
use crate::app::ports::StatusSink;

/// Longest hub message, device name included.
pub const HUB_MESSAGE_LEN: usize = 64;

/// One line of hub traffic.
pub type HubMessage = String<HUB_MESSAGE_LEN>;

/// Channel depth for inbound commands.
const INBOUND_DEPTH: usize = 8;

/// Channel depth for outbound reports.  Boot reports one line per device.
const OUTBOUND_DEPTH: usize = 16;

pub type HubChannel<const N: usize> = Channel<CriticalSectionRawMutex, HubMessage, N>;

/// Inbound commands: hub transport → control loop.
pub static INBOUND: HubChannel<INBOUND_DEPTH> = Channel::new();

/// Outbound status reports: control loop → hub transport.
pub static OUTBOUND: HubChannel<OUTBOUND_DEPTH> = Channel::new();

/// Queue a line of hub traffic.  Returns `false` if it was dropped.
pub fn push_message<const N: usize>(channel: &HubChannel<N>, line: &str) -> bool {
    let Ok(msg) = HubMessage::try_from(line) else {
        warn!("Hub: line too long ({} bytes), dropped", line.len());
        return false;
    };
    if channel.try_send(msg).is_err() {
        warn!("Hub: queue full, dropped '{}'", line);
        return false;
    }
    true
}

/// Next pending line, if any.  Never blocks.
pub fn take_message<const N: usize>(channel: &HubChannel<N>) -> Option<HubMessage> {
    channel.try_receive().ok()
}

/// [`StatusSink`] that formats reports onto an outbound channel.
pub struct HubStatusSink<'c, const N: usize> {
    channel: &'c HubChannel<N>,
}

impl<'c, const N: usize> HubStatusSink<'c, N> {
    pub fn new(channel: &'c HubChannel<N>) -> Self {
        Self { channel }
    }
}

impl<const N: usize> StatusSink for HubStatusSink<'_, N> {
    fn send(&mut self, report: &StatusReport<'_>) {
        let mut msg = HubMessage::new();
        if write!(msg, "{report}").is_err() {
            warn!("Hub: report for '{}' exceeds {} bytes, dropped", report.name, HUB_MESSAGE_LEN);
            return;
        }
        debug!("Hub: queue '{}'", msg);
        if self.channel.try_send(msg).is_err() {
            warn!("Hub: outbound queue full, dropped report for '{}'", report.name);
        }
    }
}
