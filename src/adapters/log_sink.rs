//! Log-based status sink adapter.
//!
//! Implements [`StatusSink`] by writing every status report to the
//! ESP-IDF logger (UART / USB-CDC in production).  Paired with the hub
//! sink in `main` so the serial console mirrors hub traffic.

use log::info;

use crate::app::events::StatusReport;
use crate::app::ports::StatusSink;

/// Adapter that logs every [`StatusReport`] to the serial console.
pub struct LogStatusSink;

impl LogStatusSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogStatusSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for LogStatusSink {
    fn send(&mut self, report: &StatusReport<'_>) {
        info!("STATUS | {}", report);
    }
}
