// Terminal Haptics
// Stands in for a vibration motor by ringing the terminal bell

use std::io::{self, Write};
use tracing::debug;

use segmented_components::{HapticEngine, HapticNotification};

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl HapticEngine for TerminalBell {
    fn notify(&self, notification: HapticNotification) {
        debug!(?notification, "ringing terminal bell");
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            debug!(error = %e, "terminal bell failed");
        }
    }
}
