//! Terminal mode management
//!
//! Tracks which terminal modes were enabled so the terminal can be restored
//! to its original state on exit or panic.

use anyhow::Result;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use std::io::{stdout, Write};

/// Tracks enabled terminal modes and provides cleanup.
///
/// Use [`TerminalModes::enable`] to set up the terminal, then call `undo()`
/// to restore the original state. Dropping the value also restores it.
#[derive(Debug, Default)]
pub struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalModes {
    /// Enable raw mode and the alternate screen.
    ///
    /// On error, automatically undoes any partially enabled modes.
    pub fn enable() -> Result<Self> {
        let mut modes = Self::default();

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(e.into());
        }
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            tracing::error!("Failed to enter alternate screen: {}", e);
            modes.undo();
            return Err(e.into());
        }
        modes.alternate_screen = true;
        tracing::debug!("Entered alternate screen");

        Ok(modes)
    }

    /// Restore the terminal by disabling whatever was enabled.
    ///
    /// Safe to call multiple times.
    pub fn undo(&mut self) {
        // Disable raw mode before leaving the alternate screen for cleaner output
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
            tracing::debug!("Disabled raw mode");
        }

        if self.alternate_screen {
            let _ = stdout().execute(LeaveAlternateScreen);
            self.alternate_screen = false;
            tracing::debug!("Left alternate screen");
        }

        let _ = stdout().flush();
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Unconditionally restore terminal state without tracking.
///
/// Intended for panic hooks where no [`TerminalModes`] instance is at hand.
pub fn emergency_cleanup() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().flush();
}
