//! Boot animation: a fixed list of lines revealed one at a time.
//!
//! The sequence never sleeps. The host calls [`BootSequence::tick`] with the
//! elapsed milliseconds and prints whatever it returns.

/// Lines shown while the terminal boots.
pub static BOOT_LINES: [&str; 14] = [
    "VAULT-TEC UNIFIED OPERATING SYSTEM",
    "VERSION 2.03.1 BUILD 1097",
    "",
    "INITIALIZING SYSTEM MODULES...",
    "> LOADING VAULT-TEC DATABASE.............. [OK]",
    "> INITIALIZING CHARACTER SUBSYSTEMS....... [OK]",
    "> MOUNTING DATA ARCHIVES.................. [OK]",
    "> CONNECTING TO GAME STATE................ [OK]",
    "> LOADING MAP COORDINATES................. [OK]",
    "> SYNCHRONIZING TIMELINE.................. [OK]",
    "",
    "SYSTEM READY.",
    "WELCOME, OVERSEER.",
    "",
];

/// Banner lines logged once boot completes.
pub const WELCOME_LINES: [&str; 2] = [
    "VAULT-TEC UNIFIED OPERATING SYSTEM v2.03.1",
    "Type HELP for available commands.",
];

const FIRST_LINE_MS: u32 = 500;
const BLANK_LINE_MS: u32 = 200;
const LINE_MS: u32 = 300;
/// Pause after the last line before boot counts as complete.
pub const FINAL_HOLD_MS: u32 = 500;

/// Progress rows start with `>`.
pub fn is_progress_line(line: &str) -> bool {
    line.starts_with('>')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Running,
    Complete,
    Cancelled,
}

/// Restartable, cancellable boot animation.
#[derive(Debug, Clone)]
pub struct BootSequence {
    shown: usize,
    /// Time accumulated toward the next step.
    elapsed_ms: u32,
    phase: Phase,
}

impl Default for BootSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl BootSequence {
    pub fn new() -> Self {
        Self {
            shown: 0,
            elapsed_ms: 0,
            phase: Phase::Running,
        }
    }

    /// Delay before line `index` appears, or the final hold past the end.
    fn step_delay(index: usize) -> u32 {
        match BOOT_LINES.get(index) {
            _ if index == 0 => FIRST_LINE_MS,
            Some(line) if line.is_empty() => BLANK_LINE_MS,
            Some(_) => LINE_MS,
            None => FINAL_HOLD_MS,
        }
    }

    /// Advance by `dt_ms`. Returns the lines revealed during this tick.
    pub fn tick(&mut self, dt_ms: u32) -> &'static [&'static str] {
        if self.phase != Phase::Running {
            return &[];
        }
        let start = self.shown;
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        loop {
            let delay = Self::step_delay(self.shown);
            if self.elapsed_ms < delay {
                break;
            }
            self.elapsed_ms -= delay;
            if self.shown == BOOT_LINES.len() {
                log::debug!("Boot sequence complete");
                self.phase = Phase::Complete;
                self.elapsed_ms = 0;
                break;
            }
            self.shown += 1;
        }
        &BOOT_LINES[start..self.shown]
    }

    /// Milliseconds until the next line or completion. `None` once stopped.
    pub fn next_delay_ms(&self) -> Option<u32> {
        (self.phase == Phase::Running)
            .then(|| Self::step_delay(self.shown).saturating_sub(self.elapsed_ms))
    }

    /// Lines revealed so far.
    pub fn lines(&self) -> &'static [&'static str] {
        &BOOT_LINES[..self.shown]
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn is_cancelled(&self) -> bool {
        self.phase == Phase::Cancelled
    }

    /// Stop without completing. Further ticks do nothing.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Cancelled;
        }
    }

    /// Start over from the first line.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Total time from start to completion.
    pub fn total_duration_ms() -> u32 {
        (0..=BOOT_LINES.len()).map(Self::step_delay).sum()
    }
}
