//! Line protocol spoken on stdout
//!
//! A supervising process greps stdout for these exact strings, so they are
//! kept byte-for-byte stable.

use std::io::Write;

use log::debug;

use crate::error::GateError;
use crate::input::Keywords;

pub const BANNER_ACTIVE: &str = "--- FINAL REVIEW GATE ACTIVE ---";
pub const BANNER_AWAITING: &str = "AI has completed its primary actions. Awaiting your review or further sub-prompts.";
pub const BANNER_EXITED: &str = "--- FINAL REVIEW GATE SCRIPT EXITED ---";

/// Ready-signal, printed without a trailing newline
pub const READY_SIGNAL: &str = "REVIEW_GATE_AWAITING_INPUT:";
pub const SUB_PROMPT_PREFIX: &str = "USER_REVIEW_SUB_PROMPT: ";

pub const NOTICE_EOF: &str = "--- REVIEW GATE: STDIN CLOSED (EOF), EXITING SCRIPT ---";
pub const NOTICE_INTERRUPTED: &str = "--- REVIEW GATE: SESSION INTERRUPTED BY USER (KeyboardInterrupt) ---";

/// Third banner line, listing the completion keywords
pub fn keyword_banner(keywords: &Keywords) -> String {
    format!(
        "Type your sub-prompt, or one of: {} to signal completion.",
        keywords.banner_list()
    )
}

pub fn completion_notice(command: &str) -> String {
    format!("--- REVIEW GATE: USER SIGNALED COMPLETION WITH '{}' ---", command)
}

pub fn sub_prompt_line(text: &str) -> String {
    format!("{}{}", SUB_PROMPT_PREFIX, text)
}

pub fn error_notice(description: &str) -> String {
    format!("--- REVIEW GATE SCRIPT ERROR: {} ---", description)
}

/// Writer that flushes after every write
///
/// Flush failures are logged and ignored; the data may still reach the
/// reader with default buffering.
pub struct Emitter<W: Write> {
    out: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one full line
    pub fn line(&mut self, text: &str) -> Result<(), GateError> {
        writeln!(self.out, "{}", text).map_err(GateError::Write)?;
        self.flush();
        Ok(())
    }

    /// Write the ready-signal with no newline
    pub fn ready(&mut self) -> Result<(), GateError> {
        self.out.write_all(READY_SIGNAL.as_bytes()).map_err(GateError::Write)?;
        self.flush();
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            debug!("flush failed, continuing with default buffering: {}", e);
        }
    }
}
