//! ReviewGate - interactive review gate for supervised agent sessions
//!
//! Reads lines from stdin and turns them into a small line protocol on stdout
//! that a supervising process watches for.
//!
//! # Protocol
//!
//! ```text
//! --- FINAL REVIEW GATE ACTIVE ---
//! AI has completed its primary actions. Awaiting your review or further sub-prompts.
//! Type your sub-prompt, or one of: 'TASK_COMPLETE', 'Done', 'Quit', 'q' to signal completion.
//! REVIEW_GATE_AWAITING_INPUT:            <- ready-signal, no newline
//! USER_REVIEW_SUB_PROMPT: <text>         <- one per free-text line
//! --- REVIEW GATE: USER SIGNALED COMPLETION WITH 'DONE' ---
//! --- FINAL REVIEW GATE SCRIPT EXITED ---
//! ```
//!
//! # Example
//!
//! ```ignore
//! use reviewgate::{Keywords, ReviewGate};
//!
//! let reader = tokio::io::BufReader::new(tokio::io::stdin());
//! let mut gate = ReviewGate::new(reader, std::io::stdout(), Keywords::default());
//! let reason = gate.run(std::future::pending::<()>()).await;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod input;
pub mod protocol;

pub use error::GateError;
pub use gate::{ReviewGate, SessionState, StopReason};
pub use input::{Input, Keywords, classify};

/// Completion keywords as shown in the banner
pub const DEFAULT_KEYWORDS: &[&str] = &["TASK_COMPLETE", "Done", "Quit", "q"];
