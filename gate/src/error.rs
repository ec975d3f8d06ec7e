//! Gate error types

use thiserror::Error;

/// Faults raised inside the prompt loop
#[derive(Debug, Error)]
pub enum GateError {
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}
