//! The review gate prompt loop

use std::future::Future;
use std::io::Write;
use std::pin::{Pin, pin};

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::GateError;
use crate::input::{Input, Keywords, classify};
use crate::protocol::{self, Emitter};

/// Why a session stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// User typed a completion keyword (uppercased)
    Completed(String),
    /// Input stream closed
    EndOfInput,
    /// Interrupt signal while waiting for input
    Interrupted,
    /// Unexpected fault inside the loop, with its description
    Failed(String),
}

/// Session lifecycle; `Stopped` is terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped(StopReason),
}

enum Event {
    Interrupted,
    Read(std::io::Result<usize>),
}

/// Line prompt loop over an async line reader and a flushing writer
pub struct ReviewGate<R, W: Write> {
    reader: R,
    emitter: Emitter<W>,
    keywords: Keywords,
    state: SessionState,
}

impl<R, W> ReviewGate<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, writer: W, keywords: Keywords) -> Self {
        Self {
            reader,
            emitter: Emitter::new(writer),
            keywords,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run the session until a completion keyword, EOF, `interrupt`
    /// resolving, or a fault
    ///
    /// Faults never escape: they are reported on the output and returned as
    /// [`StopReason::Failed`]. The closing banner is written on every path.
    pub async fn run<F>(&mut self, interrupt: F) -> StopReason
    where
        F: Future<Output = ()>,
    {
        if let SessionState::Stopped(reason) = &self.state {
            debug!("run called on stopped session: {:?}", reason);
            return reason.clone();
        }

        let interrupt = pin!(interrupt);
        let reason = match self.session(interrupt).await {
            Ok(reason) => reason,
            Err(e) => {
                let description = e.to_string();
                warn!("review gate failed: {}", description);
                if let Err(e) = self.emitter.line(&protocol::error_notice(&description)) {
                    warn!("could not report failure: {}", e);
                }
                StopReason::Failed(description)
            }
        };

        info!("review gate stopped: {:?}", reason);
        self.state = SessionState::Stopped(reason.clone());

        if let Err(e) = self.emitter.line(protocol::BANNER_EXITED) {
            warn!("could not write closing banner: {}", e);
        }
        reason
    }

    async fn session<F>(&mut self, mut interrupt: Pin<&mut F>) -> Result<StopReason, GateError>
    where
        F: Future<Output = ()>,
    {
        self.emitter.line(protocol::BANNER_ACTIVE)?;
        self.emitter.line(protocol::BANNER_AWAITING)?;
        self.emitter.line(&protocol::keyword_banner(&self.keywords))?;

        let mut line = String::new();
        loop {
            self.emitter.ready()?;
            line.clear();

            // Interrupt wins a tie so a pending Ctrl-C is not lost behind buffered input
            let event = tokio::select! {
                biased;
                _ = &mut interrupt => Event::Interrupted,
                read = self.reader.read_line(&mut line) => Event::Read(read),
            };

            let read = match event {
                Event::Interrupted => {
                    self.emitter.line(protocol::NOTICE_INTERRUPTED)?;
                    return Ok(StopReason::Interrupted);
                }
                Event::Read(read) => read.map_err(GateError::Read)?,
            };

            if read == 0 {
                self.emitter.line(protocol::NOTICE_EOF)?;
                return Ok(StopReason::EndOfInput);
            }

            match classify(&line, &self.keywords) {
                Input::Completion(command) => {
                    self.emitter.line(&protocol::completion_notice(&command))?;
                    return Ok(StopReason::Completed(command));
                }
                Input::SubPrompt(text) => {
                    debug!("sub-prompt ({} bytes)", text.len());
                    self.emitter.line(&protocol::sub_prompt_line(&text))?;
                }
                Input::Empty => {}
            }
        }
    }
}
