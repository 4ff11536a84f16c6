//! The decode-and-summarize loop

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::codec::{DecodedMessage, Decoder};
use crate::interrupt::InterruptFlag;
use crate::source::LineSource;
use crate::summary::MessageSummary;

/// What to do with a line the decoder rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the run at the first bad line
    #[default]
    Abort,
    /// Count the bad line as rejected and keep going
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Bytes dropped from the start of every line before decoding
    pub offset: usize,
    pub summary: bool,
    pub error_policy: ErrorPolicy,
}

impl ReplayOptions {
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// End of stream
    Finished,
    Interrupted,
    DecodeFailed { line_number: u64, error: String },
}

#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    /// Physical lines read, blank and skipped ones included
    pub lines_read: u64,
    pub messages_decoded: u64,
    pub lines_rejected: u64,
    /// Present only in summary mode
    pub summary: Option<MessageSummary>,
    pub stop: StopReason,
}

impl ReplayOutcome {
    fn new(summary: bool) -> Self {
        Self {
            lines_read: 0,
            messages_decoded: 0,
            lines_rejected: 0,
            summary: summary.then(MessageSummary::new),
            stop: StopReason::Finished,
        }
    }
}

pub struct Replayer<D> {
    decoder: D,
    options: ReplayOptions,
}

impl<D: Decoder> Replayer<D> {
    pub fn new(decoder: D, options: ReplayOptions) -> Self {
        Self { decoder, options }
    }

    /// Replay `source` to `out` until end of stream, a fatal decode error or
    /// an interrupt. Only I/O failures on the streams themselves are errors.
    pub fn run<W: Write + ?Sized>(
        &self,
        source: &mut LineSource,
        out: &mut W,
        interrupt: &InterruptFlag,
    ) -> io::Result<ReplayOutcome> {
        let mut outcome = ReplayOutcome::new(self.options.summary);
        info!(
            "Replaying {} (offset: {}, summary: {})",
            source.origin(),
            self.options.offset,
            self.options.summary
        );

        loop {
            if interrupt.is_set() {
                outcome.stop = StopReason::Interrupted;
                break;
            }

            let Some(line) = source.next_line()? else {
                break;
            };
            outcome.lines_read += 1;

            let Some(payload) = strip_offset(line, self.options.offset) else {
                debug!("Skipping empty line {}", outcome.lines_read);
                continue;
            };

            match self.decoder.decode(payload) {
                Ok(message) => {
                    writeln!(out, "{}", message)?;
                    outcome.messages_decoded += 1;
                    if let Some(summary) = outcome.summary.as_mut() {
                        summary.record(message.msg_type());
                    }
                }
                Err(e) => match self.options.error_policy {
                    ErrorPolicy::Abort => {
                        outcome.stop = StopReason::DecodeFailed {
                            line_number: outcome.lines_read,
                            error: e.to_string(),
                        };
                        break;
                    }
                    ErrorPolicy::Skip => {
                        warn!("Skipping line {}: {}", outcome.lines_read, e);
                        outcome.lines_rejected += 1;
                    }
                },
            }
        }

        info!(
            "Replay stopped ({:?}): {} lines read, {} messages decoded",
            outcome.stop, outcome.lines_read, outcome.messages_decoded
        );
        Ok(outcome)
    }
}

/// Part of `line` after the first `offset` bytes, `None` when nothing is left.
fn strip_offset(line: &[u8], offset: usize) -> Option<&[u8]> {
    if line.len() <= offset {
        None
    } else {
        Some(&line[offset..])
    }
}
