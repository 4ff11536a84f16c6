//! Replay captured FIX logs: read lines, decode, render, count.
//!
//! ```text
//! LineSource -> Replayer (Decoder) -> rendered lines
//!                   |
//!                   +-> MessageSummary -> SummaryFormatter
//! ```

pub mod application;
pub mod codec;
pub mod formatter;
pub mod interrupt;
pub mod replay;
pub mod source;
pub mod summary;

pub use application::{PrintConfig, print, print_with};
pub use codec::{DecodedMessage, Decoder, FixDecoder, FixTypeNames, TypeNames};
pub use formatter::{ReportError, SummaryFormatter};
pub use interrupt::InterruptFlag;
pub use replay::{ErrorPolicy, ReplayOptions, ReplayOutcome, Replayer, StopReason};
pub use source::{LineSource, SourceError};
pub use summary::MessageSummary;
