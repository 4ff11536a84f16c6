//! Presentation layer - footer and per message type summary

use std::io::{self, Write};

use crate::codec::TypeNames;
use crate::replay::ReplayOutcome;

/// Width the display name is padded to in summary lines
pub const NAME_WIDTH: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("No display name registered for message type {0:?}")]
    UnknownMessageType(String),

    #[error("Failed to write report")]
    Io(#[from] io::Error),
}

pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Write the `<N> messages decoded.` footer, then the summary when present.
    ///
    /// The footer is always written. Names are resolved for every tag before
    /// any summary line goes out, so a missing name never yields half a report.
    pub fn format<W: Write + ?Sized, N: TypeNames + ?Sized>(
        writer: &mut W,
        outcome: &ReplayOutcome,
        names: &N,
    ) -> Result<(), ReportError> {
        writeln!(writer, "{} messages decoded.", outcome.messages_decoded)?;

        let Some(summary) = &outcome.summary else {
            return Ok(());
        };

        let rows = summary
            .iter()
            .map(|(tag, count)| {
                names
                    .display_name(tag)
                    .map(|name| (name, tag, count))
                    .ok_or_else(|| ReportError::UnknownMessageType(tag.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (name, tag, count) in rows {
            writeln!(writer, "{}", summary_line(name, tag, count))?;
        }
        Ok(())
    }
}

pub fn summary_line(name: &str, tag: &str, count: u64) -> String {
    format!("{:<width$} (\"{}\")\t{}", name, tag, count, width = NAME_WIDTH)
}
