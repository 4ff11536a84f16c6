//! Application layer - orchestrates source, replay loop and report

use anyhow::{Context as _, Result};
use std::io::Write;

use fixlog_codec::Context;

use crate::codec::{Decoder, FixDecoder, FixTypeNames, TypeNames};
use crate::formatter::SummaryFormatter;
use crate::interrupt::InterruptFlag;
use crate::replay::{ErrorPolicy, ReplayOptions, ReplayOutcome, Replayer, StopReason};
use crate::source::LineSource;

/// Everything a print run needs besides its streams
#[derive(Debug, Clone)]
pub struct PrintConfig {
    pub input: String,
    pub offset: usize,
    pub summary: bool,
    pub error_policy: ErrorPolicy,
    pub context: Context,
}

impl PrintConfig {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            offset: 0,
            summary: false,
            error_policy: ErrorPolicy::default(),
            context: Context::default(),
        }
    }

    pub fn replay_options(&self) -> ReplayOptions {
        ReplayOptions::default()
            .with_offset(self.offset)
            .with_summary(self.summary)
            .with_error_policy(self.error_policy)
    }
}

/// Print a FIX log from an already opened source
pub fn print(
    source: &mut LineSource,
    config: &PrintConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
    interrupt: &InterruptFlag,
) -> Result<ReplayOutcome> {
    let replayer = Replayer::new(
        FixDecoder::new(config.context.clone()),
        config.replay_options(),
    );
    print_with(source, &replayer, &FixTypeNames, out, err, interrupt)
}

/// Run the replay loop, report why it stopped on `err`, then write the
/// footer and summary to `out`. Partial results are reported after a decode
/// failure or an interrupt.
pub fn print_with<D: Decoder, N: TypeNames + ?Sized>(
    source: &mut LineSource,
    replayer: &Replayer<D>,
    names: &N,
    out: &mut dyn Write,
    err: &mut dyn Write,
    interrupt: &InterruptFlag,
) -> Result<ReplayOutcome> {
    let outcome = replayer
        .run(source, out, interrupt)
        .with_context(|| format!("Failed to replay {}", source.origin()))?;
    out.flush().with_context(|| "Failed to flush output")?;

    match &outcome.stop {
        StopReason::Finished => {}
        StopReason::Interrupted => writeln!(err, "interrupted")?,
        StopReason::DecodeFailed { line_number, error } => {
            writeln!(err, "error: line {}: {}", line_number, error)?
        }
    }
    if outcome.lines_rejected > 0 {
        writeln!(err, "{} lines rejected.", outcome.lines_rejected)?;
    }

    SummaryFormatter::format(out, &outcome, names)
        .with_context(|| "Failed to write summary")?;
    out.flush().with_context(|| "Failed to flush output")?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlog_codec::{Message, PIPE};
    use std::io::Cursor;

    fn line(msg_type: &str) -> Vec<u8> {
        let mut raw = Message::builder("FIX.4.4", msg_type)
            .field(49, "CLIENT")
            .field(56, "BROKER")
            .encode(PIPE);
        raw.push(b'\n');
        raw
    }

    fn run(data: Vec<u8>, config: &PrintConfig) -> (ReplayOutcome, String, String) {
        let mut source = LineSource::from_reader(Cursor::new(data));
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let outcome = print(&mut source, config, &mut out, &mut err, &InterruptFlag::new()).unwrap();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_replay_options_from_config() {
        let config = PrintConfig {
            offset: 12,
            summary: true,
            error_policy: ErrorPolicy::Skip,
            ..PrintConfig::new("-")
        };
        let options = config.replay_options();
        assert_eq!(options.offset, 12);
        assert!(options.summary);
        assert_eq!(options.error_policy, ErrorPolicy::Skip);
    }

    #[test]
    fn test_print_reports_decode_failure() {
        let mut data = line("A");
        data.extend_from_slice(b"not a fix message\n");
        let config = PrintConfig {
            summary: true,
            ..PrintConfig::new("-")
        };

        let (outcome, out, err) = run(data, &config);
        assert_eq!(outcome.messages_decoded, 1);
        assert!(out.starts_with("Logon(\"A\") BeginString(8)=FIX.4.4"));
        assert!(out.ends_with("1 messages decoded.\nLogon                (\"A\")\t1\n"));
        assert_eq!(
            err,
            "error: line 2: Malformed field at byte 0: missing '='\n"
        );
    }

    #[test]
    fn test_print_reports_rejected_lines() {
        let mut data = b"junk\n".to_vec();
        data.extend(line("0"));
        let config = PrintConfig {
            error_policy: ErrorPolicy::Skip,
            ..PrintConfig::new("-")
        };

        let (outcome, out, err) = run(data, &config);
        assert_eq!(outcome.stop, StopReason::Finished);
        assert!(out.ends_with("1 messages decoded.\n"));
        assert_eq!(err, "1 lines rejected.\n");
    }
}
