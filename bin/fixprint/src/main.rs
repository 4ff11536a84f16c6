use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use fixlog_codec::Context;
use fixlog_common::log;
use fixlog_replay::{ErrorPolicy, InterruptFlag, LineSource, PrintConfig};

mod args;

use args::Args;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // help goes to stderr too; anything but help is a usage error
            eprint!("{}", e.render());
            return match e.kind() {
                ErrorKind::DisplayHelp => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    if args.version {
        println!(
            "fixprint for fixlog version {}",
            env!("CARGO_PKG_VERSION")
        );
        println!("Released under the {} license.", env!("CARGO_PKG_LICENSE"));
        return Ok(ExitCode::SUCCESS);
    }

    let context = match Context::from_begin_string(&args.begin_string) {
        Ok(context) => context.with_validation(!args.no_validate),
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(1));
        }
    };

    if args.context {
        println!("Context FIX beginstring:{}", context.begin_string);
        println!("Context FIX version:{}", context.version);
        return Ok(ExitCode::SUCCESS);
    }

    let Some(input) = args.input else {
        eprint!("{}", Args::command().render_help());
        return Ok(ExitCode::from(1));
    };

    if !args.quiet {
        log::init(args.log_level);
    }

    let interrupt = InterruptFlag::new();
    if let Err(e) = interrupt.install() {
        tracing::warn!("Failed to install signal handler: {}", e);
    }

    let mut source = match LineSource::open(&input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(1));
        }
    };

    let config = PrintConfig {
        offset: args.offset,
        summary: args.summary,
        error_policy: if args.skip_errors {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Abort
        },
        context,
        ..PrintConfig::new(input)
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut err = stderr.lock();
    fixlog_replay::print(&mut source, &config, &mut out, &mut err, &interrupt)?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
