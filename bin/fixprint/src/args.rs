use clap::Parser;

/** ARG PARSER **/
#[derive(Parser, Debug)]
#[command(
    name = "fixprint",
    about = "fixprint -- FIX protocol log printer",
    bin_name = "fixprint",
    disable_version_flag = true,
    after_help = "e.g.\n  fixprint myfix_server_protocol.log\n  fixprint -s -o 12 myfix_client_protocol.log\n  cat myfix_client_protocol.log | fixprint -"
)]
pub struct Args {
    #[clap(value_name = "INPUT", help = "FIX protocol log file, use '-' for stdin")]
    pub input: Option<String>,
    #[clap(
        short('o'),
        long = "offset",
        value_name = "OFFSET",
        help = "bytes to skip on each line before parsing FIX message",
        default_value_t = 0
    )]
    pub offset: usize,
    #[clap(short('s'), long = "summary", help = "summary, generate message summary")]
    pub summary: bool,
    #[clap(
        short('c'),
        long = "context",
        help = "print the decode context (begin string, version) then exit"
    )]
    pub context: bool,
    #[clap(
        short('b'),
        long = "begin-string",
        value_name = "BEGIN_STRING",
        help = "FIX version the log is expected to carry",
        default_value = "FIX.4.4"
    )]
    pub begin_string: String,
    #[clap(long = "no-validate", help = "do not verify BodyLength and CheckSum")]
    pub no_validate: bool,
    #[clap(
        short('k'),
        long = "skip-errors",
        help = "skip lines that fail to decode instead of stopping"
    )]
    pub skip_errors: bool,
    #[clap(short('v'), long = "version", help = "print version then exit")]
    pub version: bool,
    #[clap(short('q'), long = "quiet", action = clap::ArgAction::SetTrue)]
    pub quiet: bool,
    #[clap(short('l'), long = "loglevel", value_name = "LOG_LEVEL")]
    /// Sets the log level for diagnostics on stderr.
    ///
    /// Valid values are, in order of verbosity:
    ///
    /// `off`, `error`, `warn`, `info`, `debug`, `trace`
    ///
    /// Default is "warn".
    pub log_level: Option<String>,
}
/** ARG PARSER END**/
