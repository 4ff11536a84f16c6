use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter when neither `RUST_LOG` nor an explicit level is given.
/// Rendered messages go to stdout, so anything chattier than `warn` is opt-in.
pub const DEFAULT_LEVEL: &str = "warn";

pub fn init(log_level: Option<String>) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter(log_level))
        .init();
}

fn filter(log_level: Option<String>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(log_level))
}

/// Filter from an explicit level alone, `RUST_LOG` is not consulted
fn level_filter(log_level: Option<String>) -> EnvFilter {
    EnvFilter::new(log_level.unwrap_or_else(|| DEFAULT_LEVEL.into()))
}
