//! Logging setup for the command line
//!
//! Console output goes to stderr so tables on stdout stay clean.
//! `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,

    /// Whether to include file/line information in logs
    pub include_location: bool,
}

impl LoggingConfig {
    /// Map `-v` occurrences to a filter
    pub fn from_verbosity(verbose: u8) -> Self {
        let default_filter = match verbose {
            0 => "warn",
            1 => "info,schemakit_editor=debug",
            2 => "debug",
            _ => "trace",
        };
        Self {
            default_filter: default_filter.to_string(),
            include_location: verbose >= 2,
        }
    }
}

pub fn init(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;

    tracing::debug!(filter = %config.default_filter, "Logging initialized");
    Ok(())
}
