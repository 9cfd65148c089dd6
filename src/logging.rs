//! Tracing subscriber setup.

use std::str::FromStr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "snip=info,tower_http=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` selects the filter and
/// `LOG_FORMAT` picks `pretty` or `json` output.
///
/// The returned guard flushes the non-blocking writer on drop and must be
/// held until the process exits.
pub fn init_logging() -> WorkerGuard {
    let format_raw = std::env::var("LOG_FORMAT").ok();
    let parsed = format_raw.as_deref().map(|raw| raw.trim().parse::<LogFormat>());
    let format = match &parsed {
        Some(Ok(format)) => *format,
        _ => LogFormat::Pretty,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_target(true);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }

    // the subscriber did not exist yet when the format was read
    if let Some(Err(e)) = parsed {
        tracing::warn!(error = %e, "LOG_FORMAT not recognised, using pretty output");
    }

    guard
}
