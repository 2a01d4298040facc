//! Tracing subscriber setup.
//!
//! The fullscreen page owns the terminal, so log lines must never reach it:
//! interactive sessions log to a file or not at all, print mode logs to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    /// Append to a file.
    File(&'a Path),
    /// Write to stderr (print mode only).
    Stderr,
    /// Drop everything.
    Disabled,
}

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "folio_tui=debug,info" } else { "folio_tui=info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. Call once, before mounting.
pub fn init_logger(sink: LogSink<'_>, verbose: bool) -> Result<()> {
    match sink {
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter(verbose))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_target(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        LogSink::Stderr => {
            tracing_subscriber::registry()
                .with(filter(verbose))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr)
                        .compact(),
                )
                .init();
        }
        LogSink::Disabled => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_sink_installs_nothing() {
        assert!(init_logger(LogSink::Disabled, true).is_ok());
    }

    #[test]
    fn file_sink_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.log");
        init_logger(LogSink::File(&path), false).unwrap();
        tracing::info!("logger ready");
        assert!(path.exists());
    }
}
