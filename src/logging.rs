//! Logging setup
//!
//! Two layers: compact console output on stderr, quiet unless `-v` is given,
//! and a plain-text transcript next to the CSV export. `WINSTORE_REPAIR_LOG`
//! overrides the console filter.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{Result, output::logging_init};
use crate::output::RunArtifacts;

/// Environment variable holding a console filter directive
pub const LOG_ENV: &str = "WINSTORE_REPAIR_LOG";

/// Keeps the transcript writer alive; drop it last
#[must_use = "dropping the guard stops the transcript writer"]
pub struct LogGuard {
    _transcript: Option<WorkerGuard>,
}

fn console_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "winstore_repair=warn",
        1 => "winstore_repair=info",
        _ => "winstore_repair=debug",
    }
}

fn transcript_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "winstore_repair=info",
        1 => "winstore_repair=debug",
        _ => "winstore_repair=trace",
    }
}

/// Install the global subscriber.
///
/// With `transcript` set, the log file is created in the artifacts directory.
pub fn init(verbosity: u8, transcript: Option<&RunArtifacts>) -> Result<LogGuard> {
    let console_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(console_directive(verbosity)));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(console_filter);

    let (file_layer, guard) = match transcript {
        Some(artifacts) => {
            std::fs::create_dir_all(artifacts.dir())
                .map_err(|e| logging_init(format!("{}: {e}", artifacts.dir().display())))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(artifacts.stem())
                .filename_suffix("log")
                .build(artifacts.dir())
                .map_err(|e| logging_init(e.to_string()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(transcript_directive(verbosity)));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| logging_init(e.to_string()))?;

    Ok(LogGuard {
        _transcript: guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_raises_both_layers() {
        assert_eq!(console_directive(0), "winstore_repair=warn");
        assert_eq!(console_directive(1), "winstore_repair=info");
        assert_eq!(console_directive(5), "winstore_repair=debug");
        assert_eq!(transcript_directive(0), "winstore_repair=info");
        assert_eq!(transcript_directive(2), "winstore_repair=trace");
    }
}
