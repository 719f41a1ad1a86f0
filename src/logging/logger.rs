// file: src/logging/logger.rs
// version: 1.0.0
// guid: fa02a10d-404d-49ed-aeb7-93a70bc4bd0d

//! Logger initialization and configuration

use crate::error::SetupError;
use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// `RUST_LOG` wins over the flags when it is set. Logs go to stderr so that
/// stdout only carries the manual instructions.
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose, quiet));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| SetupError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

fn default_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Run `f` inside an `operation` span named after the pipeline step
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_fails_gracefully() {
        // The global subscriber can only be set once per process, so the
        // second call must surface an error rather than panic.
        let _ = init_logger(false, false);
        let result = init_logger(true, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(false, true).to_string(), "error");
        assert_eq!(default_filter(true, false).to_string(), "debug");
        assert_eq!(default_filter(false, false).to_string(), "info");
        // quiet wins over verbose
        assert_eq!(default_filter(true, true).to_string(), "error");
    }

    #[test]
    fn test_with_operation_span() {
        let mut executed = false;

        let result = with_operation_span("identity", || {
            executed = true;
            "resolved"
        });

        assert!(executed);
        assert_eq!(result, "resolved");
    }
}
