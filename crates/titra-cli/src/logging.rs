use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Maps `-q` and the `-v` count to the most verbose level that is emitted.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber. Logs go to stderr and, with `log_file`, to
/// that file as plain text; stdout is left to the report.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(&path).map_err(CliError::Io)?;
            subscriber
                .with(fmt::layer().with_writer(file).with_ansi(false))
                .try_init()
        }
        None => subscriber.try_init(),
    };

    installed.map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing::{debug, error, info, warn};

    fn capture_at(filter: LevelFilter, emit: impl FnOnce()) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.log");
        let file = File::create(&path).unwrap();
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(file).with_ansi(false));

        tracing::subscriber::with_default(subscriber, emit);
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn verbosity_count_maps_to_increasing_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(3, false), LevelFilter::TRACE);
        assert_eq!(level_filter(9, false), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_keeps_only_errors() {
        assert_eq!(level_filter(0, true), LevelFilter::ERROR);
        assert_eq!(level_filter(2, true), LevelFilter::ERROR);
    }

    #[test]
    #[serial]
    fn default_level_drops_info_but_keeps_warnings() {
        let content = capture_at(level_filter(0, false), || {
            info!("pH group started");
            warn!("non-binary site state");
        });
        assert!(!content.contains("pH group started"));
        assert!(content.contains("non-binary site state"));
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    #[serial]
    fn quiet_level_drops_warnings_but_keeps_errors() {
        let content = capture_at(level_filter(0, true), || {
            warn!("non-binary site state");
            error!("log unreadable");
        });
        assert!(!content.contains("non-binary site state"));
        assert!(content.contains("log unreadable"));
    }

    #[test]
    #[serial]
    fn debug_level_emits_per_file_messages() {
        let content = capture_at(level_filter(2, false), || {
            debug!("run.log: pH 7.00 with 5 cycles.");
        });
        assert!(content.contains("run.log: pH 7.00 with 5 cycles."));
        assert!(content.contains("DEBUG"));
    }

    #[test]
    #[serial]
    fn directory_as_log_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = setup_logging(0, false, Some(dir.path().to_path_buf()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    #[serial]
    fn second_installation_is_reported_as_an_error() {
        let _ = setup_logging(0, false, None);
        let result = setup_logging(0, false, None);
        assert!(matches!(result, Err(CliError::Other(_))));
    }
}
