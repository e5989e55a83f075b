//! Logging Infrastructure
//!
//! Everything goes to the in-app log pane (tui-logger). When a log directory
//! is configured, a daily rotating JSON file is written as well.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map a filter directive to the log-crate level used by the log pane
fn pane_level(level: &str) -> log::LevelFilter {
    level
        .split(',')
        .next()
        .and_then(|l| l.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

/// Initialize the logging system
///
/// `RUST_LOG` wins over `level`. The returned guard must be held for the
/// lifetime of the program or buffered file output is lost.
pub fn init_logger(level: &str, log_dir: Option<&str>) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;

            let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "thal-admin.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(true)
                .with_current_span(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .try_init()?;

    // Dependencies that still log through the log crate
    let pane = pane_level(level);
    tui_logger::init_logger(pane).ok();
    tui_logger::set_default_level(pane);

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_level() {
        assert_eq!(pane_level("debug"), log::LevelFilter::Debug);
        assert_eq!(pane_level("warn,thal_client=debug"), log::LevelFilter::Warn);
        assert_eq!(pane_level("thal_admin=trace"), log::LevelFilter::Info);
    }
}
