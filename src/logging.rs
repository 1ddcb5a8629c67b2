use crate::config::SkinShuffleConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_PREFIX: &str = "skinshuffle.log";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. When `config.log_dir`
/// is set, logs are also written to a daily rolling file; keep the returned
/// guard alive for as long as file logging should flush. Calling this again
/// after a subscriber is installed does nothing.
pub fn init_logging(config: &SkinShuffleConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let console = fmt::layer().with_target(true);

    match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = fmt::layer().with_ansi(false).with_writer(writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file)
                .try_init()
                .is_ok()
                .then_some(guard)
        }
        None => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .try_init();
            None
        }
    }
}
