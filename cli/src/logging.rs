use std::path::Path;

use osprey_core::api::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over `logging.level`.
///
/// Logs go to stderr so they never mix with command output. When
/// `logging.file` is set, a daily-rotated copy is written next to it; keep
/// the returned guard alive until exit or buffered lines are lost.
pub fn init(cfg: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let Some(path) = cfg.file.as_deref().map(Path::new) else {
        tracing_subscriber::registry().with(filter).with(stderr).init();
        return None;
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "osprey.log".to_string());
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, prefix));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    Some(guard)
}
