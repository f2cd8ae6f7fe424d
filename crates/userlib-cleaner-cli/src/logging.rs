use crate::progress::BarAwareStderr;
use std::env;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Configure tracing once for the whole process.
///
/// `TRACING_LEVEL` wins when set; otherwise `verbose` selects `debug` over `info`.
/// Setting `LOG_FILE_PATH` adds a plain-text file log next to the terminal output.
/// The returned guard must stay alive until exit so the file writer gets flushed.
pub fn init_logger(verbose: bool) -> Option<WorkerGuard> {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| default_filter.to_string());
    let filter_layer = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let (file_layer, guard) = match env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let file_appender = tracing_appender::rolling::never("./", log_file_path);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(BarAwareStderr::default)
                .compact()
                .with_target(false)
                .without_time()
                .with_ansi(true),
        )
        .with(file_layer)
        .with(filter_layer)
        .init();

    debug!("Tracing is configured (file logging: {}).", guard.is_some());

    guard
}
