//! Logging adapter: forwards the domain [`OperationLogger`] port to
//! `tracing`, keeping one place that knows `tracing` is the backend;
//! everywhere else programs against the port.

use mcb_domain::ports::{LogLevel, OperationLogger};

fn level_to_tracing(level: LogLevel, context: &str, message: &str, detail: Option<&dyn std::fmt::Display>) {
    macro_rules! emit {
        ($lvl:expr) => {
            if let Some(d) = detail {
                tracing::event!($lvl, context = %context, detail = %d, "{}", message);
            } else {
                tracing::event!($lvl, context = %context, "{}", message);
            }
        };
    }
    match level {
        LogLevel::Error => emit!(tracing::Level::ERROR),
        LogLevel::Warn => emit!(tracing::Level::WARN),
        LogLevel::Info => emit!(tracing::Level::INFO),
        LogLevel::Debug => emit!(tracing::Level::DEBUG),
        LogLevel::Trace => emit!(tracing::Level::TRACE),
    }
}

/// [`OperationLogger`] backed by `tracing::event!`, registered once at
/// process startup and shared as an `Arc<dyn OperationLogger>` everywhere
/// else in the kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOperationLogger;

impl TracingOperationLogger {
    /// Construct a new tracing-backed logger.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl OperationLogger for TracingOperationLogger {
    fn log(&self, level: LogLevel, context: &str, message: &str, detail: Option<&dyn std::fmt::Display>) {
        level_to_tracing(level, context, message, detail);
    }
}

/// Install a global `tracing_subscriber` fmt layer at the given verbosity
///. Call once at
/// process startup, before any handler runs.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
