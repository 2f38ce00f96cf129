// src/logging.rs

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Destination of one log route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Plain text to standard output.
    Stdout,
    /// Daily-rolling plain text file.
    File,
    /// HTML-formatted records rendered into the page by the web layer.
    Html,
}

/// One log route: a sink plus its on/off flag.
#[derive(Debug, Clone)]
pub struct LogRoute {
    pub sink: LogSink,
    pub enabled: bool,
}

/// Enumerable set of log routes.
///
/// Mirrors the application's logging configuration so rendering code can turn
/// individual sinks off before producing non-HTML output.
#[derive(Debug, Clone)]
pub struct LogRoutes {
    routes: Vec<LogRoute>,
}

impl Default for LogRoutes {
    /// Stdout, daily file and HTML routes, all enabled.
    fn default() -> Self {
        Self {
            routes: vec![
                LogRoute {
                    sink: LogSink::Stdout,
                    enabled: true,
                },
                LogRoute {
                    sink: LogSink::File,
                    enabled: true,
                },
                LogRoute {
                    sink: LogSink::Html,
                    enabled: true,
                },
            ],
        }
    }
}

impl LogRoutes {
    pub fn routes(&self) -> &[LogRoute] {
        &self.routes
    }

    fn is_enabled(&self, sink: LogSink) -> bool {
        self.routes.iter().any(|r| r.enabled && r.sink == sink)
    }

    /// Turn off every HTML route without touching the rest. Call this before
    /// producing plain-text output; a debug panel inside a CSV export would
    /// corrupt it.
    pub fn disable_html(&mut self) {
        for route in &mut self.routes {
            route.enabled = route.enabled && route.sink != LogSink::Html;
        }
    }

    /// Install a tracing subscriber with one layer per enabled process-local
    /// route (stdout, rolling file). HTML routes have no layer here, they are
    /// rendered by the surrounding web layer, which consults the flags via
    /// [`LogRoutes::routes`].
    ///
    /// Returns the guards keeping the non-blocking file writer alive; the
    /// caller holds them for the program lifetime.
    pub fn init(&self, config: &Config) -> Vec<WorkerGuard> {
        let mut guards = Vec::new();

        let env_filter = EnvFilter::new(&config.rust_log);

        let stdout_layer = self
            .is_enabled(LogSink::Stdout)
            .then(|| fmt::layer().with_writer(std::io::stdout).with_target(false));

        let file_layer = self.is_enabled(LogSink::File).then(|| {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            guards.push(guard);
            fmt::layer().with_writer(non_blocking).with_ansi(false)
        });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stdout_layer)
            .with(file_layer)
            .init();

        guards
    }
}
