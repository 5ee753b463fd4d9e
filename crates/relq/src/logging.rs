//! Logging configuration for relq
//!
//! Structured logging on the `tracing` framework. The engine emits `trace!`
//! and `debug!` events (join buckets, group counts, sort sizes); the sample
//! runner opens one `info` span per sample. Output goes to stdout, to a
//! daily-rolling file, or to both.

use relq_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output destination
#[derive(Debug, Clone)]
pub enum LogOutput {
    /// Output to stdout
    Stdout,
    /// Output to a file with daily rotation
    File(PathBuf),
    /// Output to both stdout and file
    Both(PathBuf),
}

/// Log format style
#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    /// Human-readable multi-line format (default)
    Pretty,
    /// Compact single-line format
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level filter, in `EnvFilter` syntax
    pub level: String,
    /// Output destination
    pub output: LogOutput,
    /// Format style
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            output: LogOutput::Stdout,
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// Create config with info level and stdout output
    pub fn info() -> Self {
        Self::default()
    }

    /// Create config with debug level
    pub fn debug() -> Self {
        Self {
            level: "debug".to_string(),
            ..Default::default()
        }
    }

    /// Create config with trace level; shows per-stage engine events
    pub fn trace() -> Self {
        Self {
            level: "trace".to_string(),
            ..Default::default()
        }
    }

    /// Create config with warn level
    pub fn warn() -> Self {
        Self {
            level: "warn".to_string(),
            ..Default::default()
        }
    }

    /// Set log output to file with rotation
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::File(path.into());
        self
    }

    /// Set log output to both stdout and file
    pub fn with_both<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::Both(path.into());
        self
    }

    /// Set log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set log level filter
    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    /// Build the level filter. `RUST_LOG`, when set, wins over `level`.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| Error::Config(format!("invalid log level {:?}: {}", self.level, e)))
    }

    /// Initialize global logging with this configuration
    ///
    /// Returns a guard that must be kept alive for file logging to work.
    /// When the guard is dropped, the writer thread flushes and stops.
    /// Fails with `Error::Config` on an invalid level or when a global
    /// subscriber is already installed.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use relq::logging::LogConfig;
    ///
    /// // Keep the guard alive for the lifetime of your application
    /// let _guard = LogConfig::info().init()?;
    /// # Ok::<(), relq::Error>(())
    /// ```
    pub fn init(self) -> Result<Option<WorkerGuard>> {
        let env_filter = self.env_filter()?;
        let registry = tracing_subscriber::registry().with(env_filter);

        let (installed, guard) = match self.output {
            LogOutput::Stdout => match self.format {
                LogFormat::Pretty => (registry.with(fmt::layer().pretty()).try_init(), None),
                LogFormat::Compact => (registry.with(fmt::layer().compact()).try_init(), None),
            },
            LogOutput::File(path) => {
                let (non_blocking, guard) = file_writer(&path);
                let installed = match self.format {
                    LogFormat::Pretty => registry
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false).pretty())
                        .try_init(),
                    LogFormat::Compact => registry
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false).compact())
                        .try_init(),
                };
                (installed, Some(guard))
            }
            LogOutput::Both(path) => {
                let (non_blocking, guard) = file_writer(&path);
                // Both outputs share the default format
                let installed = registry
                    .with(fmt::layer())
                    .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                    .try_init();
                (installed, Some(guard))
            }
        };

        installed.map_err(|e| Error::Config(format!("logging already initialized: {}", e)))?;
        Ok(guard)
    }
}

fn file_writer(path: &Path) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let file_appender = tracing_appender::rolling::daily(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("relq.log"),
    );
    tracing_appender::non_blocking(file_appender)
}
