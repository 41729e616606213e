//! Logging shim.
//!
//! Enable with `--features tracing`. Without the feature every log macro is a
//! no-op, so the library stays silent and dependency-free by default.

/// How chatty the library should be once a subscriber is installed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Disable library logging (default).
    #[default]
    None,
    /// Only failures.
    Error,
    /// Failures plus request-level progress.
    Info,
    /// Everything, including cookie and response details.
    Debug,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level, scoped to this crate.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::None => "dorfyn=off",
            LogLevel::Error => "dorfyn=error",
            LogLevel::Info => "dorfyn=info",
            LogLevel::Debug => "dorfyn=debug",
        }
    }
}

/// Install a stderr `fmt` subscriber filtered to `level`.
///
/// `RUST_LOG` takes precedence when set. Calling this twice is harmless; the
/// second installation attempt is ignored.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init();
}

#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_tracing(_level: LogLevel) {}

// `warn` is only used by the `debug-dumps` writer.
#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! debug_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! info_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! warn_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! error_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug_noop as debug;
#[cfg(not(feature = "tracing"))]
pub(crate) use error_noop as error;
#[cfg(not(feature = "tracing"))]
pub(crate) use info_noop as info;
#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use warn_noop as warn;
