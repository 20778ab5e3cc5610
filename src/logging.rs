//!
//! Logger setup for the command line front end.
//!

use env_logger::{Builder, Env};
use log::{LevelFilter, SetLoggerError};

/// Crates whose records follow the configured level, everything else only reports warnings.
const OWN_CRATES: &[&str] = &["mosaic", "delaunay_mesh"];

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level of the mosaic crates when `RUST_LOG` is not set.
    pub level: LevelFilter,
    pub timestamps: bool,
}

impl LoggingConfig {
    /// `info` and no timestamps normally, `debug` with millisecond timestamps when verbose.
    pub fn verbose(verbose: bool) -> Self {
        if verbose {
            LoggingConfig {
                level: LevelFilter::Debug,
                timestamps: true,
            }
        } else {
            LoggingConfig::default()
        }
    }

    /// The `env_logger` filter used in place of a missing `RUST_LOG`.
    pub fn default_filter(&self) -> String {
        let level = self.level.to_string().to_lowercase();

        let mut filter = String::from("warn");
        for name in OWN_CRATES {
            filter.push_str(&format!(",{}={}", name, level));
        }
        filter
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: LevelFilter::Info,
            timestamps: false,
        }
    }
}

/// Install the global logger, fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), SetLoggerError> {
    let env = Env::default().default_filter_or(config.default_filter());

    let mut builder = Builder::from_env(env);
    if config.timestamps {
        builder.format_timestamp_millis();
    } else {
        builder.format_timestamp(None);
    }
    builder.try_init()?;

    log::debug!("logging initialized with {}", config.default_filter());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_switches_to_debug() {
        let quiet = LoggingConfig::verbose(false);
        assert_eq!(quiet.level, LevelFilter::Info);
        assert!(!quiet.timestamps);
        assert_eq!(quiet.default_filter(), "warn,mosaic=info,delaunay_mesh=info");

        let verbose = LoggingConfig::verbose(true);
        assert_eq!(verbose.level, LevelFilter::Debug);
        assert!(verbose.timestamps);
        assert_eq!(verbose.default_filter(), "warn,mosaic=debug,delaunay_mesh=debug");
    }

    #[test]
    fn only_one_logger() {
        let _ = init_logging(&LoggingConfig::default());
        assert!(init_logging(&LoggingConfig::verbose(true)).is_err());
    }
}
