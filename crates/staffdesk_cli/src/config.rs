//! Command-line configuration.
//!
//! # Invariants
//! - Logging stays off unless `--log-dir` is given.
//! - Relative log directories resolve against the working directory.

use clap::Parser;
use staffdesk_core::default_log_level;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "staffdesk",
    version,
    about = "Interactive in-memory employee record manager"
)]
pub struct Config {
    /// Write rotating log files into this directory.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// One of trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Config {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or_else(|| default_log_level())
    }

    /// Returns the absolute log directory, if logging was requested.
    pub fn resolved_log_dir(&self) -> io::Result<Option<PathBuf>> {
        match &self.log_dir {
            None => Ok(None),
            Some(dir) if dir.is_absolute() => Ok(Some(dir.clone())),
            Some(dir) => Ok(Some(std::env::current_dir()?.join(dir))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use clap::Parser;
    use staffdesk_core::default_log_level;

    #[test]
    fn defaults_disable_logging() {
        let config = Config::try_parse_from(["staffdesk"]).unwrap();

        assert!(config.log_dir.is_none());
        assert!(config.resolved_log_dir().unwrap().is_none());
        assert_eq!(config.log_level(), default_log_level());
    }

    #[test]
    fn relative_log_dir_is_made_absolute() {
        let config =
            Config::try_parse_from(["staffdesk", "--log-dir", "logs", "--log-level", "warn"])
                .unwrap();

        let dir = config.resolved_log_dir().unwrap().unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("logs"));
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Config::try_parse_from(["staffdesk", "--persist"]).is_err());
    }
}
