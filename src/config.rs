//! Runtime settings and logging bootstrap.
//!
//! Settings come from the environment (optionally seeded from a `.env` file).

use crate::system::PingOptions;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;

pub const LOG_CONFIG_VAR: &str = "IP_TOOLS_LOG_CONFIG";
pub const PING_COUNT_VAR: &str = "IP_TOOLS_PING_COUNT";
pub const PING_SIZE_VAR: &str = "IP_TOOLS_PING_SIZE";
pub const PING_TTL_VAR: &str = "IP_TOOLS_PING_TTL";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    pub ping: PingOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            ping: PingOptions::default(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment and `.env`.
    pub fn from_env() -> Settings {
        dotenv::dotenv().ok();
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// Values that fail to parse keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let number = |key: &str, default: u32| -> u32 {
            match lookup(key) {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    log::warn!("ignoring {key}={raw:?}, using {default}");
                    default
                }),
                None => default,
            }
        };

        Settings {
            log_config: lookup(LOG_CONFIG_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_config),
            ping: PingOptions {
                count: number(PING_COUNT_VAR, defaults.ping.count),
                size: number(PING_SIZE_VAR, defaults.ping.size),
                ttl: number(PING_TTL_VAR, defaults.ping.ttl),
            },
        }
    }

    pub fn ping_options(&self) -> PingOptions {
        self.ping
    }
}

/// Initialise log4rs from the configured YAML file, or log warnings to stderr.
pub fn init_logging(settings: &Settings) -> Result<(), Box<dyn Error>> {
    if settings.log_config.exists() {
        log4rs::init_file(&settings.log_config, Default::default())?;
        log::debug!("logging configured from {}", settings.log_config.display());
        return Ok(());
    }
    log4rs::init_config(fallback_config()?)?;
    Ok(())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}
