//! Command-line arguments
//!
//! Every flag can also come from the environment; clap applies the
//! command line first, then the variable.

use std::path::PathBuf;

use clap::Parser;
use passboard_common::config::{default_config_path, ConfigOverrides};

/// Command-line arguments for passboard-server
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "passboard-server")]
#[command(about = "Recruitment pass dashboard API")]
#[command(version)]
pub struct Args {
    /// Address to bind
    #[arg(long, env = "PASSBOARD_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory holding the built dashboard
    #[arg(long, env = "PASSBOARD_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Log level for passboard crates (RUST_LOG, when set, takes over)
    #[arg(long, env = "PASSBOARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// TOML config file
    #[arg(short, long, env = "PASSBOARD_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Explicit config path, else the platform default
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(default_config_path)
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            static_dir: self.static_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}
