//! Configuration file support for scorecard.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `SCORECARD_`, e.g.,
//!    `SCORECARD_GITHUB_TOKEN`)
//! 3. Config file (~/.config/scorecard/config.toml or ./scorecard.toml)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [github]
//! token = "ghp_..."  # or use SCORECARD_GITHUB_TOKEN env var
//!
//! [handles]
//! leetcode = "neal_wu"
//! codeforces = "tourist"
//! atcoder = "tourist"
//! ```

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration.
    pub github: GitHubConfig,
    /// Default handles used when the scrape command gets no flags.
    pub handles: HandlesConfig,
}

/// GitHub configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub API token; unlocks pinned repositories and raises REST rate
    /// limits. Can also be set via SCORECARD_GITHUB_TOKEN.
    pub token: Option<String>,
}

/// Default per-platform handles.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HandlesConfig {
    pub leetcode: Option<String>,
    pub codechef: Option<String>,
    pub codeforces: Option<String>,
    pub atcoder: Option<String>,
    pub hackerrank: Option<String>,
    pub github: Option<String>,
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Missing or malformed sources degrade to defaults; configuration can
    /// never fail the program.
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(dirs) = ProjectDirs::from("", "", "scorecard") {
            let path = dirs.config_dir().join("config.toml");
            builder = builder.add_source(
                File::from(path).format(FileFormat::Toml).required(false),
            );
        }
        builder = builder.add_source(
            File::with_name("scorecard.toml")
                .format(FileFormat::Toml)
                .required(false),
        );
        builder = builder.add_source(Environment::with_prefix("SCORECARD").separator("_"));

        match builder.build().and_then(|c| c.try_deserialize()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: failed to load configuration: {e}");
                Self::default()
            }
        }
    }
}
