use crate::error::Error;
use config::{Config, Environment, File as ConfigFile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How hard the inspector tries when an archive has no usable metadata.
///
/// Any string is accepted; only `auto` turns on the optimistic fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParseMode {
    Auto,
    Strict,
    Unrecognized(String),
}

impl ParseMode {
    pub fn allows_optimistic(&self) -> bool {
        matches!(self, ParseMode::Auto)
    }
}

impl From<String> for ParseMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "auto" => ParseMode::Auto,
            "strict" => ParseMode::Strict,
            _ => ParseMode::Unrecognized(value),
        }
    }
}

impl From<ParseMode> for String {
    fn from(mode: ParseMode) -> Self {
        mode.to_string()
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Auto => f.write_str("auto"),
            ParseMode::Strict => f.write_str("strict"),
            ParseMode::Unrecognized(other) => f.write_str(other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the archives (not searched recursively).
    pub target: String,
    /// Actually delete duplicates instead of only reporting them.
    pub clean: bool,
    pub verbose: bool,
    pub mode: ParseMode,
    /// Glob patterns for archive paths to leave out of the run.
    pub ignore_patterns: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target: ".".to_string(),
            clean: false,
            verbose: false,
            mode: ParseMode::Auto,
            ignore_patterns: Vec::new(),
        }
    }
}

/// Values given explicitly on the command line; they beat every other source.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub target: Option<String>,
    pub clean: Option<bool>,
    pub verbose: Option<bool>,
    pub mode: Option<String>,
}

pub const ENV_PREFIX: &str = "USERLIB_CLEANER";

/// Defaults, then an optional `Config.*` file, then `USERLIB_CLEANER_*`
/// environment variables, then the command-line overrides.
pub fn load_configuration(overrides: &ConfigOverrides) -> Result<AppConfig, Error> {
    load_from_file("Config", overrides)
}

pub fn load_from_file(file_stem: &str, overrides: &ConfigOverrides) -> Result<AppConfig, Error> {
    let defaults = AppConfig::default();
    let builder = Config::builder()
        .set_default("target", defaults.target)?
        .set_default("clean", defaults.clean)?
        .set_default("verbose", defaults.verbose)?
        .set_default("mode", defaults.mode.to_string())?
        .set_default("ignore_patterns", Vec::<String>::new())?
        .add_source(ConfigFile::with_name(file_stem).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("ignore_patterns"),
        )
        .set_override_option("target", overrides.target.clone())?
        .set_override_option("clean", overrides.clean)?
        .set_override_option("verbose", overrides.verbose)?
        .set_override_option("mode", overrides.mode.clone())?
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}
