// config lets us layer defaults, a settings file and the environment
use config::{Config, Environment, File, FileFormat, Map};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_SETTINGS_FILE: &str = "optional";
pub const ENV_PREFIX: &str = "OPTIONAL";
// keys whose environment value is a comma separated list
const ENV_LIST_KEYS: [&str; 1] = ["divisors"];

/// Settings for the demonstration binary.
///
/// Sources in increasing precedence: the defaults below, an optional
/// settings file (`optional.json`, `optional.toml`, ... or an explicit
/// path), and `OPTIONAL_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dividend: i64,
    pub divisors: Vec<i64>,
    pub fallback: i64,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dividend: 10,
            divisors: vec![5, 2, 0],
            fallback: 0,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: Option<&str>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Settings::load`], but `env` replaces the process environment
    /// as the source of `OPTIONAL_*` variables when given.
    pub fn load_with_env(path: Option<&str>, env: Option<Map<String, String>>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };
        let settings = Config::builder()
            .add_source(file)
            .add_source(environment(env))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

fn environment(source: Option<Map<String, String>>) -> Environment {
    let env = Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .source(source);
    ENV_LIST_KEYS.iter().fold(env, |env, key| env.with_list_parse_key(key))
}
