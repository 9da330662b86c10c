use std::{
    env, fs,
    io::{self, ErrorKind},
};

use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "ratio64.json";
pub const DEFAULT_APPROXIMATION_DENOMINATOR: i64 = 1000;

fn default_denominator() -> i64 {
    DEFAULT_APPROXIMATION_DENOMINATOR
}

// denominator used to turn decimal literals into fractions
#[derive(Debug, Clone, Deserialize)]
pub struct ApproximationSection {
    #[serde(default = "default_denominator")]
    pub denominator: i64,
}

impl Default for ApproximationSection {
    fn default() -> Self {
        Self {
            denominator: DEFAULT_APPROXIMATION_DENOMINATOR,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputSection {
    // print the floating point approximation next to the exact result
    #[serde(default)]
    pub decimal: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub approximation: ApproximationSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// Config file location, `RATIO64_CONFIG` or [`DEFAULT_CONFIG_PATH`].
pub fn config_path() -> String {
    match env::var("RATIO64_CONFIG").unwrap_or_default().as_str() {
        "" => DEFAULT_CONFIG_PATH.to_string(),
        path => path.to_string(),
    }
}

pub fn load_config(path: &str) -> Result<Config, io::Error> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("Failed to read {path}: {}", err);
            return Ok(Config::default());
        }
    };
    let config: Config = serde_json::from_str(&content)?;
    if config.approximation.denominator <= 0 {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!(
                "approximation denominator must be positive, got {}",
                config.approximation.denominator
            ),
        ));
    }
    Ok(config)
}
