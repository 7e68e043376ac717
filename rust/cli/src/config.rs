use serde::{Deserialize, Serialize};
use std::fs;

use shoe_engine::cards::SET_SIZE;
use shoe_engine::deck::MAX_SETS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub sets: usize,
    pub seed: Option<u64>,
    pub hands: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub sets: ValueSource,
    pub seed: ValueSource,
    pub hands: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            sets: ValueSource::Default,
            seed: ValueSource::Default,
            hands: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sets: 1,
            seed: None,
            hands: 2,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves defaults, then the TOML file named by `SHOE_CONFIG`, then the
/// `SHOE_*` variables, reading variables through `lookup`.
pub fn load_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup("SHOE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.sets {
            cfg.sets = v;
            sources.sets = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.hands {
            cfg.hands = v;
            sources.hands = ValueSource::File;
        }
    }

    if let Some(sets) = lookup("SHOE_SETS")
        && !sets.is_empty()
    {
        cfg.sets = sets
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid sets".into()))?;
        sources.sets = ValueSource::Env;
    }
    if let Some(seed) = lookup("SHOE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(hands) = lookup("SHOE_HANDS")
        && !hands.is_empty()
    {
        cfg.hands = hands
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid hands".into()))?;
        sources.hands = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    sets: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    hands: Option<usize>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.sets == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: sets must be >=1".into(),
        ));
    }
    if cfg.sets > MAX_SETS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: sets must be <={}",
            MAX_SETS
        )));
    }
    if cfg.hands == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: hands must be >=1".into(),
        ));
    }
    let cards = cfg.sets * SET_SIZE;
    if cfg.hands.saturating_mul(2) > cards {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} hands need more than {} cards",
            cfg.hands, cards
        )));
    }
    Ok(())
}
