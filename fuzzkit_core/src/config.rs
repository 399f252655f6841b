use crate::random::seeded;
use rand_core::RngCore;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Lines,
    Json,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct RandomSettings {
    /// Absent means every run produces different strings.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_length")]
    pub length: usize,
}

pub fn default_count() -> usize {
    10
}
pub fn default_length() -> usize {
    16
}

impl Default for RandomSettings {
    fn default() -> Self {
        Self {
            seed: None,
            count: default_count(),
            length: default_length(),
        }
    }
}

impl RandomSettings {
    /// A generator honouring `seed`, falling back to the thread-local one.
    pub fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(seeded(seed)),
            None => Box::new(rand::rng()),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct FuzzkitConfig {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub random: RandomSettings,
}

impl FuzzkitConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file at {:?}: {}", path, e))?;

        Self::from_toml(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse TOML from config file {:?}: {}", path, e)
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
