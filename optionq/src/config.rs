//! Configuration of a gridworld experiment.
use anyhow::Result;
use optionq_core::{AgentConfig, TrainerConfig};
use optionq_gridworld::GridworldConfig;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Environment, agent and trainer configurations in a single YAML file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ExperimentConfig {
    /// Gridworld.
    pub env: GridworldConfig,

    /// Agent.
    pub agent: AgentConfig,

    /// Trainer.
    pub trainer: TrainerConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            env: GridworldConfig::default(),
            agent: AgentConfig::default(),
            trainer: TrainerConfig::default()
                .max_episodes(500)
                .flush_record_interval(50),
        }
    }
}

impl ExperimentConfig {
    /// Loads [`ExperimentConfig`] from YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ = path.as_ref().to_owned();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        log::info!("Load config file: {:?}", path_);
        Ok(b)
    }

    /// Saves [`ExperimentConfig`] as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
