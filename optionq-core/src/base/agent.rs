//! Agent.
use super::Env;
use crate::record::Record;
use anyhow::Result;

/// Represents an agent learning in its own environment.
pub trait Agent<E: Env> {
    /// Runs an episode, learning from it.
    ///
    /// Returns the rewards of the episode and a record describing it.
    fn run_episode(&mut self) -> Result<(Vec<f64>, Record)>;

    /// Runs `num_episodes` episodes and returns their rewards.
    fn run_agent(&mut self, num_episodes: usize) -> Result<Vec<Vec<f64>>> {
        (0..num_episodes)
            .map(|_| self.run_episode().map(|(rewards, _)| rewards))
            .collect()
    }
}
