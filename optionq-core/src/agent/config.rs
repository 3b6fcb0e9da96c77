//! Configuration of [`OptionAgent`](super::OptionAgent).
use crate::error::OptionQError;
use anyhow::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Debug,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Which options receive an intra-option update at a visited state `s_k`.
///
/// In both cases the option must be available in `s_k` and its initiation
/// condition must hold there.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum PolicyAgreement {
    /// The option's policy at `s_k` makes the same choice as the executed
    /// option's policy did at `s_k`.
    SameChoice,

    /// No agreement is required.
    Always,
}

/// What to do with a termination probability outside `[0, 1]`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum TerminationRange {
    /// Clamp the value into `[0, 1]` and emit a warning. NaN becomes `0`.
    Clamp,

    /// Use the value as it is.
    Trust,

    /// Fail with [`OptionQError::TerminationOutOfRange`].
    Reject,
}

impl TerminationRange {
    /// Checks the termination probability `value` returned by option `option`.
    pub fn apply<K: Debug>(&self, option: &K, value: f64) -> Result<f64, OptionQError> {
        if (0.0..=1.0).contains(&value) {
            return Ok(value);
        }
        match self {
            Self::Trust => Ok(value),
            Self::Clamp => {
                let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
                warn!(
                    "Termination probability {} of option {:?} clamped to {}",
                    value, option, clamped
                );
                Ok(clamped)
            }
            Self::Reject => Err(OptionQError::TerminationOutOfRange {
                option: format!("{:?}", option),
                value,
            }),
        }
    }
}

/// Configuration of [`OptionAgent`](super::OptionAgent).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct AgentConfig {
    /// Probability of a uniformly random choice in the base policy.
    pub epsilon: f64,

    /// Learning rate of Macro-Q updates.
    pub macro_alpha: f64,

    /// Learning rate of intra-option updates.
    pub intra_option_alpha: f64,

    /// Discount factor.
    pub gamma: f64,

    /// Seed of the random number generator.
    pub seed: u64,

    /// Options updated by intra-option learning.
    pub policy_agreement: PolicyAgreement,

    /// Handling of termination probabilities outside `[0, 1]`.
    pub termination_range: TerminationRange,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.15,
            macro_alpha: 0.2,
            intra_option_alpha: 0.2,
            gamma: 0.9,
            seed: 42,
            policy_agreement: PolicyAgreement::SameChoice,
            termination_range: TerminationRange::Clamp,
        }
    }
}

impl AgentConfig {
    /// Sets the exploration probability.
    pub fn epsilon(mut self, v: f64) -> Self {
        self.epsilon = v;
        self
    }

    /// Sets the learning rate of Macro-Q updates.
    pub fn macro_alpha(mut self, v: f64) -> Self {
        self.macro_alpha = v;
        self
    }

    /// Sets the learning rate of intra-option updates.
    pub fn intra_option_alpha(mut self, v: f64) -> Self {
        self.intra_option_alpha = v;
        self
    }

    /// Sets the discount factor.
    pub fn gamma(mut self, v: f64) -> Self {
        self.gamma = v;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Sets the policy agreement test of intra-option learning.
    pub fn policy_agreement(mut self, v: PolicyAgreement) -> Self {
        self.policy_agreement = v;
        self
    }

    /// Sets the handling of out-of-range termination probabilities.
    pub fn termination_range(mut self, v: TerminationRange) -> Self {
        self.termination_range = v;
        self
    }

    /// Constructs [`AgentConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`AgentConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_agent_config() -> Result<()> {
        let config = AgentConfig::default()
            .epsilon(0.05)
            .gamma(0.99)
            .seed(7)
            .policy_agreement(PolicyAgreement::Always)
            .termination_range(TerminationRange::Reject);

        let dir = TempDir::new("agent_config")?;
        let path = dir.path().join("agent_config.yaml");
        config.save(&path)?;
        let config_ = AgentConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_termination_range() {
        assert_eq!(TerminationRange::Reject.apply(&"o", 0.3), Ok(0.3));
        assert_eq!(TerminationRange::Clamp.apply(&"o", 1.5), Ok(1.0));
        assert_eq!(TerminationRange::Clamp.apply(&"o", -0.2), Ok(0.0));
        assert_eq!(TerminationRange::Clamp.apply(&"o", f64::NAN), Ok(0.0));
        assert_eq!(TerminationRange::Trust.apply(&"o", 1.5), Ok(1.5));
        assert_eq!(
            TerminationRange::Reject.apply(&"o", 1.5),
            Err(OptionQError::TerminationOutOfRange {
                option: "\"o\"".to_string(),
                value: 1.5
            })
        );
    }
}
