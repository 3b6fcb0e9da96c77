//! Base policy of the agent.
use super::OptionValues;
use crate::{error::OptionQError, Env, Opt};
use anyhow::Result;
use rand::Rng;

/// Epsilon-greedy selection over the options available in a state.
#[derive(Debug, Clone, PartialEq)]
pub struct EpsilonGreedy {
    /// Probability of a uniformly random choice.
    pub epsilon: f64,
}

impl EpsilonGreedy {
    /// Constructs the selector.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Selects one of `options` in `state`.
    ///
    /// With probability `epsilon` the choice is uniformly random. Otherwise an
    /// option with the largest value is returned, ties broken uniformly at random.
    ///
    /// Fails with [`OptionQError::NoAvailableOptions`] if `options` is empty.
    #[allow(clippy::float_cmp)]
    pub fn select<E, R>(
        &self,
        table: &OptionValues<E>,
        state: &E::State,
        mut options: Vec<E::Opt>,
        rng: &mut R,
    ) -> Result<E::Opt>
    where
        E: Env,
        R: Rng,
    {
        if options.is_empty() {
            return Err(OptionQError::NoAvailableOptions {
                state: format!("{:?}", state),
            }
            .into());
        }

        let ix = if rng.gen::<f64>() < self.epsilon {
            rng.gen_range(0..options.len())
        } else {
            let values: Vec<f64> = options
                .iter()
                .map(|o| table.get(state, &o.id()))
                .collect();
            let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let ties: Vec<usize> = (0..values.len()).filter(|&i| values[i] == best).collect();
            match ties.len() {
                // Every value is NaN.
                0 => rng.gen_range(0..options.len()),
                n => ties[rng.gen_range(0..n)],
            }
        };

        Ok(options.swap_remove(ix))
    }
}
