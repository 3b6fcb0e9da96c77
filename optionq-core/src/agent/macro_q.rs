//! Macro-Q learning.
use super::{best_next_value, OptionValues};
use crate::{stack::Execution, util::discounted_return, Env, Opt};
use anyhow::Result;
use log::trace;

/// Semi-Markov Q-learning for a terminated option.
///
/// The option terminated in the last state `s_n` of its trajectory, so every
/// state `s_k` it passed through can be treated as a state where it was started.
/// For `k = 0 .. n-1`:
///
/// ```text
/// Q(s_k, o) <- Q(s_k, o) + alpha * (G_k + gamma^(n-k) * max_o' Q(s_n, o') - Q(s_k, o))
/// ```
///
/// where `G_k` is the discounted return of `r_k .. r_{n-1}` and the max is `0`
/// if `s_n` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroQ {
    /// Learning rate.
    pub alpha: f64,

    /// Discount factor.
    pub gamma: f64,
}

impl MacroQ {
    /// Constructs the learner.
    pub fn new(alpha: f64, gamma: f64) -> Self {
        Self { alpha, gamma }
    }

    /// Applies the updates for `execution` and returns the number of updates.
    ///
    /// An execution without any primitive step is ignored.
    pub fn learn<E: Env>(
        &self,
        table: &mut OptionValues<E>,
        env: &E,
        execution: &Execution<E::State, E::Opt>,
    ) -> Result<usize> {
        let n = execution.len();
        let states = execution.states();
        let rewards = execution.rewards();
        let s_n = execution.last_state();
        let id = execution.option().id();

        for k in 0..n {
            let s_k = &states[k];
            let old = table.get(s_k, &id);
            let g = discounted_return(&rewards[k..], self.gamma);
            let next = best_next_value(table, env, s_n)?;
            let target = g + self.gamma.powf((n - k) as f64) * next;
            let new = old + self.alpha * (target - old);
            trace!("Macro-Q {:?} at {:?}: {} -> {}", id, s_k, old, new);
            table.set(s_k, &id, new);
        }

        Ok(n)
    }
}
