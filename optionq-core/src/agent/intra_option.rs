//! Intra-option learning.
use super::{best_next_value, OptionValues, PolicyAgreement, TerminationRange};
use crate::{stack::Execution, util::discounted_return, Decision, Env, Opt};
use anyhow::Result;
use log::trace;

/// Off-policy updates for the options consistent with an executed trajectory.
///
/// For every suffix start `k = 0 .. n-1` of the trajectory `s_0 .. s_n` and for
/// every option `o` available in `s_k` that could have been started there and
/// agrees with the executed option (see [`PolicyAgreement`]):
///
/// ```text
/// beta = o.termination(s_n)
/// U    = (1 - beta) * Q(s_n, o) + beta * max_o' Q(s_n, o')
/// Q(s_n, o) <- Q(s_n, o) + alpha * (G_k + gamma^(n-k) * U - Q(s_n, o))
/// ```
///
/// The max is `0` if `s_n` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct IntraOption {
    /// Learning rate.
    pub alpha: f64,

    /// Discount factor.
    pub gamma: f64,

    /// Options eligible for an update.
    pub agreement: PolicyAgreement,

    /// Handling of termination probabilities outside `[0, 1]`.
    pub termination_range: TerminationRange,
}

impl IntraOption {
    /// Constructs the learner.
    pub fn new(
        alpha: f64,
        gamma: f64,
        agreement: PolicyAgreement,
        termination_range: TerminationRange,
    ) -> Self {
        Self {
            alpha,
            gamma,
            agreement,
            termination_range,
        }
    }

    fn agrees<E: Env>(
        &self,
        other: &E::Opt,
        state: &E::State,
        taken: &Decision<E::Act, E::Opt>,
    ) -> bool {
        match self.agreement {
            PolicyAgreement::Always => true,
            PolicyAgreement::SameChoice => other.policy(state).same_choice::<E::State>(taken),
        }
    }

    /// Applies the updates for `execution` and returns the number of updates.
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
        let executed = execution.option();
        let mut n_updates = 0;

        for k in 0..n {
            let s_k = &states[k];
            let taken = executed.policy(s_k);
            let g = discounted_return(&rewards[k..], self.gamma);
            let discount = self.gamma.powf((n - k) as f64);

            for other in env.available_options(s_k) {
                if !other.initiation(s_k) || !self.agrees::<E>(&other, s_k, &taken) {
                    continue;
                }

                let id = other.id();
                let beta = self.termination_range.apply(&id, other.termination(s_n))?;
                let old = table.get(s_n, &id);
                let terminates = beta * best_next_value(table, env, s_n)?;
                let continues = (1.0 - beta) * old;
                let target = g + discount * (continues + terminates);
                let new = old + self.alpha * (target - old);
                trace!("Intra-option {:?} at {:?}: {} -> {}", id, s_n, old, new);
                table.set(s_n, &id, new);
                n_updates += 1;
            }
        }

        Ok(n_updates)
    }
}
