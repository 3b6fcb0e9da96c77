//! The option agent and its learning rules.
mod base;
mod config;
mod intra_option;
mod macro_q;
mod selector;
use crate::{error::OptionQError, Env, Opt, OptId, ValueTable};
use anyhow::Result;
pub use base::OptionAgent;
pub use config::{AgentConfig, PolicyAgreement, TerminationRange};
pub use intra_option::IntraOption;
pub use macro_q::MacroQ;
pub use selector::EpsilonGreedy;

/// Option values of environment `E`.
pub type OptionValues<E> = ValueTable<<E as Env>::State, OptId<E>>;

/// Returns `max_o Q(state, o)` over the options available in `state`.
///
/// The value of a terminal state is `0`. A non-terminal state without
/// available options is a malformed environment.
pub(crate) fn best_next_value<E: Env>(
    table: &OptionValues<E>,
    env: &E,
    state: &E::State,
) -> Result<f64> {
    if env.is_state_terminal(state) {
        return Ok(0.0);
    }
    let ids: Vec<_> = env.available_options(state).iter().map(|o| o.id()).collect();
    table.max(state, ids.iter()).ok_or_else(|| {
        anyhow::Error::from(OptionQError::NoAvailableOptions {
            state: format!("{:?}", state),
        })
    })
}
