#![warn(missing_docs)]
//! Hierarchical reinforcement learning with options.
//!
//! An [`OptionAgent`] acts in an [`Env`] by selecting options, temporally
//! extended actions implementing [`Opt`], and learns tabular option values
//! with two rules applied whenever an option terminates:
//!
//! * [`MacroQ`] updates the terminated option at every state of its trajectory.
//! * [`IntraOption`] updates every other option that could have been started
//!   at those states and agrees with what was done there.
pub mod agent;
pub mod error;
pub mod record;
pub mod stack;
pub mod util;

mod base;
pub use base::{Act, Agent, Decision, Env, Info, Opt, OptId, State, Step};

mod value_table;
pub use value_table::ValueTable;

mod trainer;
pub use trainer::{Trainer, TrainerConfig};

pub use agent::{
    AgentConfig, EpsilonGreedy, IntraOption, MacroQ, OptionAgent, OptionValues,
    PolicyAgreement, TerminationRange,
};

#[cfg(test)]
mod testing;
