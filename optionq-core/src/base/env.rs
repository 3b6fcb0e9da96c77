//! Environment.
use super::{Act, Info, Opt, State, Step};
use anyhow::Result;

/// Represents an environment, typically a semi-MDP over a set of options.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// State of the environment.
    type State: State;

    /// Primitive action of the environment.
    type Act: Act;

    /// Options available in the environment.
    type Opt: Opt<Self::State, Self::Act>;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment and returns the initial state.
    fn reset(&mut self) -> Result<Self::State>;

    /// Performes an environment step with a primitive action.
    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>>
    where
        Self: Sized;

    /// Returns `true` if `state` ends an episode.
    fn is_state_terminal(&self, state: &Self::State) -> bool;

    /// Returns the options that can be selected in `state`.
    ///
    /// The result must not be empty for a reachable non-terminal state.
    fn available_options(&self, state: &Self::State) -> Vec<Self::Opt>;
}

/// Identity of the options of environment `E`.
pub type OptId<E> = <<E as Env>::Opt as Opt<<E as Env>::State, <E as Env>::Act>>::Id;
