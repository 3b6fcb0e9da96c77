//! Core functionalities.
mod agent;
mod decision;
mod env;
mod opt;
mod step;
pub use agent::Agent;
pub use decision::Decision;
pub use env::{Env, OptId};
pub use opt::Opt;
use std::{fmt::Debug, hash::Hash};
pub use step::{Info, Step};

/// A state of an environment.
///
/// The core never looks inside a state. It only clones it into trajectories and
/// uses it as a key of the [`ValueTable`](crate::ValueTable), so two states that
/// compare equal must also hash equal.
pub trait State: Clone + Debug + Eq + Hash {}

impl<T: Clone + Debug + Eq + Hash> State for T {}

/// A primitive action of an environment.
pub trait Act: Clone + Debug + PartialEq {}

impl<T: Clone + Debug + PartialEq> Act for T {}
