//! Option, a temporally-extended action.
use super::Decision;
use std::{fmt::Debug, hash::Hash};

/// An option over states `S` and primitive actions `A`.
///
/// An option is started only where [`Opt::initiation`] holds, chooses what to do
/// with [`Opt::policy`] while it is executing, and stops with probability
/// [`Opt::termination`] after every primitive step.
///
/// Options are keyed in the [`ValueTable`](crate::ValueTable) by [`Opt::id`]:
/// two option instances with equal ids are the same option.
pub trait Opt<S, A>: Clone + Debug {
    /// Identity of the option.
    type Id: Clone + Debug + Eq + Hash;

    /// Returns the identity of the option.
    fn id(&self) -> Self::Id;

    /// Whether the option may be started in `state`.
    fn initiation(&self, state: &S) -> bool;

    /// Action or sub-option selected in `state` while the option executes.
    fn policy(&self, state: &S) -> Decision<A, Self>;

    /// Probability that the option terminates in `state`.
    ///
    /// The value is expected to lie in `[0, 1]`. How values outside the range are
    /// handled is configured with [`TerminationRange`](crate::TerminationRange).
    fn termination(&self, state: &S) -> f64;
}
