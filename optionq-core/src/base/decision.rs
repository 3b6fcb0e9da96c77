//! Decisions taken at each time-step.
use super::{Act, Opt};

/// What the agent does next: a primitive action, or a (sub-)option to start.
///
/// Both the base policy of the agent and the internal policy of an option
/// return this type.
#[derive(Debug, Clone)]
pub enum Decision<A, O> {
    /// Apply the action to the environment.
    Primitive(A),

    /// Start executing the option.
    Delegate(O),
}

impl<A, O> Decision<A, O> {
    /// Returns `true` if both decisions make the same choice.
    ///
    /// Primitive actions are compared by value, delegated options by their
    /// [`Opt::id`].
    pub fn same_choice<S>(&self, other: &Self) -> bool
    where
        A: Act,
        O: Opt<S, A>,
    {
        match (self, other) {
            (Self::Primitive(a), Self::Primitive(b)) => a == b,
            (Self::Delegate(a), Self::Delegate(b)) => a.id() == b.id(),
            _ => false,
        }
    }
}
