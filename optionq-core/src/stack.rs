//! Stack of executing options.
//!
//! Every executing option owns the states it visited and the rewards it earned
//! since it was started. An [`Execution`] keeps `states.len() == rewards.len() + 1`
//! by construction: it starts with a single state and grows by one
//! `(reward, next state)` pair per primitive step.

/// An executing option and its trajectory since it was started.
#[derive(Debug, Clone)]
pub struct Execution<S, O> {
    option: O,
    states: Vec<S>,
    rewards: Vec<f64>,
}

impl<S: Clone, O> Execution<S, O> {
    /// Starts recording the execution of `option` from `state`.
    pub fn new(option: O, state: S) -> Self {
        Self {
            option,
            states: vec![state],
            rewards: vec![],
        }
    }

    /// Appends a primitive step to the trajectory.
    pub fn observe(&mut self, reward: f64, next_state: &S) {
        self.rewards.push(reward);
        self.states.push(next_state.clone());
    }

    /// The executing option.
    pub fn option(&self) -> &O {
        &self.option
    }

    /// States `s_0 .. s_n` visited since the option was started.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Rewards `r_0 .. r_{n-1}` earned since the option was started.
    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// The number of primitive steps `n` taken since the option was started.
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    /// Returns `true` if no primitive step has been taken yet.
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// The most recent state `s_n`.
    pub fn last_state(&self) -> &S {
        // `states` is never empty.
        &self.states[self.states.len() - 1]
    }
}

/// Options currently executing, most recently started on top.
#[derive(Debug, Clone)]
pub struct ExecutionStack<S, O> {
    frames: Vec<Execution<S, O>>,
}

impl<S, O> Default for ExecutionStack<S, O> {
    fn default() -> Self {
        Self { frames: vec![] }
    }
}

impl<S: Clone, O> ExecutionStack<S, O> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `option` in `state` on top of the stack.
    pub fn push(&mut self, option: O, state: S) {
        self.frames.push(Execution::new(option, state));
    }

    /// Removes the most recently started option and hands over its trajectory.
    pub fn pop(&mut self) -> Option<Execution<S, O>> {
        self.frames.pop()
    }

    /// The most recently started option.
    pub fn top(&self) -> Option<&Execution<S, O>> {
        self.frames.last()
    }

    /// Records a primitive step in the trajectories of all executing options.
    pub fn observe(&mut self, reward: f64, next_state: &S) {
        for frame in self.frames.iter_mut() {
            frame.observe(reward, next_state);
        }
    }

    /// The number of executing options.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no option is executing.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates executions from the bottom (oldest) to the top.
    pub fn iter(&self) -> std::slice::Iter<Execution<S, O>> {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(stack: &ExecutionStack<u32, &str>) {
        for frame in stack.iter() {
            assert_eq!(frame.states().len(), frame.rewards().len() + 1);
        }
    }

    #[test]
    fn test_push_observe_pop() {
        let mut stack = ExecutionStack::new();
        assert!(stack.is_empty());

        stack.push("outer", 0u32);
        stack.observe(1.0, &1);
        stack.push("inner", 1);
        assert_invariant(&stack);
        stack.observe(2.0, &2);
        stack.observe(3.0, &3);
        assert_invariant(&stack);
        assert_eq!(stack.depth(), 2);

        let inner = stack.pop().unwrap();
        assert_eq!(*inner.option(), "inner");
        assert_eq!(inner.states(), &[1, 2, 3]);
        assert_eq!(inner.rewards(), &[2.0, 3.0]);
        assert_eq!(*inner.last_state(), 3);

        let outer = stack.top().unwrap();
        assert_eq!(*outer.option(), "outer");
        assert_eq!(outer.states(), &[0, 1, 2, 3]);
        assert_eq!(outer.rewards(), &[1.0, 2.0, 3.0]);
        assert_eq!(outer.len(), 3);

        stack.pop();
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_fresh_execution_is_empty() {
        let execution = Execution::new("o", 7u32);
        assert!(execution.is_empty());
        assert_eq!(execution.states(), &[7]);
        assert_eq!(*execution.last_state(), 7);
    }
}
