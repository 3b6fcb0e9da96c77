//! Collaborators used in tests.
use crate::{Decision, Env, Opt, Step};
use anyhow::Result;

/// Actions on a chain of states `0 ..= len`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChainAct {
    Right,
    Stay,
}

/// Options on the chain.
#[derive(Clone, Debug)]
pub enum ChainOpt {
    /// A single primitive action.
    Primitive(ChainAct),

    /// Moves right until `target`.
    Run { name: &'static str, target: usize },

    /// Delegates to a `Run` sub-option of `stride` states until `target`.
    Outer {
        name: &'static str,
        stride: usize,
        target: usize,
    },

    /// Applies `act` with a constant termination probability. Can be started
    /// from state `from` on.
    Fixed {
        name: &'static str,
        act: ChainAct,
        termination: f64,
        from: usize,
    },
}

impl ChainOpt {
    pub fn run(name: &'static str, target: usize) -> Self {
        Self::Run { name, target }
    }
}

impl Opt<usize, ChainAct> for ChainOpt {
    type Id = String;

    fn id(&self) -> String {
        match self {
            Self::Primitive(ChainAct::Right) => "right".to_string(),
            Self::Primitive(ChainAct::Stay) => "stay".to_string(),
            Self::Run { name, .. } | Self::Outer { name, .. } | Self::Fixed { name, .. } => {
                name.to_string()
            }
        }
    }

    fn initiation(&self, state: &usize) -> bool {
        match self {
            Self::Primitive(_) => true,
            Self::Run { target, .. } | Self::Outer { target, .. } => state < target,
            Self::Fixed { from, .. } => state >= from,
        }
    }

    fn policy(&self, state: &usize) -> Decision<ChainAct, Self> {
        match self {
            Self::Primitive(act) => Decision::Primitive(*act),
            Self::Run { .. } => Decision::Primitive(ChainAct::Right),
            Self::Outer { stride, target, .. } => Decision::Delegate(Self::Run {
                name: "sub",
                target: (state + stride).min(*target),
            }),
            Self::Fixed { act, .. } => Decision::Primitive(*act),
        }
    }

    fn termination(&self, state: &usize) -> f64 {
        match self {
            Self::Primitive(_) => 1.0,
            Self::Run { target, .. } | Self::Outer { target, .. } => {
                if state >= target {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Fixed { termination, .. } => *termination,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChainConfig {
    pub len: usize,
    pub reward: f64,
    pub options: Vec<ChainOpt>,
}

impl ChainConfig {
    /// A chain of `len + 1` states with the primitive options only.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            reward: 1.0,
            options: vec![
                ChainOpt::Primitive(ChainAct::Right),
                ChainOpt::Primitive(ChainAct::Stay),
            ],
        }
    }

    pub fn options(mut self, options: Vec<ChainOpt>) -> Self {
        self.options = options;
        self
    }

    pub fn reward(mut self, reward: f64) -> Self {
        self.reward = reward;
        self
    }
}

/// A chain `0 -> 1 -> ... -> len` where `len` is terminal.
///
/// Every step yields the same reward. The options of a non-terminal state are
/// the configured ones whose initiation condition holds there.
pub struct ChainEnv {
    config: ChainConfig,
    state: usize,
    pub n_resets: usize,
}

impl Env for ChainEnv {
    type Config = ChainConfig;
    type State = usize;
    type Act = ChainAct;
    type Opt = ChainOpt;
    type Info = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            state: 0,
            n_resets: 0,
        })
    }

    fn reset(&mut self) -> Result<usize> {
        self.state = 0;
        self.n_resets += 1;
        Ok(0)
    }

    fn step(&mut self, a: &ChainAct) -> Result<Step<Self>> {
        if *a == ChainAct::Right {
            self.state = (self.state + 1).min(self.config.len);
        }
        let is_terminated = self.state == self.config.len;
        Ok(Step::new(self.state, *a, self.config.reward, is_terminated, ()))
    }

    fn is_state_terminal(&self, state: &usize) -> bool {
        *state == self.config.len
    }

    fn available_options(&self, state: &usize) -> Vec<ChainOpt> {
        if self.is_state_terminal(state) {
            return vec![];
        }
        self.config
            .options
            .iter()
            .filter(|o| o.initiation(state))
            .cloned()
            .collect()
    }
}
