//! Option agent.
use super::{AgentConfig, EpsilonGreedy, IntraOption, MacroQ, OptionValues};
use crate::{
    record::{Record, RecordValue},
    stack::{Execution, ExecutionStack},
    Agent, Decision, Env, Opt,
};
use anyhow::Result;
use log::{debug, trace, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug, Default)]
struct EpisodeStats {
    decisions: usize,
    max_stack_depth: usize,
    macro_q_updates: usize,
    intra_option_updates: usize,
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// An agent learning option values with Macro-Q and intra-option learning.
///
/// # Episode
///
/// An episode starts with no executing option. At every time-step the agent
/// asks [`OptionAgent::select_action`] what to do next:
///
/// * An option is pushed on the execution stack together with the current
///   state. The environment is not stepped.
/// * A primitive action is applied to the environment. The reward and the next
///   state are appended to the trajectories of all executing options. Then the
///   option on top of the stack is tested for termination in the next state;
///   while the test succeeds the option is popped, both learners consume its
///   trajectory, and the new top is tested. A single primitive step can thus
///   terminate several nested options.
/// * When the environment reports a terminal state, every remaining option is
///   popped and learned from, top first, regardless of its termination
///   probability.
///
/// ```mermaid
/// stateDiagram-v2
///     [*] --> NoOptionActive: reset
///     NoOptionActive --> OptionActive: push option
///     OptionActive --> OptionActive: push sub-option / primitive step / pop
///     OptionActive --> NoOptionActive: last option terminates
///     OptionActive --> EpisodeTerminal: terminal state, unwind stack
///     EpisodeTerminal --> [*]
/// ```
pub struct OptionAgent<E: Env, R: Rng = StdRng> {
    env: E,
    config: AgentConfig,
    selector: EpsilonGreedy,
    macro_q: MacroQ,
    intra_option: IntraOption,
    table: OptionValues<E>,
    stack: ExecutionStack<E::State, E::Opt>,
    rng: R,
}

impl<E: Env> OptionAgent<E, StdRng> {
    /// Constructs an agent acting in `env`, seeding its generator with
    /// [`AgentConfig::seed`].
    pub fn new(env: E, config: AgentConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(env, config, rng)
    }
}

impl<E: Env, R: Rng> OptionAgent<E, R> {
    /// Constructs an agent drawing all random numbers from `rng`.
    pub fn with_rng(env: E, config: AgentConfig, rng: R) -> Self {
        Self {
            selector: EpsilonGreedy::new(config.epsilon),
            macro_q: MacroQ::new(config.macro_alpha, config.gamma),
            intra_option: IntraOption::new(
                config.intra_option_alpha,
                config.gamma,
                config.policy_agreement,
                config.termination_range,
            ),
            table: OptionValues::<E>::new(),
            stack: ExecutionStack::new(),
            env,
            config,
            rng,
        }
    }

    /// The configuration of the agent.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// The environment.
    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// The learned option values.
    pub fn table(&self) -> &OptionValues<E> {
        &self.table
    }

    /// The learned option values.
    pub fn table_mut(&mut self) -> &mut OptionValues<E> {
        &mut self.table
    }

    /// The options currently executing.
    pub fn stack(&self) -> &ExecutionStack<E::State, E::Opt> {
        &self.stack
    }

    /// Returns the values of the options available in `state`.
    pub fn option_values(&self, state: &E::State) -> Vec<(E::Opt, f64)> {
        self.env
            .available_options(state)
            .into_iter()
            .map(|o| {
                let v = self.table.get(state, &o.id());
                (o, v)
            })
            .collect()
    }

    /// Decides what to do in `state`.
    ///
    /// Without an executing option the epsilon-greedy base policy picks one of the
    /// options available in `state`. Otherwise the decision is delegated to the
    /// policy of the option on top of the stack. Neither the stack nor the values
    /// are modified.
    pub fn select_action(&mut self, state: &E::State) -> Result<Decision<E::Act, E::Opt>> {
        if let Some(top) = self.stack.top() {
            return Ok(top.option().policy(state));
        }
        let options = self.env.available_options(state);
        let option = self
            .selector
            .select::<E, R>(&self.table, state, options, &mut self.rng)?;
        Ok(Decision::Delegate(option))
    }

    /// Draws whether the option on top of the stack terminates in `state`.
    fn roll_termination(&mut self, state: &E::State) -> Result<bool> {
        let beta = match self.stack.top() {
            None => return Ok(false),
            Some(top) => {
                let option = top.option();
                self.config
                    .termination_range
                    .apply(&option.id(), option.termination(state))?
            }
        };
        Ok(self.rng.gen::<f64>() < beta)
    }

    /// Runs both learners on the trajectory of a terminated option.
    fn learn(
        &mut self,
        execution: Execution<E::State, E::Opt>,
        stats: &mut EpisodeStats,
    ) -> Result<()> {
        trace!(
            "Option {:?} terminated after {} steps",
            execution.option().id(),
            execution.len()
        );
        stats.macro_q_updates += self.macro_q.learn(&mut self.table, &self.env, &execution)?;
        stats.intra_option_updates +=
            self.intra_option
                .learn(&mut self.table, &self.env, &execution)?;
        Ok(())
    }
}

impl<E: Env, R: Rng> Agent<E> for OptionAgent<E, R> {
    fn run_episode(&mut self) -> Result<(Vec<f64>, Record)> {
        if !self.stack.is_empty() {
            warn!(
                "Discarding {} options left over from an aborted episode",
                self.stack.depth()
            );
            self.stack = ExecutionStack::new();
        }

        let mut state = self.env.reset()?;
        let mut rewards = vec![];
        let mut stats = EpisodeStats::default();

        loop {
            stats.decisions += 1;
            match self.select_action(&state)? {
                Decision::Delegate(option) => {
                    trace!("Start option {:?} in {:?}", option.id(), state);
                    self.stack.push(option, state.clone());
                    stats.max_stack_depth = stats.max_stack_depth.max(self.stack.depth());
                }
                Decision::Primitive(act) => {
                    let step = self.env.step(&act)?;
                    rewards.push(step.reward);
                    self.stack.observe(step.reward, &step.state);

                    while self.roll_termination(&step.state)? {
                        if let Some(execution) = self.stack.pop() {
                            self.learn(execution, &mut stats)?;
                        }
                    }

                    if step.is_terminated {
                        while let Some(execution) = self.stack.pop() {
                            self.learn(execution, &mut stats)?;
                        }
                        break;
                    }

                    state = step.state;
                }
            }
        }

        let episode_return: f64 = rewards.iter().sum();
        debug!(
            "Episode finished: {} steps, return {:.4}",
            rewards.len(),
            episode_return
        );

        let record = Record::from_slice(&[
            ("episode_return", RecordValue::Scalar(episode_return as f32)),
            ("episode_steps", RecordValue::Scalar(rewards.len() as f32)),
            ("decisions", RecordValue::Scalar(stats.decisions as f32)),
            ("max_stack_depth", RecordValue::Scalar(stats.max_stack_depth as f32)),
            ("macro_q_updates", RecordValue::Scalar(stats.macro_q_updates as f32)),
            (
                "intra_option_updates",
                RecordValue::Scalar(stats.intra_option_updates as f32),
            ),
        ]);

        Ok((rewards, record))
    }
}
