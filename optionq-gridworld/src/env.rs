//! The gridworld environment.
use crate::{Grid, GridOption, GridState, GridworldConfig, GridworldError, Move};
use anyhow::Result;
use log::{debug, info};
use optionq_core::{Env, Opt, Step};
use std::rc::Rc;

/// A deterministic gridworld.
///
/// A legal move goes to the neighboring floor cell, an illegal move leaves the
/// agent in place. Each step yields [`GridworldConfig::step_reward`] except the
/// one reaching the goal, which yields [`GridworldConfig::goal_reward`] and
/// ends the episode.
///
/// The options of a state are the primitive moves legal there and the
/// sub-goal options whose initiation condition holds. The goal has no options.
pub struct Gridworld {
    config: GridworldConfig,
    grid: Rc<Grid>,
    options: Vec<GridOption>,
    state: GridState,
}

impl Gridworld {
    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current state.
    pub fn state(&self) -> GridState {
        self.state
    }

    /// The initial state.
    pub fn start(&self) -> GridState {
        self.config.start
    }

    fn check_floor(grid: &Grid, what: &str, state: &GridState) -> Result<(), GridworldError> {
        if grid.is_floor(state) {
            Ok(())
        } else {
            Err(GridworldError::NotFloor {
                what: what.to_string(),
                row: state.row,
                col: state.col,
            })
        }
    }
}

impl Env for Gridworld {
    type Config = GridworldConfig;
    type State = GridState;
    type Act = Move;
    type Opt = GridOption;
    type Info = ();

    /// Builds the environment. The dynamics are deterministic and `seed` is
    /// not used.
    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let grid = Rc::new(Grid::parse(config.layout.as_slice())?);
        Self::check_floor(&grid, "Start", &config.start)?;
        Self::check_floor(&grid, "Goal", &config.goal)?;

        let mut options: Vec<GridOption> = Move::ALL
            .iter()
            .map(|mv| GridOption::primitive(*mv, grid.clone()))
            .collect();
        for subgoal in config.subgoals.iter() {
            Self::check_floor(&grid, &format!("Sub-goal {}", subgoal.name), &subgoal.target)?;
            options.push(GridOption::subgoal(&subgoal.name, subgoal.target, &grid));
        }

        info!(
            "Gridworld {}x{} with {} options",
            grid.n_rows(),
            grid.n_cols(),
            options.len()
        );
        debug!("Seed {} is not used", seed);

        Ok(Self {
            state: config.start,
            config: config.clone(),
            grid,
            options,
        })
    }

    fn reset(&mut self) -> Result<GridState> {
        self.state = self.config.start;
        Ok(self.state)
    }

    fn step(&mut self, a: &Move) -> Result<Step<Self>> {
        if let Some(next) = self.grid.neighbor(&self.state, *a) {
            self.state = next;
        }
        let is_terminated = self.is_state_terminal(&self.state);
        let reward = if is_terminated {
            self.config.goal_reward
        } else {
            self.config.step_reward
        };
        Ok(Step::new(self.state, *a, reward, is_terminated, ()))
    }

    fn is_state_terminal(&self, state: &GridState) -> bool {
        *state == self.config.goal
    }

    fn available_options(&self, state: &GridState) -> Vec<GridOption> {
        if self.is_state_terminal(state) {
            return vec![];
        }
        self.options
            .iter()
            .filter(|o| o.initiation(state))
            .cloned()
            .collect()
    }
}
