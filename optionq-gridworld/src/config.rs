//! Configuration of [`Gridworld`](crate::Gridworld).
use crate::GridState;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// A sub-goal option.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SubgoalConfig {
    /// Name, which is also the identity of the option.
    pub name: String,

    /// The cell the option walks to.
    pub target: GridState,
}

impl SubgoalConfig {
    /// Constructs a sub-goal.
    pub fn new(name: impl Into<String>, target: GridState) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }
}

/// Configuration of [`Gridworld`](crate::Gridworld).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GridworldConfig {
    /// Rows of `.` (floor) and `#` (wall).
    pub layout: Vec<String>,

    /// Initial state.
    pub start: GridState,

    /// Terminal state.
    pub goal: GridState,

    /// Reward of a step not reaching the goal.
    pub step_reward: f64,

    /// Reward of reaching the goal.
    pub goal_reward: f64,

    /// Sub-goal options available besides the primitive moves.
    pub subgoals: Vec<SubgoalConfig>,
}

impl Default for GridworldConfig {
    fn default() -> Self {
        Self {
            layout: vec![
                "...#...".to_string(),
                ".......".to_string(),
                "...#...".to_string(),
            ],
            start: GridState::new(0, 0),
            goal: GridState::new(2, 6),
            step_reward: -0.01,
            goal_reward: 1.0,
            subgoals: vec![SubgoalConfig::new("doorway", GridState::new(1, 3))],
        }
    }
}

impl GridworldConfig {
    /// Sets the layout.
    pub fn layout<T: Into<String>>(mut self, rows: Vec<T>) -> Self {
        self.layout = rows.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the initial state.
    pub fn start(mut self, v: GridState) -> Self {
        self.start = v;
        self
    }

    /// Sets the terminal state.
    pub fn goal(mut self, v: GridState) -> Self {
        self.goal = v;
        self
    }

    /// Sets the reward of a step.
    pub fn step_reward(mut self, v: f64) -> Self {
        self.step_reward = v;
        self
    }

    /// Sets the reward of reaching the goal.
    pub fn goal_reward(mut self, v: f64) -> Self {
        self.goal_reward = v;
        self
    }

    /// Sets the sub-goal options.
    pub fn subgoals(mut self, v: Vec<SubgoalConfig>) -> Self {
        self.subgoals = v;
        self
    }

    /// Loads [`GridworldConfig`] from YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`GridworldConfig`] as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
