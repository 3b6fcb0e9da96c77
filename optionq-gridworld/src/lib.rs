//! A two-rooms gridworld for [`optionq-core`](optionq_core).
//!
//! The default layout has two rooms joined by a doorway in the middle row:
//!
//! ```text
//! ...#...
//! .......
//! ...#...
//! ```
//!
//! The agent starts in the top-left corner and the episode ends in the
//! bottom-right corner. Besides the four primitive moves, sub-goal options walk
//! the shortest path to a target cell, for example the doorway.
//!
//! ```
//! use anyhow::Result;
//! use optionq_core::{Agent as _, AgentConfig, Env as _, OptionAgent};
//! use optionq_gridworld::{Gridworld, GridworldConfig};
//!
//! fn main() -> Result<()> {
//!     let env = Gridworld::build(&GridworldConfig::default(), 0)?;
//!     let mut agent = OptionAgent::new(env, AgentConfig::default());
//!     let (rewards, _record) = agent.run_episode()?;
//!     assert!(!rewards.is_empty());
//!     Ok(())
//! }
//! ```
mod config;
mod env;
mod error;
mod grid;
mod option;
pub use config::{GridworldConfig, SubgoalConfig};
pub use env::Gridworld;
pub use error::GridworldError;
pub use grid::{Grid, GridState, Move};
pub use option::{GridOption, GridOptionId};
