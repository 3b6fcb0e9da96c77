//! Hierarchical reinforcement learning with options.
//!
//! This crate collects the following crates:
//!
//! * [`optionq-core`](optionq_core) provides the collaborator traits, the
//!   option agent with Macro-Q and intra-option learning, the trainer and
//!   the recorders.
//! * [`optionq-gridworld`](optionq_gridworld) is a two-rooms gridworld with
//!   primitive moves and sub-goal options.
//!
//! The `two_rooms` example trains an agent in the gridworld:
//!
//! ```bash
//! cargo run --example two_rooms -- --config optionq/config/two_rooms.yaml
//! ```
mod config;
pub use config::ExperimentConfig;
pub use optionq_core as core;
pub use optionq_gridworld as gridworld;
