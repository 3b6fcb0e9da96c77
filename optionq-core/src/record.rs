//! Types and traits for recording values obtained during training.
//!
//! A [`Record`] is a set of named values produced by one unit of work, for
//! example an episode run by [`OptionAgent::run_episode`]. Recorders consume
//! records: [`BufferedRecorder`] keeps them in memory, [`NullRecorder`] drops
//! them and [`LogRecorder`] aggregates them with [`RecordStorage`] and writes
//! the summary to the `log` facade.
//!
//! ```rust
//! use optionq_core::record::{Record, RecordValue};
//!
//! let mut record = Record::from_scalar("episode_return", 0.93);
//! record.insert("episode_steps", RecordValue::Scalar(8.0));
//! assert_eq!(record.get_scalar("episode_steps").unwrap(), 8.0);
//! ```
//!
//! [`OptionAgent::run_episode`]: crate::OptionAgent::run_episode
mod base;
mod buffered_recorder;
mod log_recorder;
mod null_recorder;
mod recorder;
mod storage;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use log_recorder::LogRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::{AggregateRecorder, Recorder};
pub use storage::RecordStorage;
