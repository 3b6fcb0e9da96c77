//! Train an [`Agent`].
mod config;
use crate::{
    record::{
        AggregateRecorder, Record, Recorder,
        RecordValue::{Array1, DateTime, Scalar},
    },
    Agent, Env,
};
use anyhow::Result;
use chrono::Local;
pub use config::TrainerConfig;
use log::info;
use std::{marker::PhantomData, time::SystemTime};

/// Manages the training loop.
///
/// The trainer runs [`TrainerConfig::max_episodes`] episodes with
/// [`Agent::run_episode`]. The record of every episode is tagged with its index
/// and stored in the recorder, which is flushed every
/// [`TrainerConfig::flush_record_interval`] episodes and once more at the end.
/// Finally a summary with the number of episodes, the elapsed time and a
/// timestamp is written with [`Recorder::write`](crate::record::Recorder::write).
pub struct Trainer<E: Env> {
    max_episodes: usize,
    flush_record_interval: usize,
    phantom: PhantomData<E>,
}

impl<E: Env> Trainer<E> {
    /// Constructs a trainer.
    pub fn build(config: TrainerConfig) -> Self {
        Self {
            max_episodes: config.max_episodes,
            flush_record_interval: config.flush_record_interval.max(1),
            phantom: PhantomData,
        }
    }

    /// Train the agent and return the rewards of every episode.
    pub fn train<A>(
        &mut self,
        agent: &mut A,
        recorder: &mut dyn AggregateRecorder,
    ) -> Result<Vec<Vec<f64>>>
    where
        A: Agent<E>,
    {
        info!("Starts training for {} episodes", self.max_episodes);
        let timer = SystemTime::now();
        let mut episode_rewards = Vec::with_capacity(self.max_episodes);

        for episode in 0..self.max_episodes {
            let (rewards, mut record) = agent.run_episode()?;
            record.insert("episode", Scalar(episode as f32));
            record.insert(
                "episode_rewards",
                Array1(rewards.iter().map(|r| *r as f32).collect()),
            );
            recorder.store(record);
            episode_rewards.push(rewards);

            if (episode + 1) % self.flush_record_interval == 0 {
                recorder.flush(episode as i64 + 1);
            }
        }

        if self.max_episodes % self.flush_record_interval != 0 {
            recorder.flush(self.max_episodes as i64);
        }

        let secs = timer.elapsed()?.as_secs_f32();
        info!("Finished training in {:.2} sec", secs);
        recorder.write(Record::from_slice(&[
            ("episodes", Scalar(self.max_episodes as f32)),
            ("training_time", Scalar(secs)),
            ("finished_at", DateTime(Local::now())),
        ]));
        Ok(episode_rewards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        record::{BufferedRecorder, NullRecorder, RecordValue},
        testing::{ChainConfig, ChainEnv},
        AgentConfig, OptionAgent,
    };

    fn agent() -> Result<OptionAgent<ChainEnv>> {
        let env = ChainEnv::build(&ChainConfig::new(3).reward(-1.0), 0)?;
        Ok(OptionAgent::new(env, AgentConfig::default()))
    }

    #[test]
    fn test_train() -> Result<()> {
        let config = TrainerConfig::default()
            .max_episodes(10)
            .flush_record_interval(4);
        let mut trainer = Trainer::<ChainEnv>::build(config);
        let mut agent = agent()?;
        let mut recorder = BufferedRecorder::new();

        let rewards = trainer.train(&mut agent, &mut recorder)?;

        assert_eq!(rewards.len(), 10);
        // ten episodes and the summary
        assert_eq!(recorder.len(), 11);
        // after episodes 4 and 8, and at the end
        assert_eq!(recorder.n_flushes(), 3);
        for (i, record) in recorder.iter().take(10).enumerate() {
            assert_eq!(record.get_scalar("episode")?, i as f32);
            assert!(record.get_scalar("episode_steps")? >= 3.0);
            let expected: Vec<f32> = rewards[i].iter().map(|r| *r as f32).collect();
            assert_eq!(record.get_array1("episode_rewards")?, expected);
        }

        let summary = recorder.iter().last().unwrap();
        assert_eq!(summary.get_scalar("episodes")?, 10.0);
        assert!(matches!(
            summary.get("finished_at"),
            Some(RecordValue::DateTime(_))
        ));
        Ok(())
    }

    #[test]
    fn test_no_extra_flush() -> Result<()> {
        let config = TrainerConfig::default()
            .max_episodes(6)
            .flush_record_interval(3);
        let mut trainer = Trainer::<ChainEnv>::build(config);
        let mut recorder = BufferedRecorder::new();

        trainer.train(&mut agent()?, &mut recorder)?;

        assert_eq!(recorder.n_flushes(), 2);
        Ok(())
    }

    #[test]
    fn test_no_episodes() -> Result<()> {
        let mut trainer = Trainer::<ChainEnv>::build(TrainerConfig::default());
        let mut agent = agent()?;

        let rewards = trainer.train(&mut agent, &mut NullRecorder::new())?;

        assert!(rewards.is_empty());
        assert_eq!(agent.env().n_resets, 0);
        Ok(())
    }
}
