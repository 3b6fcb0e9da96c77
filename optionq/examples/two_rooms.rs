use anyhow::Result;
use clap::Parser;
use optionq::{
    core::{record::LogRecorder, Env as _, OptionAgent, Opt as _, Trainer},
    gridworld::Gridworld,
    ExperimentConfig,
};

/// Train an option agent in the two-rooms gridworld
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file with the environment, agent and trainer configurations
    #[arg(long)]
    config: Option<String>,

    /// Number of training episodes, overrides the configuration
    #[arg(long)]
    episodes: Option<usize>,

    /// Seed of the agent, overrides the configuration
    #[arg(long)]
    seed: Option<u64>,
}

fn load_config(args: &Args) -> Result<ExperimentConfig> {
    let mut config = match &args.config {
        Some(path) => ExperimentConfig::load(path)?,
        None => ExperimentConfig::default(),
    };
    if let Some(n) = args.episodes {
        config.trainer = config.trainer.max_episodes(n);
    }
    if let Some(seed) = args.seed {
        config.agent = config.agent.seed(seed);
    }
    Ok(config)
}

fn train(config: &ExperimentConfig) -> Result<OptionAgent<Gridworld>> {
    let env = Gridworld::build(&config.env, config.agent.seed as i64)?;
    let mut agent = OptionAgent::new(env, config.agent.clone());
    let mut trainer = Trainer::build(config.trainer.clone());
    let mut recorder = LogRecorder::new();

    trainer.train(&mut agent, &mut recorder)?;
    Ok(agent)
}

/// Option values at the initial state, best first.
fn start_values(agent: &OptionAgent<Gridworld>) -> Vec<(String, f64)> {
    let start = agent.env().start();
    let mut values: Vec<_> = agent
        .option_values(&start)
        .into_iter()
        .map(|(o, v)| (o.id().to_string(), v))
        .collect();
    values.sort_by(|a, b| b.1.total_cmp(&a.1));
    values
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let agent = train(&config)?;

    println!("Option values at {:?}:", agent.env().start());
    for (id, v) in start_values(&agent) {
        println!("  {:<10} {:>8.4}", id, v);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_rooms() -> Result<()> {
        let args = Args {
            config: None,
            episodes: Some(50),
            seed: Some(0),
        };
        let config = load_config(&args)?;
        assert_eq!(config.trainer.max_episodes, 50);

        let agent = train(&config)?;
        let values = start_values(&agent);
        assert_eq!(values.len(), 3);
        assert!(values[0].1 >= values[2].1);
        Ok(())
    }
}
