use anyhow::Context;
use george::config::ConfigManager;
use george::engines::generation::{ConsoleProgressCallback, EvolutionEngine};
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = "george.toml";

fn main() -> anyhow::Result<()> {
    let manager = ConfigManager::new();

    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => manager
            .load_from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None if PathBuf::from(DEFAULT_CONFIG).is_file() => manager
            .load_from_file(DEFAULT_CONFIG)
            .with_context(|| format!("loading {}", DEFAULT_CONFIG))?,
        None => manager
            .load_from_env()
            .context("loading configuration from environment")?,
    }

    let config = manager.get();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!(
        "Evolving {:?} with population {} and mutation rate {}",
        config.evolution.target,
        config.evolution.population_size,
        config.evolution.mutation_rate
    );

    let max_generations = config.evolution.max_generations;
    let mut callback = ConsoleProgressCallback::new(config.evolution.report_interval);
    let mut engine = EvolutionEngine::from_config(config.evolution)
        .context("initializing evolution engine")?;

    let outcome = engine.run(max_generations, &mut callback);
    println!("{}", outcome);

    Ok(())
}
