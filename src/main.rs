use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use reducer_dispatch::cli::{Cli, Session, Step};
use reducer_dispatch::config::Config;
use reducer_dispatch::logging::init_tracing;
use reducer_dispatch::{CommitPolicy, Value};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => Config::load().context("Failed to load default config")?,
    };
    if cli.always_commit {
        config.dispatch.commit = CommitPolicy::Always;
    }

    let initial = match &cli.state {
        Some(raw) => raw
            .parse::<Value>()
            .context("--state is not valid JSON")?,
        None => config.initial_state()?,
    };

    let steps = cli
        .steps
        .iter()
        .map(|raw| raw.parse::<Step>())
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid step")?;

    let session = Session::new(initial, &config.dispatch);
    debug!(
        actions = ?session.actions().collect::<Vec<_>>(),
        policy = ?config.dispatch.commit,
        "session ready"
    );

    for step in &steps {
        session
            .apply(step)
            .with_context(|| format!("Step '{}' failed", step))?;
    }

    println!("{}", session.state());
    println!("commits: {}", session.commits());
    Ok(())
}
