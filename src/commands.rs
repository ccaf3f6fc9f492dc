//! CLI command implementations

use anyhow::Context;
use clap::ValueEnum;
use std::path::PathBuf;
use tally_core::{DataSet, KeyStrategy, UnknownNamePolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyArg {
    FirstVisited,
    SmallestName,
}

impl From<KeyArg> for KeyStrategy {
    fn from(arg: KeyArg) -> Self {
        match arg {
            KeyArg::FirstVisited => KeyStrategy::FirstVisited,
            KeyArg::SmallestName => KeyStrategy::SmallestName,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{John: 12, Chris: 4}`
    Text,
    /// `{"John":12,"Chris":4}`
    Json,
    /// Pretty JSON including component members
    Detailed,
}

pub struct RunOptions {
    pub input: Option<PathBuf>,
    pub key: KeyArg,
    pub format: OutputFormat,
    pub create_missing: bool,
}

pub fn run(opts: RunOptions) -> anyhow::Result<()> {
    let data = match &opts.input {
        Some(path) => DataSet::load(path)
            .with_context(|| format!("failed to load data set from {}", path.display()))?,
        None => {
            tracing::debug!("No input given, using built-in sample data");
            DataSet::sample()
        }
    };

    let policy = if opts.create_missing {
        UnknownNamePolicy::CreateZero
    } else {
        UnknownNamePolicy::Fail
    };
    let mut graph = data.build(policy).context("failed to construct synonym graph")?;

    let components = tally_core::aggregate_components(&mut graph, opts.key.into())
        .context("failed to aggregate component frequencies")?;

    let rendered = match opts.format {
        OutputFormat::Text => tally_core::render_mapping(&components),
        OutputFormat::Json => tally_core::render_json(&components)?,
        OutputFormat::Detailed => tally_core::render_detailed(&components)?,
    };
    println!("{}", rendered);
    Ok(())
}
