use anyhow::Context;
use clap::Parser;
use feed_aggregator::{Activity, AggregatorConfig, AggregatorKind};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{error, info};

/// Group a JSON batch of activities into ranked aggregates
#[derive(Debug, Parser)]
#[command(name = "feed-aggregate", version)]
struct Cli {
    /// Aggregation strategy: modulus, recent_verb or notification
    #[arg(long, default_value = "modulus")]
    aggregator: String,

    /// Bucket count for the modulus strategy
    #[arg(long)]
    modulus: Option<u64>,

    /// JSON array of activities; reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn aggregator_config(&self) -> AggregatorConfig {
        let mut config = AggregatorConfig::new(&self.aggregator);
        if let Some(modulus) = self.modulus {
            config = config.with_parameter("modulus", &modulus.to_string());
        }
        config
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("reading activities from {}", path.display())),
            None => {
                let mut raw = String::new();
                io::stdin()
                    .read_to_string(&mut raw)
                    .context("reading activities from stdin")?;
                Ok(raw)
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the JSON result
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    let aggregator = AggregatorKind::from_config(&cli.aggregator_config()).map_err(|e| {
        error!("Failed to configure aggregator '{}': {}", cli.aggregator, e);
        e
    })?;

    let raw = cli.read_input()?;
    let activities: Vec<Activity> =
        serde_json::from_str(&raw).context("parsing activities as a JSON array")?;
    info!("Loaded {} activities", activities.len());

    let summaries = aggregator.summarize(activities);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&summaries)?
    } else {
        serde_json::to_string(&summaries)?
    };
    println!("{}", output);

    info!("Wrote {} aggregates", summaries.len());
    Ok(())
}
