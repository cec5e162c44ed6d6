// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::io::{self, Write};
use std::time::Instant;

use anyhow::{bail, Context};
use asset_chain::capabilities::CapabilityRegistry;
use asset_chain::config::{load_and_validate_config, RuntimeBuilder};
use asset_chain::engine::ChainRunner;
use asset_chain::model::Resource;
use asset_chain::observability::init_tracing;

fn usage(program: &str) {
    eprintln!("Usage: {} <config.yaml|config.toml> <file> [file ...]", program);
    eprintln!("       {} --describe <config.yaml|config.toml>", program);
    eprintln!("Example: {} demos/asset-chain.yaml demos/app.js demos/theme.css", program);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("asset-chain");

    match args.get(1).map(String::as_str) {
        Some("--describe") if args.len() == 3 => describe(&args[2]),
        Some(config_file) if args.len() >= 3 && config_file != "--describe" => {
            run(config_file, &args[2..]).await
        }
        _ => {
            usage(program);
            std::process::exit(1);
        }
    }
}

fn build_runner(config_file: &str) -> anyhow::Result<ChainRunner> {
    let config = load_and_validate_config(config_file)?;
    let runner = RuntimeBuilder::from_config(&config, CapabilityRegistry::builtin())
        .with_context(|| format!("Failed to build processors from {}", config_file))?;
    Ok(runner)
}

/// Print the capabilities each configured chain resolves to as JSON
fn describe(config_file: &str) -> anyhow::Result<()> {
    let runner = build_runner(config_file)?;
    let report = serde_json::to_string_pretty(&runner.describe())?;
    println!("{}", report);
    Ok(())
}

/// Process the given files and print one merged output per resource type
async fn run(config_file: &str, files: &[String]) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let runner = build_runner(config_file)?;

    let mut resources = Vec::with_capacity(files.len());
    for file in files {
        let Some(resource) = Resource::from_uri(file.as_str()) else {
            bail!("Cannot infer resource type of '{}': expected a .js or .css file", file);
        };
        let content = tokio::fs::read(file)
            .await
            .with_context(|| format!("Failed to read {}", file))?;
        resources.push((resource.with_minimize(runner.minimize()), content));
    }

    let outputs = runner.process_all(resources).await?;

    let mut stdout = io::stdout().lock();
    for (resource_type, output) in outputs {
        writeln!(stdout, "/* ---- {} ---- */", resource_type)?;
        stdout.write_all(&output)?;
        if !output.ends_with(b"\n") {
            writeln!(stdout)?;
        }
    }

    tracing::debug!(elapsed = ?start_time.elapsed(), "Processed {} files", files.len());
    Ok(())
}
