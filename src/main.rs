// src/main.rs

use anyhow::{Context, Result};
use aptcache::{CacheConfig, CommandInvoker, InvocationResult};
use clap::{CommandFactory, Parser};
use tracing::{debug, warn};

mod cli;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    // stdout carries the captured line, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Commands::Completions { shell } = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "aptcache", &mut std::io::stdout());
        return Ok(());
    }

    let base = match &cli.config {
        Some(path) => CacheConfig::load(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => CacheConfig::default(),
    };
    let config = base.merge(&cli.options.to_config());
    debug!("Rendered flags: {:?}", config.render_flags());

    let invoker = CommandInvoker::new(config)
        .with_program(&cli.program)
        .with_capture(cli.capture.into());

    let Some((subcommand, args)) = cli.command.into_request() else {
        return Ok(());
    };

    if cli.dry_run {
        println!("{}", invoker.command_line(subcommand, &args));
        return Ok(());
    }

    if !invoker.is_available() {
        warn!("{} not found on PATH", invoker.program().display());
    }

    match invoker.invoke(subcommand, &args) {
        InvocationResult::Success(line) => {
            println!("{}", line);
            Ok(())
        }
        InvocationResult::Failure => {
            eprintln!("Error: apt-cache {} failed", subcommand);
            std::process::exit(1);
        }
    }
}
