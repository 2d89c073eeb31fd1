use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pc_cli::commands::plot::PlotOptions;
use pc_cli::commands::{delete, list, plot, punch, show, total, util};
use pc_cli::prompt::Prompter;
use pc_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut clock = util::open_punchclock(&config)?;
    let now = pc_core::now();
    let mut out = io::stdout().lock();

    match command {
        Commands::In { name, yes } => {
            if *yes {
                punch::clock_in(&mut out, &mut clock, name, now, &mut |_: &str| true)?;
            } else {
                let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
                punch::clock_in(&mut out, &mut clock, name, now, &mut prompter)?;
            }
        }
        Commands::Out { name } => punch::clock_out(&mut out, &mut clock, name, now)?,
        Commands::Show { name } => show::run(&mut out, &clock, name, now)?,
        Commands::Delete { name } => delete::run(&mut out, &mut clock, name)?,
        Commands::Plot {
            name,
            days,
            skip_empty,
            json,
        } => {
            let options = PlotOptions {
                skip_empty: *skip_empty,
                json: *json,
            };
            let days = days.unwrap_or(config.plot_days);
            plot::recent(&mut out, &clock, name, days, options, now)?;
        }
        Commands::PlotDates {
            name,
            start,
            end,
            skip_empty,
            json,
        } => {
            let options = PlotOptions {
                skip_empty: *skip_empty,
                json: *json,
            };
            plot::between(&mut out, &clock, name, (*start, *end), options, now)?;
        }
        Commands::Total { name, since } => total::run(&mut out, &clock, name, *since, now)?,
        Commands::List => list::run(&mut out, &clock)?,
        Commands::Running => list::running(&mut out, &clock)?,
    }

    Ok(())
}
