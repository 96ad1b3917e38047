use anyhow::Result;
use clap::Parser;

use task_manager::cli::{Args, Commands};
use task_manager::commands;
use task_manager::config;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let load_config = || -> Result<config::Config> {
        let config = config::resolve_config(args.config.as_deref())?;
        commands::utils::init_logging(args.verbose, &config.logging.level);
        Ok(config)
    };

    match args.command {
        Commands::Call { method, args: raw_args } => {
            commands::run_call(&load_config()?, &method, raw_args.as_deref())
        }
        Commands::Serve => commands::run_serve(&load_config()?),
        Commands::Info { json } => commands::run_info(&load_config()?, json),
        // Needs no config, so it works even when the user's file is broken
        Commands::ExampleConfig => {
            print!("{}", config::EXAMPLE_CONFIG);
            Ok(())
        }
    }
}
