use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Platform Version Query Service
///
/// Answers "getPlatformVersion" on the task_manager method channel with the
/// name and version of the operating system it runs on.
#[derive(Parser, Debug)]
#[command(name = "task-manager")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (defaults to the per-user config file)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invoke a method on the channel and print the result
    Call {
        /// Method name, e.g. getPlatformVersion
        method: String,

        /// Method arguments as JSON
        #[arg(long)]
        args: Option<String>,
    },
    /// Answer JSON method calls from stdin, one per line
    Serve,
    /// Show platform and channel information
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print an example configuration file
    ExampleConfig,
}
