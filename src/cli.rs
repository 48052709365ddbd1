use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "redmine-instances",
    author,
    version,
    about = "Manage directories of multiple Redmine instances",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Log progress to standard error (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Installation directory holding `instances/`
    #[arg(
        long,
        value_name = "DIR",
        env = "REDMINE_INSTANCES_BASE_DIR",
        global = true
    )]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List existing instances
    List,
    /// Create an instance, or repair an existing one
    Create {
        /// Instance name
        instance: String,
    },
    /// Remove an instance after confirmation
    Remove {
        /// Instance name
        instance: String,
    },
    /// Show the manual
    Help,
}
