mod cli;
mod commands;
mod config;
mod error;
mod help;
mod instance;
mod links;
mod ownership;
mod paths;
mod platform;
mod validation;

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::{CommandFactory as _, Parser as _};
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Command};
pub use commands::{dispatch, Console, Environment, Prompt, StdinPrompt};
pub use config::Settings;
pub use error::{AppError, ErrorKind, Result};
pub use instance::{
    create_instance, ensure_directory, list_instances, physical_path, remove_instance, DirKind,
};
pub use ownership::Ownership;
pub use paths::Layout;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Also installs the bridge that forwards `log` records.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn usage_failure(message: Option<&str>) -> ExitCode {
    if let Some(message) = message {
        eprintln!("error: {}", message);
    }
    eprintln!("{}", Cli::command().render_usage());
    ExitCode::from(ErrorKind::Usage.exit_code())
}

pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(ErrorKind::Usage.exit_code())
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        return usage_failure(None);
    };

    let env = Environment::from_process(cli.base_dir);
    let mut stdout = std::io::stdout();
    let interactive = stdout.is_terminal();
    let mut prompt = StdinPrompt;
    let mut console = Console {
        out: &mut stdout,
        prompt: &mut prompt,
        interactive,
    };

    match dispatch(command, &env, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.kind() == ErrorKind::Usage => usage_failure(Some(err.detail())),
        Err(err) => {
            log::debug!("Command failed: {:?}", err);
            eprintln!("error: {}", err);
            ExitCode::from(err.kind().exit_code())
        }
    }
}
