use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::Result;
use crate::help;
use crate::instance;
use crate::paths::{defaults_file_path, Layout};

/// Source of answers to interactive questions.
pub trait Prompt {
    /// Ask `question` and return the answer line, or `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Asks on stdout and reads the answer from stdin.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{} ", question)?;
        stdout.flush()?;

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Where command output goes and how questions are answered.
pub struct Console<'a> {
    pub out: &'a mut dyn Write,
    pub prompt: &'a mut dyn Prompt,
    /// Whether stdout is a terminal a pager can take over.
    pub interactive: bool,
}

/// How the installation is located.
#[derive(Debug, Clone)]
pub struct Environment {
    pub base_dir: Option<PathBuf>,
    pub defaults_file: PathBuf,
}

impl Environment {
    pub fn from_process(base_dir: Option<PathBuf>) -> Self {
        Self {
            base_dir,
            defaults_file: defaults_file_path(),
        }
    }

    fn layout(&self) -> Result<Layout> {
        match &self.base_dir {
            Some(dir) => Ok(Layout::new(dir)),
            None => Layout::discover(),
        }
    }

    fn settings(&self, layout: &Layout) -> Result<Settings> {
        Settings::load(layout, &self.defaults_file)
    }
}

pub fn dispatch(command: Command, env: &Environment, console: &mut Console<'_>) -> Result<()> {
    match command {
        Command::Help => help::show_help(console.out, console.interactive),
        Command::List => list(&env.layout()?, console.out),
        Command::Create { instance } => {
            let layout = env.layout()?;
            let settings = env.settings(&layout)?;
            create(&layout, &settings, &instance)
        }
        Command::Remove { instance } => {
            let layout = env.layout()?;
            let settings = env.settings(&layout)?;
            remove(&layout, &settings, &instance, console)
        }
    }
}

// === Instances ===

pub fn list(layout: &Layout, out: &mut dyn Write) -> Result<()> {
    for name in instance::list_instances(layout)? {
        writeln!(out, "{}", name?)?;
    }
    Ok(())
}

pub fn create(layout: &Layout, settings: &Settings, name: &str) -> Result<()> {
    instance::create_instance(layout, settings, name)
}

pub fn remove(
    layout: &Layout,
    settings: &Settings,
    name: &str,
    console: &mut Console<'_>,
) -> Result<()> {
    crate::validation::validate_instance_name(name)?;

    let question = format!(
        "This will remove all data from instance {}. Are you sure? [y/N]",
        name
    );
    let answer = console.prompt.ask(&question)?;
    if !is_confirmation(answer.as_deref()) {
        writeln!(console.out, "Aborted.")?;
        return Ok(());
    }

    if !instance::remove_instance(layout, name)? {
        writeln!(console.out, "Instance {} does not exist.", name)?;
        return Ok(());
    }

    if settings.follow_fhs {
        let leftovers = instance::fhs_leftovers(layout, name);
        if !leftovers.is_empty() {
            writeln!(console.out, "The following directories were not removed:")?;
            for path in leftovers {
                writeln!(console.out, "  {}", path.display())?;
            }
        }
    }
    writeln!(
        console.out,
        "Remember to drop the database of instance {} if it has one.",
        name
    )?;
    Ok(())
}

fn is_confirmation(answer: Option<&str>) -> bool {
    matches!(answer.map(str::trim), Some("y" | "Y"))
}
