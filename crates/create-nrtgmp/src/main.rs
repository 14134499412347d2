//! create-nrtgmp-app - Project scaffolding for NRTGMP starter apps

use clap::Parser;
use colored::Colorize;
use nrtgmp_core::tui::CreateArgs;
use nrtgmp_core::{ConfigurationAnswers, ProductConfig};
use std::path::Path;

/// NRTGMP product configuration
#[derive(Clone)]
pub struct NrtgmpConfig;

impl ProductConfig for NrtgmpConfig {
    fn name(&self) -> &'static str {
        "nrtgmp"
    }

    fn display_name(&self) -> &'static str {
        "create-nrtgmp-app"
    }

    fn template_repo_url(&self) -> &'static str {
        "https://github.com/iamabhi747/nrtgmp-template"
    }

    fn template_url_env(&self) -> &'static str {
        "NRTGMP_TEMPLATE_URL"
    }

    fn initial_commit_message(&self) -> &'static str {
        "Initial commit via NRTGMP"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding NRTGMP projects"
    }

    fn next_steps(&self, dir: &Path, _answers: &ConfigurationAnswers) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        steps.push("Fill the environment variables in the .env file".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-nrtgmp-app")]
#[command(about = "CLI for scaffolding NRTGMP projects")]
#[command(version)]
pub struct Args {
    /// Directory name of the project to create
    pub name: String,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = NrtgmpConfig;

    let result = nrtgmp_core::run(&config, args.into()).await;

    // Ensure cursor is visible on exit
    let _ = console::Term::stderr().show_cursor();

    // Exit codes for every failure class are decided here and nowhere else
    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(e.exit_code());
    }
}
