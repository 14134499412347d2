//! Charm-style CLI prompts using cliclack

use crate::answers::{ConfigurationAnswers, SqlDialect};
use crate::config::generator;
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::runtime::bootstrap;
use crate::target::ProjectTarget;
use crate::templates::{provision, resolve, Resolution, TemplateSource, TemplateVariant};
use colored::Colorize;

/// CLI arguments for a scaffolding run
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Directory name of the project to create
    pub name: String,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the full scaffolding workflow with interactive prompts.
///
/// Stages run strictly in order: preconditions, answer collection, variant
/// resolution, provisioning, materialization, bootstrap. The first failing
/// stage aborts the run; nothing already written to disk is cleaned up.
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<(), ScaffoldError> {
    cliclack::intro(config.display_name())?;

    // Preconditions, checked before any prompt or side effect
    let target = ProjectTarget::resolve(&args.name)?;
    let source = TemplateSource::from_config(config)?;

    // Step 1: Collect integration choices
    cliclack::log::info("Database Configuration")?;
    let answers = collect_answers(&args)?;

    // Step 2: Resolve the answers to a template variant
    let (variant, answers) = resolve_with_fallback(answers, args.yes)?;

    // Step 3: Fetch the template and detach it from its history
    let spinner = cliclack::spinner();
    spinner.start("Fetching template...");
    match provision(&source, &variant, target.path()).await {
        Ok(()) => {
            spinner.stop(format!("Template fetched into {}", target.path().display()));
        }
        Err(e) => {
            spinner.stop("Failed to fetch template");
            return Err(ScaffoldError::Provision(e));
        }
    }

    // Step 4: Rewrite package metadata and write .env
    generator::materialize(target.path(), target.base_name())
        .await
        .map_err(ScaffoldError::Materialize)?;

    // Step 5: Install dependencies and create the initial commit
    let spinner = cliclack::spinner();
    spinner.start("Installing dependencies...");
    if let Err(e) = bootstrap::install_dependencies(target.path()).await {
        spinner.stop("Failed to install dependencies");
        return Err(ScaffoldError::Bootstrap(e));
    }
    spinner.stop("Dependencies installed");

    cliclack::log::step("Creating initial commit...")?;
    bootstrap::create_initial_commit(target.path(), config.initial_commit_message())
        .await
        .map_err(ScaffoldError::Bootstrap)?;

    // Step 6: Summary and next steps
    print_summary(config, &target, &answers)?;

    Ok(())
}

/// Ask the three configuration questions in order; the dialect question is
/// only shown when Sequelize was accepted. `--yes` skips straight to the
/// supported defaults.
fn collect_answers(args: &CreateArgs) -> Result<ConfigurationAnswers, ScaffoldError> {
    if args.yes {
        cliclack::log::info("Using default configuration (--yes)")?;
        return Ok(ConfigurationAnswers::default_supported());
    }

    let mongodb: bool = cliclack::confirm("Do you want MongoDB?")
        .initial_value(true)
        .interact()?;

    let sequelize: bool = cliclack::confirm("Do you want Sequelize?")
        .initial_value(true)
        .interact()?;

    let dialect = if sequelize {
        let mut select = cliclack::select("Select Dialect of Sequelize:");
        for dialect in SqlDialect::all() {
            select = select.item(dialect, dialect.display_name(), "");
        }
        Some(select.interact()?)
    } else {
        None
    };

    Ok(ConfigurationAnswers::new(mongodb, sequelize, dialect))
}

/// Resolve the answers against the variant table. When the combination is
/// unsupported, warn and offer the default variant; accepting overwrites the
/// answers with the supported defaults, declining aborts the run.
fn resolve_with_fallback(
    answers: ConfigurationAnswers,
    yes: bool,
) -> Result<(TemplateVariant, ConfigurationAnswers), ScaffoldError> {
    match resolve(&answers) {
        Resolution::Supported(variant) => Ok((variant, answers)),
        Resolution::Unsupported(reason) => {
            cliclack::log::warning(reason.message())?;

            let accept = if yes {
                true
            } else {
                cliclack::confirm("Do you want to use the default template?")
                    .initial_value(true)
                    .interact()?
            };

            if !accept {
                return Err(ScaffoldError::FallbackDeclined);
            }

            Ok((
                TemplateVariant::DEFAULT,
                ConfigurationAnswers::default_supported(),
            ))
        }
    }
}

fn print_summary<C: ProductConfig>(
    config: &C,
    target: &ProjectTarget,
    answers: &ConfigurationAnswers,
) -> Result<(), ScaffoldError> {
    cliclack::log::success(format!(
        "Success! Created {} at {}",
        target.base_name(),
        target.path().display()
    ))?;

    let mark = |on: bool| if on { "✓".green() } else { "✗".red() };
    let sequelize_label = match answers.dialect {
        Some(dialect) => format!("Sequelize ({})", dialect.id()),
        None => "Sequelize".to_string(),
    };

    println!();
    println!("  Selected options");
    println!();
    println!("  {} MongoDB", mark(answers.mongodb));
    println!("  {} {}", mark(answers.sequelize), sequelize_label);
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in config.next_steps(target.path(), answers).iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy hacking!")?;

    Ok(())
}
