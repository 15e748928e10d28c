//! DualCare - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dualcare::{
    cli::{Args, CheckArgs, Commands, Config, Verbosity},
    repl::{DisplayManager, InputHandler, Questionnaire},
    telemetry, AdviceCatalog, DiagnosisModel, LinearModel, PredictionPresenter, SymptomVector,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.clone()).context("Failed to load configuration")?;

    // explicit flags beat the configured default
    let verbosity = if args.quiet || args.verbose > 0 {
        args.verbosity()
    } else {
        Verbosity::from_config(&config.display.default_verbosity)
    };
    telemetry::init(verbosity);

    if args.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }

    let display = DisplayManager::new(config.display.chart_width, verbosity.show_chart());

    match &args.command {
        Commands::Symptoms => {
            display.show_symptoms();
        }
        Commands::Config => {
            show_config(&config)?;
        }
        Commands::Classes => {
            let (model, catalog) = load_runtime(&args, &config)?;
            display.show_classes(model.classes(), &catalog);
        }
        Commands::Check(check) => {
            let (model, catalog) = load_runtime(&args, &config)?;
            let presenter = PredictionPresenter::new(&model, &catalog)
                .strict(args.strict || config.input.strict);
            run_check(&presenter, check, &display, verbosity)?;
        }
        Commands::Interactive => {
            let (model, catalog) = load_runtime(&args, &config)?;
            let presenter = PredictionPresenter::new(&model, &catalog)
                .strict(args.strict || config.input.strict);

            if verbosity.show_chart() {
                display.show_banner(env!("CARGO_PKG_VERSION"));
            }
            let input = InputHandler::new()?;
            let mut questionnaire = Questionnaire::new(&presenter, input, display);
            let outcomes = questionnaire.run()?;
            log::info!("Interactive session finished after {} checks", outcomes.len());
        }
    }

    Ok(())
}

/// Load the model and advice catalog once. Any failure here is fatal.
fn load_runtime(args: &Args, config: &Config) -> Result<(LinearModel, AdviceCatalog)> {
    let model_path = args.model.clone().unwrap_or_else(|| config.model_path());
    let model = LinearModel::load(&model_path)
        .with_context(|| format!("Cannot start without a model ({})", model_path.display()))?;

    let catalog = match args.advice.clone().or_else(|| config.advice_path()) {
        Some(path) => AdviceCatalog::load(&path)
            .with_context(|| format!("Cannot load advice catalog ({})", path.display()))?,
        None => AdviceCatalog::builtin(),
    };

    let missing = catalog.missing(model.classes());
    if !missing.is_empty() {
        log::info!("{} model classes have no advice entry and will use the fallback", missing.len());
    }

    Ok((model, catalog))
}

fn run_check<M: DiagnosisModel + ?Sized>(
    presenter: &PredictionPresenter<'_, M>,
    check: &CheckArgs,
    display: &DisplayManager,
    verbosity: Verbosity,
) -> Result<()> {
    let answers = check.to_answers()?;
    let outcome = presenter.present(&answers)?;

    if check.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if verbosity.show_vector() {
        display.show_vector(&SymptomVector::from_answers(&answers));
    }
    display.show_outcome(&outcome);
    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    let path = Config::default_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no home directory)".to_string());
    println!("{} {}", "Config file:".bold(), path.dimmed());
    println!("{}", toml::to_string_pretty(config).context("Failed to render configuration")?);
    Ok(())
}
