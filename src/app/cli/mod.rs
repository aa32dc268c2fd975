//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, debug};

use crate::app::api::{self, GenerateOutcome};
use crate::domain::{AppError, GenerateConfig, TemplateSyntax};

#[derive(Parser)]
#[command(name = "stackgen")]
#[command(version)]
#[command(
    about = "Render userdata bootstrap scripts into the web stack CloudFormation template",
    long_about = None
)]
struct Cli {
    /// TOML file overriding the default paths
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Base directory for relative paths (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Template document to render
    #[arg(short, long, value_name = "FILE")]
    template: Option<PathBuf>,
    /// Destination of the rendered document
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Template delimiter syntax (erb, jinja)
    #[arg(short, long)]
    syntax: Option<TemplateSyntax>,
    /// Fail without writing if the rendered output is not valid JSON
    #[arg(long)]
    check_json: bool,
    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<GenerateConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => api::load_config(path)?,
            None => GenerateConfig::default(),
        };
        if let Some(template) = &self.template {
            config.template = template.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(syntax) = self.syntax {
            config.syntax = syntax;
        }
        if self.check_json {
            config.check_json = true;
        }
        Ok(config)
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run_generate(&cli) {
        Ok(outcome) => println!("{}", outcome.display_path()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_generate(cli: &Cli) -> Result<GenerateOutcome, AppError> {
    let config = cli.resolve_config()?;
    debug!("Using {} syntax for {}", config.syntax, config.template.display());
    match &cli.root {
        Some(root) => api::generate_at(root.clone(), &config),
        None => api::generate(&config),
    }
}
