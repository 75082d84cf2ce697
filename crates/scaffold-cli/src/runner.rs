//! Command execution and runtime logic.
//!
//! Contains logging initialization, settings resolution and the command
//! dispatch.

use anyhow::{Context, Result};
use scaffold_codegen::TemplateStore;
use scaffold_core::cli::{ExitCode, OutputFormat};
use scaffold_generator::{ApiRequest, ComponentRequest, GenerationRequest, TestRequest};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::commands::{self, config::Config};

/// Initializes logging infrastructure.
///
/// `verbose` forces debug level. Otherwise `RUST_LOG` wins, then
/// `default_level`. Logs go to stderr so preview output on stdout stays
/// clean.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool, default_level: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Settings after merging flags, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Report format
    pub output_format: OutputFormat,
    /// Trusted template root, `None` for the bundled templates
    pub templates_dir: Option<PathBuf>,
}

impl Settings {
    /// Merges command-line values over `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the format name is unknown.
    pub fn resolve(
        format: Option<&str>,
        templates_dir: Option<PathBuf>,
        config: &Config,
    ) -> Result<Self> {
        let output_format = format
            .unwrap_or(&config.general.default_format)
            .parse::<OutputFormat>()?;

        Ok(Self {
            output_format,
            templates_dir: templates_dir.or_else(|| config.templates.dir.clone()),
        })
    }

    /// Opens the trusted template root.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the directory does not exist.
    pub fn template_store(&self) -> Result<TemplateStore> {
        let store = match &self.templates_dir {
            Some(dir) => TemplateStore::new(dir)?,
            None => TemplateStore::bundled()?,
        };
        debug!(root = %store.root().display(), "template root");
        Ok(store)
    }
}

/// Runs a parsed invocation.
///
/// Loads the config file, initializes logging and runs the command. The
/// `config` subcommand runs with defaults when the file is invalid, so
/// `config path` and `config init` stay usable; `config show` reports the
/// error itself.
///
/// # Errors
///
/// Returns any configuration, validation, template or filesystem error.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = if matches!(cli.command, Commands::Config { .. }) {
        commands::config::load_config().unwrap_or_default()
    } else {
        commands::config::load_config()?
    };
    init_logging(cli.verbose, &config.general.log_level)?;

    let settings = Settings::resolve(cli.format.as_deref(), cli.templates_dir, &config)?;
    execute_command(cli.command, &settings)
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn execute_command(command: Commands, settings: &Settings) -> Result<ExitCode> {
    let format = settings.output_format;

    match command {
        Commands::Api {
            resource,
            kind,
            output,
        } => {
            let request = ApiRequest::new(resource.to_lowercase(), kind.into());
            commands::generate::run(
                &GenerationRequest::from(request),
                &output,
                settings.template_store()?,
                format,
            )
        }
        Commands::Component {
            name,
            kind,
            with_test,
            output,
        } => {
            let request = ComponentRequest::new(name, kind.into()).with_test(with_test);
            commands::generate::run(
                &GenerationRequest::from(request),
                &output,
                settings.template_store()?,
                format,
            )
        }
        Commands::Test {
            module,
            functions,
            kind,
            output,
        } => {
            let request = TestRequest::new(module, functions, kind.into());
            commands::generate::run(
                &GenerationRequest::from(request),
                &output,
                settings.template_store()?,
                format,
            )
        }
        Commands::Config { action } => commands::config::run(action, format),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
