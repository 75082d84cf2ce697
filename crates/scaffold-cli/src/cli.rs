//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use scaffold_generator::{ApiFramework, ComponentFramework, TestFramework};
use std::path::PathBuf;

/// Scaffold - boilerplate generator for API routers, UI components and tests.
#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for reports (json, text, pretty)
    ///
    /// Defaults to `general.default_format` from the config file, or pretty.
    #[arg(long = "format", global = true)]
    pub format: Option<String>,

    /// Directory containing the templates to use
    #[arg(long, global = true, env = "SCAFFOLD_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,
}

/// Options shared by every generator.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Preview generated code without writing files
    #[arg(long)]
    pub dry_run: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an API router for a resource.
    ///
    /// The resource name is lowercased, singularized for the model name and
    /// converted to `PascalCase`.
    ///
    /// # Examples
    ///
    /// ```bash
    /// scaffold api users --type fastapi -o src/routers
    /// scaffold api posts --type express -o src/routes
    /// scaffold api categories --dry-run
    /// ```
    Api {
        /// Resource name (plural, e.g. "users", "posts")
        resource: String,

        /// Framework type
        #[arg(long = "type", value_enum, default_value_t = ApiType::Fastapi)]
        kind: ApiType,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a UI component.
    ///
    /// # Examples
    ///
    /// ```bash
    /// scaffold component UserProfile --type react -o src/components
    /// scaffold component NavBar --type vue --with-test
    /// ```
    Component {
        /// Component name in `PascalCase`
        name: String,

        /// Framework type
        #[arg(long = "type", value_enum, default_value_t = ComponentType::React)]
        kind: ComponentType,

        /// Also generate a test file
        #[arg(long)]
        with_test: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a test suite for a module.
    ///
    /// # Examples
    ///
    /// ```bash
    /// scaffold test user_service create_user get_user --type pytest -o tests
    /// scaffold test userService createUser getUser --type jest -o __tests__
    /// ```
    Test {
        /// Module name to test
        module: String,

        /// Function names to test
        #[arg(required = true, num_args = 1..)]
        functions: Vec<String>,

        /// Test framework
        #[arg(long = "type", value_enum, default_value_t = TestType::Pytest)]
        kind: TestType,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Manage the configuration file.
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration management actions.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Create a configuration file with default values
    Init,
    /// Show the effective configuration
    Show,
    /// Print the configuration file location
    Path,
}

/// API framework choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ApiType {
    /// Python `FastAPI`
    Fastapi,
    /// TypeScript Express
    Express,
}

impl From<ApiType> for ApiFramework {
    fn from(kind: ApiType) -> Self {
        match kind {
            ApiType::Fastapi => Self::Fastapi,
            ApiType::Express => Self::Express,
        }
    }
}

/// Component framework choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComponentType {
    /// React (TSX)
    React,
    /// Vue single-file component
    Vue,
}

impl From<ComponentType> for ComponentFramework {
    fn from(kind: ComponentType) -> Self {
        match kind {
            ComponentType::React => Self::React,
            ComponentType::Vue => Self::Vue,
        }
    }
}

/// Test framework choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestType {
    /// Python pytest
    Pytest,
    /// TypeScript Jest
    Jest,
}

impl From<TestType> for TestFramework {
    fn from(kind: TestType) -> Self {
        match kind {
            TestType::Pytest => Self::Pytest,
            TestType::Jest => Self::Jest,
        }
    }
}
