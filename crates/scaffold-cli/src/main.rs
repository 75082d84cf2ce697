//! Scaffold boilerplate generator.
//!
//! Generates API routers, UI components and test suites from templates.
//!
//! # Examples
//!
//! ```bash
//! # FastAPI router for the posts resource
//! scaffold api posts -o src/routers
//!
//! # React component with a test, previewed only
//! scaffold component UserProfile --with-test --dry-run
//!
//! # Jest suite for two functions
//! scaffold test userService createUser getUser --type jest
//! ```

use clap::Parser;
use scaffold_cli::{Cli, runner};
use scaffold_core::cli::ExitCode;

fn main() {
    let cli = Cli::parse();

    let code = match runner::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::ERROR
        }
    };

    std::process::exit(code.as_i32());
}
