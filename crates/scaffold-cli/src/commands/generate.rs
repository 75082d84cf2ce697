//! Generator commands: `api`, `component` and `test`.
//!
//! All three build a [`GenerationRequest`] and share [`run`], which wires
//! the template store, the writer and the stdout preview together.

use crate::cli::OutputArgs;
use crate::formatters::format_output;
use anyhow::Result;
use scaffold_codegen::TemplateStore;
use scaffold_core::cli::{ExitCode, OutputFormat};
use scaffold_files::{ArtifactWriter, StdoutPreview, WriteOptions};
use scaffold_generator::{GenerationRequest, Generator};
use tracing::debug;

/// Generates the artifact described by `request`.
///
/// Preview runs print only the `[dry-run]` blocks; other runs print the
/// report in `output_format`.
///
/// # Errors
///
/// Returns the first validation, template or filesystem error. Files written
/// before a filesystem error stay on disk.
pub fn run(
    request: &GenerationRequest,
    output: &OutputArgs,
    store: TemplateStore,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    debug!(
        templates = %store.root().display(),
        output = %output.output.display(),
        force = output.force,
        preview = output.dry_run,
        "running generator"
    );

    let options = WriteOptions::new()
        .with_force(output.force)
        .with_preview(output.dry_run);
    let writer = ArtifactWriter::new(&output.output, options);

    let report = Generator::new(store).generate(request, &writer, &mut StdoutPreview)?;

    if !report.preview {
        println!("{}", format_output(&report, output_format)?);
    }

    Ok(ExitCode::SUCCESS)
}
