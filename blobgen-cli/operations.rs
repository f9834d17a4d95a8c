//! Payload generation operations for the blobgen CLI.

use std::io::Write;

use blobgen_core::{
    generate, generate_with_progress, GenerationOptions, GenerationSummary, Progress,
    ProgressReport,
};

use crate::config::CliConfig;
use crate::error::Result;
use crate::utils::bytes::{format_size, format_size_with_bytes, format_throughput};

/// Progress renderer printing decile notifications to stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn on_progress(&mut self, report: &ProgressReport) {
        eprintln!(
            "{:>5.1}% - {} of {} ({})",
            report.percent(),
            format_size(report.bytes_written),
            format_size(report.target_bytes),
            format_throughput(report.throughput_bytes_per_sec()),
        );
    }
}

/// Converts the CLI configuration into engine options.
pub(crate) fn build_options(config: &CliConfig) -> GenerationOptions {
    let mut options = GenerationOptions::default()
        .with_content(config.content)
        .with_strategy(config.strategy)
        .with_target_bytes(config.target_bytes)
        .with_chunk_size(config.chunk_size);
    if let Some(pattern) = &config.pattern {
        options = options.with_pattern(pattern.clone());
    }
    options
}

/// Generates a payload into an output writer.
///
/// Runs the generation pipeline with settings specified in [`CliConfig`].
/// With `verbose` enabled, decile progress notifications and a completion
/// summary are printed to stderr.
///
/// # Parameters
///
/// * `output` - Writer receiving the generated payload
/// * `config` - CLI configuration specifying content, size, and verbosity
///
/// # Returns
///
/// Returns the [`GenerationSummary`] of the completed run.
///
/// # Errors
///
/// Returns an error if the configuration fails validation or a write to the
/// output fails; write failures abort the run immediately.
pub fn generate_payload(output: impl Write, config: &CliConfig) -> Result<GenerationSummary> {
    let options = build_options(config);

    let summary = if config.verbose {
        generate_with_progress(output, &options, &mut StderrProgress)?
    } else {
        generate(output, &options)?
    };

    if config.verbose {
        eprintln!(
            "Wrote {} in {:.2} s ({})",
            format_size_with_bytes(summary.bytes_written),
            summary.elapsed.as_secs_f64(),
            format_throughput(summary.throughput_bytes_per_sec()),
        );
    }

    Ok(summary)
}
