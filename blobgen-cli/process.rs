//! High-level output processing and CLI orchestration.

use std::io;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::Result;
use crate::io::open_output;
use crate::operations::generate_payload;

/// Processes a single output destination according to the CLI configuration.
///
/// This is the main entry point for generation runs. It orchestrates the
/// complete workflow:
///
/// 1. Resolves the destination (file path, or stdout for `-`/absent paths)
/// 2. Opens the output sink (direct or atomic, honoring `--force`)
/// 3. Runs the generation pipeline
/// 4. Completes the output (renames the temporary file in atomic mode)
///
/// # Parameters
///
/// * `output_path` - Destination path; `None`, an empty string, or `"-"`
///   write to stdout
/// * `config` - CLI configuration specifying content, size, and flags
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The output file exists and `force` is not set
/// - The output (or its temporary sibling) cannot be created
/// - The configuration fails validation in the engine
/// - A write to the destination fails
/// - The finished temporary file cannot be renamed into place
pub fn process_output(output_path: Option<&str>, config: &CliConfig) -> Result<()> {
    let path: Option<PathBuf> = match output_path {
        None => None,
        Some(p) if p.is_empty() || p == "-" => None,
        Some(p) => Some(PathBuf::from(p)),
    };

    let mut sink = open_output(path.as_deref(), config)?;
    generate_payload(&mut sink, config)?;
    sink.finish()
}

/// Runs a generation command with error conversion for the binary entrypoint.
///
/// This is a convenience wrapper around [`process_output`] that converts the
/// structured CLI error into an [`io::Error`] carrying an appropriate error
/// kind for exit handling.
///
/// # Errors
///
/// Returns an error if the generation run fails; see [`process_output`].
pub fn run_cli(output_path: Option<&str>, config: &CliConfig) -> io::Result<()> {
    process_output(output_path, config).map_err(io::Error::from)
}
