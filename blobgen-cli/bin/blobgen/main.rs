//! Synthetic payload generator
//!
//! Produces files of an exact byte length filled with deterministic or
//! pseudo-random content, for exercising storage backends and observing
//! replication behavior.

use std::process;

mod opts;

use clap::Parser;
use opts::BlobgenOpts;

use blobgen_cli::run_cli;
use blobgen_core::ContentKind;

const PROGRAM_NAME: &str = "blobgen";

fn main() -> std::io::Result<()> {
    let opts = BlobgenOpts::parse();

    let config = match opts.config() {
        Ok(config) => config,
        Err(err) => {
            // `-qq` suppresses runtime error messages but not clap's own
            // argument parsing errors.
            if opts.quiet < 2 {
                eprintln!("{PROGRAM_NAME}: {err}");
            }

            process::exit(1);
        }
    };

    if config.quiet == 0 && config.content == ContentKind::Binary && config.pattern.is_some() {
        eprintln!("{PROGRAM_NAME}: --pattern has no effect with binary content");
    }

    if let Err(err) = run_cli(opts.output.as_deref(), &config) {
        if config.quiet < 2 {
            eprintln!("{PROGRAM_NAME}: {err}");
        }
        process::exit(1);
    }

    Ok(())
}
