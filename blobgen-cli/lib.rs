//! Common CLI utilities and shared functionality for the blobgen
//! command-line tools.
//!
//! This crate provides the glue between command-line options and the
//! generation engine in `blobgen-core`: output handling (files, standard
//! output, atomic temp-and-rename writes), progress rendering, and error
//! reporting.

pub mod config;
pub mod error;
pub mod io;
pub mod operations;
pub mod process;

mod utils;


pub use config::{CliConfig, DEFAULT_BUFFER_SIZE};
pub use error::{Error, Result};
pub use io::{open_output, OutputSink};
pub use operations::generate_payload;
pub use process::{process_output, run_cli};
