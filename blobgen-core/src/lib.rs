//! # blobgen-core
//!
//! Bounded streaming payload generator for storage replication testing.
//!
//! This crate produces exactly N bytes of deterministic or pseudo-random
//! content as a sequence of fixed-size chunks and streams the sequence into
//! an arbitrary sink. It offers both synchronous and asynchronous APIs and
//! never holds more than one chunk in memory, regardless of how large the
//! requested payload is.

pub mod config;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod progress;
pub mod size;
pub mod source;

pub use config::{ContentKind, FillStrategy, GenerationSummary};
pub use error::{Error, Result};
pub use options::{GenerationOptions, DEFAULT_CHUNK_SIZE};
#[cfg(feature = "async")]
pub use pipeline::{generate_async, generate_with_progress_async};
pub use pipeline::{generate, generate_with_progress};
pub use progress::{Progress, ProgressReport};
pub use size::parse_size;
pub use source::ChunkSource;
