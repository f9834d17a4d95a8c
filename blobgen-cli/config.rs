//! Configuration types and constants for blobgen CLI operations.

use blobgen_core::{ContentKind, FillStrategy, DEFAULT_CHUNK_SIZE};

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Configuration for CLI operations
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Kind of content to generate
    pub content: ContentKind,
    /// Fill strategy for binary content
    pub strategy: FillStrategy,
    /// Total payload length in bytes
    pub target_bytes: u64,
    /// Chunk size used while streaming
    pub chunk_size: usize,
    /// Custom text pattern (text content only)
    pub pattern: Option<String>,
    /// Force overwrite existing files
    pub force: bool,
    /// Write to a temporary file and rename into place on success
    pub atomic: bool,
    /// Verbose output (progress and summary on stderr)
    pub verbose: bool,
    /// Quiet level (suppress warnings; twice to suppress errors too)
    pub quiet: u8,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            content: ContentKind::Text,
            strategy: FillStrategy::default(),
            target_bytes: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
            pattern: None,
            force: false,
            atomic: false,
            verbose: false,
            quiet: 0,
        }
    }
}
