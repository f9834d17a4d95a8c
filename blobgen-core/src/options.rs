//! High-level configuration builder for payload generation.

use crate::config::{ContentKind, FillStrategy};
use crate::error::Result;
use crate::source::ChunkSource;

/// Default chunk size used while streaming a payload.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Configuration builder for payload generation runs.
///
/// Defaults are explicit configuration values owned by the options instance;
/// there is no module-level state. A fresh instance describes an empty text
/// payload streamed in 64 KiB chunks.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    content: ContentKind,
    strategy: FillStrategy,
    target_bytes: u64,
    chunk_size: usize,
    pattern: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            content: ContentKind::Text,
            strategy: FillStrategy::default(),
            target_bytes: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
            pattern: None,
        }
    }
}

impl GenerationOptions {
    /// Sets the kind of content the payload is filled with.
    #[must_use]
    pub fn with_content(mut self, content: ContentKind) -> Self {
        self.content = content;
        self
    }

    /// Sets the fill strategy for binary payloads.
    ///
    /// The strategy is ignored for [`ContentKind::Text`] payloads.
    #[must_use]
    pub fn with_strategy(mut self, strategy: FillStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the total number of bytes the run produces.
    #[must_use]
    pub fn with_target_bytes(mut self, target_bytes: u64) -> Self {
        self.target_bytes = target_bytes;
        self
    }

    /// Sets the chunk size used while streaming the payload.
    ///
    /// Memory usage of a run is proportional to the chunk size and
    /// independent of the target length. A chunk size of zero is rejected
    /// when the chunk source is built.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets a custom base pattern for text payloads.
    ///
    /// The pattern is repeated until the target length is reached. When no
    /// pattern is supplied, a built-in sentence set terminated by a line
    /// break is used. An empty pattern is rejected when the chunk source is
    /// built.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Returns the configured content kind.
    pub fn content(&self) -> ContentKind {
        self.content
    }

    /// Returns the configured binary fill strategy.
    pub fn strategy(&self) -> FillStrategy {
        self.strategy
    }

    /// Returns the configured target length in bytes.
    pub fn target_bytes(&self) -> u64 {
        self.target_bytes
    }

    /// Returns the configured chunk size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the configured custom text pattern, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Validates the options and builds the chunk source for one run.
    ///
    /// The source is consumed by pulling chunks until it reports
    /// end-of-sequence; it is not restartable. Validation happens here, so
    /// a run fails fast before the first byte is produced.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidChunkSize`] when the chunk size is zero
    /// - [`crate::Error::EmptyPattern`] when a custom text pattern is empty
    /// - [`crate::Error::AllocationFailed`] when the chunk template cannot
    ///   be allocated
    pub fn build_source(&self) -> Result<ChunkSource> {
        ChunkSource::new(self)
    }
}
