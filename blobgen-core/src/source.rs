//! Bounded pull-based chunk sequence backing a generation run.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::{ContentKind, FillStrategy};
use crate::error::{Error, Result};
use crate::options::GenerationOptions;

/// Period of the [`FillStrategy::Sequential`] byte ramp.
const RAMP_PERIOD: usize = 16;

/// Built-in base pattern for text payloads without a caller-supplied one.
const DEFAULT_TEXT_PATTERN: &str = "The quick brown fox jumps over the lazy dog. \
     Pack my box with five dozen liquor jugs. \
     Sphinx of black quartz, judge my vow.\n";

/// A finite, ordered sequence of chunks adding up to exactly the target
/// length.
///
/// The chunk template is built once at construction and reused verbatim for
/// every full-size chunk; each pull returns a slice of it, so memory usage is
/// proportional to the chunk size and independent of the target. The one
/// exception is [`FillStrategy::Random`], where the template is refilled with
/// fresh bytes on every pull — reusing a single random chunk would make the
/// output periodic with the chunk size as its period.
///
/// The sequence is single-consumer and not restartable: once
/// [`ChunkSource::next_chunk`] returns `None` it stays terminal. Cancellation
/// is caller-driven — the consumer simply stops pulling; the source holds no
/// external resources, so abandonment requires no cleanup.
#[derive(Debug)]
pub struct ChunkSource {
    template: Vec<u8>,
    rng: Option<StdRng>,
    chunk_size: usize,
    target: u64,
    emitted: u64,
}

impl ChunkSource {
    /// Validates the options and builds a source for one run.
    pub(crate) fn new(options: &GenerationOptions) -> Result<Self> {
        let chunk_size = options.chunk_size();
        if chunk_size == 0 {
            return Err(Error::InvalidChunkSize);
        }

        let template = match options.content() {
            ContentKind::Text => text_template(options.pattern(), chunk_size)?,
            ContentKind::Binary => binary_template(options.strategy(), chunk_size)?,
        };

        let rng = match (options.content(), options.strategy()) {
            (ContentKind::Binary, FillStrategy::Random) => Some(StdRng::from_os_rng()),
            _ => None,
        };

        Ok(Self {
            template,
            rng,
            chunk_size,
            target: options.target_bytes(),
            emitted: 0,
        })
    }

    /// Pulls the next chunk of the sequence.
    ///
    /// # Returns
    ///
    /// A slice of the chunk template holding the next `min(remaining,
    /// chunk_size)` bytes of the payload, or `None` once the target length
    /// has been reached. Only the final chunk of a run may be shorter than
    /// the chunk size; a zero-byte target yields no chunks at all.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_chunk(&mut self) -> Option<&[u8]> {
        if self.emitted >= self.target {
            return None;
        }

        let remaining = self.target - self.emitted;
        // min() bounds the value by chunk_size, so the cast is lossless.
        let take = remaining.min(self.chunk_size as u64) as usize;

        if let Some(rng) = self.rng.as_mut() {
            rng.fill_bytes(&mut self.template[..take]);
        }

        self.emitted += take as u64;
        Some(&self.template[..take])
    }

    /// Returns the number of bytes emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Returns the total number of bytes this source produces.
    pub fn target_bytes(&self) -> u64 {
        self.target
    }

    /// Returns the number of bytes not yet emitted.
    pub fn remaining(&self) -> u64 {
        self.target - self.emitted
    }
}

/// Allocates an empty template vector, reporting failure instead of aborting.
fn alloc_template(capacity: usize) -> Result<Vec<u8>> {
    let mut template = Vec::new();
    template
        .try_reserve_exact(capacity)
        .map_err(|_| Error::AllocationFailed { capacity })?;
    Ok(template)
}

/// Builds the text chunk template by tiling the base pattern.
fn text_template(pattern: Option<&str>, chunk_size: usize) -> Result<Vec<u8>> {
    let base = match pattern {
        Some(pattern) if pattern.is_empty() => return Err(Error::EmptyPattern),
        Some(pattern) => pattern.as_bytes(),
        None => DEFAULT_TEXT_PATTERN.as_bytes(),
    };

    let mut template = alloc_template(chunk_size)?;
    template.extend(base.iter().copied().cycle().take(chunk_size));
    Ok(template)
}

/// Builds the binary chunk template for the selected fill strategy.
fn binary_template(strategy: FillStrategy, chunk_size: usize) -> Result<Vec<u8>> {
    let mut template = alloc_template(chunk_size)?;
    match strategy {
        FillStrategy::Sequential => {
            template.extend((0..chunk_size).map(|i| (i % RAMP_PERIOD) as u8));
        }
        FillStrategy::Zeros => template.resize(chunk_size, 0x00),
        FillStrategy::Ones => template.resize(chunk_size, 0xFF),
        // Filled with fresh bytes on every pull.
        FillStrategy::Random => template.resize(chunk_size, 0x00),
    }
    Ok(template)
}
