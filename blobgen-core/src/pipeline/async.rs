//! Asynchronous payload generation pipeline.

use std::time::Instant;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::config::GenerationSummary;
use crate::error::Result;
use crate::options::GenerationOptions;
use crate::progress::{DiscardProgress, Progress, ProgressReport, ProgressTracker};

/// Generates a payload asynchronously into a writer using the provided
/// options.
///
/// # Parameters
///
/// * `writer` - Output destination implementing [`AsyncWrite`] + [`Unpin`]
/// * `options` - Generation configuration options [`GenerationOptions`]
///
/// # Returns
///
/// Returns a [`GenerationSummary`] with the byte count and elapsed time of
/// the run, or an error if generation fails.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The options fail validation (zero chunk size, empty text pattern)
/// - The chunk template cannot be allocated
/// - An async write or flush on the destination fails; the failure aborts
///   the run immediately and whatever prefix was already written stays in
///   place
pub async fn generate_async<W>(writer: W, options: &GenerationOptions) -> Result<GenerationSummary>
where
    W: AsyncWrite + Unpin,
{
    generate_with_progress_async(writer, options, &mut DiscardProgress).await
}

/// Generates a payload asynchronously, reporting progress to an observer.
///
/// The observer is notified whenever cumulative written bytes cross a new
/// 10%-of-target threshold, and once upon completion. Reporting is a side
/// effect only and never alters the generated byte sequence.
///
/// # Parameters
///
/// * `writer` - Output destination implementing [`AsyncWrite`] + [`Unpin`]
/// * `options` - Generation configuration options [`GenerationOptions`]
/// * `progress` - Observer receiving [`ProgressReport`] notifications
///
/// # Returns
///
/// Returns a [`GenerationSummary`] with the byte count and elapsed time of
/// the run, or an error if generation fails.
///
/// # Errors
///
/// Same failure modes as [`generate_async`].
pub async fn generate_with_progress_async<W>(
    mut writer: W,
    options: &GenerationOptions,
    progress: &mut dyn Progress,
) -> Result<GenerationSummary>
where
    W: AsyncWrite + Unpin,
{
    let mut source = options.build_source()?;
    let target = source.target_bytes();
    let mut tracker = ProgressTracker::new(target);
    let start = Instant::now();
    let mut written = 0u64;

    while let Some(chunk) = source.next_chunk() {
        writer.write_all(chunk).await?;
        written += chunk.len() as u64;

        if tracker.crossed(written) {
            progress.on_progress(&ProgressReport::new(written, target, start.elapsed()));
        }
    }
    writer.flush().await?;

    let elapsed = start.elapsed();
    // A zero-byte run crosses no threshold; still announce completion.
    if !tracker.completed() {
        progress.on_progress(&ProgressReport::new(written, target, elapsed));
    }

    Ok(GenerationSummary::new(written, elapsed))
}
