//! Shared configuration primitives and types for payload generation.

use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;

/// Kind of content a generated payload is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Human-readable text content.
    ///
    /// The payload is built from a textual base pattern (caller-supplied, or
    /// a built-in sentence set terminated by a line break) repeated until the
    /// target length is reached. Useful when generated files should be
    /// inspectable by eye after a replication round-trip.
    ///
    /// **Fill**: repeating text pattern
    /// **Deterministic**: yes
    Text,

    /// Opaque binary content.
    ///
    /// The payload is filled according to the selected [`FillStrategy`].
    /// Useful for exercising transports and storage backends with payloads
    /// that don't resemble text.
    ///
    /// **Fill**: selected by [`FillStrategy`]
    /// **Deterministic**: all strategies except [`FillStrategy::Random`]
    Binary,
}

impl FromStr for ContentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ContentKind::Text),
            "binary" => Ok(ContentKind::Binary),
            _ => Err(Error::InvalidContentKind {
                value: s.to_string(),
            }),
        }
    }
}

/// Fill strategy for binary payloads.
///
/// All strategies except [`FillStrategy::Random`] produce bit-for-bit
/// identical output across runs with identical parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillStrategy {
    /// Repeating 0..15 byte ramp (default).
    ///
    /// Byte `i` of the payload equals `i mod 16` for chunk sizes that are a
    /// multiple of the ramp period; the ramp makes truncated or reordered
    /// replicas easy to spot in a hex dump.
    #[default]
    Sequential,

    /// Every byte is `0x00`.
    Zeros,

    /// Every byte is `0xFF`.
    Ones,

    /// Every byte is drawn uniformly from `0..=255`.
    ///
    /// This is the only strategy whose output differs between runs. Random
    /// payloads are incompressible, which makes them the right choice when
    /// measuring raw transfer throughput.
    Random,
}

impl FromStr for FillStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(FillStrategy::Sequential),
            "zeros" => Ok(FillStrategy::Zeros),
            "ones" => Ok(FillStrategy::Ones),
            "random" => Ok(FillStrategy::Random),
            _ => Err(Error::InvalidFillStrategy {
                value: s.to_string(),
            }),
        }
    }
}

/// Statistical summary of a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Total number of bytes written to the sink.
    pub bytes_written: u64,

    /// Wall-clock time the run took, including the final flush.
    pub elapsed: Duration,
}

impl GenerationSummary {
    /// Creates a new summary with the specified byte count and elapsed time.
    ///
    /// This is used internally by the generation pipelines to create summary
    /// statistics after a run completes.
    pub(crate) const fn new(bytes_written: u64, elapsed: Duration) -> Self {
        Self {
            bytes_written,
            elapsed,
        }
    }

    /// Calculates the average throughput of the run in bytes per second.
    ///
    /// # Returns
    ///
    /// Bytes written divided by elapsed milliseconds, scaled to bytes per
    /// second. Returns `0.0` when the elapsed time is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn throughput_bytes_per_sec(&self) -> f64 {
        let millis = self.elapsed.as_secs_f64() * 1000.0;
        if millis == 0.0 {
            0.0
        } else {
            self.bytes_written as f64 / millis * 1000.0
        }
    }
}
