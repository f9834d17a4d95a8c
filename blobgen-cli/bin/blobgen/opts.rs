//! Command line argument parsing for the blobgen utility

use clap::Parser;

use blobgen_cli::CliConfig;
use blobgen_core::{parse_size, ContentKind, Error, FillStrategy};

/// Synthetic payload generator
///
/// blobgen produces files of an exact size filled with deterministic or
/// pseudo-random content, suitable for observing how a storage backend
/// replicates them.
#[derive(Parser, Debug)]
#[command(
    name = "blobgen",
    version = "0.1.0",
    about = "Generate synthetic payload files of an exact size",
    long_about = "blobgen streams deterministic or pseudo-random content of an exact byte \
                 length into a file or standard output. Generated payloads carry no header \
                 or metadata, so their stored size equals the requested size exactly."
)]
pub struct BlobgenOpts {
    /// Output file (writes to standard output when omitted or "-")
    #[arg(value_name = "FILE")]
    pub output: Option<String>,

    /// Payload size, e.g. 500, 64KB or 1.5GB (binary multiples)
    #[arg(short = 's', long = "size", value_name = "SIZE")]
    pub size: String,

    /// Content kind to generate
    #[arg(
        short = 'c',
        long = "content",
        value_name = "KIND",
        default_value = "text"
    )]
    pub content: String,

    /// Custom base pattern repeated to fill a text payload
    #[arg(short = 'p', long = "pattern", value_name = "TEXT")]
    pub pattern: Option<String>,

    /// Fill strategy for binary payloads
    #[arg(
        short = 'b',
        long = "binary-pattern",
        value_name = "STRATEGY",
        default_value = "sequential"
    )]
    pub binary_pattern: String,

    /// Chunk size used while streaming the payload
    #[arg(
        short = 'C',
        long = "chunk-size",
        value_name = "SIZE",
        default_value = "64KB"
    )]
    pub chunk_size: String,

    /// Force overwrite of output file
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Write to a temporary file and rename it into place on success
    #[arg(long = "atomic", requires = "output")]
    pub atomic: bool,

    /// Verbose mode (progress and summary on stderr)
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (suppress warnings). Use twice to suppress errors too.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl BlobgenOpts {
    /// Validates the raw options and converts them into a [`CliConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error when the size or chunk-size expression is malformed
    /// or negative, or when the content kind or fill strategy selector is
    /// not recognized.
    pub fn config(&self) -> Result<CliConfig, Error> {
        let target_bytes = parse_size(&self.size)?;
        let chunk_bytes = parse_size(&self.chunk_size)?;
        if chunk_bytes == 0 {
            return Err(Error::InvalidChunkSize);
        }
        let chunk_size = usize::try_from(chunk_bytes).map_err(|_| Error::InvalidSizeFormat {
            input: self.chunk_size.clone(),
        })?;

        let content: ContentKind = self.content.parse()?;
        let strategy: FillStrategy = self.binary_pattern.parse()?;

        // Reject an unusable pattern before any output file is created.
        if self.pattern.as_deref() == Some("") {
            return Err(Error::EmptyPattern);
        }

        Ok(CliConfig {
            content,
            strategy,
            target_bytes,
            chunk_size,
            pattern: self.pattern.clone(),
            force: self.force,
            atomic: self.atomic,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}
