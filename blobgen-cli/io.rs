//! Output handling and path manipulation for the blobgen CLI.

use std::fs::File;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::{CliConfig, DEFAULT_BUFFER_SIZE};
use crate::error::{Error, Result};

/// Destination a generation run streams into.
#[derive(Debug)]
enum Target {
    /// Buffered standard output.
    Stdout(io::BufWriter<io::Stdout>),
    /// Buffered regular file created at the final path.
    File(io::BufWriter<File>),
    /// Buffered temporary file, renamed to the final path on success.
    Atomic {
        writer: io::BufWriter<NamedTempFile>,
        path: PathBuf,
    },
}

/// An opened output destination.
///
/// Writes stream into the destination; [`OutputSink::finish`] completes the
/// run. For atomic destinations the payload only becomes observable at the
/// final path once `finish` succeeds, so a partially generated file is never
/// visible to a concurrent reader (an uploader polling the directory, for
/// example).
#[derive(Debug)]
pub struct OutputSink {
    target: Target,
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.target {
            Target::Stdout(writer) => writer.write(buf),
            Target::File(writer) => writer.write(buf),
            Target::Atomic { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.target {
            Target::Stdout(writer) => writer.flush(),
            Target::File(writer) => writer.flush(),
            Target::Atomic { writer, .. } => writer.flush(),
        }
    }
}

impl OutputSink {
    /// Completes the output, moving a temporary file into place if needed.
    ///
    /// The generation pipeline flushes the sink before returning, so this
    /// only has work to do for atomic destinations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersistOutput`] if the temporary file cannot be
    /// renamed to its final path.
    pub fn finish(self) -> Result<()> {
        match self.target {
            Target::Stdout(_) | Target::File(_) => Ok(()),
            Target::Atomic { writer, path } => {
                let temp = writer.into_inner().map_err(|err| Error::PersistOutput {
                    path: path.clone(),
                    source: err.into_error(),
                })?;
                temp.persist(&path).map_err(|err| Error::PersistOutput {
                    path,
                    source: err.error,
                })?;
                Ok(())
            }
        }
    }
}

/// Opens an output destination for the given path, or stdout if absent.
///
/// # Parameters
///
/// * `path` - Optional path to the output file. If `None`, writes to stdout
/// * `config` - CLI configuration controlling force overwrite and atomic mode
///
/// # Returns
///
/// An [`OutputSink`] wrapping either:
///
/// - A buffered stdout writer when no path is given
/// - A buffered file writer for direct file output
/// - A buffered temporary-file writer in the destination directory when
///   `config.atomic` is set
///
/// # Errors
///
/// Returns an error in the following cases:
///
/// - The output file already exists and `config.force` is `false`
///   ([`Error::OutputExists`])
/// - The file or temporary file cannot be created ([`Error::CreateOutput`])
pub fn open_output(path: Option<&Path>, config: &CliConfig) -> Result<OutputSink> {
    let Some(path) = path else {
        return Ok(OutputSink {
            target: Target::Stdout(io::BufWriter::with_capacity(
                DEFAULT_BUFFER_SIZE,
                io::stdout(),
            )),
        });
    };

    // Check once up front; atomic mode replaces the file on finish.
    if path.exists() && !config.force {
        return Err(Error::OutputExists {
            path: path.to_path_buf(),
        });
    }

    if config.atomic {
        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let temp = NamedTempFile::new_in(dir).map_err(|source| Error::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(OutputSink {
            target: Target::Atomic {
                writer: io::BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, temp),
                path: path.to_path_buf(),
            },
        });
    }

    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(OutputSink {
        target: Target::File(io::BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file)),
    })
}
