use crate::ports::outbound::{CoordinateFormatter, CoordinateSink};
use crate::resolution::domain::Coordinate;
use crate::shared::error::RepominerError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// WriterSink adapter writing one formatted line per coordinate
///
/// Backed by stdout for piping, or by a file when `--output` is given.
pub struct WriterSink<W: Write> {
    writer: W,
    formatter: Box<dyn CoordinateFormatter>,
    destination: Option<PathBuf>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, formatter: Box<dyn CoordinateFormatter>) -> Self {
        Self {
            writer,
            formatter,
            destination: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_error(&self, e: io::Error) -> anyhow::Error {
        match &self.destination {
            Some(path) => RepominerError::FileWriteError {
                path: path.clone(),
                details: e.to_string(),
            }
            .into(),
            None => anyhow::anyhow!("Failed to write to stdout: {}", e),
        }
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout(formatter: Box<dyn CoordinateFormatter>) -> Self {
        Self::new(io::stdout(), formatter)
    }
}

impl WriterSink<BufWriter<File>> {
    /// Creates (or truncates) `output_path` after checking it is safe to write
    ///
    /// # Errors
    /// Returns `RepominerError::FileWriteError` if the parent directory is
    /// missing, the path is a symbolic link, or the file cannot be created
    pub fn create(output_path: &Path, formatter: Box<dyn CoordinateFormatter>) -> Result<Self> {
        let write_error = |details: String| RepominerError::FileWriteError {
            path: output_path.to_path_buf(),
            details,
        };

        if let Some(parent) = output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                ))
                .into());
            }
        }
        if output_path.exists() {
            validate_not_symlink(output_path, "write").map_err(|e| write_error(e.to_string()))?;
        }

        let file = File::create(output_path).map_err(|e| write_error(e.to_string()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            formatter,
            destination: Some(output_path.to_path_buf()),
        })
    }
}

impl<W: Write> CoordinateSink for WriterSink<W> {
    fn emit(&mut self, coordinate: &Coordinate) -> Result<()> {
        let line = self.formatter.format(coordinate)?;
        writeln!(self.writer, "{}", line).map_err(|e| self.write_error(e))
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.write_error(e))
    }
}
