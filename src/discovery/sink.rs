use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Plain-text file that discovery writes its per-file diagnostics to.
pub struct LogSink {
    path: PathBuf,
    out: Box<dyn Write>,
}

impl LogSink {
    pub fn file(path: &Path) -> Result<Self, Error> {
        let file = std::fs::File::create(path).map_err(|source| Error::LogSink {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            out: Box::new(io::BufWriter::new(file)),
        })
    }

    /// Sink over any writer; `name` only shows up in error messages.
    pub fn writer(name: impl Into<PathBuf>, out: impl Write + 'static) -> Self {
        Self {
            path: name.into(),
            out: Box::new(out),
        }
    }

    pub fn line(&mut self, line: impl AsRef<str>) -> Result<(), Error> {
        writeln!(self.out, "{}", line.as_ref()).map_err(|source| self.error(source))
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.out.flush().map_err(|source| self.error(source))
    }

    fn error(&self, source: io::Error) -> Error {
        Error::LogSink {
            path: self.path.clone(),
            source,
        }
    }
}
