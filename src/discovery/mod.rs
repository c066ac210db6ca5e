//! Finding SARIF result files below a build directory.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::DiscoveryConfig;
use crate::error::Error;

mod sink;
pub mod sarif;

pub use sink::LogSink;

use self::sarif::SarifLog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFile {
    pub path: PathBuf,
    pub tool: Option<String>,
    pub result_count: usize,
    /// One line per result, only filled in verbose mode.
    pub details: Vec<String>,
}

impl ResultFile {
    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            tool: None,
            result_count: 0,
            details: Vec::new(),
        }
    }

    pub fn has_results(&self) -> bool {
        self.result_count > 0
    }
}

/// Discovered files, sorted by path.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub files: Vec<ResultFile>,
}

impl Discovery {
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|file| file.path.as_path())
    }
}

pub trait Discover {
    fn discover(&mut self, base_dir: &Path, verbose: bool) -> Result<Discovery, Error>;
}

/// Walks the filesystem and reads every matching file as SARIF.
pub struct FsDiscovery {
    extensions: Vec<String>,
    skip_dirs: Vec<String>,
    log: LogSink,
}

impl FsDiscovery {
    pub fn new(config: &DiscoveryConfig, log: LogSink) -> Self {
        Self {
            extensions: config.extensions.clone(),
            skip_dirs: config.skip_dirs.clone(),
            log,
        }
    }

    fn is_result_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    fn is_skipped_dir(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| self.skip_dirs.iter().any(|skip| skip == name))
            .unwrap_or(false)
    }

    fn walk(&self, base_dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::new();
        let mut to_visit = vec![base_dir.to_path_buf()];

        while let Some(dir) = to_visit.pop() {
            let entries = std::fs::read_dir(&dir).map_err(|source| Error::Discovery {
                path: dir.clone(),
                source,
            })?;

            for entry in entries {
                let entry = entry.map_err(|source| Error::Discovery {
                    path: dir.clone(),
                    source,
                })?;
                let path = entry.path();

                // symlinked directories are not followed, they may loop back
                let file_type = entry.file_type().map_err(|source| Error::ReadFile {
                    path: path.clone(),
                    source,
                })?;

                if file_type.is_dir() {
                    if !self.is_skipped_dir(&path) {
                        to_visit.push(path);
                    }
                    continue;
                }

                if self.is_result_file(&path) {
                    files.push(path);
                }
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Reads one collected file. A file that vanished since the walk (or a
    /// dangling symlink) and content that is not SARIF both yield a candidate
    /// with zero results; only other read errors are fatal.
    fn inspect(&mut self, path: PathBuf, verbose: bool) -> Result<ResultFile, Error> {
        let contents = match std::fs::read(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "result file vanished before it could be read");
                self.log
                    .line(format!("{}: missing ({err})", path.display()))?;

                return Ok(ResultFile::empty(path));
            }
            Err(source) => return Err(Error::ReadFile { path, source }),
        };

        let log = match serde_json::from_slice::<SarifLog>(&contents) {
            Ok(log) => log,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "not a readable SARIF log");
                self.log
                    .line(format!("{}: unreadable SARIF ({err})", path.display()))?;

                return Ok(ResultFile::empty(path));
            }
        };

        let tool = log.tool_name().map(str::to_string);
        let result_count = log.result_count();

        self.log.line(format!(
            "{}: {} results ({})",
            path.display(),
            result_count,
            tool.as_deref().unwrap_or("unknown tool")
        ))?;

        let details = if verbose {
            log.results().map(|result| result.detail_line()).collect()
        } else {
            Vec::new()
        };

        for detail in &details {
            self.log.line(format!("  {detail}"))?;
        }

        Ok(ResultFile {
            path,
            tool,
            result_count,
            details,
        })
    }
}

impl Discover for FsDiscovery {
    fn discover(&mut self, base_dir: &Path, verbose: bool) -> Result<Discovery, Error> {
        debug!(base_dir = %base_dir.display(), "searching for result files");

        let paths = self.walk(base_dir)?;

        // keyed by path so the order stays sorted regardless of walk order
        let mut files = BTreeMap::new();

        for path in paths {
            let file = self.inspect(path, verbose)?;
            files.insert(file.path.clone(), file);
        }

        self.log.flush()?;

        debug!(count = files.len(), "result files found");

        Ok(Discovery {
            files: files.into_values().collect(),
        })
    }
}
