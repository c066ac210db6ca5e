//! Guarded batch deletion of discovered result files.
//!
//! Candidates are always listed in path order, deleted only after an explicit
//! `y` (or when pre-authorized), and every file is attempted even when an
//! earlier one fails.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{DeletionFailure, Error};

mod prompt;

pub use prompt::{Confirmation, InputFlush, NoFlush, confirm, platform_flush, prompt_text};

/// Sorted, deduplicated set of files to delete. Nothing is added once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet(BTreeSet<PathBuf>);

impl CandidateSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }
}

impl FromIterator<PathBuf> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Interactive,
    PreAuthorized,
}

impl Authorization {
    pub fn from_flags(delete_yes: bool) -> Self {
        if delete_yes {
            Authorization::PreAuthorized
        } else {
            Authorization::Interactive
        }
    }
}

#[derive(Debug, Default)]
pub struct DeletionOutcome {
    pub removed: Vec<PathBuf>,
    /// Files gone before we got to them; the end state matches the request.
    pub absent: Vec<PathBuf>,
    pub failures: Vec<DeletionFailure>,
}

impl DeletionOutcome {
    pub fn attempted(&self) -> usize {
        self.removed.len() + self.absent.len() + self.failures.len()
    }

    /// Turns collected failures into a single error carrying all of them.
    pub fn into_result(self) -> Result<usize, Error> {
        if self.failures.is_empty() {
            return Ok(self.removed.len());
        }

        Err(Error::Deletion {
            total: self.attempted(),
            failures: self.failures,
        })
    }
}

#[derive(Debug)]
pub enum Decision {
    NothingToDelete,
    Aborted,
    Deleted(DeletionOutcome),
}

/// Removes every candidate in order, never stopping at the first error.
pub fn delete_all(candidates: &CandidateSet) -> DeletionOutcome {
    let mut outcome = DeletionOutcome::default();

    for path in candidates.iter() {
        match std::fs::remove_file(path) {
            Ok(()) => {
                debug!(path = %path.display(), "deleted");
                outcome.removed.push(path.to_path_buf());
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "already absent");
                outcome.absent.push(path.to_path_buf());
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "failed to delete");
                outcome.failures.push(DeletionFailure {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    outcome
}

/// Drives listing, confirmation and deletion against the given streams.
pub struct GuardedDeletion<'a, R, W> {
    input: R,
    output: W,
    flush: &'a dyn InputFlush,
}

impl<'a, R, W> GuardedDeletion<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, flush: &'a dyn InputFlush) -> Self {
        Self {
            input,
            output,
            flush,
        }
    }

    pub fn run(
        &mut self,
        candidates: &CandidateSet,
        authorization: Authorization,
    ) -> io::Result<Decision> {
        if candidates.is_empty() {
            writeln!(self.output, "No result files found to delete")?;
            return Ok(Decision::NothingToDelete);
        }

        for path in candidates.iter() {
            writeln!(self.output, "- {}", path.display())?;
        }

        if authorization == Authorization::Interactive {
            let decision = confirm(
                &mut self.input,
                &mut self.output,
                self.flush,
                candidates.len(),
            )?;

            if decision != Confirmation::Confirmed {
                writeln!(self.output, "Aborted")?;
                return Ok(Decision::Aborted);
            }
        }

        let outcome = delete_all(candidates);

        writeln!(self.output, "Deleted {} files", outcome.removed.len())?;

        Ok(Decision::Deleted(outcome))
    }
}
