//! The flow both verbs share: validate, discover, then either run the guarded
//! deletion or list the selected files and hand them to the image tool.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use miette::{Context as _, IntoDiagnostic as _};
use tracing::{debug, info};

use super::{ScanArgs, display_path, validate_base_dir};
use crate::config::RootConfig;
use crate::deletion::{Authorization, CandidateSet, Decision, GuardedDeletion, InputFlush};
use crate::discovery::{Discover, FsDiscovery, LogSink, ResultFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Only files holding at least one result.
    WithResults,
    All,
}

impl Selection {
    fn includes(self, file: &ResultFile) -> bool {
        match self {
            Selection::WithResults => file.has_results(),
            Selection::All => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Verb {
    pub name: &'static str,
    pub selection: Selection,
    /// Print the selected paths, one per line.
    pub print_paths: bool,
}

pub fn run(verb: Verb, scan: &ScanArgs, config: &RootConfig, verbose: bool) -> miette::Result<()> {
    let base_dir = resolve_base_dir(scan, config)?;

    let log_path = scan
        .log_path
        .clone()
        .unwrap_or_else(|| config.discovery.log_path.clone());

    let mut discovery = FsDiscovery::new(&config.discovery, LogSink::file(&log_path)?);

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let flush = crate::deletion::platform_flush();

    execute(
        verb,
        scan,
        &base_dir,
        config,
        verbose,
        &mut discovery,
        stdin,
        stdout,
        flush.as_ref(),
    )
}

fn resolve_base_dir(scan: &ScanArgs, config: &RootConfig) -> miette::Result<PathBuf> {
    // the flag was already checked while parsing
    if let Some(base_dir) = &scan.base_dir {
        return Ok(base_dir.clone());
    }

    Ok(validate_base_dir(&config.discovery.base_dir)?)
}

#[allow(clippy::too_many_arguments)]
pub fn execute<R, W>(
    verb: Verb,
    scan: &ScanArgs,
    base_dir: &Path,
    config: &RootConfig,
    verbose: bool,
    discover: &mut dyn Discover,
    input: R,
    mut output: W,
    flush: &dyn InputFlush,
) -> miette::Result<()>
where
    R: BufRead,
    W: Write,
{
    let discovery = discover.discover(base_dir, verbose)?;

    if scan.wants_delete() {
        let candidates: CandidateSet = discovery.paths().map(Path::to_path_buf).collect();
        let authorization = Authorization::from_flags(scan.delete_yes);

        let decision = GuardedDeletion::new(input, &mut output, flush)
            .run(&candidates, authorization)
            .into_diagnostic()
            .context("running delete confirmation")?;

        if let Decision::Deleted(outcome) = decision {
            outcome.into_result()?;
        }

        return Ok(());
    }

    let selected: Vec<&ResultFile> = discovery
        .files
        .iter()
        .filter(|file| verb.selection.includes(file))
        .collect();

    for file in &selected {
        debug!(
            path = %file.path.display(),
            results = file.result_count,
            tool = file.tool.as_deref().unwrap_or("unknown"),
            "selected"
        );
    }

    if verb.print_paths {
        let cwd = std::env::current_dir().into_diagnostic()?;

        for file in &selected {
            writeln!(output, "{}", display_path(&file.path, &cwd).display()).into_diagnostic()?;
        }
    }

    if scan.gen_images {
        let paths: Vec<&Path> = selected.iter().map(|file| file.path.as_path()).collect();
        crate::spawn::visualize::generate_images(&config.images, &paths)?;
        return Ok(());
    }

    if !verb.print_paths {
        info!(
            verb = verb.name,
            found = discovery.files.len(),
            selected = selected.len(),
            "result files in {}",
            base_dir.display()
        );
    }

    Ok(())
}
