use crate::args::Config;
use crate::error::{Result, SyncError};
use crate::metadata::{get_timestamps, set_timestamps, CreationSupport};
use crate::output::write_report;
use crate::utils::format_timestamp;
use log::{debug, error, trace, warn};
use std::io::{self, Write};
use std::path::Path;
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub failed: usize,
}

/// Walks a tree and rewrites every file's timestamps according to the
/// configured mode, writing one report line per file to `report`.
pub struct Syncer<W: Write> {
    config: Config,
    report: W,
    summary: Summary,
    creation_warned: bool,
}

impl<W: Write> Syncer<W> {
    pub fn new(config: Config, report: W) -> Self {
        Self {
            config,
            report,
            summary: Summary::default(),
            creation_warned: false,
        }
    }

    pub fn into_report(self) -> W {
        self.report
    }

    /// Processes the configured root directory.
    ///
    /// With `keep_going`, per-file failures are counted and the run ends
    /// with `SyncError::Incomplete` once the whole tree has been visited.
    pub fn run(&mut self) -> Result<Summary> {
        let root = self.config.root.clone();
        self.process(&root)?;
        self.report.flush()?;

        if self.summary.failed > 0 {
            return Err(SyncError::Incomplete {
                failed: self.summary.failed,
                total: self.summary.files,
            });
        }
        Ok(self.summary)
    }

    /// Depth first: the files of a directory, then each subdirectory in turn.
    pub fn process(&mut self, directory: &Path) -> Result<()> {
        if !directory.is_dir() {
            return Err(SyncError::DirectoryNotFound(directory.to_path_buf()));
        }

        let walker = WalkDir::new(directory)
            .follow_links(true)
            .sort_by(|a, b| {
                is_dir(a)
                    .cmp(&is_dir(b))
                    .then_with(|| a.file_name().cmp(b.file_name()))
            });

        let mut current_dir = directory.to_path_buf();
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_dir() => {
                    debug!("Entering {}", entry.path().display());
                    current_dir = entry.into_path();
                }
                Ok(entry) => self.apply(entry.path())?,
                Err(err) => self.walk_error(err, &current_dir)?,
            }
        }
        Ok(())
    }

    fn walk_error(&mut self, err: walkdir::Error, current_dir: &Path) -> Result<()> {
        if let Some(ancestor) = err.loop_ancestor() {
            warn!(
                "Skipping {}, it links back to {}",
                err.path().unwrap_or(current_dir).display(),
                ancestor.display()
            );
            return Ok(());
        }

        // An entry that could not be followed, such as a dangling link, is
        // reported through its metadata read like any other file.
        if let Some(path) = err.path().filter(|path| *path != current_dir) {
            return self.apply(path);
        }

        let path = current_dir.to_path_buf();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("directory walk failed"));
        Err(match source.kind() {
            io::ErrorKind::NotFound => SyncError::DirectoryNotFound(path),
            _ => SyncError::ListDirectory { path, source },
        })
    }

    fn apply(&mut self, file: &Path) -> Result<()> {
        self.summary.files += 1;
        match self.process_file(file) {
            Ok(_) => Ok(()),
            Err(err @ SyncError::Metadata { .. }) if self.config.keep_going => {
                error!("{}", err);
                self.summary.failed += 1;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Rewrites both timestamps of one file and returns the instant written.
    pub fn process_file(&mut self, path: &Path) -> Result<SystemTime> {
        let metadata_error = |source| SyncError::Metadata {
            path: path.to_path_buf(),
            source,
        };

        let record = get_timestamps(path).map_err(metadata_error)?;
        trace!(
            "{}: created {:?}, modified {}",
            path.display(),
            record.created.map(format_timestamp),
            format_timestamp(record.modified)
        );

        let chosen = self.config.mode.choose(&record);
        let support = set_timestamps(path, chosen).map_err(metadata_error)?;
        if support == CreationSupport::Unsupported && !self.creation_warned {
            warn!("Creation time cannot be set on this platform, only modification times change");
            self.creation_warned = true;
        }

        write_report(&mut self.report, chosen, path)?;
        Ok(chosen)
    }
}

/// Links are sorted by what they point to, so a linked directory still comes
/// after the files.
fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
