//! Log files of the viewer.
//!
//! Each run writes `latest.log` in the platform cache directory. The
//! previous run's file is archived under a timestamped name first, and only
//! the newest archives are kept.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use simplelog::{Config, LevelFilter, WriteLogger};

const CURRENT: &str = "latest.log";

/// Archived logs kept by default.
pub const DEFAULT_KEEP: usize = 25;

/// A directory holding the current log and its archives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDir {
    dir: PathBuf,
    keep: usize,
}

impl LogDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            keep: DEFAULT_KEEP,
        }
    }

    /// The viewer's cache directory, e.g. `~/.cache/tableview` on Linux.
    pub fn cache() -> Option<Self> {
        ProjectDirs::from("dev", "tableview", "tableview").map(|dirs| Self::new(dirs.cache_dir()))
    }

    pub fn keep(mut self, keep: usize) -> Self {
        self.keep = keep;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn current(&self) -> PathBuf {
        self.dir.join(CURRENT)
    }

    /// Move the current log aside. Returns the archive path, if there was a log.
    pub fn archive_current(&self) -> io::Result<Option<PathBuf>> {
        let current = self.current();
        if !current.exists() {
            return Ok(None);
        }
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let mut archive = self.dir.join(format!("{stamp}.log"));
        let mut n = 1;
        while archive.exists() {
            archive = self.dir.join(format!("{stamp}-{n}.log"));
            n += 1;
        }
        fs::rename(&current, &archive)?;
        Ok(Some(archive))
    }

    /// Archived logs, oldest first. Archive names sort by their timestamp.
    pub fn archives(&self) -> io::Result<Vec<PathBuf>> {
        let mut archives: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().is_some_and(|ext| ext == "log")
                    && path.file_name().is_some_and(|name| name != CURRENT)
            })
            .collect();
        archives.sort();
        Ok(archives)
    }

    /// Delete archives beyond the newest `keep`. Returns how many were removed.
    pub fn prune(&self) -> io::Result<usize> {
        let archives = self.archives()?;
        let excess = archives.len().saturating_sub(self.keep);
        for path in &archives[..excess] {
            fs::remove_file(path)?;
        }
        Ok(excess)
    }

    /// Archive and prune, then create a fresh current log.
    pub fn open(&self) -> io::Result<File> {
        fs::create_dir_all(&self.dir)?;
        self.archive_current()?;
        self.prune()?;
        File::create(self.current())
    }
}

/// Route the `log` facade into a fresh log file in `logs`.
pub fn init(logs: &LogDir, level: LevelFilter) -> io::Result<PathBuf> {
    let file = logs.open()?;
    // a logger installed earlier keeps receiving records
    let _ = WriteLogger::init(level, Config::default(), file);
    Ok(logs.current())
}
