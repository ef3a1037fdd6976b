//! Startup configuration (spec §6, §4.11), generalising the teacher's
//! `SearchConfig` (`examples/alexcu2718-fdf/src/config.rs`) from a
//! single compiled regex matcher to the ignore/include path-list model
//! spec §6 calls for.

use std::path::{Path, PathBuf};

/// Parsed, validated startup configuration driving a scan + index + one
/// query (spec §6): a path is scanned unless it is ignore-prefixed and
/// not also include-prefixed, checked in either direction so a more
/// specific include can carve an exception out of a broader ignore.
#[derive(Clone, Debug)]
pub struct StartupConfig {
    pub root: PathBuf,
    pub ignore_list: Vec<PathBuf>,
    pub include_list: Vec<PathBuf>,
    pub files: bool,
    pub symbols: bool,
    pub stats_only: bool,
    pub verbose: bool,
}

impl StartupConfig {
    #[must_use]
    pub fn new(
        root: PathBuf,
        ignore_list: Vec<PathBuf>,
        include_list: Vec<PathBuf>,
        files: bool,
        symbols: bool,
        stats_only: bool,
        verbose: bool,
    ) -> Self {
        Self { root, ignore_list, include_list, files, symbols, stats_only, verbose }
    }

    /// Whether `path` should be scanned: not ignore-prefixed, or
    /// ignore-prefixed but also reachable from an include entry in
    /// either direction (spec §6) — `path` under an include entry, or
    /// `path` an ancestor of one (so a directory isn't skipped outright
    /// when a deeper include target still needs to be walked into).
    #[must_use]
    pub fn should_scan(&self, path: &Path) -> bool {
        let ignored = self.ignore_list.iter().any(|p| path.starts_with(p));
        if !ignored {
            return true;
        }
        self.include_list.iter().any(|p| path.starts_with(p) || p.starts_with(path))
    }
}
