//! File index: path-ART + per-directory file lists + glob-style name
//! matching (spec §4.7), grounded on
//! `examples/original_source/files.hpp`'s `Files`/`Matches`/`match_name`/
//! `match_slow`.
//!
//! A directory's path string is stored exactly once (as an [`Art`] key)
//! and shared by every file record in it via a cheap `Arc<str>` clone,
//! standing in for the original's pointer-into-tree-leaf trick — Rust's
//! aliasing rules don't allow a safe self-reference into the tree's own
//! storage, so each file gets its own cheap handle onto the same
//! allocation instead.

use std::path::{Path, MAIN_SEPARATOR};
use std::sync::Arc;

use crate::art::Art;
use crate::slotmap::{Handle, SlotMap};
use crate::smallstring::SmallString;

/// Default result cap (spec §4.7, `Files::objects_max` in the original).
pub const DEFAULT_LIMIT: usize = 80;

/// A single indexed file: its name and the shared path of its directory.
pub struct FileRecord {
    name: SmallString,
    path: Arc<str>,
}

impl FileRecord {
    #[must_use]
    pub fn new(name: &str, path: Arc<str>) -> Self {
        Self { name: SmallString::new(name), path }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn full_path(&self) -> String {
        format!("{}{}", self.path, self.name)
    }
}

struct PathEntry {
    path: Arc<str>,
    files: Vec<Handle<FileRecord>>,
}

/// One matched file plus which byte ranges of its `path + name` the
/// query actually matched, for highlighting (spec §4.7).
pub struct Match {
    pub file: Handle<FileRecord>,
    pub highlight: Vec<bool>,
}

/// A bounded set of matches plus the true count of objects matched,
/// since results may be capped long before scanning finishes (spec
/// §4.6).
pub struct Matches {
    results: Vec<Match>,
    objects: usize,
    limit: usize,
}

impl Matches {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { results: Vec::with_capacity(limit.min(4096)), objects: 0, limit }
    }

    fn insert_matched(&mut self, file: Handle<FileRecord>, highlight: Vec<bool>) {
        if self.results.len() < self.limit {
            self.results.push(Match { file, highlight });
        }
        self.objects += 1;
    }

    fn count_only(&mut self) {
        self.objects += 1;
    }

    /// Folds `other`'s results (up to remaining capacity) and object
    /// count into `self` (spec §4.6 `merge`/`insert`).
    pub fn merge(&mut self, other: Matches) {
        if self.results.len() < self.limit {
            let take = (self.limit - self.results.len()).min(other.results.len());
            self.results.extend(other.results.into_iter().take(take));
        }
        self.objects += other.objects;
    }

    #[must_use]
    pub fn data(&self) -> &[Match] {
        &self.results
    }

    #[must_use]
    pub fn objects(&self) -> usize {
        self.objects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.results.len() >= self.limit
    }
}

fn split_parts(pattern: &str) -> Vec<&str> {
    pattern.split('*').filter(|p| !p.is_empty()).collect()
}

fn split_query(query: &str) -> (&str, &str) {
    match query.rfind(MAIN_SEPARATOR) {
        Some(pos) => (&query[..pos], &query[pos + 1..]),
        None => ("", query),
    }
}

/// Whether `name` contains every part of the glob, in order (spec §4.5,
/// §4.7 `match_name`): `*` behaves as "anything, including nothing",
/// between consecutive literal parts.
fn match_name(name: &str, parts: &[&str]) -> bool {
    let mut offset = 0;
    for part in parts {
        match name.get(offset..).and_then(|rest| rest.find(part)) {
            Some(rel) => offset += rel + part.len(),
            None => return false,
        }
    }
    true
}

/// Builds the highlight mask over `path + name`, mirroring `match_name`
/// but additionally recording which byte ranges matched (spec §4.7
/// `match_slow`).
fn match_slow(parts: &[&str], name: &str, path: &str, search_path: &str) -> Vec<bool> {
    let mut highlight = vec![false; path.len() + name.len()];
    let mut offset = 0;
    for part in parts {
        let Some(rel) = name.get(offset..).and_then(|rest| rest.find(part)) else {
            return highlight;
        };
        let abs = offset + rel;
        for bit in highlight.iter_mut().skip(path.len() + abs).take(part.len()) {
            *bit = true;
        }
        offset = abs + part.len();
    }
    for bit in highlight.iter_mut().take(search_path.len().min(path.len())) {
        *bit = true;
    }
    highlight
}

fn parent_path_string(path: &Path) -> String {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let mut s = parent.to_string_lossy().into_owned();
    if !s.is_empty() && !s.ends_with(MAIN_SEPARATOR) {
        s.push(MAIN_SEPARATOR);
    }
    s
}

/// Result of [`FileIndex::insert`]: whether the file was newly recorded
/// or already present (spec §4.7 `result`, duplicate insertion is not
/// an error — §7).
pub struct InsertResult {
    pub handle: Handle<FileRecord>,
    pub inserted: bool,
}

/// Holds every indexed file, its directory (deduplicated, path-ART
/// keyed), and answers glob-style name queries over them.
pub struct FileIndex {
    files: SlotMap<FileRecord>,
    file_paths: Art<PathEntry>,
}

impl Default for FileIndex {
    fn default() -> Self {
        Self { files: SlotMap::new(), file_paths: Art::new() }
    }
}

impl FileIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, file_name: &str, file_path: &str) -> Option<Handle<FileRecord>> {
        let entry = self.file_paths.search(file_path.as_bytes())?;
        entry.files.iter().copied().find(|&h| self.files.get(h).is_some_and(|f| f.name() == file_name))
    }

    /// Splits `path` into directory + file name and records it, unless
    /// that exact `(name, path)` pair is already present.
    pub fn insert(&mut self, path: &Path) -> InsertResult {
        let file_name = path.file_name().map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        let file_path = parent_path_string(path);

        if let Some(handle) = self.find(&file_name, &file_path) {
            return InsertResult { handle, inserted: false };
        }

        let path_rc = match self.file_paths.search(file_path.as_bytes()) {
            Some(entry) => entry.path.clone(),
            None => {
                let rc: Arc<str> = Arc::from(file_path.as_str());
                self.file_paths.insert(file_path.as_bytes(), PathEntry { path: rc.clone(), files: Vec::new() });
                rc
            }
        };

        let handle = self.files.insert(FileRecord::new(&file_name, path_rc));
        self.file_paths
            .search_mut(file_path.as_bytes())
            .expect("path entry just ensured to exist")
            .files
            .push(handle);

        InsertResult { handle, inserted: true }
    }

    /// Removes the file at `path`, dropping its directory entry too
    /// once it holds no more files (spec §4.7 `erase`). The underlying
    /// slot in the file table is not reclaimed — see [`crate::slotmap`].
    pub fn erase(&mut self, path: &Path) -> bool {
        let file_name = path.file_name().map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        let file_path = parent_path_string(path);

        let pos = {
            let Some(entry) = self.file_paths.search(file_path.as_bytes()) else { return false };
            entry.files.iter().position(|&h| self.files.get(h).is_some_and(|f| f.name() == file_name))
        };
        let Some(pos) = pos else { return false };

        let entry = self.file_paths.search_mut(file_path.as_bytes()).expect("found above");
        entry.files.remove(pos);
        if entry.files.is_empty() {
            self.file_paths.erase(file_path.as_bytes());
        }
        true
    }

    /// A single-threaded full search (spec §4.7 `search`).
    #[must_use]
    pub fn search(&self, query: &str) -> Matches {
        self.partial_search(query, 1, 0)
    }

    /// Searches only the `slice_number`-th of `slice_count` disjoint,
    /// contiguous slices of the file table (spec §4.7 `partial_search`,
    /// §5 concurrency model — callers fan this out over `rayon`).
    #[must_use]
    pub fn partial_search(&self, query: &str, slice_count: usize, slice_number: usize) -> Matches {
        assert!(slice_count > slice_number, "slice_number must be within slice_count");

        let mut matches = Matches::new(DEFAULT_LIMIT);
        let (search_path, search_name) = split_query(query);

        if !search_path.is_empty() && !self.file_paths.has_prefix(search_path.as_bytes()) {
            return matches;
        }

        let total = self.files.len();
        let chunk = (total / slice_count).max(1);
        let start = chunk * slice_number;
        if start >= total {
            return matches;
        }
        let end = if slice_number + 1 == slice_count { total } else { (start + chunk).min(total) };

        let parts = split_parts(search_name);

        for (handle, file) in self.files.iter().skip(start).take(end - start) {
            let on_path = search_path.is_empty() || file.path().starts_with(search_path);
            if !on_path || !match_name(file.name(), &parts) {
                continue;
            }
            if matches.is_full() {
                matches.count_only();
                continue;
            }
            let highlight = match_slow(&parts, file.name(), file.path(), search_path);
            matches.insert_matched(handle, highlight);
        }

        matches
    }

    #[must_use]
    pub fn file(&self, handle: Handle<FileRecord>) -> Option<&FileRecord> {
        self.files.get(handle)
    }

    #[must_use]
    pub fn files_count(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn paths_count(&self) -> usize {
        self.file_paths.len()
    }
}
