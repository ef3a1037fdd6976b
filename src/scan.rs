//! Filesystem walk (spec §4.13, ambient/supplemental): feeds a
//! [`StartupConfig`]-filtered tree walk into the file index and,
//! optionally, the symbol index. Built on the `ignore` crate, already a
//! real dependency of the teacher (`examples/alexcu2718-fdf`'s own
//! traversal is a hand-rolled unsafe `getdents64` layer that exists to
//! implement exactly the traversal spec §1 calls an external
//! collaborator — this crate needs *a* traversal to be runnable, not
//! *that* one).

use ignore::WalkBuilder;

use crate::config::StartupConfig;
use crate::fileindex::FileIndex;
use crate::symbolindex::SymbolIndex;
use crate::tokenizer::{supported_extension, CTokenizer, Tokenizer};

/// Walks `config.root`, applying the ignore/include filter of spec §6,
/// recording every regular file in `files` unless `config.files` is
/// false, and if `config.symbols` is set and the extension is
/// supported, tokenising it into `symbols`. Symbol occurrences need a
/// file handle to point at; with `--no-files` and `--symbols` both set,
/// a file is still registered in `files` the first time one of its
/// symbols is indexed, since that's the only source of handles — the
/// flag suppresses unconditional file-name indexing, not handle
/// creation on demand. Per-path errors are logged and skipped (spec
/// §7) — the walk never aborts on one bad entry.
pub fn walk(config: &StartupConfig, files: &mut FileIndex, symbols: &mut SymbolIndex) {
    let tokenizer = CTokenizer;
    let walker = WalkBuilder::new(&config.root).hidden(false).build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("scan error: {err}");
                continue;
            }
        };

        let path = entry.path();
        if !config.should_scan(path) {
            continue;
        }
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if !config.symbols && !config.files {
            continue;
        }

        let handle = if config.files { Some(files.insert(path).handle) } else { None };

        if !config.symbols {
            continue;
        }
        let Some(ext) = path.extension().and_then(std::ffi::OsStr::to_str) else { continue };
        if !supported_extension(ext) {
            continue;
        }
        let handle = match handle {
            Some(handle) => handle,
            None => files.insert(path).handle,
        };
        match std::fs::read_to_string(path) {
            Ok(text) => symbols.index_source(&text, handle, &tokenizer),
            Err(err) => log::warn!("could not read {}: {err}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn walk_indexes_files_and_tokenizes_supported_sources() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("main.c"), "int total = compute(1);\n").unwrap();
        fs::write(dir.path().join("readme.txt"), "not source\n").unwrap();

        let config = StartupConfig::new(
            dir.path().to_path_buf(),
            Vec::new(),
            Vec::new(),
            true,
            true,
            false,
            false,
        );
        let mut files = FileIndex::new();
        let mut symbols = SymbolIndex::new();
        walk(&config, &mut files, &mut symbols);

        assert_eq!(files.search("main.c").objects(), 1);
        assert_eq!(files.search("readme.txt").objects(), 1);
        assert!(symbols.search("compute").is_some());
        assert!(symbols.search("int").is_none());
    }

    #[test]
    fn walk_respects_ignore_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vendor = dir.path().join("vendor");
        fs::create_dir(&vendor).unwrap();
        fs::write(vendor.join("skip.c"), "int x;\n").unwrap();

        let config = StartupConfig::new(
            dir.path().to_path_buf(),
            vec![vendor.clone()],
            Vec::new(),
            true,
            false,
            false,
            false,
        );
        let mut files = FileIndex::new();
        let mut symbols = SymbolIndex::new();
        walk(&config, &mut files, &mut symbols);

        assert_eq!(files.search("skip.c").objects(), 0);
    }

    #[test]
    fn no_files_with_symbols_still_registers_a_handle_for_symbol_refs() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("main.c"), "int total = compute(1);\n").unwrap();

        let config =
            StartupConfig::new(dir.path().to_path_buf(), Vec::new(), Vec::new(), false, true, false, false);
        let mut files = FileIndex::new();
        let mut symbols = SymbolIndex::new();
        walk(&config, &mut files, &mut symbols);

        let sym = symbols.search("compute").expect("present");
        assert_eq!(files.file(sym.refs[0].file).unwrap().name(), "main.c");
    }

    #[test]
    fn no_files_without_symbols_indexes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("main.c"), "int total = compute(1);\n").unwrap();

        let config =
            StartupConfig::new(dir.path().to_path_buf(), Vec::new(), Vec::new(), false, false, false, false);
        let mut files = FileIndex::new();
        let mut symbols = SymbolIndex::new();
        walk(&config, &mut files, &mut symbols);

        assert_eq!(files.files_count(), 0);
        assert!(symbols.is_empty());
    }
}
