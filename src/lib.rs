//! `artfind`: an adaptive radix/suffix-tree-backed file and C/C++
//! symbol finder index (see `SPEC_FULL.md` for the full design). The
//! interactive terminal UI loop, OS clipboard IPC, and a tokeniser's
//! exact lexical grammar are external collaborators; this crate defines
//! their trait boundaries and ships the indexing/search engine plus a
//! minimal concrete implementation of each so the crate is runnable
//! end to end.

pub mod arena;
pub mod art;
pub mod ast;
pub mod clipboard;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod fileindex;
mod radix;
pub mod scan;
pub mod slotmap;
pub mod smallstring;
pub mod symbolindex;
pub mod tokenizer;

pub use art::Art;
pub use ast::AdaptiveSuffixTree;
pub use config::StartupConfig;
pub use error::ArtfindError;
pub use fileindex::{FileIndex, FileRecord, Match, Matches};
pub use symbolindex::{Symbol, SymbolIndex};

#[cfg(all(
    any(target_os = "linux", target_os = "macos", target_os = "android"),
    feature = "mimalloc"
))]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};

/// One query posted to the worker pool: a text query plus which
/// disjoint slice of the file table to search (spec §5).
pub struct QueryRequest {
    pub query: String,
    pub slice_count: usize,
    pub slice_number: usize,
}

/// Spawns `worker_count` workers, each holding a read-only view of
/// `index`, that pull [`QueryRequest`]s off the returned sender and
/// reply with a [`Matches`] per slice on the returned receiver (spec
/// §5's worker-pool/UI-thread boundary). Workers run on `rayon`'s
/// global pool, the same parallelism primitive the teacher uses for
/// directory recursion in `examples/alexcu2718-fdf`'s `Finder`.
///
/// This is ambient demonstration plumbing: `FileIndex::partial_search`
/// is safe and sufficient to call directly and single-threaded, as the
/// integration tests do.
#[must_use]
pub fn spawn_query_workers(index: Arc<FileIndex>, worker_count: usize) -> (Sender<QueryRequest>, Receiver<Matches>) {
    let (req_tx, req_rx) = unbounded::<QueryRequest>();
    let (res_tx, res_rx) = unbounded::<Matches>();

    for _ in 0..worker_count.max(1) {
        let req_rx = req_rx.clone();
        let res_tx = res_tx.clone();
        let index = Arc::clone(&index);
        rayon::spawn(move || {
            while let Ok(request) = req_rx.recv() {
                let matches = index.partial_search(&request.query, request.slice_count, request.slice_number);
                if res_tx.send(matches).is_err() {
                    break;
                }
            }
        });
    }

    (req_tx, res_rx)
}
