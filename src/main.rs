//! Non-interactive demonstration binary: parses the CLI surface of
//! `artfind::cli`, scans a root into a file/symbol index, and either
//! prints index statistics or answers a single query, fanning the
//! search out over the query worker pool (spec §5). The real
//! interactive TUI loop is out of scope (spec §1); this binary exists
//! so the engine is runnable end to end.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use artfind::cli::Args;
use artfind::console::{AnsiListRenderer, ConsoleOutput};
use artfind::fileindex::{FileIndex, Matches};
use artfind::symbolindex::SymbolIndex;
use artfind::{scan, spawn_query_workers, QueryRequest};

fn main() -> ExitCode {
    let args = Args::parse();
    let (config, query) = args.into_parts();

    if config.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if !config.root.is_dir() {
        eprintln!("{} is not a directory", config.root.display());
        return ExitCode::FAILURE;
    }

    let mut files = FileIndex::new();
    let mut symbols = SymbolIndex::new();
    scan::walk(&config, &mut files, &mut symbols);

    if config.stats_only {
        println!("files indexed: {}", files.files_count());
        println!("directories indexed: {}", files.paths_count());
        println!("symbols indexed: {}", symbols.len());
        return ExitCode::SUCCESS;
    }

    let Some(query) = query else {
        eprintln!("no query given; pass one or use --stats-only");
        return ExitCode::FAILURE;
    };

    let slice_count = rayon::current_num_threads().max(1);
    let index = Arc::new(files);
    let (req_tx, res_rx) = spawn_query_workers(Arc::clone(&index), slice_count);

    for slice_number in 0..slice_count {
        let request = QueryRequest { query: query.clone(), slice_count, slice_number };
        if req_tx.send(request).is_err() {
            break;
        }
    }
    drop(req_tx);

    let mut merged = Matches::new(artfind::fileindex::DEFAULT_LIMIT);
    for _ in 0..slice_count {
        let Ok(partial) = res_rx.recv() else { break };
        merged.merge(partial);
    }

    let mut renderer = AnsiListRenderer::new();
    renderer.render(&index, merged.data());
    println!("{} match(es) found ({} checked)", merged.len(), merged.objects());

    ExitCode::SUCCESS
}
