// Static partitioning of the sentence search across worker threads.
//
// Shard i of n runs the same top-level search with step = n, offset = i:
// it owns every n-th surviving top-level candidate starting at the i-th,
// so no candidate is explored twice and none is skipped. Shards share the
// read-only catalog and hooks; each owns a private clone of the initial
// pool, so the search itself needs no locking anywhere.

use anagram_core::pool::LetterPool;

use crate::catalog::PhraseCatalog;
use crate::sentence::{BuildHooks, BuildOptions, build_sentences};

/// Error type for partitioned search failures.
#[derive(Debug, thiserror::Error)]
pub enum ShardError {
    /// Zero shards were requested.
    #[error("invalid shard count: {0}")]
    InvalidShardCount(usize),

    /// A worker thread could not be spawned. No further shards are
    /// launched after this; the ones already running are joined first.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// A worker thread panicked.
    #[error("worker thread for shard {0} panicked")]
    ShardPanic(usize),
}

/// Run the sentence search split across `shard_count` worker threads.
///
/// A count of 1 runs [`build_sentences`] on the calling thread with no
/// thread overhead and is otherwise identical. For larger counts each
/// shard searches its own slice of the top level concurrently; the caller's
/// `step` and `offset` are replaced by the shard assignment. Emissions
/// from different shards may interleave arbitrarily at the sink, while
/// each shard individually emits in its documented depth-first order.
///
/// Every spawned shard is joined before this returns, including on the
/// error paths: cancellation is advisory and workers are never killed.
#[cfg(feature = "threads")]
pub fn build_sharded(
    pool: &LetterPool,
    catalog: &PhraseCatalog,
    options: &BuildOptions,
    hooks: &BuildHooks<'_>,
    shard_count: usize,
) -> Result<(), ShardError> {
    match shard_count {
        0 => Err(ShardError::InvalidShardCount(0)),
        1 => {
            build_sentences(pool, catalog, options, hooks);
            Ok(())
        }
        n => run_shards(pool, catalog, options, hooks, n),
    }
}

#[cfg(feature = "threads")]
fn run_shards(
    pool: &LetterPool,
    catalog: &PhraseCatalog,
    options: &BuildOptions,
    hooks: &BuildHooks<'_>,
    shard_count: usize,
) -> Result<(), ShardError> {
    let mut result = Ok(());

    std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(shard_count);

        for i in 0..shard_count {
            let shard_options = BuildOptions {
                step: shard_count,
                offset: i,
                ..options.clone()
            };
            let spawned = std::thread::Builder::new()
                .name(format!("anagram-shard-{i}"))
                .spawn_scoped(scope, move || {
                    // Each worker clones its own pool inside build_sentences;
                    // only the catalog and hooks are shared.
                    build_sentences(pool, catalog, &shard_options, hooks);
                });
            match spawned {
                Ok(handle) => handles.push((i, handle)),
                Err(err) => {
                    // Stop launching further shards. The ones already
                    // running cannot be stopped safely; they are joined
                    // below and whatever they emitted stands.
                    result = Err(ShardError::Spawn(err));
                    break;
                }
            }
        }

        for (i, handle) in handles {
            if handle.join().is_err() && result.is_ok() {
                result = Err(ShardError::ShardPanic(i));
            }
        }
    });

    result
}

/// Fallback when the `threads` feature is disabled: any shard count runs
/// as a single shard, with a warning once actual partitioning was asked
/// for.
#[cfg(not(feature = "threads"))]
pub fn build_sharded(
    pool: &LetterPool,
    catalog: &PhraseCatalog,
    options: &BuildOptions,
    hooks: &BuildHooks<'_>,
    shard_count: usize,
) -> Result<(), ShardError> {
    if shard_count == 0 {
        return Err(ShardError::InvalidShardCount(0));
    }
    if shard_count > 1 {
        eprintln!("warning: thread support unavailable, searching in a single shard");
    }
    build_sentences(pool, catalog, options, hooks);
    Ok(())
}
