//! Fork-join helper for block-independent work.

use aes_core::{Block, BLOCK_SIZE};

/// Below this many blocks per worker the threads cost more than they save.
const MIN_BLOCKS_PER_WORKER: usize = 64;

/// Applies `f` to every 16-byte block of `data`, splitting the blocks into
/// contiguous runs across up to `workers` scoped threads.
///
/// `data.len()` must be a multiple of [`BLOCK_SIZE`].
pub(crate) fn for_each_block<F>(data: &mut [u8], workers: usize, f: F)
where
    F: Fn(&mut Block) + Sync,
{
    debug_assert_eq!(data.len() % BLOCK_SIZE, 0);
    let blocks = data.len() / BLOCK_SIZE;
    let workers = workers.min(blocks / MIN_BLOCKS_PER_WORKER).max(1);
    if workers == 1 {
        apply(data, &f);
        return;
    }

    let run = blocks.div_ceil(workers) * BLOCK_SIZE;
    std::thread::scope(|scope| {
        for chunk in data.chunks_mut(run) {
            let f = &f;
            scope.spawn(move || apply(chunk, f));
        }
    });
}

fn apply<F: Fn(&mut Block)>(data: &mut [u8], f: &F) {
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let block: &mut Block = chunk.try_into().expect("chunk length is sixteen");
        f(block);
    }
}
