//! Parallel decomposition of the enumeration tree.
//!
//! The tree splits cleanly at a threshold depth `T`: the subtrees hanging
//! below distinct valid figures of size `T` are pairwise disjoint. The
//! calling thread sweeps the tree up to `T` with the stepwise driver,
//! snapshots the generator (a plain copy) every time it sits on a size-`T`
//! figure, and fans the snapshots out to a rayon pool. Each worker resumes
//! its snapshots to full depth, accumulating per-size counts locally, and
//! merges them into the shared totals once per block.
//!
//! Statistics are never collected here.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSliceMut;

use crate::generator::FigureGenerator;
use crate::grid::NMAX;

/// Callback reporting `(completed, total)` subtasks; invoked every 256
/// completions and once at the end.
pub type ProgressFn<'a> = &'a (dyn Fn(usize, usize) + Sync);

/// Count figures by size up to `nmax`, splitting the work at `threshold`.
///
/// Produces exactly the per-size counts of the sequential drivers. `nmax` is
/// clamped to `1..=NMAX` and `threshold` to `1..=nmax`; a threshold equal to
/// `nmax` degenerates to a sequential sweep.
pub fn enumerate_parallel<const A: u8, const B: u8>(
    nmax: u32,
    threshold: u32,
    progress: Option<ProgressFn<'_>>,
) -> Vec<u64> {
    let nmax = nmax.clamp(1, NMAX as u32);
    let threshold = threshold.clamp(1, nmax);
    let mut counts = vec![0u64; nmax as usize];

    let mut generator = FigureGenerator::<A, B, false>::new();
    if threshold == nmax {
        generator.generate(nmax, |level| counts[level as usize] += 1);
        return counts;
    }

    // Snapshot peaks at the recommended thresholds sit in the tens of
    // thousands; reserve once so the sweep never reallocates mid-run.
    let mut subtasks: Vec<FigureGenerator<A, B, false>> = Vec::with_capacity(1 << 15);
    loop {
        counts[generator.level() as usize] += 1;
        if generator.level() + 1 == threshold {
            subtasks.push(generator);
        }
        if !generator.next_step(threshold) {
            break;
        }
    }

    let total = subtasks.len();
    let completed = AtomicUsize::new(0);
    let merged = Mutex::new(&mut counts);
    let block = total
        .div_ceil(rayon::current_num_threads().max(1))
        .max(1);

    subtasks.par_chunks_mut(block).for_each(|block_tasks| {
        let mut local = vec![0u64; nmax as usize];
        for subtask in block_tasks.iter_mut() {
            // The snapshot itself was counted by the sweep above; count the
            // figures below it and stop as soon as the walk climbs back out
            // of the subtree.
            loop {
                if !subtask.next_step(nmax) {
                    break;
                }
                if subtask.level() < threshold {
                    break;
                }
                local[subtask.level() as usize] += 1;
            }
            if let Some(report) = progress {
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if done % 256 == 0 || done == total {
                    report(done, total);
                }
            }
        }
        let mut shared = merged.lock().unwrap();
        for (sum, part) in shared.iter_mut().zip(&local) {
            *sum += part;
        }
    });

    counts
}
