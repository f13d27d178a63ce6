//! Parallel batch trips
//!
//! Independent documents are tripped on a `rayon` pool. Every worker reads
//! the same process-wide [`Schema`](geotrip_codec::Schema); nothing else is
//! shared, so one document's failure never affects another's.

use crate::{decode_slice, encode_to_writer, TripOptions};
use geotrip_codec::Schema;
use geotrip_format::{GeoJsonError, Result};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::debug;

/// Worker stack size, sized for documents at the nesting limit.
const WORKER_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Configuration for batch trips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Optional cap on worker thread count; `None` uses the available
    /// parallelism.
    pub max_threads: Option<usize>,
}

impl ParallelConfig {
    /// Worker count this configuration resolves to on this machine.
    pub fn thread_count(&self) -> usize {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        self.max_threads.map_or(cores, |cap| cap.clamp(1, cores.max(1)))
    }
}

/// Trip each input independently. The outer `Result` fails only if the
/// schema or thread pool cannot be built; per-document results are returned
/// in input order.
pub fn trip_batch<I>(
    inputs: &[I],
    options: &TripOptions,
    config: &ParallelConfig,
) -> Result<Vec<Result<Vec<u8>>>>
where
    I: AsRef<[u8]> + Sync,
{
    // Build before fanning out so workers never race on first use.
    Schema::shared()?;

    let thread_count = config.thread_count();
    let pool = ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .thread_name(|idx| format!("geotrip-trip-{}", idx))
        .stack_size(WORKER_STACK_SIZE)
        .build()
        .map_err(|e| GeoJsonError::Internal(format!("Failed to create thread pool: {}", e)))?;
    debug!(documents = inputs.len(), thread_count, "starting batch trip");

    let results = pool.install(|| {
        inputs
            .par_iter()
            .map(|input| {
                let document = decode_slice(input.as_ref(), options.decode)?;
                let mut out = Vec::new();
                encode_to_writer(&document, &mut out, options.layout)?;
                Ok(out)
            })
            .collect::<Vec<Result<Vec<u8>>>>()
    });
    Ok(results)
}
