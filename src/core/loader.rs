//! Runs the requested entries, on a worker pool or one after the other.
//!
//! Either way the results come back in request order.

use log::debug;
use std::sync::Arc;
use std::thread;
use tokio::task::JoinHandle;

use crate::core::context::Context;
use crate::core::entries::{Entry, EntryRequest};
use crate::error::{GlanceError, Result};

/// Extra threads on top of the CPU count, since probes mostly wait on I/O
const EXTRA_WORKERS: usize = 4;

/// `min(jobs, cpus + 4)`, at least one
pub fn pool_size(jobs: usize) -> usize {
    let cpus = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    jobs.min(cpus + EXTRA_WORKERS).max(1)
}

/// Apply `worker` to every item and return the results in input order.
///
/// In parallel mode every item runs on the blocking pool of a dedicated
/// runtime. The first error, in input order, is returned.
pub fn run_ordered<T, R, F>(items: Vec<T>, parallel: bool, worker: F) -> Result<Vec<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Result<R> + Send + Sync + 'static,
{
    if !parallel || items.len() <= 1 {
        return items.into_iter().map(worker).collect();
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .max_blocking_threads(pool_size(items.len()))
        .thread_name("sysglance-loader")
        .enable_all()
        .build()
        .map_err(|e| GlanceError::runtime(format!("Failed to start the loader runtime: {}", e)))?;

    let worker = Arc::new(worker);

    let results = runtime.block_on(async move {
        let handles: Vec<JoinHandle<Result<R>>> = items
            .into_iter()
            .map(|item| {
                let worker = Arc::clone(&worker);
                tokio::task::spawn_blocking(move || worker(item))
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = handle
                .await
                .map_err(|e| GlanceError::runtime(format!("Entry worker failed: {}", e)))?;
            results.push(result?);
        }
        Ok::<_, GlanceError>(results)
    });

    // Do not wait on probes still running after a fatal error.
    runtime.shutdown_background();

    results
}

/// Instantiate every requested entry against the shared context
pub fn load_entries(
    requests: Vec<EntryRequest>,
    ctx: Arc<Context>,
    parallel: bool,
) -> Result<Vec<Box<dyn Entry>>> {
    debug!(
        "Loading {} entries ({})",
        requests.len(),
        if parallel { "parallel" } else { "sequential" }
    );

    run_ordered(requests, parallel, move |request| {
        debug!("Running `{}` entry", request.kind.name());
        request.instantiate(&ctx)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pool_size_bounds() {
        assert_eq!(pool_size(0), 1);
        assert_eq!(pool_size(1), 1);
        assert!(pool_size(1000) <= 1000);
        assert!(pool_size(1000) >= 1 + EXTRA_WORKERS);
    }

    #[test]
    fn test_parallel_keeps_order() {
        // Later items finish first.
        let items: Vec<u64> = (0..8).collect();
        let results = run_ordered(items, true, |i| {
            thread::sleep(Duration::from_millis((8 - i) * 10));
            Ok(i * 10)
        })
        .unwrap();

        assert_eq!(results, vec![0, 10, 20, 30, 40, 50, 60, 70]);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let items: Vec<String> = ["a", "bb", "ccc", "dddd"].iter().map(|s| s.to_string()).collect();
        let worker = |s: String| Ok(s.len());

        let parallel = run_ordered(items.clone(), true, worker).unwrap();
        let sequential = run_ordered(items, false, worker).unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_first_error_is_returned() {
        let result = run_ordered(vec![1, 2, 3], true, |i| {
            if i >= 2 {
                Err(GlanceError::sys_info(format!("failed on {}", i)))
            } else {
                Ok(i)
            }
        });

        match result {
            Err(GlanceError::SysInfo(message)) => assert_eq!(message, "failed on 2"),
            other => panic!("unexpected result: {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_empty_input() {
        let results: Vec<u8> = run_ordered(Vec::<u8>::new(), true, Ok).unwrap();
        assert!(results.is_empty());
    }
}
