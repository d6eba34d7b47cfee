//! Fan-out of per-employee work.
//!
//! Timeline rows are independent of each other, so large rosters can be
//! built on the rayon pool. Without the `parallel` feature everything runs
//! on the calling thread.

use crate::config::UtilizationConfig;

/// Applies `f` to every item, on the rayon pool when `config` asks for it.
///
/// The pool is used only with the `parallel` feature compiled in,
/// `config.parallel` set and at least `config.parallel_threshold` items.
/// Results come back in input order either way.
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &UtilizationConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            tracing::trace!(items = items.len(), "mapping on rayon pool");
            return items.par_iter().map(f).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = config;

    items.iter().map(f).collect()
}
