//! Concurrency helper: run a stage on a dedicated rayon pool when a thread count is configured.

use anyhow::{Context, Result};

/// Run `f` inside an `n`-thread pool, or on the global pool when `threads` is `None`/`Some(0)`.
pub fn run_in_pool<T, F>(threads: Option<usize>, f: F) -> Result<T>
where
    T: Send,
    F: FnOnce() -> Result<T> + Send,
{
    match threads {
        Some(n) if n > 0 => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .thread_name(|i| format!("munhash-{i}"))
                .build()
                .context("build rayon thread pool")?;
            pool.install(f)
        }
        _ => f(),
    }
}
