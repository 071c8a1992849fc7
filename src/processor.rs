//! Per-region parallel hashing.
//!
//! Records of one region are hashed across the rayon pool into an order-preserving buffer:
//! the result vector follows the region's sorted order regardless of completion order. A shared
//! atomic counter drives progress milestones.

use crate::grouping::RegionGroup;
use crate::kdf::{derive_hash_hex, KdfParams};
use crate::progress::ProgressScope;
use crate::record::{HashedRecord, Record};
use crate::salt::build_salt;
use parking_lot::Mutex;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Default cadence of progress observations, in records.
pub const DEFAULT_PROGRESS_EVERY: usize = 50;

/// One progress observation for a region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionProgress {
    pub region: String,
    pub done: usize,
    pub total: usize,
    pub elapsed: Duration,
}

/// Salt + derive for a single record.
pub fn hash_record(record: &Record, pepper: &str, params: &KdfParams) -> HashedRecord {
    let salt = build_salt(&record.code_b, pepper);
    let hash = derive_hash_hex(&record.canonical_string(), &salt, params);
    HashedRecord::new(record.clone(), hash)
}

#[inline]
fn is_milestone(done: usize, total: usize, every: usize) -> bool {
    done == total || (every > 0 && done % every == 0)
}

/// Hash every record of `group` in parallel.
///
/// `on_progress` fires once per milestone: each time the completed count reaches a multiple of
/// `progress_every`, and when it reaches the total. Calls are serialized, never concurrent, but
/// two close milestones may be delivered out of order.
pub fn process_region<F>(
    group: &RegionGroup,
    pepper: &str,
    params: &KdfParams,
    progress_every: usize,
    on_progress: F,
) -> Vec<HashedRecord>
where
    F: FnMut(&RegionProgress) + Send,
{
    process_region_with_bar(group, pepper, params, progress_every, &ProgressScope::disabled(), on_progress)
}

pub(crate) fn process_region_with_bar<F>(
    group: &RegionGroup,
    pepper: &str,
    params: &KdfParams,
    progress_every: usize,
    bar: &ProgressScope,
    on_progress: F,
) -> Vec<HashedRecord>
where
    F: FnMut(&RegionProgress) + Send,
{
    let started = Instant::now();
    let total = group.records.len();
    let done = AtomicUsize::new(0);
    let sink = Mutex::new(on_progress);

    group
        .records
        .par_iter()
        .map(|rec| {
            let hashed = hash_record(rec, pepper, params);
            bar.inc_items(1);
            let n = done.fetch_add(1, Ordering::AcqRel) + 1;
            if is_milestone(n, total, progress_every) {
                let obs = RegionProgress {
                    region: group.region.clone(),
                    done: n,
                    total,
                    elapsed: started.elapsed(),
                };
                let mut f = sink.lock();
                (*f)(&obs);
            }
            hashed
        })
        .collect()
}
