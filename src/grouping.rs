//! Grouping and ordering of records by region (UF).
//!
//! Comparisons are ordinal after a per-character upper-case mapping, never locale-aware.

use crate::record::Record;
use ahash::AHashMap;
use std::cmp::Ordering;

/// Region code for extinct / non-territorial entries; never emitted.
pub const EXCLUDED_REGION: &str = "EX";

#[inline]
fn fold_char(c: char) -> char {
    let mut up = c.to_uppercase();
    match (up.next(), up.next()) {
        (Some(u), None) => u,
        _ => c, // multi-char expansions (e.g. 'ß') compare as themselves
    }
}

/// Ordinal, case-insensitive string comparison.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_char).cmp(b.chars().map(fold_char))
}

/// Case-insensitive equality consistent with `cmp_ignore_case`.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    cmp_ignore_case(a, b) == Ordering::Equal
}

/// Per-character simple upper-case mapping; never changes the character count.
pub fn upper_invariant(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

fn fold_key(s: &str) -> String {
    upper_invariant(s)
}

/// Records of a single region, in output order once sorted.
#[derive(Clone, Debug)]
pub struct RegionGroup {
    pub region: String,
    pub records: Vec<Record>,
}

impl RegionGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Region → records, keyed case-insensitively. The first spelling seen for a region is kept
/// as its display code.
#[derive(Default, Debug)]
pub struct GroupIndex {
    groups: AHashMap<String, RegionGroup>,
}

impl GroupIndex {
    /// Partition `records` by region, dropping every record whose region equals `excluded`.
    /// Insertion order within a region is the order of `records`.
    pub fn build<I>(records: I, excluded: &str) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut groups: AHashMap<String, RegionGroup> = AHashMap::new();
        for rec in records {
            if eq_ignore_case(&rec.region, excluded) {
                continue;
            }
            groups
                .entry(fold_key(&rec.region))
                .or_insert_with(|| RegionGroup { region: rec.region.clone(), records: Vec::new() })
                .records
                .push(rec);
        }
        Self { groups }
    }

    pub fn region_count(&self) -> usize {
        self.groups.len()
    }

    pub fn get(&self, region: &str) -> Option<&RegionGroup> {
        self.groups.get(&fold_key(region))
    }

    /// Consume the index into regions ascending by code, each region's records stably sorted
    /// by preferred name.
    pub fn into_sorted(self) -> Vec<RegionGroup> {
        let mut out: Vec<RegionGroup> = self.groups.into_iter().map(|(_, g)| g).collect();
        out.sort_by(|a, b| cmp_ignore_case(&a.region, &b.region));
        for g in &mut out {
            g.records
                .sort_by(|a, b| cmp_ignore_case(a.preferred_name(), b.preferred_name()));
        }
        out
    }
}

/// Build the index and return the sorted groups in one step.
pub fn group_and_sort(records: Vec<Record>, excluded: &str) -> Vec<RegionGroup> {
    GroupIndex::build(records, excluded).into_sorted()
}
