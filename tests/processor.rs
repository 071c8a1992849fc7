#[path = "common/mod.rs"]
mod common;

use munhash::{hash_record, process_region, KdfParams, Record, RegionGroup, RegionProgress, PEPPER};

fn synthetic_group(region: &str, n: usize) -> RegionGroup {
    let records = (0..n)
        .map(|i| Record::new(format!("{i:04}"), format!("{}", 1_000_000 + i), format!("Cidade {i:04}"), "", region))
        .collect();
    RegionGroup { region: region.to_string(), records }
}

/// Output follows the input (sorted) order even though hashing runs in parallel.
#[test]
fn output_preserves_group_order() {
    let group = synthetic_group("MG", 64);
    let params = KdfParams::new(5, 16);
    let hashed = process_region(&group, PEPPER, &params, 50, |_| {});

    assert_eq!(hashed.len(), 64);
    for (rec, h) in group.records.iter().zip(&hashed) {
        assert_eq!(&h.record, rec);
        assert_eq!(h.hash, hash_record(rec, PEPPER, &params).hash);
        assert_eq!(h.hash.len(), 32);
    }
}

/// Milestones fire once at each multiple of the cadence and once at the total.
#[test]
fn progress_fires_at_cadence_and_total() {
    let group = synthetic_group("BA", 120);
    let mut seen: Vec<RegionProgress> = Vec::new();
    process_region(&group, PEPPER, &KdfParams::new(2, 8), 50, |p| seen.push(p.clone()));

    let mut counts: Vec<usize> = seen.iter().map(|p| p.done).collect();
    counts.sort();
    assert_eq!(counts, vec![50, 100, 120]);
    assert!(seen.iter().all(|p| p.total == 120 && p.region == "BA"));
}

/// When the total is itself a multiple of the cadence the final milestone is not doubled.
#[test]
fn progress_total_on_cadence_fires_once() {
    let group = synthetic_group("PE", 100);
    let mut counts: Vec<usize> = Vec::new();
    process_region(&group, PEPPER, &KdfParams::new(2, 8), 50, |p| counts.push(p.done));
    counts.sort();
    assert_eq!(counts, vec![50, 100]);
}

#[test]
fn empty_group_yields_nothing() {
    let group = synthetic_group("RR", 0);
    let mut calls = 0usize;
    let hashed = process_region(&group, PEPPER, &KdfParams::new(2, 8), 50, |_| calls += 1);
    assert!(hashed.is_empty());
    assert_eq!(calls, 0);
}
