#[path = "common/mod.rs"]
mod common;

use common::*;
use munhash::{cmp_ignore_case, group_and_sort, parse_lines, GroupIndex, Record, EXCLUDED_REGION};
use std::cmp::Ordering;

#[test]
fn ordinal_ignore_case_comparison() {
    assert_eq!(cmp_ignore_case("abc", "ABC"), Ordering::Equal);
    assert_eq!(cmp_ignore_case("alta", "Ariquemes"), Ordering::Less);
    assert_eq!(cmp_ignore_case("Zé", "ze"), Ordering::Greater); // 'É' > 'E' ordinally
    assert_eq!(cmp_ignore_case("a", "ab"), Ordering::Less);
    // '_' (0x5F) sorts after upper-case letters once both sides are upper-cased.
    assert_eq!(cmp_ignore_case("a_", "aZ"), Ordering::Greater);
}

/// Regions ascending, `EX` dropped, names ascending within each region.
#[test]
fn groups_are_sorted_and_exclude_sentinel() {
    let groups = group_and_sort(parse_lines(&sample_lines()), EXCLUDED_REGION);
    let regions: Vec<&str> = groups.iter().map(|g| g.region.as_str()).collect();
    assert_eq!(regions, vec!["AC", "RO", "SP"]);

    let ro: Vec<&str> = groups[1].records.iter().map(|r| r.preferred_name()).collect();
    assert_eq!(ro, vec!["Alta Floresta D'Oeste", "Ariquemes"]);

    let sp: Vec<&str> = groups[2].records.iter().map(|r| r.preferred_name()).collect();
    assert_eq!(sp, vec!["Campinas", "São Paulo"]);
}

/// Every non-sentinel record lands in exactly one group, under its own region.
#[test]
fn grouping_is_complete() {
    let records = vec![
        Record::new("1", "10", "b", "", "mg"),
        Record::new("2", "20", "a", "", "MG"),
        Record::new("3", "30", "c", "", "ex"),
        Record::new("4", "40", "d", "", "Ex"),
        Record::new("5", "50", "e", "", "PR"),
    ];
    let index = GroupIndex::build(records.clone(), "EX");
    assert_eq!(index.region_count(), 2);
    assert_eq!(index.get("mg").unwrap().records.len(), 2);
    assert!(index.get("EX").is_none());

    let groups = index.into_sorted();
    for r in records.iter().filter(|r| !r.region.eq_ignore_ascii_case("EX")) {
        let hits: Vec<_> = groups
            .iter()
            .filter(|g| g.region.eq_ignore_ascii_case(&r.region) && g.records.contains(r))
            .collect();
        assert_eq!(hits.len(), 1, "record {:?} should be in exactly one group", r);
    }
    let total: usize = groups.iter().map(|g| g.len()).sum();
    assert_eq!(total, 3);
    assert_eq!(groups[0].region, "mg"); // first spelling seen is kept
}

/// Equal names (ignoring case) keep their insertion order.
#[test]
fn name_sort_is_stable() {
    let records = vec![
        Record::new("3", "1", "x", "santa rita", "PB"),
        Record::new("1", "2", "x", "SANTA RITA", "PB"),
        Record::new("2", "3", "x", "Santa Rita", "PB"),
        Record::new("0", "4", "x", "Areia", "PB"),
    ];
    let groups = group_and_sort(records, EXCLUDED_REGION);
    let codes: Vec<&str> = groups[0].records.iter().map(|r| r.code_a.as_str()).collect();
    assert_eq!(codes, vec!["0", "3", "1", "2"]);
}

#[test]
fn custom_sentinel_is_honored() {
    let records = vec![Record::new("1", "1", "a", "", "EX"), Record::new("2", "2", "b", "", "ZZ")];
    let groups = group_and_sort(records, "ZZ");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].region, "EX");
}
