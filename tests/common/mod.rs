#![allow(dead_code)]

use munhash::MunicipalHasher;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Hash of the first RO sample row at the production parameters (50 000 iterations, 32 bytes).
pub const ALTA_FLORESTA_HASH: &str =
    "0ca7af72266ec0076553b101c91c8d148ab481e5ea0fd759e34844f31ff37007";
/// Hash of the second RO sample row at the production parameters.
pub const ARIQUEMES_HASH: &str =
    "e028626c687862bf92020f5742733a64a26ef4e272f33ee77bc36602a147231f";

/// Small registry with a header and every edge case the parser and grouper must handle:
/// - RO rows out of name order (Ariquemes first)
/// - an `EX` row that must never be emitted
/// - a 3-field row and a blank line that must be dropped
/// - a lowercase `sp` region, quoted fields, a blank IBGE name, and a 6-field row
pub fn sample_lines() -> Vec<String> {
    vec![
        "TOM;IBGE;Nome TOM;Nome IBGE;UF".to_string(),
        "002;1100023;Ariquemes;Ariquemes;RO".to_string(),
        "001;1100015;Alta Floresta D'Oeste;Alta Floresta D'Oeste;RO".to_string(),
        "9999;0000000;Municipio Extinto;Municipio Extinto;EX".to_string(),
        "123;456;TooShort".to_string(),
        "   ".to_string(),
        "\"7107\";\"3550308\";\" SAO PAULO \";\"São Paulo\";\"sp\"".to_string(),
        "0643;1200013;ACRELANDIA;;AC".to_string(),
        "6251;3509502;CAMPINAS;Campinas;SP;extra-field".to_string(),
    ]
}

/// Write the registry into `<base>/municipios.csv` and return its path.
pub fn write_source(base: &Path, lines: &[String]) -> PathBuf {
    let path = base.join(munhash::DEFAULT_SOURCE_FILE);
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(&path, text).unwrap();
    path
}

/// Fresh temp base directory, kept alive for the process (tests write outputs under it).
pub fn temp_base() -> PathBuf {
    tempfile::tempdir().unwrap().into_path()
}

/// Cheap parameters so end-to-end tests stay fast; the source URL is unroutable on purpose.
pub fn fast_hasher(base: &Path) -> MunicipalHasher {
    MunicipalHasher::new()
        .base_dir(base)
        .source_url("http://127.0.0.1:9/unreachable.csv")
        .iterations(10)
        .hash_bytes(32)
        .parallelism(4)
        .progress(false)
}

/// Read a text file line-by-line into strings (skips empty lines).
pub fn read_lines(path: &Path) -> Vec<String> {
    let f = File::open(path).unwrap();
    let r = BufReader::new(f);
    r.lines().map(|l| l.unwrap()).filter(|s| !s.is_empty()).collect()
}

/// Parse a region JSON file into values.
pub fn read_json_array(path: &Path) -> Vec<serde_json::Value> {
    let f = File::open(path).unwrap();
    serde_json::from_reader(BufReader::new(f)).unwrap()
}

/// Sorted file names directly under `dir`.
pub fn list_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
