//! Per-region output: a `;`-separated CSV and a pretty JSON array with identical rows.

use crate::record::HashedRecord;
use crate::util::write_file_atomic;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CSV_HEADER: &str = "TOM;IBGE;NomeTOM;NomeIBGE;UF;Hash";

/// Region code as it appears in file names: path separators and characters that are invalid
/// in file names become `_`, so every output stays directly under the output directory.
pub fn region_file_stem(region: &str) -> String {
    region
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

pub fn csv_file_name(region: &str) -> String {
    format!("municipios_hash_{}.csv", region_file_stem(region))
}

pub fn json_file_name(region: &str) -> String {
    format!("municipios_hash_{}.json", region_file_stem(region))
}

/// Header line, then one line per record in the given order. UTF-8, no BOM.
pub fn write_csv<W: Write + ?Sized>(w: &mut W, records: &[HashedRecord]) -> Result<()> {
    w.write_all(CSV_HEADER.as_bytes())?;
    w.write_all(b"\n")?;
    for r in records {
        w.write_all(r.to_csv_line().as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Pretty-printed JSON array, same order as the CSV.
pub fn write_json<W: Write + ?Sized>(w: &mut W, records: &[HashedRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, records)?;
    Ok(())
}

/// Paths written for one region.
#[derive(Clone, Debug)]
pub struct RegionFiles {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
}

/// Write both files for `region` under `out_dir`, replacing any previous pair.
/// Each file is staged and promoted on success, so a failure never leaves a truncated file.
pub fn emit_region(
    out_dir: &Path,
    region: &str,
    records: &[HashedRecord],
    write_buf: usize,
) -> Result<RegionFiles> {
    let csv_path = out_dir.join(csv_file_name(region));
    let json_path = out_dir.join(json_file_name(region));

    write_file_atomic(&csv_path, write_buf, |w| write_csv(w, records))
        .with_context(|| format!("write {}", csv_path.display()))?;
    write_file_atomic(&json_path, write_buf, |w| write_json(w, records))
        .with_context(|| format!("write {}", json_path.display()))?;

    Ok(RegionFiles { csv_path, json_path })
}
