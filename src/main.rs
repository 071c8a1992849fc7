use anyhow::Result;
use indicatif::MultiProgress;
use munhash::{set_global_multiprogress, MunicipalHasher};
use std::path::PathBuf;
use std::sync::Arc;

// Heavy iteration count keeps every record CPU-bound.
const PBKDF2_ITERATIONS: u32 = 50_000;
const HASH_BYTES: usize = 32; // 256 bits
const CSV_URL: &str = "https://www.gov.br/receitafederal/dados/municipios.csv";
const OUT_DIR_NAME: &str = "mun_hash_por_uf";

fn main() -> Result<()> {
    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let hw = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(8);
    set_global_multiprogress(Arc::new(MultiProgress::new()));

    let summary = MunicipalHasher::new()
        .base_dir(&base_dir)
        .source_url(CSV_URL)
        .out_dir_name(OUT_DIR_NAME)
        .iterations(PBKDF2_ITERATIONS)
        .hash_bytes(HASH_BYTES)
        .parallelism(hw)
        .progress(true)
        .run()?;

    println!(
        "{} records hashed into {} UFs under {}",
        summary.records_written(),
        summary.regions.len(),
        summary.out_dir.display()
    );
    Ok(())
}
