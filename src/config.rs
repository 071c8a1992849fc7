use crate::fetch::DEFAULT_SOURCE_URL;
use crate::grouping::EXCLUDED_REGION;
use crate::kdf::KdfParams;
use crate::processor::DEFAULT_PROGRESS_EVERY;
use crate::salt::PEPPER;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_FILE: &str = "municipios.csv";
pub const DEFAULT_OUT_DIR: &str = "mun_hash_por_uf";

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct HashOptions {
    pub base_dir: PathBuf,
    pub source_url: String,
    pub source_file_name: String, // local copy, relative to base_dir
    pub out_dir_name: String,     // output root, relative to base_dir
    pub kdf: KdfParams,
    pub pepper: String,
    pub excluded_region: String,
    pub progress_every: usize,    // log a partial line every N hashed records
    pub parallelism: Option<usize>, // Some(N) runs on a dedicated N-thread pool
    pub progress: bool,           // show indicatif bars per region
    pub write_buffer_bytes: usize,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            source_file_name: DEFAULT_SOURCE_FILE.to_string(),
            out_dir_name: DEFAULT_OUT_DIR.to_string(),
            kdf: KdfParams::default(),
            pepper: PEPPER.to_string(),
            excluded_region: EXCLUDED_REGION.to_string(),
            progress_every: DEFAULT_PROGRESS_EVERY,
            parallelism: None,
            progress: false,
            write_buffer_bytes: 256 * 1024,
        }
    }
}

impl HashOptions {
    pub fn with_base_dir(mut self, base_dir: impl AsRef<Path>) -> Self {
        self.base_dir = base_dir.as_ref().to_path_buf();
        self
    }
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }
    pub fn with_source_file_name(mut self, name: impl Into<String>) -> Self {
        self.source_file_name = name.into();
        self
    }
    pub fn with_out_dir_name(mut self, name: impl Into<String>) -> Self {
        self.out_dir_name = name.into();
        self
    }
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.kdf.iterations = iterations;
        self
    }
    pub fn with_hash_bytes(mut self, bytes: usize) -> Self {
        self.kdf.output_len = bytes;
        self
    }
    pub fn with_pepper(mut self, pepper: impl Into<String>) -> Self {
        self.pepper = pepper.into();
        self
    }
    pub fn with_excluded_region(mut self, region: impl AsRef<str>) -> Self {
        self.excluded_region = region.as_ref().trim().to_uppercase();
        self
    }
    pub fn with_progress_every(mut self, n: usize) -> Self {
        self.progress_every = n;
        self
    }
    pub fn with_parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_io_write_buffer(mut self, bytes: usize) -> Self {
        self.write_buffer_bytes = bytes.max(8 * 1024);
        self
    }

    pub fn source_path(&self) -> PathBuf {
        self.base_dir.join(&self.source_file_name)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.base_dir.join(&self.out_dir_name)
    }

    /// Checked once before fetching or parsing anything.
    pub fn validate(&self) -> Result<()> {
        self.kdf.validate()?;
        if self.progress_every == 0 {
            bail!("progress_every must be at least 1");
        }
        if self.source_file_name.trim().is_empty() {
            bail!("source file name must not be empty");
        }
        if self.out_dir_name.trim().is_empty() {
            bail!("output directory name must not be empty");
        }
        Ok(())
    }
}
