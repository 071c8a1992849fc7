use crate::concurrency::run_in_pool;
use crate::config::HashOptions;
use crate::emit::emit_region;
use crate::fetch::fetch_or_reuse;
use crate::grouping::{group_and_sort, RegionGroup};
use crate::parse::{parse_lines, split_lines};
use crate::processor::{process_region_with_bar, RegionProgress};
use crate::progress::{format_elapsed, ProgressScope};
use crate::util::{ensure_dir, init_tracing_once};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of one region: how many records were hashed and where they were written.
#[derive(Clone, Debug)]
pub struct RegionReport {
    pub region: String,
    pub records: usize,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    pub elapsed: Duration,
}

/// Outcome of a whole run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub records_read: usize, // valid records parsed, sentinel region included
    pub regions: Vec<RegionReport>,
    pub out_dir: PathBuf,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Region codes in the order they were generated.
    pub fn region_codes(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.region.as_str()).collect()
    }

    pub fn records_written(&self) -> usize {
        self.regions.iter().map(|r| r.records).sum()
    }
}

/// Builder entry point: parse → hash → group → emit over the municipal registry.
#[derive(Clone, Default)]
pub struct MunicipalHasher {
    pub(crate) opts: HashOptions,
}

impl MunicipalHasher {
    pub fn new() -> Self {
        Self { opts: HashOptions::default() }
    }

    pub fn with_options(opts: HashOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &HashOptions { &self.opts }

    // -------- Builder methods --------
    pub fn base_dir(mut self, base: impl AsRef<Path>) -> Self { self.opts = self.opts.with_base_dir(base); self }
    pub fn source_url(mut self, url: impl Into<String>) -> Self { self.opts = self.opts.with_source_url(url); self }
    pub fn source_file_name(mut self, name: impl Into<String>) -> Self { self.opts = self.opts.with_source_file_name(name); self }
    pub fn out_dir_name(mut self, name: impl Into<String>) -> Self { self.opts = self.opts.with_out_dir_name(name); self }
    pub fn iterations(mut self, n: u32) -> Self { self.opts = self.opts.with_iterations(n); self }
    pub fn hash_bytes(mut self, n: usize) -> Self { self.opts = self.opts.with_hash_bytes(n); self }
    pub fn pepper(mut self, pepper: impl Into<String>) -> Self { self.opts = self.opts.with_pepper(pepper); self }
    pub fn excluded_region(mut self, region: impl AsRef<str>) -> Self { self.opts = self.opts.with_excluded_region(region); self }
    pub fn progress_every(mut self, n: usize) -> Self { self.opts = self.opts.with_progress_every(n); self }
    pub fn parallelism(mut self, threads: usize) -> Self { self.opts = self.opts.with_parallelism(threads); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn io_write_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_write_buffer(bytes); self }

    // -------- Operations --------

    /// Fetch (or reuse) the source CSV under `base_dir`, then process it.
    pub fn run(self) -> Result<RunSummary> {
        init_tracing_once();
        self.opts.validate()?;

        let source = self.opts.source_path();
        fetch_or_reuse(&self.opts.source_url, &source)?;

        tracing::info!("Reading and parsing CSV ...");
        let text = fs::read_to_string(&source)
            .with_context(|| format!("read {}", source.display()))?;
        self.run_on_text(&text)
    }

    /// Process registry text that is already in memory.
    pub fn run_on_text(&self, text: &str) -> Result<RunSummary> {
        let lines = split_lines(text);
        self.run_on_lines(&lines)
    }

    /// Process registry lines. Fails before touching the output directory when `lines` is empty
    /// or the options are invalid.
    pub fn run_on_lines<S>(&self, lines: &[S]) -> Result<RunSummary>
    where
        S: AsRef<str> + Sync,
    {
        init_tracing_once();
        self.opts.validate()?;
        let started = Instant::now();

        if lines.is_empty() {
            bail!("source CSV is empty; nothing to process");
        }

        run_in_pool(self.opts.parallelism, || {
            let records = parse_lines(lines);
            let records_read = records.len();
            tracing::info!(records = records_read, "Records read: {}", records_read);

            let groups = group_and_sort(records, &self.opts.excluded_region);

            let out_dir = self.opts.out_dir();
            ensure_dir(&out_dir)?;
            tracing::info!("Computing hash per municipality and writing files per UF ...");

            let mut regions = Vec::with_capacity(groups.len());
            for group in &groups {
                regions.push(self.process_and_emit(group, &out_dir)?);
            }

            let elapsed = started.elapsed();
            tracing::info!("===== SUMMARY =====");
            tracing::info!("UFs generated: {}", regions.len());
            tracing::info!("Output folder: {}", out_dir.display());
            tracing::info!("Total time: {} ({:?})", format_elapsed(elapsed), elapsed);

            Ok(RunSummary { records_read, regions, out_dir, elapsed })
        })
    }

    fn process_and_emit(&self, group: &RegionGroup, out_dir: &Path) -> Result<RegionReport> {
        let region = group.region.as_str();
        tracing::info!("Processing UF: {} ({} municipalities)", region, group.len());
        let started = Instant::now();

        let bar = ProgressScope::count(format!("UF {region}"), group.len() as u64, self.opts.progress);
        let hashed = process_region_with_bar(
            group,
            &self.opts.pepper,
            &self.opts.kdf,
            self.opts.progress_every,
            &bar,
            |p: &RegionProgress| {
                tracing::info!(
                    "  Partial: {}/{} municipalities processed for UF {} | elapsed {}",
                    p.done, p.total, p.region, format_elapsed(p.elapsed)
                );
            },
        );
        bar.finish(format!("UF {region} hashed"));

        let files = emit_region(out_dir, region, &hashed, self.opts.write_buffer_bytes)
            .with_context(|| format!("emit UF {region}"))?;

        let elapsed = started.elapsed();
        tracing::info!(
            "UF {} done. Files written: CSV and JSON. Total UF time: {}",
            region, format_elapsed(elapsed)
        );

        Ok(RegionReport {
            region: region.to_string(),
            records: hashed.len(),
            csv_path: files.csv_path,
            json_path: files.json_path,
            elapsed,
        })
    }
}
