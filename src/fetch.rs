//! Source retrieval: download the registry once and reuse the local copy afterwards.

use crate::util::write_file_atomic;
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str = "https://www.gov.br/receitafederal/dados/municipios.csv";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// `local_path` already existed; nothing was fetched.
    Reused,
    /// The body was downloaded and written to `local_path`.
    Downloaded { bytes: u64 },
}

/// Fetch `url` into `local_path` unless the file already exists.
/// The body is written verbatim (UTF-8) and only promoted once fully received.
pub fn fetch_or_reuse(url: &str, local_path: &Path) -> Result<FetchOutcome> {
    if local_path.exists() {
        tracing::info!(path = %local_path.display(), "Source CSV already downloaded.");
        return Ok(FetchOutcome::Reused);
    }

    tracing::info!(%url, "Downloading municipal registry CSV ...");
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .context("build HTTP client")?;
    let resp = client.get(url).send().with_context(|| format!("GET {url}"))?;
    if !resp.status().is_success() {
        bail!("GET {} failed with status {}", url, resp.status());
    }
    let body = resp.text().with_context(|| format!("read body of {url}"))?;

    if let Some(parent) = local_path.parent() {
        if !parent.as_os_str().is_empty() {
            crate::util::ensure_dir(parent)?;
        }
    }
    write_file_atomic(local_path, 64 * 1024, |w| {
        w.write_all(body.as_bytes())?;
        Ok(())
    })?;
    Ok(FetchOutcome::Downloaded { bytes: body.len() as u64 })
}
