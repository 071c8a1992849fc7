//! PBKDF2-HMAC-SHA256 hash deriver with hex output.

use anyhow::{bail, Result};
use sha2::Sha256;

pub const DEFAULT_ITERATIONS: u32 = 50_000;
pub const DEFAULT_OUTPUT_LEN: usize = 32; // 256 bits
pub const MAX_OUTPUT_LEN: usize = 1024;

/// Key-derivation parameters. High iteration counts make each record deliberately CPU-bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KdfParams {
    pub iterations: u32,
    pub output_len: usize, // bytes
}

impl Default for KdfParams {
    fn default() -> Self {
        Self { iterations: DEFAULT_ITERATIONS, output_len: DEFAULT_OUTPUT_LEN }
    }
}

impl KdfParams {
    pub fn new(iterations: u32, output_len: usize) -> Self {
        Self { iterations, output_len }
    }

    /// Reject parameters the deriver cannot honor. Called once, before any record is touched.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            bail!("PBKDF2 iteration count must be at least 1");
        }
        if self.output_len == 0 || self.output_len > MAX_OUTPUT_LEN {
            bail!(
                "PBKDF2 output length must be between 1 and {} bytes (got {})",
                MAX_OUTPUT_LEN,
                self.output_len
            );
        }
        Ok(())
    }
}

/// Derive `params.output_len` bytes from `password`/`salt` and return them as lowercase hex.
/// Holds no shared state; safe to call from any number of threads at once.
pub fn derive_hash_hex(password: &str, salt: &[u8], params: &KdfParams) -> String {
    let mut out = vec![0u8; params.output_len];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, params.iterations, &mut out);
    hex::encode(out)
}
