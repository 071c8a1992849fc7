mod config;
mod record;
mod parse;
mod salt;
mod kdf;
mod grouping;

mod processor;
mod emit;
mod fetch;
mod pipeline;

mod progress;
mod concurrency;
mod util;

pub use crate::config::{HashOptions, DEFAULT_OUT_DIR, DEFAULT_SOURCE_FILE};
pub use crate::pipeline::{MunicipalHasher, RegionReport, RunSummary};
pub use crate::record::{HashedRecord, Record};

// Parser and sanitizer.
pub use crate::parse::{has_header, header_offset, parse_line, parse_lines, sanitize_field, split_lines, MIN_FIELDS};

// Salt + key derivation.
pub use crate::salt::{build_salt, PEPPER};
pub use crate::kdf::{derive_hash_hex, KdfParams, DEFAULT_ITERATIONS, DEFAULT_OUTPUT_LEN};

// Grouping and ordering.
pub use crate::grouping::{cmp_ignore_case, eq_ignore_case, group_and_sort, upper_invariant, GroupIndex, RegionGroup, EXCLUDED_REGION};

// Per-region hashing with progress callbacks.
pub use crate::processor::{hash_record, process_region, RegionProgress, DEFAULT_PROGRESS_EVERY};

// Output writers.
pub use crate::emit::{csv_file_name, emit_region, json_file_name, region_file_stem, write_csv, write_json, RegionFiles, CSV_HEADER};

// Collaborators: source fetch, output dir, logging, progress bars.
pub use crate::fetch::{fetch_or_reuse, FetchOutcome, DEFAULT_SOURCE_URL};
pub use crate::util::{ensure_dir, init_tracing_once, replace_file_atomic_backoff, write_file_atomic};
pub use crate::progress::{format_elapsed, set_global_multiprogress, ProgressScope};
pub use crate::concurrency::run_in_pool;
