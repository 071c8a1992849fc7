//! Registry record model: one municipality per input line, plus its derived hash.

use serde::{Deserialize, Serialize};

/// One municipal entry: `TOM;IBGE;NomeTOM;NomeIBGE;UF`.
/// Fields are sanitized at construction (see `parse::parse_line`) and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Tom")]
    pub code_a: String,   // TOM code, primary identifier
    #[serde(rename = "Ibge")]
    pub code_b: String,   // IBGE code, feeds the salt
    #[serde(rename = "NomeTom")]
    pub name_a: String,
    #[serde(rename = "NomeIbge")]
    pub name_b: String,
    #[serde(rename = "Uf")]
    pub region: String,   // upper-cased UF
}

impl Record {
    pub fn new(
        code_a: impl Into<String>,
        code_b: impl Into<String>,
        name_a: impl Into<String>,
        name_b: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            code_a: code_a.into(),
            code_b: code_b.into(),
            name_a: name_a.into(),
            name_b: name_b.into(),
            region: region.into(),
        }
    }

    /// Display name used for ordering: the IBGE name unless it is blank.
    pub fn preferred_name(&self) -> &str {
        if self.name_b.trim().is_empty() {
            &self.name_a
        } else {
            &self.name_b
        }
    }

    /// Key-derivation input: all five fields joined with `;` in fixed order.
    pub fn canonical_string(&self) -> String {
        format!(
            "{};{};{};{};{}",
            self.code_a, self.code_b, self.name_a, self.name_b, self.region
        )
    }
}

/// A record with its lowercase hex PBKDF2 hash attached.
/// Serializes flat, in the order `Tom, Ibge, NomeTom, NomeIbge, Uf, Hash`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedRecord {
    #[serde(flatten)]
    pub record: Record,
    #[serde(rename = "Hash")]
    pub hash: String,
}

impl HashedRecord {
    pub fn new(record: Record, hash: String) -> Self {
        Self { record, hash }
    }

    /// Tabular form: `TOM;IBGE;NomeTOM;NomeIBGE;UF;Hash` (no line terminator).
    pub fn to_csv_line(&self) -> String {
        format!("{};{}", self.record.canonical_string(), self.hash)
    }
}
