/// Fixed pepper mixed into every salt.
///
/// Not a secret: it only keeps salts from colliding with unrelated datasets that also key on
/// IBGE codes. Changing it changes every emitted hash.
pub const PEPPER: &str = "PBKDF2_DEMOSYNC_V1";

/// Deterministic salt for a record: UTF-8 bytes of `"{code_b}|{pepper}"`.
pub fn build_salt(code_b: &str, pepper: &str) -> Vec<u8> {
    format!("{code_b}|{pepper}").into_bytes()
}
