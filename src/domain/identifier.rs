//! Address and object identifier parsing.
//!
//! Sui addresses and object IDs are hex strings. Users paste them with or
//! without a `0x` prefix and in either case, so everything that compares or
//! sends identifiers goes through [`normalize_id`] first.

use data_encoding::HEXLOWER_PERMISSIVE;

use super::ExplorerError;

/// Longest identifier accepted, in bytes.
pub const MAX_ID_BYTES: usize = 32;

/// Normalizes an address or object identifier.
///
/// Trims whitespace, strips an optional `0x` prefix and lowercases the hex
/// digits.
///
/// # Errors
///
/// Returns `ExplorerError::InvalidInput` if the identifier is empty, is not
/// valid hex, or is longer than [`MAX_ID_BYTES`].
pub fn normalize_id(raw: &str) -> Result<String, ExplorerError> {
    let trimmed = raw.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.is_empty() {
        return Err(ExplorerError::invalid_input("identifier cannot be empty"));
    }

    let bytes = HEXLOWER_PERMISSIVE
        .decode(hex.as_bytes())
        .map_err(|e| ExplorerError::invalid_input(format!("'{trimmed}' is not valid hex: {e}")))?;

    if bytes.len() > MAX_ID_BYTES {
        return Err(ExplorerError::invalid_input(format!(
            "identifier is {} bytes, at most {MAX_ID_BYTES} are allowed",
            bytes.len()
        )));
    }

    Ok(hex.to_ascii_lowercase())
}
