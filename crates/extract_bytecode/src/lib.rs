use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

/// Reads the compiled-bytecode file produced by the Solidity compiler and
/// returns its content with leading/trailing whitespace stripped.
///
/// solc writes the hex string without a `0x` prefix and usually with a
/// trailing newline; the caller is responsible for prefixing.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid UTF-8.
pub fn extract_bytecode<P: AsRef<Path>>(bin_path: P) -> Result<String> {
    let bin_path_ref = bin_path.as_ref();
    let raw = fs::read_to_string(bin_path_ref)
        .with_context(|| format!("Error reading bytecode file {}", bin_path_ref.display()))?;
    Ok(raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use std::path::Path;

    #[test]
    fn test_trims_trailing_newlines() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "abc123\n\n").expect("Failed to write to temp file");

        let result = extract_bytecode(temp_file.path());
        assert_eq!(result.unwrap(), "abc123");
    }

    #[test]
    fn test_trims_surrounding_whitespace_only() {
        // Internal whitespace is preserved; only the edges are trimmed.
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  60806040 5234\t\n").expect("Failed to write to temp file");

        let result = extract_bytecode(temp_file.path());
        assert_eq!(result.unwrap(), "60806040 5234");
    }

    #[test]
    fn test_empty_file_yields_empty_string() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");

        let result = extract_bytecode(temp_file.path());
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_non_existent_file() {
        let fake_path = Path::new("non_existent_contract.bin");
        let result = extract_bytecode(fake_path);
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Error reading bytecode file"));
    }
}
