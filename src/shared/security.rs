use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for a resolution report (100 MB)
pub const MAX_REPORT_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is itself a symbolic link.
///
/// Uses `symlink_metadata()` so the link is inspected, not its target.
/// A path that does not exist yet is accepted; writers create it.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point the tool at the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates an input file before it is read into memory.
///
/// The file must exist, must not be a symbolic link, must be a regular file
/// and must not exceed `max_size` bytes. Returns the file size.
pub fn validate_input_file(path: &Path, description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SbomError::InvalidInputPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Symbolic links are not followed for input files".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SbomError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: format!("{} is not a regular file", description),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, maximum {} bytes)",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Split the build or raise the limit".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}
