use crate::calibration::CalibrationError;
use std::fs;
use std::path::Path;

/// Name of the input file, resolved against the working directory.
pub const INPUT_PATH: &str = "input";

/// Reads the whole input resource into memory.
///
/// The file handle is released before returning, whether or not the read
/// succeeded.
pub fn load_input(path: impl AsRef<Path>) -> Result<String, CalibrationError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| CalibrationError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| CalibrationError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    log::debug!("loaded {} bytes from {}", content.len(), path.display());
    Ok(content)
}
