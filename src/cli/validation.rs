//! CLI argument validation functions

use std::fs;
use std::path::PathBuf;

/// Validate that an explicitly given env file exists and is readable
pub fn validate_env_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Env file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Env file path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read env file '{}': {}", path_str, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_file_accepted() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_env_file_path(path).unwrap(), file.path());
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = validate_env_file_path("/nonexistent/.env").unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_env_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not a file"));
    }
}
