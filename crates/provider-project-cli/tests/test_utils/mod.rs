//! Test utilities for provider-project integration tests

// Internal imports (std, crate)
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// External imports (alphabetized)
use tempfile::TempDir;

/// Creates a temporary directory for test outputs
pub fn create_temp_dir() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let temp_path = temp_dir.path().to_path_buf();
    Ok((temp_dir, temp_path))
}

/// Writes a settings file with the given name and content into `dir`
pub fn write_settings_file(dir: &Path, name: &str, content: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// A `provider-project` command running in `dir` with a clean environment
pub fn provider_project(dir: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_provider-project"));
    command
        .current_dir(dir)
        .env_remove("CDKTF_PROVIDER")
        .env_remove("RUST_LOG");
    command
}
