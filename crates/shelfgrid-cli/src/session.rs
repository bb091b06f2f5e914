//! Config loading and snapshot persistence between CLI invocations.
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;

use shelfgrid::config::MatrixConfig;
use shelfgrid::{LibraryMatrix, MatrixSnapshot};

/// Load a matrix configuration from a JSON file.
pub fn load_matrix_config<P: AsRef<Path>>(path: P) -> Result<MatrixConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: MatrixConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Load a previously saved matrix snapshot.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<LibraryMatrix> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot: {}", path.as_ref().display()))?;
    let snapshot: MatrixSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot: {}", path.as_ref().display()))?;
    LibraryMatrix::try_from(snapshot)
        .with_context(|| format!("Invalid snapshot: {}", path.as_ref().display()))
}

pub fn save_snapshot<P: AsRef<Path>>(matrix: &LibraryMatrix, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(&MatrixSnapshot::from(matrix))?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write snapshot: {}", path.as_ref().display()))?;
    log::debug!("saved snapshot to {}", path.as_ref().display());
    Ok(())
}

/// Resume from `state` when it exists, otherwise build a fresh matrix from
/// `config`. The generator is always derived from `config`.
pub fn open_matrix(config: &MatrixConfig, state: Option<&Path>) -> Result<(LibraryMatrix, StdRng)> {
    if let Some(path) = state.filter(|p| p.exists()) {
        let matrix = load_snapshot(path)?;
        if matrix.size() != config.size {
            log::warn!(
                "snapshot {} holds a {}x{} matrix; ignoring configured size {}",
                path.display(),
                matrix.size(),
                matrix.size(),
                config.size
            );
        }
        return Ok((matrix, config.rng()));
    }
    let (matrix, rng) = config
        .build()
        .context("Failed to construct matrix from config")?;
    Ok((matrix, rng))
}
