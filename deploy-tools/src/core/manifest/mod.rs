// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

pub mod deployments;

pub use deployments::DeploymentManifest;

/// Filename for Deploy.toml manifest files
pub const FILENAME: &str = "Deploy.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),
    #[error("toml write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("missing manifest {}", .0.display())]
    Missing(PathBuf),
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::Missing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    log::debug!("loaded manifest {}", path.display());
    Ok(manifest)
}

pub fn write<T: Serialize>(manifest: &T, path: impl AsRef<Path>) -> Result<(), ManifestError> {
    let path = path.as_ref();
    fs::write(path, toml::to_string_pretty(manifest)?)?;
    log::debug!("wrote manifest {}", path.display());
    Ok(())
}
