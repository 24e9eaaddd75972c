// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::manifest::ManifestError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Manifest(#[from] ManifestError),

    #[error("deployment for account {account} on network {network} does not exist in configuration")]
    NotFound { account: String, network: String },
    #[error("invalid contract argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn not_found(account: impl Into<String>, network: impl Into<String>) -> Self {
        Self::NotFound {
            account: account.into(),
            network: network.into(),
        }
    }

    /// Whether this is the error returned for a missing deployment record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
