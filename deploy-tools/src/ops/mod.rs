// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Operations on a Deploy.toml manifest.
//!
//! Each operation loads the manifest, applies one change to its [`Deployments`], and writes
//! the result back. Nothing is written when the change fails.
//!
//! [`Deployments`]: crate::Deployments

pub use contract::{add_contract, remove_contract};
pub use deployment::{add_deployment, list, remove_deployment};

mod contract;
mod deployment;
