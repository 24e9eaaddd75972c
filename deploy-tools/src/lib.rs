// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for managing contract deployment records.
//!
//! A [`Deployments`] collection lists which contracts should be deployed to which account on
//! which network. It is normally read from and written back to a `Deploy.toml` manifest
//! through [`DeploymentManifest`], or driven through the helpers in [`ops`].

pub mod core;
pub(crate) mod error;
pub mod ops;

pub use crate::core::{
    argument::ContractArgument,
    deployment::{ContractDeployment, Deployment, Deployments},
    manifest::DeploymentManifest,
};
pub use error::{Error, Result};
