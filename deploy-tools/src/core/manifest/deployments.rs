// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy.toml manifest definitions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ManifestError;
use crate::core::{
    argument::ContractArgument,
    deployment::{ContractDeployment, Deployment, Deployments},
};

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DeploymentManifest {
    #[serde(default)]
    pub deployments: Vec<TomlDeployment>,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct TomlDeployment {
    pub network: String,
    pub account: String,
    #[serde(default)]
    pub contracts: Vec<TomlContract>,
}

/// A contract entry, either a bare name or a table carrying constructor args.
#[derive(Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TomlContract {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        args: Vec<ContractArgument>,
    },
}

impl DeploymentManifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        super::load(path)
    }

    /// Load the manifest, treating a missing file as empty.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        match Self::load(path) {
            Err(ManifestError::Missing(path)) => {
                log::debug!("no manifest at {}, starting empty", path.display());
                Ok(Self::default())
            }
            result => result,
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), ManifestError> {
        super::write(self, path)
    }

    pub fn into_deployments(self) -> Deployments {
        self.deployments.into_iter().map(Deployment::from).collect()
    }
}

impl From<&Deployments> for DeploymentManifest {
    fn from(deployments: &Deployments) -> Self {
        Self {
            deployments: deployments.iter().map(TomlDeployment::from).collect(),
        }
    }
}

impl From<TomlDeployment> for Deployment {
    fn from(toml: TomlDeployment) -> Self {
        Self {
            network: toml.network,
            account: toml.account,
            contracts: toml
                .contracts
                .into_iter()
                .map(ContractDeployment::from)
                .collect(),
        }
    }
}

impl From<&Deployment> for TomlDeployment {
    fn from(deployment: &Deployment) -> Self {
        Self {
            network: deployment.network.clone(),
            account: deployment.account.clone(),
            contracts: deployment.contracts.iter().map(TomlContract::from).collect(),
        }
    }
}

impl From<TomlContract> for ContractDeployment {
    fn from(toml: TomlContract) -> Self {
        match toml {
            TomlContract::Name(name) => ContractDeployment::new(name),
            TomlContract::Detailed { name, args } => ContractDeployment::with_args(name, args),
        }
    }
}

impl From<&ContractDeployment> for TomlContract {
    fn from(contract: &ContractDeployment) -> Self {
        if contract.args.is_empty() {
            TomlContract::Name(contract.name.clone())
        } else {
            TomlContract::Detailed {
                name: contract.name.clone(),
                args: contract.args.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MANIFEST: &str = r#"
[[deployments]]
network = "testnet"
account = "alice"
contracts = [
    "Token",
    { name = "Market", args = [{ type = "uint256", value = "10" }, { type = "string", value = "fee" }] },
]

[[deployments]]
network = "emulator"
account = "bob"
"#;

    fn expected() -> Deployments {
        let mut alice = Deployment::new("testnet", "alice");
        alice.add_contract(ContractDeployment::new("Token"));
        alice.add_contract(ContractDeployment::with_args(
            "Market",
            vec![
                ContractArgument::new("uint256", "10"),
                ContractArgument::new("string", "fee"),
            ],
        ));
        Deployments::from(vec![alice, Deployment::new("emulator", "bob")])
    }

    #[test]
    fn parse_manifest() {
        let manifest: DeploymentManifest = toml::from_str(MANIFEST).unwrap();
        assert_eq!(manifest.into_deployments(), expected());
    }

    #[test]
    fn empty_manifest() {
        let manifest: DeploymentManifest = toml::from_str("").unwrap();
        assert!(manifest.into_deployments().is_empty());
    }

    #[test]
    fn write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::core::manifest::FILENAME);

        DeploymentManifest::from(&expected()).write(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Token\""));

        let loaded = DeploymentManifest::load(&path).unwrap();
        assert_eq!(loaded.into_deployments(), expected());
    }

    #[test]
    fn write_then_load_contracts_with_args() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::core::manifest::FILENAME);

        let mut alice = Deployment::new("testnet", "alice");
        alice.add_contract(ContractDeployment::with_args(
            "Token",
            vec![ContractArgument::new("string", "Example")],
        ));
        alice.add_contract(ContractDeployment::with_args(
            "Market",
            vec![
                ContractArgument::new("uint256", "10"),
                ContractArgument::new("address[]", "[]"),
            ],
        ));
        let deployments = Deployments::from(vec![alice, Deployment::new("emulator", "bob")]);

        DeploymentManifest::from(&deployments).write(&path).unwrap();
        let loaded = DeploymentManifest::load(&path).unwrap();
        assert_eq!(loaded.into_deployments(), deployments);
    }

    #[test]
    fn missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(matches!(
            DeploymentManifest::load(&path),
            Err(ManifestError::Missing(_))
        ));
        let manifest = DeploymentManifest::load_or_default(&path).unwrap();
        assert_eq!(manifest, DeploymentManifest::default());
    }

    #[test]
    fn malformed_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[[deployments]]\nnetwork = 3\n").unwrap();

        assert!(matches!(
            DeploymentManifest::load(&path),
            Err(ManifestError::TomlRead(_))
        ));
    }
}
