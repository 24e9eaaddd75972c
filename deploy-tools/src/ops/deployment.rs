// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use crate::{
    core::{
        deployment::{Deployment, Deployments},
        manifest::DeploymentManifest,
    },
    error::Result,
};

/// List the deployments in a manifest, optionally only those on one network.
pub fn list(path: impl AsRef<Path>, network: Option<&str>) -> Result<Deployments> {
    let deployments = DeploymentManifest::load(path)?.into_deployments();
    Ok(match network {
        Some(network) => deployments.by_network(network),
        None => deployments,
    })
}

/// Add a deployment to a manifest, replacing any existing one for the same account and network.
///
/// The manifest is created if it does not exist yet.
pub fn add_deployment(path: impl AsRef<Path>, deployment: Deployment) -> Result<()> {
    let path = path.as_ref();
    let mut deployments = DeploymentManifest::load_or_default(path)?.into_deployments();
    log::debug!(
        "adding deployment for account {} on network {}",
        deployment.account,
        deployment.network
    );
    deployments.add_or_update(deployment);
    DeploymentManifest::from(&deployments).write(path)?;
    Ok(())
}

/// Remove the deployment for an account and network from a manifest.
pub fn remove_deployment(path: impl AsRef<Path>, account: &str, network: &str) -> Result<()> {
    let path = path.as_ref();
    let mut deployments = DeploymentManifest::load(path)?.into_deployments();
    deployments.remove(account, network)?;
    log::debug!("removed deployment for account {account} on network {network}");
    DeploymentManifest::from(&deployments).write(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{deployment::ContractDeployment, manifest::FILENAME};

    fn with_contracts(network: &str, account: &str, contracts: &[&str]) -> Deployment {
        let mut deployment = Deployment::new(network, account);
        for name in contracts {
            deployment.add_contract(ContractDeployment::new(*name));
        }
        deployment
    }

    #[test]
    fn add_creates_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);

        add_deployment(&path, with_contracts("testnet", "alice", &["Token"])).unwrap();
        let deployments = list(&path, None).unwrap();
        assert_eq!(deployments.len(), 1);
        assert_eq!(deployments[0], with_contracts("testnet", "alice", &["Token"]));
    }

    #[test]
    fn add_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);

        add_deployment(&path, with_contracts("testnet", "alice", &["Token"])).unwrap();
        add_deployment(&path, with_contracts("emulator", "alice", &[])).unwrap();
        add_deployment(&path, with_contracts("testnet", "alice", &["Market"])).unwrap();

        let deployments = list(&path, None).unwrap();
        assert_eq!(deployments.len(), 2);
        assert_eq!(deployments[0], with_contracts("testnet", "alice", &["Market"]));
    }

    #[test]
    fn list_by_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);

        add_deployment(&path, with_contracts("testnet", "alice", &[])).unwrap();
        add_deployment(&path, with_contracts("emulator", "bob", &[])).unwrap();
        add_deployment(&path, with_contracts("testnet", "carol", &[])).unwrap();

        let testnet = list(&path, Some("testnet")).unwrap();
        let accounts: Vec<_> = testnet.iter().map(|d| d.account.as_str()).collect();
        assert_eq!(accounts, ["alice", "carol"]);
        assert!(list(&path, Some("mainnet")).unwrap().is_empty());
    }

    #[test]
    fn list_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = list(dir.path().join(FILENAME), None).unwrap_err();
        assert!(matches!(err, crate::Error::Manifest(_)));
    }

    #[test]
    fn remove_leaves_file_untouched_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);

        add_deployment(&path, with_contracts("testnet", "alice", &["Token"])).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = remove_deployment(&path, "bob", "testnet").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);

        remove_deployment(&path, "alice", "testnet").unwrap();
        assert!(list(&path, None).unwrap().is_empty());
    }
}
