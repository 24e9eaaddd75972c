// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use crate::{
    core::{
        deployment::{ContractDeployment, Deployment},
        manifest::DeploymentManifest,
    },
    error::{Error, Result},
};

/// Add a contract to the deployment for an account and network.
///
/// The deployment is created if needed. A contract already listed under the same name is kept
/// as it is.
pub fn add_contract(
    path: impl AsRef<Path>,
    account: &str,
    network: &str,
    contract: ContractDeployment,
) -> Result<()> {
    let path = path.as_ref();
    let mut deployments = DeploymentManifest::load_or_default(path)?.into_deployments();
    let i = match deployments.position(account, network) {
        Some(i) => i,
        None => {
            deployments.add_or_update(Deployment::new(network, account));
            deployments.len() - 1
        }
    };
    log::debug!(
        "adding contract {} to account {account} on network {network}",
        contract.name
    );
    deployments.as_mut_vec()[i].add_contract(contract);
    DeploymentManifest::from(&deployments).write(path)?;
    Ok(())
}

/// Remove a contract from the deployment for an account and network.
pub fn remove_contract(
    path: impl AsRef<Path>,
    account: &str,
    network: &str,
    name: &str,
) -> Result<()> {
    let path = path.as_ref();
    let mut deployments = DeploymentManifest::load(path)?.into_deployments();
    let Some(deployment) = deployments.by_account_and_network_mut(account, network) else {
        return Err(Error::not_found(account, network));
    };
    log::debug!("removing contract {name} from account {account} on network {network}");
    deployment.remove_contract(name);
    DeploymentManifest::from(&deployments).write(path)?;
    Ok(())
}
