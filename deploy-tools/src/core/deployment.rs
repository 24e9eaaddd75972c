// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment records: which contracts go to which account on which network.

use std::ops::Deref;

use crate::{
    core::argument::ContractArgument,
    error::{Error, Result},
};

/// A contract to deploy, with its positional constructor arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractDeployment {
    pub name: String,
    pub args: Vec<ContractArgument>,
}

impl ContractDeployment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(name: impl Into<String>, args: Vec<ContractArgument>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// The contracts to deploy to one account on one network.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deployment {
    /// Network name to deploy to
    pub network: String,
    /// Account name to deploy to
    pub account: String,
    pub contracts: Vec<ContractDeployment>,
}

impl Deployment {
    pub fn new(network: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            account: account.into(),
            contracts: Vec::new(),
        }
    }

    fn targets(&self, account: &str, network: &str) -> bool {
        self.account == account && self.network == network
    }

    pub fn contract(&self, name: &str) -> Option<&ContractDeployment> {
        self.contracts.iter().find(|c| c.name == name)
    }

    /// Append a contract unless one with the same name is already listed.
    ///
    /// An existing entry is left untouched, including its arguments.
    pub fn add_contract(&mut self, contract: ContractDeployment) {
        if self.contract(&contract.name).is_some() {
            return;
        }
        self.contracts.push(contract);
    }

    /// Remove every contract with the given name. Missing names are ignored.
    pub fn remove_contract(&mut self, name: &str) {
        self.contracts.retain(|c| c.name != name);
    }
}

/// Ordered collection of deployment records.
///
/// When mutated only through [`add_or_update`](Self::add_or_update) and
/// [`remove`](Self::remove) there is at most one record per account and network.
/// [`as_mut_vec`](Self::as_mut_vec) bypasses that guarantee.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deployments(Vec<Deployment>);

impl Deployments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_mut_vec(&mut self) -> &mut Vec<Deployment> {
        &mut self.0
    }

    /// Copies of all deployments targeting `network`, in their original order.
    pub fn by_network(&self, network: &str) -> Deployments {
        self.0
            .iter()
            .filter(|d| d.network == network)
            .cloned()
            .collect()
    }

    /// Index of the first deployment for this account and network.
    pub fn position(&self, account: &str, network: &str) -> Option<usize> {
        self.0.iter().position(|d| d.targets(account, network))
    }

    pub fn by_account_and_network(&self, account: &str, network: &str) -> Option<&Deployment> {
        self.0.iter().find(|d| d.targets(account, network))
    }

    /// Mutable access to the stored deployment, so edits apply to the collection in place.
    pub fn by_account_and_network_mut(
        &mut self,
        account: &str,
        network: &str,
    ) -> Option<&mut Deployment> {
        self.0.iter_mut().find(|d| d.targets(account, network))
    }

    /// Replace the deployment for the same account and network, or append it.
    ///
    /// Replacement overwrites the whole record, contract list included.
    pub fn add_or_update(&mut self, deployment: Deployment) {
        match self.position(&deployment.account, &deployment.network) {
            Some(i) => self.0[i] = deployment,
            None => self.0.push(deployment),
        }
    }

    /// Remove all deployments for this account and network.
    pub fn remove(&mut self, account: &str, network: &str) -> Result<()> {
        if self.position(account, network).is_none() {
            return Err(Error::not_found(account, network));
        }
        self.0.retain(|d| !d.targets(account, network));
        Ok(())
    }

    /// Distinct network names in the order they first appear.
    pub fn networks(&self) -> Vec<&str> {
        let mut networks: Vec<&str> = Vec::new();
        for deployment in &self.0 {
            if !networks.contains(&deployment.network.as_str()) {
                networks.push(&deployment.network);
            }
        }
        networks
    }
}

impl Deref for Deployments {
    type Target = [Deployment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Deployment>> for Deployments {
    fn from(deployments: Vec<Deployment>) -> Self {
        Self(deployments)
    }
}

impl FromIterator<Deployment> for Deployments {
    fn from_iter<I: IntoIterator<Item = Deployment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Deployments {
    type Item = Deployment;
    type IntoIter = std::vec::IntoIter<Deployment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deployments {
    type Item = &'a Deployment;
    type IntoIter = std::slice::Iter<'a, Deployment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
