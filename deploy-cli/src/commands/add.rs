// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use deploy_tools::{ops, ContractDeployment, Deployment};

use crate::{common_args::TargetArgs, error::DeployCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    target: TargetArgs,
    /// Contract to deploy, without constructor arguments
    #[arg(long = "contract")]
    contracts: Vec<String>,
}

pub fn exec(args: Args, manifest: &Path) -> DeployCliResult {
    let mut deployment = Deployment::new(args.target.network, args.target.account);
    for name in args.contracts {
        deployment.add_contract(ContractDeployment::new(name));
    }
    let (account, network) = (deployment.account.clone(), deployment.network.clone());
    ops::add_deployment(manifest, deployment)?;
    log::info!("saved deployment for account {account} on network {network}");
    Ok(())
}
