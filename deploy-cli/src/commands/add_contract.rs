// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use deploy_tools::{ops, ContractDeployment};

use crate::{
    common_args::{ContractArgs, TargetArgs},
    error::DeployCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    target: TargetArgs,
    #[command(flatten)]
    contract: ContractArgs,
}

pub fn exec(args: Args, manifest: &Path) -> DeployCliResult {
    let TargetArgs { network, account } = args.target;
    let ContractArgs { name, args } = args.contract;
    let contract = ContractDeployment::with_args(name.clone(), args);
    ops::add_contract(manifest, &account, &network, contract)?;
    log::info!("added contract {name} to account {account} on network {network}");
    Ok(())
}
