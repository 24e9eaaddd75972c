// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use deploy_tools::ops;

use crate::{common_args::TargetArgs, error::DeployCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    target: TargetArgs,
    /// Contract name
    #[arg(long)]
    name: String,
}

pub fn exec(args: Args, manifest: &Path) -> DeployCliResult {
    let TargetArgs { network, account } = args.target;
    ops::remove_contract(manifest, &account, &network, &args.name)?;
    log::info!(
        "removed contract {} from account {account} on network {network}",
        args.name
    );
    Ok(())
}
