// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use deploy_tools::ops;

use crate::{common_args::TargetArgs, error::DeployCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    target: TargetArgs,
}

pub fn exec(args: Args, manifest: &Path) -> DeployCliResult {
    let TargetArgs { network, account } = args.target;
    ops::remove_deployment(manifest, &account, &network)?;
    log::info!("removed deployment for account {account} on network {network}");
    Ok(())
}
