// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use deploy_tools::ops;

use crate::{
    error::DeployCliResult,
    utils::{format_deployment, print_note},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only list deployments on this network
    #[arg(short, long)]
    network: Option<String>,
}

pub fn exec(args: Args, manifest: &Path) -> DeployCliResult {
    let deployments = ops::list(manifest, args.network.as_deref())?;
    if deployments.is_empty() {
        print_note("no deployments found");
        return Ok(());
    }
    for network in deployments.networks() {
        for deployment in &deployments.by_network(network) {
            println!("{}", format_deployment(deployment));
        }
    }
    Ok(())
}
