// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use crate::error::DeployCliResult;

mod add;
mod add_contract;
mod list;
mod remove;
mod remove_contract;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List deployments, optionally filtered by network
    #[clap(visible_alias = "l")]
    List(list::Args),
    /// Add a deployment, replacing any existing one for the same account and network
    #[clap(visible_alias = "a")]
    Add(add::Args),
    /// Remove the deployment for an account and network
    #[clap(visible_alias = "r")]
    Remove(remove::Args),
    /// Add a contract to a deployment
    #[clap(visible_alias = "c")]
    AddContract(add_contract::Args),
    /// Remove a contract from a deployment
    #[clap(visible_alias = "x")]
    RemoveContract(remove_contract::Args),
}

pub fn exec(cmd: Command, manifest: &Path) -> DeployCliResult {
    match cmd {
        Command::List(args) => list::exec(args, manifest),
        Command::Add(args) => add::exec(args, manifest),
        Command::Remove(args) => remove::exec(args, manifest),
        Command::AddContract(args) => add_contract::exec(args, manifest),
        Command::RemoveContract(args) => remove_contract::exec(args, manifest),
    }
}
