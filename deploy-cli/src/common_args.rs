// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use deploy_tools::ContractArgument;

#[derive(Debug, clap::Args)]
pub struct TargetArgs {
    /// Network to deploy to
    #[arg(short, long)]
    pub network: String,
    /// Account to deploy to
    #[arg(short, long)]
    pub account: String,
}

#[derive(Debug, clap::Args)]
pub struct ContractArgs {
    /// Contract name
    #[arg(long)]
    pub name: String,
    /// Constructor argument as TYPE:VALUE, in positional order (e.g. uint256:10)
    #[arg(long = "arg", value_parser = parse_argument)]
    pub args: Vec<ContractArgument>,
}

fn parse_argument(text: &str) -> Result<ContractArgument, String> {
    let arg = ContractArgument::parse(text).map_err(|err| err.to_string())?;
    arg.to_sol_value().map_err(|err| err.to_string())?;
    Ok(arg)
}
