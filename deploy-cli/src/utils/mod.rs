// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use deploy_tools::{ContractDeployment, Deployment};

use style::{BOLD, ERROR, NOTE};

mod style;

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

pub fn print_note(note: impl Display) {
    eprintln!("{NOTE}{note}{NOTE:#}");
}

/// Render a deployment as a single `network/account: contracts` line.
pub fn format_deployment(deployment: &Deployment) -> String {
    let contracts: Vec<_> = deployment.contracts.iter().map(format_contract).collect();
    format!(
        "{}/{}: {}",
        deployment.network,
        deployment.account,
        contracts.join(", ")
    )
}

fn format_contract(contract: &ContractDeployment) -> String {
    if contract.args.is_empty() {
        return contract.name.clone();
    }
    let args: Vec<_> = contract.args.iter().map(ToString::to_string).collect();
    format!("{}({})", contract.name, args.join(", "))
}
