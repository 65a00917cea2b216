//! The `tx` command group and the flag set shared by every transaction
//! command.

use crate::cli::gov;
use crate::client::{CliContext, OutputFormat};
use crate::config::DEFAULTS;
use crate::error::Result;
use crate::tx::TxBuilder;
use crate::types::AccountId;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::str::FromStr;

/// Create the `tx` parent command.
pub fn tx_command() -> Command {
    Command::new("tx")
        .about("Transaction subcommands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gov::gov_command())
}

/// Dispatch a parsed `tx` invocation.
pub fn handle_tx_command(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("gov", gov_matches)) => gov::handle_gov_command(gov_matches),
        _ => unreachable!("subcommand required by clap"),
    }
}

/// Attach the shared transaction flags to a leaf command.
///
/// Mirrors how the framework posts its flag set onto every tx command
/// instead of declaring them globally.
pub fn tx_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("node")
            .long("node")
            .value_name("URL")
            .help("REST endpoint of the chain node")
            .default_value(DEFAULTS.node.as_str()),
    )
    .arg(
        Arg::new("chain-id")
            .long("chain-id")
            .value_name("ID")
            .help("Chain ID the transaction is addressed to")
            .default_value(DEFAULTS.chain_id.as_str()),
    )
    .arg(
        Arg::new("memo")
            .long("memo")
            .value_name("STRING")
            .help("Memo to attach to the transaction")
            .default_value(""),
    )
    .arg(
        Arg::new("fee-payer")
            .long("fee-payer")
            .value_name("ACCOUNT")
            .help("Account paying the transaction fee (defaults to the command's account argument)"),
    )
    .arg(
        Arg::new("generate-only")
            .long("generate-only")
            .help("Print the unsigned transaction instead of broadcasting it")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("output")
            .long("output")
            .value_name("FORMAT")
            .help("Output format (text|json)")
            .default_value("text"),
    )
}

/// Build the client context and tx builder from the shared flags.
pub fn context_and_builder(matches: &ArgMatches) -> Result<(CliContext, TxBuilder)> {
    let node = matches.get_one::<String>("node").expect("defaulted");
    let output = OutputFormat::from_str(matches.get_one::<String>("output").expect("defaulted"))?;
    let ctx = CliContext::new(node, output)?.generate_only(matches.get_flag("generate-only"));

    let chain_id = matches.get_one::<String>("chain-id").expect("defaulted");
    let memo = matches.get_one::<String>("memo").expect("defaulted");
    let fee_payer = matches
        .get_one::<String>("fee-payer")
        .map(|s| AccountId::from_str(s))
        .transpose()?;

    Ok((ctx, TxBuilder::new(chain_id.as_str(), memo.as_str(), fee_payer)))
}
