use clap::Command;
use govcli::cli;
use std::process;

fn main() {
    env_logger::init();

    let matches = Command::new("govcli")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Transaction CLI for the chain governance module")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cli::tx_command())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("tx", tx_matches)) => cli::handle_tx_command(tx_matches),
        _ => unreachable!("subcommand required by clap"),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
