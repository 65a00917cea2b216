//! Governance transaction commands: submit-proposal, deposit, vote, unjail.
//!
//! Each handler follows the same shape: parse arguments, resolve the
//! account's auth address through the node, construct the message, run its
//! structural validation, hand off to the broadcast pipeline.

use crate::cli::tx;
use crate::client::NodeClient;
use crate::error::{Error, Result};
use crate::governance::{
    Msg, MsgDeposit, MsgSubmitProposal, MsgUnjail, MsgVote, ProposalContent, ProposalRequest,
    ProposalType, VoteOption,
};
use crate::tx::generate_or_broadcast;
use crate::types::{parse_coins, AccountId};
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::PathBuf;
use std::str::FromStr;

/// Proposal flags that cannot be combined with a `--proposal` file.
pub const PROPOSAL_FLAGS: [&str; 4] = ["title", "description", "type", "deposit"];

/// Create the `gov` command group.
pub fn gov_command() -> Command {
    Command::new("gov")
        .about("Governance transactions subcommands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tx::tx_flags(submit_proposal_command()))
        .subcommand(tx::tx_flags(deposit_command()))
        .subcommand(tx::tx_flags(vote_command()))
        .subcommand(tx::tx_flags(unjail_command()))
}

/// Dispatch a parsed `gov` invocation.
pub fn handle_gov_command(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("submit-proposal", sub)) => handle_submit_proposal(sub),
        Some(("deposit", sub)) => handle_deposit(sub),
        Some(("vote", sub)) => handle_vote(sub),
        Some(("unjail", sub)) => handle_unjail(sub),
        _ => unreachable!("subcommand required by clap"),
    }
}

fn submit_proposal_command() -> Command {
    Command::new("submit-proposal")
        .about("Submit a proposal along with an initial deposit")
        .long_about(
            "Submit a proposal along with an initial deposit.\n\
             Proposal title, description, type and deposit can be given directly or through a proposal JSON file.\n\n\
             Example:\n\
             $ govcli tx gov submit-proposal jack --proposal=\"path/to/proposal.json\"\n\n\
             Where proposal.json contains:\n\n\
             {\n\
               \"title\": \"Test Proposal\",\n\
               \"description\": \"My awesome proposal\",\n\
               \"type\": \"Text\",\n\
               \"deposit\": \"10test\"\n\
             }\n\n\
             Which is equivalent to:\n\n\
             $ govcli tx gov submit-proposal jack --title=\"Test Proposal\" --description=\"My awesome proposal\" --type=\"Text\" --deposit=\"10test\"",
        )
        .arg(
            Arg::new("proposer")
                .value_name("PROPOSER")
                .help("Account submitting the proposal")
                .required(true),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("STRING")
                .help("Title of proposal"),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .value_name("STRING")
                .help("Description of proposal"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .value_name("STRING")
                .help("Type of proposal, types: text/parameter_change/software_upgrade"),
        )
        .arg(
            Arg::new("deposit")
                .long("deposit")
                .value_name("COINS")
                .help("Initial deposit of proposal"),
        )
        .arg(
            Arg::new("proposal")
                .long("proposal")
                .value_name("FILE")
                .help("Proposal file path (cannot be combined with the other proposal flags)")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn deposit_command() -> Command {
    Command::new("deposit")
        .about("Deposit tokens for an active proposal")
        .long_about(
            "Submit a deposit for an active proposal. You can find the proposal-id\n\
             by running \"govcli query gov proposals\".\n\n\
             Example:\n\
             $ govcli tx gov deposit jack 1 10stake",
        )
        .arg(
            Arg::new("depositor")
                .value_name("DEPOSITOR")
                .help("Account making the deposit")
                .required(true),
        )
        .arg(
            Arg::new("proposal-id")
                .value_name("PROPOSAL_ID")
                .help("ID of the proposal to deposit on")
                .required(true),
        )
        .arg(
            Arg::new("deposit")
                .value_name("COINS")
                .help("Deposit amount, e.g. 10stake")
                .required(true),
        )
}

fn vote_command() -> Command {
    Command::new("vote")
        .about("Vote for an active proposal, options: yes/no/no_with_veto/abstain")
        .long_about(
            "Submit a vote for an active proposal. You can find the proposal-id\n\
             by running \"govcli query gov proposals\".\n\n\
             Example:\n\
             $ govcli tx gov vote jack 1 yes",
        )
        .arg(
            Arg::new("voter-account")
                .value_name("VOTER")
                .help("Account casting the vote")
                .required(true),
        )
        .arg(
            Arg::new("proposal-id")
                .value_name("PROPOSAL_ID")
                .help("ID of the proposal to vote on")
                .required(true),
        )
        .arg(
            Arg::new("option")
                .value_name("OPTION")
                .help("Vote option (yes, no, no_with_veto, abstain)")
                .required(true),
        )
}

fn unjail_command() -> Command {
    Command::new("unjail")
        .about("Unjail validator previously jailed for downtime")
        .long_about(
            "Unjail a jailed validator:\n\n\
             $ govcli tx gov unjail validator",
        )
        .arg(
            Arg::new("validator-account")
                .value_name("VALIDATOR")
                .help("Validator account to unjail")
                .required(true),
        )
}

/// Assemble the proposal fields from either the `--proposal` file or the
/// discrete flags. The two input forms are mutually exclusive and the check
/// runs before anything touches the network.
pub fn parse_submit_proposal_input(matches: &ArgMatches) -> Result<ProposalRequest> {
    if let Some(path) = matches.get_one::<PathBuf>("proposal") {
        for flag in PROPOSAL_FLAGS {
            if matches.get_one::<String>(flag).is_some() {
                return Err(Error::ProposalInputConflict(flag.to_string()));
            }
        }
        return ProposalRequest::from_file(path);
    }

    Ok(ProposalRequest {
        title: matches.get_one::<String>("title").cloned().unwrap_or_default(),
        description: matches
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_default(),
        proposal_type: matches.get_one::<String>("type").cloned().unwrap_or_default(),
        deposit: matches.get_one::<String>("deposit").cloned().unwrap_or_default(),
    })
}

fn parse_proposal_id(arg: &str) -> Result<u64> {
    arg.parse()
        .map_err(|_| Error::InvalidProposalId(arg.to_string()))
}

fn handle_submit_proposal(matches: &ArgMatches) -> Result<()> {
    let (ctx, builder) = tx::context_and_builder(matches)?;

    let request = parse_submit_proposal_input(matches)?;
    let deposit = parse_coins(&request.deposit)?;
    let proposal_type = ProposalType::from_str(&request.proposal_type)?;
    let content = ProposalContent::new(request.title, request.description, proposal_type);

    let proposer = AccountId::from_str(matches.get_one::<String>("proposer").expect("required"))?;

    let client = NodeClient::new(ctx.node.clone())?;
    let proposer_auth = client.query_account_auth(&proposer)?;

    let msg = MsgSubmitProposal::new(proposer_auth, content, deposit, proposer.clone());
    msg.validate()?;

    let ctx = ctx.with_from_account(proposer.clone());
    let builder = match builder.fee_payer() {
        Some(_) => builder,
        None => builder.with_payer(proposer),
    };
    generate_or_broadcast(&ctx, builder, &[&msg])
}

fn handle_deposit(matches: &ArgMatches) -> Result<()> {
    let (ctx, builder) = tx::context_and_builder(matches)?;

    let proposal_id = parse_proposal_id(matches.get_one::<String>("proposal-id").expect("required"))?;
    let amount = parse_coins(matches.get_one::<String>("deposit").expect("required"))?;
    let depositor = AccountId::from_str(matches.get_one::<String>("depositor").expect("required"))?;

    let client = NodeClient::new(ctx.node.clone())?;
    let depositor_auth = client.query_account_auth(&depositor)?;

    let msg = MsgDeposit::new(depositor_auth, depositor.clone(), proposal_id, amount);
    msg.validate()?;

    let ctx = ctx.with_from_account(depositor.clone());
    let builder = match builder.fee_payer() {
        Some(_) => builder,
        None => builder.with_payer(depositor),
    };
    generate_or_broadcast(&ctx, builder, &[&msg])
}

fn handle_vote(matches: &ArgMatches) -> Result<()> {
    let (ctx, builder) = tx::context_and_builder(matches)?;

    let proposal_id = parse_proposal_id(matches.get_one::<String>("proposal-id").expect("required"))?;
    let option = VoteOption::from_str(matches.get_one::<String>("option").expect("required"))?;
    let voter = AccountId::from_str(matches.get_one::<String>("voter-account").expect("required"))?;

    let client = NodeClient::new(ctx.node.clone())?;
    let voter_auth = client.query_account_auth(&voter)?;

    let msg = MsgVote::new(voter_auth, voter.clone(), proposal_id, option);
    msg.validate()?;

    let ctx = ctx.with_from_account(voter.clone());
    let builder = match builder.fee_payer() {
        Some(_) => builder,
        None => builder.with_payer(voter),
    };
    generate_or_broadcast(&ctx, builder, &[&msg])
}

fn handle_unjail(matches: &ArgMatches) -> Result<()> {
    let (ctx, builder) = tx::context_and_builder(matches)?;

    let validator =
        AccountId::from_str(matches.get_one::<String>("validator-account").expect("required"))?;

    let client = NodeClient::new(ctx.node.clone())?;
    let validator_auth = client.query_account_auth(&validator)?;

    let msg = MsgUnjail::new(validator_auth, validator.clone());
    msg.validate()?;

    let ctx = ctx.with_from_account(validator.clone());
    let builder = match builder.fee_payer() {
        Some(_) => builder,
        None => builder.with_payer(validator),
    };
    generate_or_broadcast(&ctx, builder, &[&msg])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn submit_matches(args: &[&str]) -> ArgMatches {
        let cmd = tx::tx_flags(submit_proposal_command());
        let full: Vec<&str> = std::iter::once("submit-proposal")
            .chain(args.iter().copied())
            .collect();
        cmd.try_get_matches_from(full).unwrap()
    }

    #[test]
    fn proposal_flags_alone_are_accepted() {
        let matches = submit_matches(&[
            "jack",
            "--title",
            "Test Proposal",
            "--description",
            "My awesome proposal",
            "--type",
            "Text",
            "--deposit",
            "10test",
        ]);
        let request = parse_submit_proposal_input(&matches).unwrap();
        assert_eq!(request.title, "Test Proposal");
        assert_eq!(request.deposit, "10test");
    }

    #[test]
    fn proposal_file_alone_is_accepted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title": "T", "description": "D", "type": "Text", "deposit": "10test"}}"#
        )
        .unwrap();

        let matches = submit_matches(&["jack", "--proposal", file.path().to_str().unwrap()]);
        let request = parse_submit_proposal_input(&matches).unwrap();
        assert_eq!(request.title, "T");
    }

    #[test]
    fn proposal_file_conflicts_with_each_flag() {
        for (flag, value) in [
            ("--title", "T"),
            ("--description", "D"),
            ("--type", "Text"),
            ("--deposit", "10test"),
        ] {
            let matches = submit_matches(&["jack", "--proposal", "p.json", flag, value]);
            let err = parse_submit_proposal_input(&matches).unwrap_err();
            assert!(
                matches!(err, Error::ProposalInputConflict(_)),
                "expected conflict for {}",
                flag
            );
        }
    }

    #[test]
    fn proposal_id_must_be_numeric() {
        assert_eq!(parse_proposal_id("1").unwrap(), 1);
        assert_eq!(parse_proposal_id("18446744073709551615").unwrap(), u64::MAX);
        let err = parse_proposal_id("abc").unwrap_err();
        assert!(err.to_string().contains("abc"));
        assert!(parse_proposal_id("-1").is_err());
        assert!(parse_proposal_id("1.5").is_err());
    }
}
