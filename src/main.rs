use std::process;

use clap::{Arg, ArgAction, Command};

use gh_triage::commands::{handle_auth, handle_filter, handle_list, handle_merge, handle_pull};
use gh_triage::logging::init_logging;

fn triage_mode_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("good-first-issue")
            .long("good-first-issue")
            .help("Include only good first issues")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("accepting-prs")
            .long("accepting-prs")
            .help("Include only issues accepting PRs")
            .action(ArgAction::SetTrue),
    )
}

#[tokio::main]
async fn main() {
    // Logging is best-effort diagnostics; a failure to set it up is not fatal
    let _ = init_logging();

    let app = Command::new("ghtriage")
        .about("Triage GitHub issues from starred repositories")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Configure the GitHub token")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Set your GitHub API token")
                        .required(false),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the configured token")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("pull")
                .about("Pull open issues from all starred repositories into a CSV snapshot")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output CSV file")
                        .required(true),
                )
                .arg(
                    Arg::new("max-issues")
                        .long("max-issues")
                        .value_name("N")
                        .help("Max issues per repository (default 30)"),
                )
                .arg(
                    Arg::new("days")
                        .long("days")
                        .value_name("N")
                        .help("Look at issues from the last N days (default 7)"),
                ),
        )
        .subcommand(
            Command::new("merge")
                .about("Merge and deduplicate CSV snapshots, keeping the freshest record per issue")
                .arg(
                    Arg::new("csvfiles")
                        .value_name("FILE")
                        .help("CSV files to merge")
                        .num_args(1..)
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output CSV file")
                        .required(true),
                ),
        )
        .subcommand(
            triage_mode_args(
                Command::new("filter")
                    .about("Keep only issues matching the requested classification")
                    .arg(
                        Arg::new("input")
                            .value_name("FILE")
                            .help("Input CSV file")
                            .required(true)
                            .index(1),
                    )
                    .arg(
                        Arg::new("output")
                            .long("output")
                            .short('o')
                            .value_name("FILE")
                            .help("Output CSV file")
                            .required(true),
                    ),
            ),
        )
        .subcommand(
            triage_mode_args(
                Command::new("list")
                    .about("Browse a snapshot in the terminal")
                    .arg(
                        Arg::new("input")
                            .value_name("FILE")
                            .help("Input CSV file")
                            .required(true)
                            .index(1),
                    )
                    .arg(
                        Arg::new("sort")
                            .long("sort")
                            .short('s')
                            .value_name("KEY")
                            .help("Sort by: created, updated, reactions, repo"),
                    )
                    .arg(
                        Arg::new("limit")
                            .long("limit")
                            .short('n')
                            .value_name("N")
                            .help("Show at most N issues (default 50)"),
                    )
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .short('f')
                            .value_name("FORMAT")
                            .help("Output format: simple, table, json"),
                    ),
            ),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches),
        Some(("pull", sub_matches)) => handle_pull(sub_matches).await,
        Some(("merge", sub_matches)) => handle_merge(sub_matches),
        Some(("filter", sub_matches)) => handle_filter(sub_matches),
        Some(("list", sub_matches)) => handle_list(sub_matches),
        _ => {
            eprintln!("Unknown command. Use 'ghtriage --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
