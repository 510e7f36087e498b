use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use streamtexts_leaderboard::config::{self, LeaderboardConfig};
use streamtexts_leaderboard::form::{Assignment, Form};
use streamtexts_leaderboard::generate::Leaderboard;
use streamtexts_leaderboard::output;
use streamtexts_leaderboard::rank;
use streamtexts_leaderboard::types::Entry;

/// Shared flags for commands that collect entries.
#[derive(clap::Args, Clone)]
struct EntryArgs {
    /// Set a runner's fields: NAME,TIME[,NICKNAME] (repeatable)
    #[arg(long = "set", value_name = "NAME,TIME[,NICKNAME]")]
    assignments: Vec<Assignment>,

    /// Read all entries from a JSON file instead of the roster
    #[arg(long, value_name = "FILE", conflicts_with = "assignments")]
    entries: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "streamtexts-leaderboard")]
#[command(about = "Rank race times and write a self-reloading HTML leaderboard")]
#[command(long_about = "\
Rank race times and write a self-reloading HTML leaderboard

Each runner in the roster has a time (MM:SS.t) and a nickname. Runners whose
time is still 00:00.0 have not finished: they rank after everyone with a
time, alphabetically by nickname.

The page is written to leaderboard/leaderboard.html under --root and reloads
itself, so a browser tab or streaming overlay pointed at it stays current.

Examples:

  streamtexts-leaderboard update --set Runner1,01:23.4,Speedy --set Runner2,00:59.0
  streamtexts-leaderboard update --entries results.json
  streamtexts-leaderboard edit

Entries file format (JSON):

  [{\"name\": \"Runner1\", \"time\": \"01:23.4\", \"nickname\": \"Speedy\"}]

Run 'streamtexts-leaderboard gen-config' to generate a documented leaderboard.toml.")]
#[command(version)]
struct Cli {
    /// Working directory holding leaderboard.toml and the output directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Collect entries and rewrite the leaderboard page
    Update(EntryArgs),
    /// Fill in the roster interactively, then rewrite the leaderboard page
    Edit,
    /// Print the standings without writing anything
    Rank {
        #[command(flatten)]
        input: EntryArgs,
        /// Print standings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the page HTML to stdout without writing it
    Preview(EntryArgs),
    /// List the configured runners and their default fields
    Roster,
    /// Print a stock leaderboard.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Update(args) => {
            let config = config::load_config(&cli.root)?;
            let entries = collect_entries(&config, &args)?;
            let board = Leaderboard::open(&cli.root, config)?;
            let report = board.update(&entries)?;
            output::print_update_output(&report);
        }
        Command::Edit => {
            let config = config::load_config(&cli.root)?;
            let mut form = Form::from_roster(&config.runners);
            let board = Leaderboard::open(&cli.root, config)?;
            form.prompt(std::io::stdin().lock(), std::io::stdout())?;
            let report = board.update(&form.entries())?;
            println!();
            output::print_update_output(&report);
        }
        Command::Rank { input, json } => {
            let config = config::load_config(&cli.root)?;
            let entries = collect_entries(&config, &input)?;
            let standings = rank::rank_with_policy(&entries, config.malformed_times)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                output::print_standings(&standings);
            }
        }
        Command::Preview(args) => {
            let config = config::load_config(&cli.root)?;
            let entries = collect_entries(&config, &args)?;
            let board = Leaderboard::open(&cli.root, config)?;
            println!("{}", board.preview(&entries)?);
        }
        Command::Roster => {
            let config = config::load_config(&cli.root)?;
            output::print_roster(&config.runners);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Build the entry list: an entries file if given, otherwise the roster with `--set` edits.
fn collect_entries(
    config: &LeaderboardConfig,
    args: &EntryArgs,
) -> Result<Vec<Entry>, Box<dyn std::error::Error>> {
    let mut form = match &args.entries {
        Some(path) => Form::from_entries(read_entries_file(path)?),
        None => Form::from_roster(&config.runners),
    };
    form.apply_all(&args.assignments)?;
    Ok(form.entries())
}

fn read_entries_file(path: &Path) -> Result<Vec<Entry>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<Entry> = serde_json::from_str(&content)?;
    Ok(entries)
}
