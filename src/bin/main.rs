use autocomplete_core::{AutocompleteError, AutocompleteProvider, Candidate, ProviderConfig};
use clap::Parser;
use crossterm::style::Stylize;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autocomplete")]
#[command(about = "Learn word completions from passages and rank them by frequency")]
struct Cli {
    /// Path to one or more config files (merged in order).
    #[arg(long, action = clap::ArgAction::Append)]
    config: Vec<PathBuf>,

    /// Text file to train on. May be repeated.
    #[arg(long = "train", action = clap::ArgAction::Append)]
    train_files: Vec<PathBuf>,

    /// Literal passage to train on. May be repeated.
    #[arg(long, action = clap::ArgAction::Append)]
    passage: Vec<String>,

    /// Maximum number of candidates per fragment. Overrides the config.
    #[arg(long)]
    limit: Option<usize>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Fragments to complete. Without any, reads fragments from stdin.
    fragments: Vec<String>,
}

fn main() {
    init_logger();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();
}

fn run(cli: Cli) -> Result<(), AutocompleteError> {
    let mut config = ProviderConfig::load_all(&cli.config)?;
    if cli.limit.is_some() {
        config.limit = cli.limit;
    }

    let mut provider = AutocompleteProvider::with_config(&config);
    for path in config.passages.iter().chain(&cli.train_files) {
        provider.train_file(path)?;
    }
    for passage in &cli.passage {
        provider.train(passage);
    }

    if cli.fragments.is_empty() {
        return interactive(&mut provider, cli.json);
    }

    for fragment in &cli.fragments {
        print_candidates(fragment, &provider.get_words(fragment), cli.json)?;
    }
    Ok(())
}

/// Reads one fragment per line. `:train <text>` trains on the rest of the
/// line, `exit` quits.
fn interactive(
    provider: &mut AutocompleteProvider,
    json: bool,
) -> Result<(), AutocompleteError> {
    println!("{}", "Passage autocomplete. ':train <text>' to learn, 'exit' to quit.".bold());
    println!("---------------------------------------------------------------");
    prompt()?;

    for line in stdin().lock().lines() {
        let input = line?;
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => {}
            s => match train_command(s) {
                Some(passage) => {
                    let report = provider.train(passage);
                    println!(
                        "{}",
                        format!("learned {} tokens ({} new words)", report.tokens, report.new_words)
                            .green()
                    );
                }
                None => print_candidates(s, &provider.get_words(s), json)?,
            },
        }
        prompt()?;
    }
    Ok(())
}

/// The passage following a `:train` command, or `None` if `cmd` is not one.
fn train_command(cmd: &str) -> Option<&str> {
    match cmd.strip_prefix(":train") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => Some(rest),
        _ => None,
    }
}

fn prompt() -> Result<(), AutocompleteError> {
    print!("\n> ");
    stdout().flush()?;
    Ok(())
}

fn print_candidates(
    fragment: &str,
    candidates: &[Candidate],
    json: bool,
) -> Result<(), AutocompleteError> {
    if json {
        println!("{}", serde_json::to_string(candidates)?);
        return Ok(());
    }

    if candidates.is_empty() {
        println!("{} {}", fragment.bold(), "no suggestions".dark_grey());
        return Ok(());
    }

    println!("{}", fragment.bold());
    for (i, candidate) in candidates.iter().enumerate() {
        println!("  {}: {}", i + 1, candidate.to_string().cyan());
    }
    Ok(())
}
