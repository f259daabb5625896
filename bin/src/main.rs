use anyhow::{Context, Result};
use clap::Parser;
use rs_hangman::*;
use std::env;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::{TerminalConfig, TerminalPresenter};

/// The questions played when no question file is given.
const DEFAULT_QUESTIONS: &str = include_str!("../data/questions.json");

/// A console word-guessing game. Guess the hidden word from its hint before you run out of
/// attempts.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a JSON file containing a list of `{"word": ..., "hint": ...}` objects. If not given,
    /// a built-in list of questions is used.
    #[arg(short = 'q', long)]
    questions: Option<PathBuf>,

    /// Disables colored output. Color is also disabled when `NO_COLOR` is set.
    #[arg(long)]
    no_color: bool,

    /// Increases log verbosity. Logs are written to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let bank = load_questions(args.questions.as_deref())?;
    info!(count = bank.len(), "loaded questions");

    let config = TerminalConfig {
        input: Box::new(io::stdin().lock()),
        output: Box::new(io::stdout()),
        color: !args.no_color && env::var_os("NO_COLOR").is_none(),
    };
    let mut presenter = TerminalPresenter::new(config);
    let mut game = GameController::new(QuestionQueue::new(&bank))?;

    let summary = game.play(&mut presenter)?;
    info!(
        solved = summary.solved,
        exhausted = summary.exhausted,
        last_word = %summary.last_word,
        "game over"
    );

    Ok(())
}

fn load_questions(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open question file {}", path.display()))?;
            QuestionBank::from_reader(io::BufReader::new(file))
                .with_context(|| format!("could not load questions from {}", path.display()))
        }
        None => QuestionBank::from_reader(DEFAULT_QUESTIONS.as_bytes())
            .context("built-in questions are invalid"),
    }
}
