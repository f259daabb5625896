use std::io;
use thiserror::Error;

/// The result of evaluating a single guess against the current stage.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum GuessOutcome {
    /// Nothing was entered.
    Empty,
    /// The guess revealed the whole word.
    Solved,
    /// The guess is longer than the word, so it can't be right.
    TooLong,
    /// The guess appears in the word, but the word isn't fully revealed yet.
    Hit,
    /// The guess doesn't appear anywhere in the word.
    NotIncluded,
}

impl GuessOutcome {
    /// Returns `true` iff this outcome solved the current word.
    pub fn is_correct(&self) -> bool {
        *self == GuessOutcome::Solved
    }

    /// Returns `true` iff this outcome costs the player an attempt.
    pub fn counts_as_attempt(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Empty | GuessOutcome::TooLong | GuessOutcome::NotIncluded
        )
    }
}

/// Indicates that an error occurred while loading questions or running the game.
#[derive(Debug, Error)]
pub enum HangmanError {
    /// A question was requested after every question had already been served.
    #[error("no questions remain in the queue")]
    EmptyQueue,
    /// The question source contained no questions at all.
    #[error("the question list is empty")]
    NoQuestions,
    /// The question at the given position in the source has an empty word.
    #[error("question #{index} has an empty word")]
    InvalidQuestion { index: usize },
    /// A stage was started for a question with an empty word.
    #[error("a question has an empty word")]
    EmptyWord,
    /// The game was told the current word was solved when it wasn't.
    #[error("the current word has not been solved")]
    UnsolvedStage,
    /// The question source could not be parsed.
    #[error("malformed question data: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Reading input or writing output failed.
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
}

/// How a finished game went.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct GameSummary {
    /// The number of words the player solved.
    pub solved: usize,
    /// The word of the last stage that was played.
    pub last_word: String,
    /// Whether the game ended because the player ran out of attempts.
    pub exhausted: bool,
}
