use crate::data::Question;
use crate::results::HangmanError;
use std::rc::Rc;

/// The number of failed guesses a player may make on each word.
pub const MAX_ATTEMPTS: u32 = 5;

/// The character shown in place of each letter that has not been revealed.
pub const MASK_PLACEHOLDER: char = '_';

/// The guessing state for a single question.
///
/// Lengths are measured in characters, so the mask always has exactly one slot per character of
/// the word.
#[derive(Debug, Clone)]
pub struct Stage {
    question: Rc<Question>,
    word: Vec<char>,
    mask: Vec<char>,
    attempts_remaining: u32,
}

impl Stage {
    /// Starts a new stage for the given question, with every letter hidden.
    pub fn new(question: Rc<Question>) -> Result<Stage, HangmanError> {
        let word: Vec<char> = question.word.chars().collect();
        if word.is_empty() {
            return Err(HangmanError::EmptyWord);
        }
        Ok(Stage {
            mask: vec![MASK_PLACEHOLDER; word.len()],
            word,
            question,
            attempts_remaining: MAX_ATTEMPTS,
        })
    }

    pub fn question(&self) -> &Rc<Question> {
        &self.question
    }

    pub fn word(&self) -> &str {
        &self.question.word
    }

    pub fn hint(&self) -> &str {
        &self.question.hint
    }

    /// Returns the word as revealed so far.
    pub fn mask(&self) -> String {
        self.mask.iter().collect()
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Uses up one attempt, and returns the number left. Never goes below zero.
    pub fn decrement_attempts(&mut self) -> u32 {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.attempts_remaining
    }

    /// Reveals every occurrence of `user_input` in the word, including overlapping ones.
    ///
    /// The input is matched as literal text.
    pub fn reveal_at(&mut self, user_input: &str) {
        let guess: Vec<char> = user_input.chars().collect();
        if guess.is_empty() || guess.len() > self.word.len() {
            return;
        }
        for start in 0..=(self.word.len() - guess.len()) {
            if self.word[start..start + guess.len()] == guess[..] {
                self.mask[start..start + guess.len()].copy_from_slice(&guess);
            }
        }
    }

    /// Returns `true` iff the input has more characters than the word.
    pub fn is_too_long(&self, user_input: &str) -> bool {
        user_input.chars().count() > self.word.len()
    }

    /// Returns `true` iff the input appears anywhere in the word.
    pub fn is_substring(&self, user_input: &str) -> bool {
        self.question.word.contains(user_input)
    }

    /// Returns `true` iff every letter of the word has been revealed.
    pub fn is_solved(&self) -> bool {
        self.mask == self.word
    }

    /// Returns `true` iff the player has no attempts left on this word.
    pub fn is_exhausted(&self) -> bool {
        self.attempts_remaining == 0
    }
}
