use crate::results::HangmanError;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::Deserialize;
use std::io::Read;
use std::rc::Rc;
use tracing::debug;

/// A word to guess, along with the hint shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub word: String,
    pub hint: String,
}

impl Question {
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Question {
        Question {
            word: word.into(),
            hint: hint.into(),
        }
    }
}

/// Contains all the questions for one game.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Rc<Question>>,
}

impl QuestionBank {
    /// Constructs a new `QuestionBank` by reading a JSON array of `{"word", "hint"}` objects from
    /// the given reader.
    ///
    /// Whitespace is removed from each word, and the word is converted to lower case. Fails if the
    /// data is malformed, if any word is empty, or if there are no questions at all.
    pub fn from_reader<R: Read>(question_reader: R) -> Result<Self, HangmanError> {
        let records: Vec<Question> = serde_json::from_reader(question_reader)?;
        Self::from_iterator(records.into_iter().map(|q| (q.word, q.hint)))
    }

    /// Constructs a new `QuestionBank` from the given `(word, hint)` pairs.
    ///
    /// Whitespace is removed from each word, and the word is converted to lower case, matching how
    /// guesses are normalized.
    pub fn from_iterator<W, H>(
        pairs: impl IntoIterator<Item = (W, H)>,
    ) -> Result<Self, HangmanError>
    where
        W: AsRef<str>,
        H: AsRef<str>,
    {
        let questions = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (word, hint))| {
                let word = normalize_word(word.as_ref());
                if word.is_empty() {
                    return Err(HangmanError::InvalidQuestion { index });
                }
                Ok(Rc::new(Question::new(word, hint.as_ref())))
            })
            .collect::<Result<Vec<Rc<Question>>, HangmanError>>()?;
        if questions.is_empty() {
            return Err(HangmanError::NoQuestions);
        }
        debug!(count = questions.len(), "loaded question bank");
        Ok(QuestionBank { questions })
    }

    /// Retrieves the full list of questions, in their original order.
    pub fn questions(&self) -> Vec<Rc<Question>> {
        self.questions.iter().map(Rc::clone).collect()
    }

    /// Returns the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// The questions that have not been served yet in the current game.
///
/// Questions are served in a uniformly random order, and each is served at most once.
pub struct QuestionQueue<R: Rng = ThreadRng> {
    remaining: Vec<Rc<Question>>,
    rng: R,
}

impl QuestionQueue<ThreadRng> {
    /// Creates a queue holding every question in the bank, drawn with the thread-local RNG.
    pub fn new(bank: &QuestionBank) -> QuestionQueue<ThreadRng> {
        QuestionQueue::with_rng(bank.questions(), rand::thread_rng())
    }
}

impl<R: Rng> QuestionQueue<R> {
    /// Creates a queue holding the given questions, drawn with the given RNG.
    pub fn with_rng(questions: Vec<Rc<Question>>, rng: R) -> QuestionQueue<R> {
        QuestionQueue {
            remaining: questions,
            rng,
        }
    }

    /// Returns `true` iff at least one question remains.
    pub fn has_next(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// Returns the number of questions that have not been served yet.
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Removes and returns a random question.
    pub fn take_random(&mut self) -> Result<Rc<Question>, HangmanError> {
        if self.remaining.is_empty() {
            return Err(HangmanError::EmptyQueue);
        }
        let index = self.rng.gen_range(0..self.remaining.len());
        let question = self.remaining.remove(index);
        debug!(
            index,
            remaining = self.remaining.len(),
            "drew question from queue"
        );
        Ok(question)
    }
}
