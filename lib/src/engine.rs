use crate::data::QuestionQueue;
use crate::results::*;
use crate::stage::Stage;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::fmt;
use std::io;
use tracing::{debug, info};

/// How a message should be emphasized when shown to the player.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Style {
    Neutral,
    Warn,
    Success,
}

/// Everything the game needs from the outside world to talk to the player.
pub trait Presenter {
    /// Blocks until the player submits a guess. The guess is already normalized.
    fn request_guess(&mut self) -> io::Result<String>;

    /// Shows a title in large text.
    fn show_banner(&mut self, title: &str) -> io::Result<()>;

    /// Shows the hint, the word as revealed so far, and the attempts left.
    fn show_prompt(&mut self, hint: &str, mask: &str, attempts_remaining: u32) -> io::Result<()>;

    fn show_message(&mut self, text: &str, style: Style) -> io::Result<()>;

    fn clear_display(&mut self) -> io::Result<()>;

    /// Releases any input or output resources. Called exactly once, when the game stops.
    fn close(&mut self) -> io::Result<()>;
}

/// A message shown to the player during the game.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Message<'a> {
    Start,
    RemainingQuestions(usize),
    EnterSomething,
    NotIncluded(&'a str),
    NotCorrect(&'a str),
    Hit(&'a str),
    Correct(&'a str),
    GameOver(&'a str),
    End,
}

impl Message<'_> {
    pub fn style(&self) -> Style {
        match self {
            Message::Start | Message::End => Style::Neutral,
            Message::RemainingQuestions(_) => Style::Neutral,
            Message::EnterSomething
            | Message::NotIncluded(_)
            | Message::NotCorrect(_)
            | Message::GameOver(_) => Style::Warn,
            Message::Hit(_) | Message::Correct(_) => Style::Success,
        }
    }

    fn show<P: Presenter + ?Sized>(&self, presenter: &mut P) -> io::Result<()> {
        presenter.show_message(&self.to_string(), self.style())
    }
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Start => write!(f, "Hangman Game"),
            Message::RemainingQuestions(count) => write!(f, "Questions left: {}", count),
            Message::EnterSomething => write!(f, "Please enter something."),
            Message::NotIncluded(guess) => write!(f, "\"{}\" is not in the word.", guess),
            Message::NotCorrect(guess) => write!(f, "\"{}\" is not the answer.", guess),
            Message::Hit(guess) => write!(f, "\"{}\" is in the word!", guess),
            Message::Correct(word) => write!(f, "\"{}\" is correct!", word),
            Message::GameOver(word) => write!(f, "The answer was \"{}\".", word),
            Message::End => write!(f, "Thanks for playing!"),
        }
    }
}

/// The state of the game after a turn.
#[derive(Debug, Clone, Copy)]
pub enum GameState<'a> {
    /// The game continues with the given stage.
    InProgress(&'a Stage),
    /// The game is over. The given stage is the last one that was played.
    Finished(&'a Stage),
}

impl<'a> GameState<'a> {
    pub fn stage(&self) -> &'a Stage {
        match self {
            GameState::InProgress(stage) | GameState::Finished(stage) => stage,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, GameState::Finished(_))
    }
}

/// Runs a game: owns the queue of questions and the stage currently being played.
pub struct GameController<R: Rng = ThreadRng> {
    queue: QuestionQueue<R>,
    stage: Stage,
    solved: usize,
}

impl<R: Rng> GameController<R> {
    /// Starts a game by drawing the first question from the queue.
    pub fn new(mut queue: QuestionQueue<R>) -> Result<GameController<R>, HangmanError> {
        let stage = Stage::new(queue.take_random()?)?;
        Ok(GameController {
            queue,
            stage,
            solved: 0,
        })
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn queue(&self) -> &QuestionQueue<R> {
        &self.queue
    }

    /// Returns the number of words solved so far.
    pub fn solved(&self) -> usize {
        self.solved
    }

    /// Returns `true` iff the game is over: either the player ran out of attempts, or they solved
    /// the last question.
    pub fn should_end(&self) -> bool {
        self.stage.is_exhausted() || (!self.queue.has_next() && self.stage.is_solved())
    }

    /// Judges a guess against the current stage, revealing any letters it matches.
    pub fn evaluate(&mut self, guess: &str) -> GuessOutcome {
        if guess.is_empty() {
            return GuessOutcome::Empty;
        }
        self.stage.reveal_at(guess);
        if self.stage.is_solved() {
            return GuessOutcome::Solved;
        }
        if self.stage.is_too_long(guess) {
            return GuessOutcome::TooLong;
        }
        if self.stage.is_substring(guess) {
            return GuessOutcome::Hit;
        }
        GuessOutcome::NotIncluded
    }

    /// Moves the game forward after a guess.
    ///
    /// A wrong guess costs an attempt. A correct guess moves on to a new question, unless the
    /// game is already over. Running out of attempts ends the whole game, even if questions
    /// remain.
    ///
    /// Fails with `UnsolvedStage` if `was_correct` is given while the current word is still
    /// masked.
    pub fn advance(&mut self, was_correct: bool) -> Result<GameState<'_>, HangmanError> {
        if was_correct && !self.stage.is_solved() {
            return Err(HangmanError::UnsolvedStage);
        }
        if was_correct {
            self.solved += 1;
        } else {
            let left = self.stage.decrement_attempts();
            debug!(attempts_remaining = left, "used an attempt");
        }

        if self.should_end() {
            info!(
                solved = self.solved,
                exhausted = self.stage.is_exhausted(),
                "game finished"
            );
            return Ok(GameState::Finished(&self.stage));
        }

        if was_correct {
            self.stage = Stage::new(self.queue.take_random()?)?;
            debug!(
                word_len = self.stage.word().chars().count(),
                remaining = self.queue.remaining_count(),
                "started new stage"
            );
        }
        Ok(GameState::InProgress(&self.stage))
    }

    /// Evaluates a guess and advances the game accordingly.
    ///
    /// A partial hit leaves the game where it is, without costing an attempt.
    pub fn submit_guess(
        &mut self,
        guess: &str,
    ) -> Result<(GuessOutcome, GameState<'_>), HangmanError> {
        let outcome = self.evaluate(guess);
        debug!(guess, ?outcome, "evaluated guess");
        if outcome == GuessOutcome::Hit {
            return Ok((outcome, GameState::InProgress(&self.stage)));
        }
        let state = self.advance(outcome.is_correct())?;
        Ok((outcome, state))
    }

    /// Plays the game to the end, talking to the player through the given presenter.
    ///
    /// The presenter is closed before returning, whether or not the game completed.
    pub fn play<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> Result<GameSummary, HangmanError> {
        let played = self.run(presenter);
        let closed = presenter.close();
        let summary = played?;
        closed?;
        Ok(summary)
    }

    fn run<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> Result<GameSummary, HangmanError> {
        presenter.clear_display()?;
        presenter.show_banner(&Message::Start.to_string())?;

        loop {
            Message::RemainingQuestions(self.queue.remaining_count()).show(presenter)?;
            presenter.show_prompt(
                self.stage.hint(),
                &self.stage.mask(),
                self.stage.attempts_remaining(),
            )?;

            let guess = presenter.request_guess()?;
            let word = self.stage.question().clone();
            let (outcome, state) = self.submit_guess(&guess)?;
            let done = state.is_done();

            match outcome {
                GuessOutcome::Empty => Message::EnterSomething,
                GuessOutcome::Solved => Message::Correct(&word.word),
                GuessOutcome::TooLong => Message::NotCorrect(&guess),
                GuessOutcome::Hit => Message::Hit(&guess),
                GuessOutcome::NotIncluded => Message::NotIncluded(&guess),
            }
            .show(presenter)?;

            if done {
                break;
            }
        }

        let exhausted = self.stage.is_exhausted();
        if exhausted {
            Message::GameOver(self.stage.word()).show(presenter)?;
        }
        Message::End.show(presenter)?;

        Ok(GameSummary {
            solved: self.solved,
            last_word: self.stage.word().to_string(),
            exhausted,
        })
    }
}
