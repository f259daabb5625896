#[macro_use]
extern crate assert_matches;

use rs_hangman::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::io;

/// Replays a fixed list of guesses, and records everything shown to the player.
#[derive(Default)]
struct ScriptedPresenter {
    guesses: VecDeque<String>,
    messages: Vec<(String, Style)>,
    prompts: Vec<(String, String, u32)>,
    banners: Vec<String>,
    clears: usize,
    closes: usize,
}

impl ScriptedPresenter {
    fn new(guesses: &[&str]) -> ScriptedPresenter {
        ScriptedPresenter {
            guesses: guesses.iter().map(|guess| guess.to_string()).collect(),
            ..Default::default()
        }
    }

    fn message_texts(&self) -> Vec<&str> {
        self.messages.iter().map(|(text, _)| text.as_str()).collect()
    }
}

impl Presenter for ScriptedPresenter {
    fn request_guess(&mut self) -> io::Result<String> {
        self.guesses
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "out of guesses"))
    }

    fn show_banner(&mut self, title: &str) -> io::Result<()> {
        self.banners.push(title.to_string());
        Ok(())
    }

    fn show_prompt(&mut self, hint: &str, mask: &str, attempts_remaining: u32) -> io::Result<()> {
        self.prompts
            .push((hint.to_string(), mask.to_string(), attempts_remaining));
        Ok(())
    }

    fn show_message(&mut self, text: &str, style: Style) -> io::Result<()> {
        self.messages.push((text.to_string(), style));
        Ok(())
    }

    fn clear_display(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closes += 1;
        Ok(())
    }
}

fn create_game(pairs: Vec<(&str, &str)>) -> GameController<StdRng> {
    let bank = QuestionBank::from_iterator(pairs).unwrap();
    GameController::new(QuestionQueue::with_rng(
        bank.questions(),
        StdRng::seed_from_u64(11),
    ))
    .unwrap()
}

#[test]
fn submit_guess_cat_scenario() -> Result<(), HangmanError> {
    let mut game = create_game(vec![("cat", "animal")]);

    let (outcome, state) = game.submit_guess("dog")?;
    assert_eq!(outcome, GuessOutcome::NotIncluded);
    assert_eq!(state.stage().attempts_remaining(), 4);

    let (outcome, state) = game.submit_guess("cats")?;
    assert_eq!(outcome, GuessOutcome::TooLong);
    assert_eq!(state.stage().attempts_remaining(), 3);

    let (outcome, state) = game.submit_guess("at")?;
    assert_eq!(outcome, GuessOutcome::Hit);
    assert_eq!(state.stage().mask(), "_at");
    assert_eq!(state.stage().attempts_remaining(), 3);
    assert!(!state.is_done());

    let (outcome, state) = game.submit_guess("cat")?;
    assert_eq!(outcome, GuessOutcome::Solved);
    assert!(state.is_done());
    assert!(state.stage().is_solved());
    Ok(())
}

#[test]
fn submit_guess_empty_costs_attempt() -> Result<(), HangmanError> {
    let mut game = create_game(vec![("cat", "animal")]);

    let (outcome, state) = game.submit_guess("")?;

    assert_eq!(outcome, GuessOutcome::Empty);
    assert_eq!(state.stage().attempts_remaining(), MAX_ATTEMPTS - 1);
    assert_eq!(state.stage().mask(), "___");
    Ok(())
}

#[test]
fn solving_draws_fresh_stage() -> Result<(), HangmanError> {
    let mut game = create_game(vec![("cat", "animal"), ("hangman", "game")]);
    let first = game.stage().word().to_string();
    game.submit_guess("zz")?;

    let (outcome, state) = game.submit_guess(&first)?;

    assert_eq!(outcome, GuessOutcome::Solved);
    assert_matches!(state, GameState::InProgress(_));
    let stage = state.stage();
    assert_ne!(stage.word(), first);
    assert_eq!(stage.mask().chars().count(), stage.word().chars().count());
    assert_eq!(stage.attempts_remaining(), MAX_ATTEMPTS);
    assert!(!game.queue().has_next());
    assert_eq!(game.solved(), 1);
    Ok(())
}

#[test]
fn exhausting_attempts_ends_game() -> Result<(), HangmanError> {
    let mut game = create_game(vec![("cat", "animal"), ("dog", "animal")]);

    for _ in 1..MAX_ATTEMPTS {
        let (_, state) = game.submit_guess("x")?;
        assert!(!state.is_done());
    }
    let (_, state) = game.submit_guess("x")?;

    assert_matches!(state, GameState::Finished(_));
    assert!(game.should_end());
    assert!(game.queue().has_next());
    Ok(())
}

#[test]
fn play_single_question_lost() -> Result<(), HangmanError> {
    let mut game = create_game(vec![("cat", "animal")]);
    let mut presenter = ScriptedPresenter::new(&["x", "", "y", "z", "w"]);

    let summary = game.play(&mut presenter)?;

    assert_eq!(
        summary,
        GameSummary {
            solved: 0,
            last_word: "cat".to_string(),
            exhausted: true,
        }
    );
    assert_eq!(presenter.clears, 1);
    assert_eq!(presenter.closes, 1);
    assert_eq!(presenter.banners, vec!["Hangman Game"]);
    assert_eq!(
        presenter
            .prompts
            .iter()
            .map(|(_, _, attempts)| *attempts)
            .collect::<Vec<_>>(),
        vec![5, 4, 3, 2, 1]
    );
    let texts = presenter.message_texts();
    assert_eq!(texts[texts.len() - 2], "The answer was \"cat\".");
    assert_eq!(texts[texts.len() - 1], "Thanks for playing!");
    assert!(texts.contains(&"Please enter something."));
    Ok(())
}

#[test]
fn play_all_questions_won() -> Result<(), HangmanError> {
    let mut game = create_game(vec![("cat", "animal")]);
    let mut presenter = ScriptedPresenter::new(&["dog", "cats", "at", "cat"]);

    let summary = game.play(&mut presenter)?;

    assert!(!summary.exhausted);
    assert_eq!(summary.solved, 1);
    assert_eq!(
        presenter.prompts,
        vec![
            ("animal".to_string(), "___".to_string(), 5),
            ("animal".to_string(), "___".to_string(), 4),
            ("animal".to_string(), "___".to_string(), 3),
            ("animal".to_string(), "_at".to_string(), 3),
        ]
    );
    assert_eq!(
        presenter.messages,
        vec![
            ("Questions left: 0".to_string(), Style::Neutral),
            ("\"dog\" is not in the word.".to_string(), Style::Warn),
            ("Questions left: 0".to_string(), Style::Neutral),
            ("\"cats\" is not the answer.".to_string(), Style::Warn),
            ("Questions left: 0".to_string(), Style::Neutral),
            ("\"at\" is in the word!".to_string(), Style::Success),
            ("Questions left: 0".to_string(), Style::Neutral),
            ("\"cat\" is correct!".to_string(), Style::Success),
            ("Thanks for playing!".to_string(), Style::Neutral),
        ]
    );
    Ok(())
}

#[test]
fn play_closes_presenter_on_io_failure() {
    let mut game = create_game(vec![("cat", "animal")]);
    let mut presenter = ScriptedPresenter::new(&["x"]);

    assert_matches!(game.play(&mut presenter), Err(HangmanError::Io(_)));
    assert_eq!(presenter.closes, 1);
}
