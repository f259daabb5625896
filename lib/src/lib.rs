//! The engine for a console word-guessing game.
//!
//! The player is shown a hint and a masked word, and guesses the word or pieces of it. Each
//! wrong guess costs one of a fixed number of attempts. Guessing a piece of the word reveals it
//! for free, and solving the word moves on to the next question. The game ends when the
//! attempts run out or every question has been solved.

mod data;
mod engine;
mod results;
mod stage;

pub use data::Question;
pub use data::QuestionBank;
pub use data::QuestionQueue;
pub use engine::*;
pub use results::*;
pub use stage::*;
