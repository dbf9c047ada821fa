//! Multiple-choice quiz with locked-in scoring.

mod bank;
mod session;

pub use bank::{QuestionBank, QuizQuestion};
pub use session::{QuizSession, QuizSummary, QuizView, RevealedAnswer, ScoreBand};
