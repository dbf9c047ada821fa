//! Accommodation calculator: checklist answers in, ordered court
//! accommodation recommendations and a request letter out.

pub mod domain;
mod engine;
mod letter;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerSet, Barrier, ChecklistEntry, ChecklistOptions, DisabilityCategory, FactCollector,
    IncompleteAnswers, ProceedingType, UnknownKey,
};
pub use engine::{evaluate, MatchedRecommendation, RecommendationEngine, RecommendationResult};
pub use letter::{compose, letter_mime, LetterFields, PlaceholderLabels, LETTER_FILENAME};
pub use router::calculator_router;
pub use rules::{Condition, Recommendation, Rule, RuleBook};
