use super::bank::{QuestionBank, QuizQuestion};
use serde::Serialize;
use tracing::debug;

/// Per-visitor quiz progress.
///
/// `select` is ignored once the current answer has been revealed, and
/// `submit` scores at most once per question, so the score can never be
/// revised after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSession {
    current_index: usize,
    selected: Option<usize>,
    revealed: bool,
    score: usize,
    complete: bool,
    total: usize,
}

impl QuizSession {
    pub fn new(total: usize) -> Self {
        Self {
            current_index: 0,
            selected: None,
            revealed: false,
            score: 0,
            complete: false,
            total,
        }
    }

    pub fn for_bank(bank: &QuestionBank) -> Self {
        Self::new(bank.len())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Records a pending choice. Returns whether the selection was accepted.
    pub fn select(&mut self, question: &QuizQuestion, option: usize) -> bool {
        if self.revealed || self.complete || option >= question.options.len() {
            return false;
        }
        self.selected = Some(option);
        true
    }

    /// Reveals the answer and scores the pending selection. Returns whether
    /// the selection was correct; `None` when there was nothing to submit.
    pub fn submit(&mut self, question: &QuizQuestion) -> Option<bool> {
        if self.revealed || self.complete {
            return None;
        }
        let selected = self.selected?;
        let correct = question.is_correct(selected);
        self.revealed = true;
        if correct {
            self.score += 1;
        }
        debug!(question = question.id, selected, correct, score = self.score, "quiz answer submitted");
        Some(correct)
    }

    pub fn advance(&mut self) {
        if self.complete {
            return;
        }
        if self.current_index + 1 >= self.total {
            self.complete = true;
            debug!(score = self.score, total = self.total, "quiz complete");
            return;
        }
        self.current_index += 1;
        self.selected = None;
        self.revealed = false;
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.total);
    }

    /// Whole-number percentage of questions answered correctly.
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.score * 100) / self.total) as u8
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::for_percentage(self.percentage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Proficient,
    NeedsReview,
}

impl ScoreBand {
    pub const fn for_percentage(percentage: u8) -> Self {
        if percentage >= 80 {
            Self::Excellent
        } else if percentage >= 60 {
            Self::Proficient
        } else {
            Self::NeedsReview
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! You have a strong grasp of court accommodation law.",
            Self::Proficient => "Good work. Review the explanations for the questions you missed.",
            Self::NeedsReview => "Keep learning. Review the explanations and try again.",
        }
    }
}

/// Answer key details shown once the current question has been revealed.
#[derive(Debug, Clone, Serialize)]
pub struct RevealedAnswer {
    pub correct_index: usize,
    pub was_correct: bool,
    pub explanation: &'static str,
    pub citation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
    pub band: ScoreBand,
    pub band_label: &'static str,
}

/// Everything a renderer needs after a quiz transition. Once complete only
/// the summary is meaningful.
#[derive(Debug, Clone, Serialize)]
pub struct QuizView {
    pub session: QuizSession,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuizQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed: Option<RevealedAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<QuizSummary>,
}

impl QuizView {
    pub fn build(bank: &QuestionBank, session: &QuizSession) -> Self {
        if session.is_complete() {
            return Self {
                session: session.clone(),
                question: None,
                revealed: None,
                summary: Some(QuizSummary {
                    score: session.score(),
                    total: session.total(),
                    percentage: session.percentage(),
                    band: session.score_band(),
                    band_label: session.score_band().label(),
                }),
            };
        }

        let question = bank.get(session.current_index());
        let revealed = match (question, session.revealed(), session.selected()) {
            (Some(question), true, Some(selected)) => Some(RevealedAnswer {
                correct_index: question.correct_index,
                was_correct: question.is_correct(selected),
                explanation: question.explanation,
                citation: question.citation,
            }),
            _ => None,
        };

        Self {
            session: session.clone(),
            question: question.cloned(),
            revealed,
            summary: None,
        }
    }
}
