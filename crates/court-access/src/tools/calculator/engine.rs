use super::domain::AnswerSet;
use super::rules::{Recommendation, Rule, RuleBook};
use serde::Serialize;
use tracing::debug;

/// Payload of a matched rule, tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedRecommendation {
    pub rule_key: &'static str,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

/// Matched recommendations in rule-table order. Empty is a valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub recommendations: Vec<MatchedRecommendation>,
}

impl RecommendationResult {
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.recommendations
            .iter()
            .map(|matched| matched.recommendation.title)
            .collect()
    }

    pub fn contains_rule(&self, rule_key: &str) -> bool {
        self.recommendations
            .iter()
            .any(|matched| matched.rule_key == rule_key)
    }
}

/// Evaluates every rule once, keeping the payloads whose predicate holds.
pub fn evaluate(answers: &AnswerSet, rules: &[Rule]) -> RecommendationResult {
    let recommendations: Vec<MatchedRecommendation> = rules
        .iter()
        .filter(|rule| rule.matches(answers))
        .map(|rule| MatchedRecommendation {
            rule_key: rule.key,
            recommendation: rule.recommendation.clone(),
        })
        .collect();

    debug!(
        category = answers.category.key(),
        evaluated = rules.len(),
        matched = recommendations.len(),
        "accommodation rules evaluated"
    );

    RecommendationResult { recommendations }
}

/// Stateless evaluator bound to a rule book.
pub struct RecommendationEngine {
    rules: RuleBook,
}

impl RecommendationEngine {
    pub fn new(rules: RuleBook) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(RuleBook::standard())
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> RecommendationResult {
        evaluate(answers, self.rules.rules())
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::standard()
    }
}
