use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Terminal leaf of the navigator carrying guidance for the attorney.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
    pub legal_basis: &'static str,
    pub next_steps: Vec<&'static str>,
}

/// Where an option leads. An option always leads somewhere: another node or
/// a terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionTarget {
    Next(&'static str),
    Outcome(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeOption {
    pub text: &'static str,
    pub target: OptionTarget,
}

impl NodeOption {
    pub fn next_id(&self) -> Option<&'static str> {
        match &self.target {
            OptionTarget::Next(id) => Some(*id),
            OptionTarget::Outcome(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.target {
            OptionTarget::Next(_) => None,
            OptionTarget::Outcome(outcome) => Some(outcome),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionNode {
    pub id: &'static str,
    pub question: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<&'static str>,
    pub options: Vec<NodeOption>,
}

/// Failures raised by navigator transitions. None of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigatorError {
    #[error("node '{node}' has no option {index} (available: {available})")]
    OptionOutOfRange {
        node: String,
        index: usize,
        available: usize,
    },
    #[error("node '{0}' does not exist in the decision graph")]
    UnknownNode(String),
    #[error("navigator path cannot be empty")]
    EmptyPath,
    #[error("navigator path must begin at '{expected}', found '{found}'")]
    InvalidStart { expected: String, found: String },
    #[error("no option on '{from}' leads to '{to}'")]
    NotAnEdge { from: String, to: String },
}
