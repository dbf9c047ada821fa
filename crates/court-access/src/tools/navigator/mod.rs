//! Scripted decision navigator over an authored question graph.

pub mod domain;
mod graph;
mod state;

pub use domain::{DecisionNode, NavigatorError, NodeOption, OptionTarget, Outcome, Severity};
pub use graph::{DecisionGraph, GraphAudit, GraphDefect, START_NODE};
pub use state::{NavigatorState, NavigatorView, Step, DEFAULT_PROGRESS_STEPS};
