use super::domain::{DecisionNode, NavigatorError, OptionTarget, Outcome};
use super::graph::DecisionGraph;
use serde::Serialize;
use tracing::debug;

/// Denominator of the progress bar. A display heuristic, not a depth bound.
pub const DEFAULT_PROGRESS_STEPS: usize = 10;

/// Result of choosing an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'g> {
    Moved(&'g DecisionNode),
    Terminal(&'g Outcome),
}

/// Path of visited node ids. Always non-empty and always rooted at the
/// graph's start node; the current node is the last element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigatorState {
    path: Vec<String>,
}

impl NavigatorState {
    pub fn new(graph: &DecisionGraph) -> Self {
        Self {
            path: vec![graph.start().to_string()],
        }
    }

    /// Rebuilds a state from a previously emitted path, checking every hop
    /// against the graph.
    pub fn from_path(graph: &DecisionGraph, path: Vec<String>) -> Result<Self, NavigatorError> {
        let first = path.first().ok_or(NavigatorError::EmptyPath)?;
        if first != graph.start() {
            return Err(NavigatorError::InvalidStart {
                expected: graph.start().to_string(),
                found: first.clone(),
            });
        }
        for id in &path {
            if graph.node(id).is_none() {
                return Err(NavigatorError::UnknownNode(id.clone()));
            }
        }
        for hop in path.windows(2) {
            if !graph.has_edge(&hop[0], &hop[1]) {
                return Err(NavigatorError::NotAnEdge {
                    from: hop[0].clone(),
                    to: hop[1].clone(),
                });
            }
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn current(&self) -> &str {
        // `path` is never empty.
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.path.len() > 1
    }

    pub fn current_node<'g>(&self, graph: &'g DecisionGraph) -> Result<&'g DecisionNode, NavigatorError> {
        graph
            .node(self.current())
            .ok_or_else(|| NavigatorError::UnknownNode(self.current().to_string()))
    }

    /// Chooses option `option_index` on the current node. Moving to another
    /// node extends the path; a terminal choice leaves the path untouched.
    pub fn advance<'g>(
        &mut self,
        graph: &'g DecisionGraph,
        option_index: usize,
    ) -> Result<Step<'g>, NavigatorError> {
        let node = self.current_node(graph)?;
        let option = node
            .options
            .get(option_index)
            .ok_or_else(|| NavigatorError::OptionOutOfRange {
                node: node.id.to_string(),
                index: option_index,
                available: node.options.len(),
            })?;

        match &option.target {
            OptionTarget::Next(next_id) => {
                let next = graph
                    .node(next_id)
                    .ok_or_else(|| NavigatorError::UnknownNode(next_id.to_string()))?;
                self.path.push(next.id.to_string());
                debug!(from = node.id, to = next.id, depth = self.path.len(), "navigator advanced");
                Ok(Step::Moved(next))
            }
            OptionTarget::Outcome(outcome) => {
                debug!(node = node.id, outcome = outcome.title, "navigator reached outcome");
                Ok(Step::Terminal(outcome))
            }
        }
    }

    /// Steps back one node. Returns `false` when already at the start.
    pub fn back(&mut self) -> bool {
        if self.path.len() > 1 {
            self.path.pop();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.path.truncate(1);
    }

    pub fn progress_percent(&self, steps: usize) -> u8 {
        let steps = steps.max(1);
        let taken = self.path.len().min(steps);
        ((taken * 100) / steps) as u8
    }
}

/// Everything a renderer needs after a navigator transition.
#[derive(Debug, Clone, Serialize)]
pub struct NavigatorView {
    pub node: DecisionNode,
    pub path: Vec<String>,
    pub depth: usize,
    pub progress_percent: u8,
    pub can_go_back: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl NavigatorView {
    pub fn build(
        graph: &DecisionGraph,
        state: &NavigatorState,
        outcome: Option<&Outcome>,
        progress_steps: usize,
    ) -> Result<Self, NavigatorError> {
        let node = state.current_node(graph)?;
        Ok(Self {
            node: node.clone(),
            path: state.path().to_vec(),
            depth: state.depth(),
            progress_percent: state.progress_percent(progress_steps),
            can_go_back: state.can_go_back(),
            outcome: outcome.cloned(),
        })
    }
}
