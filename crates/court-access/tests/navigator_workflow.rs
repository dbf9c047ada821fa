use std::collections::HashSet;

use court_access::tools::navigator::{
    DecisionGraph, NavigatorError, NavigatorState, Severity, Step, START_NODE,
};

#[test]
fn authored_graph_passes_audit() {
    let graph = DecisionGraph::standard();
    let audit = graph.audit();
    assert!(audit.is_clean(), "graph defects: {:?}", audit.defects);
    assert_eq!(audit.nodes, graph.nodes().len());
    assert_eq!(graph.start(), START_NODE);
}

/// Walks every reachable branch, checking that each move extends the path by
/// one valid edge and that `back` undoes it.
#[test]
fn every_branch_keeps_the_path_on_graph_edges() {
    let graph = DecisionGraph::standard();
    let mut pending = vec![NavigatorState::new(&graph)];
    let mut expanded = HashSet::new();
    let mut outcomes = Vec::new();

    while let Some(state) = pending.pop() {
        let node = state.current_node(&graph).expect("path ends on a node");
        if !expanded.insert(node.id) {
            continue;
        }

        for index in 0..node.options.len() {
            let mut next = state.clone();
            match next.advance(&graph, index).expect("option in range") {
                Step::Moved(target) => {
                    assert_eq!(next.depth(), state.depth() + 1);
                    assert!(graph.has_edge(node.id, target.id));
                    let rebuilt = NavigatorState::from_path(&graph, next.path().to_vec())
                        .expect("walked path is valid");
                    assert_eq!(rebuilt, next);

                    let mut undone = next.clone();
                    assert!(undone.back());
                    assert_eq!(undone, state);
                    undone.advance(&graph, index).expect("same option again");
                    assert_eq!(undone, next, "back then the same choice restores the path");
                    pending.push(next);
                }
                Step::Terminal(outcome) => {
                    assert_eq!(next, state, "terminal options leave the path alone");
                    assert!(!outcome.next_steps.is_empty());
                    outcomes.push(outcome.severity);
                }
            }
        }
    }

    assert_eq!(expanded.len(), graph.nodes().len());
    assert!(outcomes.contains(&Severity::Success));
    assert!(outcomes.contains(&Severity::Warning));
    assert!(outcomes.contains(&Severity::Error));
}

#[test]
fn denial_without_discussion_leads_back_into_the_interactive_process() {
    let graph = DecisionGraph::standard();
    let mut state = NavigatorState::new(&graph);

    state.advance(&graph, 0).expect("request made");
    state.advance(&graph, 2).expect("denied without discussion");
    state.advance(&graph, 0).expect("efficiency concern");
    state.advance(&graph, 0).expect("no alternative offered");
    state.advance(&graph, 0).expect("back into interactive process");

    assert_eq!(
        state.path(),
        [
            "start",
            "request-made",
            "no-interactive",
            "efficiency-concern",
            "no-alternative",
            "interactive-yes",
        ]
    );

    state.reset();
    assert_eq!(state.path(), ["start"]);
    assert!(!state.back(), "back at the start is a no-op");
}

#[test]
fn rejects_paths_that_skip_edges() {
    let graph = DecisionGraph::standard();
    let err = NavigatorState::from_path(
        &graph,
        vec!["start".to_string(), "efficiency-concern".to_string()],
    )
    .expect_err("no direct edge");
    assert!(matches!(err, NavigatorError::NotAnEdge { .. }));
}
