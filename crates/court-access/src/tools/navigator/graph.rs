use super::domain::{DecisionNode, NodeOption, OptionTarget, Outcome, Severity};
use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};

pub const START_NODE: &str = "start";

/// Authored question graph. Never mutated after construction.
#[derive(Debug)]
pub struct DecisionGraph {
    start: &'static str,
    nodes: Vec<DecisionNode>,
}

impl DecisionGraph {
    pub fn standard() -> Self {
        Self {
            start: START_NODE,
            nodes: standard_nodes(),
        }
    }

    pub fn new(start: &'static str, nodes: Vec<DecisionNode>) -> Self {
        Self { start, nodes }
    }

    pub fn start(&self) -> &'static str {
        self.start
    }

    pub fn node(&self, id: &str) -> Option<&DecisionNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn nodes(&self) -> &[DecisionNode] {
        &self.nodes
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.node(from)
            .map(|node| node.options.iter().any(|option| option.next_id() == Some(to)))
            .unwrap_or(false)
    }

    /// Reports authoring defects: a missing start node, duplicate ids,
    /// options pointing at unknown nodes, nodes without options, and nodes
    /// unreachable from the start.
    pub fn audit(&self) -> GraphAudit {
        let mut defects = Vec::new();

        if self.node(self.start).is_none() {
            defects.push(GraphDefect::MissingStart {
                start: self.start.to_string(),
            });
        }

        let mut seen = BTreeSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id) {
                defects.push(GraphDefect::DuplicateNode {
                    node: node.id.to_string(),
                });
            }
            if node.options.is_empty() {
                defects.push(GraphDefect::NoOptions {
                    node: node.id.to_string(),
                });
            }
            for (index, option) in node.options.iter().enumerate() {
                if let Some(next) = option.next_id() {
                    if self.node(next).is_none() {
                        defects.push(GraphDefect::DanglingEdge {
                            node: node.id.to_string(),
                            option: index,
                            target: next.to_string(),
                        });
                    }
                }
            }
        }

        let reachable = self.reachable_from_start();
        for node in &self.nodes {
            if !reachable.contains(node.id) {
                defects.push(GraphDefect::Unreachable {
                    node: node.id.to_string(),
                });
            }
        }

        GraphAudit {
            nodes: self.nodes.len(),
            defects,
        }
    }

    fn reachable_from_start(&self) -> BTreeSet<&'static str> {
        let mut reachable = BTreeSet::new();
        let mut queue = VecDeque::new();
        if let Some(start) = self.node(self.start) {
            reachable.insert(start.id);
            queue.push_back(start);
        }

        while let Some(node) = queue.pop_front() {
            for next in node.options.iter().filter_map(NodeOption::next_id) {
                if let Some(target) = self.node(next) {
                    if reachable.insert(target.id) {
                        queue.push_back(target);
                    }
                }
            }
        }

        reachable
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphDefect {
    MissingStart {
        start: String,
    },
    DuplicateNode {
        node: String,
    },
    NoOptions {
        node: String,
    },
    DanglingEdge {
        node: String,
        option: usize,
        target: String,
    },
    Unreachable {
        node: String,
    },
}

impl GraphDefect {
    pub fn summary(&self) -> String {
        match self {
            GraphDefect::MissingStart { start } => format!("start node '{start}' is missing"),
            GraphDefect::DuplicateNode { node } => format!("node id '{node}' is defined twice"),
            GraphDefect::NoOptions { node } => format!("node '{node}' has no options"),
            GraphDefect::DanglingEdge {
                node,
                option,
                target,
            } => format!("option {option} of '{node}' points at unknown node '{target}'"),
            GraphDefect::Unreachable { node } => {
                format!("node '{node}' cannot be reached from the start")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphAudit {
    pub nodes: usize,
    pub defects: Vec<GraphDefect>,
}

impl GraphAudit {
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }
}

fn next(text: &'static str, id: &'static str) -> NodeOption {
    NodeOption {
        text,
        target: OptionTarget::Next(id),
    }
}

fn outcome(text: &'static str, outcome: Outcome) -> NodeOption {
    NodeOption {
        text,
        target: OptionTarget::Outcome(outcome),
    }
}

fn standard_nodes() -> Vec<DecisionNode> {
    vec![
        DecisionNode {
            id: START_NODE,
            question: "Has anyone asked the court for a disability accommodation?",
            context: Some(
                "A request does not need to use the words \"ADA\" or \"accommodation\". Any communication that links a disability to a need for a change in how the proceeding is run can count.",
            ),
            options: vec![
                next("Yes, a request has been made", "request-made"),
                next("No request has been made", "no-request"),
                next(
                    "A need was mentioned, but nothing formal was filed",
                    "constructive-notice",
                ),
            ],
        },
        DecisionNode {
            id: "no-request",
            question: "Is there any indication that a party has a disability affecting participation?",
            context: Some(
                "Consider disclosures in filings, observations on the record, and information from counsel or service providers.",
            ),
            options: vec![
                next(
                    "Yes, the need is obvious or has been disclosed",
                    "constructive-notice",
                ),
                outcome(
                    "No, there's no indication of need",
                    Outcome {
                        severity: Severity::Success,
                        title: "No Accommodation Duty Yet",
                        description: "Without a request or notice of a disability-related need, the court has no obligation to act. The duty arises as soon as the court learns of the need.",
                        legal_basis: "ADA Title II, 42 U.S.C. § 12132; 28 C.F.R. § 35.130(b)(7)",
                        next_steps: vec![
                            "Tell your client how to request an accommodation if a need arises.",
                            "Share the court ADA coordinator's contact information.",
                            "Revisit this question before each hearing.",
                        ],
                    },
                ),
            ],
        },
        DecisionNode {
            id: "constructive-notice",
            question: "Did the court respond to what it observed or was told?",
            context: Some(
                "When a disability and the resulting need are obvious, the court may be on notice even without a formal request.",
            ),
            options: vec![
                next(
                    "Yes, the court offered or discussed accommodations",
                    "interactive-yes",
                ),
                outcome(
                    "No, the party hasn't formalized the request",
                    Outcome {
                        severity: Severity::Warning,
                        title: "Notice May Already Trigger a Duty",
                        description: "An obvious need can put the court on notice, but an explicit written request removes any doubt and creates a record for appeal.",
                        legal_basis: "28 C.F.R. § 35.130(b)(7); Tennessee v. Lane, 541 U.S. 509 (2004)",
                        next_steps: vec![
                            "Submit a written accommodation request to the ADA coordinator.",
                            "Describe the barrier and the specific accommodation needed.",
                            "Place the request on the record at the next hearing.",
                        ],
                    },
                ),
                outcome(
                    "No, and the court ignored a need that was raised",
                    Outcome {
                        severity: Severity::Error,
                        title: "Failure to Respond to a Known Need",
                        description: "Once a disability-related need is known, ignoring it can deny the party meaningful access to the proceeding.",
                        legal_basis: "ADA Title II, 42 U.S.C. § 12132; 28 C.F.R. § 35.160",
                        next_steps: vec![
                            "Make a formal written request immediately.",
                            "Object on the record and request a continuance if the hearing cannot proceed fairly.",
                            "Preserve the issue for appeal.",
                        ],
                    },
                ),
            ],
        },
        DecisionNode {
            id: "request-made",
            question: "How did the court respond to the request?",
            context: None,
            options: vec![
                next("The court granted the request", "granted"),
                next(
                    "The court discussed alternatives with the party",
                    "interactive-yes",
                ),
                next(
                    "No, the court denied without discussion",
                    "no-interactive",
                ),
                outcome(
                    "The court has not responded yet",
                    Outcome {
                        severity: Severity::Warning,
                        title: "Request Pending",
                        description: "The court should act on the request before the proceeding in which the accommodation is needed.",
                        legal_basis: "28 C.F.R. § 35.107 (designated ADA coordinator)",
                        next_steps: vec![
                            "Follow up in writing with the ADA coordinator.",
                            "Ask for a decision before the next hearing date.",
                            "Request a continuance if no decision has been made in time.",
                        ],
                    },
                ),
            ],
        },
        DecisionNode {
            id: "granted",
            question: "Was the granted accommodation actually in place at the hearing?",
            context: None,
            options: vec![
                outcome(
                    "Yes, it was in place",
                    Outcome {
                        severity: Severity::Success,
                        title: "Accommodation Provided",
                        description: "The court met its obligation for this proceeding. Needs can change, so confirm the accommodation carries forward.",
                        legal_basis: "ADA Title II, 42 U.S.C. § 12132",
                        next_steps: vec![
                            "Confirm the accommodation for future hearings.",
                            "Notify the court promptly if needs change.",
                        ],
                    },
                ),
                outcome(
                    "No, it was missing on the hearing date",
                    Outcome {
                        severity: Severity::Error,
                        title: "Granted but Not Implemented",
                        description: "An accommodation that is granted but not delivered does not provide access. Proceeding without it may deny meaningful participation.",
                        legal_basis: "28 C.F.R. §§ 35.130(b)(7), 35.160",
                        next_steps: vec![
                            "Object on the record before the hearing proceeds.",
                            "Request a continuance until the accommodation is available.",
                            "Document the failure for appeal.",
                        ],
                    },
                ),
            ],
        },
        DecisionNode {
            id: "interactive-yes",
            question: "Was the accommodation ultimately provided effective?",
            context: Some(
                "The court may choose among effective options, but must give primary consideration to the auxiliary aid the individual requests.",
            ),
            options: vec![
                outcome(
                    "Yes, the party could participate fully",
                    Outcome {
                        severity: Severity::Success,
                        title: "Duty Satisfied",
                        description: "An interactive process that produced an effective accommodation meets the court's obligation.",
                        legal_basis: "28 C.F.R. §§ 35.130(b)(7), 35.160(b)(2)",
                        next_steps: vec![
                            "Keep a copy of the accommodation order in the file.",
                            "Monitor whether the accommodation remains effective.",
                        ],
                    },
                ),
                outcome(
                    "No, the alternative was not effective",
                    Outcome {
                        severity: Severity::Error,
                        title: "Ineffective Accommodation",
                        description: "An alternative that does not actually provide access does not discharge the court's duty, even if the court engaged in discussion.",
                        legal_basis: "28 C.F.R. § 35.160(b)(2)",
                        next_steps: vec![
                            "Explain on the record why the alternative did not work.",
                            "Renew the original request with supporting documentation.",
                            "Preserve the issue for appeal.",
                        ],
                    },
                ),
            ],
        },
        DecisionNode {
            id: "no-interactive",
            question: "What reason did the court give for the denial?",
            context: None,
            options: vec![
                next(
                    "The court said there wasn't enough time or resources",
                    "efficiency-concern",
                ),
                outcome(
                    "The court said the party did not appear disabled",
                    Outcome {
                        severity: Severity::Error,
                        title: "Improper Disability Determination",
                        description: "Denying a request based on how a person appears, without an individualized assessment, is inconsistent with the ADA.",
                        legal_basis: "42 U.S.C. § 12102 (definition of disability); 28 C.F.R. § 35.108",
                        next_steps: vec![
                            "Provide documentation of the disability and the functional limitation.",
                            "Ask the court to reconsider with an individualized assessment.",
                            "Preserve the issue for appeal.",
                        ],
                    },
                ),
                outcome(
                    "No reason was given",
                    Outcome {
                        severity: Severity::Error,
                        title: "Denial Without Interactive Process",
                        description: "A summary denial without discussion or explanation skips the individualized inquiry the ADA requires.",
                        legal_basis: "28 C.F.R. § 35.130(b)(7)",
                        next_steps: vec![
                            "Request a written explanation of the denial.",
                            "Ask the ADA coordinator to open an interactive process.",
                            "File a grievance under the court's ADA grievance procedure.",
                        ],
                    },
                ),
            ],
        },
        DecisionNode {
            id: "efficiency-concern",
            question: "Did the court make a written finding that the accommodation would be an undue burden or fundamentally alter the proceeding?",
            context: Some(
                "That defense requires a written statement of reasons by the head of the public entity or a designee, after considering all available resources.",
            ),
            options: vec![
                next(
                    "Yes, but the court offered nothing in its place",
                    "no-alternative",
                ),
                outcome(
                    "Yes, and it offered an alternative",
                    Outcome {
                        severity: Severity::Warning,
                        title: "Undue Burden Defense Asserted",
                        description: "A properly documented undue-burden finding still requires the court to provide an alternative that ensures access to the maximum extent possible.",
                        legal_basis: "28 C.F.R. §§ 35.150(a)(3), 35.164",
                        next_steps: vec![
                            "Evaluate whether the alternative is effective for your client.",
                            "Challenge the finding if it ignored available resources.",
                        ],
                    },
                ),
                outcome(
                    "No, the concern was only stated informally",
                    Outcome {
                        severity: Severity::Error,
                        title: "Administrative Convenience Is Not a Defense",
                        description: "Docket pressure and inconvenience do not justify denying an accommodation without the required written determination.",
                        legal_basis: "28 C.F.R. § 35.164",
                        next_steps: vec![
                            "Point the court to the written-determination requirement.",
                            "Renew the request and ask for a continuance if needed.",
                            "Preserve the issue for appeal.",
                        ],
                    },
                ),
            ],
        },
        DecisionNode {
            id: "no-alternative",
            question: "Did the party ask for a different accommodation that would work?",
            context: None,
            options: vec![
                next(
                    "Yes, and the court agreed to discuss it",
                    "interactive-yes",
                ),
                outcome(
                    "No, the matter proceeded without any accommodation",
                    Outcome {
                        severity: Severity::Error,
                        title: "No Access Provided",
                        description: "Even when a specific request is an undue burden, the court must take other action that ensures the party can participate.",
                        legal_basis: "28 C.F.R. § 35.164",
                        next_steps: vec![
                            "Propose specific alternative accommodations in writing.",
                            "Object to proceeding without access.",
                            "Preserve the issue for appeal.",
                        ],
                    },
                ),
            ],
        },
    ]
}
