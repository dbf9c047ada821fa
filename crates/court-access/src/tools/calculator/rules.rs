use super::domain::{AnswerSet, Barrier, DisabilityCategory, ProceedingType};
use serde::Serialize;

/// Single membership test against an answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Condition {
    Proceeding(ProceedingType),
    Disability(DisabilityCategory),
    Barrier(Barrier),
}

impl Condition {
    pub fn holds(&self, answers: &AnswerSet) -> bool {
        match self {
            Condition::Proceeding(category) => answers.category == *category,
            Condition::Disability(disability) => answers.disabilities.contains(disability),
            Condition::Barrier(barrier) => answers.barriers.contains(barrier),
        }
    }
}

/// Accommodation guidance attached to a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub legal_basis: &'static str,
    pub citation: &'static str,
    pub rationale: &'static str,
}

/// Predicate/payload pair. The predicate is the disjunction of `conditions`.
#[derive(Debug, Clone)]
pub struct Rule {
    pub key: &'static str,
    pub conditions: Vec<Condition>,
    pub recommendation: Recommendation,
}

impl Rule {
    pub fn matches(&self, answers: &AnswerSet) -> bool {
        self.conditions
            .iter()
            .any(|condition| condition.holds(answers))
    }
}

/// Ordered rule table. Table order is the output order of every evaluation.
#[derive(Debug)]
pub struct RuleBook {
    rules: Vec<Rule>,
}

impl RuleBook {
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, key: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.key == key)
    }
}

const ADA_TITLE_II: &str = "ADA Title II, 42 U.S.C. § 12132";
const EFFECTIVE_COMMUNICATION: &str = "28 C.F.R. § 35.160";
const REASONABLE_MODIFICATIONS: &str = "28 C.F.R. § 35.130(b)(7)";
const PROGRAM_ACCESS: &str = "28 C.F.R. §§ 35.149-35.151";

fn standard_rules() -> Vec<Rule> {
    use Condition::{Barrier as B, Disability as D, Proceeding as P};

    vec![
        Rule {
            key: "sign_language_interpreter",
            conditions: vec![D(DisabilityCategory::Hearing)],
            recommendation: Recommendation {
                title: "Qualified Sign Language Interpreter",
                description: "Request a qualified ASL (or other sign language) interpreter for every hearing, mediation, and court-ordered evaluation, appointed and paid for by the court.",
                legal_basis: "Courts must furnish auxiliary aids and services, including qualified interpreters, to ensure effective communication.",
                citation: EFFECTIVE_COMMUNICATION,
                rationale: "Deaf litigants who use sign language cannot meaningfully participate through lip-reading or written notes during live testimony.",
            },
        },
        Rule {
            key: "cart_captioning",
            conditions: vec![D(DisabilityCategory::Hearing), B(Barrier::FastPacing)],
            recommendation: Recommendation {
                title: "CART (Real-Time Captioning)",
                description: "Request Communication Access Realtime Translation so that everything said in the courtroom is displayed as text on a screen in front of you as it is spoken.",
                legal_basis: "Real-time captioning is a listed auxiliary aid; the court must give primary consideration to the aid the individual requests.",
                citation: "28 C.F.R. §§ 35.104, 35.160(b)(2)",
                rationale: "Captions let you re-read testimony and rulings that went by too quickly to follow by ear.",
            },
        },
        Rule {
            key: "assistive_listening",
            conditions: vec![
                D(DisabilityCategory::Hearing),
                B(Barrier::OralCommunication),
                B(Barrier::SensoryEnvironment),
            ],
            recommendation: Recommendation {
                title: "Assistive Listening System",
                description: "Ask the clerk for a personal assistive listening receiver tied to the courtroom microphones, and ask that every speaker use a microphone.",
                legal_basis: "Assistive listening systems are required auxiliary aids in assembly areas such as courtrooms.",
                citation: "28 C.F.R. § 35.104; 2010 ADA Standards § 219",
                rationale: "Courtroom acoustics and background noise make spoken proceedings hard to follow without amplification.",
            },
        },
        Rule {
            key: "accessible_documents",
            conditions: vec![
                D(DisabilityCategory::Vision),
                B(Barrier::WrittenMaterials),
            ],
            recommendation: Recommendation {
                title: "Documents in Accessible Formats",
                description: "Request court notices, orders, and filings in large print, Braille, or accessible electronic formats compatible with screen readers.",
                legal_basis: "Effective communication extends to written materials the court provides to the public and to parties.",
                citation: EFFECTIVE_COMMUNICATION,
                rationale: "Standard print documents and scanned PDFs shut out readers who rely on magnification or screen readers.",
            },
        },
        Rule {
            key: "plain_language",
            conditions: vec![
                D(DisabilityCategory::Cognitive),
                B(Barrier::WrittenMaterials),
                B(Barrier::MemoryProcessing),
            ],
            recommendation: Recommendation {
                title: "Plain-Language Explanations",
                description: "Ask the judge and court staff to explain rulings, instructions, and deadlines in plain language and to confirm your understanding before moving on.",
                legal_basis: "Reasonable modifications to policies and practices are required when necessary to avoid disability discrimination.",
                citation: REASONABLE_MODIFICATIONS,
                rationale: "Legal jargon and dense forms can prevent a litigant from understanding what the court has ordered.",
            },
        },
        Rule {
            key: "modified_pacing",
            conditions: vec![
                B(Barrier::FastPacing),
                B(Barrier::LongHearings),
                D(DisabilityCategory::ChronicIllness),
            ],
            recommendation: Recommendation {
                title: "Modified Pacing and Scheduled Breaks",
                description: "Request that the hearing proceed at a slower pace, with scheduled breaks and additional time to respond to questions.",
                legal_basis: "Adjusting the pace of a proceeding is a reasonable modification of court practice.",
                citation: REASONABLE_MODIFICATIONS,
                rationale: "Rapid-fire questioning and marathon sessions cause fatigue and missed information that can affect the outcome.",
            },
        },
        Rule {
            key: "support_person",
            conditions: vec![
                D(DisabilityCategory::Psychiatric),
                D(DisabilityCategory::Neurodevelopmental),
                B(Barrier::StressAnxiety),
            ],
            recommendation: Recommendation {
                title: "Support Person in the Courtroom",
                description: "Request permission for a support person to sit with you during hearings, and for a quiet space to use during recesses.",
                legal_basis: "Permitting a support person is a reasonable modification that does not alter the nature of the proceeding.",
                citation: REASONABLE_MODIFICATIONS,
                rationale: "A trusted support person can reduce acute anxiety that otherwise prevents clear testimony.",
            },
        },
        Rule {
            key: "sensory_adjustments",
            conditions: vec![
                D(DisabilityCategory::Neurodevelopmental),
                B(Barrier::SensoryEnvironment),
            ],
            recommendation: Recommendation {
                title: "Sensory Environment Adjustments",
                description: "Request adjusted lighting, reduced noise, seating away from crowded areas, or permission to use noise-reducing headphones during recesses.",
                legal_basis: "Modifying the physical conditions of participation is a reasonable modification of court practice.",
                citation: REASONABLE_MODIFICATIONS,
                rationale: "Sensory overload can make it impossible to concentrate on testimony or respond to the judge.",
            },
        },
        Rule {
            key: "physical_access",
            conditions: vec![
                D(DisabilityCategory::Mobility),
                B(Barrier::PhysicalAccess),
            ],
            recommendation: Recommendation {
                title: "Physically Accessible Courtroom",
                description: "Request that your hearing be assigned to an accessible courtroom with an accessible route, counsel table, witness stand, and restrooms.",
                legal_basis: "Court programs must be readily accessible when viewed in their entirety, including by relocating proceedings.",
                citation: PROGRAM_ACCESS,
                rationale: "An inaccessible courtroom can prevent a party from reaching the witness stand or counsel table at all.",
            },
        },
        Rule {
            key: "remote_appearance",
            conditions: vec![
                D(DisabilityCategory::Mobility),
                D(DisabilityCategory::ChronicIllness),
                B(Barrier::Transportation),
            ],
            recommendation: Recommendation {
                title: "Remote or Hybrid Appearance",
                description: "Request permission to appear by video for some or all proceedings, with the court providing any needed technology support.",
                legal_basis: "Remote participation may be a reasonable modification when travel or extended sitting is a disability-related barrier.",
                citation: REASONABLE_MODIFICATIONS,
                rationale: "Missing a hearing because you cannot travel can lead to default orders against you.",
            },
        },
        Rule {
            key: "communication_support",
            conditions: vec![
                D(DisabilityCategory::Speech),
                B(Barrier::OralCommunication),
            ],
            recommendation: Recommendation {
                title: "Communication Support for Testimony",
                description: "Request permission to use an AAC device, a speech-to-speech assistant, or written responses when testifying, and additional time to respond.",
                legal_basis: "Courts must give primary consideration to the communication method the individual requests.",
                citation: "28 C.F.R. § 35.160(b)(2)",
                rationale: "Being rushed or interrupted while communicating can cause the court to misread your testimony.",
            },
        },
        Rule {
            key: "written_summaries",
            conditions: vec![
                D(DisabilityCategory::Cognitive),
                D(DisabilityCategory::Psychiatric),
                B(Barrier::MemoryProcessing),
            ],
            recommendation: Recommendation {
                title: "Written Summaries of Orders and Deadlines",
                description: "Ask that every oral ruling, instruction, and deadline be provided in writing before you leave the courthouse.",
                legal_basis: "Providing information in an alternative format is a reasonable modification of court practice.",
                citation: REASONABLE_MODIFICATIONS,
                rationale: "Orders that exist only in spoken form are easily forgotten or misunderstood, risking non-compliance.",
            },
        },
        Rule {
            key: "parenting_evaluation_safeguards",
            conditions: vec![
                P(ProceedingType::Custody),
                P(ProceedingType::Dependency),
            ],
            recommendation: Recommendation {
                title: "Disability-Informed Parenting Evaluation",
                description: "Ask that any custody or parenting evaluator consider your disability accommodations and assess parenting ability with appropriate supports in place.",
                legal_basis: "Courts and their contractors may not rely on disability stereotypes; parenting assessments must be individualized.",
                citation: "ADA Title II, 42 U.S.C. § 12132; 28 C.F.R. § 35.130(b)(1)",
                rationale: "Evaluations that ignore accommodations can understate a disabled parent's capacity and skew custody decisions.",
            },
        },
        Rule {
            key: "ada_coordinator_contact",
            conditions: vec![
                P(ProceedingType::Divorce),
                P(ProceedingType::ChildSupport),
                P(ProceedingType::ProtectiveOrder),
                P(ProceedingType::Guardianship),
                P(ProceedingType::Other),
            ],
            recommendation: Recommendation {
                title: "Early Contact with the Court ADA Coordinator",
                description: "Send your accommodation request to the court's ADA coordinator as early as possible and ask for a written response before your next hearing date.",
                legal_basis: "Public entities must designate a responsible employee to coordinate ADA compliance and respond to requests.",
                citation: ADA_TITLE_II,
                rationale: "Requests routed through the coordinator create a record and reduce the risk the accommodation is missing on the hearing date.",
            },
        },
    ]
}
