use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Type of court proceeding the litigant is involved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProceedingType {
    Custody,
    Divorce,
    ChildSupport,
    ProtectiveOrder,
    Dependency,
    Guardianship,
    Other,
}

impl ProceedingType {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Custody,
            Self::Divorce,
            Self::ChildSupport,
            Self::ProtectiveOrder,
            Self::Dependency,
            Self::Guardianship,
            Self::Other,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Custody => "custody",
            Self::Divorce => "divorce",
            Self::ChildSupport => "child_support",
            Self::ProtectiveOrder => "protective_order",
            Self::Dependency => "dependency",
            Self::Guardianship => "guardianship",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Custody => "Child Custody / Parenting Time",
            Self::Divorce => "Divorce / Dissolution",
            Self::ChildSupport => "Child Support",
            Self::ProtectiveOrder => "Protective Order",
            Self::Dependency => "Dependency / Child Welfare",
            Self::Guardianship => "Guardianship / Conservatorship",
            Self::Other => "Other Family Court Matter",
        }
    }
}

/// Disability categories offered on the first checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabilityCategory {
    Hearing,
    Vision,
    Mobility,
    Cognitive,
    Psychiatric,
    Neurodevelopmental,
    ChronicIllness,
    Speech,
}

impl DisabilityCategory {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Hearing,
            Self::Vision,
            Self::Mobility,
            Self::Cognitive,
            Self::Psychiatric,
            Self::Neurodevelopmental,
            Self::ChronicIllness,
            Self::Speech,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Hearing => "hearing",
            Self::Vision => "vision",
            Self::Mobility => "mobility",
            Self::Cognitive => "cognitive",
            Self::Psychiatric => "psychiatric",
            Self::Neurodevelopmental => "neurodevelopmental",
            Self::ChronicIllness => "chronic_illness",
            Self::Speech => "speech",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hearing => "Deaf or hard of hearing",
            Self::Vision => "Blind or low vision",
            Self::Mobility => "Mobility or physical disability",
            Self::Cognitive => "Cognitive or intellectual disability",
            Self::Psychiatric => "Psychiatric disability (PTSD, anxiety, depression)",
            Self::Neurodevelopmental => "Autism, ADHD, or other neurodevelopmental condition",
            Self::ChronicIllness => "Chronic illness or chronic pain",
            Self::Speech => "Speech or language disability",
        }
    }
}

/// Courtroom barriers offered on the second checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Barrier {
    FastPacing,
    LongHearings,
    WrittenMaterials,
    OralCommunication,
    PhysicalAccess,
    StressAnxiety,
    SensoryEnvironment,
    Transportation,
    MemoryProcessing,
}

impl Barrier {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::FastPacing,
            Self::LongHearings,
            Self::WrittenMaterials,
            Self::OralCommunication,
            Self::PhysicalAccess,
            Self::StressAnxiety,
            Self::SensoryEnvironment,
            Self::Transportation,
            Self::MemoryProcessing,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::FastPacing => "fast_pacing",
            Self::LongHearings => "long_hearings",
            Self::WrittenMaterials => "written_materials",
            Self::OralCommunication => "oral_communication",
            Self::PhysicalAccess => "physical_access",
            Self::StressAnxiety => "stress_anxiety",
            Self::SensoryEnvironment => "sensory_environment",
            Self::Transportation => "transportation",
            Self::MemoryProcessing => "memory_processing",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FastPacing => "Proceedings move too quickly to follow",
            Self::LongHearings => "Long hearings without breaks",
            Self::WrittenMaterials => "Difficulty reading court documents and forms",
            Self::OralCommunication => "Difficulty following spoken testimony or argument",
            Self::PhysicalAccess => "Courtroom or courthouse is physically inaccessible",
            Self::StressAnxiety => "Severe stress or anxiety in the courtroom",
            Self::SensoryEnvironment => "Noise, lighting, or crowding in the courtroom",
            Self::Transportation => "Difficulty travelling to the courthouse",
            Self::MemoryProcessing => "Difficulty remembering or processing instructions",
        }
    }
}

/// Raised when a checklist key does not belong to the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {vocabulary} key '{key}'")]
pub struct UnknownKey {
    pub vocabulary: &'static str,
    pub key: String,
}

macro_rules! keyed_from_str {
    ($ty:ty, $vocabulary:literal) => {
        impl FromStr for $ty {
            type Err = UnknownKey;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = raw.trim().to_ascii_lowercase().replace('-', "_");
                <$ty>::ordered()
                    .into_iter()
                    .find(|value| value.key() == wanted)
                    .ok_or_else(|| UnknownKey {
                        vocabulary: $vocabulary,
                        key: raw.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

keyed_from_str!(ProceedingType, "proceeding type");
keyed_from_str!(DisabilityCategory, "disability category");
keyed_from_str!(Barrier, "barrier");

/// Frozen snapshot of a visitor's calculator selections.
///
/// Sets iterate in checklist order, which keeps every rendering of the
/// answers deterministic regardless of the order the boxes were ticked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub category: ProceedingType,
    #[serde(default)]
    pub disabilities: BTreeSet<DisabilityCategory>,
    #[serde(default)]
    pub barriers: BTreeSet<Barrier>,
}

impl AnswerSet {
    pub fn new(
        category: ProceedingType,
        disabilities: impl IntoIterator<Item = DisabilityCategory>,
        barriers: impl IntoIterator<Item = Barrier>,
    ) -> Self {
        Self {
            category,
            disabilities: disabilities.into_iter().collect(),
            barriers: barriers.into_iter().collect(),
        }
    }

    /// Whether the answers are eligible for evaluation.
    pub fn is_complete(&self) -> bool {
        !self.disabilities.is_empty() && !self.barriers.is_empty()
    }

    pub fn ensure_complete(&self) -> Result<(), IncompleteAnswers> {
        if self.disabilities.is_empty() {
            return Err(IncompleteAnswers::MissingDisabilities);
        }
        if self.barriers.is_empty() {
            return Err(IncompleteAnswers::MissingBarriers);
        }
        Ok(())
    }
}

/// Reasons a collector refuses to freeze its selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IncompleteAnswers {
    #[error("select a proceeding type")]
    MissingCategory,
    #[error("select at least one disability category")]
    MissingDisabilities,
    #[error("select at least one barrier")]
    MissingBarriers,
}

/// Mutable form state that accumulates selections until the visitor submits.
#[derive(Debug, Clone, Default)]
pub struct FactCollector {
    category: Option<ProceedingType>,
    disabilities: BTreeSet<DisabilityCategory>,
    barriers: BTreeSet<Barrier>,
}

impl FactCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_category(&mut self, category: ProceedingType) {
        self.category = Some(category);
    }

    /// Checks or unchecks a disability box; returns whether it is now checked.
    pub fn toggle_disability(&mut self, disability: DisabilityCategory) -> bool {
        if !self.disabilities.remove(&disability) {
            self.disabilities.insert(disability);
            true
        } else {
            false
        }
    }

    /// Checks or unchecks a barrier box; returns whether it is now checked.
    pub fn toggle_barrier(&mut self, barrier: Barrier) -> bool {
        if !self.barriers.remove(&barrier) {
            self.barriers.insert(barrier);
            true
        } else {
            false
        }
    }

    pub fn is_ready(&self) -> bool {
        self.category.is_some() && !self.disabilities.is_empty() && !self.barriers.is_empty()
    }

    pub fn finalize(&self) -> Result<AnswerSet, IncompleteAnswers> {
        let category = self.category.ok_or(IncompleteAnswers::MissingCategory)?;
        let answers = AnswerSet {
            category,
            disabilities: self.disabilities.clone(),
            barriers: self.barriers.clone(),
        };
        answers.ensure_complete()?;
        Ok(answers)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Key/label pair exposed to renderers building the checklists.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistEntry {
    pub key: &'static str,
    pub label: &'static str,
}

/// Complete calculator vocabulary in checklist order.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistOptions {
    pub proceedings: Vec<ChecklistEntry>,
    pub disabilities: Vec<ChecklistEntry>,
    pub barriers: Vec<ChecklistEntry>,
}

impl ChecklistOptions {
    pub fn standard() -> Self {
        Self {
            proceedings: ProceedingType::ordered()
                .into_iter()
                .map(|value| ChecklistEntry {
                    key: value.key(),
                    label: value.label(),
                })
                .collect(),
            disabilities: DisabilityCategory::ordered()
                .into_iter()
                .map(|value| ChecklistEntry {
                    key: value.key(),
                    label: value.label(),
                })
                .collect(),
            barriers: Barrier::ordered()
                .into_iter()
                .map(|value| ChecklistEntry {
                    key: value.key(),
                    label: value.label(),
                })
                .collect(),
        }
    }
}
