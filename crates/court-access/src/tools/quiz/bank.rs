use serde::Serialize;

/// One multiple-choice item with a known answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub scenario: &'static str,
    pub prompt: &'static str,
    pub options: Vec<&'static str>,
    #[serde(skip)]
    pub correct_index: usize,
    pub explanation: &'static str,
    pub citation: &'static str,
}

impl QuizQuestion {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

/// Fixed, ordered question list.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn from_questions(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn standard_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: 1,
            scenario: "A mother with a hearing disability tells the clerk before her custody hearing that she cannot follow spoken testimony. She never uses the word \"accommodation\".",
            prompt: "Has she made a valid accommodation request?",
            options: vec![
                "No, requests must cite the ADA by name",
                "Yes, she linked her disability to a need for a change",
                "No, requests must be filed by an attorney",
                "Only if she submits medical records first",
            ],
            correct_index: 1,
            explanation: "No magic words are required. Communicating a disability-related need to the court is enough to trigger its obligation to respond.",
            citation: "28 C.F.R. § 35.130(b)(7)",
        },
        QuizQuestion {
            id: 2,
            scenario: "A Deaf father who uses ASL asks for an interpreter. The judge offers to let him read a written transcript after the hearing instead.",
            prompt: "Is the transcript an adequate substitute?",
            options: vec![
                "Yes, the court may choose any accommodation it prefers",
                "Yes, as long as the transcript is free",
                "No, he cannot participate in real time and the court must give primary consideration to his request",
                "No, because transcripts are never allowed",
            ],
            correct_index: 2,
            explanation: "The court must give primary consideration to the requested auxiliary aid, and an after-the-fact transcript does not provide real-time participation.",
            citation: "28 C.F.R. § 35.160(b)(2)",
        },
        QuizQuestion {
            id: 3,
            scenario: "A court denies a request for scheduled breaks because the docket is crowded that day.",
            prompt: "Is docket pressure alone a valid reason to deny the request?",
            options: vec![
                "Yes, efficiency always outweighs accommodation requests",
                "No, an undue-burden defense needs a written determination and an alternative",
                "Yes, if the judge states it on the record",
                "Only in criminal cases",
            ],
            correct_index: 1,
            explanation: "Administrative convenience is not a defense. An undue-burden finding must be made in writing by the head of the entity and the court must still offer an alternative.",
            citation: "28 C.F.R. § 35.164",
        },
        QuizQuestion {
            id: 4,
            scenario: "A party with a mobility disability is scheduled in a second-floor courtroom with no elevator.",
            prompt: "What is the court's most direct obligation?",
            options: vec![
                "Relocate the hearing to an accessible courtroom",
                "Dismiss the case",
                "Ask the party to waive appearance",
                "Nothing, older buildings are exempt",
            ],
            correct_index: 0,
            explanation: "Programs must be accessible when viewed in their entirety; relocating proceedings to an accessible space is a standard method of compliance.",
            citation: "28 C.F.R. § 35.150(b)(1)",
        },
        QuizQuestion {
            id: 5,
            scenario: "A litigant asks the court to pay for CART captioning. The court agrees to provide it but wants to charge the litigant the cost.",
            prompt: "May the court pass the cost on?",
            options: vec![
                "Yes, the litigant requested it",
                "Yes, if the litigant can afford it",
                "No, surcharges for required accommodations are prohibited",
                "Only if the case is civil",
            ],
            correct_index: 2,
            explanation: "Public entities may not place a surcharge on individuals with disabilities to cover the cost of required auxiliary aids or modifications.",
            citation: "28 C.F.R. § 35.130(f)",
        },
        QuizQuestion {
            id: 6,
            scenario: "During a dependency hearing a parent with PTSD begins shaking and cannot answer questions. No request has been filed.",
            prompt: "What should counsel do?",
            options: vec![
                "Nothing until a written request is filed",
                "Ask for a recess and raise the accommodation need on the record",
                "Withdraw from representation",
                "Ask the court to proceed so the record is complete",
            ],
            correct_index: 1,
            explanation: "An obvious need observed on the record can put the court on notice. Raising it immediately preserves the issue and gives the court the chance to respond.",
            citation: "Tennessee v. Lane, 541 U.S. 509 (2004)",
        },
        QuizQuestion {
            id: 7,
            scenario: "A court asks a litigant requesting a support person to prove the disability with a physician's letter.",
            prompt: "Which statement is most accurate?",
            options: vec![
                "Courts may never ask for any information",
                "Courts may request only the information needed to understand the need, not a full medical history",
                "Courts may demand complete medical records",
                "Courts must deny requests without documentation",
            ],
            correct_index: 1,
            explanation: "Inquiries should be limited to what is necessary to understand the disability-related need; sweeping demands for medical records are inappropriate.",
            citation: "28 C.F.R. § 35.130(b)(7)",
        },
        QuizQuestion {
            id: 8,
            scenario: "A custody evaluator recommends limiting a blind parent's time solely because the parent is blind.",
            prompt: "What is the problem with the recommendation?",
            options: vec![
                "There is none, evaluators have complete discretion",
                "It relies on a disability stereotype instead of an individualized assessment of parenting with supports",
                "Evaluators cannot consider disability at all",
                "Only the judge may mention disability",
            ],
            correct_index: 1,
            explanation: "Decisions must rest on individualized assessment of actual parenting ability, considering supports and accommodations, rather than generalizations about disability.",
            citation: "28 C.F.R. § 35.130(b)(1)",
        },
    ]
}
