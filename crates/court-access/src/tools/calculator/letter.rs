use super::domain::AnswerSet;
use super::engine::RecommendationResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// File name offered when the composed letter is saved.
pub const LETTER_FILENAME: &str = "accommodation-request-letter.txt";

/// MIME type of the composed letter.
pub fn letter_mime() -> mime::Mime {
    mime::TEXT_PLAIN_UTF_8
}

/// Fill-in-the-blank tokens printed where personal details belong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderLabels {
    pub full_name: String,
    pub case_number: String,
    pub court_name: String,
    pub coordinator_name: String,
    pub phone: String,
    pub email: String,
}

impl Default for PlaceholderLabels {
    fn default() -> Self {
        Self {
            full_name: "[YOUR FULL NAME]".to_string(),
            case_number: "[CASE NUMBER]".to_string(),
            court_name: "[COURT NAME]".to_string(),
            coordinator_name: "[ADA COORDINATOR NAME]".to_string(),
            phone: "[PHONE]".to_string(),
            email: "[EMAIL]".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFields {
    pub date: NaiveDate,
    pub placeholders: PlaceholderLabels,
}

impl LetterFields {
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            date,
            placeholders: PlaceholderLabels::default(),
        }
    }
}

/// Renders the accommodation request letter.
///
/// The output depends only on the arguments; the same inputs always produce
/// the same bytes. Personal details are never filled in.
pub fn compose(result: &RecommendationResult, answers: &AnswerSet, fields: &LetterFields) -> String {
    let labels = &fields.placeholders;
    let mut letter = String::new();

    writeln!(&mut letter, "{}", labels.full_name).expect("write name");
    writeln!(&mut letter, "{}", labels.phone).expect("write phone");
    writeln!(&mut letter, "{}", labels.email).expect("write email");
    letter.push('\n');
    writeln!(&mut letter, "{}", fields.date.format("%B %-d, %Y")).expect("write date");
    letter.push('\n');
    writeln!(&mut letter, "{}", labels.coordinator_name).expect("write coordinator");
    writeln!(&mut letter, "ADA Coordinator, {}", labels.court_name).expect("write court");
    letter.push('\n');
    writeln!(&mut letter, "Re: Request for Disability Accommodation").expect("write subject");
    writeln!(&mut letter, "Case No.: {}", labels.case_number).expect("write case number");
    writeln!(&mut letter, "Proceeding: {}", answers.category.label()).expect("write proceeding");
    letter.push('\n');
    writeln!(&mut letter, "Dear {}:", labels.coordinator_name).expect("write salutation");
    letter.push('\n');
    letter.push_str(
        "I am a party in the above case and a person with a disability. Under Title II of the \
         Americans with Disabilities Act, 42 U.S.C. § 12132, I request the accommodations \
         described below so that I can participate fully and equally in these proceedings.\n",
    );
    letter.push('\n');

    letter.push_str("Barriers I experience in court:\n");
    for (position, barrier) in answers.barriers.iter().enumerate() {
        writeln!(&mut letter, "{}. {}", position + 1, barrier.label()).expect("write barrier");
    }
    letter.push('\n');

    letter.push_str("Accommodations requested:\n");
    if result.is_empty() {
        letter.push_str("(No specific accommodations identified. Please describe your request here.)\n");
    }
    for (position, matched) in result.recommendations.iter().enumerate() {
        let recommendation = &matched.recommendation;
        writeln!(&mut letter, "{}. {}", position + 1, recommendation.title)
            .expect("write accommodation title");
        writeln!(&mut letter, "   {}", recommendation.description)
            .expect("write accommodation description");
        writeln!(&mut letter, "   Legal basis: {}", recommendation.legal_basis)
            .expect("write legal basis");
    }
    letter.push('\n');

    letter.push_str(
        "Please provide a written response to this request before my next hearing date. If any \
         requested accommodation cannot be granted, I ask that you engage with me to identify an \
         effective alternative, as required by 28 C.F.R. § 35.164.\n",
    );
    letter.push('\n');
    letter.push_str("Thank you for your assistance.\n");
    letter.push('\n');
    letter.push_str("Sincerely,\n");
    letter.push('\n');
    writeln!(&mut letter, "{}", labels.full_name).expect("write signature");

    letter
}
