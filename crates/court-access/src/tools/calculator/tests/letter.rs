use super::common::*;
use crate::tools::calculator::{compose, AnswerSet, Barrier, PlaceholderLabels, RecommendationResult};

#[test]
fn compose_is_byte_for_byte_repeatable() {
    let answers = custody_hearing_answers();
    let result = engine().evaluate(&answers);
    let fields = letter_fields();

    assert_eq!(
        compose(&result, &answers, &fields),
        compose(&result, &answers, &fields)
    );
}

#[test]
fn letter_lists_barriers_and_recommendations_in_order() {
    let answers = low_vision_answers();
    let result = engine().evaluate(&answers);
    let letter = compose(&result, &answers, &letter_fields());

    assert!(letter.contains("March 14, 2025"));
    assert!(letter.contains(&format!("1. {}", Barrier::WrittenMaterials.label())));
    assert!(letter.contains(&format!("2. {}", Barrier::Transportation.label())));

    let first = &result.recommendations[0].recommendation;
    assert!(letter.contains(&format!("1. {}", first.title)));
    assert!(letter.contains(&format!("   Legal basis: {}", first.legal_basis)));

    let mut cursor = 0;
    for matched in &result.recommendations {
        let found = letter[cursor..]
            .find(matched.recommendation.title)
            .expect("title rendered after previous one");
        cursor += found;
    }
}

#[test]
fn letter_keeps_placeholders_unfilled() {
    let answers = custody_hearing_answers();
    let result = engine().evaluate(&answers);
    let letter = compose(&result, &answers, &letter_fields());
    let labels = PlaceholderLabels::default();

    assert!(letter.starts_with(&labels.full_name));
    assert!(letter.contains(&labels.case_number));
    assert!(letter.contains(&labels.court_name));
    assert!(letter.trim_end().ends_with(&labels.full_name));
}

#[test]
fn letter_does_not_disclose_disability_categories() {
    let answers = custody_hearing_answers();
    let result = engine().evaluate(&answers);
    let letter = compose(&result, &answers, &letter_fields());

    for disability in &answers.disabilities {
        assert!(!letter.contains(disability.label()));
    }
}

#[test]
fn empty_result_still_renders_frame() {
    let answers = AnswerSet::new(
        crate::tools::calculator::ProceedingType::Other,
        [],
        [Barrier::LongHearings],
    );
    let letter = compose(&RecommendationResult::default(), &answers, &letter_fields());

    assert!(letter.contains("Accommodations requested:"));
    assert!(letter.contains("No specific accommodations identified"));
    assert!(letter.contains("Sincerely,"));
}

#[test]
fn letter_writes_supplied_labels_in_header_and_signature() {
    let answers = low_vision_answers();
    let result = engine().evaluate(&answers);
    let mut fields = letter_fields();
    fields.placeholders.full_name = "Jordan Reyes".to_string();
    fields.placeholders.court_name = "Polk County District Court".to_string();
    fields.placeholders.case_number = "FLCV-2025-0113".to_string();

    let letter = compose(&result, &answers, &fields);
    let lines: Vec<&str> = letter.lines().collect();

    assert_eq!(lines.first(), Some(&"Jordan Reyes"));
    assert_eq!(lines.last(), Some(&"Jordan Reyes"));
    assert!(lines.contains(&"ADA Coordinator, Polk County District Court"));
    assert!(lines.contains(&"Case No.: FLCV-2025-0113"));
    assert!(lines.contains(&"March 14, 2025"));
    for matched in &result.recommendations {
        let basis = format!("   Legal basis: {}", matched.recommendation.legal_basis);
        assert!(lines.contains(&basis.as_str()), "missing {basis}");
    }
}
