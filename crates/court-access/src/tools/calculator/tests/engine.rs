use super::common::*;
use crate::tools::calculator::{
    evaluate, AnswerSet, Barrier, Condition, DisabilityCategory, FactCollector,
    IncompleteAnswers, ProceedingType, Recommendation, Rule, RuleBook,
};

#[test]
fn custody_hearing_scenario_orders_cart_before_pacing() {
    let result = engine().evaluate(&custody_hearing_answers());
    let titles = result.titles();

    let cart = position(&titles, "CART (Real-Time Captioning)");
    let pacing = position(&titles, "Modified Pacing and Scheduled Breaks");
    assert!(cart < pacing, "CART should precede pacing: {titles:?}");
    assert!(!titles.contains(&"Documents in Accessible Formats"));
}

#[test]
fn evaluation_is_deterministic() {
    let engine = engine();
    let answers = low_vision_answers();
    assert_eq!(engine.evaluate(&answers), engine.evaluate(&answers));
}

#[test]
fn results_follow_rule_table_order() {
    let engine = engine();
    let answers = AnswerSet::new(
        ProceedingType::Dependency,
        DisabilityCategory::ordered(),
        Barrier::ordered(),
    );
    let result = engine.evaluate(&answers);

    let table: Vec<&str> = engine.rules().rules().iter().map(|rule| rule.key).collect();
    let matched: Vec<&str> = result
        .recommendations
        .iter()
        .map(|matched| matched.rule_key)
        .collect();

    let mut cursor = 0;
    for key in &matched {
        let found = table[cursor..]
            .iter()
            .position(|candidate| candidate == key)
            .expect("matched rule appears later in table");
        cursor += found + 1;
    }
    assert_eq!(matched.len(), result.len());
}

#[test]
fn adding_tags_never_removes_matches() {
    let engine = engine();
    let base = custody_hearing_answers();
    let before = engine.evaluate(&base);

    for disability in DisabilityCategory::ordered() {
        let mut widened = base.clone();
        widened.disabilities.insert(disability);
        let after = engine.evaluate(&widened);
        for matched in &before.recommendations {
            assert!(after.contains_rule(matched.rule_key), "{disability} dropped {}", matched.rule_key);
        }
    }

    for barrier in Barrier::ordered() {
        let mut widened = base.clone();
        widened.barriers.insert(barrier);
        let after = engine.evaluate(&widened);
        for matched in &before.recommendations {
            assert!(after.contains_rule(matched.rule_key), "{barrier} dropped {}", matched.rule_key);
        }
    }
}

#[test]
fn partial_answers_produce_fewer_matches_without_error() {
    let engine = engine();
    let answers = AnswerSet::new(ProceedingType::Custody, [], []);
    assert!(!answers.is_complete());

    let result = engine.evaluate(&answers);
    assert!(result
        .recommendations
        .iter()
        .all(|matched| matched.rule_key == "parenting_evaluation_safeguards"));
}

#[test]
fn empty_rule_table_yields_empty_result() {
    let result = evaluate(&custody_hearing_answers(), &[]);
    assert!(result.is_empty());
}

#[test]
fn rules_match_on_any_condition() {
    let rule = Rule {
        key: "either",
        conditions: vec![
            Condition::Disability(DisabilityCategory::Speech),
            Condition::Barrier(Barrier::LongHearings),
        ],
        recommendation: Recommendation {
            title: "Either",
            description: "",
            legal_basis: "",
            citation: "",
            rationale: "",
        },
    };
    let book = RuleBook::from_rules(vec![rule]);

    let speech_only = AnswerSet::new(ProceedingType::Other, [DisabilityCategory::Speech], [Barrier::FastPacing]);
    let hearings_only = AnswerSet::new(ProceedingType::Other, [DisabilityCategory::Vision], [Barrier::LongHearings]);
    let neither = AnswerSet::new(ProceedingType::Other, [DisabilityCategory::Vision], [Barrier::FastPacing]);

    assert_eq!(evaluate(&speech_only, book.rules()).len(), 1);
    assert_eq!(evaluate(&hearings_only, book.rules()).len(), 1);
    assert!(evaluate(&neither, book.rules()).is_empty());
}

#[test]
fn standard_rule_keys_are_unique() {
    let book = RuleBook::standard();
    let mut keys: Vec<&str> = book.rules().iter().map(|rule| rule.key).collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total);
    assert!(book.rule("cart_captioning").is_some());
}

#[test]
fn collector_requires_every_checklist() {
    let mut collector = FactCollector::new();
    assert_eq!(collector.finalize(), Err(IncompleteAnswers::MissingCategory));

    collector.select_category(ProceedingType::Custody);
    assert_eq!(collector.finalize(), Err(IncompleteAnswers::MissingDisabilities));

    assert!(collector.toggle_disability(DisabilityCategory::Hearing));
    assert_eq!(collector.finalize(), Err(IncompleteAnswers::MissingBarriers));

    assert!(collector.toggle_barrier(Barrier::FastPacing));
    assert!(collector.is_ready());
    assert_eq!(collector.finalize(), Ok(custody_hearing_answers()));
}

#[test]
fn collector_toggles_and_resets() {
    let mut collector = FactCollector::new();
    collector.select_category(ProceedingType::Divorce);
    assert!(collector.toggle_barrier(Barrier::Transportation));
    assert!(!collector.toggle_barrier(Barrier::Transportation));

    collector.toggle_disability(DisabilityCategory::Mobility);
    collector.reset();
    assert!(!collector.is_ready());
    assert_eq!(collector.finalize(), Err(IncompleteAnswers::MissingCategory));
}

#[test]
fn vocabulary_keys_parse_back() {
    for barrier in Barrier::ordered() {
        assert_eq!(barrier.key().parse::<Barrier>(), Ok(barrier));
    }
    assert_eq!("fast-pacing".parse::<Barrier>(), Ok(Barrier::FastPacing));
    assert_eq!(
        "Child_Support".parse::<ProceedingType>(),
        Ok(ProceedingType::ChildSupport)
    );
    let err = "telepathy".parse::<DisabilityCategory>().expect_err("unknown key");
    assert_eq!(err.key, "telepathy");
}
