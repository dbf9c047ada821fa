use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::tools::calculator::{
    AnswerSet, Barrier, DisabilityCategory, LetterFields, ProceedingType, RecommendationEngine,
};

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::standard()
}

pub(super) fn custody_hearing_answers() -> AnswerSet {
    AnswerSet::new(
        ProceedingType::Custody,
        [DisabilityCategory::Hearing],
        [Barrier::FastPacing],
    )
}

pub(super) fn low_vision_answers() -> AnswerSet {
    AnswerSet::new(
        ProceedingType::Divorce,
        [DisabilityCategory::Vision],
        [Barrier::WrittenMaterials, Barrier::Transportation],
    )
}

pub(super) fn letter_fields() -> LetterFields {
    LetterFields::dated(NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"))
}

pub(super) fn position(titles: &[&str], title: &str) -> usize {
    titles
        .iter()
        .position(|candidate| *candidate == title)
        .unwrap_or_else(|| panic!("{title} missing from {titles:?}"))
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
