use super::common::*;
use std::sync::{Arc, Barrier};
use std::thread;

use crate::tools::navigator::{NavigatorError, Severity};
use crate::tools::sessions::{
    InMemorySessionRepository, SessionId, SessionRepository, SessionServiceError,
    ToolSessionService,
};

#[test]
fn navigator_session_walks_to_outcome_and_back() {
    let service = service();
    let started = service.start_navigator().expect("session starts");
    let id = started.session_id.clone();
    assert_eq!(started.view.path, vec!["start".to_string()]);
    assert!(id.0.starts_with("nav-"));

    let view = service.navigator_advance(&id, 1).expect("advance to no-request");
    assert_eq!(view.view.node.id, "no-request");
    assert!(view.view.outcome.is_none());

    let view = service.navigator_advance(&id, 1).expect("terminal option");
    let outcome = view.view.outcome.expect("outcome shown");
    assert_eq!(outcome.severity, Severity::Success);
    assert_eq!(outcome.title, "No Accommodation Duty Yet");
    assert_eq!(view.view.path.len(), 2);

    let fetched = service.navigator(&id).expect("session fetch");
    assert!(fetched.view.outcome.is_some());

    let view = service.navigator_back(&id).expect("back");
    assert_eq!(view.view.path, vec!["start".to_string()]);
    assert!(view.view.outcome.is_none());
}

#[test]
fn navigator_out_of_range_option_keeps_stored_state() {
    let service = service();
    let id = service.start_navigator().expect("session starts").session_id;
    service.navigator_advance(&id, 0).expect("request-made");

    let err = service
        .navigator_advance(&id, 99)
        .expect_err("option out of range");
    assert!(matches!(
        err,
        SessionServiceError::Navigator(NavigatorError::OptionOutOfRange { index: 99, .. })
    ));

    let view = service.navigator(&id).expect("session fetch");
    assert_eq!(view.view.node.id, "request-made");
}

#[test]
fn navigator_reset_returns_to_start() {
    let service = service();
    let id = service.start_navigator().expect("session starts").session_id;
    service.navigator_advance(&id, 0).expect("request-made");
    service.navigator_advance(&id, 2).expect("no-interactive");

    let view = service.navigator_reset(&id).expect("reset");
    assert_eq!(view.view.path, vec!["start".to_string()]);
    assert!(!view.view.can_go_back);
}

#[test]
fn quiz_session_scores_and_locks() {
    let service = service();
    let id = service.start_quiz().expect("quiz starts").session_id;

    service.quiz_select(&id, 1).expect("select");
    let view = service.quiz_submit(&id).expect("submit");
    assert_eq!(view.view.session.score(), 1);
    let revealed = view.view.revealed.expect("answer revealed");
    assert!(revealed.was_correct);
    assert_eq!(revealed.correct_index, 1);

    let view = service.quiz_select(&id, 0).expect("select after reveal");
    assert_eq!(view.view.session.selected(), Some(1));

    let view = service.quiz_advance(&id).expect("advance");
    assert_eq!(view.view.session.current_index(), 1);
    assert_eq!(view.view.session.selected(), None);
    assert!(view.view.revealed.is_none());
}

#[test]
fn quiz_completion_and_restart() {
    let service = service();
    let id = service.start_quiz().expect("quiz starts").session_id;
    let total = service.bank().len();

    let mut view = service.quiz(&id).expect("fetch");
    for _ in 0..total {
        view = service.quiz_advance(&id).expect("advance");
    }
    assert!(view.view.session.is_complete());
    assert!(view.view.question.is_none());
    assert_eq!(view.view.summary.expect("summary").total, total);

    let view = service.quiz_restart(&id).expect("restart");
    assert!(!view.view.session.is_complete());
    assert_eq!(view.view.session.current_index(), 0);
    assert_eq!(view.view.session.score(), 0);
}

#[test]
fn sessions_reject_the_wrong_tool() {
    let service = service();
    let quiz_id = service.start_quiz().expect("quiz starts").session_id;
    let nav_id = service.start_navigator().expect("navigator starts").session_id;

    assert!(matches!(
        service.navigator_back(&quiz_id),
        Err(SessionServiceError::WrongKind { expected: "navigator", .. })
    ));
    assert!(matches!(
        service.quiz_submit(&nav_id),
        Err(SessionServiceError::WrongKind { expected: "quiz", .. })
    ));
}

#[test]
fn unknown_session_is_not_found() {
    let service = service();
    let missing = SessionId("nav-999999".to_string());
    assert!(matches!(
        service.navigator(&missing),
        Err(SessionServiceError::NotFound(_))
    ));
}

#[test]
fn repository_failures_surface() {
    let service = ToolSessionService::standard(Arc::new(UnavailableRepository));
    assert!(matches!(
        service.start_quiz(),
        Err(SessionServiceError::Repository(_))
    ));
}

#[test]
fn in_memory_repository_evicts_oldest_session() {
    let repository = Arc::new(InMemorySessionRepository::with_capacity(2));
    let service = ToolSessionService::standard(repository.clone());

    let first = service.start_quiz().expect("first").session_id;
    let second = service.start_quiz().expect("second").session_id;
    let third = service.start_navigator().expect("third").session_id;

    assert_eq!(repository.len(), 2);
    assert!(repository.fetch(&first).expect("fetch").is_none());
    assert!(repository.fetch(&second).expect("fetch").is_some());
    assert!(repository.fetch(&third).expect("fetch").is_some());
}

#[test]
fn concurrent_select_cannot_undo_a_submitted_answer() {
    let store = Arc::new(InMemorySessionRepository::default());
    let setup = ToolSessionService::standard(store.clone());
    let id = setup.start_quiz().expect("quiz starts").session_id;
    setup.quiz_select(&id, 1).expect("correct answer selected");

    let racing = ToolSessionService::standard(Arc::new(RendezvousRepository {
        inner: store.clone(),
        gate: Barrier::new(2),
    }));

    let submitted = thread::scope(|scope| {
        let submit = scope.spawn(|| racing.quiz_submit(&id));
        let select = scope.spawn(|| racing.quiz_select(&id, 0));
        select
            .join()
            .expect("select thread")
            .expect("select applies");
        submit
            .join()
            .expect("submit thread")
            .expect("submit applies")
    });

    let stored = setup.quiz(&id).expect("session fetch");
    assert!(stored.view.session.revealed(), "submitted answer stays revealed");
    assert_eq!(stored.view.session.score(), submitted.view.session.score());
    assert_eq!(
        stored.view.session.selected(),
        submitted.view.session.selected()
    );
}

#[test]
fn concurrent_navigator_moves_apply_one_after_another() {
    let store = Arc::new(InMemorySessionRepository::default());
    let setup = ToolSessionService::standard(store.clone());
    let id = setup.start_navigator().expect("session starts").session_id;

    let racing = ToolSessionService::standard(Arc::new(RendezvousRepository {
        inner: store.clone(),
        gate: Barrier::new(2),
    }));

    thread::scope(|scope| {
        let first = scope.spawn(|| racing.navigator_advance(&id, 0));
        let second = scope.spawn(|| racing.navigator_advance(&id, 0));
        for handle in [first, second] {
            handle.join().expect("advance thread").expect("advance applies");
        }
    });

    // start -> request-made -> granted: both moves land on the stored path.
    let view = setup.navigator(&id).expect("session fetch");
    assert_eq!(view.view.path, vec!["start", "request-made", "granted"]);
}

#[test]
fn session_ids_are_not_sequential() {
    let service = service();
    let first = service.start_quiz().expect("first").session_id;
    let second = service.start_quiz().expect("second").session_id;

    assert_ne!(first, second);
    let suffix = first.0.trim_start_matches("quiz-");
    assert_eq!(suffix.len(), 36, "uuid suffix expected, got {first}");
}
