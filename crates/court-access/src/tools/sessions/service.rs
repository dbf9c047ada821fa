use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::repository::{
    NavigatorSession, RepositoryError, SessionId, SessionRecord, SessionRepository, ToolSession,
};
use crate::tools::navigator::{
    DecisionGraph, NavigatorError, NavigatorState, NavigatorView, NodeOption, Step,
    DEFAULT_PROGRESS_STEPS,
};
use crate::tools::quiz::{QuestionBank, QuizSession, QuizView};

/// `<prefix>-<random v4 uuid>`; ids are never reused or enumerable.
fn next_session_id(prefix: &str) -> SessionId {
    SessionId(format!("{prefix}-{}", Uuid::new_v4()))
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigatorSessionView {
    pub session_id: SessionId,
    #[serde(flatten)]
    pub view: NavigatorView,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSessionView {
    pub session_id: SessionId,
    #[serde(flatten)]
    pub view: QuizView,
}

/// Service owning navigator and quiz state for each visitor session.
pub struct ToolSessionService<R> {
    repository: Arc<R>,
    graph: Arc<DecisionGraph>,
    bank: Arc<QuestionBank>,
    progress_steps: usize,
}

impl<R> ToolSessionService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(
        repository: Arc<R>,
        graph: Arc<DecisionGraph>,
        bank: Arc<QuestionBank>,
        progress_steps: usize,
    ) -> Self {
        Self {
            repository,
            graph,
            bank,
            progress_steps: progress_steps.max(1),
        }
    }

    /// Service over the authored navigator graph and question bank.
    pub fn standard(repository: Arc<R>) -> Self {
        Self::new(
            repository,
            Arc::new(DecisionGraph::standard()),
            Arc::new(QuestionBank::standard()),
            DEFAULT_PROGRESS_STEPS,
        )
    }

    pub fn graph(&self) -> &DecisionGraph {
        &self.graph
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn start_navigator(&self) -> Result<NavigatorSessionView, SessionServiceError> {
        let record = SessionRecord {
            id: next_session_id("nav"),
            session: ToolSession::Navigator(NavigatorSession {
                state: NavigatorState::new(&self.graph),
                shown_outcome: None,
            }),
        };
        let record = self.repository.insert(record)?;
        info!(session = %record.id, "navigator session started");
        self.navigator_view(&record)
    }

    pub fn navigator(&self, id: &SessionId) -> Result<NavigatorSessionView, SessionServiceError> {
        let record = self.load(id)?;
        self.navigator_view(&record)
    }

    pub fn navigator_advance(
        &self,
        id: &SessionId,
        option: usize,
    ) -> Result<NavigatorSessionView, SessionServiceError> {
        self.navigator_transition(id, |session, graph| {
            match session.state.advance(graph, option)? {
                Step::Moved(_) => session.shown_outcome = None,
                Step::Terminal(_) => session.shown_outcome = Some(option),
            }
            Ok(())
        })
    }

    pub fn navigator_back(&self, id: &SessionId) -> Result<NavigatorSessionView, SessionServiceError> {
        self.navigator_transition(id, |session, _| {
            session.state.back();
            session.shown_outcome = None;
            Ok(())
        })
    }

    pub fn navigator_reset(
        &self,
        id: &SessionId,
    ) -> Result<NavigatorSessionView, SessionServiceError> {
        self.navigator_transition(id, |session, _| {
            session.state.reset();
            session.shown_outcome = None;
            Ok(())
        })
    }

    pub fn start_quiz(&self) -> Result<QuizSessionView, SessionServiceError> {
        let record = SessionRecord {
            id: next_session_id("quiz"),
            session: ToolSession::Quiz(QuizSession::for_bank(&self.bank)),
        };
        let record = self.repository.insert(record)?;
        info!(session = %record.id, questions = self.bank.len(), "quiz session started");
        self.quiz_view(&record)
    }

    pub fn quiz(&self, id: &SessionId) -> Result<QuizSessionView, SessionServiceError> {
        let record = self.load(id)?;
        self.quiz_view(&record)
    }

    pub fn quiz_select(
        &self,
        id: &SessionId,
        option: usize,
    ) -> Result<QuizSessionView, SessionServiceError> {
        self.quiz_transition(id, |session, bank| {
            if let Some(question) = bank.get(session.current_index()) {
                session.select(question, option);
            }
        })
    }

    pub fn quiz_submit(&self, id: &SessionId) -> Result<QuizSessionView, SessionServiceError> {
        self.quiz_transition(id, |session, bank| {
            if let Some(question) = bank.get(session.current_index()) {
                session.submit(question);
            }
        })
    }

    pub fn quiz_advance(&self, id: &SessionId) -> Result<QuizSessionView, SessionServiceError> {
        self.quiz_transition(id, |session, _| session.advance())
    }

    pub fn quiz_restart(&self, id: &SessionId) -> Result<QuizSessionView, SessionServiceError> {
        self.quiz_transition(id, |session, _| session.restart())
    }

    fn load(&self, id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        self.repository
            .fetch(id)?
            .ok_or_else(|| SessionServiceError::NotFound(id.clone()))
    }

    fn navigator_transition<F>(
        &self,
        id: &SessionId,
        transition: F,
    ) -> Result<NavigatorSessionView, SessionServiceError>
    where
        F: FnOnce(&mut NavigatorSession, &DecisionGraph) -> Result<(), NavigatorError>,
    {
        let applied = self.repository.modify(
            id,
            |record: &mut SessionRecord| -> Result<NavigatorSessionView, SessionServiceError> {
                let ToolSession::Navigator(session) = &mut record.session else {
                    return Err(SessionServiceError::WrongKind {
                        id: id.clone(),
                        expected: "navigator",
                    });
                };

                let mut next = session.clone();
                transition(&mut next, &self.graph)?;
                *session = next;
                self.navigator_view(record)
            },
        )?;

        let view = applied.ok_or_else(|| SessionServiceError::NotFound(id.clone()))??;
        debug!(session = %id, "navigator session updated");
        Ok(view)
    }

    fn quiz_transition<F>(
        &self,
        id: &SessionId,
        transition: F,
    ) -> Result<QuizSessionView, SessionServiceError>
    where
        F: FnOnce(&mut QuizSession, &QuestionBank),
    {
        let applied = self.repository.modify(
            id,
            |record: &mut SessionRecord| -> Result<QuizSessionView, SessionServiceError> {
                let ToolSession::Quiz(session) = &mut record.session else {
                    return Err(SessionServiceError::WrongKind {
                        id: id.clone(),
                        expected: "quiz",
                    });
                };

                transition(session, &self.bank);
                self.quiz_view(record)
            },
        )?;

        let view = applied.ok_or_else(|| SessionServiceError::NotFound(id.clone()))??;
        debug!(session = %id, "quiz session updated");
        Ok(view)
    }

    fn navigator_view(
        &self,
        record: &SessionRecord,
    ) -> Result<NavigatorSessionView, SessionServiceError> {
        let ToolSession::Navigator(session) = &record.session else {
            return Err(SessionServiceError::WrongKind {
                id: record.id.clone(),
                expected: "navigator",
            });
        };

        let node = session.state.current_node(&self.graph)?;
        let outcome = session
            .shown_outcome
            .and_then(|index| node.options.get(index))
            .and_then(NodeOption::outcome);
        let view = NavigatorView::build(&self.graph, &session.state, outcome, self.progress_steps)?;

        Ok(NavigatorSessionView {
            session_id: record.id.clone(),
            view,
        })
    }

    fn quiz_view(&self, record: &SessionRecord) -> Result<QuizSessionView, SessionServiceError> {
        let ToolSession::Quiz(session) = &record.session else {
            return Err(SessionServiceError::WrongKind {
                id: record.id.clone(),
                expected: "quiz",
            });
        };

        Ok(QuizSessionView {
            session_id: record.id.clone(),
            view: QuizView::build(&self.bank, session),
        })
    }
}

/// Error raised by the session service.
#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error("session {0} not found")]
    NotFound(SessionId),
    #[error("session {id} is not a {expected} session")]
    WrongKind { id: SessionId, expected: &'static str },
    #[error(transparent)]
    Navigator(#[from] NavigatorError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
