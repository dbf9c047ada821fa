//! Per-visitor ownership of navigator and quiz state.

pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use repository::{
    InMemorySessionRepository, NavigatorSession, RepositoryError, SessionId, SessionRecord,
    SessionRepository, ToolSession,
};
pub use router::{session_error_status, session_router, OptionChoice};
pub use service::{
    NavigatorSessionView, QuizSessionView, SessionServiceError, ToolSessionService,
};
