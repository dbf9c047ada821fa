use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::tools::navigator::NavigatorState;
use crate::tools::quiz::QuizSession;

/// Identifier handed to the visitor when a tool session starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Navigator state plus the terminal option currently on display, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorSession {
    pub state: NavigatorState,
    pub shown_outcome: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolSession {
    Navigator(NavigatorSession),
    Quiz(QuizSession),
}

impl ToolSession {
    pub const fn kind(&self) -> &'static str {
        match self {
            ToolSession::Navigator(_) => "navigator",
            ToolSession::Quiz(_) => "quiz",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: SessionId,
    pub session: ToolSession,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    /// Applies `change` to the stored record while holding the store's lock,
    /// so no other transition can interleave. `None` when the id is unknown.
    fn modify<T, F>(&self, id: &SessionId, change: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
struct SessionSlots {
    records: HashMap<SessionId, SessionRecord>,
    order: VecDeque<SessionId>,
}

/// Process-local session store holding at most `capacity` sessions; the
/// oldest session is evicted first.
#[derive(Debug)]
pub struct InMemorySessionRepository {
    slots: Mutex<SessionSlots>,
    capacity: usize,
}

impl InMemorySessionRepository {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Mutex::new(SessionSlots::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .map(|slots| slots.records.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::with_capacity(1024)
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("session store lock poisoned".to_string())
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut slots = self.slots.lock().map_err(|_| poisoned())?;
        if slots.records.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        while slots.records.len() >= self.capacity {
            match slots.order.pop_front() {
                Some(oldest) => {
                    slots.records.remove(&oldest);
                }
                None => break,
            }
        }
        slots.order.push_back(record.id.clone());
        slots.records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn modify<T, F>(&self, id: &SessionId, change: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord) -> T,
    {
        let mut slots = self.slots.lock().map_err(|_| poisoned())?;
        Ok(slots.records.get_mut(id).map(change))
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let slots = self.slots.lock().map_err(|_| poisoned())?;
        Ok(slots.records.get(id).cloned())
    }
}
