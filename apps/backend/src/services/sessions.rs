//! Interactive reading sessions.
//!
//! Each session owns one [`DrawEngine`] behind a `parking_lot::Mutex`. Draws
//! use `try_lock`, so a trigger that arrives while another is being served
//! is rejected rather than queued. Interpretation never holds the lock across
//! the network call; a generation counter, bumped on every start and reset,
//! discards results that arrive for a reading that no longer exists.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use parking_lot::{Mutex, MutexGuard};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::context::ReadingContext;
use super::readings::ReadingView;
use crate::domain::{
    DeckVariant, DrawEngine, DrawError, DrawOutcome, DrawState, InterpretationRequest,
    PersonaStyle,
};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::interpretation::{InterpretationClient, InterpretationError, USER_MESSAGE};

const MAX_SESSIONS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("another request is already drawing for this session")]
    Busy,
    #[error("an interpretation is already in progress")]
    InterpretationPending,
    #[error("the reading is not complete yet")]
    ReadingIncomplete,
    #[error("the reading changed while it was being interpreted")]
    ReadingChanged,
    #[error("session {0} not found")]
    NotFound(Uuid),
    #[error(transparent)]
    Draw(#[from] DrawError),
    #[error(transparent)]
    Interpretation(#[from] InterpretationError),
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        let detail = err.to_string();
        match err {
            SessionError::Busy => DomainError::conflict(ConflictKind::DrawInProgress, detail),
            SessionError::InterpretationPending => {
                DomainError::conflict(ConflictKind::InterpretationPending, detail)
            }
            SessionError::ReadingIncomplete => {
                DomainError::conflict(ConflictKind::ReadingIncomplete, detail)
            }
            SessionError::ReadingChanged => {
                DomainError::conflict(ConflictKind::ReadingChanged, detail)
            }
            SessionError::NotFound(_) => DomainError::not_found(NotFoundKind::Session, detail),
            SessionError::Draw(e) => e.into(),
            SessionError::Interpretation(_) => {
                DomainError::infra(InfraErrorKind::Interpretation, detail)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InterpretationStatus {
    Idle,
    Pending,
    Ready { text: String },
    /// Retryable; the reading is untouched.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub state: DrawState,
    pub deck: Option<DeckVariant>,
    pub reading: Option<ReadingView>,
    pub interpretation: InterpretationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawResponse {
    /// `drawn`, `already_complete` or `ignored`.
    pub outcome: &'static str,
    pub session: SessionView,
}

struct SessionState {
    engine: DrawEngine,
    generation: u64,
    interpretation: InterpretationStatus,
}

impl SessionState {
    fn invalidate_interpretation(&mut self) {
        self.generation += 1;
        self.interpretation = InterpretationStatus::Idle;
    }
}

/// Issued by [`ReadingSession::begin_interpretation`]; ties a result to the
/// reading it was requested for.
#[derive(Debug, Clone)]
pub struct InterpretationTicket {
    pub generation: u64,
    pub request: InterpretationRequest,
}

pub struct ReadingSession {
    id: Uuid,
    state: Mutex<SessionState>,
}

impl ReadingSession {
    pub fn new(engine: DrawEngine) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: Mutex::new(SessionState {
                engine,
                generation: 0,
                interpretation: InterpretationStatus::Idle,
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    fn try_state(&self) -> Result<MutexGuard<'_, SessionState>, SessionError> {
        self.state.try_lock().ok_or(SessionError::Busy)
    }

    /// Begin a fresh reading. Any in-flight interpretation becomes stale.
    pub fn start(
        &self,
        spread: &str,
        deck: DeckVariant,
        question: &str,
        persona: PersonaStyle,
        ctx: &ReadingContext,
    ) -> Result<SessionView, SessionError> {
        let mut state = self.try_state()?;
        state.invalidate_interpretation();
        state.engine.start(spread, deck, question, persona)?;
        info!(session = %self.id, spread = %spread, "session reading started");
        Ok(self.render(&state, ctx))
    }

    pub fn draw(&self, ctx: &ReadingContext) -> Result<DrawResponse, SessionError> {
        let mut state = self.try_state()?;
        let outcome = match state.engine.draw_one()? {
            DrawOutcome::Drawn(_) => "drawn",
            DrawOutcome::AlreadyComplete => "already_complete",
            DrawOutcome::Ignored => "ignored",
        };
        Ok(DrawResponse {
            outcome,
            session: self.render(&state, ctx),
        })
    }

    /// Back to an empty reading; any in-flight interpretation becomes stale.
    pub fn reset(&self, ctx: &ReadingContext) -> Result<SessionView, SessionError> {
        let mut state = self.try_state()?;
        state.invalidate_interpretation();
        state.engine.reset()?;
        debug!(session = %self.id, generation = state.generation, "session reset");
        Ok(self.render(&state, ctx))
    }

    pub fn view(&self, ctx: &ReadingContext) -> SessionView {
        let state = self.state.lock();
        self.render(&state, ctx)
    }

    /// Mark the reading as being interpreted and hand out the request.
    ///
    /// Fails without changing anything when the reading is incomplete or an
    /// interpretation is already pending.
    pub fn begin_interpretation(
        &self,
        ctx: &ReadingContext,
    ) -> Result<InterpretationTicket, SessionError> {
        let mut state = self.try_state()?;
        if state.interpretation == InterpretationStatus::Pending {
            return Err(SessionError::InterpretationPending);
        }
        let reading = state.engine.reading().ok_or(DrawError::NotStarted)?;
        if !reading.is_complete() {
            return Err(SessionError::ReadingIncomplete);
        }
        let request = ctx.prompts().build_request(reading, reading.persona());
        state.interpretation = InterpretationStatus::Pending;
        Ok(InterpretationTicket {
            generation: state.generation,
            request,
        })
    }

    /// Record the outcome of a ticket. Results for an older generation are
    /// dropped and reported as [`SessionError::ReadingChanged`].
    pub fn finish_interpretation(
        &self,
        generation: u64,
        result: Result<String, InterpretationError>,
    ) -> Result<String, SessionError> {
        let mut state = self.state.lock();
        if state.generation != generation {
            debug!(session = %self.id, generation, current = state.generation, "stale interpretation discarded");
            return Err(SessionError::ReadingChanged);
        }
        match result {
            Ok(text) => {
                state.interpretation = InterpretationStatus::Ready { text: text.clone() };
                Ok(text)
            }
            Err(err) => {
                warn!(session = %self.id, error = %err, "interpretation failed");
                state.interpretation = InterpretationStatus::Failed {
                    message: USER_MESSAGE.to_string(),
                };
                Err(SessionError::Interpretation(err))
            }
        }
    }

    /// Full interpretation round trip for the current reading.
    pub async fn interpret(
        &self,
        ctx: &ReadingContext,
        client: &dyn InterpretationClient,
    ) -> Result<String, SessionError> {
        let ticket = self.begin_interpretation(ctx)?;
        let guard = PendingGuard {
            session: self,
            generation: ticket.generation,
            armed: true,
        };
        let result = client.interpret(&ticket.request, ctx.generation()).await;
        guard.disarm();
        self.finish_interpretation(ticket.generation, result)
    }

    fn render(&self, state: &SessionState, ctx: &ReadingContext) -> SessionView {
        SessionView {
            id: self.id,
            state: state.engine.state(),
            deck: state.engine.deck(),
            reading: state.engine.reading().map(|r| ReadingView::new(r, ctx)),
            interpretation: state.interpretation.clone(),
        }
    }
}

/// Clears `Pending` if the interpreting future is dropped before it finishes.
struct PendingGuard<'a> {
    session: &'a ReadingSession,
    generation: u64,
    armed: bool,
}

impl PendingGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.session.state.lock();
        if state.generation == self.generation
            && state.interpretation == InterpretationStatus::Pending
        {
            state.interpretation = InterpretationStatus::Idle;
        }
    }
}

/// In-memory session registry; idle sessions expire on their own.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<Uuid, Arc<ReadingSession>>,
}

impl SessionStore {
    pub fn new(idle: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(MAX_SESSIONS)
                .time_to_idle(idle)
                .build(),
        }
    }

    pub async fn insert(&self, session: ReadingSession) -> Arc<ReadingSession> {
        let session = Arc::new(session);
        self.cache.insert(session.id(), Arc::clone(&session)).await;
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<Arc<ReadingSession>, SessionError> {
        self.cache.get(&id).await.ok_or(SessionError::NotFound(id))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        self.cache
            .remove(&id)
            .await
            .map(|_| ())
            .ok_or(SessionError::NotFound(id))
    }
}
