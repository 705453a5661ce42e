use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;
use std::sync::Arc;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::ReadingSession;
use crate::state::app_state::AppState;

/// Live session named by the `{session_id}` path segment.
///
/// Malformed ids are a 400, unknown or expired ones a 404.
pub struct CurrentSession(pub Arc<ReadingSession>);

impl Deref for CurrentSession {
    type Target = ReadingSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub(crate) fn parse_session_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidSessionId,
            format!("Invalid session id: {raw}"),
        )
    })
}

impl FromRequest for CurrentSession {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let raw = req.match_info().get("session_id").ok_or_else(|| {
                AppError::bad_request(ErrorCode::InvalidSessionId, "Missing session id")
            })?;
            let id = parse_session_id(raw)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let session = app_state.sessions.get(id).await?;
            Ok(CurrentSession(session))
        })
    }
}
