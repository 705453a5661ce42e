//! Task-local trace id for the request being served.
//!
//! `RequestTrace` opens the scope; error rendering reads it so problem
//! bodies and the `x-trace-id` header agree.

use std::future::Future;

use tokio::task_local;

/// Returned outside any request scope.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` visible to [`trace_id()`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_outside_scope() {
        assert_eq!(trace_id(), UNKNOWN_TRACE_ID);
    }

    #[tokio::test]
    async fn inner_scope_shadows_outer() {
        let seen = with_trace_id("outer".into(), async {
            let inner = with_trace_id("inner".into(), async { trace_id() }).await;
            (inner, trace_id())
        })
        .await;
        assert_eq!(seen, ("inner".to_string(), "outer".to_string()));
        assert_eq!(trace_id(), UNKNOWN_TRACE_ID);
    }
}
