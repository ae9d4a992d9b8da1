//! Task-local trace context for web requests.
//!
//! `RequestTrace` generates a [`TraceId`] per request, stores it in the
//! request extensions and runs the rest of the pipeline inside
//! [`with_trace_id`], so error rendering and logging can read it through
//! [`trace_id`] without threading it through every call.

use std::fmt;
use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

const UNKNOWN: &str = "unknown";

/// Identifier correlating a request, its log lines and its response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(String);

impl TraceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TraceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

task_local! {
    static CURRENT: TraceId;
}

/// Trace id of the current task, or `"unknown"` outside a request.
pub fn trace_id() -> String {
    CURRENT
        .try_with(|id| id.0.clone())
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Run `future` with `id` as the current trace id.
pub async fn with_trace_id<F>(id: TraceId, future: F) -> F::Output
where
    F: Future,
{
    CURRENT.scope(id, future).await
}
