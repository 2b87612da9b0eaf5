//! Request context and mutation outcome passed to resolvers.
//!
//! `CaptureRequest` is a transport-agnostic view of the in-flight operation:
//! path/query parameters, the parsed body, and best-effort provenance.
//! `MutationOutcome` wraps the payload the operation returned to its caller;
//! resolvers read it, never mutate it.

use std::collections::HashMap;

/// Transport-agnostic view of the request that triggered a mutation.
#[derive(Debug, Clone, Default)]
pub struct CaptureRequest {
    params: HashMap<String, String>,
    body: serde_json::Value,
    pub source_address: Option<String>,
    pub user_agent: Option<String>,
}

impl CaptureRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path or query parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Attach the parsed request body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = body;
        self
    }

    /// Attach provenance metadata.
    #[must_use]
    pub fn with_provenance(
        mut self,
        source_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        self.source_address = source_address;
        self.user_agent = user_agent;
        self
    }

    /// Look up a path/query parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The parsed request body (`Null` when absent).
    #[must_use]
    pub const fn body(&self) -> &serde_json::Value {
        &self.body
    }

    /// Read a top-level string field from the body.
    #[must_use]
    pub fn body_str(&self, field: &str) -> Option<&str> {
        self.body.get(field).and_then(serde_json::Value::as_str)
    }
}

/// The payload a successful mutation returned to its caller.
///
/// Built by the interceptor from the operation's success value; side-effect
/// reads only.
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    payload: serde_json::Value,
}

impl MutationOutcome {
    #[must_use]
    pub const fn new(payload: serde_json::Value) -> Self {
        Self { payload }
    }

    #[must_use]
    pub const fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    /// Read a top-level field from the response payload.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.payload.get(name)
    }

    /// Read a top-level string field from the response payload.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(serde_json::Value::as_str)
    }
}
