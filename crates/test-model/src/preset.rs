use recipe_chat_model::{ErrorKind, Role};
use serde::{Deserialize, Serialize};

/// The failure a preset response reports while it is failing.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PresetFailure {
    #[default]
    Network,
    Authentication,
    RateLimitExceeded,
    MalformedResponse,
    Other,
}

impl From<PresetFailure> for ErrorKind {
    fn from(failure: PresetFailure) -> Self {
        match failure {
            PresetFailure::Network => ErrorKind::Network,
            PresetFailure::Authentication => ErrorKind::Authentication,
            PresetFailure::RateLimitExceeded => ErrorKind::RateLimitExceeded,
            PresetFailure::MalformedResponse => ErrorKind::MalformedResponse,
            PresetFailure::Other => ErrorKind::Other,
        }
    }
}

fn default_role() -> Role {
    Role::Assistant
}

/// The preset response for one assistant step.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetResponse {
    /// Content of the reply, returned verbatim (untrimmed).
    pub content: String,
    /// Role of the reply. Anything but `assistant` simulates a
    /// misbehaving provider.
    #[serde(default = "default_role")]
    pub role: Role,
    /// If set, the request will fail in the first `failures` attempts.
    /// `Some(0)` means the request will fail infinitely.
    #[serde(default)]
    pub failures: Option<u64>,
    /// The kind of failure to report.
    #[serde(default)]
    pub failure: PresetFailure,
}

impl PresetResponse {
    /// Creates a `PresetResponse` replying with the specified content.
    #[inline]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: Role::Assistant,
            failures: None,
            failure: PresetFailure::default(),
        }
    }

    /// Creates a `PresetResponse` that always fails with `failure`.
    #[inline]
    pub fn always_failing(failure: PresetFailure) -> Self {
        Self::with_content("").with_failures(0).with_failure(failure)
    }

    /// Sets failure times before a successful response. `0` means the
    /// response will always be a failure.
    #[inline]
    pub fn with_failures(mut self, failures: u64) -> Self {
        self.failures = Some(failures);
        self
    }

    /// Sets the kind of failure reported while failing.
    #[inline]
    pub fn with_failure(mut self, failure: PresetFailure) -> Self {
        self.failure = failure;
        self
    }

    /// Overrides the role of the reply.
    #[inline]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let response = PresetResponse::with_content("## Lemon Pasta")
            .with_failures(2)
            .with_failure(PresetFailure::RateLimitExceeded);

        let serialized = serde_json::to_string(&response).unwrap();
        let deserialized: PresetResponse =
            serde_json::from_str(&serialized).unwrap();

        assert_eq!(response, deserialized);
    }

    #[test]
    fn test_defaults() {
        let response: PresetResponse =
            serde_json::from_str(r#"{"content": "Hi"}"#).unwrap();
        assert_eq!(response, PresetResponse::with_content("Hi"));
    }
}
