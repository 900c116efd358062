//! Wire payloads for the Artemis assistant backend.
//!
//! Every endpoint the client talks to is listed in [`Endpoint`]; the structs
//! below mirror the JSON bodies the backend returns. Unknown fields are
//! ignored and missing fields fall back to defaults so that a degraded
//! backend never turns into a decode error at this layer.

use serde::Deserialize;

pub mod client;

pub use client::{HttpTransport, Transport, TransportError};

/// The closed set of backend endpoints. No user-supplied path ever reaches
/// the transport; callers pick a variant and the variant knows its relative
/// path and HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /ai/health`
    Health,
    /// `POST /ai/process` with `{"text": ...}`
    Process,
    /// `POST /ai/profile/switch` with `{"profile_id": ...}`
    ProfileSwitch,
    /// `POST /ai/character/switch` with `{"character_id": ...}`
    CharacterSwitch,
    /// `POST /ai/sync/force`
    ForceSync,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/ai/health",
            Endpoint::Process => "/ai/process",
            Endpoint::ProfileSwitch => "/ai/profile/switch",
            Endpoint::CharacterSwitch => "/ai/character/switch",
            Endpoint::ForceSync => "/ai/sync/force",
        }
    }

    pub fn method(self) -> reqwest::Method {
        match self {
            Endpoint::Health => reqwest::Method::GET,
            _ => reqwest::Method::POST,
        }
    }
}

/// Response shape of `GET /ai/health`. The backend attaches component
/// details we do not consume; only `status` matters to the client.
#[derive(Debug, Default, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

/// Response shape of `POST /ai/process`.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessResponse {
    #[serde(default)]
    pub response: Option<String>,
}

/// Response shape of the profile/character switch endpoints. The backend
/// reports rejections as an error body without `success`, so the default
/// of `false` is the rejection path.
#[derive(Debug, Default, Deserialize)]
pub struct SwitchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response shape of `POST /ai/sync/force`.
#[derive(Debug, Default, Deserialize)]
pub struct SyncResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub processed_files: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_endpoint_is_the_only_get() {
        for endpoint in [
            Endpoint::Process,
            Endpoint::ProfileSwitch,
            Endpoint::CharacterSwitch,
            Endpoint::ForceSync,
        ] {
            assert_eq!(endpoint.method(), reqwest::Method::POST);
        }
        assert_eq!(Endpoint::Health.method(), reqwest::Method::GET);
    }

    #[test]
    fn switch_response_defaults_to_rejected() {
        let decoded: SwitchResponse =
            serde_json::from_value(serde_json::json!({"detail": "no such profile"}))
                .expect("Failed to decode switch response");
        assert!(!decoded.success);
    }

    #[test]
    fn process_response_tolerates_extra_fields() {
        let decoded: ProcessResponse = serde_json::from_value(serde_json::json!({
            "response": "Hello!",
            "confidence": 0.9,
            "response_type": "greeting"
        }))
        .expect("Failed to decode process response");
        assert_eq!(decoded.response.as_deref(), Some("Hello!"));
    }
}
