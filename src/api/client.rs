//! Transport client for the assistant backend.
//!
//! The [`Transport`] trait is the seam the session controller talks through;
//! [`HttpTransport`] is the reqwest-backed implementation. Each call performs
//! exactly one network attempt and surfaces the raw failure; retry policy, if
//! any, belongs to the caller.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::Endpoint;

/// Failure classes a transport call can produce.
///
/// HTTP error statuses are deliberately not represented here: the backend
/// reports application-level rejections (e.g. an unknown profile id) as an
/// error status with a JSON body, and the controller keys on the decoded
/// body, not the status line.
#[derive(Debug)]
pub enum TransportError {
    /// The service could not be reached at the network level (connection
    /// refused, DNS failure, timeout).
    Unreachable(String),
    /// The service answered, but the body was not valid JSON.
    ParseFailure(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Unreachable(detail) => {
                write!(f, "assistant service unreachable: {detail}")
            }
            TransportError::ParseFailure(detail) => {
                write!(f, "malformed response from assistant service: {detail}")
            }
        }
    }
}

impl std::error::Error for TransportError {}

/// Contract required by the session controller for outbound calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request against `endpoint` and return the decoded JSON
    /// body. `body`, when present, is serialized as the JSON request body.
    async fn call(&self, endpoint: Endpoint, body: Option<Value>) -> Result<Value, TransportError>;
}

/// reqwest-backed transport. One shared client per process; timeouts are
/// whatever reqwest's defaults provide, the controller imposes none.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, endpoint: Endpoint, body: Option<Value>) -> Result<Value, TransportError> {
        let mut request = self.client.request(endpoint.method(), self.url(endpoint));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        match response.json::<Value>().await {
            Ok(value) => Ok(value),
            Err(e) if e.is_decode() => Err(TransportError::ParseFailure(e.to_string())),
            Err(e) => Err(TransportError::Unreachable(e.to_string())),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    enum Script {
        Reply(Value),
        Unreachable,
        ParseFailure,
    }

    /// Transport double that answers every call from a fixed script and
    /// records which endpoints were hit.
    pub struct ScriptedTransport {
        script: Script,
        calls: Mutex<Vec<Endpoint>>,
    }

    impl ScriptedTransport {
        pub fn replying(value: Value) -> Self {
            Self {
                script: Script::Reply(value),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_unreachable() -> Self {
            Self {
                script: Script::Unreachable,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_parse() -> Self {
            Self {
                script: Script::ParseFailure,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<Endpoint> {
            self.calls.lock().expect("call log poisoned").clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn call(
            &self,
            endpoint: Endpoint,
            _body: Option<Value>,
        ) -> Result<Value, TransportError> {
            self.calls.lock().expect("call log poisoned").push(endpoint);
            match &self.script {
                Script::Reply(value) => Ok(value.clone()),
                Script::Unreachable => {
                    Err(TransportError::Unreachable("connection refused".into()))
                }
                Script::ParseFailure => {
                    Err(TransportError::ParseFailure("expected value at line 1".into()))
                }
            }
        }
    }
}
