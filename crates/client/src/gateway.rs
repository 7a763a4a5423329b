//! The request gateway.
//!
//! [`ApiClient`] turns a `(path, method, body, auth)` tuple into a parsed
//! response or a normalized error. Every endpoint except login goes through
//! [`ApiClient::request`]; there is no retry, no caching, and no state
//! between calls. Each call is one independent transaction.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::session::SessionStore;

/// Fixed user-facing message for transport failures. The underlying cause
/// is discarded on purpose; the user can do nothing with a DNS trace.
const UNREACHABLE_MESSAGE: &str = "backend unreachable";

/// Errors surfaced by the gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never reached the server or no response came back.
    #[error("{UNREACHABLE_MESSAGE}")]
    Unreachable,

    /// The server responded with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Best-effort message extracted from the response body.
        message: String,
    },

    /// A successful response did not have the shape the caller expected.
    #[error("Unexpected response shape: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build error: {0}")]
    Build(String),
}

/// HTTP methods the gateway accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// GET (the default).
    #[default]
    Get,
    /// POST.
    Post,
    /// PATCH.
    Patch,
    /// DELETE.
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Options for a single gateway request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method, GET when unspecified.
    pub method: Method,
    /// Optional JSON body.
    pub body: Option<Value>,
    /// Attach the stored bearer token, if one exists. A missing token is
    /// not an error at this layer; the request simply goes out anonymous.
    pub auth: bool,
}

impl RequestOptions {
    /// A plain GET, optionally authenticated.
    #[must_use]
    pub const fn get(auth: bool) -> Self {
        Self {
            method: Method::Get,
            body: None,
            auth,
        }
    }

    /// A POST carrying a JSON body, optionally authenticated.
    #[must_use]
    pub const fn post(body: Value, auth: bool) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
            auth,
        }
    }

    /// A bodyless PATCH, optionally authenticated.
    #[must_use]
    pub const fn patch(auth: bool) -> Self {
        Self {
            method: Method::Patch,
            body: None,
            auth,
        }
    }
}

/// A response body, resolved once at the boundary.
///
/// The service speaks JSON almost everywhere but the gateway does not
/// assume it: the declared content type decides which variant you get.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The body declared and parsed as JSON.
    Json(Value),
    /// Anything else, taken as plain text.
    Text(String),
}

impl Payload {
    /// Deserialize a JSON payload into a typed value.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Decode` if the payload is plain text or the
    /// JSON does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, GatewayError> {
        match self {
            Self::Json(value) => {
                serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
            }
            Self::Text(_) => Err(GatewayError::Decode(
                "expected a JSON body, got plain text".to_string(),
            )),
        }
    }
}

/// The single request gateway mediating all API calls.
///
/// Owns the HTTP client, the fixed base origin, and the session store the
/// bearer token is read from.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    store: SessionStore,
}

impl ApiClient {
    /// Create a gateway for the configured origin, reading bearer tokens
    /// from the given session store.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Build` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ApiConfig, store: SessionStore) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            store,
        })
    }

    /// The session store this gateway reads tokens from.
    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The configured base origin.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) const fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Absolute URL for a path relative to the base origin.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    /// Perform one request and resolve the response.
    ///
    /// See the module docs for the full contract: optional bearer auth,
    /// JSON/text negotiation, and error normalization. Success returns the
    /// payload unchanged.
    ///
    /// # Errors
    ///
    /// `GatewayError::Unreachable` if the transport fails;
    /// `GatewayError::Api` if the server answers with a non-2xx status.
    #[instrument(skip(self, options), fields(method = ?options.method, path = %path))]
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Payload, GatewayError> {
        let mut builder = self
            .client
            .request(options.method.into(), self.endpoint(path));

        if options.auth
            && let Some(token) = self.store.token()
        {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            debug!(error = %e, "Transport failure");
            GatewayError::Unreachable
        })?;

        let status = response.status();
        let payload = resolve_payload(response).await?;

        if status.is_success() {
            Ok(payload)
        } else {
            let message = error_message(&payload, status.as_u16());
            warn!(status = status.as_u16(), message = %message, "API error");
            Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Perform a request and deserialize the JSON payload into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`ApiClient::request`] can return, plus
    /// `GatewayError::Decode` when the payload does not match `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, GatewayError> {
        self.request(path, options).await?.decode()
    }
}

/// Resolve a response body by its declared content type.
async fn resolve_payload(response: reqwest::Response) -> Result<Payload, GatewayError> {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    let text = response.text().await.map_err(|e| {
        debug!(error = %e, "Failed reading response body");
        GatewayError::Unreachable
    })?;

    if is_json {
        // Known lossy recovery: a body that claims to be JSON but does not
        // parse becomes an empty object rather than an error.
        let value = serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!(error = %e, "Malformed JSON body, falling back to empty object");
            Value::Object(serde_json::Map::new())
        });
        Ok(Payload::Json(value))
    } else {
        Ok(Payload::Text(text))
    }
}

/// Extract a human-readable message from a failure payload.
///
/// JSON bodies prefer a `detail` field; a non-string `detail` or a body
/// without one is serialized whole. Text bodies are used as-is, with
/// `HTTP <status>` standing in for an empty body.
fn error_message(payload: &Payload, status: u16) -> String {
    match payload {
        Payload::Json(value) => match value.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(detail) => detail.to_string(),
            None => value.to_string(),
        },
        Payload::Text(text) => {
            if text.is_empty() {
                format!("HTTP {status}")
            } else {
                text.clone()
            }
        }
    }
}
