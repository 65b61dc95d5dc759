// Core types and errors

use serde::{Deserialize, Serialize};
use thiserror::Error;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// The result type used throughout the Civo SDK
pub type CivoResult<T> = Result<T, CivoError>;

/// Convert reqwest::Error to our CivoError
///
/// Anything reqwest surfaces outside a completed HTTP exchange (refused
/// connections, timeouts, DNS resolution) is a transport failure, so callers
/// see one network-error kind.
impl From<reqwest::Error> for CivoError {
    fn from(err: reqwest::Error) -> Self {
        CivoError::Transport {
            message: err.to_string(),
            source: Some(Arc::new(err) as Arc<dyn std::error::Error + Send + Sync>),
        }
    }
}

/// A secure container for API tokens that zeroes memory when dropped
pub struct SecureToken {
    token: String,
}

impl SecureToken {
    /// Create a new secure token
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    /// Get a reference to the underlying token
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Whether the token is empty (unconfigured)
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

// Implement Deref for convenience in passing to request headers
impl Deref for SecureToken {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

// Implement Drop to zero memory when the token is dropped
impl Drop for SecureToken {
    fn drop(&mut self) {
        // Overwrite the string with zeros to remove sensitive data from memory
        unsafe {
            let bytes = self.token.as_bytes_mut();
            bytes.iter_mut().for_each(|b| *b = 0);
        }
    }
}

// Prevent accidental printing of tokens in logs/debug output
impl fmt::Debug for SecureToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureToken([REDACTED])")
    }
}

// Display implementation also redacts the token
impl fmt::Display for SecureToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED TOKEN]")
    }
}

impl Clone for SecureToken {
    fn clone(&self) -> Self {
        Self {
            token: self.token.clone(),
        }
    }
}

#[derive(Debug, Error, Clone)]
pub enum CivoError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("transport failure: {message}")]
    Transport {
        message: String,
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },

    #[error("API returned {status}: {reason}")]
    Api {
        status: u16,
        /// Provider error code when the body carried a structured error
        code: Option<String>,
        reason: String,
    },

    #[error("failed to decode API response: {message}")]
    Decode {
        message: String,
        /// Bounded prefix of the offending body, kept for diagnostics
        body: Option<String>,
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{resource} not found: {name}")]
    NotFound { resource: &'static str, name: String },

    #[error("API token not provided")]
    MissingToken,
}

// Helper constructors. These log at the point the error value is built so a
// failure is visible even when the caller discards the error detail.
impl CivoError {
    pub fn transport_error<T: Into<String>>(
        message: T,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        let error = Self::Transport {
            message: message.into(),
            source: source.map(|e| Arc::new(e) as Arc<dyn std::error::Error + Send + Sync>),
        };
        log::error!("{}", error);
        error
    }

    pub fn api_error<T: Into<String>>(status: u16, code: Option<String>, reason: T) -> Self {
        let error = Self::Api {
            status,
            code,
            reason: reason.into(),
        };
        log::error!("{}", error);
        error
    }

    pub fn decode_error<T: Into<String>>(
        message: T,
        body: &[u8],
        source: Option<impl std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        let error = Self::Decode {
            message: message.into(),
            body: Some(body_prefix(body)),
            source: source.map(|e| Arc::new(e) as Arc<dyn std::error::Error + Send + Sync>),
        };
        log::error!("{}", error);
        error
    }

    pub fn not_found(resource: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            name: name.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn source_error(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        match self {
            Self::Transport { source, .. } => source.as_ref().map(|s| s.as_ref()),
            Self::Decode { source, .. } => source.as_ref().map(|s| s.as_ref()),
            _ => None,
        }
    }
}

/// How much of a malformed response body is preserved in a decode error.
const BODY_PREFIX_LIMIT: usize = 256;

fn body_prefix(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(BODY_PREFIX_LIMIT) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.into_owned(),
    }
}

/// Outcome envelope returned by action-style endpoints (typically delete).
///
/// The server populates either `result == "success"` or the error fields. A
/// malformed payload carrying both is decoded verbatim; `is_success` only
/// consults `result`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimpleResponse {
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_reason: Option<String>,
    #[serde(default)]
    pub error_details: Option<String>,
}

impl SimpleResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}

/// One page of a paginated collection.
///
/// `page` is 1-indexed. The decoder never validates `page <= pages`; the
/// server is the source of truth and mismatches are surfaced as-is.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    pub page: u32,
    pub per_page: u32,
    pub pages: u32,
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub items: Vec<T>,
}

// A `null` or missing `items` key always decodes to an empty vec so callers
// never see an absent collection.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Structured error body the provider attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub reason: Option<String>,
    pub details: Option<String>,
}

static TOKEN_PATTERN: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();

/// Helper function to sanitize error messages to prevent leaking credentials
pub fn sanitize_error_message(message: &str) -> String {
    // Remove any token-like substrings before the text reaches an error value
    let token_pattern = TOKEN_PATTERN.get_or_init(|| {
        regex::Regex::new(r"[A-Za-z0-9_-]{40,}")
            .unwrap_or_else(|_| regex::Regex::new(r"$^").unwrap())
    });
    token_pattern.replace_all(message, "[REDACTED]").into_owned()
}
