use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error("API error: {0}")]
    Api(#[source] ApiError),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    #[error("{body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Validation(ValidationMessages),

    #[error("contact {0} not found")]
    NotFound(i64),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Structured failure body the remote API returns on validation errors:
/// `{"Messages":[{"Message":"..."}]}`. Only the first message is surfaced.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationMessages {
    #[serde(rename = "Messages")]
    pub messages: Vec<ValidationMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationMessage {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "PropertyName", default)]
    pub property_name: Option<String>,
}

impl ValidationMessages {
    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(|m| m.message.as_str())
    }
}

impl std::fmt::Display for ValidationMessages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first_message().unwrap_or("validation failed"))
    }
}

impl From<ApiError> for ContactsError {
    fn from(e: ApiError) -> Self {
        ContactsError::Api(e)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() || e.is_connect() {
            ApiError::Network(e.to_string())
        } else {
            ApiError::Network(format!("request failed: {}", e))
        }
    }
}

impl From<reqwest::Error> for ContactsError {
    fn from(e: reqwest::Error) -> Self {
        ContactsError::Api(e.into())
    }
}

pub type Result<T> = std::result::Result<T, ContactsError>;
pub type ApiResult<T> = std::result::Result<T, ApiError>;
