use serde::Deserialize;

/// A non-success response from the leave service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub status: u16,
    pub status_text: String,
    pub message: String,
}

impl RequestError {
    /// Build an error from a failed response body.
    ///
    /// The service reports failures as `{"error": "..."}`. Any other JSON
    /// document is kept verbatim, and a body that is not JSON at all is used
    /// as the message as-is.
    pub fn from_body(status: u16, status_text: impl Into<String>, body: &str) -> Self {
        let message = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(json) => match serde_json::from_value::<ErrorResponse>(json.clone()) {
                Ok(ErrorResponse { error }) if !error.is_empty() => error,
                _ => json.to_string(),
            },
            Err(_) => body.to_string(),
        };

        Self {
            status,
            status_text: status_text.into(),
            message,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.status, self.status_text, self.message)
    }
}

impl std::error::Error for RequestError {}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug)]
pub enum LeaveApiError {
    Http(RequestError),
    Transport(reqwest::Error),
    Decode(serde_json::Error),
}

impl LeaveApiError {
    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            LeaveApiError::Http(e) => Some(e.status),
            _ => None,
        }
    }
}

impl From<RequestError> for LeaveApiError {
    fn from(value: RequestError) -> Self {
        LeaveApiError::Http(value)
    }
}

impl From<reqwest::Error> for LeaveApiError {
    fn from(value: reqwest::Error) -> Self {
        LeaveApiError::Transport(value)
    }
}

impl From<serde_json::Error> for LeaveApiError {
    fn from(value: serde_json::Error) -> Self {
        LeaveApiError::Decode(value)
    }
}

impl std::fmt::Display for LeaveApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveApiError::Http(e) => e.fmt(f),
            LeaveApiError::Transport(e) => write!(f, "Network error: {}", e),
            LeaveApiError::Decode(e) => write!(f, "Unexpected response: {}", e),
        }
    }
}

impl std::error::Error for LeaveApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeaveApiError::Http(e) => Some(e),
            LeaveApiError::Transport(e) => Some(e),
            LeaveApiError::Decode(e) => Some(e),
        }
    }
}
