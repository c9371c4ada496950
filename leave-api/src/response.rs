use crate::error::{LeaveApiError, RequestError};

/// A successful response body, parsed according to its declared content type
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    pub fn into_json(self) -> Result<serde_json::Value, LeaveApiError> {
        match self {
            ResponseBody::Json(value) => Ok(value),
            ResponseBody::Text(text) => {
                // The body may still be JSON served without a JSON content type
                serde_json::from_str(&text).map_err(LeaveApiError::Decode)
            }
        }
    }
}

pub(crate) fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// Turn a raw HTTP response into either a parsed body or a [`RequestError`].
///
/// Kept free of any transport type so the decision logic can be exercised
/// without a server.
pub fn interpret(
    status: u16,
    status_text: &str,
    content_type: Option<&str>,
    body: String,
) -> Result<ResponseBody, LeaveApiError> {
    if !(200..300).contains(&status) {
        return Err(RequestError::from_body(status, status_text, &body).into());
    }

    if is_json(content_type) {
        let value = serde_json::from_str(&body)?;
        Ok(ResponseBody::Json(value))
    } else {
        Ok(ResponseBody::Text(body))
    }
}
