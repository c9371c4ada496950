pub mod endpoints;
mod error;
mod macros;
pub mod repositories;
pub mod request;
pub mod response;

pub use crate::error::{LeaveApiError, RequestError};
pub use crate::request::{Request as ApiRequest, RequestData, RequestOptions};
pub use crate::response::ResponseBody;
use repositories::*;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://employee-leave-system-x9i9.onrender.com";

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Build a client whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LeaveApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http(http, base_url))
    }

    fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue an untyped request against `path`.
    ///
    /// A JSON content type yields [`ResponseBody::Json`], anything else comes
    /// back as text. Non-2xx responses become [`LeaveApiError::Http`].
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ResponseBody, LeaveApiError> {
        let mut builder = self.http.request(options.method, self.url(path));
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        execute(builder).await
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, LeaveApiError>
    where
        R: ApiRequest,
    {
        let mut builder = self.http.request(R::METHOD, self.url(&request.endpoint()));
        builder = match request.data() {
            RequestData::Empty => builder,
            RequestData::Query(data) => builder.query(data),
            RequestData::Json(data) => builder.json(data),
        };

        let body = execute(builder).await?.into_json()?;
        Ok(serde_json::from_value(body)?)
    }
}

async fn execute(builder: reqwest::RequestBuilder) -> Result<ResponseBody, LeaveApiError> {
    let response = builder.send().await?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.text().await?;

    response::interpret(
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        content_type.as_deref(),
        body,
    )
}

pub struct Request;

impl Request {
    pub fn employees() -> EmployeeRepository {
        EmployeeRepository::new()
    }

    pub fn leave() -> LeaveRepository {
        LeaveRepository::new()
    }

    pub fn summary() -> SummaryRepository {
        SummaryRepository::new()
    }
}
