use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use std::borrow::Cow;

/// Payload attached to an outgoing request
#[derive(Debug)]
pub enum RequestData<T> {
    Empty,
    Query(T),
    Json(T),
}

/// A typed endpoint of the leave service
///
/// Implementors describe where the request goes and what it carries; the
/// [`Client`](crate::Client) takes care of issuing it and decoding the response.
pub trait Request {
    type Data: Serialize;
    type Response: DeserializeOwned;

    const METHOD: Method = Method::GET;

    fn endpoint(&self) -> Cow<'_, str>;

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Empty
    }
}

/// Untyped request options for [`Client::request`](crate::Client::request)
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}
