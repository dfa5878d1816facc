//! # Builder
//!
//! [`HttpRequestBuilder`] is a consuming builder: every setter takes `self`
//! and hands it back, so configuration reads as one chain and the finished
//! [`HttpRequest`] is immutable. `build()` validates at runtime — a missing
//! URL or an unknown method is a [`BuildError`], not a half-built request.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("request has no url")]
    MissingUrl,

    #[error("unknown http method: {0}")]
    UnknownMethod(String),
}

const KNOWN_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD"];

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub params: BTreeMap<String, String>,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::new()
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "URL:{} Method:{} Headers:{:?} Params:{:?} Body:{:?} Timeout:{:?}",
            self.url, self.method, self.headers, self.params, self.body, self.timeout
        )
    }
}

pub struct HttpRequestBuilder {
    url: String,
    method: String,
    headers: BTreeMap<String, String>,
    params: BTreeMap<String, String>,
    body: Option<String>,
    timeout: Duration,
}

impl Default for HttpRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpRequestBuilder {
    pub fn new() -> Self {
        HttpRequestBuilder {
            url: String::new(),
            method: "GET".to_string(),
            headers: BTreeMap::new(),
            params: BTreeMap::new(),
            body: None,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, content: impl Into<String>) -> Self {
        self.body = Some(content.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Consumes the builder; the request only exists if it is valid.
    pub fn build(self) -> Result<HttpRequest, BuildError> {
        if self.url.is_empty() {
            return Err(BuildError::MissingUrl);
        }
        if !KNOWN_METHODS.contains(&self.method.as_str()) {
            return Err(BuildError::UnknownMethod(self.method));
        }

        Ok(HttpRequest {
            url: self.url,
            method: self.method,
            headers: self.headers,
            params: self.params,
            body: self.body,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_build_carries_every_field() {
        let request = HttpRequest::builder()
            .url("http://localhost:8000/users")
            .method("GET")
            .param("id", "2")
            .build()
            .unwrap();

        assert_eq!(request.url, "http://localhost:8000/users");
        assert_eq!(request.method, "GET");
        assert_eq!(request.params.get("id").map(String::as_str), Some("2"));
        assert_eq!(request.timeout, Duration::from_secs(5));
        assert!(request.body.is_none());
    }

    #[test]
    fn defaults_are_get_with_five_second_timeout() {
        let request = HttpRequest::builder().url("http://example.com").build().unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.timeout, Duration::from_secs(5));
        assert!(request.headers.is_empty());
    }

    #[test]
    fn missing_url_fails_the_build() {
        let err = HttpRequest::builder().method("POST").build().unwrap_err();
        assert_eq!(err, BuildError::MissingUrl);
    }

    #[test]
    fn unknown_method_fails_the_build() {
        let err = HttpRequest::builder()
            .url("http://example.com")
            .method("FETCH")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::UnknownMethod("FETCH".to_string()));
    }

    #[test]
    fn display_lists_every_field() {
        let request = HttpRequest::builder()
            .url("http://example.com")
            .header("Accept", "application/json")
            .build()
            .unwrap();
        let text = format!("{}", request);
        assert!(text.contains("URL:http://example.com"));
        assert!(text.contains("Method:GET"));
        assert!(text.contains("Accept"));
    }
}
