//! HTTP GET capability used by the link resolver and the fetcher
//!
//! The [`Transport`] trait is the seam between the install pipeline and the network:
//! production code uses [`HttpTransport`], tests substitute an in-memory server.

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Result, transport as transport_error};

/// A response whose body has not been read yet
pub struct HttpResponse {
    pub status: u16,
    /// Value of the `content-length` header, if present
    pub content_length: Option<u64>,
    pub body: Box<dyn Read>,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Issues GET requests
pub trait Transport {
    /// Send a GET; `Err` only when no response was received at all
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// User agent sent with every request
pub fn user_agent(package_name: &str) -> String {
    format!("npmjs / {package_name}")
}

/// `url` with any query string cut off
pub fn without_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

/// Blocking HTTPS transport backed by `reqwest`
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(package_name: &str) -> Result<Self> {
        // Archives are large; only bound the connect phase.
        let client = Client::builder()
            .user_agent(user_agent(package_name))
            .connect_timeout(Duration::from_secs(30))
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| transport_error::request_failed("<client>", e))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        // The query may carry credentials.
        let shown = without_query(url);
        tracing::debug!(url = shown, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| transport_error::request_failed(shown, e.without_url()))?;

        let status = response.status().as_u16();
        let content_length = response.content_length();
        tracing::debug!(status, ?content_length, "response headers received");

        Ok(HttpResponse {
            status,
            content_length,
            body: Box::new(response),
        })
    }
}
