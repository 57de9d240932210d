//! HTTP client for the idea generation backend.
//!
//! This module provides:
//!
//! - `IdeaSource`: the seam the widget fetches through
//! - `IdeaClient`: the reqwest-backed source that talks to the backend
//!
//! The backend contract is a single `GET {origin}/` with `Accept: text/plain`.
//! Any 2xx status carries the idea as plain text. Anything else carries a
//! plain-text error body, possibly empty.

use anyhow::Result;
use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::ACCEPT;

use crate::error::FetchError;

/// User agent for backend requests
const USER_AGENT: &str = concat!("ideagen/", env!("CARGO_PKG_VERSION"));

/// Something the widget can ask for a new idea.
///
/// Returns the raw response body on success. Trimming is the widget's job.
pub trait IdeaSource: Send + Sync {
    fn fetch_idea(&self) -> BoxFuture<'static, Result<String, FetchError>>;
}

/// Build the request URL for an origin, so the path is always exactly `/`
pub fn idea_url(origin: &str) -> String {
    format!("{}/", origin.trim_end_matches('/'))
}

/// Backend HTTP client
#[derive(Clone)]
pub struct IdeaClient {
    client: reqwest::Client,
    url: String,
}

impl IdeaClient {
    /// Create a client bound to a backend origin
    pub fn new(origin: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: idea_url(origin),
        })
    }

    /// The full URL requests are sent to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one request and classify the outcome
    pub async fn get_idea(&self) -> Result<String, FetchError> {
        let start = std::time::Instant::now();
        tracing::debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "text/plain")
            .send()
            .await?;

        let status = response.status();
        // A body that fails to arrive is a transport failure, whatever the status
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Backend returned {} in {:.1}s", status, start.elapsed().as_secs_f32());
            return Err(FetchError::http(status.as_u16(), text));
        }

        tracing::info!(
            "Fetched idea ({} bytes) in {:.1}s",
            text.len(),
            start.elapsed().as_secs_f32()
        );
        Ok(text)
    }
}

impl IdeaSource for IdeaClient {
    fn fetch_idea(&self) -> BoxFuture<'static, Result<String, FetchError>> {
        let client = self.clone();
        async move { client.get_idea().await }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response and hand back the raw request text
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_string()
        });

        (origin, handle)
    }

    #[test]
    fn test_idea_url_normalizes_trailing_slash() {
        assert_eq!(idea_url("http://127.0.0.1:8000"), "http://127.0.0.1:8000/");
        assert_eq!(idea_url("http://127.0.0.1:8000/"), "http://127.0.0.1:8000/");
        assert_eq!(idea_url("https://ideas.example.com//"), "https://ideas.example.com/");
    }

    #[tokio::test]
    async fn test_success_returns_raw_body() {
        let (origin, server) = serve_once("200 OK", "  Build a marketplace for X.  ").await;
        let client = IdeaClient::new(&origin).unwrap();

        let idea = client.get_idea().await.unwrap();
        assert_eq!(idea, "  Build a marketplace for X.  ");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET / HTTP/1.1\r\n"));
        assert!(request.to_lowercase().contains("accept: text/plain"));
    }

    #[tokio::test]
    async fn test_any_2xx_is_success() {
        let (origin, server) = serve_once("201 Created", "Rent robots to farms").await;
        let client = IdeaClient::new(&origin).unwrap();

        assert_eq!(client.get_idea().await.unwrap(), "Rent robots to farms");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_carries_body() {
        let (origin, server) = serve_once("500 Internal Server Error", "server overloaded").await;
        let client = IdeaClient::new(&origin).unwrap();

        let err = client.fetch_idea().await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Http {
                status: 500,
                detail: "server overloaded".to_string()
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_empty_body() {
        let (origin, server) = serve_once("503 Service Unavailable", "").await;
        let client = IdeaClient::new(&origin).unwrap();

        let err = client.get_idea().await.unwrap_err();
        assert_eq!(err.user_message(), "Error: Request failed");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Grab a free port, then release it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = IdeaClient::new(&origin).unwrap();
        let err = client.get_idea().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert!(err.user_message().starts_with("Error: "));
        assert!(err.user_message().len() > "Error: ".len());
    }
}
