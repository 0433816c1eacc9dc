//! # picovent-adapter-http-reqwest
//!
//! Native implementation of the [`HttpTransport`] port.
//!
//! Endpoint paths (`/api/fan/speed`, …) are appended to a base URL such as
//! `http://192.168.4.1`. No timeout is configured: a device that never answers
//! leaves the request pending.
//!
//! ## Dependency rule
//!
//! Depends on `picovent-app` (port traits) and `picovent-domain` only.

mod error;

pub use error::HttpError;

use picovent_app::ports::{HttpResponse, HttpTransport};
use picovent_domain::error::PicoventError;

/// [`HttpTransport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Create a transport for the device at `base_url`.
    ///
    /// A trailing `/` on the base URL is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a transport reusing an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn read(
        method: &'static str,
        url: &str,
        response: reqwest::Response,
    ) -> Result<HttpResponse, HttpError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|source| HttpError::Body {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!("{method} {url} -> {status} ({} bytes)", body.len());
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse, PicoventError> {
        let url = self.url(path);
        tracing::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| HttpError::Request {
                method: "GET",
                url: url.clone(),
                source,
            })?;
        Ok(Self::read("GET", &url, response).await?)
    }

    async fn put_form(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<HttpResponse, PicoventError> {
        let url = self.url(path);
        tracing::debug!("PUT {url}");
        let response = self
            .client
            .put(&url)
            .form(params)
            .send()
            .await
            .map_err(|source| HttpError::Request {
                method: "PUT",
                url: url.clone(),
                source,
            })?;
        Ok(Self::read("PUT", &url, response).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::HeaderMap;
    use axum::http::StatusCode;
    use axum::routing::get;

    /// A base URL that will always refuse connections (port 1 is reserved and unbound).
    const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

    async fn echo_put(headers: HeaderMap, body: String) -> String {
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        format!("{content_type}|{body}")
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn device() -> String {
        serve(
            Router::new()
                .route("/api/fan/speed", get(|| async { "3" }))
                .route(
                    "/api/battery/voltage",
                    get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "sensor offline") }),
                )
                .route(
                    "/api/light/state",
                    get(|| async { "\"on\"" }).put(echo_put),
                ),
        )
        .await
    }

    #[tokio::test]
    async fn should_return_status_and_body_on_success() {
        let transport = ReqwestTransport::new(device().await);

        let response = transport.get("/api/fan/speed").await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "3");
    }

    #[tokio::test]
    async fn should_return_server_errors_as_responses() {
        let transport = ReqwestTransport::new(device().await);

        let response = transport.get("/api/battery/voltage").await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, "sensor offline");
    }

    #[tokio::test]
    async fn should_send_form_encoded_put() {
        let transport = ReqwestTransport::new(device().await);

        let response = transport
            .put_form("/api/light/state", &[("state", "on")])
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "application/x-www-form-urlencoded|state=on");
    }

    #[tokio::test]
    async fn should_ignore_trailing_slash_on_base_url() {
        let base = format!("{}/", device().await);
        let transport = ReqwestTransport::new(base);

        let response = transport.get("/api/light/state").await.unwrap();

        assert_eq!(response.body, "\"on\"");
        assert!(!transport.base_url().ends_with('/'));
    }

    #[tokio::test]
    async fn should_report_transport_error_when_connection_refused() {
        let transport = ReqwestTransport::new(UNREACHABLE_URL);

        let err = transport.get("/api/fan/speed").await.unwrap_err();

        match &err {
            PicoventError::Transport(source) => {
                let msg = source.to_string();
                assert!(
                    msg.starts_with("GET http://127.0.0.1:1/api/fan/speed failed"),
                    "{msg}"
                );
            }
            other => panic!("expected PicoventError::Transport, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_report_transport_error_for_put_when_connection_refused() {
        let transport = ReqwestTransport::new(UNREACHABLE_URL);

        let err = transport
            .put_form("/api/light/state", &[("state", "off")])
            .await
            .unwrap_err();

        assert!(matches!(err, PicoventError::Transport(_)));
    }
}
