//! `fetch`-based transport wrapping `gloo-net` for calls to `/api/*`.

use gloo_net::http::{Request, Response};
use picovent_app::ports::{HttpResponse, HttpTransport};
use picovent_domain::error::PicoventError;
use picovent_domain::form::{FORM_CONTENT_TYPE, encode_form};

/// Issues same-origin requests through the browser's `fetch`.
///
/// Paths are passed through unchanged, so `/api/fan/speed` resolves against
/// the origin that served the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse, PicoventError> {
        let resp = Request::get(path)
            .send()
            .await
            .map_err(PicoventError::transport)?;
        read(resp).await
    }

    async fn put_form(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<HttpResponse, PicoventError> {
        let resp = Request::put(path)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(encode_form(params))
            .map_err(PicoventError::transport)?
            .send()
            .await
            .map_err(PicoventError::transport)?;
        read(resp).await
    }
}

async fn read(resp: Response) -> Result<HttpResponse, PicoventError> {
    let status = resp.status();
    let body = resp.text().await.map_err(PicoventError::transport)?;
    Ok(HttpResponse { status, body })
}
