//! Backend API
//!
//! Thin async wrappers over browser fetch, one function per backend
//! endpoint. Each call builds a single `web_sys::Request` (JSON content
//! type, CORS mode, optional bearer header), awaits the response, and maps
//! the status into the crate error taxonomy.

pub mod auth;
pub mod ingredient;
pub mod recipe;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::error::ApiError;

/// Backend base URL
pub const BASE_URL: &str = "http://localhost:8081";

/// Bearer credential for a request. `None` on the unauthenticated auth
/// endpoints; everywhere else the header is attached even when the session
/// has no token (empty credential, the backend answers 401).
pub(crate) enum Auth<'a> {
    None,
    Bearer(&'a str),
}

/// Status and body text of a completed exchange.
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn network(err: JsValue) -> ApiError {
    web_sys::console::error_1(&err);
    ApiError::Network(format!("{:?}", err))
}

/// Send one request and read the response body as text. A rejected fetch
/// promise (network down, CORS failure) surfaces as `ApiError::Network`.
pub(crate) async fn send(
    method: &str,
    path_and_query: &str,
    auth: Auth<'_>,
    body: Option<String>,
) -> Result<RawResponse, ApiError> {
    let headers = Headers::new().map_err(network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(network)?;
    if let Auth::Bearer(token) = auth {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(network)?;
    }

    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", BASE_URL, path_and_query);
    let request = Request::new_with_str_and_init(&url, &init).map_err(network)?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let promise: js_sys::Promise = window.fetch_with_request(&request);
    let response: Response = JsFuture::from(promise)
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    let status = response.status();
    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .unwrap_or_default();

    Ok(RawResponse { status, body })
}
