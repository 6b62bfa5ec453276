//! Network fetching with timeout support.
//!
//! The page index is the only remote resource the theme reads. It is
//! fetched with a timeout and kept in sessionStorage for the session.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::{cache, dom};

/// Outcome of racing a promise against a timer.
#[derive(Debug)]
enum RaceResult {
    Completed(JsValue),
    TimedOut,
    Rejected(String),
}

/// Race `promise` against a timer of `timeout_ms`.
///
/// The timer resolves to `undefined`, so a promise that itself resolves to
/// `undefined` is reported as timed out.
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = dom::window() else {
        return RaceResult::Rejected("window not available".to_string());
    };

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::of2(&promise, &timer);
    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => RaceResult::TimedOut,
        Ok(value) => RaceResult::Completed(value),
        Err(err) => RaceResult::Rejected(
            err.as_string()
                .unwrap_or_else(|| "unknown error".to_string()),
        ),
    }
}

/// Fetch and parse JSON from `url`.
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch and parse JSON, reusing the sessionStorage copy under `cache_key`.
///
/// Storage failures are ignored; the network result is returned either way.
pub async fn fetch_json_cached<T>(url: &str, cache_key: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned + Serialize,
{
    if let Some(cached) = cache::get::<T>(cache_key) {
        return Ok(cached);
    }

    let data = fetch_json::<T>(url).await?;
    let _ = cache::set(cache_key, &data);
    Ok(data)
}

/// GET `url` as text, failing with [`FetchError::Timeout`] after
/// [`FETCH_TIMEOUT_MS`].
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let response = match race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await {
        RaceResult::Completed(value) => value,
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Rejected(msg) => return Err(FetchError::NetworkError(msg)),
    };

    let response: Response = response
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}
