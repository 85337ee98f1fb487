//! Decision Service Client
//!
//! Request assembly plus the one network call this popup makes. Validation
//! runs locally before anything is dispatched; transport detail strings go
//! to the console while the UI shows a single generic connectivity message.

use std::collections::HashSet;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{RecommendRequest, RecommendationResult};
use crate::prefs;

pub const BACKEND_URL: &str = "http://127.0.0.1:8000/recommend-card";

/// Shown for any transport or decode failure; the cause is only logged
pub const TRANSPORT_MESSAGE: &str = "Failed to reach backend. Is it running?";

/// Local validation failures; no request is sent for these
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    MissingUrl,
    InvalidAmount,
}

impl RequestError {
    pub fn user_message(self) -> &'static str {
        match self {
            RequestError::MissingUrl => "Could not detect current tab URL.",
            RequestError::InvalidAmount => "Please enter a valid amount.",
        }
    }
}

/// Amount as typed in the form; anything unparseable becomes 0 and fails
/// validation downstream
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}

/// Assemble the request payload, refusing locally when preconditions fail.
///
/// `enabled_cards` is emitted in catalog declaration order.
pub fn build_request(
    url: &str,
    amount: f64,
    currency: &str,
    mode: &str,
    enabled: &HashSet<String>,
) -> Result<RecommendRequest, RequestError> {
    if url.is_empty() {
        return Err(RequestError::MissingUrl);
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(RequestError::InvalidAmount);
    }

    Ok(RecommendRequest {
        url: url.to_string(),
        amount,
        currency: currency.to_string(),
        mode: mode.to_string(),
        enabled_cards: prefs::ordered_names(enabled),
    })
}

/// POST the request to the decision service and decode the JSON response.
///
/// The `Err` string carries the underlying detail for diagnostics; callers
/// surface [`TRANSPORT_MESSAGE`] instead.
pub async fn recommend(req: &RecommendRequest) -> Result<RecommendationResult, String> {
    let body = serde_json::to_string(req).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(BACKEND_URL, &opts).map_err(js_detail)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_detail)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_detail)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    let json = JsFuture::from(response.json().map_err(js_detail)?)
        .await
        .map_err(js_detail)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

fn js_detail(value: JsValue) -> String {
    format!("{:?}", value)
}
