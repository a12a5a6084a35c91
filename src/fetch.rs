//! `fetch`-backed transport for the REST client

use async_trait::async_trait;
use medvault_core::{ApiError, ApiRequest, ApiResponse, Transport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Sends requests with the browser's `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        fetch(&request)
            .await
            .map_err(|e| ApiError::Network(js_error_message(&e)))
    }
}

async fn fetch(request: &ApiRequest) -> Result<ApiResponse, JsValue> {
    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    init.set_mode(RequestMode::Cors);
    if let Some(body) = &request.body {
        init.set_body(&JsValue::from_str(body));
    }

    let req = Request::new_with_str_and_init(&request.url, &init)?;
    req.headers().set("Accept", "application/json")?;
    if request.body.is_some() {
        req.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&req)).await?.dyn_into()?;
    let body = JsFuture::from(response.text()?).await?;

    Ok(ApiResponse {
        status: response.status(),
        body: body.as_string().unwrap_or_default(),
    })
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Error connecting to server".to_string())
}
