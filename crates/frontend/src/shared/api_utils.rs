//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs, decoding responses
//! and bounding every request with a timeout.

use std::future::Future;

use futures::future::{self, Either};
use gloo_net::http::Response;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use super::error::UiError;

/// Единый таймаут сетевых запросов.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Гонка запроса с таймаутом: если сервер не ответил за
/// `REQUEST_TIMEOUT_MS`, запрос считается сетевой ошибкой.
pub async fn with_timeout<F, T>(request: F) -> Result<T, UiError>
where
    F: Future<Output = Result<T, UiError>>,
{
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(request, timeout);
    match future::select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(UiError::network(
            "Сервер не ответил вовремя, попробуйте ещё раз",
        )),
    }
}

/// Декодировать JSON-ответ; не-2xx статус уходит в классификатор ошибок.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, UiError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        // Сервер может завернуть текст ошибки в {"message": "..."}
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(body);
        return Err(UiError::from_server_response(response.status(), &message));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| UiError::network(format!("Не удалось разобрать ответ сервера: {}", e)))
}

/// Ошибка отправки запроса (сеть недоступна, CORS и т.п.).
pub fn send_error(e: gloo_net::Error) -> UiError {
    UiError::network(format!("Сервер недоступен: {}", e))
}
