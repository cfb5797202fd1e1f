use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, read_json, send_error, with_timeout};
use crate::shared::error::UiError;

/// Аутентификация по логину и паролю.
pub async fn login(username: String, password: String) -> Result<LoginResponse, UiError> {
    let url = format!("{}/auth/login", api_base());
    with_timeout(async move {
        let response = Request::post(&url)
            .json(&LoginRequest { username, password })
            .map_err(|e| UiError::network(format!("Не удалось сформировать запрос: {}", e)))?
            .send()
            .await
            .map_err(send_error)?;
        read_json(response).await
    })
    .await
}

/// Проверка восстановленного из localStorage токена.
pub async fn me(access_token: &str) -> Result<UserInfo, UiError> {
    let url = format!("{}/auth/me", api_base());
    let bearer = format!("Bearer {}", access_token);
    with_timeout(async move {
        let response = Request::get(&url)
            .header("Authorization", &bearer)
            .send()
            .await
            .map_err(send_error)?;
        read_json(response).await
    })
    .await
}
