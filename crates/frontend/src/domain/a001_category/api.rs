use contracts::domain::a001_category::{Category, CreateCategoryDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, read_json, send_error, with_timeout};
use crate::shared::error::UiError;
use crate::system::auth::Session;

/// Fetch all categories
pub async fn fetch_all(session: &Session) -> Result<Vec<Category>, UiError> {
    let url = format!("{}/findAll", api_base());
    let bearer = session.bearer();
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

/// Create new category
pub async fn create(session: &Session, dto: CreateCategoryDto) -> Result<Category, UiError> {
    let url = format!("{}/save", api_base());
    let bearer = session.bearer();
    with_timeout(async move {
        let response = Request::post(&url)
            .header("Authorization", &bearer)
            .json(&dto)
            .map_err(|e| UiError::network(format!("Не удалось сформировать запрос: {}", e)))?
            .send()
            .await
            .map_err(send_error)?;
        read_json(response).await
    })
    .await
}

/// Update category: тело запроса — полная сущность
pub async fn update(session: &Session, category: &Category) -> Result<Category, UiError> {
    let url = format!("{}/update/{}", api_base(), category.id);
    let bearer = session.bearer();
    let body = category.clone();
    with_timeout(async move {
        let response = Request::put(&url)
            .header("Authorization", &bearer)
            .json(&body)
            .map_err(|e| UiError::network(format!("Не удалось сформировать запрос: {}", e)))?
            .send()
            .await
            .map_err(send_error)?;
        read_json(response).await
    })
    .await
}

/// Toggle active flag: тело запроса — полная сущность с новым статусом
pub async fn update_status(session: &Session, category: &Category) -> Result<Category, UiError> {
    let url = format!("{}/updatestatus/{}", api_base(), category.id);
    let bearer = session.bearer();
    let body = category.clone();
    with_timeout(async move {
        let response = Request::put(&url)
            .header("Authorization", &bearer)
            .json(&body)
            .map_err(|e| UiError::network(format!("Не удалось сформировать запрос: {}", e)))?
            .send()
            .await
            .map_err(send_error)?;
        read_json(response).await
    })
    .await
}
