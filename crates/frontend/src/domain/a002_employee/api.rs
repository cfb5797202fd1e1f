use contracts::domain::a002_employee::{AssignRoleDto, EmployeeAccount, PendingEmployee};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, read_json, send_error, with_timeout};
use crate::shared::error::UiError;
use crate::system::auth::Session;

/// Fetch pending employees
pub async fn fetch_pending(session: &Session) -> Result<Vec<PendingEmployee>, UiError> {
    let url = format!("{}/employee/pending-by-department", api_base());
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

/// Fetch acting user's employee account (источник кода роли)
pub async fn fetch_account(session: &Session, user_id: i64) -> Result<EmployeeAccount, UiError> {
    let url = format!("{}/employee/findById/{}", api_base(), user_id);
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

/// Assign role to a pending employee
pub async fn assign_role(
    session: &Session,
    employee_id: i64,
    dto: AssignRoleDto,
) -> Result<PendingEmployee, UiError> {
    let url = format!("{}/employee/{}/role", api_base(), employee_id);
    let bearer = session.bearer();
    with_timeout(async move {
        let response = Request::put(&url)
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
