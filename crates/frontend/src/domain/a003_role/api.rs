use contracts::domain::a003_role::Role;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, read_json, send_error, with_timeout};
use crate::shared::error::UiError;
use crate::system::auth::Session;

/// Fetch active roles from the RoleMaster reference
pub async fn fetch_active_roles(session: &Session) -> Result<Vec<Role>, UiError> {
    let url = format!("{}/RoleMaster/findActiveRole", api_base());
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
