use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show when=move || session.get().is_some() fallback=|| view! { <LoginPage /> }>
            <AppShell />
        </Show>
    }
}
