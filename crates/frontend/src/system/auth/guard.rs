use leptos::prelude::*;

use super::context::use_session;

/// Component that requires authentication
/// Shows fallback if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().is_some()
            fallback=|| view! { <div>"Требуется вход в систему."</div> }
        >
            {children()}
        </Show>
    }
}
