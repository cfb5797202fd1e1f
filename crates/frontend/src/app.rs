use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::notify::NotificationService;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Единый канал уведомлений для обоих экранов
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
