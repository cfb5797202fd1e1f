use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_category::ui::list::CategoriesListPage;
use crate::domain::a002_employee::ui::list::PendingEmployeesListPage;
use crate::shared::icons::icon;
use crate::shared::notify::NotificationHost;
use crate::system::auth::context::{do_logout, use_session};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminScreen {
    Categories,
    RoleAssignment,
}

/// Каркас приложения: навигация между двумя экранами и слот уведомлений.
#[component]
pub fn AppShell() -> impl IntoView {
    let (session, set_session) = use_session();
    let (screen, set_screen) = signal(AdminScreen::Categories);

    let username = move || {
        session
            .get()
            .map(|s| s.user.username)
            .unwrap_or_default()
    };

    let nav_appearance = move |target: AdminScreen| {
        if screen.get() == target {
            ButtonAppearance::Primary
        } else {
            ButtonAppearance::Secondary
        }
    };

    view! {
        <div class="app-shell">
            <header class="app-shell__header">
                <div class="app-shell__nav">
                    <Button
                        appearance=Signal::derive(move || nav_appearance(AdminScreen::Categories))
                        on_click=move |_| set_screen.set(AdminScreen::Categories)
                    >
                        {icon("folder")}
                        " Категории"
                    </Button>
                    <Button
                        appearance=Signal::derive(move || nav_appearance(AdminScreen::RoleAssignment))
                        on_click=move |_| set_screen.set(AdminScreen::RoleAssignment)
                    >
                        {icon("user-check")}
                        " Назначение ролей"
                    </Button>
                </div>
                <div class="app-shell__user">
                    <span>{username}</span>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| do_logout(set_session)
                        attr:title="Выйти"
                    >
                        {icon("x")}
                        " Выход"
                    </Button>
                </div>
            </header>

            <main class="app-shell__content">
                <NotificationHost />
                {move || match screen.get() {
                    AdminScreen::Categories => view! { <CategoriesListPage /> }.into_any(),
                    AdminScreen::RoleAssignment => view! { <PendingEmployeesListPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
