use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Явный объект-учётка: передаётся по ссылке в каждый вызов API вместо
/// чтения токена из глобального хранилища. `localStorage` остаётся только
/// слоем восстановления сессии между перезагрузками страницы.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: UserInfo,
}

impl Session {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(Option::<Session>::None);

    // Restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            match api::me(&access_token).await {
                Ok(user) => {
                    set_session.set(Some(Session { access_token, user }));
                }
                Err(e) => {
                    log::warn!("session restore failed: {}", e);
                    storage::clear_token();
                }
            }
        });
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the current session
pub fn use_session() -> (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>) {
    let session = use_context::<ReadSignal<Option<Session>>>()
        .expect("AuthProvider not found in component tree");
    let set_session = use_context::<WriteSignal<Option<Session>>>()
        .expect("AuthProvider not found in component tree");
    (session, set_session)
}

/// Завершение сеанса: чистим и хранилище, и контекст.
pub fn do_logout(set_session: WriteSignal<Option<Session>>) {
    storage::clear_token();
    set_session.set(None);
}
