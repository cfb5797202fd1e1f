//! Канал уведомлений: один слот, новое сообщение вытесняет предыдущее
//! без очереди. Хук `on_dismiss` выполняется только при явном закрытии.

use leptos::prelude::*;
use thaw::*;

use super::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub on_dismiss: Option<Callback<()>>,
}

/// Сервис для централизованного показа уведомлений.
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    /// Показать уведомление, вытеснив текущее. Хук вытесненного не зовётся.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        self.show_notification(Notification {
            message: message.into(),
            kind,
            on_dismiss: None,
        });
    }

    /// Вариант с хуком закрытия: вызывающая сторона сама решает, что
    /// должно произойти после того, как пользователь прочитал сообщение.
    pub fn show_with_on_dismiss(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        on_dismiss: Callback<()>,
    ) {
        self.show_notification(Notification {
            message: message.into(),
            kind,
            on_dismiss: Some(on_dismiss),
        });
    }

    fn show_notification(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => log::error!("{}", notification.message),
            NotificationKind::Warning => log::warn!("{}", notification.message),
            _ => log::debug!("{}", notification.message),
        }
        self.current.set(Some(notification));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Warning);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    /// Закрыть уведомление и выполнить его хук, если тот был задан.
    pub fn dismiss(&self) {
        let dismissed = self.current.try_update(|slot| slot.take()).flatten();
        if let Some(hook) = dismissed.and_then(|n| n.on_dismiss) {
            hook.run(());
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Доступ к сервису из любого компонента экрана.
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

fn intent(kind: NotificationKind) -> MessageBarIntent {
    match kind {
        NotificationKind::Info => MessageBarIntent::Info,
        NotificationKind::Success => MessageBarIntent::Success,
        NotificationKind::Warning => MessageBarIntent::Warning,
        NotificationKind::Error => MessageBarIntent::Error,
    }
}

/// Рендер текущего уведомления. Размещается один раз в каркасе приложения.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        {move || {
            notifications.current().map(|n| {
                view! {
                    <div class="notification-host" style="margin-bottom: var(--spacing-md);">
                        <MessageBar intent=intent(n.kind)>
                            <div style="display: flex; align-items: center; justify-content: space-between; gap: var(--spacing-sm); width: 100%;">
                                <span>{n.message.clone()}</span>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    size=ButtonSize::Small
                                    on_click=move |_| notifications.dismiss()
                                    attr:title="Закрыть"
                                >
                                    {icon("x")}
                                </Button>
                            </div>
                        </MessageBar>
                    </div>
                }
            })
        }}
    }
}
