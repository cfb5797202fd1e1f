use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Модальное окно подтверждения операции.
///
/// Пока запрос в полёте (`busy`), обе кнопки и оверлей не реагируют:
/// мутации не отменяются, повторная отправка исключена.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    /// Надпись на кнопке подтверждения.
    #[prop(optional, into)]
    confirm_label: Option<String>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Подтвердить".to_string());

    let handle_overlay_click = move |_| {
        if !busy.get_untracked() {
            on_cancel.run(());
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal modal--confirm" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            if !busy.get_untracked() {
                                on_cancel.run(());
                            }
                        }
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <p>{move || message.get()}</p>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=Signal::derive(move || busy.get())
                    >
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run(())
                        disabled=Signal::derive(move || busy.get())
                    >
                        {move || if busy.get() { "Выполняется...".to_string() } else { confirm_label.clone() }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
