mod view_model;

use contracts::domain::a001_category::{Category, NAME_MAX_LEN};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::system::auth::use_session;
use view_model::CategoryFormVm;

/// Модальная форма создания/редактирования категории.
#[component]
pub fn CategoryForm(
    /// Коллекция экрана: источник проверки дубликатов и приёмник успеха.
    collection: RwSignal<Vec<Category>>,
    existing: Option<Category>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = CategoryFormVm::new(existing);
    let notify = use_notifications();
    let (session, _) = use_session();

    let title = if vm.is_edit_mode() {
        format!(
            "Редактирование: {}",
            vm.existing.as_ref().map(|c| c.name.as_str()).unwrap_or("")
        )
    } else {
        "Новая категория".to_string()
    };

    let saving = vm.saving;
    let name = vm.name;

    let on_save = {
        let vm = vm.clone();
        move |_| {
            let Some(session) = session.get_untracked() else {
                return;
            };
            vm.save_command(session, collection, notify, on_close);
        }
    };

    let handle_overlay_click = move |_| {
        if !saving.get_untracked() {
            on_close.run(());
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>"Название"</Label>
                        <Input
                            value=name
                            placeholder=format!("Только буквы и пробелы, до {} символов", NAME_MAX_LEN)
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {icon("save")}
                        {move || if saving.get() { " Сохранение..." } else { " Сохранить" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
