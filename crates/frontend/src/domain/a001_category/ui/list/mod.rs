mod state;

use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::error::UiError;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, paginate, sort_active_first, Searchable, SearchInput, MISSING_LABEL};
use crate::shared::mutation::ConfirmState;
use crate::shared::notify::use_notifications;
use crate::system::auth::guard::RequireAuth;
use crate::system::auth::use_session;

use super::details::CategoryForm;
use crate::domain::a001_category::api;
use state::create_state;

impl Searchable for Category {
    fn search_projections(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.status_label().to_string(),
            format_datetime(&self.created_on),
            format_datetime(&self.updated_on),
            self.created_by
                .as_ref()
                .map(|u| u.username.clone())
                .unwrap_or_else(|| MISSING_LABEL.to_string()),
        ]
    }
}

/// Запрошенное переключение статуса, ждёт подтверждения в модальном окне.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CategoryToggle {
    id: i64,
    name: String,
    new_active: bool,
}

#[component]
pub fn CategoriesListPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <CategoriesList />
        </RequireAuth>
    }
}

#[component]
fn CategoriesList() -> impl IntoView {
    let state = create_state();
    let all_categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing_category: RwSignal<Option<Category>> = RwSignal::new(None);
    let confirm: RwSignal<ConfirmState<CategoryToggle>> = RwSignal::new(ConfirmState::Idle);

    let (session, _) = use_session();
    let notify = use_notifications();

    let load_data = move || {
        let Some(session) = session.get_untracked() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all(&session).await {
                Ok(data) => {
                    all_categories.set(data);
                    state.update(|s| {
                        s.page = 1;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    // Коллекция остаётся прежней, повторов нет
                    notify.error(format!("Не удалось загрузить категории: {}", e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    // Производное представление: фильтр -> активные вперёд -> страница
    let view_signal = Signal::derive(move || {
        let (query, page, page_size) =
            state.with(|s| (s.search_query.clone(), s.page, s.page_size));
        let mut data = filter_list(&all_categories.get(), &query);
        sort_active_first(&mut data, |c| c.active);
        paginate(data, page_size, page)
    });

    let apply_search = move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 1;
        });
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
    };

    let request_toggle = move |category: &Category| {
        let toggle = CategoryToggle {
            id: category.id,
            name: category.name.clone(),
            new_active: !category.active,
        };
        confirm.update(|s| s.request(toggle));
    };

    let confirm_toggle = move |_| {
        let Some(toggle) = confirm.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let Some(session) = session.get_untracked() else {
            confirm.update(|s| s.finish());
            return;
        };
        spawn_local(async move {
            let target = all_categories
                .get_untracked()
                .into_iter()
                .find(|c| c.id == toggle.id);
            match target {
                None => {
                    notify.error(UiError::NotFound(toggle.id).to_string());
                }
                Some(mut category) => {
                    category.active = toggle.new_active;
                    category.touch_updated();
                    match api::update_status(&session, &category).await {
                        Ok(updated) => {
                            all_categories.update(|list| {
                                if let Some(slot) = list.iter_mut().find(|c| c.id == updated.id) {
                                    *slot = updated.clone();
                                }
                            });
                            let verb = if updated.active {
                                "активирована"
                            } else {
                                "деактивирована"
                            };
                            notify.success(format!("Категория «{}» {}", updated.name, verb));
                        }
                        Err(e) => {
                            notify.error(e.to_string());
                        }
                    }
                }
            }
            // Модальное окно закрывается и при ошибке: итог уже в уведомлении
            confirm.update(|s| s.finish());
        });
    };

    let cancel_toggle = move |_| {
        confirm.update(|s| s.cancel());
    };

    let confirm_message = Signal::derive(move || {
        confirm
            .get()
            .action()
            .map(|t| {
                if t.new_active {
                    format!("Активировать категорию «{}»?", t.name)
                } else {
                    format!("Деактивировать категорию «{}»?", t.name)
                }
            })
            .unwrap_or_default()
    });

    view! {
        <div class="page" id="a001_category--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Категории"</h1>
                    <Badge>{move || view_signal.get().total_items.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Новая"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Поиск"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || view_signal.get().current_page)
                                total_pages=Signal::derive(move || view_signal.get().total_pages)
                                total_items=Signal::derive(move || view_signal.get().total_items)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                        <div class="filter-panel-header__right">
                            <SearchInput
                                on_change=Callback::new(apply_search)
                                placeholder="Название, статус или дата..."
                            />
                        </div>
                    </div>
                </div>

                {move || {
                    if loading.get() {
                        view! { <div class="loading-placeholder">"Загрузка данных..."</div> }
                            .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Название"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Статус"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Создана"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Обновлена"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Автор"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || view_signal.get().rows
                                key=|c| (c.id, c.active, c.updated_on.clone())
                                children=move |category| {
                                    let category_for_edit = category.clone();
                                    let category_for_toggle = category.clone();
                                    let created = format_datetime(&category.created_on);
                                    let updated = format_datetime(&category.updated_on);
                                    let author = category
                                        .created_by
                                        .as_ref()
                                        .map(|u| u.username.clone())
                                        .unwrap_or_else(|| MISSING_LABEL.to_string());
                                    let is_active = category.active;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{category.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if is_active {
                                                        view! { <span class="badge badge--success">"Активна"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Неактивна"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{updated}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{author}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_category.set(Some(category_for_edit.clone()))
                                                    disabled=!is_active
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| request_toggle(&category_for_toggle)
                                                    attr:title=if is_active { "Деактивировать" } else { "Активировать" }
                                                >
                                                    {icon("power")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || {
                    if show_create_form.get() {
                        view! {
                            <CategoryForm
                                collection=all_categories
                                existing=None
                                on_close=Callback::new(move |_| set_show_create_form.set(false))
                            />
                        }
                            .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                {move || {
                    editing_category
                        .get()
                        .map(|category| {
                            view! {
                                <CategoryForm
                                    collection=all_categories
                                    existing=Some(category)
                                    on_close=Callback::new(move |_| editing_category.set(None))
                                />
                            }
                        })
                }}

                {move || {
                    if confirm.get().is_open() {
                        view! {
                            <ConfirmDialog
                                title="Изменение статуса"
                                message=confirm_message
                                busy=Signal::derive(move || confirm.get().is_submitting())
                                on_confirm=Callback::new(confirm_toggle)
                                on_cancel=Callback::new(cancel_toggle)
                            />
                        }
                            .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
