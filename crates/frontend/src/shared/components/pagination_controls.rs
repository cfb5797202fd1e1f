use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::list_utils::{page_window, PAGE_SIZES};

/// PaginationControls component - reusable pagination controls
///
/// Номера страниц показываются скользящим окном из пяти кнопок,
/// выровненным по блокам из пяти страниц. Номера страниц с единицы.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_items: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>

            {move || {
                page_window(current_page.get(), total_pages.get())
                    .into_iter()
                    .map(|page| {
                        let is_current = page == current_page.get();
                        let class = if is_current {
                            "pagination-btn pagination-btn--current"
                        } else {
                            "pagination-btn"
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| on_page_change.run(page)
                                disabled=is_current
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>

            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get().min(total_pages.get().max(1)),
                        total_pages.get().max(1),
                        total_items.get()
                    )
                }}
            </span>

            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(PAGE_SIZES[0]);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZES
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
