//! Универсальные утилиты для работы со списками (поиск, сортировка,
//! пагинация). Чистая часть вынесена в свободные функции: экраны собирают
//! из них производное представление коллекции.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Заглушка для отсутствующих вложенных полей в поисковых проекциях.
pub const MISSING_LABEL: &str = "н/д";

/// Фиксированный набор размеров страницы.
pub const PAGE_SIZES: &[usize] = &[10, 25, 50];

/// Ширина окна кнопок пагинации.
pub const PAGE_WINDOW: usize = 5;

/// Trait для типов данных, поддерживающих поиск.
pub trait Searchable {
    /// Поисковые проекции строки: фиксированный набор отображаемых полей,
    /// включая производные (форматированные даты, метки статусов).
    /// Отсутствующие значения проецируются в [`MISSING_LABEL`].
    fn search_projections(&self) -> Vec<String>;

    /// Строка попадает в выборку, если хотя бы одна проекция содержит
    /// запрос как подстроку без учёта регистра.
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_projections()
            .iter()
            .any(|p| p.to_lowercase().contains(&needle))
    }
}

/// Фильтрует список по поисковому запросу.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Стабильное разбиение: активные записи перед неактивными, внутри групп
/// исходный порядок сохраняется. Вторичного ключа нет.
pub fn sort_active_first<T>(items: &mut [T], is_active: impl Fn(&T) -> bool) {
    items.sort_by_key(|item| !is_active(item));
}

/// Страница производного представления коллекции.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    /// Номер страницы (с единицы) после зажима в допустимый диапазон.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Разбивка на страницы. `current_page` зажимается в `[1, total_pages]`,
/// поэтому после сжатия коллекции страница не может «уехать» за край.
pub fn paginate<T>(items: Vec<T>, page_size: usize, current_page: usize) -> ListView<T> {
    let total_items = items.len();
    let total_pages = if total_items == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };
    let current_page = current_page.clamp(1, total_pages.max(1));
    let rows = items
        .into_iter()
        .skip((current_page - 1) * page_size)
        .take(page_size)
        .collect();
    ListView {
        rows,
        current_page,
        total_pages,
        total_items,
    }
}

/// Окно номеров страниц: не более [`PAGE_WINDOW`] подряд идущих кнопок,
/// выровненных по блокам той же ширины.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let start = ((current_page.clamp(1, total_pages) - 1) / PAGE_WINDOW) * PAGE_WINDOW + 1;
    let end = (start + PAGE_WINDOW - 1).min(total_pages);
    (start..=end).collect()
}

/// Компонент поиска с debounce и кнопкой очистки.
#[component]
pub fn SearchInput(
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Отменяем предыдущий таймер если есть
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = web_sys::window().expect("no window");
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                300,
            )
            .expect("setTimeout failed");

        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder=placeholder
                style="width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button
                            style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                            on:click=clear_filter
                            title="Очистить"
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        branch: Option<&'static str>,
        active: bool,
    }

    impl Searchable for Row {
        fn search_projections(&self) -> Vec<String> {
            vec![
                self.name.to_string(),
                self.branch.unwrap_or(MISSING_LABEL).to_string(),
            ]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Книги", branch: Some("Центральный"), active: true },
            Row { name: "Канцелярия", branch: None, active: false },
            Row { name: "Игрушки", branch: Some("Северный"), active: true },
        ]
    }

    #[test]
    fn every_match_contains_term_in_some_projection() {
        let filtered = filter_list(&rows(), "кни");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Книги");

        // исключённые строки не содержат запрос ни в одной проекции
        for row in rows() {
            if !filtered.contains(&row) {
                assert!(row
                    .search_projections()
                    .iter()
                    .all(|p| !p.to_lowercase().contains("кни")));
            }
        }
    }

    #[test]
    fn filter_is_case_insensitive_and_ignores_surrounding_whitespace() {
        assert_eq!(filter_list(&rows(), " КНИГИ ").len(), 1);
        assert_eq!(filter_list(&rows(), "").len(), 3);
    }

    #[test]
    fn missing_nested_field_matches_placeholder() {
        let filtered = filter_list(&rows(), "н/д");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Канцелярия");
    }

    #[test]
    fn active_first_partition_is_stable() {
        let mut items = rows();
        sort_active_first(&mut items, |r| r.active);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Книги", "Игрушки", "Канцелярия"]);
    }

    #[test]
    fn total_pages_is_zero_only_for_empty_collection() {
        let view = paginate(Vec::<Row>::new(), 10, 1);
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.total_items, 0);
        assert!(view.rows.is_empty());

        let view = paginate(rows(), 2, 1);
        assert_eq!(view.total_items, 3);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn page_is_clamped_when_collection_shrinks() {
        // было 3 страницы, осталось 3 записи по 2 на страницу — страница 7
        // зажимается до последней существующей
        let view = paginate(rows(), 2, 7);
        assert_eq!(view.current_page, 2);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn pagination_slices_requested_page() {
        let view = paginate(rows(), 2, 2);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].name, "Игрушки");
    }

    #[test]
    fn page_window_is_aligned_to_blocks_of_five() {
        assert_eq!(page_window(7, 12), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(3, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(11, 12), vec![11, 12]);
        assert_eq!(page_window(1, 1), vec![1]);
        assert!(page_window(1, 0).is_empty());
    }
}
