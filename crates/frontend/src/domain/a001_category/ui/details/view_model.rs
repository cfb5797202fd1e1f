use contracts::domain::a001_category::{Category, CreateCategoryDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_category::api;
use crate::shared::notify::NotificationService;
use crate::system::auth::Session;

/// Итог клиентской проверки названия перед отправкой.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCheck {
    /// Название прошло проверку (возвращается обрезанным).
    Ok(String),
    /// Пустое или не по формату: предупреждение, без сетевого вызова.
    Invalid(String),
    /// Дубликат в текущей коллекции: ошибка, без сетевого вызова.
    Duplicate(String),
}

/// Проверка формата и дубликата по загруженной коллекции.
/// `exclude_id` исключает редактируемую запись из сравнения.
pub fn check_name(name: &str, collection: &[Category], exclude_id: Option<i64>) -> NameCheck {
    if let Err(message) = Category::validate_name(name) {
        return NameCheck::Invalid(message);
    }
    if Category::is_duplicate_name(collection, name, exclude_id) {
        return NameCheck::Duplicate(format!(
            "Категория с названием «{}» уже существует",
            name.trim()
        ));
    }
    NameCheck::Ok(name.trim().to_string())
}

/// ViewModel формы категории: одна и та же форма для создания и
/// редактирования, режим определяется захваченной записью.
#[derive(Clone)]
pub struct CategoryFormVm {
    pub name: RwSignal<String>,
    pub saving: RwSignal<bool>,
    /// Редактируемая запись; `None` — режим создания.
    pub existing: Option<Category>,
}

impl CategoryFormVm {
    pub fn new(existing: Option<Category>) -> Self {
        let name = existing
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        Self {
            name: RwSignal::new(name),
            saving: RwSignal::new(false),
            existing,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.existing.is_some()
    }

    /// Провалидировать и отправить. Успех вливается в коллекцию экрана,
    /// итог любой ветки уходит в канал уведомлений.
    pub fn save_command(
        &self,
        session: Session,
        collection: RwSignal<Vec<Category>>,
        notify: NotificationService,
        on_saved: Callback<()>,
    ) {
        let exclude_id = self.existing.as_ref().map(|c| c.id);
        let name = match check_name(&self.name.get_untracked(), &collection.get_untracked(), exclude_id) {
            NameCheck::Ok(name) => name,
            NameCheck::Invalid(message) => {
                notify.warning(message);
                return;
            }
            NameCheck::Duplicate(message) => {
                notify.error(message);
                return;
            }
        };

        let saving = self.saving;
        let name_signal = self.name;
        let existing = self.existing.clone();
        saving.set(true);

        spawn_local(async move {
            match existing {
                None => {
                    match api::create(&session, CreateCategoryDto { name: name.clone() }).await {
                        Ok(created) => {
                            collection.update(|list| list.push(created));
                            notify.success(format!("Категория «{}» создана", name));
                            name_signal.set(String::new());
                            on_saved.run(());
                        }
                        Err(e) => notify.error(e.to_string()),
                    }
                }
                Some(original) => {
                    // Полная сущность: исходные поля + правки + свежий timestamp
                    let mut merged = original;
                    merged.name = name.clone();
                    merged.touch_updated();
                    match api::update(&session, &merged).await {
                        Ok(updated) => {
                            collection.update(|list| {
                                if let Some(slot) = list.iter_mut().find(|c| c.id == updated.id) {
                                    *slot = updated;
                                }
                            });
                            notify.success(format!("Категория «{}» обновлена", name));
                            on_saved.run(());
                        }
                        Err(e) => notify.error(e.to_string()),
                    }
                }
            }
            saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            active: true,
            created_on: "2024-03-15T14:02:26Z".to_string(),
            updated_on: "2024-03-15T14:02:26Z".to_string(),
            created_by: None,
        }
    }

    #[test]
    fn empty_name_is_invalid_before_any_network_call() {
        assert!(matches!(
            check_name("   ", &[], None),
            NameCheck::Invalid(_)
        ));
    }

    #[test]
    fn case_insensitive_duplicate_is_rejected() {
        let collection = vec![category(1, "Books")];
        assert!(matches!(
            check_name("books", &collection, None),
            NameCheck::Duplicate(_)
        ));
    }

    #[test]
    fn edited_entity_does_not_collide_with_itself() {
        let collection = vec![category(1, "Books")];
        assert_eq!(
            check_name("Books", &collection, Some(1)),
            NameCheck::Ok("Books".to_string())
        );
    }

    #[test]
    fn valid_name_is_trimmed() {
        assert_eq!(
            check_name("  Книги  ", &[], None),
            NameCheck::Ok("Книги".to_string())
        );
    }
}
