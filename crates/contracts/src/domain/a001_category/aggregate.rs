use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::bool_as_int;

/// Максимальная длина названия категории.
pub const NAME_MAX_LEN: usize = 30;

// ============================================================================
// Aggregate
// ============================================================================

/// Категория товаров/услуг.
///
/// Флаг `active` в формате коллаборатора передаётся числом `0`/`1`,
/// в коде всегда булево значение (см. `shared::serde_utils::bool_as_int`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,

    #[serde(with = "bool_as_int")]
    pub active: bool,

    /// Метки времени в ISO-8601, как их отдаёт коллаборатор.
    pub created_on: String,
    pub updated_on: String,

    /// Кто создал запись. Только для отображения, не редактируется.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserRef>,
}

/// Ссылка на пользователя в составе другой сущности.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: i64,
    pub username: String,
}

impl Category {
    /// Человекочитаемая метка статуса (участвует в поиске).
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Активна"
        } else {
            "Неактивна"
        }
    }

    /// Обновить timestamp перед отправкой изменённой сущности.
    pub fn touch_updated(&mut self) {
        self.updated_on = Utc::now().to_rfc3339();
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса `POST /save`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    pub name: String,
}

// ============================================================================
// Validation
// ============================================================================

impl Category {
    /// Валидация названия: только буквы и пробелы, не пустое, не длиннее
    /// `NAME_MAX_LEN` символов.
    pub fn validate_name(name: &str) -> Result<(), String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Название не может быть пустым".into());
        }
        if trimmed.chars().count() > NAME_MAX_LEN {
            return Err(format!(
                "Название не может быть длиннее {} символов",
                NAME_MAX_LEN
            ));
        }
        if !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
            return Err("Название может содержать только буквы и пробелы".into());
        }
        Ok(())
    }

    /// Проверка дубликата названия (без учёта регистра) по текущей коллекции.
    /// `exclude_id` исключает редактируемую сущность из сравнения.
    pub fn is_duplicate_name(collection: &[Category], name: &str, exclude_id: Option<i64>) -> bool {
        let needle = name.trim().to_lowercase();
        collection
            .iter()
            .filter(|c| Some(c.id) != exclude_id)
            .any(|c| c.name.trim().to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str, active: bool) -> Category {
        Category {
            id,
            name: name.to_string(),
            active,
            created_on: "2024-03-15T14:02:26Z".to_string(),
            updated_on: "2024-03-15T14:02:26Z".to_string(),
            created_by: None,
        }
    }

    #[test]
    fn validate_name_rejects_empty_and_whitespace() {
        assert!(Category::validate_name("").is_err());
        assert!(Category::validate_name("   ").is_err());
    }

    #[test]
    fn validate_name_rejects_digits_and_punctuation() {
        assert!(Category::validate_name("Книги 2024").is_err());
        assert!(Category::validate_name("Книги!").is_err());
    }

    #[test]
    fn validate_name_accepts_letters_and_spaces() {
        assert!(Category::validate_name("Книги").is_ok());
        assert!(Category::validate_name("Office Supplies").is_ok());
    }

    #[test]
    fn validate_name_enforces_max_length() {
        let long = "а".repeat(NAME_MAX_LEN + 1);
        assert!(Category::validate_name(&long).is_err());
        let ok = "а".repeat(NAME_MAX_LEN);
        assert!(Category::validate_name(&ok).is_ok());
    }

    #[test]
    fn duplicate_check_is_case_insensitive() {
        let collection = vec![category(1, "Books", true)];
        assert!(Category::is_duplicate_name(&collection, "books", None));
        assert!(Category::is_duplicate_name(&collection, " BOOKS ", None));
        assert!(!Category::is_duplicate_name(&collection, "Pens", None));
    }

    #[test]
    fn duplicate_check_excludes_edited_entity() {
        let collection = vec![category(1, "Books", true), category(2, "Pens", true)];
        assert!(!Category::is_duplicate_name(&collection, "Books", Some(1)));
        assert!(Category::is_duplicate_name(&collection, "Pens", Some(1)));
    }

    #[test]
    fn active_flag_crosses_the_wire_as_integer() {
        let json = serde_json::to_value(category(5, "Books", false)).unwrap();
        assert_eq!(json["active"], 0);
        assert_eq!(json["createdOn"], "2024-03-15T14:02:26Z");

        let parsed: Category =
            serde_json::from_value(serde_json::json!({
                "id": 5,
                "name": "Books",
                "active": 1,
                "createdOn": "2024-03-15T14:02:26Z",
                "updatedOn": "2024-03-15T14:02:26Z",
            }))
            .unwrap();
        assert!(parsed.active);
    }
}
