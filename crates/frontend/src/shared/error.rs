//! Error taxonomy for the admin screens.
//!
//! Every fault is recovered locally: converted into exactly one user-facing
//! notification and logged. Nothing here propagates as an unhandled panic.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Клиентская валидация; блокирует отправку до любого сетевого вызова.
    #[error("{0}")]
    Validation(String),

    /// Запрос не отправился, истёк по таймауту или вернул не-2xx статус.
    #[error("{0}")]
    Network(String),

    /// Целевая запись отсутствует в загруженной коллекции на момент
    /// подтверждения.
    #[error("Запись с id {0} не найдена в загруженных данных, обновите список")]
    NotFound(i64),
}

impl UiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Ответ коллаборатора с не-2xx статусом: сырой текст ошибки прогоняется
    /// через классификатор подстрок.
    pub fn from_server_response(status: u16, raw_body: &str) -> Self {
        log::warn!("server returned {}: {}", status, raw_body);
        Self::Network(classify_server_error(raw_body))
    }
}

/// Правила классификации сырого текста ошибки сервера. Проверяются по
/// порядку, первое совпадение побеждает.
const CLASSIFIER_RULES: &[(&str, &str)] = &[
    ("unauthorized", "Сессия истекла, войдите в систему заново"),
    ("forbidden", "Недостаточно прав для выполнения операции"),
    ("access is denied", "Недостаточно прав для выполнения операции"),
    ("duplicate", "Такая запись уже существует на сервере"),
    ("already exists", "Такая запись уже существует на сервере"),
    ("not found", "Запись не найдена на сервере, обновите список"),
    ("timeout", "Сервер не ответил вовремя, попробуйте ещё раз"),
];

pub const GENERIC_SERVER_ERROR: &str = "Не удалось выполнить операцию, попробуйте ещё раз";

/// Дружелюбное сообщение по сырому тексту ошибки сервера.
pub fn classify_server_error(raw: &str) -> String {
    let haystack = raw.to_lowercase();
    CLASSIFIER_RULES
        .iter()
        .find(|(needle, _)| haystack.contains(needle))
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        // "unauthorized" стоит раньше "not found"
        let msg = classify_server_error("Unauthorized: token not found");
        assert_eq!(msg, "Сессия истекла, войдите в систему заново");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let msg = classify_server_error("DUPLICATE ENTRY 'books'");
        assert_eq!(msg, "Такая запись уже существует на сервере");
    }

    #[test]
    fn unmatched_text_falls_back_to_generic_message() {
        assert_eq!(classify_server_error("boom"), GENERIC_SERVER_ERROR);
        assert_eq!(classify_server_error(""), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn not_found_message_names_the_id() {
        let err = UiError::NotFound(5);
        assert!(err.to_string().contains("id 5"));
    }
}
