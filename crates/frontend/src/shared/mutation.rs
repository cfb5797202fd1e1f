//! Состояние подтверждаемой мутации.
//!
//! На один экран — не больше одной мутации: запрошенная операция ждёт
//! подтверждения в модальном окне, после подтверждения уходит на сервер,
//! повторная отправка во время полёта исключена самим автоматом состояний.

/// `Idle → Pending → Submitting → Idle`, отмена возвращает из `Pending`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmState<T> {
    #[default]
    Idle,
    /// Операция захвачена и ждёт подтверждения пользователя.
    Pending(T),
    /// Запрос в полёте; кнопка подтверждения должна быть отключена.
    Submitting(T),
}

impl<T: Clone> ConfirmState<T> {
    /// Захватить операцию. Игнорируется, если другая уже в работе.
    pub fn request(&mut self, action: T) {
        if matches!(self, Self::Idle) {
            *self = Self::Pending(action);
        }
    }

    /// Подтверждение пользователя: переход в `Submitting`.
    /// Возвращает операцию для отправки; `None`, если отправка уже идёт.
    pub fn begin_submit(&mut self) -> Option<T> {
        match self {
            Self::Pending(action) => {
                let action = action.clone();
                *self = Self::Submitting(action.clone());
                Some(action)
            }
            _ => None,
        }
    }

    /// Отмена из модального окна. Во время полёта запроса не действует.
    pub fn cancel(&mut self) {
        if matches!(self, Self::Pending(_)) {
            *self = Self::Idle;
        }
    }

    /// Завершение операции (успех или ошибка уже превращены в уведомление).
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    /// Модальное окно открыто, пока операция захвачена.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    pub fn action(&self) -> Option<&T> {
        match self {
            Self::Idle => None,
            Self::Pending(action) | Self::Submitting(action) => Some(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_confirm_lifecycle() {
        let mut state = ConfirmState::Idle;
        state.request(5);
        assert_eq!(state, ConfirmState::Pending(5));
        assert!(state.is_open());

        assert_eq!(state.begin_submit(), Some(5));
        assert!(state.is_submitting());

        state.finish();
        assert_eq!(state, ConfirmState::Idle);
    }

    #[test]
    fn cancel_discards_pending_action() {
        let mut state = ConfirmState::Idle;
        state.request(5);
        state.cancel();
        assert_eq!(state, ConfirmState::Idle);
    }

    #[test]
    fn cancel_does_not_interrupt_submission() {
        let mut state = ConfirmState::Idle;
        state.request(5);
        state.begin_submit();
        state.cancel();
        assert!(state.is_submitting());
    }

    #[test]
    fn double_submit_is_guarded() {
        let mut state = ConfirmState::Idle;
        state.request(5);
        assert_eq!(state.begin_submit(), Some(5));
        assert_eq!(state.begin_submit(), None);
    }

    #[test]
    fn second_request_is_ignored_while_busy() {
        let mut state = ConfirmState::Idle;
        state.request(5);
        state.request(7);
        assert_eq!(state.action(), Some(&5));
    }
}
