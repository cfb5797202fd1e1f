use leptos::prelude::*;

use crate::shared::list_utils::PAGE_SIZES;

#[derive(Clone, Debug)]
pub struct EmployeeListState {
    pub search_query: String,
    /// Номер страницы, с единицы.
    pub page: usize,
    pub page_size: usize,
    pub is_loaded: bool,
}

impl Default for EmployeeListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            page: 1,
            page_size: PAGE_SIZES[0],
            is_loaded: false,
        }
    }
}

impl EmployeeListState {
    /// Смена размера страницы всегда возвращает на первую страницу.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 1;
    }
}

pub fn create_state() -> RwSignal<EmployeeListState> {
    RwSignal::new(EmployeeListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_page_size_resets_page_to_first() {
        let mut state = EmployeeListState {
            page: 4,
            ..Default::default()
        };
        state.set_page_size(25);
        assert_eq!(state.page_size, 25);
        assert_eq!(state.page, 1);
    }
}
