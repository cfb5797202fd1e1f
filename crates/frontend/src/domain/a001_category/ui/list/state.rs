use leptos::prelude::*;

use crate::shared::list_utils::PAGE_SIZES;

#[derive(Clone, Debug)]
pub struct CategoryListState {
    pub search_query: String,
    /// Номер страницы, с единицы.
    pub page: usize,
    pub page_size: usize,
    pub is_loaded: bool,
}

impl Default for CategoryListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            page: 1,
            page_size: PAGE_SIZES[0],
            is_loaded: false,
        }
    }
}

impl CategoryListState {
    /// Смена размера страницы всегда возвращает на первую страницу.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 1;
    }
}

pub fn create_state() -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_page_size_resets_page_to_first() {
        let mut state = CategoryListState {
            page: 7,
            ..Default::default()
        };
        state.set_page_size(50);
        assert_eq!(state.page_size, 50);
        assert_eq!(state.page, 1);
    }
}
