use crate::shared::pagination::Pager;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductListState {
    // pagination, сбрасывается при изменении списка или размера страницы
    pub pager: Pager,
}

impl ProductListState {
    pub fn new(count: usize, page_size: usize) -> Self {
        Self {
            pager: Pager::new(count, page_size),
        }
    }

    /// Заголовок над таблицей: "Показано 21–40 из 95"
    pub fn range_label(&self) -> Option<String> {
        self.pager.visible_range().map(|(first, last)| {
            format!("Показано {}–{} из {}", first, last, self.pager.count())
        })
    }
}

pub fn create_state(count: usize, page_size: usize) -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::new(count, page_size))
}
