//! Реактивная обёртка над `ProductsFilter`.
//!
//! Состояние живёт в одном `RwSignal`, компоненты читают производные `Memo`
//! и меняют состояние только через методы `UseProductsFilter`.
//! Задержка поиска отсчитывается `gloo_timers::callback::Timeout`. Активен не
//! более одного таймера: новый ввод заменяет его в `PendingTimer`, и старый
//! таймер отменяется. `ProductsFilter::settle_search` дополнительно применяет
//! только последний тикет.

use crate::domain::a001_catalog_item::ProductsFilter;
use crate::shared::debounce::PendingTimer;
use crate::shared::storage::BrowserStorage;
use contracts::domain::a001_catalog_item::{
    CatalogError, FilterState, Item, PriceRange, SortOption,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UseProductsFilter {
    pub filtered_items: Memo<Vec<Item>>,
    pub total_items: Memo<usize>,
    pub filters: Memo<FilterState>,
    pub sort_option: Memo<SortOption>,
    pub page_size: Memo<usize>,
    pub available_categories: Memo<Vec<String>>,
    /// Диапазон цен всего каталога
    pub price_range: Memo<PriceRange>,
    pub debounced_search_term: Memo<String>,
    pub active_filter_count: Memo<usize>,

    engine: RwSignal<ProductsFilter<BrowserStorage>>,
    // Timeout не Send
    pending_search: StoredValue<PendingTimer<Timeout>, LocalStorage>,
}

pub fn use_products_filter(items: Vec<Item>) -> Result<UseProductsFilter, CatalogError> {
    let engine = RwSignal::new(ProductsFilter::new(items, BrowserStorage)?);

    Ok(UseProductsFilter {
        filtered_items: Memo::new(move |_| engine.with(|e| e.filtered_items().to_vec())),
        total_items: Memo::new(move |_| engine.with(|e| e.total_items())),
        filters: Memo::new(move |_| engine.with(|e| e.filters().clone())),
        sort_option: Memo::new(move |_| engine.with(|e| e.sort_option())),
        page_size: Memo::new(move |_| engine.with(|e| e.page_size())),
        available_categories: Memo::new(move |_| {
            engine.with(|e| e.available_categories().to_vec())
        }),
        price_range: Memo::new(move |_| engine.with(|e| e.price_range())),
        debounced_search_term: Memo::new(move |_| {
            engine.with(|e| e.debounced_search_term().to_string())
        }),
        active_filter_count: Memo::new(move |_| engine.with(|e| e.active_filter_count())),
        engine,
        pending_search: StoredValue::new_local(PendingTimer::default()),
    })
}

impl UseProductsFilter {
    pub fn update_search_term(&self, term: String) {
        let engine = self.engine;
        let Some(ticket) =
            engine.try_update(|e| e.update_search_term(&term, js_sys::Date::now()))
        else {
            return;
        };

        let timeout = Timeout::new(ticket.delay_ms, move || {
            engine.maybe_update(|e| e.settle_search(ticket));
        });
        self.pending_search.update_value(|timer| timer.arm(timeout));
    }

    pub fn toggle_category(&self, category: &str) {
        self.engine.update(|e| e.toggle_category(category));
    }

    pub fn update_price_range(&self, min: f64, max: f64) {
        self.engine.update(|e| e.update_price_range(min, max));
    }

    pub fn toggle_in_stock_only(&self) {
        self.engine.update(|e| e.toggle_in_stock_only());
    }

    pub fn update_sort(&self, option: SortOption) {
        self.engine.update(|e| e.update_sort(option));
    }

    pub fn update_page_size(&self, size: usize) {
        self.engine.update(|e| e.update_page_size(size));
    }

    pub fn reset_filters(&self) {
        self.pending_search.update_value(PendingTimer::cancel);
        self.engine.update(|e| e.reset_filters());
    }
}
