//! Состояние фильтров каталога.
//!
//! `ProductsFilter` владеет каталогом, текущими фильтрами, сортировкой и
//! размером страницы. Любое изменение проходит через методы ниже, после чего
//! отфильтрованный список пересчитывается целиком.
//!
//! Поиск применяется с задержкой: `update_search_term` меняет только
//! введённый текст, а фильтрация использует значение, прошедшее через
//! `Debounced` (см. `settle_search` и `tick`).

use super::analyzer;
use super::preference::PageSizePreference;
use super::query;
use crate::shared::debounce::{DebounceTicket, Debounced};
use crate::shared::storage::KeyValueStorage;
use contracts::domain::a001_catalog_item::{
    clamp_page_size, CatalogError, FilterState, Item, PriceRange, SortOption, SEARCH_DEBOUNCE_MS,
};

pub struct ProductsFilter<S> {
    items: Vec<Item>,
    categories: Vec<String>,
    catalog_price_range: PriceRange,

    filters: FilterState,
    search: Debounced<String>,
    sort: SortOption,
    page_size: usize,
    preference: PageSizePreference<S>,

    filtered: Vec<Item>,
}

impl<S: KeyValueStorage> ProductsFilter<S> {
    /// Размер страницы берётся из хранилища, остальные фильтры — по умолчанию
    pub fn new(items: Vec<Item>, storage: S) -> Result<Self, CatalogError> {
        let catalog_price_range =
            analyzer::price_range(&items).ok_or(CatalogError::EmptyCatalog)?;
        let categories = analyzer::available_categories(&items);
        let preference = PageSizePreference::new(storage);
        let page_size = preference.load();

        let mut engine = Self {
            items,
            categories,
            catalog_price_range,
            filters: FilterState::with_price_range(catalog_price_range),
            search: Debounced::new(String::new(), SEARCH_DEBOUNCE_MS),
            sort: SortOption::default(),
            page_size,
            preference,
            filtered: Vec::new(),
        };
        engine.recompute();

        log::debug!(
            "Catalog loaded: {} items, {} categories, price {}..{}, page size {}",
            engine.items.len(),
            engine.categories.len(),
            catalog_price_range.min,
            catalog_price_range.max,
            page_size
        );
        Ok(engine)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub fn filtered_items(&self) -> &[Item] {
        &self.filtered
    }

    pub fn total_items(&self) -> usize {
        self.filtered.len()
    }

    pub fn all_items(&self) -> &[Item] {
        &self.items
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn available_categories(&self) -> &[String] {
        &self.categories
    }

    /// Диапазон цен всего каталога
    pub fn price_range(&self) -> PriceRange {
        self.catalog_price_range
    }

    /// Поисковый запрос, который сейчас участвует в фильтрации
    pub fn debounced_search_term(&self) -> &str {
        self.search.settled()
    }

    pub fn is_search_pending(&self) -> bool {
        self.search.is_pending()
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count(self.catalog_price_range)
    }

    pub fn storage(&self) -> &S {
        self.preference.storage()
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Запомнить введённый текст. Фильтр применит его после паузы:
    /// по таймеру через `settle_search(ticket)` или через `tick(now_ms)`.
    pub fn update_search_term(&mut self, term: &str, now_ms: f64) -> DebounceTicket {
        self.filters.search_term = term.to_string();
        self.search.push(term.to_string(), now_ms)
    }

    /// Срабатывание таймера задержки. Возвращает `true`, если список изменился.
    pub fn settle_search(&mut self, ticket: DebounceTicket) -> bool {
        let applied = self.search.fire(ticket);
        if applied {
            self.on_search_applied();
        }
        applied
    }

    /// Применить поиск, если с последнего ввода прошла задержка
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let applied = self.search.poll(now_ms);
        if applied {
            self.on_search_applied();
        }
        applied
    }

    fn on_search_applied(&mut self) {
        log::debug!("Search applied: {:?}", self.search.settled());
        self.recompute();
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn toggle_category(&mut self, category: &str) {
        let selected = &mut self.filters.selected_categories;
        if !selected.remove(category) {
            selected.insert(category.to_string());
        }
        log::debug!("Categories: {:?}", self.filters.selected_categories);
        self.recompute();
    }

    /// Границы сохраняются как есть, `min > max` даёт пустой список
    pub fn update_price_range(&mut self, min: f64, max: f64) {
        self.filters.price_range = PriceRange::new(min, max);
        log::debug!("Price range: {}..{}", min, max);
        self.recompute();
    }

    pub fn toggle_in_stock_only(&mut self) {
        self.filters.show_in_stock_only = !self.filters.show_in_stock_only;
        log::debug!("In stock only: {}", self.filters.show_in_stock_only);
        self.recompute();
    }

    pub fn update_sort(&mut self, option: SortOption) {
        self.sort = option;
        log::debug!("Sort: {}", option);
        self.recompute();
    }

    /// Размер приводится к [10, 100] и сохраняется в хранилище
    pub fn update_page_size(&mut self, size: usize) {
        self.page_size = clamp_page_size(size);
        log::debug!("Page size: {} (requested {})", self.page_size, size);
        self.preference.save(self.page_size);
    }

    /// Сбросить фильтры и сортировку. Размер страницы не меняется.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::with_price_range(self.catalog_price_range);
        self.search.reset(String::new());
        self.sort = SortOption::default();
        log::debug!("Filters reset");
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = query::apply_query(
            &self.items,
            self.search.settled(),
            &self.filters,
            self.sort,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog_item::preference::PAGE_SIZE_STORAGE_KEY;
    use crate::shared::storage::MemoryStorage;
    use contracts::domain::a001_catalog_item::{ItemId, RawItem, PAGE_SIZE_DEFAULT};
    use contracts::enums::{SortDirection, SortField};
    use pretty_assertions::assert_eq;

    fn raw(name: &str, category: &str, price: f64, in_stock: bool) -> RawItem {
        RawItem {
            name: name.to_string(),
            category: category.to_string(),
            price,
            in_stock,
        }
    }

    fn catalog() -> Vec<Item> {
        crate::domain::a001_catalog_item::loader::process_items(vec![
            raw("Widget 2", "A", 10.0, true),
            raw("Widget 10", "B", 5.0, false),
            raw("Lamp 1", "Home", 25.0, true),
            raw("Desk lamp", "Home", 40.0, false),
        ])
    }

    fn engine() -> ProductsFilter<MemoryStorage> {
        ProductsFilter::new(catalog(), MemoryStorage::new()).unwrap()
    }

    fn names<S: KeyValueStorage>(engine: &ProductsFilter<S>) -> Vec<&str> {
        engine
            .filtered_items()
            .iter()
            .map(|i| i.name.as_str())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert_eq!(engine.total_items(), 4);
        assert_eq!(engine.available_categories(), ["A", "B", "Home"]);
        assert_eq!(engine.price_range(), PriceRange::new(5.0, 40.0));
        assert_eq!(engine.filters().price_range, engine.price_range());
        assert_eq!(engine.sort_option(), SortOption::default());
        assert_eq!(engine.page_size(), PAGE_SIZE_DEFAULT);
        assert_eq!(engine.debounced_search_term(), "");
        assert_eq!(engine.active_filter_count(), 0);
        assert_eq!(
            names(&engine),
            vec!["Desk lamp", "Lamp 1", "Widget 2", "Widget 10"]
        );
        assert_eq!(engine.all_items()[1].id, ItemId::new(2));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let result = ProductsFilter::new(Vec::new(), MemoryStorage::new());
        assert!(matches!(result, Err(CatalogError::EmptyCatalog)));
    }

    #[test]
    fn test_search_waits_for_debounce() {
        let mut engine = engine();
        let first = engine.update_search_term("wid", 0.0);
        let last = engine.update_search_term("widget 10", 100.0);

        assert_eq!(engine.filters().search_term, "widget 10");
        assert_eq!(engine.debounced_search_term(), "");
        assert_eq!(engine.total_items(), 4);
        assert!(engine.is_search_pending());

        assert!(!engine.settle_search(first));
        assert_eq!(engine.total_items(), 4);

        assert!(engine.settle_search(last));
        assert_eq!(engine.debounced_search_term(), "widget 10");
        assert_eq!(names(&engine), vec!["Widget 10"]);
    }

    #[test]
    fn test_tick_applies_search_after_delay() {
        let mut engine = engine();
        engine.update_search_term("lamp", 1_000.0);

        assert!(!engine.tick(1_299.0));
        assert_eq!(engine.total_items(), 4);

        assert!(engine.tick(1_300.0));
        assert_eq!(names(&engine), vec!["Lamp 1", "Desk lamp"]);
    }

    #[test]
    fn test_exact_match_first_for_every_sort() {
        let mut engine = engine();
        let ticket = engine.update_search_term("Widget 10", 0.0);
        engine.settle_search(ticket);
        for option in SortOption::all() {
            engine.update_sort(option);
            assert_eq!(engine.filtered_items()[0].name, "Widget 10");
        }
    }

    #[test]
    fn test_toggle_category_is_symmetric() {
        let mut engine = engine();
        engine.toggle_category("Home");
        assert_eq!(names(&engine), vec!["Desk lamp", "Lamp 1"]);
        assert_eq!(engine.active_filter_count(), 1);

        engine.toggle_category("A");
        assert_eq!(engine.total_items(), 3);

        engine.toggle_category("Home");
        engine.toggle_category("A");
        assert!(engine.filters().selected_categories.is_empty());
        assert_eq!(engine.total_items(), 4);
    }

    #[test]
    fn test_price_range_is_stored_verbatim() {
        let mut engine = engine();
        engine.update_price_range(5.0, 10.0);
        assert_eq!(names(&engine), vec!["Widget 2", "Widget 10"]);

        engine.update_price_range(30.0, 10.0);
        assert_eq!(engine.filters().price_range, PriceRange::new(30.0, 10.0));
        assert_eq!(engine.total_items(), 0);

        engine.update_price_range(0.0, 1_000.0);
        assert_eq!(engine.total_items(), 4);
        // каталожный диапазон не меняется
        assert_eq!(engine.price_range(), PriceRange::new(5.0, 40.0));
    }

    #[test]
    fn test_in_stock_only() {
        let mut engine = engine();
        engine.toggle_in_stock_only();
        assert!(engine.filtered_items().iter().all(|i| i.in_stock));
        assert_eq!(engine.total_items(), 2);

        engine.toggle_in_stock_only();
        assert_eq!(engine.total_items(), 4);
    }

    #[test]
    fn test_update_sort() {
        let mut engine = engine();
        engine.update_sort(SortOption::new(SortField::Price, SortDirection::Desc));
        assert_eq!(
            names(&engine),
            vec!["Desk lamp", "Lamp 1", "Widget 2", "Widget 10"]
        );

        engine.update_sort(SortOption::new(SortField::Name, SortDirection::Desc));
        assert_eq!(
            names(&engine),
            vec!["Widget 10", "Widget 2", "Lamp 1", "Desk lamp"]
        );
    }

    #[test]
    fn test_update_page_size_clamps_and_persists() {
        let mut engine = engine();
        engine.update_page_size(5);
        assert_eq!(engine.page_size(), 10);
        engine.update_page_size(500);
        assert_eq!(engine.page_size(), 100);
        engine.update_page_size(50);
        assert_eq!(engine.page_size(), 50);
        assert_eq!(
            engine.storage().peek(PAGE_SIZE_STORAGE_KEY),
            Some("50".to_string())
        );
    }

    #[test]
    fn test_page_size_is_restored_from_storage() {
        let storage = MemoryStorage::with_item(PAGE_SIZE_STORAGE_KEY, "50");
        let engine = ProductsFilter::new(catalog(), storage).unwrap();
        assert_eq!(engine.page_size(), 50);

        let storage = MemoryStorage::with_item(PAGE_SIZE_STORAGE_KEY, "7");
        let engine = ProductsFilter::new(catalog(), storage).unwrap();
        assert_eq!(engine.page_size(), PAGE_SIZE_DEFAULT);
    }

    #[test]
    fn test_page_size_write_failure_keeps_state() {
        let mut engine = ProductsFilter::new(catalog(), MemoryStorage::read_only()).unwrap();
        engine.update_page_size(50);
        assert_eq!(engine.page_size(), 50);
    }

    #[test]
    fn test_reset_filters_keeps_page_size() {
        let mut engine = engine();
        engine.update_page_size(50);
        let ticket = engine.update_search_term("lamp", 0.0);
        engine.settle_search(ticket);
        engine.toggle_category("Home");
        engine.update_price_range(1.0, 2.0);
        engine.toggle_in_stock_only();
        engine.update_sort(SortOption::new(SortField::Price, SortDirection::Desc));
        assert_eq!(engine.active_filter_count(), 4);

        engine.reset_filters();

        assert_eq!(engine.filters(), &FilterState::with_price_range(engine.price_range()));
        assert_eq!(engine.debounced_search_term(), "");
        assert_eq!(engine.sort_option(), SortOption::default());
        assert_eq!(engine.page_size(), 50);
        assert_eq!(engine.total_items(), 4);
        assert_eq!(engine.active_filter_count(), 0);
    }

    #[test]
    fn test_reset_cancels_pending_search() {
        let mut engine = engine();
        let ticket = engine.update_search_term("lamp", 0.0);
        engine.reset_filters();

        assert!(!engine.settle_search(ticket));
        assert!(!engine.tick(10_000.0));
        assert_eq!(engine.total_items(), 4);
    }
}
