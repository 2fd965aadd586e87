//! Фильтрация и сортировка каталога.
//!
//! Результат зависит только от входных данных: каталога, применённого
//! поискового запроса, фильтров и варианта сортировки.
//!
//! Сортировка двухэтапная и стабильная:
//! 1. по выбранному полю и направлению (для названия сначала сравнивается
//!    первое число в названии, затем само название);
//! 2. при непустом поиске точные совпадения названия поднимаются наверх,
//!    за ними названия, начинающиеся с запроса. Направление на этот этап
//!    не влияет, остальной порядок сохраняется.

use contracts::domain::a001_catalog_item::{FilterState, Item, SortOption};
use contracts::enums::SortField;
use std::cmp::Ordering;

/// Отфильтровать и отсортировать каталог
pub fn apply_query(
    items: &[Item],
    search_term: &str,
    filters: &FilterState,
    sort: SortOption,
) -> Vec<Item> {
    let term = search_term.to_lowercase();

    let mut result: Vec<Item> = items
        .iter()
        .filter(|item| matches_filters(item, &term, filters))
        .cloned()
        .collect();

    result.sort_by(|a, b| compare_items(a, b, sort));

    if !term.is_empty() {
        result.sort_by_cached_key(|item| Relevance::of(&item.name, &term));
    }

    result
}

/// Все условия фильтра. `term_lower` — поисковый запрос в нижнем регистре.
pub fn matches_filters(item: &Item, term_lower: &str, filters: &FilterState) -> bool {
    let matches_search = term_lower.is_empty() || item.name.to_lowercase().contains(term_lower);

    let matches_category = filters.selected_categories.is_empty()
        || filters.selected_categories.contains(&item.category);

    let matches_price = filters.price_range.contains(item.price);

    let matches_stock = !filters.show_in_stock_only || item.in_stock;

    matches_search && matches_category && matches_price && matches_stock
}

// ============================================================================
// Sorting
// ============================================================================

pub fn compare_items(a: &Item, b: &Item, sort: SortOption) -> Ordering {
    let ordering = match sort.field {
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Name => compare_names(&a.name, &b.name),
    };
    sort.direction.apply(ordering)
}

/// "Widget 2" < "Widget 10": сначала по первому числу в названии
pub fn compare_names(a: &str, b: &str) -> Ordering {
    extract_number(a)
        .cmp(&extract_number(b))
        .then_with(|| locale_compare(a, b))
}

/// Первая последовательность десятичных цифр в строке, 0 если цифр нет
pub fn extract_number(s: &str) -> u64 {
    s.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Сравнение строк по правилам локали браузера
#[cfg(target_arch = "wasm32")]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}

/// Без браузера: сравнение без учёта регистра, при равенстве строчные
/// буквы идут раньше заглавных ("apple" < "Apple" < "banana")
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Релевантность названия поисковому запросу (меньше — выше в списке)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Relevance {
    Exact,
    Prefix,
    Other,
}

impl Relevance {
    pub fn of(name: &str, term_lower: &str) -> Self {
        let name = name.to_lowercase();
        if name == term_lower {
            Relevance::Exact
        } else if name.starts_with(term_lower) {
            Relevance::Prefix
        } else {
            Relevance::Other
        }
    }
}
