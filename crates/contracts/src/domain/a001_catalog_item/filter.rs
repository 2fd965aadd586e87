use super::CatalogError;
use crate::enums::{SortDirection, SortField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const PAGE_SIZE_MIN: usize = 10;
pub const PAGE_SIZE_MAX: usize = 100;
pub const PAGE_SIZE_DEFAULT: usize = 20;
/// Варианты в селекторе "на странице"
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Задержка применения поискового запроса, мс
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Сколько номеров страниц показывать без многоточий
pub const PAGE_WINDOW_MAX: usize = 7;

/// Приводит размер страницы к допустимому диапазону
pub fn clamp_page_size(size: usize) -> usize {
    size.clamp(PAGE_SIZE_MIN, PAGE_SIZE_MAX)
}

// ============================================================================
// Price range
// ============================================================================

/// Диапазон цен. Используется и как граница каталога, и как фильтр.
/// `min > max` допускается: такой фильтр просто ничего не пропускает.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Обе границы включительно
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

// ============================================================================
// Filter state
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_term: String,
    /// Пустое множество означает "все категории"
    pub selected_categories: BTreeSet<String>,
    pub price_range: PriceRange,
    pub show_in_stock_only: bool,
}

impl FilterState {
    /// Фильтры по умолчанию для каталога с диапазоном цен `catalog_range`
    pub fn with_price_range(catalog_range: PriceRange) -> Self {
        Self {
            search_term: String::new(),
            selected_categories: BTreeSet::new(),
            price_range: catalog_range,
            show_in_stock_only: false,
        }
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.selected_categories.contains(category)
    }

    /// Количество измерений фильтра, отличающихся от значений по умолчанию
    pub fn active_count(&self, catalog_range: PriceRange) -> usize {
        [
            !self.search_term.is_empty(),
            !self.selected_categories.is_empty(),
            self.price_range != catalog_range,
            self.show_in_stock_only,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

// ============================================================================
// Sort option
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOption {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Код для селектора, например "price-desc"
    pub fn code(&self) -> String {
        format!("{}-{}", self.field.code(), self.direction.code())
    }

    pub fn from_code(code: &str) -> Result<Self, CatalogError> {
        let (field, direction) = code
            .split_once('-')
            .ok_or_else(|| CatalogError::InvalidSortOption(code.to_string()))?;
        match (SortField::from_code(field), SortDirection::from_code(direction)) {
            (Some(field), Some(direction)) => Ok(Self::new(field, direction)),
            _ => Err(CatalogError::InvalidSortOption(code.to_string())),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match (self.field, self.direction) {
            (SortField::Name, SortDirection::Asc) => "Название А–Я",
            (SortField::Name, SortDirection::Desc) => "Название Я–А",
            (SortField::Price, SortDirection::Asc) => "Цена: по возрастанию",
            (SortField::Price, SortDirection::Desc) => "Цена: по убыванию",
        }
    }

    /// Все варианты в порядке отображения в селекторе
    pub fn all() -> Vec<SortOption> {
        SortField::all()
            .into_iter()
            .flat_map(|field| {
                [SortDirection::Asc, SortDirection::Desc]
                    .into_iter()
                    .map(move |direction| SortOption::new(field, direction))
            })
            .collect()
    }
}

impl std::str::FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code())
    }
}
