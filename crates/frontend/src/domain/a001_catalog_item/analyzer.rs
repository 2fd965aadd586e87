//! Сводные данные по всему каталогу (а не по отфильтрованной части).

use contracts::domain::a001_catalog_item::{Item, PriceRange};
use std::collections::BTreeSet;

/// Уникальные категории, отсортированные по возрастанию
pub fn available_categories(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Минимальная и максимальная цена. Для пустого каталога — `None`.
pub fn price_range(items: &[Item]) -> Option<PriceRange> {
    let (first, rest) = items.split_first()?;
    let range = rest
        .iter()
        .fold(PriceRange::new(first.price, first.price), |range, item| {
            PriceRange::new(range.min.min(item.price), range.max.max(item.price))
        });
    Some(range)
}
