//! Загрузка каталога: исходные записи получают ID по порядку (с 1).

use contracts::domain::a001_catalog_item::{CatalogError, Item, ItemId, RawItem};

/// Каталог, встроенный в сборку
const BUNDLED_ITEMS_JSON: &str = include_str!("../../../data/items.json");

/// Назначить ID записям в порядке следования
pub fn process_items(raw: Vec<RawItem>) -> Vec<Item> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| Item::from_raw(ItemId::from_position(index), record))
        .collect()
}

/// Разобрать JSON-массив записей `{name, category, price, inStock}`
pub fn parse_items(json: &str) -> Result<Vec<Item>, CatalogError> {
    let raw: Vec<RawItem> = serde_json::from_str(json)?;
    Ok(process_items(raw))
}

pub fn bundled_items() -> Result<Vec<Item>, CatalogError> {
    parse_items(BUNDLED_ITEMS_JSON)
}
