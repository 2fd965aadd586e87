use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
/// Порядковый номер товара в каталоге, начиная с 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// ID для позиции `index` (0-based) в исходной последовательности
    pub fn from_position(index: usize) -> Self {
        Self(u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1)))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Records
// ============================================================================

/// Запись каталога в исходном виде (без ID)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

/// Товар каталога. После загрузки не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

impl Item {
    pub fn from_raw(id: ItemId, raw: RawItem) -> Self {
        Self {
            id,
            name: raw.name,
            category: raw.category,
            price: raw.price,
            in_stock: raw.in_stock,
        }
    }

    /// Подпись статуса наличия для UI
    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "В наличии"
        } else {
            "Нет в наличии"
        }
    }
}
