//! Сохранённый размер страницы.
//!
//! Значение хранится строкой под ключом `PAGE_SIZE_STORAGE_KEY`. Ошибки
//! хранилища не прерывают работу: при чтении берётся значение по умолчанию,
//! при записи пишется предупреждение в лог.

use crate::shared::storage::KeyValueStorage;
use contracts::domain::a001_catalog_item::{PAGE_SIZE_DEFAULT, PAGE_SIZE_MAX, PAGE_SIZE_MIN};

pub const PAGE_SIZE_STORAGE_KEY: &str = "product-filter-page-size";

pub struct PageSizePreference<S> {
    storage: S,
}

impl<S: KeyValueStorage> PageSizePreference<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Сохранённый размер страницы или `PAGE_SIZE_DEFAULT`
    pub fn load(&self) -> usize {
        match self.storage.get_item(PAGE_SIZE_STORAGE_KEY) {
            Ok(Some(raw)) => parse_page_size(&raw).unwrap_or_else(|| {
                log::debug!("Ignoring stored page size {:?}", raw);
                PAGE_SIZE_DEFAULT
            }),
            Ok(None) => PAGE_SIZE_DEFAULT,
            Err(e) => {
                log::warn!("Failed to load page size from storage: {}", e);
                PAGE_SIZE_DEFAULT
            }
        }
    }

    pub fn save(&self, page_size: usize) {
        if let Err(e) = self
            .storage
            .set_item(PAGE_SIZE_STORAGE_KEY, &page_size.to_string())
        {
            log::warn!("Failed to save page size to storage: {}", e);
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Целое число в начале строки ("25px" -> 25), если оно в [MIN, MAX]
pub fn parse_page_size(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return None;
    }

    let value: usize = rest[..digits_len].parse().ok()?;
    (PAGE_SIZE_MIN..=PAGE_SIZE_MAX)
        .contains(&value)
        .then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("50"), Some(50));
        assert_eq!(parse_page_size("10"), Some(10));
        assert_eq!(parse_page_size("100"), Some(100));
        assert_eq!(parse_page_size(" 25px"), Some(25));
        assert_eq!(parse_page_size("+30"), Some(30));

        assert_eq!(parse_page_size("9"), None);
        assert_eq!(parse_page_size("101"), None);
        assert_eq!(parse_page_size("-20"), None);
        assert_eq!(parse_page_size("abc"), None);
        assert_eq!(parse_page_size(""), None);
        assert_eq!(parse_page_size("99999999999999999999999"), None);
    }

    #[test]
    fn test_load_uses_stored_value() {
        let storage = MemoryStorage::with_item(PAGE_SIZE_STORAGE_KEY, "50");
        assert_eq!(PageSizePreference::new(&storage).load(), 50);
    }

    #[test]
    fn test_load_falls_back_to_default() {
        let out_of_range = MemoryStorage::with_item(PAGE_SIZE_STORAGE_KEY, "500");
        assert_eq!(PageSizePreference::new(&out_of_range).load(), PAGE_SIZE_DEFAULT);

        let garbage = MemoryStorage::with_item(PAGE_SIZE_STORAGE_KEY, "many");
        assert_eq!(PageSizePreference::new(&garbage).load(), PAGE_SIZE_DEFAULT);

        let missing = MemoryStorage::new();
        assert_eq!(PageSizePreference::new(&missing).load(), PAGE_SIZE_DEFAULT);

        let unavailable = MemoryStorage::unavailable();
        assert_eq!(PageSizePreference::new(&unavailable).load(), PAGE_SIZE_DEFAULT);
    }

    #[test]
    fn test_save_writes_decimal_string() {
        let storage = MemoryStorage::new();
        PageSizePreference::new(&storage).save(100);
        assert_eq!(storage.peek(PAGE_SIZE_STORAGE_KEY), Some("100".to_string()));
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let storage = MemoryStorage::read_only();
        let preference = PageSizePreference::new(&storage);
        preference.save(50);
        assert_eq!(preference.load(), PAGE_SIZE_DEFAULT);
    }
}
