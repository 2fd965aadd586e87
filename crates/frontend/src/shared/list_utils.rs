/// Утилиты для списков: индикатор сортировки и подсветка совпадений поиска
use contracts::domain::a001_catalog_item::SortOption;
use contracts::enums::SortField;
use leptos::prelude::*;

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current: SortOption, field: SortField) -> &'static str {
    if current.field == field {
        if current.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS класс индикатора сортировки
pub fn get_sort_class(current: SortOption, field: SortField) -> &'static str {
    if current.field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Разбить текст на фрагменты: `(фрагмент, совпадает ли с запросом)`.
/// Сравнение без учёта регистра, границы фрагментов по символам исходного текста.
pub fn match_segments<'a>(text: &'a str, term: &str) -> Vec<(&'a str, bool)> {
    let term_lower = term.to_lowercase();
    if term_lower.is_empty() {
        return vec![(text, false)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        match match_len_at(&text[pos..], &term_lower) {
            Some(len) => {
                if plain_start < pos {
                    segments.push((&text[plain_start..pos], false));
                }
                segments.push((&text[pos..pos + len], true));
                pos += len;
                plain_start = pos;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        segments.push((&text[plain_start..], false));
    }
    segments
}

/// Длина в байтах префикса `text`, совпадающего с `term_lower` без учёта регистра
fn match_len_at(text: &str, term_lower: &str) -> Option<usize> {
    let mut expected = term_lower.chars().peekable();
    for (offset, c) in text.char_indices() {
        if expected.peek().is_none() {
            return Some(offset);
        }
        for lower in c.to_lowercase() {
            if expected.next() != Some(lower) {
                return None;
            }
        }
    }
    expected.peek().is_none().then_some(text.len())
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let parts = match_segments(text, term)
        .into_iter()
        .map(|(part, is_match)| {
            let part = part.to_string();
            if is_match {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <>{parts}</> }.into_any()
}
