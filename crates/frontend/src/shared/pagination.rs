//! Клиентская пагинация: срез страницы и компактное окно номеров страниц.
//!
//! Страницы нумеруются с 1. Пустой список даёт 0 страниц.

use contracts::domain::a001_catalog_item::PAGE_WINDOW_MAX;

/// Элемент окна номеров страниц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

/// Количество страниц: ceil(count / page_size)
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Элементы страницы `page`. Страница за пределами списка пуста.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Номера страниц для отображения.
///
/// До `PAGE_WINDOW_MAX` страниц показываются все. Иначе: первая страница,
/// соседи текущей и последняя страница, разрывы обозначаются многоточием.
pub fn page_window(current: usize, total: usize) -> Vec<PageToken> {
    if total <= PAGE_WINDOW_MAX {
        return (1..=total).map(PageToken::Page).collect();
    }

    let mut tokens = vec![PageToken::Page(1)];
    if current > 3 {
        tokens.push(PageToken::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    tokens.extend((start..=end).map(PageToken::Page));

    if current + 2 < total {
        tokens.push(PageToken::Ellipsis);
    }
    if total > 1 {
        tokens.push(PageToken::Page(total));
    }
    tokens
}

/// Диапазон номеров записей на странице (1-based, включительно),
/// например (21, 40) для "Показано 21–40 из 95"
pub fn visible_range(count: usize, page: usize, page_size: usize) -> Option<(usize, usize)> {
    if count == 0 || page == 0 || page_size == 0 {
        return None;
    }
    let first = (page - 1).saturating_mul(page_size) + 1;
    if first > count {
        return None;
    }
    let last = page.saturating_mul(page_size).min(count);
    Some((first, last))
}

// ============================================================================
// Pager
// ============================================================================

/// Текущая страница списка.
///
/// Сбрасывается на первую страницу при изменении длины списка или размера
/// страницы. Переходы ограничены диапазоном [1, total_pages].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    count: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(count: usize, page_size: usize) -> Self {
        Self {
            current: 1,
            count,
            page_size,
        }
    }

    /// Обновить длину списка и размер страницы.
    /// Возвращает `true`, если страница была сброшена.
    pub fn sync(&mut self, count: usize, page_size: usize) -> bool {
        if self.count == count && self.page_size == page_size {
            return false;
        }
        self.count = count;
        self.page_size = page_size;
        self.current = 1;
        true
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.count, self.page_size)
    }

    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.total_pages().max(1));
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// Навигация нужна только при нескольких страницах
    pub fn shows_controls(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn window(&self) -> Vec<PageToken> {
        page_window(self.current, self.total_pages())
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.current, self.page_size)
    }

    pub fn visible_range(&self) -> Option<(usize, usize)> {
        visible_range(self.count, self.current, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::PageToken::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn test_page_slice_bounds() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 3, 10), &[21, 22, 23, 24, 25]);
        assert!(page_slice(&items, 4, 10).is_empty());
        assert!(page_slice(&items, 0, 10).is_empty());
    }

    #[test]
    fn test_small_window_shows_all_pages() {
        assert!(page_window(1, 0).is_empty());
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(
            page_window(4, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_large_window() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(0, 1, 20), None);
        assert_eq!(visible_range(95, 1, 20), Some((1, 20)));
        assert_eq!(visible_range(95, 5, 20), Some((81, 95)));
        assert_eq!(visible_range(95, 6, 20), None);
    }

    #[test]
    fn test_pager_resets_on_change() {
        let mut pager = Pager::new(95, 20);
        pager.go_to(4);
        assert_eq!(pager.current(), 4);

        assert!(!pager.sync(95, 20));
        assert_eq!(pager.current(), 4);

        assert!(pager.sync(40, 20));
        assert_eq!(pager.current(), 1);

        pager.go_to(2);
        assert!(pager.sync(40, 10));
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn test_pager_navigation_is_bounded() {
        let mut pager = Pager::new(45, 20);
        assert!(!pager.has_prev());
        assert!(pager.has_next());

        pager.go_to(2);
        assert!(pager.has_prev());
        assert!(pager.has_next());

        pager.go_to(99);
        assert_eq!(pager.current(), 3);
        assert!(pager.has_prev());
        assert!(!pager.has_next());

        pager.go_to(0);
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn test_empty_pager_has_no_controls() {
        let pager = Pager::new(0, 20);
        assert_eq!(pager.total_pages(), 0);
        assert!(pager.window().is_empty());
        assert!(!pager.shows_controls());
        assert!(!pager.has_next());
        let empty: [u8; 0] = [];
        assert!(pager.slice(&empty).is_empty());
        assert_eq!(pager.visible_range(), None);
    }

    proptest! {
        #[test]
        fn prop_pages_reassemble_sequence(count in 0usize..500, page_size in 10usize..=100) {
            let items: Vec<usize> = (0..count).collect();
            let pages = total_pages(count, page_size);
            prop_assert_eq!(pages, (count + page_size - 1) / page_size);

            let joined: Vec<usize> = (1..=pages)
                .flat_map(|page| page_slice(&items, page, page_size).iter().copied())
                .collect();
            prop_assert_eq!(joined, items);
        }

        #[test]
        fn prop_window_is_well_formed(total in 1usize..200, seed in 0usize..200) {
            let current = seed % total + 1;
            let window = page_window(current, total);

            prop_assert!(window.len() <= PAGE_WINDOW_MAX);
            prop_assert_eq!(window.first(), Some(&Page(1)));
            prop_assert_eq!(window.last(), Some(&Page(total)));
            prop_assert!(window.contains(&Page(current)));

            let pages: Vec<usize> = window
                .iter()
                .filter_map(|t| match t {
                    Page(p) => Some(*p),
                    Ellipsis => None,
                })
                .collect();
            prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
