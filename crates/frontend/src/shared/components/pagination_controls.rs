use crate::shared::icons::icon;
use crate::shared::pagination::{page_window, PageToken};
use leptos::prelude::*;

/// PaginationControls component - навигация по страницам (нумерация с 1)
///
/// Показывает кнопки "назад"/"вперёд" и компактное окно номеров страниц
/// с многоточиями (см. `page_window`).
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Есть предыдущая страница
    #[prop(into)]
    has_prev: Signal<bool>,

    /// Есть следующая страница
    #[prop(into)]
    has_next: Signal<bool>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let tokens = move || page_window(current_page.get(), total_pages.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_prev.get() {
                        on_page_change.run(current_page.get() - 1);
                    }
                }
                disabled=move || !has_prev.get()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
                "Назад"
            </button>
            {move || {
                tokens()
                    .into_iter()
                    .map(|token| match token {
                        PageToken::Page(page) => view! {
                            <button
                                class=move || {
                                    if current_page.get() == page {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                        .into_any(),
                        PageToken::Ellipsis => view! {
                            <span class="pagination-ellipsis">"..."</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_next.get() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=move || !has_next.get()
                title="Следующая страница"
            >
                "Вперёд"
                {icon("chevron-right")}
            </button>
        </div>
    }
}
