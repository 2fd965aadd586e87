pub mod state;

use self::state::create_state;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellPrice};
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_catalog_item::{Item, SortOption};
use contracts::enums::SortField;
use leptos::prelude::*;
use thaw::*;

/// Таблица товаров текущей страницы с навигацией по страницам
#[component]
pub fn ProductList(
    /// Отфильтрованный и отсортированный список
    #[prop(into)]
    items: Signal<Vec<Item>>,

    #[prop(into)]
    page_size: Signal<usize>,

    /// Применённый поисковый запрос (для подсветки)
    #[prop(into)]
    search_term: Signal<String>,

    #[prop(into)]
    sort_option: Signal<SortOption>,

    on_sort: Callback<SortOption>,
) -> impl IntoView {
    let state = create_state(
        items.with_untracked(Vec::len),
        page_size.get_untracked(),
    );

    // новая выборка или размер страницы -> первая страница
    Effect::new(move |_| {
        let count = items.with(Vec::len);
        let size = page_size.get();
        state.maybe_update(|s| s.pager.sync(count, size));
    });

    let is_empty = Memo::new(move |_| items.with(Vec::is_empty));
    let page_items = move || state.with(|s| items.with(|all| s.pager.slice(all).to_vec()));

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.pager.go_to(page));
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        {move || {
            if is_empty.get() {
                return view! {
                    <div class="product-list__empty">
                        <div class="product-list__empty-title">"Товары не найдены"</div>
                        <div class="product-list__empty-hint">"Попробуйте изменить условия фильтра"</div>
                    </div>
                }
                .into_any();
            }

            view! {
                <div class="product-list">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label=SortField::Name.display_name()
                                    field=SortField::Name
                                    current_sort=sort_option
                                    on_sort=on_sort
                                    min_width=240.0
                                />
                                <TableHeaderCell resizable=false min_width=140.0>
                                    "Категория"
                                </TableHeaderCell>
                                <SortableHeaderCell
                                    label=SortField::Price.display_name()
                                    field=SortField::Price
                                    current_sort=sort_option
                                    on_sort=on_sort
                                    min_width=110.0
                                    align="right"
                                />
                                <TableHeaderCell resizable=false min_width=130.0>
                                    "Наличие"
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=page_items
                                key=|item| item.id
                                children=move |item: Item| {
                                    let stock_class = if item.in_stock {
                                        "badge badge--success"
                                    } else {
                                        "badge badge--neutral"
                                    };
                                    let stock_label = item.stock_label();
                                    let name = item.name;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&name, &search_term.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.category}</TableCellLayout>
                                            </TableCell>
                                            <TableCellPrice value=item.price />
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=stock_class>{stock_label}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    {move || {
                        if !state.with(|s| s.pager.shows_controls()) {
                            return view! { <></> }.into_any();
                        }
                        view! {
                            <div class="product-list__pagination">
                                <span class="product-list__range">
                                    {move || state.with(|s| s.range_label())}
                                </span>
                                <PaginationControls
                                    current_page=Signal::derive(move || state.with(|s| s.pager.current()))
                                    total_pages=Signal::derive(move || state.with(|s| s.pager.total_pages()))
                                    has_prev=Signal::derive(move || state.with(|s| s.pager.has_prev()))
                                    has_next=Signal::derive(move || state.with(|s| s.pager.has_next()))
                                    on_page_change=on_page_change
                                />
                            </div>
                        }
                        .into_any()
                    }}
                </div>
            }
            .into_any()
        }}
    }
}
