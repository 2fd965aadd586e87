use super::filter::ProductFilter;
use super::hook::{use_products_filter, UseProductsFilter};
use super::list::ProductList;
use crate::domain::a001_catalog_item::loader::bundled_items;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;

/// Страница каталога: фильтры и таблица товаров
#[component]
pub fn CatalogPage() -> impl IntoView {
    match bundled_items().and_then(use_products_filter) {
        Ok(filter) => view! { <CatalogView filter=filter /> }.into_any(),
        Err(e) => {
            log::error!("Failed to load catalog: {}", e);
            view! {
                <div class="page">
                    <PageHeader title="Каталог товаров" icon_name="products" />
                    <div class="error">{format!("Не удалось загрузить каталог: {}", e)}</div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn CatalogView(filter: UseProductsFilter) -> impl IntoView {
    let subtitle = Signal::derive(move || {
        let total = filter.total_items.get();
        format!("Товаров: {}", total)
    });

    view! {
        <div class="page">
            <PageHeader title="Каталог товаров" icon_name="products" subtitle=subtitle />
            <div class="page__content">
                <ProductFilter filter=filter />
                <ProductList
                    items=filter.filtered_items
                    page_size=filter.page_size
                    search_term=filter.debounced_search_term
                    sort_option=filter.sort_option
                    on_sort=Callback::new(move |option| filter.update_sort(option))
                />
            </div>
        </div>
    }
}
