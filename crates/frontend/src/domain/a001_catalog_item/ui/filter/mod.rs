use super::hook::UseProductsFilter;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::table::format_price;
use crate::shared::icons::icon;
use contracts::domain::a001_catalog_item::{SortOption, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;
use thaw::*;

/// Значение числового поля цены. Пустое поле означает 0.
pub fn parse_price_input(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Панель фильтров каталога
#[component]
pub fn ProductFilter(filter: UseProductsFilter) -> impl IntoView {
    let is_expanded = RwSignal::new(true);

    let search_term = move || filter.filters.with(|f| f.search_term.clone());
    let min_price = move || filter.filters.with(|f| f.price_range.min);
    let max_price = move || filter.filters.with(|f| f.price_range.max);

    let filter_content = move || {
        view! {
            <div class="product-filter">
                // Поиск
                <div class="product-filter__field">
                    <label class="product-filter__label">"Поиск по названию"</label>
                    <div class="product-filter__search">
                        {icon("search")}
                        <input
                            type="text"
                            class="product-filter__input"
                            placeholder="Введите название товара..."
                            prop:value=search_term
                            on:input=move |ev| filter.update_search_term(event_target_value(&ev))
                        />
                        {move || if search_term().is_empty() {
                            view! { <></> }.into_any()
                        } else {
                            view! {
                                <button
                                    class="product-filter__clear"
                                    title="Очистить"
                                    on:click=move |_| filter.update_search_term(String::new())
                                >
                                    {icon("x")}
                                </button>
                            }.into_any()
                        }}
                    </div>
                </div>

                // Категории
                <div class="product-filter__field">
                    <label class="product-filter__label">"Категории"</label>
                    <div class="product-filter__categories">
                        <For
                            each=move || filter.available_categories.get()
                            key=|category| category.clone()
                            children=move |category: String| {
                                let checked_category = category.clone();
                                let toggled_category = category.clone();
                                view! {
                                    <label class="product-filter__chip">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                filter.filters.with(|f| f.is_category_selected(&checked_category))
                                            }
                                            on:change=move |_| filter.toggle_category(&toggled_category)
                                        />
                                        <span>{category}</span>
                                    </label>
                                }
                            }
                        />
                    </div>
                </div>

                // Цена
                <div class="product-filter__field">
                    <label class="product-filter__label">"Цена"</label>
                    <div class="product-filter__price">
                        <input
                            type="number"
                            class="product-filter__input"
                            placeholder="от"
                            prop:value=move || min_price().to_string()
                            on:input=move |ev| {
                                if let Some(min) = parse_price_input(&event_target_value(&ev)) {
                                    filter.update_price_range(min, max_price());
                                }
                            }
                        />
                        <span>"–"</span>
                        <input
                            type="number"
                            class="product-filter__input"
                            placeholder="до"
                            prop:value=move || max_price().to_string()
                            on:input=move |ev| {
                                if let Some(max) = parse_price_input(&event_target_value(&ev)) {
                                    filter.update_price_range(min_price(), max);
                                }
                            }
                        />
                    </div>
                    <div class="product-filter__hint">
                        {move || {
                            let range = filter.price_range.get();
                            format!("Диапазон: {} – {}", format_price(range.min), format_price(range.max))
                        }}
                    </div>
                </div>

                // Наличие, сортировка, размер страницы
                <div class="product-filter__controls">
                    <label class="product-filter__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || filter.filters.with(|f| f.show_in_stock_only)
                            on:change=move |_| filter.toggle_in_stock_only()
                        />
                        <span>"Только в наличии"</span>
                    </label>

                    <label class="product-filter__label">"Сортировка:"</label>
                    <select
                        class="product-filter__select"
                        prop:value=move || filter.sort_option.get().code()
                        on:change=move |ev| {
                            let code = event_target_value(&ev);
                            match SortOption::from_code(&code) {
                                Ok(option) => filter.update_sort(option),
                                Err(e) => log::warn!("{}", e),
                            }
                        }
                    >
                        {SortOption::all()
                            .into_iter()
                            .map(|option| {
                                let code = option.code();
                                view! {
                                    <option
                                        value=code
                                        selected=move || filter.sort_option.get() == option
                                    >
                                        {option.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <label class="product-filter__label">"На странице:"</label>
                    <select
                        class="product-filter__select"
                        prop:value=move || filter.page_size.get().to_string()
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                filter.update_page_size(size);
                            }
                        }
                    >
                        {PAGE_SIZE_OPTIONS
                            .into_iter()
                            .map(|size| view! {
                                <option
                                    value=size.to_string()
                                    selected=move || filter.page_size.get() == size
                                >
                                    {size}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        }
    };

    let filter_tags = move || {
        let filters = filter.filters.get();
        let mut tags: Vec<AnyView> = Vec::new();

        if !filters.search_term.is_empty() {
            tags.push(view! {
                <FilterTag
                    label=format!("Поиск: {}", filters.search_term)
                    on_remove=Callback::new(move |_| filter.update_search_term(String::new()))
                />
            }.into_any());
        }
        for category in filters.selected_categories {
            let label = category.clone();
            tags.push(view! {
                <FilterTag
                    label=label
                    on_remove=Callback::new(move |_| filter.toggle_category(&category))
                />
            }.into_any());
        }
        if filters.show_in_stock_only {
            tags.push(view! {
                <FilterTag
                    label="В наличии"
                    on_remove=Callback::new(move |_| filter.toggle_in_stock_only())
                />
            }.into_any());
        }

        view! { <>{tags}</> }
    };

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=Signal::derive(move || filter.active_filter_count.get())
            summary=move || view! {
                <span class="filter-panel__summary">
                    "Найдено: " <strong>{move || filter.total_items.get()}</strong>
                </span>
            }
            actions=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| filter.reset_filters()
                >
                    {icon("refresh")}
                    "Сбросить"
                </Button>
            }
            filter_content=filter_content
            filter_tags=filter_tags
        />
    }
}
