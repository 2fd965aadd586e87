//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Цена"
//!     field=SortField::Price
//!     current_sort=filter.sort_option
//!     on_sort=Callback::new(move |field| sort_by(field))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::a001_catalog_item::SortOption;
use contracts::enums::SortField;
use leptos::prelude::*;
use thaw::*;

/// Следующая сортировка при клике по колонке `field`: повторный клик
/// меняет направление, клик по другой колонке сортирует её по возрастанию
pub fn next_sort(current: SortOption, field: SortField) -> SortOption {
    if current.field == field {
        SortOption::new(field, current.direction.toggled())
    } else {
        SortOption::new(field, Default::default())
    }
}

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Показывает индикатор сортировки (▲▼) и по клику передаёт в `on_sort`
/// следующий вариант сортировки (см. `next_sort`).
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле сортировки колонки
    field: SortField,

    /// Текущая сортировка
    #[prop(into)]
    current_sort: Signal<SortOption>,

    /// Callback при клике на заголовок
    on_sort: Callback<SortOption>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let handle_click = move |_| {
        on_sort.run(next_sort(current_sort.get_untracked(), field));
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                {label}
                <span class=move || get_sort_class(current_sort.get(), field)>
                    {move || get_sort_indicator(current_sort.get(), field)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
