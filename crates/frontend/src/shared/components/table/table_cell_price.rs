//! Компонент ячейки таблицы для цены
//!
//! # Примеры
//!
//! ```ignore
//! <TableCellPrice value=item.price />
//! ```

use super::number_format::format_price;
use leptos::prelude::*;
use thaw::*;

/// Ячейка с ценой: разделитель тысяч, знак валюты, выравнивание вправо
#[component]
pub fn TableCellPrice(
    /// Цена
    #[prop(into)]
    value: Signal<f64>,
) -> impl IntoView {
    view! {
        <TableCell class="text-right">
            <span>{move || format_price(value.get())}</span>
        </TableCell>
    }
}
