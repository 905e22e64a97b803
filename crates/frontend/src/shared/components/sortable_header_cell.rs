//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Name"
//!     sort_key="name"
//!     current_sort_key=Signal::derive(move || model.criteria.with(|c| c.sort_key))
//!     sort_ascending=Signal::derive(move || model.direction.get().is_ascending())
//!     on_sort=Callback::new(move |key| model.toggle_sort(key))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка: подпись, индикатор (▲ ▼ ⇅), клик переключает сортировку
#[component]
pub fn SortableHeaderCell(
    label: &'static str,
    /// Ключ поля, по которому сортирует колонка
    sort_key: &'static str,
    #[prop(into)] current_sort_key: Signal<&'static str>,
    #[prop(into)] sort_ascending: Signal<bool>,
    on_sort: Callback<&'static str>,
    #[prop(optional, default = 110.0)] min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_key)
            >
                {label}
                <span class=move || get_sort_class(current_sort_key.get(), sort_key)>
                    {move || {
                        get_sort_indicator(current_sort_key.get(), sort_key, sort_ascending.get())
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
