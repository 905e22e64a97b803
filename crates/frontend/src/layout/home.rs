use crate::layout::header::NAV_ITEMS;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Business Data Browser"</h1>
            <p style="text-align: center;">
                "Browse, filter and export the customer, employee and supplier registers."
            </p>
            <ul style="display: flex; justify-content: center; gap: 24px; list-style: none; padding: 0;">
                {NAV_ITEMS
                    .iter()
                    .map(|item| view! {
                        <li>
                            <a href=item.path style=format!("color: {};", item.color)>
                                {item.label}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
