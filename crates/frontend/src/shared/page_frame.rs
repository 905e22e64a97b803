use leptos::prelude::*;

/// Root wrapper of a routed page.
///
/// Sets `id` (`"{entity}--list"`) and the `page` class on the root element.
#[component]
pub fn PageFrame(
    /// HTML id, e.g. `"a001_customer--list"`.
    page_id: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page">
            {children()}
        </div>
    }
}
