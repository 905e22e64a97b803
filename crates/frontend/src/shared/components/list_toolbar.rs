use crate::shared::list_view::{ListItem, ListViewModel};
use contracts::shared::list_view::{PageSize, SearchScope};
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use thaw::*;

/// Search box, optional scope selector, page size selector and XML export.
#[component]
pub fn ListToolbar<R: ListItem>(
    model: ListViewModel<R>,
    /// Show the "Search in" selector.
    #[prop(optional)]
    show_scope: bool,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let scope_select = show_scope.then(|| {
        view! {
            <label>
                "Search in "
                <select on:change=move |ev| model.set_scope(&event_target_value(&ev))>
                    <option
                        value=SearchScope::ANY_FIELD_VALUE
                        prop:selected=move || model.criteria.with(|c| c.scope == SearchScope::AnyField)
                    >
                        "Any field"
                    </option>
                    {R::fields()
                        .iter()
                        .map(move |field| {
                            let key = field.key;
                            view! {
                                <option
                                    value=key
                                    prop:selected=move || {
                                        model.criteria.with(|c| c.scope == SearchScope::Field(key))
                                    }
                                >
                                    {field.label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        }
    });

    view! {
        <div class="page__toolbar">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || model.search_input.get()
                on:input=move |ev| model.search_input.set(event_target_value(&ev))
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        model.apply_filter();
                    }
                }
            />
            <Button appearance=ButtonAppearance::Primary on_click=move |_| model.apply_filter()>
                "Filter"
            </Button>
            {scope_select}
            <label>
                "Records "
                <select on:change=move |ev| model.set_page_size(&event_target_value(&ev))>
                    {PageSize::OPTIONS
                        .into_iter()
                        .map(move |option| {
                            view! {
                                <option
                                    value=option.to_string()
                                    prop:selected=move || model.criteria.with(|c| c.page_size == option)
                                >
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| model.export_xml()>
                "Export XML"
            </Button>
        </div>
    }
}
