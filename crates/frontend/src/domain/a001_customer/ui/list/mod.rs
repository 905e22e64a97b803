use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{ListToolbar, SortableHeaderCell};
use crate::shared::list_utils::wrapped_email;
use crate::shared::list_view::ListViewModel;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::shared::list_view::ListRecord;
use leptos::prelude::*;
use thaw::*;

const API_PATH: &str = "/api/customers/list";
const TABLE_ID: &str = "a001-customer-table";

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let model = ListViewModel::<Customer>::new(API_PATH);

    // mount and every re-selection from the header
    Effect::new(move |_| {
        ctx.activation.track();
        model.activate();
    });

    let current_sort_key = Signal::derive(move || model.criteria.with(|c| c.sort_key));
    let sort_ascending = Signal::derive(move || model.direction.get().is_ascending());
    let on_sort = Callback::new(move |key: &'static str| model.toggle_sort(key));

    view! {
        <PageFrame page_id="a001_customer--list">
            <h1 class="page__title">"Customers"</h1>
            <ListToolbar model=model show_scope=true placeholder="Type in..." />

            <div class="table-wrapper">
                <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 900px;">
                    <TableHeader>
                        <TableRow>
                            {Customer::fields()
                                .iter()
                                .map(move |field| {
                                    view! {
                                        <SortableHeaderCell
                                            label=field.label
                                            sort_key=field.key
                                            current_sort_key=current_sort_key
                                            sort_ascending=sort_ascending
                                            on_sort=on_sort
                                        />
                                    }
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || model.rows.get()
                            key=|customer| customer.id
                            children=move |customer: Customer| {
                                let category = customer.category_display();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{customer.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{customer.address}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="table__cell--email">
                                                    {wrapped_email(customer.email)}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{customer.phone}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{customer.iban}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{category}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
