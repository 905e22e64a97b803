use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{ListToolbar, SortableHeaderCell};
use crate::shared::list_view::ListViewModel;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a003_supplier::aggregate::Supplier;
use contracts::shared::list_view::ListRecord;
use leptos::prelude::*;
use thaw::*;

const API_PATH: &str = "/api/suppliers/list";
const TABLE_ID: &str = "a003-supplier-table";

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let model = ListViewModel::<Supplier>::new(API_PATH);

    Effect::new(move |_| {
        ctx.activation.track();
        model.activate();
    });

    let current_sort_key = Signal::derive(move || model.criteria.with(|c| c.sort_key));
    let sort_ascending = Signal::derive(move || model.direction.get().is_ascending());
    let on_sort = Callback::new(move |key: &'static str| model.toggle_sort(key));

    view! {
        <PageFrame page_id="a003_supplier--list">
            <h1 class="page__title">"Suppliers"</h1>
            // name or e-mail, no scope selector
            <ListToolbar model=model placeholder="Search (name or email)" />

            <div class="table-wrapper">
                <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 650px;">
                    <TableHeader>
                        <TableRow>
                            {Supplier::fields()
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
                            key=|supplier| supplier.id
                            children=move |supplier: Supplier| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{supplier.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{supplier.address}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{supplier.email}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{supplier.phone}</TableCellLayout>
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
