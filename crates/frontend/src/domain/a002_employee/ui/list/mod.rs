use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{ListToolbar, SortableHeaderCell};
use crate::shared::list_view::ListViewModel;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::shared::list_view::ListRecord;
use leptos::prelude::*;
use thaw::*;

const API_PATH: &str = "/api/employees/list";
const TABLE_ID: &str = "a002-employee-table";

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let model = ListViewModel::<Employee>::new(API_PATH);

    Effect::new(move |_| {
        ctx.activation.track();
        model.activate();
    });

    let current_sort_key = Signal::derive(move || model.criteria.with(|c| c.sort_key));
    let sort_ascending = Signal::derive(move || model.direction.get().is_ascending());
    let on_sort = Callback::new(move |key: &'static str| model.toggle_sort(key));

    view! {
        <PageFrame page_id="a002_employee--list">
            <h1 class="page__title">"Employees"</h1>
            <ListToolbar model=model show_scope=true placeholder="Filter by term..." />

            <div class="table-wrapper">
                <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 650px;">
                    <TableHeader>
                        <TableRow>
                            {Employee::fields()
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
                            key=|employee| employee.id
                            children=move |employee: Employee| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{employee.first_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{employee.last_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{employee.address}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{employee.email}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{employee.phone}</TableCellLayout>
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
