use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_employee::ui::list::EmployeeList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::ShellHeader;
use crate::layout::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <Router>
            <ShellHeader />
            <main class="app-main">
                <Routes fallback=|| view! { <p class="page">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/customers") view=CustomerList />
                    <Route path=path!("/employees") view=EmployeeList />
                    <Route path=path!("/suppliers") view=SupplierList />
                </Routes>
            </main>
        </Router>
    }
}
