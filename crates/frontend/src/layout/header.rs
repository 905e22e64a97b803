use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub const DEFAULT_HEADER_COLOR: &str = "#1976d2";

pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        path: "/suppliers",
        label: "Suppliers",
        color: "#fbbd23",
    },
    NavItem {
        path: "/customers",
        label: "Customers",
        color: "#9c27b0",
    },
    NavItem {
        path: "/employees",
        label: "Employees",
        color: "#26cf7a",
    },
];

/// Цвет шапки для текущего пути
pub fn header_color(pathname: &str) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|item| pathname.contains(item.path))
        .map(|item| item.color)
        .unwrap_or(DEFAULT_HEADER_COLOR)
}

pub fn nav_link_class(pathname: &str, path: &str) -> &'static str {
    if pathname == path {
        "shell-header__link shell-header__link--active"
    } else {
        "shell-header__link"
    }
}

#[component]
pub fn ShellHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let pathname = use_location().pathname;

    // Переход на другую страницу пересоздает ее; сброс нужен только при клике на открытую
    let on_nav = move |path: &'static str| {
        if pathname.get_untracked() == path {
            ctx.reactivate();
        }
    };

    view! {
        <header
            class="shell-header"
            style=move || format!("background-color: {};", header_color(&pathname.get()))
        >
            <a href="/" class="shell-header__home" on:click=move |_| on_nav("/")>
                "Business Data Browser"
            </a>
            <nav class="shell-header__nav">
                {NAV_ITEMS
                    .iter()
                    .map(move |item| {
                        let path = item.path;
                        view! {
                            <a
                                href=path
                                class=move || nav_link_class(&pathname.get(), path)
                                on:click=move |_| on_nav(path)
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
