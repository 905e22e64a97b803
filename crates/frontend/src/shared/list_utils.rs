/// Утилиты для заголовков и ячеек списков
use leptos::prelude::*;

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора: активная колонка выделяется
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Делит e-mail на часть до `@` и остаток `@domain`
pub fn split_email(email: &str) -> Option<(&str, &str)> {
    email.find('@').map(|at| email.split_at(at))
}

/// Содержимое ячейки e-mail с переносом строки перед `@`
pub fn wrapped_email(email: String) -> AnyView {
    match split_email(&email) {
        Some((user, domain)) => {
            let (user, domain) = (user.to_string(), domain.to_string());
            view! { <span>{user}<br />{domain}</span> }.into_any()
        }
        None => view! { <span>{email}</span> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "email", false), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert!(get_sort_class("name", "name").contains("--active"));
        assert_eq!(get_sort_class("name", "phone"), "table__sort-indicator");
    }

    #[test]
    fn test_split_email() {
        assert_eq!(
            split_email("mario.rossi@example.it"),
            Some(("mario.rossi", "@example.it"))
        );
        assert_eq!(split_email("a@b@c"), Some(("a", "@b@c")));
        assert_eq!(split_email("no-address"), None);
    }
}
