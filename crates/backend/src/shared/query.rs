/// Строка поиска из query-параметра; пустая строка означает «без фильтра»
pub fn normalize_search(search: Option<String>) -> Option<String> {
    search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_search() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("   ".to_string())), None);
        assert_eq!(
            normalize_search(Some(" acme ".to_string())),
            Some("acme".to_string())
        );
    }
}
