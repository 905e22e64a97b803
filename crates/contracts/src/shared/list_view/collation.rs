use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

thread_local! {
    static COLLATOR: Option<Collator> = build_collator();
}

// Root locale, secondary strength: accents are significant, case is not.
fn build_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    Collator::try_new(&Default::default(), options).ok()
}

/// Case-insensitive, locale-aware comparison of two display values.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(compare_text("Alfa", "alfa"), Ordering::Equal);
        assert_eq!(compare_text("BETA", "alfa"), Ordering::Greater);
    }

    #[test]
    fn test_accented_letters_sort_with_their_base() {
        assert_eq!(compare_text("Élan", "Zeta"), Ordering::Less);
        assert_eq!(compare_text("Alfa", "Élan"), Ordering::Less);
        assert_eq!(compare_text("città", "citta"), Ordering::Greater);
        assert_eq!(compare_text("Città", "cittb"), Ordering::Less);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(compare_text("", "a"), Ordering::Less);
    }
}
