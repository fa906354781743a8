//! Column-fitting helpers for terminal tables

/// Shorten `s` to at most `max_len` characters, ending in `...` when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Width of the widest label, counted in characters
pub fn label_width<'a>(labels: impl IntoIterator<Item = &'a str>) -> usize {
    labels
        .into_iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
        assert_eq!(truncate("Groceries", 2), "..");
    }

    #[test]
    fn test_label_width() {
        assert_eq!(label_width(["Food", "Café"]), 4);
        assert_eq!(label_width(Vec::<&str>::new()), 0);
    }
}
