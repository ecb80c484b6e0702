//! Title tokenization and relevance scoring for the memory adapter's
//! search index.

/// Lowercase alphanumeric tokens, split on everything else.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Number of query tokens that hit the title, where a hit is equality
/// or prefix (so "vil" finds "villa"). Zero means no match.
pub(crate) fn relevance(title_tokens: &[String], query_tokens: &[String]) -> usize {
    query_tokens
        .iter()
        .filter(|q| title_tokens.iter().any(|t| t == *q || t.starts_with(q.as_str())))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Modern Beach-front Villa, 3BR!"),
            vec!["modern", "beach", "front", "villa", "3br"]
        );
        assert!(tokenize("  --  ").is_empty());
    }

    #[test]
    fn relevance_counts_matched_query_tokens() {
        let title = tokenize("Modern Beachfront Villa");
        assert_eq!(relevance(&title, &tokenize("villa")), 1);
        assert_eq!(relevance(&title, &tokenize("modern villa")), 2);
        assert_eq!(relevance(&title, &tokenize("cottage")), 0);
    }

    #[test]
    fn prefixes_match() {
        let title = tokenize("Beachfront Villa");
        assert_eq!(relevance(&title, &tokenize("beach")), 1);
        assert_eq!(relevance(&title, &tokenize("vil")), 1);
        // Prefix runs from query to title, not the other way around.
        assert_eq!(relevance(&title, &tokenize("villas")), 0);
    }
}
