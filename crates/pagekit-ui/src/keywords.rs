//! Search keywords
//!
//! Fixed, ordered keyword list backing the suggestion dropdown.

/// Default keyword list for the site
pub const DEFAULT_KEYWORDS: [&str; 19] = [
    "Home",
    "Tutorials",
    "Library",
    "Coding Ground",
    "Contact",
    "Web Development",
    "Python",
    "Java",
    "Data Science",
    "Machine Learning",
    "JavaScript",
    "PHP",
    "C Programming",
    "SQL",
    "Android",
    "Online Compiler",
    "Interview Questions",
    "Certifications",
    "Projects",
];

/// Ordered keyword store, immutable for the page session
///
/// Duplicates are kept as-is; matching preserves store order.
#[derive(Debug, Clone)]
pub struct KeywordStore {
    entries: Vec<String>,
}

impl KeywordStore {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Entries containing `query` case-insensitively, in store order
    pub fn matching<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(move |k| k.to_lowercase().contains(&needle))
            .map(String::as_str)
    }

    /// All entries
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordStore {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_case_insensitive() {
        let store = KeywordStore::default();
        let matches: Vec<_> = store.matching("java").collect();
        assert_eq!(matches, vec!["Java", "JavaScript"]);
    }

    #[test]
    fn test_matching_preserves_store_order() {
        let store = KeywordStore::default();
        let matches: Vec<_> = store.matching("c").collect();
        // Order follows the list, not match quality
        assert_eq!(matches[0], "Coding Ground");
    }

    #[test]
    fn test_matching_everything_on_empty_query() {
        let store = KeywordStore::default();
        assert_eq!(store.matching("").count(), store.len());
    }

    #[test]
    fn test_duplicates_kept() {
        let store = KeywordStore::new(vec!["Rust".to_string(), "Rust".to_string()]);
        assert_eq!(store.matching("rust").count(), 2);
    }
}
