//! Identity normalization for fuzzy author matching.
//!
//! Contributor identities arrive from several sources that share no
//! foreign key (structured CMS users, legacy HTML exports, media
//! filenames), so all matching happens on canonicalized text. The
//! stoplist removes honorifics and name particles so common enough
//! that overlap on them alone says nothing about identity.

/// Minimum length for a token to participate in matching.
pub const MIN_TOKEN_LEN: usize = 3;

/// Name particles and honorifics excluded from significant-token matching.
pub const STOPLIST: &[&str] = &[
    "muhammad", "muhamad", "mohammad", "mohamad", "ahmad", "abdul", "abd",
    "bin", "binti", "siti", "nur", "haji",
];

/// Canonical comparison key: lowercase with all non-alphanumerics removed.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Lowercased tokens split on non-alphanumeric runs, short tokens dropped.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Tokens that actually carry identity: `tokenize` minus the stoplist.
#[must_use]
pub fn significant_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !STOPLIST.contains(&t.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Abdul-Kadir Wahid"), "abdulkadirwahid");
        assert_eq!(normalize("  a_b.c  "), "abc");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("Abdul-Kadir Wahid!");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(
            tokenize("ki ageng-Prawiro 99 x"),
            vec!["ageng".to_string(), "prawiro".to_string()]
        );
    }

    #[test]
    fn test_tokenize_splits_on_nonalnum_runs() {
        assert_eq!(
            tokenize("avatar--kadir__wahid..2023"),
            vec!["avatar", "kadir", "wahid", "2023"]
        );
    }

    #[test]
    fn test_significant_tokens_filter_stoplist() {
        assert_eq!(
            significant_tokens("abdul-kadir-wahid"),
            vec!["kadir".to_string(), "wahid".to_string()]
        );
        assert_eq!(
            significant_tokens("Muhammad Ahmad bin Abdul"),
            Vec::<String>::new()
        );
    }
}
