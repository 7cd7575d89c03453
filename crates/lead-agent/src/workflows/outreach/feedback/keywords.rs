/// Phrase groups that map reviewer comments onto canonical filter keywords.
const KEYWORD_RULES: [(&[&str], &str); 4] = [
    (&["wrong industry", "different industry"], "industry"),
    (&["wrong title", "not decision maker"], "title"),
    (&["wrong location", "different region"], "location"),
    (&["too small", "company size"], "company_size"),
];

const FALLBACK_WORDS: usize = 3;

/// Derive filter keywords from a free-text comment.
///
/// Known phrases win. Otherwise a comment longer than three words contributes its
/// first three words as written.
pub(crate) fn extract_keywords(comments: &str) -> Vec<String> {
    let lowered = comments.to_lowercase();

    let keywords: Vec<String> = KEYWORD_RULES
        .iter()
        .filter(|(phrases, _)| phrases.iter().any(|phrase| lowered.contains(phrase)))
        .map(|(_, keyword)| keyword.to_string())
        .collect();

    if !keywords.is_empty() {
        return keywords;
    }

    let words: Vec<&str> = comments.split_whitespace().collect();
    if words.len() > FALLBACK_WORDS {
        words
            .into_iter()
            .take(FALLBACK_WORDS)
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_phrases_to_keywords() {
        assert_eq!(
            extract_keywords("Wrong industry and the company size is off"),
            vec!["industry".to_string(), "company_size".to_string()]
        );
        assert_eq!(
            extract_keywords("not decision maker"),
            vec!["title".to_string()]
        );
    }

    #[test]
    fn falls_back_to_leading_words() {
        assert_eq!(
            extract_keywords("Mostly sells to Retail buyers"),
            vec!["Mostly".to_string(), "sells".to_string(), "to".to_string()]
        );
    }

    #[test]
    fn short_unmatched_comments_yield_nothing() {
        assert!(extract_keywords("meh not great").is_empty());
        assert!(extract_keywords("").is_empty());
    }
}
