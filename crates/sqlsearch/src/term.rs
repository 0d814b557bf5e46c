//! Search terms: normalisation and splitting.

use std::borrow::Cow;

/// Normalise a raw search phrase.
///
/// HTML special characters (`&`, `<`, `>`, `"`, `'`) are entity-escaped and the
/// result is lower-cased. The single quote is spelled as the decimal reference
/// `&#039;`, not `&#x27;`, so existing stored search strings keep matching. This
/// keeps quotes out of the inline literal but is not a substitute for parameter
/// binding; see
/// [`SearchQuery::to_bound`](crate::SearchQuery::to_bound).
pub fn normalize(phrase: &str) -> String {
    let escaped: Cow<'_, str> = html_escape::encode_quoted_attribute(phrase);
    let escaped = if escaped.contains(HEX_APOSTROPHE) {
        Cow::Owned(escaped.replace(HEX_APOSTROPHE, DECIMAL_APOSTROPHE))
    } else {
        escaped
    };
    escaped.to_lowercase()
}

const HEX_APOSTROPHE: &str = "&#x27;";
const DECIMAL_APOSTROPHE: &str = "&#039;";

/// A normalised search phrase, either whole or split into terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terms {
    /// The phrase as one term.
    Single(String),
    /// The phrase split on spaces, in original order.
    Multiple(Vec<String>),
}

impl Terms {
    /// Normalise `phrase` into a single term.
    pub fn new(phrase: &str) -> Self {
        Terms::Single(normalize(phrase))
    }

    /// Split a single term on every space.
    ///
    /// A term without a space is left as [`Terms::Single`]. Consecutive spaces
    /// produce empty terms; they are kept so the term count always equals the
    /// number of spaces plus one. Already split terms are returned unchanged.
    pub fn split(self) -> Self {
        match self {
            Terms::Single(term) if term.contains(' ') => {
                Terms::Multiple(term.split(' ').map(str::to_string).collect())
            }
            other => other,
        }
    }

    /// True for an empty single term or an empty list; such terms render nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Terms::Single(term) => term.is_empty(),
            Terms::Multiple(terms) => terms.is_empty(),
        }
    }

    /// Number of terms (a single term counts as one, even when empty).
    pub fn len(&self) -> usize {
        match self {
            Terms::Single(_) => 1,
            Terms::Multiple(terms) => terms.len(),
        }
    }

    /// Iterate the terms in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Terms::Single(term) => std::slice::from_ref(term),
            Terms::Multiple(terms) => terms,
        };
        slice.iter().map(String::as_str)
    }

    /// Materialise the terms as a list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Terms::Single(term) => vec![term],
            Terms::Multiple(terms) => terms,
        }
    }
}

impl From<&str> for Terms {
    fn from(phrase: &str) -> Self {
        Terms::new(phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("HeLLo World"), "hello world");
    }

    #[test]
    fn normalize_escapes_html() {
        let out = normalize("a<b>&\"c'");
        assert!(out.starts_with("a&lt;b&gt;&amp;&quot;c"));
        assert!(!out.contains('\''));
        assert!(!out.contains('"'));
    }

    #[test]
    fn normalize_apostrophe_is_decimal_entity() {
        assert_eq!(normalize("O'Brien"), "o&#039;brien");
        assert_eq!(normalize("it's 'quoted'"), "it&#039;s &#039;quoted&#039;");
    }

    #[test]
    fn split_without_space_is_noop() {
        let terms = Terms::new("abc").split();
        assert_eq!(terms, Terms::Single("abc".to_string()));
        assert_eq!(terms.into_vec(), vec!["abc".to_string()]);
    }

    #[test]
    fn split_preserves_order() {
        let terms = Terms::new("Red Green Blue").split();
        assert_eq!(
            terms,
            Terms::Multiple(vec!["red".into(), "green".into(), "blue".into()])
        );
        assert_eq!(terms.len(), 3);
    }

    #[test]
    fn split_keeps_empty_tokens() {
        let terms = Terms::new("a  b").split();
        assert_eq!(terms.into_vec(), vec!["a", "", "b"]);
    }

    #[test]
    fn split_twice_is_stable() {
        let once = Terms::new("x y").split();
        assert_eq!(once.clone().split(), once);
    }

    #[test]
    fn emptiness() {
        assert!(Terms::new("").is_empty());
        assert!(Terms::Multiple(Vec::new()).is_empty());
        assert!(!Terms::new(" ").split().is_empty());
    }
}
