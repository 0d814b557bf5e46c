//! Wildcard placement templates for `LIKE` patterns.

use crate::error::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder token inside a template that is replaced by the search term.
pub const PLACEHOLDER: &str = "query";

/// Where the `%` / `_` wildcards go relative to the search term.
///
/// Each variant corresponds to a literal template containing [`PLACEHOLDER`],
/// e.g. [`Pattern::HaveAny`] is `%query%`.
///
/// Serialized as the constant-style name. Deserializing an unrecognised name
/// yields [`Pattern::HaveAny`], the same fallback as [`Pattern::parse_lossy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Pattern {
    /// `query%`: prefix match.
    StartWith,
    /// `%query`: suffix match.
    #[default]
    EndWith,
    /// `%query%`: substring match.
    HaveAny,
    /// `_query%`: exactly one character, then the term, then anything.
    HaveSecond,
    /// `query_%`: the term, exactly one character, then anything.
    StartWith2Length,
    /// `query__%`: the term, exactly two characters, then anything.
    StartWith3Length,
    /// `query%query`: the term at both ends.
    StartEndWith,
}

impl Pattern {
    pub const ALL: [Pattern; 7] = [
        Self::StartWith,
        Self::EndWith,
        Self::HaveAny,
        Self::HaveSecond,
        Self::StartWith2Length,
        Self::StartWith3Length,
        Self::StartEndWith,
    ];

    /// Parse a name or template, falling back to [`Pattern::HaveAny`] (substring
    /// match) for anything unrecognised.
    pub fn parse_lossy(name: &str) -> Self {
        name.parse().unwrap_or(Self::HaveAny)
    }

    /// The constant-style name, e.g. `HAVE_ANY_QUERY`.
    pub fn name(self) -> &'static str {
        match self {
            Self::StartWith => "START_WITH_QUERY",
            Self::EndWith => "END_WITH_QUERY",
            Self::HaveAny => "HAVE_ANY_QUERY",
            Self::HaveSecond => "HAVE_SECOND_QUERY",
            Self::StartWith2Length => "START_WITH_QUERY_2LENGTH",
            Self::StartWith3Length => "START_WITH_QUERY_3LENGTH",
            Self::StartEndWith => "START_END_WITH_QUERY",
        }
    }

    /// The literal template, e.g. `%query%`.
    pub fn template(self) -> &'static str {
        match self {
            Self::StartWith => "query%",
            Self::EndWith => "%query",
            Self::HaveAny => "%query%",
            Self::HaveSecond => "_query%",
            Self::StartWith2Length => "query_%",
            Self::StartWith3Length => "query__%",
            Self::StartEndWith => "query%query",
        }
    }

    /// Substitute `term` into the template.
    ///
    /// ```
    /// use sqlsearch::Pattern;
    ///
    /// assert_eq!(Pattern::HaveSecond.apply("abc"), "_abc%");
    /// assert_eq!(Pattern::StartEndWith.apply("abc"), "abc%abc");
    /// ```
    pub fn apply(self, term: &str) -> String {
        let mut out = String::with_capacity(term.len() * 2 + 2);
        self.write(term, &mut out);
        out
    }

    pub(crate) fn write(self, term: &str, out: &mut String) {
        match self {
            Self::StartWith => {
                out.push_str(term);
                out.push('%');
            }
            Self::EndWith => {
                out.push('%');
                out.push_str(term);
            }
            Self::HaveAny => {
                out.push('%');
                out.push_str(term);
                out.push('%');
            }
            Self::HaveSecond => {
                out.push('_');
                out.push_str(term);
                out.push('%');
            }
            Self::StartWith2Length => {
                out.push_str(term);
                out.push_str("_%");
            }
            Self::StartWith3Length => {
                out.push_str(term);
                out.push_str("__%");
            }
            Self::StartEndWith => {
                out.push_str(term);
                out.push('%');
                out.push_str(term);
            }
        }
    }
}

/// Accepts either the constant-style name (`HAVE_ANY_QUERY`) or the literal
/// template (`%query%`).
impl FromStr for Pattern {
    type Err = SearchError;

    fn from_str(s: &str) -> SearchResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s) || p.template() == s)
            .ok_or_else(|| SearchError::unknown_pattern(s))
    }
}

impl From<String> for Pattern {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.name().to_string()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitution_table() {
        let expected = [
            (Pattern::StartWith, "abc%"),
            (Pattern::EndWith, "%abc"),
            (Pattern::HaveAny, "%abc%"),
            (Pattern::HaveSecond, "_abc%"),
            (Pattern::StartWith2Length, "abc_%"),
            (Pattern::StartWith3Length, "abc__%"),
            (Pattern::StartEndWith, "abc%abc"),
        ];
        for (pattern, want) in expected {
            assert_eq!(pattern.apply("abc"), want, "{pattern}");
        }
    }

    #[test]
    fn apply_matches_template_replacement() {
        for pattern in Pattern::ALL {
            assert_eq!(
                pattern.apply("xy"),
                pattern.template().replace(PLACEHOLDER, "xy")
            );
        }
    }

    #[test]
    fn default_is_end_with() {
        assert_eq!(Pattern::default(), Pattern::EndWith);
    }

    #[test]
    fn parse_by_name_or_template() {
        assert_eq!(
            "HAVE_ANY_QUERY".parse::<Pattern>().unwrap(),
            Pattern::HaveAny
        );
        assert_eq!("query__%".parse::<Pattern>().unwrap(), Pattern::StartWith3Length);
        assert_eq!(
            "start_end_with_query".parse::<Pattern>().unwrap(),
            Pattern::StartEndWith
        );
        assert!("%%query".parse::<Pattern>().is_err());
    }

    #[test]
    fn lossy_parse_falls_back_to_have_any() {
        assert_eq!(Pattern::parse_lossy("ANYWHERE"), Pattern::HaveAny);
        assert_eq!(Pattern::parse_lossy(""), Pattern::HaveAny);
        assert_eq!(Pattern::parse_lossy("%query"), Pattern::EndWith);
        assert_eq!(Pattern::parse_lossy("START_WITH_QUERY"), Pattern::StartWith);
    }
}
