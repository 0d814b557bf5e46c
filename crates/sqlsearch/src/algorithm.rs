//! Boolean combination algorithms and the SQL keywords they resolve to.
//!
//! An [`Algorithm`] decides two things when several predicates are combined:
//! the match keyword placed between a column and its pattern, and the join
//! keyword placed between predicates.
//!
//! | Algorithm | Match      | Join  |
//! |-----------|------------|-------|
//! | `OR`      | `LIKE`     | `OR`  |
//! | `AND`     | `LIKE`     | `AND` |
//! | `NAND`    | `NOT LIKE` | `AND` |
//! | `NOR`     | `NOT LIKE` | `OR`  |

use crate::error::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Boolean combination mode for a search.
///
/// Deserializing an unrecognised name yields [`Algorithm::Or`], the same
/// fallback as [`Algorithm::parse_lossy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Algorithm {
    /// Any predicate matches.
    #[default]
    Or,
    /// All predicates match.
    And,
    /// No predicate matches (`NOT LIKE` joined by `AND`).
    Nand,
    /// At least one predicate does not match (`NOT LIKE` joined by `OR`).
    Nor,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 4] = [Self::Or, Self::And, Self::Nand, Self::Nor];

    /// Parse an algorithm name, falling back to [`Algorithm::Or`] for anything
    /// unrecognised.
    pub fn parse_lossy(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// The keyword used between a column and its pattern.
    pub fn match_keyword(self) -> MatchKeyword {
        match self {
            Self::Or | Self::And => MatchKeyword::Like,
            Self::Nand | Self::Nor => MatchKeyword::NotLike,
        }
    }

    /// The keyword used between predicates.
    pub fn join_keyword(self) -> JoinKeyword {
        match self {
            Self::Or | Self::Nor => JoinKeyword::Or,
            Self::And | Self::Nand => JoinKeyword::And,
        }
    }

    /// Both keywords at once.
    pub fn keywords(self) -> (MatchKeyword, JoinKeyword) {
        (self.match_keyword(), self.join_keyword())
    }

    /// The canonical upper-case name (`"OR"`, `"NAND"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::And => "AND",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> SearchResult<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| SearchError::unknown_algorithm(s))
    }
}

impl From<String> for Algorithm {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.as_str().to_string()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword placed between a column reference and its pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKeyword {
    #[default]
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "NOT LIKE")]
    NotLike,
}

impl MatchKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
        }
    }
}

impl FromStr for MatchKeyword {
    type Err = SearchError;

    fn from_str(s: &str) -> SearchResult<Self> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [w] if w.eq_ignore_ascii_case("LIKE") => Ok(Self::Like),
            [n, w] if n.eq_ignore_ascii_case("NOT") && w.eq_ignore_ascii_case("LIKE") => {
                Ok(Self::NotLike)
            }
            _ => Err(SearchError::unknown_keyword(s)),
        }
    }
}

impl fmt::Display for MatchKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword placed between predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinKeyword {
    #[serde(rename = "AND")]
    And,
    #[default]
    #[serde(rename = "OR")]
    Or,
}

impl JoinKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// The separator used when joining predicates: the keyword padded with spaces.
    pub fn separator(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

impl FromStr for JoinKeyword {
    type Err = SearchError;

    fn from_str(s: &str) -> SearchResult<Self> {
        match s.trim() {
            w if w.eq_ignore_ascii_case("AND") => Ok(Self::And),
            w if w.eq_ignore_ascii_case("OR") => Ok(Self::Or),
            _ => Err(SearchError::unknown_keyword(s)),
        }
    }
}

impl fmt::Display for JoinKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table() {
        assert_eq!(
            Algorithm::Or.keywords(),
            (MatchKeyword::Like, JoinKeyword::Or)
        );
        assert_eq!(
            Algorithm::And.keywords(),
            (MatchKeyword::Like, JoinKeyword::And)
        );
        assert_eq!(
            Algorithm::Nand.keywords(),
            (MatchKeyword::NotLike, JoinKeyword::And)
        );
        assert_eq!(
            Algorithm::Nor.keywords(),
            (MatchKeyword::NotLike, JoinKeyword::Or)
        );
    }

    #[test]
    fn default_is_or() {
        assert_eq!(Algorithm::default(), Algorithm::Or);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("nand".parse::<Algorithm>().unwrap(), Algorithm::Nand);
        assert_eq!(" Nor ".parse::<Algorithm>().unwrap(), Algorithm::Nor);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "XOR".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SearchError::UnknownAlgorithm("XOR".to_string()));
    }

    #[test]
    fn lossy_parse_falls_back_to_or() {
        assert_eq!(Algorithm::parse_lossy("XOR"), Algorithm::Or);
        assert_eq!(Algorithm::parse_lossy(""), Algorithm::Or);
        assert_eq!(Algorithm::parse_lossy("AND"), Algorithm::And);
    }

    #[test]
    fn match_keyword_parse() {
        assert_eq!("like".parse::<MatchKeyword>().unwrap(), MatchKeyword::Like);
        assert_eq!(
            "NOT   LIKE".parse::<MatchKeyword>().unwrap(),
            MatchKeyword::NotLike
        );
        assert!("ILIKE".parse::<MatchKeyword>().is_err());
        assert!("NOT".parse::<MatchKeyword>().is_err());
    }

    #[test]
    fn join_keyword_separator() {
        assert_eq!(JoinKeyword::And.separator(), " AND ");
        assert_eq!(JoinKeyword::Or.separator(), " OR ");
        assert!("XOR".parse::<JoinKeyword>().is_err());
    }
}
