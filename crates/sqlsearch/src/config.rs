//! Serializable search configuration.
//!
//! Lets an application keep search settings in its own config file and turn
//! them into a [`SearchClause`]:
//!
//! ```
//! use sqlsearch::{SearchClause, SearchConfig};
//!
//! let config: SearchConfig = serde_json::from_str(
//!     r#"{ "algorithm": "NAND", "columns": ["name"], "pattern": "HAVE_ANY_QUERY" }"#,
//! )?;
//! let search = SearchClause::from(config);
//! assert_eq!(search.query("x").to_sql(), " WHERE (LOWER(name) NOT LIKE '%x%' )");
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::algorithm::{Algorithm, JoinKeyword, MatchKeyword};
use crate::pattern::Pattern;
use crate::search::{SearchClause, SearchClauseBuilder};
use serde::{Deserialize, Serialize};

/// Plain-data form of a [`SearchClause`]. Every field is optional when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// `"OR"`, `"AND"`, `"NAND"` or `"NOR"`; anything else means OR.
    pub algorithm: Algorithm,
    pub columns: Vec<String>,
    /// Empty or missing means column search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_column: Option<String>,
    /// Template name (`"HAVE_ANY_QUERY"`) or literal (`"%query%"`); anything
    /// else means `HAVE_ANY_QUERY`. Missing means `END_WITH_QUERY`.
    pub pattern: Pattern,
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_keyword: Option<MatchKeyword>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_keyword: Option<JoinKeyword>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder pre-filled with this configuration.
    pub fn into_builder(self) -> SearchClauseBuilder {
        let mut builder = SearchClause::builder(self.algorithm)
            .columns(self.columns)
            .pattern(self.pattern)
            .base(self.base);
        if let Some(tag) = self.tag_column {
            builder = builder.tag_column(tag);
        }
        if let Some(keyword) = self.match_keyword {
            builder = builder.match_keyword(keyword);
        }
        if let Some(keyword) = self.join_keyword {
            builder = builder.join_keyword(keyword);
        }
        builder
    }
}

impl SearchClause {
    pub fn from_config(config: SearchConfig) -> Self {
        config.into_builder().build()
    }

    pub fn to_config(&self) -> SearchConfig {
        SearchConfig {
            algorithm: self.algorithm,
            columns: self.columns.clone(),
            tag_column: self.tag_column.clone(),
            pattern: self.pattern,
            base: self.base.clone(),
            match_keyword: self.match_keyword,
            join_keyword: self.join_keyword,
        }
    }
}

impl From<SearchConfig> for SearchClause {
    fn from(config: SearchConfig) -> Self {
        SearchClause::from_config(config)
    }
}
