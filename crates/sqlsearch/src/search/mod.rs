//! Search clause construction.
//!
//! A [`SearchClause`] is configured once through [`SearchClauseBuilder`] and then
//! turned into SQL for any number of phrases:
//!
//! ```
//! use sqlsearch::{Algorithm, Pattern, SearchClause};
//!
//! let search = SearchClause::builder(Algorithm::And)
//!     .columns(["title", "body"])
//!     .pattern(Pattern::HaveAny)
//!     .base("SELECT * FROM posts")
//!     .build();
//!
//! let sql = search.query("Rust SQL").split().to_sql();
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM posts AND (LOWER(title) LIKE '%rust%' AND LOWER(body) LIKE '%rust%' \
//!      AND LOWER(title) LIKE '%sql%' AND LOWER(body) LIKE '%sql%' )"
//! );
//! ```

use crate::algorithm::{Algorithm, JoinKeyword, MatchKeyword};
use crate::bind::{BoundClause, Placeholder};
use crate::error::{SearchError, SearchResult};
use crate::pattern::Pattern;
use crate::term::Terms;
use crate::trace;
use std::fmt;

/// What a clause matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget<'a> {
    /// `FIND_IN_SET` membership on a comma-delimited tag column.
    Tag(&'a str),
    /// Pattern match over each column.
    Columns(&'a [String]),
}

/// Immutable search configuration.
///
/// Cheap to clone and safe to share; every phrase gets its own [`SearchQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchClause {
    pub(crate) algorithm: Algorithm,
    pub(crate) base: String,
    pub(crate) columns: Vec<String>,
    pub(crate) tag_column: Option<String>,
    pub(crate) pattern: Pattern,
    pub(crate) match_keyword: Option<MatchKeyword>,
    pub(crate) join_keyword: Option<JoinKeyword>,
}

impl SearchClause {
    /// Start configuring a clause for `algorithm`.
    pub fn builder(algorithm: Algorithm) -> SearchClauseBuilder {
        SearchClauseBuilder::new(algorithm)
    }

    /// A clause with no columns, no base and the default pattern.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// The configured algorithm, before keyword overrides.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The SQL the condition is appended to; empty when there is none.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Columns searched when no tag column is set.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The `FIND_IN_SET` column, if any.
    pub fn tag_column(&self) -> Option<&str> {
        self.tag_column.as_deref()
    }

    /// Wildcard placement for column predicates.
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// The effective match and join keywords.
    ///
    /// Explicit overrides win; otherwise both come from the algorithm.
    pub fn keywords(&self) -> (MatchKeyword, JoinKeyword) {
        let (matcher, joiner) = self.algorithm.keywords();
        (
            self.match_keyword.unwrap_or(matcher),
            self.join_keyword.unwrap_or(joiner),
        )
    }

    /// The tag column when set, the column list otherwise.
    pub fn target(&self) -> SearchTarget<'_> {
        match self.tag_column.as_deref() {
            Some(tag) => SearchTarget::Tag(tag),
            None => SearchTarget::Columns(&self.columns),
        }
    }

    /// Check that the clause has something to search.
    ///
    /// Rendering never fails, but with no columns and no tag column it produces
    /// empty predicate bodies. Call this once after configuration to catch that.
    pub fn validate(&self) -> SearchResult<()> {
        match self.target() {
            SearchTarget::Columns([]) => Err(SearchError::NoSearchTarget),
            _ => Ok(()),
        }
    }

    /// Normalise `phrase` and pair it with this configuration.
    pub fn query(&self, phrase: &str) -> SearchQuery<'_> {
        SearchQuery {
            clause: self,
            terms: Terms::new(phrase),
        }
    }

    /// Pair already-built terms with this configuration.
    pub fn with_terms(&self, terms: Terms) -> SearchQuery<'_> {
        SearchQuery {
            clause: self,
            terms,
        }
    }

    /// Render `terms` onto the base clause with inline literals.
    ///
    /// Empty terms return the base clause unchanged.
    pub fn render(&self, terms: &Terms) -> String {
        let Some(condition) = self.condition(terms) else {
            return self.base.clone();
        };
        let sql = self.wrap(&condition);
        trace::clause_rendered(self, terms, &sql);
        sql
    }

    /// The bare boolean expression for `terms`, without prefix, parentheses or base.
    ///
    /// `None` when the terms are empty.
    pub fn condition(&self, terms: &Terms) -> Option<String> {
        if terms.is_empty() {
            return None;
        }
        Some(self.expression(terms, |value| quote_literal(&value)))
    }

    /// Render `terms` with placeholders instead of inline literals.
    pub fn render_bound(&self, terms: &Terms, placeholder: Placeholder, offset: usize) -> BoundClause {
        if terms.is_empty() {
            return BoundClause::new(self.base.clone(), Vec::new());
        }
        let mut params = Vec::new();
        let condition = self.expression(terms, |value| {
            params.push(value);
            placeholder.render(offset + params.len())
        });
        let sql = self.wrap(&condition);
        trace::clause_rendered(self, terms, &sql);
        BoundClause::new(sql, params)
    }

    fn wrap(&self, condition: &str) -> String {
        let prefix = if self.base.is_empty() { " WHERE (" } else { " AND (" };
        let mut sql = String::with_capacity(self.base.len() + prefix.len() + condition.len() + 2);
        sql.push_str(&self.base);
        sql.push_str(prefix);
        sql.push_str(condition);
        sql.push_str(" )");
        sql
    }

    /// Build the predicate list. `value` turns a raw value (pattern or tag term)
    /// into its SQL spelling.
    fn expression(&self, terms: &Terms, mut value: impl FnMut(String) -> String) -> String {
        let (matcher, joiner) = self.keywords();
        let separator = joiner.separator();

        let mut blocks: Vec<String> = Vec::with_capacity(terms.len());
        match self.target() {
            SearchTarget::Tag(tag) => {
                for term in terms.iter() {
                    let literal = value(term.to_string());
                    blocks.push(format!("FIND_IN_SET({literal}, {tag})"));
                }
            }
            SearchTarget::Columns(columns) => {
                if columns.is_empty() {
                    trace::empty_target(self);
                }
                for term in terms.iter() {
                    let mut predicates: Vec<String> = Vec::with_capacity(columns.len());
                    for column in columns {
                        let literal = value(self.pattern.apply(term));
                        predicates.push(format!("LOWER({column}) {matcher} {literal}"));
                    }
                    blocks.push(predicates.join(separator));
                }
            }
        }
        blocks.join(separator)
    }
}

fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    out.push_str(value);
    out.push('\'');
    out
}

/// Chainable configuration for [`SearchClause`].
#[derive(Debug, Clone, Default)]
pub struct SearchClauseBuilder {
    inner: SearchClause,
}

impl SearchClauseBuilder {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            inner: SearchClause::new(algorithm),
        }
    }

    /// Replace the algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.inner.algorithm = algorithm;
        self
    }

    /// Replace the column list.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append one column.
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.inner.columns.push(column.into());
        self
    }

    /// Set the SQL the condition is appended to, e.g. `SELECT * FROM t`.
    pub fn base(mut self, sql: impl Into<String>) -> Self {
        self.inner.base = sql.into();
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.inner.pattern = pattern;
        self
    }

    /// Search a comma-delimited tag column with `FIND_IN_SET` instead of the
    /// column list. An empty name switches back to column search.
    pub fn tag_column(mut self, column: impl Into<String>) -> Self {
        let column = column.into();
        self.inner.tag_column = (!column.is_empty()).then_some(column);
        self
    }

    /// Override the keyword the algorithm would pick between column and pattern.
    pub fn match_keyword(mut self, keyword: MatchKeyword) -> Self {
        self.inner.match_keyword = Some(keyword);
        self
    }

    /// Override the keyword the algorithm would pick between predicates.
    pub fn join_keyword(mut self, keyword: JoinKeyword) -> Self {
        self.inner.join_keyword = Some(keyword);
        self
    }

    pub fn build(self) -> SearchClause {
        self.inner
    }

    /// Build, rejecting a configuration with nothing to search.
    pub fn try_build(self) -> SearchResult<SearchClause> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

/// A normalised phrase bound to a [`SearchClause`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery<'a> {
    clause: &'a SearchClause,
    terms: Terms,
}

impl<'a> SearchQuery<'a> {
    pub fn clause(&self) -> &'a SearchClause {
        self.clause
    }

    pub fn terms(&self) -> &Terms {
        &self.terms
    }

    /// Split the phrase on spaces; a phrase without spaces stays a single term.
    pub fn split(mut self) -> Self {
        self.terms = self.terms.split();
        self
    }

    /// The base clause with the search condition appended.
    pub fn to_sql(&self) -> String {
        self.clause.render(&self.terms)
    }

    /// The bare boolean expression; see [`SearchClause::condition`].
    pub fn condition(&self) -> Option<String> {
        self.clause.condition(&self.terms)
    }

    /// Render with placeholders numbered from 1.
    pub fn to_bound(&self, placeholder: Placeholder) -> BoundClause {
        self.clause.render_bound(&self.terms, placeholder, 0)
    }

    /// Render with placeholders numbered after `offset` existing parameters.
    pub fn to_bound_after(&self, placeholder: Placeholder, offset: usize) -> BoundClause {
        self.clause.render_bound(&self.terms, placeholder, offset)
    }
}

impl fmt::Display for SearchQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
