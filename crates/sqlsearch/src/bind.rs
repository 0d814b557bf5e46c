//! Placeholder rendering for search clauses.
//!
//! [`SearchQuery::to_sql`](crate::SearchQuery::to_sql) splices terms into the SQL
//! as quoted literals. When the fragment is going to a driver that binds
//! parameters, render it as a [`BoundClause`] instead:
//!
//! ```
//! use sqlsearch::{Algorithm, Placeholder, SearchClause};
//!
//! let search = SearchClause::builder(Algorithm::Or).columns(["name", "email"]).build();
//! let bound = search.query("bob").to_bound(Placeholder::Dollar);
//!
//! assert_eq!(bound.sql(), " WHERE (LOWER(name) LIKE $1 OR LOWER(email) LIKE $2 )");
//! assert_eq!(bound.params(), ["%bob", "%bob"]);
//! ```

use tokio_postgres::types::ToSql;

/// Placeholder style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Numbered Postgres-style placeholders: `$1`, `$2`, ...
    #[default]
    Dollar,
    /// Positional `?` placeholders (MySQL / SQLite).
    Question,
}

impl Placeholder {
    /// Render the placeholder for the 1-based parameter `index`.
    pub fn render(self, index: usize) -> String {
        match self {
            Self::Dollar => format!("${index}"),
            Self::Question => "?".to_string(),
        }
    }
}

/// A rendered clause plus its parameters, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundClause {
    sql: String,
    params: Vec<String>,
}

impl BoundClause {
    pub(crate) fn new(sql: String, params: Vec<String>) -> Self {
        Self { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Number of bound parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Get parameter references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.sql, self.params)
    }
}
