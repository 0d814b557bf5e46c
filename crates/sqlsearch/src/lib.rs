//! # sqlsearch
//!
//! Turn a free-text search phrase into a SQL `WHERE` / `AND` fragment.
//!
//! ## Features
//!
//! - **Pattern search**: `LOWER(col) LIKE '%term'` across any number of columns
//! - **Tag search**: `FIND_IN_SET('term', tags)` against a comma-delimited column
//! - **Four algorithms**: OR, AND, NAND (`NOT LIKE` + `AND`), NOR (`NOT LIKE` + `OR`)
//! - **Seven wildcard templates**: prefix, suffix, substring and fixed-width variants
//! - **Placeholders on demand**: render `$n` / `?` with a parameter list instead of literals
//!
//! The crate only builds strings. Executing them is left to the caller's database layer.
//!
//! ## Usage
//!
//! ```
//! use sqlsearch::{Algorithm, Pattern, SearchClause};
//!
//! let search = SearchClause::builder(Algorithm::Or)
//!     .columns(["name", "email"])
//!     .pattern(Pattern::HaveAny)
//!     .base("SELECT * FROM users")
//!     .build();
//!
//! assert_eq!(
//!     search.query("Bob").to_sql(),
//!     "SELECT * FROM users AND (LOWER(name) LIKE '%bob%' OR LOWER(email) LIKE '%bob%' )"
//! );
//! ```
//!
//! Inline literals are only HTML-escaped, which is not injection-proof. Prefer
//! [`SearchQuery::to_bound`] when the driver supports parameter binding.

pub mod algorithm;
pub mod bind;
pub mod config;
pub mod error;
pub mod pattern;
pub mod prelude;
pub mod search;
pub mod term;

mod trace;

pub use algorithm::{Algorithm, JoinKeyword, MatchKeyword};
pub use bind::{BoundClause, Placeholder};
pub use config::SearchConfig;
pub use error::{SearchError, SearchResult};
pub use pattern::Pattern;
pub use search::{SearchClause, SearchClauseBuilder, SearchQuery, SearchTarget};
pub use term::{Terms, normalize};
