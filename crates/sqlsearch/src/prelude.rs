//! Convenient imports for typical `sqlsearch` usage.
//!
//! ```
//! use sqlsearch::prelude::*;
//! ```

pub use crate::{
    Algorithm, Pattern, Placeholder, SearchClause, SearchConfig, SearchError, SearchQuery,
    SearchResult, Terms,
};
