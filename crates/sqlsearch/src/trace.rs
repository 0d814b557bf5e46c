//! `tracing` events for clause rendering.
//!
//! Enable via the crate feature: `sqlsearch = { features = ["tracing"] }`.
//! Without it these functions compile to nothing.

use crate::search::SearchClause;
use crate::term::Terms;

#[cfg(feature = "tracing")]
pub(crate) fn clause_rendered(clause: &SearchClause, terms: &Terms, sql: &str) {
    tracing::debug!(
        target: "sqlsearch.clause",
        algorithm = %clause.algorithm(),
        pattern = %clause.pattern(),
        tag = clause.tag_column().unwrap_or("-"),
        term_count = terms.len(),
        column_count = clause.columns().len(),
        sql = %sql,
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn clause_rendered(_clause: &SearchClause, _terms: &Terms, _sql: &str) {}

#[cfg(feature = "tracing")]
pub(crate) fn empty_target(clause: &SearchClause) {
    tracing::warn!(
        target: "sqlsearch.clause",
        algorithm = %clause.algorithm(),
        base = %clause.base(),
        "search clause has no columns and no tag column; predicates will be empty",
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn empty_target(_clause: &SearchClause) {}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use crate::{Algorithm, SearchClause};
    use std::sync::{Arc, Mutex};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    /// Records the level and target of every event it sees.
    #[derive(Clone, Default)]
    struct EventLog {
        events: Arc<Mutex<Vec<(Level, String)>>>,
    }

    impl EventLog {
        fn take(&self) -> Vec<(Level, String)> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl Subscriber for EventLog {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            let meta = event.metadata();
            self.events
                .lock()
                .unwrap()
                .push((*meta.level(), meta.target().to_string()));
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
        let log = EventLog::default();
        tracing::subscriber::with_default(log.clone(), f);
        log.take()
    }

    #[test]
    fn empty_target_warns() {
        let events = capture(|| {
            let sql = SearchClause::new(Algorithm::Or).query("x").to_sql();
            assert_eq!(sql, " WHERE ( )");
        });
        assert!(events.contains(&(Level::WARN, "sqlsearch.clause".to_string())));
    }

    #[test]
    fn rendered_clause_is_debug_logged() {
        let events = capture(|| {
            let search = SearchClause::builder(Algorithm::And).column("name").build();
            search.query("x").to_sql();
        });
        assert_eq!(events, vec![(Level::DEBUG, "sqlsearch.clause".to_string())]);
    }

    #[test]
    fn empty_phrase_logs_nothing() {
        let events = capture(|| {
            let search = SearchClause::builder(Algorithm::Or).column("name").build();
            search.query("").to_sql();
        });
        assert!(events.is_empty());
    }
}
