//! Caller-owned trigger for deciding when a search should run.
//!
//! An interactive front end re-reads its inputs on every refresh. Instead of
//! comparing against a hidden "previous query" global, the caller owns a
//! [`QueryState`] and moves it only on explicit user actions: submitting a
//! query or pressing "search" again.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    /// Nothing to run; the last executed query is still current.
    #[default]
    Idle,
    /// A search is pending for a query that has not been executed yet.
    QueryChanged,
}

#[derive(Debug, Clone, Default)]
pub struct QueryState {
    phase: QueryPhase,
    pending: Option<String>,
    last_executed: Option<String>,
}

impl QueryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> QueryPhase {
        self.phase
    }

    #[must_use]
    pub fn last_executed(&self) -> Option<&str> {
        self.last_executed.as_deref()
    }

    /// Records a query typed by the user.
    ///
    /// Moves to [`QueryPhase::QueryChanged`] when the trimmed query differs
    /// from the last executed one, back to [`QueryPhase::Idle`] when it
    /// matches again. Blank input leaves the state untouched.
    pub fn submit(&mut self, query: &str) -> QueryPhase {
        let query = query.trim();
        if query.is_empty() {
            return self.phase;
        }

        if self.last_executed.as_deref() == Some(query) {
            self.pending = None;
            self.phase = QueryPhase::Idle;
        } else {
            self.pending = Some(query.to_owned());
            self.phase = QueryPhase::QueryChanged;
        }
        self.phase
    }

    /// Requests a search for `query` even if it was the last one executed.
    pub fn force(&mut self, query: &str) -> QueryPhase {
        let query = query.trim();
        if query.is_empty() {
            return self.phase;
        }
        self.pending = Some(query.to_owned());
        self.phase = QueryPhase::QueryChanged;
        self.phase
    }

    /// Takes the pending query, if any, and returns to [`QueryPhase::Idle`].
    ///
    /// The returned query becomes the last executed one.
    pub fn take_pending(&mut self) -> Option<String> {
        if self.phase != QueryPhase::QueryChanged {
            return None;
        }
        self.phase = QueryPhase::Idle;
        let query = self.pending.take()?;
        self.last_executed = Some(query.clone());
        Some(query)
    }
}
