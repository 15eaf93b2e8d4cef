//! `MockStore` — an in-memory test double for `ListStore`.
//!
//! It cannot run SQL, but it honours what the assembler puts in the bind
//! list: the search pattern (through a caller-supplied matcher) and the
//! trailing `LIMIT`/`OFFSET` pair.  Every statement it receives is recorded
//! so tests can assert what was issued, and in which order.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use crate::{BindValue, ListStore, Statement};

/// Error returned by a failing `MockStore`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("mock store failure: {0}")]
pub struct MockStoreError(pub String);

/// Which call the mock should fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Count,
    Fetch,
}

/// Decides whether a row matches a (unescaped) search term.
pub type SearchMatcher<R> = fn(&R, &str) -> bool;

pub struct MockStore<R> {
    /// The whole "table", in the order pages are cut from.
    pub rows: Vec<R>,
    pub failure: Option<MockFailure>,
    pub matcher: Option<SearchMatcher<R>>,
    /// All statements seen by this store (in call order).
    pub statements: Arc<Mutex<Vec<Statement>>>,
}

impl<R> MockStore<R> {
    /// A store serving `rows`.
    pub fn with_rows(rows: Vec<R>) -> Self {
        Self {
            rows,
            failure: None,
            matcher: None,
            statements: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A store that fails on the given call.
    pub fn failing(failure: MockFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::with_rows(Vec::new())
        }
    }

    /// Filter rows with `matcher` whenever a search pattern is bound.
    pub fn searching_with(mut self, matcher: SearchMatcher<R>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Snapshot of the statements received so far.
    pub fn issued(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }

    fn record(&self, statement: &Statement) {
        self.statements.lock().unwrap().push(statement.clone());
    }

    fn matching(&self, statement: &Statement) -> Vec<&R> {
        let term = statement.binds.iter().find_map(|bind| match bind {
            BindValue::Text(pattern) => Some(unescape_pattern(pattern)),
            BindValue::Int(_) => None,
        });

        match (term, self.matcher) {
            (Some(term), Some(matcher)) => self.rows.iter().filter(|row| matcher(row, &term)).collect(),
            _ => self.rows.iter().collect(),
        }
    }
}

/// Reverse the assembler's `%term%` escaping.
fn unescape_pattern(pattern: &str) -> String {
    let inner = pattern
        .strip_prefix('%')
        .and_then(|p| p.strip_suffix('%'))
        .unwrap_or(pattern);

    let mut term = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => term.extend(chars.next()),
            other => term.push(other),
        }
    }
    term
}

/// The trailing `(LIMIT, OFFSET)` binds of a page statement.
fn limit_offset(statement: &Statement) -> (usize, usize) {
    match statement.binds.as_slice() {
        [.., BindValue::Int(limit), BindValue::Int(offset)] => {
            (usize::try_from(*limit).unwrap_or(0), usize::try_from(*offset).unwrap_or(0))
        }
        _ => (usize::MAX, 0),
    }
}

#[async_trait]
impl<R> ListStore<R> for MockStore<R>
where
    R: Clone + Send + Sync,
{
    type Error = MockStoreError;

    async fn count(&self, statement: &Statement) -> Result<i64, MockStoreError> {
        self.record(statement);
        if self.failure == Some(MockFailure::Count) {
            return Err(MockStoreError("count failed".into()));
        }
        Ok(self.matching(statement).len() as i64)
    }

    async fn fetch(&self, statement: &Statement) -> Result<Vec<R>, MockStoreError> {
        self.record(statement);
        if self.failure == Some(MockFailure::Fetch) {
            return Err(MockStoreError("fetch failed".into()));
        }
        let (limit, offset) = limit_offset(statement);
        Ok(self
            .matching(statement)
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}
