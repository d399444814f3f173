//! Employee search over a live store snapshot.

use super::rank::rank;
use super::scoring::{Candidate, ScoreBreakdown, Scorer};
use super::tokenize::tokenize;
use crate::config::SearchConfig;
use crate::employee::Employee;
use crate::store::EmployeeStore;

/// Finds the employees best matching a free-text query.
///
/// Every call reads a fresh snapshot of active employees from the store and
/// scores it from scratch; nothing is cached between calls. Store failures
/// are returned unchanged.
#[derive(Debug)]
pub struct EmployeeSearch<S> {
    store: S,
    config: SearchConfig,
    scorer: Scorer,
}

impl<S: EmployeeStore> EmployeeSearch<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    pub fn with_config(store: S, config: SearchConfig) -> Self {
        let scorer = Scorer::new(config.weights.clone());
        Self {
            store,
            config,
            scorer,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Top matches for `query`, best first.
    ///
    /// `limit` defaults to [`SearchConfig::default_limit`]. A blank query, or one
    /// with no term long enough to keep, returns an empty list without reading
    /// the store.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<Vec<Employee>, S::Error> {
        Ok(self
            .search_scored(query, limit)?
            .into_iter()
            .map(|(employee, _)| employee)
            .collect())
    }

    /// Like [`EmployeeSearch::search`], paired with each employee's score.
    pub fn search_scored(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<(Employee, u32)>, S::Error> {
        let limit = limit.unwrap_or(self.config.default_limit);
        let terms = tokenize(query, self.config.min_term_length);
        if terms.is_empty() {
            tracing::debug!(query, "No usable search terms");
            return Ok(Vec::new());
        }

        let snapshot = self.store.fetch_active_employees()?;
        let ranked = rank(&snapshot, &terms, &self.scorer, limit);

        tracing::debug!(
            terms = terms.len(),
            candidates = snapshot.len(),
            hits = ranked.len(),
            limit,
            "Ranked employees"
        );

        Ok(ranked
            .into_iter()
            .map(|entry| (entry.employee.clone(), entry.score))
            .collect())
    }

    /// Like [`EmployeeSearch::search`], with a per-term breakdown of each score.
    pub fn explain(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<(Employee, ScoreBreakdown)>, S::Error> {
        let terms = tokenize(query, self.config.min_term_length);
        Ok(self
            .search(query, limit)?
            .into_iter()
            .map(|employee| {
                let breakdown = self.scorer.explain(&Candidate::new(&employee), &terms);
                tracing::trace!(id = %employee.id, %breakdown, "Score breakdown");
                (employee, breakdown)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use assert2::{check, let_assert};
    use std::cell::Cell;
    use std::convert::Infallible;

    /// Store that counts how often it is read.
    struct CountingStore {
        inner: MemoryStore,
        reads: Cell<usize>,
    }

    impl EmployeeStore for CountingStore {
        type Error = Infallible;

        fn fetch_active_employees(&self) -> Result<Vec<Employee>, Self::Error> {
            self.reads.set(self.reads.get() + 1);
            self.inner.fetch_active_employees()
        }
    }

    fn counting(names: &[&str]) -> CountingStore {
        CountingStore {
            inner: names
                .iter()
                .enumerate()
                .map(|(i, name)| Employee::new(i.to_string().as_str(), *name))
                .collect(),
            reads: Cell::new(0),
        }
    }

    #[test]
    fn test_blank_query_skips_store() {
        let search = EmployeeSearch::new(counting(&["A B Doe"]));
        let_assert!(Ok(results) = search.search("   ", None));
        check!(results.is_empty());
        let_assert!(Ok(results) = search.search("A B", None));
        check!(results.is_empty());
        check!(search.store().reads.get() == 0);
    }

    #[test]
    fn test_reads_store_every_call() {
        let search = EmployeeSearch::new(counting(&["John Doe"]));
        let _ = search.search("john", None);
        let _ = search.search("john", None);
        check!(search.store().reads.get() == 2);
    }

    #[test]
    fn test_default_limit() {
        let search = EmployeeSearch::new(counting(&["John A", "John B", "John C", "John D"]));
        let_assert!(Ok(results) = search.search("john", None));
        check!(results.len() == 3);
    }

    #[test]
    fn test_config_limit_and_min_length() {
        let config = SearchConfig {
            min_term_length: 1,
            default_limit: 1,
            ..SearchConfig::default()
        };
        let search = EmployeeSearch::with_config(counting(&["J Doe", "J Roe"]), config);
        let_assert!(Ok(results) = search.search_scored("j", None));
        check!(results.len() == 1);
        check!(results[0].0.full_name == "J Doe");
    }

    #[test]
    fn test_explain_totals_match_scores() {
        let search = EmployeeSearch::new(counting(&["John Doe", "Johnny Doeson"]));
        let_assert!(Ok(scored) = search.search_scored("john doe", Some(5)));
        let_assert!(Ok(explained) = search.explain("john doe", Some(5)));

        check!(scored.len() == explained.len());
        for ((a, score), (b, breakdown)) in scored.iter().zip(&explained) {
            check!(a == b);
            check!(*score == breakdown.total());
        }
    }
}
