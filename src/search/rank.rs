//! Ranking pipeline: score, drop non-matches, sort, truncate.
//!
//! Each stage is a plain function over a `Vec` so it can be tested on its own.

use super::scoring::{Candidate, Scorer};
use crate::employee::Employee;
use std::cmp::Reverse;

/// An employee from the current snapshot paired with its relevance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEmployee<'a> {
    pub employee: &'a Employee,
    pub score: u32,
}

/// Score every active employee, preserving snapshot order.
pub fn score_all<'a, S: AsRef<str>>(
    employees: &'a [Employee],
    terms: &[S],
    scorer: &Scorer,
) -> Vec<ScoredEmployee<'a>> {
    employees
        .iter()
        .filter(|employee| employee.is_active)
        .map(|employee| ScoredEmployee {
            employee,
            score: scorer.score(&Candidate::new(employee), terms),
        })
        .collect()
}

/// Drop employees that matched nothing.
pub fn retain_positive(mut scored: Vec<ScoredEmployee<'_>>) -> Vec<ScoredEmployee<'_>> {
    scored.retain(|entry| entry.score > 0);
    scored
}

/// Highest score first. Stable: equal scores keep snapshot order.
pub fn sort_descending(mut scored: Vec<ScoredEmployee<'_>>) -> Vec<ScoredEmployee<'_>> {
    scored.sort_by_key(|entry| Reverse(entry.score));
    scored
}

pub fn truncate(mut scored: Vec<ScoredEmployee<'_>>, limit: usize) -> Vec<ScoredEmployee<'_>> {
    scored.truncate(limit);
    scored
}

/// Top `limit` employees for `terms`, best first.
///
/// Empty `terms` rank nothing.
pub fn rank<'a, S: AsRef<str>>(
    employees: &'a [Employee],
    terms: &[S],
    scorer: &Scorer,
    limit: usize,
) -> Vec<ScoredEmployee<'a>> {
    if terms.is_empty() || limit == 0 {
        return Vec::new();
    }
    truncate(
        sort_descending(retain_positive(score_all(employees, terms, scorer))),
        limit,
    )
}
