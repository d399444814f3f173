//! Relevance scoring of one employee against a list of search terms.
//!
//! Each term is scored by the first [`MatchRule`] that fires, in priority order:
//! - 100: full name or one of its words equals the term
//! - 80: full name or one of its words starts with the term
//! - 60: full name or email contains the term
//! - 10..=30: a name word is within a small edit distance of the term
//!
//! Per-term scores are summed, then a bonus is added for every term beyond the
//! first that appears anywhere in the name or email.

use super::fuzzy::fuzzy_score;
use crate::employee::Employee;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Points and thresholds used by the [`Scorer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Full name or a name word equals the term.
    pub exact: u32,
    /// Full name or a name word starts with the term.
    pub prefix: u32,
    /// Full name or email contains the term.
    pub contains: u32,
    /// Fuzzy points before the per-edit deduction.
    pub fuzzy_base: u32,
    /// Points deducted per edit.
    pub fuzzy_step: u32,
    /// Largest edit distance still counted as a fuzzy match.
    pub fuzzy_max_distance: usize,
    /// Words whose length differs from the term by more than this are skipped.
    pub fuzzy_max_length_difference: usize,
    /// Shorter terms never reach the fuzzy tier.
    pub fuzzy_min_term_length: usize,
    /// Bonus per additional term found in the name or email.
    pub multi_term_bonus: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact: 100,
            prefix: 80,
            contains: 60,
            fuzzy_base: 40,
            fuzzy_step: 10,
            fuzzy_max_distance: 3,
            fuzzy_max_length_difference: 3,
            fuzzy_min_term_length: 3,
            multi_term_bonus: 20,
        }
    }
}

impl ScoringWeights {
    /// Points for a fuzzy match at `distance` edits: `fuzzy_base - distance * fuzzy_step`.
    pub fn fuzzy_points(&self, distance: usize) -> u32 {
        let distance = u32::try_from(distance).unwrap_or(u32::MAX);
        self.fuzzy_base
            .saturating_sub(distance.saturating_mul(self.fuzzy_step))
    }
}

/// Lowercased view of an employee, computed once per scoring pass.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub employee: &'a Employee,
    name: String,
    email: String,
}

impl<'a> Candidate<'a> {
    pub fn new(employee: &'a Employee) -> Self {
        Self {
            employee,
            name: employee.full_name.to_lowercase(),
            email: employee.email_or_empty().to_lowercase(),
        }
    }

    /// Lowercased full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased email, `""` when absent.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Name words, split on single spaces.
    ///
    /// Consecutive spaces produce empty words, which only the fuzzy tier can see.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.name.split(' ')
    }

    /// Plain substring presence in name or email.
    fn mentions(&self, term: &str) -> bool {
        self.name.contains(term) || self.email.contains(term)
    }
}

/// One scoring tier. Tiers are tried in order; the first positive score wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
    FullNameExact,
    WordExact,
    NameStartsWith,
    WordStartsWith,
    NameContains,
    EmailContains,
    Fuzzy,
}

impl MatchRule {
    /// Priority order used by [`Scorer::new`].
    pub const DEFAULT_ORDER: [Self; 7] = [
        Self::FullNameExact,
        Self::WordExact,
        Self::NameStartsWith,
        Self::WordStartsWith,
        Self::NameContains,
        Self::EmailContains,
        Self::Fuzzy,
    ];

    /// Points this rule awards `term` against `candidate`, 0 when it does not apply.
    pub fn evaluate(self, candidate: &Candidate<'_>, term: &str, weights: &ScoringWeights) -> u32 {
        let hit = match self {
            Self::FullNameExact => candidate.name() == term,
            Self::WordExact => candidate.words().any(|word| word == term),
            Self::NameStartsWith => candidate.name().starts_with(term),
            Self::WordStartsWith => candidate.words().any(|word| word.starts_with(term)),
            Self::NameContains => candidate.name().contains(term),
            Self::EmailContains => {
                !candidate.email().is_empty() && candidate.email().contains(term)
            }
            Self::Fuzzy => return fuzzy_score(term, candidate.words(), weights),
        };

        if !hit {
            return 0;
        }
        match self {
            Self::FullNameExact | Self::WordExact => weights.exact,
            Self::NameStartsWith | Self::WordStartsWith => weights.prefix,
            Self::NameContains | Self::EmailContains => weights.contains,
            Self::Fuzzy => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::FullNameExact => "name-exact",
            Self::WordExact => "word-exact",
            Self::NameStartsWith => "name-prefix",
            Self::WordStartsWith => "word-prefix",
            Self::NameContains => "name-contains",
            Self::EmailContains => "email-contains",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a single term contributed to a score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatch {
    pub term: String,
    /// Winning rule, `None` when no rule fired.
    pub rule: Option<MatchRule>,
    pub points: u32,
}

/// Itemized score for one employee, for logs and `explain` output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub terms: Vec<TermMatch>,
    /// Terms found as plain substrings of name or email.
    pub mentioned_terms: usize,
    pub bonus: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.terms
            .iter()
            .fold(self.bonus, |total, term| total.saturating_add(term.points))
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match term.rule {
                Some(rule) => write!(f, "{}:{}={}", term.term, rule, term.points)?,
                None => write!(f, "{}:none=0", term.term)?,
            }
        }
        if self.bonus > 0 {
            write!(f, " bonus={}", self.bonus)?;
        }
        Ok(())
    }
}

/// Scores employees against search terms using an ordered list of rules.
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: ScoringWeights,
    rules: Vec<MatchRule>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self::with_rules(weights, MatchRule::DEFAULT_ORDER)
    }

    /// Build a scorer that tries `rules` in the given order.
    pub fn with_rules(weights: ScoringWeights, rules: impl Into<Vec<MatchRule>>) -> Self {
        Self {
            weights,
            rules: rules.into(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    /// First rule awarding `term` a positive score, with its points.
    pub fn term_score(&self, candidate: &Candidate<'_>, term: &str) -> Option<(MatchRule, u32)> {
        self.rules.iter().find_map(|&rule| {
            let points = rule.evaluate(candidate, term, &self.weights);
            (points > 0).then_some((rule, points))
        })
    }

    /// Bonus for queries where several terms appear in the name or email.
    ///
    /// Uses plain substring checks only, independent of the tiered rules: a term
    /// that scored through the fuzzy tier does not count here.
    pub fn multi_term_bonus<S: AsRef<str>>(&self, candidate: &Candidate<'_>, terms: &[S]) -> u32 {
        let mentioned = count_mentions(candidate, terms);
        self.bonus_for(mentioned)
    }

    /// Total relevance of `candidate` for `terms`. Zero means "not a match".
    pub fn score<S: AsRef<str>>(&self, candidate: &Candidate<'_>, terms: &[S]) -> u32 {
        terms
            .iter()
            .filter_map(|term| self.term_score(candidate, term.as_ref()))
            .fold(self.multi_term_bonus(candidate, terms), |total, (_, points)| {
                total.saturating_add(points)
            })
    }

    /// Same as [`Scorer::score`], itemized per term.
    pub fn explain<S: AsRef<str>>(&self, candidate: &Candidate<'_>, terms: &[S]) -> ScoreBreakdown {
        let mentioned_terms = count_mentions(candidate, terms);
        ScoreBreakdown {
            terms: terms
                .iter()
                .map(|term| {
                    let term = term.as_ref();
                    let matched = self.term_score(candidate, term);
                    TermMatch {
                        term: term.to_string(),
                        rule: matched.map(|(rule, _)| rule),
                        points: matched.map_or(0, |(_, points)| points),
                    }
                })
                .collect(),
            mentioned_terms,
            bonus: self.bonus_for(mentioned_terms),
        }
    }

    fn bonus_for(&self, mentioned: usize) -> u32 {
        if mentioned <= 1 {
            return 0;
        }
        let extra = u32::try_from(mentioned - 1).unwrap_or(u32::MAX);
        extra.saturating_mul(self.weights.multi_term_bonus)
    }
}

fn count_mentions<S: AsRef<str>>(candidate: &Candidate<'_>, terms: &[S]) -> usize {
    terms
        .iter()
        .filter(|term| candidate.mentions(term.as_ref()))
        .count()
}
