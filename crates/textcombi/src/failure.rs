//! Parse failures and grammar construction errors.
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Why a combinator did not match.
/// - `start` is the furthest position reached before matching was abandoned.
/// - `name` describes what was expected there, set by [`named`](crate::core::named).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Failure {
    pub start: usize,
    pub name: Option<String>,
}

impl Failure {
    /// An unlabeled failure.
    pub fn at(start: usize) -> Self {
        Self { start, name: None }
    }

    pub fn named(start: usize, name: impl Into<String>) -> Self {
        Self {
            start,
            name: Some(name.into()),
        }
    }

    /// Attaches `label` unless a more deeply nested parser already named this failure.
    pub fn or_named(mut self, label: &str) -> Self {
        if self.name.is_none() {
            self.name = Some(label.to_owned());
        }
        self
    }

    /// Merges failures from parallel alternatives, only those that got furthest are kept and
    /// their names joined as an alternation.
    pub fn compose_from(failures: impl IntoIterator<Item = Failure>) -> Option<Failure> {
        let failures: Vec<Failure> = failures.into_iter().collect();
        let start = failures.iter().map(|f| f.start).max()?;
        let names: Vec<String> = failures
            .into_iter()
            .filter(|f| f.start == start)
            .filter_map(|f| f.name)
            .collect();
        Some(Failure {
            start,
            name: (!names.is_empty()).then(|| names.join(" | ")),
        })
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "expected {name} at offset {}", self.start),
            None => write!(f, "unexpected input at offset {}", self.start),
        }
    }
}

impl std::error::Error for Failure {}

/// Mistakes made by the grammar author, rather than in the input.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum GrammarError {
    #[error("recursion slot was filled more than once")]
    SlotFilled,
    #[error("recursion slot was used before being filled")]
    SlotUnfilled,
    #[error("recursion slot was dropped while parsers still refer to it")]
    SlotDropped,
}
