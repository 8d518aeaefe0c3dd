//! Single character tests used by [`satisfy`](crate::core::satisfy).
use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

/// A shareable test on one character.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(char) -> bool + Send + Sync>);

impl Predicate {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(test))
    }

    #[inline]
    pub fn test(&self, c: char) -> bool {
        (self.0)(c)
    }
}

impl Debug for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Predicate")
    }
}

pub fn is(c: char) -> Predicate {
    Predicate::new(move |t| t == c)
}

pub fn negate(predicate: Predicate) -> Predicate {
    Predicate::new(move |c| !predicate.test(c))
}

/// Holds if any of the predicates hold.
pub fn any_of(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |c| predicates.iter().any(|p| p.test(c)))
}

/// Holds if none of the predicates hold.
pub fn none_of(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |c| !predicates.iter().any(|p| p.test(c)))
}

pub fn in_range(low: char, high: char) -> Predicate {
    Predicate::new(move |c| (low..=high).contains(&c))
}

pub fn alphabetic() -> Predicate {
    Predicate::new(|c| c.is_ascii_alphabetic())
}

pub fn numeric() -> Predicate {
    Predicate::new(|c| c.is_ascii_digit())
}

pub fn whitespace_char() -> Predicate {
    Predicate::new(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_predicates() {
        let ident = any_of([alphabetic(), numeric(), is('_')]);
        assert!(ident.test('a') && ident.test('7') && ident.test('_'));
        assert!(!ident.test('-'));

        let text = none_of([is('<'), is('>')]);
        assert!(text.test('a') && !text.test('<') && !text.test('>'));

        let not_quote = negate(is('"'));
        assert!(not_quote.test('x') && !not_quote.test('"'));

        assert!(!any_of([]).test('a'));
        assert!(none_of([]).test('a'));
        assert!(in_range('a', 'f').test('c') && !in_range('a', 'f').test('g'));
    }
}
