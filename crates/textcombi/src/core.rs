//! The core combinators, from which all others can be built.
//! - Each has a type, a construction function returning a [Parser] and a [Combinator] implementation.
//! - Failures are either a child's failure untouched, or a new failure at a position a child reached.

use super::*;
use crate::{
    predicate::Predicate,
    token::{push_child, Token},
};
use derive_where::derive_where;
use rayon::prelude::*;
use std::ops::{Bound, RangeBounds};

/// Matches one character passing the predicate, as a width 1 literal.
#[derive(Clone, Debug)]
pub struct Satisfy {
    id: String,
    predicate: Predicate,
}

pub fn satisfy(id: &str, predicate: Predicate) -> Parser {
    Parser::new(Satisfy {
        id: id.to_owned(),
        predicate,
    })
}

impl Combinator for Satisfy {
    #[inline]
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        match input.get(start) {
            Some(&c) if self.predicate.test(c) => Ok(Token::literal(self.id.clone(), c, start)),
            _ => Err(Failure::at(start)),
        }
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.id.is_empty() {
            write!(f, "<char>")
        } else {
            write!(f, "<{}>", self.id)
        }
    }
}

/// Matches an exact string as a single literal.
#[derive(Clone, Debug)]
pub struct Text {
    id: String,
    text: String,
    chars: Vec<char>,
}

pub fn string(id: &str, text: &str) -> Parser {
    Parser::new(Text {
        id: id.to_owned(),
        text: text.to_owned(),
        chars: text.chars().collect(),
    })
}

impl Combinator for Text {
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        for (offset, expected) in self.chars.iter().enumerate() {
            if input.get(start + offset) != Some(expected) {
                return Err(Failure::at(start + offset));
            }
        }
        Ok(Token::literal(self.id.clone(), self.text.clone(), start))
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{:?}", self.text)
    }
}

/// Applies each part where the last finished.
/// - `STRICT` additionally requires the sequence to end at the end of the input.
#[derive(Clone, Debug)]
pub struct Sequence<const STRICT: bool> {
    id: String,
    parts: Vec<Parser>,
}

pub fn sequence(id: &str, parts: impl IntoIterator<Item = Parser>) -> Parser {
    Parser::new(Sequence::<false> {
        id: id.to_owned(),
        parts: parts.into_iter().collect(),
    })
}

pub fn strictly_sequence(id: &str, parts: impl IntoIterator<Item = Parser>) -> Parser {
    Parser::new(Sequence::<true> {
        id: id.to_owned(),
        parts: parts.into_iter().collect(),
    })
}

impl<const STRICT: bool> Combinator for Sequence<STRICT> {
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        let mut children = Vec::new();
        let mut pos = start;
        for part in &self.parts {
            let tk = part.comp(input, pos)?;
            pos += tk.width;
            push_child(&mut children, tk);
        }
        if STRICT && pos != input.len() {
            return Err(Failure::named(pos, "end of input"));
        }
        Ok(Token::nest(self.id.clone(), children, start, pos - start))
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "(")?;
        repr_list(f, &self.parts, " ")?;
        write!(f, ")")?;
        if STRICT {
            write!(f, " <end>")?;
        }
        Ok(())
    }
}

/// Tries every alternative at the same position, the longest match wins (earliest listed on a tie).
/// - If all fail, the failures that got furthest are [composed](Failure::compose_from).
/// - `CONCURRENT` evaluates the alternatives on the rayon thread pool, with identical results.
#[derive(Clone, Debug)]
pub struct Choice<const CONCURRENT: bool> {
    id: String,
    alternatives: Vec<Parser>,
}

pub fn choice(id: &str, alternatives: impl IntoIterator<Item = Parser>) -> Parser {
    Parser::new(Choice::<false> {
        id: id.to_owned(),
        alternatives: alternatives.into_iter().collect(),
    })
}

pub fn choice_concurrent(id: &str, alternatives: impl IntoIterator<Item = Parser>) -> Parser {
    Parser::new(Choice::<true> {
        id: id.to_owned(),
        alternatives: alternatives.into_iter().collect(),
    })
}

impl<const CONCURRENT: bool> Choice<CONCURRENT> {
    fn longest(&self, results: impl IntoIterator<Item = ParseResult>, start: usize) -> ParseResult {
        let mut best: Option<Token> = None;
        let mut failures = Vec::new();
        for res in results {
            match res {
                Ok(tk) => {
                    if best.as_ref().map_or(true, |b| tk.width > b.width) {
                        best = Some(tk);
                    }
                }
                Err(e) => failures.push(e),
            }
        }
        match best {
            Some(tk) if self.id.is_empty() => Ok(tk),
            Some(tk) => {
                let width = tk.width;
                let mut children = Vec::new();
                push_child(&mut children, tk);
                Ok(Token::nest(self.id.clone(), children, start, width))
            }
            None => Err(Failure::compose_from(failures).unwrap_or_else(|| Failure::at(start))),
        }
    }
}

impl<const CONCURRENT: bool> Combinator for Choice<CONCURRENT> {
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        if CONCURRENT {
            let results: Vec<ParseResult> = self
                .alternatives
                .par_iter()
                .map(|alt| alt.comp(input, start))
                .collect();
            self.longest(results, start)
        } else {
            self.longest(self.alternatives.iter().map(|alt| alt.comp(input, start)), start)
        }
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "(")?;
        repr_list(f, &self.alternatives, " | ")?;
        write!(f, ")")
    }
}

/// Greedily applies the inner parser between `min` and `max` times.
/// - Stops at a failure, at a zero width match, at `max` matches, or at the end of the input.
/// - `STRICT` instead propagates the failure that stopped it before the end of the input.
#[derive_where(Clone; P: Clone)]
#[derive_where(Debug; P: Debug)]
pub struct Repetition<P: Combinator, const STRICT: bool> {
    id: String,
    inner: P,
    min: usize,
    max: Option<usize>,
}

fn count_bounds(range: impl RangeBounds<usize>) -> (usize, Option<usize>) {
    let min = match range.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n + 1,
        Bound::Unbounded => 0,
    };
    let max = match range.end_bound() {
        Bound::Included(&n) => Some(n),
        Bound::Excluded(&n) => Some(n.saturating_sub(1)),
        Bound::Unbounded => None,
    };
    (min, max)
}

pub fn repetition(id: &str, inner: Parser, counts: impl RangeBounds<usize>) -> Parser {
    let (min, max) = count_bounds(counts);
    Parser::new(Repetition::<_, false> {
        id: id.to_owned(),
        inner,
        min,
        max,
    })
}

pub fn strictly_repetition(id: &str, inner: Parser, counts: impl RangeBounds<usize>) -> Parser {
    let (min, max) = count_bounds(counts);
    Parser::new(Repetition::<_, true> {
        id: id.to_owned(),
        inner,
        min,
        max,
    })
}

impl<P: Combinator, const STRICT: bool> Combinator for Repetition<P, STRICT> {
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        let mut children = Vec::new();
        let mut found = 0;
        let mut pos = start;

        while pos < input.len() && self.max.map_or(true, |max| found < max) {
            match self.inner.comp(input, pos) {
                Ok(tk) if tk.width == 0 => {
                    if STRICT {
                        return Err(Failure::at(pos));
                    }
                    break;
                }
                Ok(tk) => {
                    found += 1;
                    pos += tk.width;
                    push_child(&mut children, tk);
                }
                Err(e) => {
                    if STRICT {
                        return Err(e);
                    }
                    break;
                }
            }
        }

        // stopped at the maximum, so report what prevents consuming the rest
        if STRICT && pos < input.len() {
            return Err(self
                .inner
                .comp(input, pos)
                .err()
                .unwrap_or_else(|| Failure::at(pos)));
        }

        if found < self.min {
            Err(Failure::at(pos))
        } else {
            Ok(Token::nest(self.id.clone(), children, start, pos - start))
        }
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if STRICT {
            write!(f, "strictly ")?;
        }
        self.inner.repr(f)?;
        match (self.min, self.max) {
            (0, None) => write!(f, "*"),
            (1, None) => write!(f, "+"),
            (0, Some(1)) => write!(f, "?"),
            (min, None) => write!(f, "{{{min},}}"),
            (min, Some(max)) => write!(f, "{{{min},{max}}}"),
        }
    }
}

/// Zero width lookahead that succeeds only where the inner parser fails.
#[derive_where(Clone; P: Clone)]
#[derive_where(Debug; P: Debug)]
pub struct Negate<P: Combinator> {
    id: String,
    inner: P,
}

pub fn negate(id: &str, inner: Parser) -> Parser {
    Parser::new(Negate {
        id: id.to_owned(),
        inner,
    })
}

impl<P: Combinator> Combinator for Negate<P> {
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        match self.inner.comp(input, start) {
            Ok(_) => Err(Failure::at(start)),
            Err(_) => Ok(Token::empty(self.id.clone(), start)),
        }
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "!")?;
        self.inner.repr(f)
    }
}

/// Every requirement must match at the same position, consuming as much as the widest.
#[derive(Clone, Debug)]
pub struct AllOf {
    id: String,
    requirements: Vec<Parser>,
}

pub fn allof(id: &str, requirements: impl IntoIterator<Item = Parser>) -> Parser {
    Parser::new(AllOf {
        id: id.to_owned(),
        requirements: requirements.into_iter().collect(),
    })
}

impl Combinator for AllOf {
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        let mut children = Vec::new();
        let mut widest = 0;
        for req in &self.requirements {
            let tk = req.comp(input, start)?;
            widest = widest.max(tk.width);
            push_child(&mut children, tk);
        }
        Ok(Token::nest(self.id.clone(), children, start, widest))
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "(")?;
        repr_list(f, &self.requirements, " & ")?;
        write!(f, ")")
    }
}

/// Zero width lookahead that succeeds only if none of the exclusions match.
#[derive(Clone, Debug)]
pub struct NoneOf {
    exclusions: Vec<Parser>,
}

pub fn noneof(exclusions: impl IntoIterator<Item = Parser>) -> Parser {
    Parser::new(NoneOf {
        exclusions: exclusions.into_iter().collect(),
    })
}

impl Combinator for NoneOf {
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        if self
            .exclusions
            .iter()
            .any(|ex| ex.comp(input, start).is_ok())
        {
            Err(Failure::at(start))
        } else {
            Ok(Token::empty("", start))
        }
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "!(")?;
        repr_list(f, &self.exclusions, " | ")?;
        write!(f, ")")
    }
}

/// Labels failures with what was expected, unless a nested parser already has.
#[derive_where(Clone; P: Clone)]
#[derive_where(Debug; P: Debug)]
pub struct Named<P: Combinator> {
    inner: P,
    label: String,
}

pub fn named(inner: Parser, label: &str) -> Parser {
    Parser::new(Named {
        inner,
        label: label.to_owned(),
    })
}

impl<P: Combinator> Combinator for Named<P> {
    #[inline]
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        self.inner
            .comp(input, start)
            .map_err(|e| e.or_named(&self.label))
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.label)
    }
}
