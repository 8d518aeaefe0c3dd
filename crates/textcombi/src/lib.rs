//! A scanner-less text parser combinator library.
//!
//! Grammars are built from character [predicates](predicate), then composed with
//! [sequences](core::sequence), longest-match [choices](core::choice),
//! [repetitions](core::repetition) and [recursion](recursion) into a single [Parser]. Running it
//! with [`driver::parse`] produces either a [Token] tree or the furthest [Failure] reached.
//! ```
//! use textcombi::{core::{satisfy, sequence, string}, driver::parse, predicate::numeric, Parser};
//!
//! let number = satisfy("DIGIT", numeric()).repeatedly(1..);
//! let assign = sequence("ASSIGN", [string("", "x="), sequence("NUMBER", [number])]);
//!
//! let token = parse("x=42", &assign).unwrap();
//! assert_eq!(token.width, 4);
//! assert_eq!(token.children()[0].text(), "42");
//! ```
#![allow(internal_features)]
#![cfg_attr(feature = "nightly", feature(rustc_attrs))]
#![warn(clippy::style)]
#![warn(clippy::perf)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::{
    fmt::{Debug, Display, Error, Formatter},
    sync::Arc,
};

pub mod core;
pub mod derived;
pub mod driver;
pub mod failure;
pub mod macros;
pub mod predicate;
pub mod recursion;
pub mod token;

pub use failure::{Failure, GrammarError};
pub use token::{Content, Token, TokenKind};

/// The result of running a [Combinator] at some position.
pub type ParseResult = Result<Token, Failure>;

/// The core trait for defining text parsers.
///
/// A combinator is a pure function of its configuration and the `(input, start)` pair, so it
/// can be shared between grammars and threads.
#[cfg_attr(
    feature = "nightly",
    rustc_on_unimplemented(
        message = "`{Self}` is not a `Combinator` so cannot be combined & used as one",
        label = "Not `Combinator`",
    )
)]
pub trait Combinator: Send + Sync {
    /// Attempt to match at `start`, producing a [Token] or the [Failure] describing why not.
    fn comp(&self, input: &[char], start: usize) -> ParseResult;

    /// Produces a representation of the combinator for debugging & generating error messages.
    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error>;
}

/// A shared handle to any [Combinator].
///
/// Cloning is cheap, so one rule can appear in many places of a grammar (or in many grammars)
/// without copying it.
#[derive(Clone)]
pub struct Parser(Arc<dyn Combinator>);

impl Parser {
    pub fn new<C: Combinator + 'static>(combinator: C) -> Self {
        Self(Arc::new(combinator))
    }

    /// Run this parser at `start` of `input`.
    pub fn run(&self, input: &[char], start: usize) -> ParseResult {
        self.0.comp(input, start)
    }
}

impl Combinator for Parser {
    #[inline]
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        self.0.comp(input, start)
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        self.0.repr(f)
    }
}

impl Debug for Parser {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parser({})", Repr(self))
    }
}

/// A simple wrapper to allow the [Combinator::repr] function to implement [Display]
pub struct Repr<T>(pub T);

impl<C: Combinator + ?Sized> Display for Repr<&C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.repr(f)
    }
}

/// Writes the parts separated by `sep`, used by combinators holding lists of parsers.
pub(crate) fn repr_list(f: &mut Formatter<'_>, parts: &[Parser], sep: &str) -> Result<(), Error> {
    for (i, p) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        p.repr(f)?;
    }
    Ok(())
}
