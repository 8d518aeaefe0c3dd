//! Self and mutually referential grammar rules.
//!
//! Combinators are values built bottom-up, so a rule cannot name itself before it exists. Both
//! forms here hold a [Weak] reference back to the rule, so a recursive grammar never forms a
//! cycle of strong references.
//! - [Slot] is filled after construction, allowing any number of mutually recursive rules.
//! - [recursive] builds a single self-referencing rule in one step.
//! ```
//! use textcombi::{core::{sequence, string}, driver::parse, recursion::Slot};
//!
//! // group := "(" group? ")"
//! let slot = Slot::new();
//! let group = sequence("GROUP", [
//!     string("", "("),
//!     slot.proxy().optionally(),
//!     string("", ")").named("\")\""),
//! ]);
//! let group = slot.fill(group).unwrap();
//!
//! assert_eq!(parse("(())", &group).unwrap().depth(), 2);
//! ```
use super::*;
use std::sync::{OnceLock, Weak};

/// A cell for a rule defined after the parsers referring to it.
///
/// The two phase contract:
/// 1. Create the slot, and use [Slot::proxy] wherever the rule is referenced.
/// 2. [Slot::fill] it with the rule, before any parsing.
///
/// Proxies only weakly refer to the slot, so it must outlive them, either by keeping the [Slot]
/// or the [Parser] returned by [Slot::fill]. Parsing through an unfilled or dropped slot is a
/// grammar bug and panics.
#[derive(Clone, Default, Debug)]
pub struct Slot {
    cell: Arc<OnceLock<Parser>>,
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser deferring to whatever the slot is filled with.
    pub fn proxy(&self) -> Parser {
        Parser::new(Proxy {
            cell: Arc::downgrade(&self.cell),
        })
    }

    /// Fills the slot, returning the rule as a parser that keeps the slot alive.
    pub fn fill(&self, rule: Parser) -> Result<Parser, GrammarError> {
        self.cell
            .set(rule.clone())
            .map_err(|_| GrammarError::SlotFilled)?;
        Ok(Parser::new(Anchored {
            rule,
            _cell: self.cell.clone(),
        }))
    }

    pub fn is_filled(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[derive(Clone, Debug)]
struct Proxy {
    cell: Weak<OnceLock<Parser>>,
}

impl Proxy {
    fn resolve(&self) -> Result<Parser, GrammarError> {
        let cell = self.cell.upgrade().ok_or(GrammarError::SlotDropped)?;
        cell.get().cloned().ok_or(GrammarError::SlotUnfilled)
    }
}

impl Combinator for Proxy {
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        self.resolve()
            .expect("recursion slots must be filled and kept alive while parsing")
            .comp(input, start)
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "...")
    }
}

#[derive(Clone, Debug)]
struct Anchored {
    rule: Parser,
    _cell: Arc<OnceLock<Parser>>,
}

impl Combinator for Anchored {
    #[inline]
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        self.rule.comp(input, start)
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        self.rule.repr(f)
    }
}

/// The recursion combinator, `f` is given a handle to the rule it is building.
/// ```
/// use textcombi::{core::{sequence, string}, driver::parse, recursion::recursive};
///
/// // nested := "[" nested? "]"
/// let nested = recursive(|nested| {
///     sequence("NEST", [string("", "["), nested.optionally(), string("", "]")])
/// });
/// assert_eq!(parse("[[[]]]", &nested).unwrap().depth(), 3);
/// ```
pub fn recursive<F>(f: F) -> Parser
where
    F: FnOnce(Parser) -> Parser,
{
    Parser::new(Recursive {
        rule: Arc::new_cyclic(move |w| {
            f(Parser::new(RecursiveHandle {
                rule: w.clone(),
            }))
        }),
    })
}

#[derive(Clone, Debug)]
struct RecursiveHandle {
    rule: Weak<Parser>,
}

impl Combinator for RecursiveHandle {
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        // INV: owned by some recursive parser, ptr always upgradable as dropping that parser drops this.
        self.rule
            .upgrade()
            .expect("recursive handle used outside of its rule")
            .comp(input, start)
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "...")
    }
}

#[derive(Clone, Debug)]
struct Recursive {
    rule: Arc<Parser>,
}

impl Combinator for Recursive {
    #[inline]
    fn comp(&self, input: &[char], start: usize) -> ParseResult {
        self.rule.comp(input, start)
    }

    fn repr(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        self.rule.repr(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{choice, satisfy, sequence, string},
        driver::parse,
        predicate::numeric,
    };

    fn group(slot: &Slot) -> Parser {
        sequence(
            "GROUP",
            [
                string("", "("),
                slot.proxy().optionally(),
                string("", ")").named("\")\""),
            ],
        )
    }

    #[test]
    fn slot_recursion() {
        let slot = Slot::new();
        let group = slot.fill(group(&slot)).unwrap();

        let tk = parse("(())", &group).unwrap();
        assert_eq!((tk.width, tk.depth()), (4, 2));
        assert_eq!(tk.children()[0].id, "GROUP");

        assert_eq!(parse("(()", &group), Err(Failure::named(3, "\")\"")));
    }

    #[test]
    fn anchor_keeps_slot_alive() {
        let group = {
            let slot = Slot::new();
            slot.fill(group(&slot)).unwrap()
        };
        assert_eq!(parse("((()))", &group).unwrap().width, 6);
    }

    #[test]
    fn mutual_recursion() {
        // list := "[" (item ("," item)*)? "]" ; item := digit | list
        let list_slot = Slot::new();
        let item_slot = Slot::new();
        let list = sequence(
            "LIST",
            [
                string("", "["),
                item_slot
                    .proxy()
                    .repeatedly_with_delimiter(string("", ","))
                    .optionally(),
                string("", "]").named("\"]\""),
            ],
        );
        let item = choice("", [satisfy("DIGIT", numeric()), list_slot.proxy()]);
        let list = list_slot.fill(list).unwrap();
        item_slot.fill(item).unwrap();

        let tk = parse("[1,[2,[]],3]", &list).unwrap();
        assert_eq!((tk.width, tk.children().len(), tk.depth()), (12, 3, 3));
        assert_eq!(parse("[1,[2]", &list), Err(Failure::named(6, "\"]\"")));
    }

    #[test]
    fn slot_fills_once() {
        let slot = Slot::new();
        assert!(!slot.is_filled());
        slot.fill(string("", "a")).unwrap();
        assert!(slot.is_filled());
        assert_eq!(
            slot.fill(string("", "b")).unwrap_err(),
            GrammarError::SlotFilled
        );
    }

    #[test]
    #[should_panic(expected = "recursion slots must be filled")]
    fn unfilled_slot_panics() {
        let slot = Slot::new();
        let _ = parse("a", &slot.proxy());
    }

    #[test]
    fn recursive_rule() {
        let nested = recursive(|nested| {
            sequence(
                "NEST",
                [string("", "["), nested.optionally(), string("", "]")],
            )
        });
        assert_eq!(parse("[[]]", &nested).unwrap().depth(), 2);
        assert_eq!(parse("[[]", &nested), Err(Failure::at(3)));
        assert_eq!(Repr(&nested).to_string(), "(\"[\" ...? \"]\")");
    }
}
