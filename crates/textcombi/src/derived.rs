//! [Parser]s derived by function from the [core](crate::core) combinators, and the chaining
//! methods that build them.

use crate::{
    core::{named, repetition, satisfy, sequence, strictly_repetition},
    predicate::whitespace_char,
    Parser,
};
use std::ops::RangeBounds;

/// Zero or one match of `inner`.
pub fn optional(id: &str, inner: Parser) -> Parser {
    repetition(id, inner, 0..=1)
}

pub fn preceded_by(id: &str, inner: Parser, predecessor: Parser) -> Parser {
    sequence(id, [predecessor, inner])
}

pub fn followed_by(id: &str, inner: Parser, successor: Parser) -> Parser {
    sequence(id, [inner, successor])
}

pub fn surrounded_by(id: &str, inner: Parser, neighbour: Parser) -> Parser {
    sequence(id, [neighbour.clone(), inner, neighbour])
}

/// One or more items separated by the delimiter.
/// ```text
/// I D I D I ...
/// ```
pub fn repeated_with_delimiter(id: &str, item: Parser, delimiter: Parser) -> Parser {
    let tail = repetition("", sequence("", [delimiter, item.clone()]), ..);
    sequence(id, [item, tail])
}

/// As [repeated_with_delimiter], but every `D I` pair after the first item must match through to
/// the end of the input.
pub fn strictly_repeated_with_delimiter(id: &str, item: Parser, delimiter: Parser) -> Parser {
    let tail = strictly_repetition("", sequence("", [delimiter, item.clone()]), ..);
    sequence(id, [item, tail])
}

/// Any run of whitespace, including none.
pub fn whitespace() -> Parser {
    repetition("", satisfy("", whitespace_char()), ..)
}

/// Chaining forms of the derived combinators, all producing anonymous wrappers.
impl Parser {
    pub fn repeatedly(&self, counts: impl RangeBounds<usize>) -> Parser {
        repetition("", self.clone(), counts)
    }

    pub fn strictly_repeatedly(&self, counts: impl RangeBounds<usize>) -> Parser {
        strictly_repetition("", self.clone(), counts)
    }

    pub fn optionally(&self) -> Parser {
        optional("", self.clone())
    }

    pub fn repeatedly_with_delimiter(&self, delimiter: Parser) -> Parser {
        repeated_with_delimiter("", self.clone(), delimiter)
    }

    pub fn strictly_repeatedly_with_delimiter(&self, delimiter: Parser) -> Parser {
        strictly_repeated_with_delimiter("", self.clone(), delimiter)
    }

    pub fn preceded_by(&self, predecessor: Parser) -> Parser {
        preceded_by("", self.clone(), predecessor)
    }

    pub fn followed_by(&self, successor: Parser) -> Parser {
        followed_by("", self.clone(), successor)
    }

    pub fn surrounded_by(&self, neighbour: Parser) -> Parser {
        surrounded_by("", self.clone(), neighbour)
    }

    /// Label failures of this parser with what was expected.
    pub fn named(&self, label: &str) -> Parser {
        named(self.clone(), label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::string,
        predicate::{is, numeric},
        Combinator, Failure,
    };

    fn run(parser: &Parser, input: &str) -> crate::ParseResult {
        let chars: Vec<char> = input.chars().collect();
        parser.comp(&chars, 0)
    }

    #[test]
    fn delimited_list() {
        let num = satisfy("NUM", numeric());
        let list = repeated_with_delimiter("LIST", num.clone(), string("", ","));
        let tk = run(&list, "1,2,3;").unwrap();
        assert_eq!((tk.width, tk.children().len()), (5, 3));

        // a trailing delimiter is left unconsumed
        assert_eq!(run(&list, "1,2,").unwrap().width, 3);

        let strict = strictly_repeated_with_delimiter("LIST", num, string("", ","));
        assert_eq!(run(&strict, "1,2,3").unwrap().width, 5);
        assert_eq!(run(&strict, "1,2;"), Err(Failure::at(3)));
    }

    #[test]
    fn wrapping() {
        let quoted = satisfy("C", numeric())
            .repeatedly(1..)
            .surrounded_by(satisfy("", is('"')));
        let tk = run(&quoted, "\"42\"").unwrap();
        assert_eq!((tk.width, tk.text().as_str()), (4, "42"));

        let signed = satisfy("D", numeric()).preceded_by(satisfy("SIGN", is('-')).optionally());
        assert_eq!(run(&signed, "-1").unwrap().children().len(), 2);
        assert_eq!(run(&signed, "1").unwrap().children().len(), 1);

        let terminated = satisfy("D", numeric()).followed_by(string("", ";").named("\";\""));
        assert_eq!(run(&terminated, "1."), Err(Failure::named(1, "\";\"")));
    }

    #[test]
    fn whitespace_may_be_empty() {
        assert_eq!(run(&whitespace(), " \t\nx").unwrap().width, 3);
        assert_eq!(run(&whitespace(), "x").unwrap().width, 0);
    }
}
