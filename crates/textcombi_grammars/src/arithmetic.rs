//! A small statement language of assignments and evaluations.
//! ```text
//! let rate = 1.5;
//! eval -rate * (2 + x)
//! ```
//! - Statements end with `;` or a newline, blank statements are allowed.
//! - Tokens are separated by spaces and tabs only, as newlines are significant.
use textcombi::{
    core::{choice, choice_concurrent, repetition, satisfy, sequence, string, strictly_repetition},
    derived::optional,
    predicate::{alphabetic, any_of, is, numeric},
    recursion::Slot,
    Parser,
};

/// Spaces and tabs, possibly none.
fn blank() -> Parser {
    repetition("", satisfy("", any_of([is(' '), is('\t')])), ..)
}

fn variable() -> Parser {
    sequence(
        "VARIABLE",
        [
            satisfy("CHAR", any_of([alphabetic(), is('_')])),
            repetition(
                "",
                satisfy("CHAR", any_of([alphabetic(), numeric(), is('_')])),
                ..,
            ),
        ],
    )
    .named("variable")
}

fn number() -> Parser {
    sequence(
        "NUMBER",
        [
            repetition("INT", satisfy("CHAR", numeric()), 1..),
            optional(
                "DEC",
                sequence(
                    "",
                    [
                        satisfy("", is('.')),
                        repetition("", satisfy("CHAR", numeric()), 1..),
                    ],
                ),
            ),
        ],
    )
    .named("number")
}

/// `expression := term (operator term)*`, with groups recursing back into `expression`.
fn expression() -> Parser {
    let slot = Slot::new();

    let group = sequence(
        "GROUP",
        [
            satisfy("", is('(')),
            slot.proxy().optionally(),
            satisfy("", is(')')).named("\")\""),
        ],
    )
    .named("group");

    let term = sequence(
        "EXPRESSION_TERM",
        [
            repetition(
                "PREFIX_OPERATORS",
                satisfy("CHAR", any_of([is('+'), is('-')])),
                ..,
            ),
            choice("", [variable(), number(), group]),
        ],
    )
    .named("expression term");

    let operator = satisfy(
        "BINARY_OPERATOR",
        any_of([is('+'), is('-'), is('*'), is('/')]),
    )
    .named("binary operator");

    let expression = sequence(
        "EXPRESSION",
        [
            blank(),
            term.clone(),
            repetition("", sequence("", [blank(), operator, blank(), term]), ..),
        ],
    )
    .named("expression");

    // INV: the slot was created above and is filled only here.
    slot.fill(expression).expect("fresh slot is unfilled")
}

/// The whole program, which must consume all of the input.
/// - `concurrent` evaluates the statement alternatives with [choice_concurrent].
pub fn blocks(concurrent: bool) -> Parser {
    let ending = satisfy("", any_of([is(';'), is('\n')])).named("ending delimiter");
    let expression = expression();

    let statements = [
        sequence("", [blank(), ending.clone()]),
        sequence(
            "EVALUATE",
            [
                blank(),
                string("", "eval ").named("\"eval \""),
                blank(),
                expression.clone(),
                blank(),
                ending.clone(),
            ],
        ),
        sequence(
            "ASSIGNMENT",
            [
                blank(),
                string("", "let ").named("\"let \""),
                blank(),
                variable(),
                blank(),
                satisfy("EQUALS", is('=')).named("\"=\""),
                blank(),
                expression,
                blank(),
                ending,
            ],
        ),
    ];

    let statement = if concurrent {
        choice_concurrent("", statements)
    } else {
        choice("", statements)
    };
    strictly_repetition("BLOCKS", statement, ..)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use textcombi::{driver::parse, Failure, Token};

    fn ids(token: &Token) -> Vec<&str> {
        token.children().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn statements() {
        let tk = parse("let x = 1;\neval x + 2;\n", &blocks(false)).unwrap();
        assert_eq!(tk.id, "BLOCKS");
        assert_eq!(ids(&tk), ["ASSIGNMENT", "EVALUATE"]);

        let assignment = &tk.children()[0];
        assert_eq!(ids(assignment), ["VARIABLE", "EQUALS", "EXPRESSION"]);
        assert_eq!(assignment.children()[0].text(), "x");

        let evaluate = &tk.children()[1];
        let expression = &evaluate.children()[0];
        assert_eq!(
            ids(expression),
            ["EXPRESSION_TERM", "BINARY_OPERATOR", "EXPRESSION_TERM"]
        );
    }

    #[test]
    fn numbers_and_groups() {
        let tk = parse("eval -(1.5 * (y))\n", &blocks(false)).unwrap();
        let term = &tk.children()[0].children()[0].children()[0];
        assert_eq!(ids(term), ["PREFIX_OPERATORS", "GROUP"]);
        assert_eq!(term.children()[0].text(), "-");

        let inner = &term.children()[1].children()[0];
        let number = &inner.children()[0].children()[1];
        assert_eq!(number.id, "NUMBER");
        assert_eq!(ids(number), ["INT", "DEC"]);
        assert_eq!(number.text(), "15");
    }

    #[rstest]
    #[case("")]
    #[case("\n\n;")]
    #[case("let snake_case2 = +a - -3.25 / (b);\n")]
    #[case("  eval ()\t;")]
    fn accepts(#[case] input: &str) {
        let tk = parse(input, &blocks(false)).unwrap();
        assert_eq!(tk.width, input.chars().count());
    }

    #[rstest]
    #[case("let x = ;\n", Failure::named(8, "variable | number | group"))]
    #[case("eval (1 + 2;\n", Failure::named(11, "\")\""))]
    #[case("let x 1;", Failure::named(6, "\"=\""))]
    #[case("x = 1;", Failure::named(0, "ending delimiter | \"eval \" | \"let \""))]
    #[case("eval 1", Failure::named(6, "ending delimiter"))]
    fn rejects(#[case] input: &str, #[case] expected: Failure) {
        assert_eq!(parse(input, &blocks(false)), Err(expected));
    }

    #[test]
    fn concurrent_agrees() {
        let input = "let a = 1;\n\neval a * (a + 2.5)\nlet = 3;";
        assert_eq!(
            parse(input, &blocks(true)),
            parse(input, &blocks(false))
        );
        assert!(parse(&input[..input.len() - 8], &blocks(true)).is_ok());
    }
}
