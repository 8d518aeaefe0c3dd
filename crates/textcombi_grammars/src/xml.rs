//! An XML-like markup language of nested tags.
//! ```text
//! <note lang="en">
//!     <to>Tove</to>
//!     <br/>
//! </note>
//! ```
//! Closing tags are not checked against the name of the tag they close.
use textcombi::{
    core::{choice, choice_concurrent, repetition, satisfy, sequence, string, strictly_repetition},
    derived::whitespace,
    predicate::{alphabetic, any_of, is, negate, none_of, numeric},
    recursion::Slot,
    Parser,
};

fn identifier(id: &str) -> Parser {
    sequence(
        id,
        [
            satisfy("CHAR", alphabetic()),
            repetition("", satisfy("CHAR", any_of([alphabetic(), numeric()])), ..),
        ],
    )
}

fn quote() -> Parser {
    satisfy("", is('"')).named("'\"'")
}

/// `key="value"` pairs, possibly none.
fn attributes() -> Parser {
    let attribute = sequence(
        "",
        [
            whitespace(),
            identifier("KEY").named("key"),
            whitespace(),
            satisfy("", is('=')).named("\"=\""),
            whitespace(),
            quote(),
            repetition("VALUE", satisfy("CHAR", negate(is('"'))), ..).named("value"),
            quote(),
        ],
    )
    .named("attribute");
    repetition("ATTRIBUTES", attribute, ..)
}

fn tag_content() -> Parser {
    sequence(
        "",
        [
            whitespace(),
            identifier("TAG_NAME").named("tag name"),
            attributes(),
            whitespace(),
        ],
    )
    .named("tag content")
}

fn nesting_tag() -> Parser {
    let slot = Slot::new();

    let opening = sequence(
        "OPENING_TAG",
        [
            whitespace(),
            satisfy("", is('<')).named("\"<\""),
            tag_content(),
            satisfy("", is('>')).named("\">\""),
        ],
    )
    .named("opening tag");

    let closing = sequence(
        "CLOSING_TAG",
        [
            whitespace(),
            string("", "</").named("\"</\""),
            whitespace(),
            identifier("TAG_NAME").named("tag name"),
            whitespace(),
            satisfy("", is('>')).named("\">\""),
        ],
    )
    .named("closing tag");

    let self_closing = sequence(
        "SELF_CLOSING_TAG",
        [
            whitespace(),
            satisfy("", is('<')).named("\"<\""),
            whitespace(),
            tag_content(),
            whitespace(),
            string("", "/>").named("\"/>\""),
        ],
    )
    .named("self closing tag");

    let text = repetition("TEXT", satisfy("CHAR", none_of([is('<'), is('>')])), 1..).named("text");

    let nesting = sequence(
        "NESTING_TAG",
        [
            opening,
            repetition("CHILDREN", choice("", [text, self_closing, slot.proxy()]), ..),
            closing,
        ],
    )
    .named("nesting tag");

    // INV: the slot was created above and is filled only here.
    slot.fill(nesting).expect("fresh slot is unfilled")
}

/// A document of top level tags separated by whitespace, which must consume all of the input.
/// - `concurrent` evaluates the top level alternatives with [choice_concurrent].
pub fn document(concurrent: bool) -> Parser {
    let alternatives = [
        nesting_tag(),
        satisfy("", any_of([is(' '), is('\t'), is('\n')])),
    ];
    let item = if concurrent {
        choice_concurrent("", alternatives)
    } else {
        choice("", alternatives)
    };
    strictly_repetition("DOCUMENT", item, ..)
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
    fn nested_tags() {
        let tk = parse("<a x=\"1\"><b/>hi</a>\n", &document(false)).unwrap();
        assert_eq!(ids(&tk), ["NESTING_TAG"]);

        let tag = &tk.children()[0];
        assert_eq!(ids(tag), ["OPENING_TAG", "CHILDREN", "CLOSING_TAG"]);

        let opening = &tag.children()[0];
        assert_eq!(ids(opening), ["TAG_NAME", "ATTRIBUTES"]);
        let attributes = &opening.children()[1];
        assert_eq!(ids(attributes), ["KEY", "VALUE"]);
        assert_eq!(attributes.children()[1].text(), "1");

        let children = &tag.children()[1];
        assert_eq!(ids(children), ["SELF_CLOSING_TAG", "TEXT"]);
        assert_eq!(children.children()[1].text(), "hi");
    }

    #[test]
    fn recursive_children() {
        let input = "<list>\n  <item>one</item>\n  <item><em>two</em></item>\n</list>\n";
        let tk = parse(input, &document(false)).unwrap();
        let children = &tk.children()[0].children()[1];
        let nested: Vec<_> = children.children_with_id("NESTING_TAG").collect();
        assert_eq!(nested.len(), 2);
        assert_eq!(tk.width, input.chars().count());
    }

    #[rstest]
    #[case("<a><b></a>", Failure::named(10, "\"</\""))]
    #[case("<a x=1></a>", Failure::named(3, "\">\""))]
    #[case("<a>", Failure::named(3, "\"</\""))]
    #[case("a", Failure::named(0, "\"<\""))]
    fn rejects(#[case] input: &str, #[case] expected: Failure) {
        assert_eq!(parse(input, &document(false)), Err(expected));
    }

    #[test]
    fn concurrent_agrees() {
        let input = "<p>\n\t<img src=\"a.png\" alt=\"\"/> text </p>\n<p></q>";
        let sequential = parse(input, &document(false));
        assert!(sequential.is_ok());
        assert_eq!(parse(input, &document(true)), sequential);
    }
}
