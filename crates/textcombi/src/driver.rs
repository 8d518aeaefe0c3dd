//! Running a grammar over a whole input.
use crate::{
    token::{push_child, Content, Token},
    Combinator, ParseResult,
};

/// Runs `root` from the start of `input`, and [cleans](cleanup) the resulting tree.
///
/// The root is not required to consume all of the input, grammars needing that use a strict
/// [sequence](crate::core::strictly_sequence) or [repetition](crate::core::strictly_repetition)
/// at the top level.
pub fn parse<C: Combinator + ?Sized>(input: &str, root: &C) -> ParseResult {
    let chars: Vec<char> = input.chars().collect();
    parse_chars(&chars, root)
}

/// As [parse], for input already split into characters.
pub fn parse_chars<C: Combinator + ?Sized>(input: &[char], root: &C) -> ParseResult {
    root.comp(input, 0).map(cleanup)
}

/// Removes the structural scaffolding left by combinators other than sequences (for example a
/// choice returning an anonymous nest into a repetition).
/// - Children are cleaned before their parents.
/// - Anonymous nests below the root are replaced by their children, anonymous literals dropped.
/// - The root itself is kept, even if anonymous.
pub fn cleanup(token: Token) -> Token {
    match token.content {
        Content::Literal(_) => token,
        Content::Nest(children) => {
            let mut cleaned = Vec::with_capacity(children.len());
            for child in children {
                push_child(&mut cleaned, cleanup(child));
            }
            Token {
                content: Content::Nest(cleaned),
                ..token
            }
        }
    }
}
