//! Example grammars built with [textcombi], and the pieces of the command line parser using them.
pub mod arithmetic;
pub mod diagnostic;
pub mod source;
pub mod xml;

use textcombi::Parser;

/// The grammars available from the command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum Grammar {
    /// Assignments and evaluations of arithmetic expressions.
    Arith,
    /// Nested XML-like tags.
    Xml,
}

impl Grammar {
    /// Builds the grammar's root parser.
    pub fn build(self, concurrent: bool) -> Parser {
        match self {
            Grammar::Arith => arithmetic::blocks(concurrent),
            Grammar::Xml => xml::document(concurrent),
        }
    }
}
