//! The successful output of parsing, a tree of [Token]s.
use std::fmt::{Display, Formatter};

/// The shape of a [Token], without its content.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Literal,
    Nest,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Content {
    /// The exact text matched.
    Literal(String),
    /// Child tokens in the order they were matched.
    Nest(Vec<Token>),
}

/// A node of the parse tree.
/// - `start` is the char offset into the input where the match began.
/// - `width` is the number of chars consumed. For a nest this is how far its matching advanced,
///   which can exceed the sum of the children's widths as anonymous literals are dropped.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    /// The empty id marks a structural token, which is flattened into its parent.
    pub id: String,
    pub content: Content,
    pub start: usize,
    pub width: usize,
}

impl Token {
    pub fn literal(id: impl Into<String>, text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let width = text.chars().count();
        Self {
            id: id.into(),
            content: Content::Literal(text),
            start,
            width,
        }
    }

    pub fn nest(id: impl Into<String>, children: Vec<Token>, start: usize, width: usize) -> Self {
        Self {
            id: id.into(),
            content: Content::Nest(children),
            start,
            width,
        }
    }

    /// A zero width nest with no children, as produced by lookahead.
    pub fn empty(id: impl Into<String>, start: usize) -> Self {
        Self::nest(id, Vec::new(), start, 0)
    }

    pub fn kind(&self) -> TokenKind {
        match self.content {
            Content::Literal(_) => TokenKind::Literal,
            Content::Nest(_) => TokenKind::Nest,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.id.is_empty()
    }

    /// The offset just past the matched text.
    pub fn end(&self) -> usize {
        self.start + self.width
    }

    pub fn literal_content(&self) -> Option<&str> {
        match &self.content {
            Content::Literal(s) => Some(s),
            Content::Nest(_) => None,
        }
    }

    /// Children of a nest, a literal has none.
    pub fn children(&self) -> &[Token] {
        match &self.content {
            Content::Literal(_) => &[],
            Content::Nest(children) => children,
        }
    }

    /// The direct children with the given id.
    pub fn children_with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Token> + 'a {
        self.children().iter().filter(move |t| t.id == id)
    }

    /// The literal text kept in this subtree, concatenated in order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match &self.content {
            Content::Literal(s) => out.push_str(s),
            Content::Nest(children) => children.iter().for_each(|c| c.write_text(out)),
        }
    }

    /// Levels of nests in the subtree, a literal has depth 0.
    pub fn depth(&self) -> usize {
        match &self.content {
            Content::Literal(_) => 0,
            Content::Nest(children) => 1 + children.iter().map(Token::depth).max().unwrap_or(0),
        }
    }

    fn fmt_indented(&self, f: &mut Formatter<'_>, indent: usize) -> std::fmt::Result {
        write!(f, "{:indent$}{}", "", self.id)?;
        match &self.content {
            Content::Literal(s) => write!(f, " {s:?}"),
            Content::Nest(children) if children.is_empty() => Ok(()),
            Content::Nest(children) => {
                writeln!(f, " {{")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        writeln!(f, ",")?;
                    }
                    child.fmt_indented(f, indent + 4)?;
                }
                write!(f, "\n{:indent$}}}", "")
            }
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// Appends a matched child to its parent's children.
/// - named tokens are kept as they are
/// - anonymous nests contribute their children in place of themselves
/// - anonymous literals only consume input, so are dropped
pub fn push_child(children: &mut Vec<Token>, child: Token) {
    if !child.is_anonymous() {
        children.push(child);
    } else if let Content::Nest(inner) = child.content {
        children.extend(inner);
    }
}
