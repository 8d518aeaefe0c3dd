//! Rendering parse failures against their source.
use miette::{Diagnostic, NamedSource, SourceSpan};
use textcombi::Failure;
use thiserror::Error;

/// A [Failure] located in the named source it occurred in.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to parse {name} at line {line}, column {column}")]
#[diagnostic(code(textcombi::parse))]
pub struct ParseDiagnostic {
    name: String,
    pub line: usize,
    pub column: usize,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: SourceSpan,
    label: String,
}

impl ParseDiagnostic {
    /// `failure.start` is a char offset into `source`, converted here to the byte offsets miette
    /// expects. Lines and columns are 1-based and count chars.
    pub fn new(name: impl Into<String>, source: String, failure: &Failure) -> Self {
        let name = name.into();
        let (offset, len) = source
            .char_indices()
            .nth(failure.start)
            .map_or((source.len(), 0), |(b, c)| (b, c.len_utf8()));

        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, |l| l.chars().count())
            + 1;

        let label = match &failure.name {
            Some(expected) => format!("expected {expected}"),
            None => "unexpected input".to_owned(),
        };

        Self {
            src: NamedSource::new(name.clone(), source),
            name,
            line,
            column,
            span: (offset, len).into(),
            label,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The byte range highlighted in the source.
    pub fn span(&self) -> SourceSpan {
        self.span
    }
}
