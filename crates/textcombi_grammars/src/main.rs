//! Parses a file with one of the example grammars, printing the token tree.
use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use std::path::PathBuf;
use textcombi::driver::parse;
use textcombi_grammars::{diagnostic::ParseDiagnostic, source::read_lines, Grammar};

#[derive(Debug, Parser)]
#[command(
    name = "textcombi-grammars",
    version,
    about = "Parse a file with an example textcombi grammar."
)]
struct Args {
    /// The grammar to parse with.
    #[arg(value_enum)]
    grammar: Grammar,
    /// The file to parse.
    file: PathBuf,
    /// Evaluate the top level alternatives on the rayon thread pool.
    #[arg(long)]
    concurrent: bool,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    let source = read_lines(&args.file)
        .into_diagnostic()
        .wrap_err_with(|| format!("could not read {}", args.file.display()))?;

    let root = args.grammar.build(args.concurrent);
    match parse(&source, &root) {
        Ok(token) => {
            println!("{token}");
            Ok(())
        }
        Err(failure) => {
            let name = args.file.display().to_string();
            Err(ParseDiagnostic::new(name, source, &failure).into())
        }
    }
}
