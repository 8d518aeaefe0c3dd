use rstest::rstest;
use std::path::PathBuf;
use textcombi::driver::parse;
use textcombi_grammars::{source::read_lines, Grammar};

fn demo(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(file)
}

#[rstest]
#[case(Grammar::Arith, "blocks.eval", &["ASSIGNMENT", "ASSIGNMENT", "EVALUATE"])]
#[case(Grammar::Xml, "note.xml", &["NESTING_TAG"])]
fn demos_parse(#[case] grammar: Grammar, #[case] file: &str, #[case] top: &[&str]) {
    let source = read_lines(demo(file)).unwrap();
    for concurrent in [false, true] {
        let tk = parse(&source, &grammar.build(concurrent)).unwrap();
        assert_eq!(tk.width, source.chars().count());
        let ids: Vec<_> = tk.children().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, top);
    }
}

#[test]
fn rendered_tree() {
    let source = read_lines(demo("note.xml")).unwrap();
    let rendered = parse(&source, &Grammar::Xml.build(false)).unwrap().to_string();
    assert!(rendered.starts_with("DOCUMENT {\n    NESTING_TAG {\n        OPENING_TAG {\n"));
    assert!(rendered.contains("KEY {\n"));
}
