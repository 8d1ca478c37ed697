use super::*;

fn kinds(code: &str) -> Vec<(String, TokenKind)> {
    tokenize(code)
        .into_iter()
        .filter(|s| s.kind != TokenKind::Plain)
        .map(|s| (s.text, s.kind))
        .collect()
}

fn joined(code: &str) -> String {
    tokenize(code).into_iter().map(|s| s.text).collect()
}

#[test]
fn spans_concatenate_back_to_input() {
    let code = "// note\nclass A {\n  constructor() {\n    this.name = \"Ada\";\n    this.n = 10;\n  }\n}\n🚀 done";
    assert_eq!(joined(code), code);
}

#[test]
fn partial_snippets_round_trip() {
    let code = "this.role = \"Head of";
    for end in 0..=code.len() {
        if code.is_char_boundary(end) {
            assert_eq!(joined(&code[..end]), &code[..end]);
        }
    }
}

#[test]
fn comment_runs_to_end_of_line() {
    let spans = tokenize("// Blueprint class\nconst x");
    assert_eq!(spans[0], Span { text: "// Blueprint class".to_owned(), kind: TokenKind::Comment });
    assert!(spans.iter().any(|s| s.text == "const" && s.kind == TokenKind::Keyword));
}

#[test]
fn keywords_beat_function_and_property() {
    let found = kinds("this.design(req)");
    assert_eq!(
        found,
        vec![("this".to_owned(), TokenKind::Keyword), ("design".to_owned(), TokenKind::Function)]
    );
}

#[test]
fn property_after_dot() {
    let found = kinds("requirements.complexity");
    assert_eq!(found, vec![("complexity".to_owned(), TokenKind::Property)]);
}

#[test]
fn call_on_plain_identifier_is_function() {
    let found = kinds("console.log(adam.getPhilosophy());");
    assert_eq!(
        found,
        vec![
            ("log".to_owned(), TokenKind::Function),
            ("getPhilosophy".to_owned(), TokenKind::Function),
        ]
    );
}

#[test]
fn strings_numbers_and_literals() {
    let found = kinds("x = \"Adam\"; y = 10; ok = true; z = null;");
    assert_eq!(
        found,
        vec![
            ("\"Adam\"".to_owned(), TokenKind::String),
            ("10".to_owned(), TokenKind::Number),
            ("true".to_owned(), TokenKind::Boolean),
            ("null".to_owned(), TokenKind::Boolean),
        ]
    );
}

#[test]
fn unterminated_string_stops_at_newline() {
    let spans = tokenize("\"Clean code\nnext");
    assert_eq!(spans[0].text, "\"Clean code");
    assert_eq!(spans[0].kind, TokenKind::String);
}

#[test]
fn digits_inside_identifiers_are_not_numbers() {
    assert!(kinds("v2 = a1b").is_empty());
}

#[test]
fn plain_runs_are_merged() {
    let spans = tokenize("  {  }  ");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, TokenKind::Plain);
}

#[test]
fn token_classes_are_distinct() {
    let all = [
        TokenKind::Comment,
        TokenKind::Keyword,
        TokenKind::Boolean,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Function,
        TokenKind::Property,
        TokenKind::Plain,
    ];
    let mut classes: Vec<_> = all.iter().map(|k| k.class()).collect();
    classes.sort_unstable();
    classes.dedup();
    assert_eq!(classes.len(), all.len());
}

#[test]
fn line_count_is_one_based() {
    assert_eq!(line_count(""), 1);
    assert_eq!(line_count("a\nb"), 2);
    assert_eq!(line_count("a\n"), 2);
}
