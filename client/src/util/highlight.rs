//! Syntax highlighting for the live code preview.
//!
//! Produces typed spans instead of markup so the view layer never injects
//! raw HTML. The tokenizer is a single pass over the text; concatenating
//! every span's `text` yields the input unchanged, which also holds for a
//! partially typed snippet.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

const KEYWORDS: &[&str] = &["class", "constructor", "async", "await", "return", "const", "this", "new"];
const LITERALS: &[&str] = &["true", "false", "null", "undefined"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    Keyword,
    Boolean,
    String,
    Number,
    Function,
    Property,
    Plain,
}

impl TokenKind {
    /// CSS class applied to the rendered `<span>`.
    pub fn class(self) -> &'static str {
        match self {
            Self::Comment => "tok-comment",
            Self::Keyword => "tok-keyword",
            Self::Boolean => "tok-boolean",
            Self::String => "tok-string",
            Self::Number => "tok-number",
            Self::Function => "tok-function",
            Self::Property => "tok-property",
            Self::Plain => "tok-plain",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: TokenKind,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn push(spans: &mut Vec<Span>, text: &str, kind: TokenKind) {
    if text.is_empty() {
        return;
    }
    if kind == TokenKind::Plain {
        if let Some(last) = spans.last_mut() {
            if last.kind == TokenKind::Plain {
                last.text.push_str(text);
                return;
            }
        }
    }
    spans.push(Span { text: text.to_owned(), kind });
}

/// Split `code` into classified spans.
///
/// Priority: line comment, then string, then word classification
/// (keyword, literal, call, property access), then number.
pub fn tokenize(code: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut i = 0;
    let mut prev: Option<char> = None;

    while i < code.len() {
        let rest = &code[i..];
        let Some(c) = rest.chars().next() else {
            break;
        };

        if rest.starts_with("//") {
            let end = rest.find('\n').unwrap_or(rest.len());
            push(&mut spans, &rest[..end], TokenKind::Comment);
            i += end;
            prev = rest[..end].chars().last();
            continue;
        }

        if c == '"' {
            let body = &rest[1..];
            let stop = body.find(['"', '\n']).unwrap_or(body.len());
            let closed = body[stop..].starts_with('"');
            let end = 1 + stop + usize::from(closed);
            push(&mut spans, &rest[..end], TokenKind::String);
            i += end;
            prev = rest[..end].chars().last();
            continue;
        }

        if is_ident_continue(c) {
            let len = rest.find(|ch: char| !is_ident_continue(ch)).unwrap_or(rest.len());
            let word = &rest[..len];
            let kind = classify_word(word, &rest[len..], prev);
            push(&mut spans, word, kind);
            i += len;
            prev = word.chars().last();
            continue;
        }

        let len = c.len_utf8();
        push(&mut spans, &rest[..len], TokenKind::Plain);
        prev = Some(c);
        i += len;
    }
    spans
}

fn classify_word(word: &str, after: &str, prev: Option<char>) -> TokenKind {
    let starts_ident = word.chars().next().is_some_and(is_ident_start);
    if !starts_ident {
        return if word.bytes().all(|b| b.is_ascii_digit()) { TokenKind::Number } else { TokenKind::Plain };
    }
    if KEYWORDS.contains(&word) {
        return TokenKind::Keyword;
    }
    if LITERALS.contains(&word) {
        return TokenKind::Boolean;
    }
    if after.starts_with('(') {
        return TokenKind::Function;
    }
    if prev == Some('.') {
        return TokenKind::Property;
    }
    TokenKind::Plain
}

/// 1-based line count of `text`; empty text is on line 1.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}
