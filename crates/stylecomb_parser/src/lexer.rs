//! Tokenizer.
//!
//! Splits source text into leaf nodes without dropping a single byte. The
//! parser groups these tokens into containers; nothing downstream ever has
//! to reconstruct text the lexer threw away.

use stylecomb_ast::{Node, NodeKind};

use crate::Syntax;

/// A leaf node paired with its byte offset in the source.
pub(crate) struct Token {
    pub node: Node,
    pub offset: usize,
}

pub(crate) fn tokenize(syntax: Syntax, text: &str) -> Vec<Token> {
    Lexer {
        syntax,
        text,
        pos: 0,
        tokens: Vec::new(),
    }
    .run()
}

struct Lexer<'s> {
    syntax: Syntax,
    text: &'s str,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer<'_> {
    fn run(mut self) -> Vec<Token> {
        while self.pos < self.text.len() {
            self.step();
        }
        self.tokens
    }

    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    fn push(&mut self, kind: NodeKind, start: usize) {
        self.tokens.push(Token {
            node: Node::leaf(kind, &self.text[start..self.pos]),
            offset: start,
        });
    }

    fn step(&mut self) {
        let start = self.pos;
        let rest = self.rest();
        let c = rest.chars().next().expect("step called at end of input");

        if c.is_whitespace() {
            self.consume_while(char::is_whitespace);
            self.push(NodeKind::Space, start);
        } else if rest.starts_with("/*") {
            self.pos += 2;
            match self.rest().find("*/") {
                Some(end) => self.pos += end + 2,
                None => self.pos = self.text.len(),
            }
            self.push(NodeKind::Comment, start);
        } else if self.syntax.line_comments() && rest.starts_with("//") {
            self.pos += 2;
            self.consume_while(|c| c != '\n');
            self.push(NodeKind::Comment, start);
        } else if c == '"' || c == '\'' {
            self.lex_string(c);
            self.push(NodeKind::Str, start);
        } else if c == '#' && rest[1..].starts_with(is_word) {
            self.pos += 1;
            self.consume_while(is_word);
            self.push(NodeKind::Hash, start);
        } else if starts_number(rest) {
            self.lex_number();
            self.push(NodeKind::Number, start);
        } else if is_ident_start(rest) {
            self.consume_while(is_word);
            self.push(NodeKind::Ident, start);
            self.lex_url_tail();
        } else {
            self.pos += c.len_utf8();
            let kind = if c == ';' {
                NodeKind::DeclDelim
            } else {
                NodeKind::Operator
            };
            self.push(kind, start);
        }
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        for (i, c) in self.rest().char_indices() {
            if !pred(c) {
                self.pos += i;
                return;
            }
        }
        self.pos = self.text.len();
    }

    fn lex_string(&mut self, quote: char) {
        self.pos += quote.len_utf8();
        let mut chars = self.rest().char_indices();
        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                chars.next();
            } else if c == quote {
                self.pos += i + quote.len_utf8();
                return;
            }
        }
        // Unterminated string: keep what is there.
        self.pos = self.text.len();
    }

    fn lex_number(&mut self) {
        let rest = self.rest();
        let mut seen_dot = false;
        for (i, c) in rest.char_indices() {
            if c.is_ascii_digit() {
                continue;
            }
            if c == '.' && !seen_dot && rest[i + 1..].starts_with(|d: char| d.is_ascii_digit()) {
                seen_dot = true;
                continue;
            }
            if i == 0 && (c == '+' || c == '-') {
                continue;
            }
            self.pos += i;
            return;
        }
        self.pos = self.text.len();
    }

    /// After lexing `url`, swallow an unquoted argument as one raw token so
    /// slashes and colons inside it never reach the parser.
    fn lex_url_tail(&mut self) {
        let last = &self.tokens.last().expect("just pushed an ident").node;
        if !last.text().eq_ignore_ascii_case("url") || !self.rest().starts_with('(') {
            return;
        }
        let paren = self.pos;
        self.pos += 1;
        self.push(NodeKind::Operator, paren);

        let inner = self.rest();
        if inner.trim_start().starts_with(['"', '\'']) {
            // Quoted argument: normal lexing handles it.
            return;
        }
        let start = self.pos;
        self.consume_while(|c| c != ')');
        if self.pos > start {
            self.push(NodeKind::Raw, start);
        }
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn is_ident_start(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || !c.is_ascii() => true,
        Some('-') => matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '-' || !c.is_ascii()),
        _ => false,
    }
}

fn starts_number(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => matches!(chars.next(), Some(c) if c.is_ascii_digit()),
        Some('+' | '-') => match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => matches!(chars.next(), Some(c) if c.is_ascii_digit()),
            _ => false,
        },
        _ => false,
    }
}
