//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that lexes
//! from a `&str` input.
//!
//! This lexer is built for editor text: the document is usually half-typed,
//! so it never gives up. Unterminated strings still produce `StringValue`
//! tokens, and anything it can't make sense of becomes an `Error` token before
//! lexing continues.
//!
//! # Features
//!
//! - **Zero-copy lexing**: Token values borrow from source text
//! - **Dual column tracking**: Reports both UTF-8 character positions and
//!   UTF-16 code unit positions (for LSP compatibility)
//! - **Trivia preservation**: `#` comments and commas are attached to the
//!   following token
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_completion::token_source::StrGraphQLTokenSource;
//!
//! let lexer = StrGraphQLTokenSource::new("{ name }");
//! let texts: Vec<String> = lexer.map(|t| t.text().to_string()).collect();
//! assert_eq!(texts, vec!["{", "name", "}", ""]);
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use crate::token::GraphQLTriviaToken;
use crate::token::GraphQLTriviaTokenVec;
use crate::SourcePosition;
use std::borrow::Cow;

/// A lexer over a `&str` that produces [`GraphQLToken`]s.
///
/// The `'src` lifetime ties token values to the source string.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`, so that `\r\n` only counts as
    /// one line break.
    last_char_was_cr: bool,

    /// Trivia (comments, commas) accumulated before the next token.
    pending_trivia: GraphQLTriviaTokenVec<'src>,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as exactly one line terminator.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Advances past `text`, which must not contain line terminators.
    fn advance_within_line(&mut self, text: &str) {
        for ch in text.chars() {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
        }
        self.curr_byte_offset += text.len();
        self.last_char_was_cr = false;
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLTokenSpan {
        GraphQLTokenSpan::new(start, self.curr_position())
    }

    fn make_token(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        span: GraphQLTokenSpan,
    ) -> GraphQLToken<'src> {
        GraphQLToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    fn punctuator(
        &mut self,
        start: SourcePosition,
        kind: GraphQLTokenKind<'src>,
    ) -> GraphQLToken<'src> {
        self.consume();
        let span = self.make_span(start);
        self.make_token(kind, span)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            self.skip_whitespace();
            let start = self.curr_position();

            return match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    self.make_token(GraphQLTokenKind::Eof, span)
                },

                Some('#') => {
                    self.lex_comment(start);
                    continue;
                },

                Some(',') => {
                    self.consume();
                    let span = self.make_span(start);
                    self.pending_trivia.push(GraphQLTriviaToken::Comma { span });
                    continue;
                },

                Some('!') => self.punctuator(start, GraphQLTokenKind::Bang),
                Some('$') => self.punctuator(start, GraphQLTokenKind::Dollar),
                Some('&') => self.punctuator(start, GraphQLTokenKind::Ampersand),
                Some('(') => self.punctuator(start, GraphQLTokenKind::ParenOpen),
                Some(')') => self.punctuator(start, GraphQLTokenKind::ParenClose),
                Some(':') => self.punctuator(start, GraphQLTokenKind::Colon),
                Some('=') => self.punctuator(start, GraphQLTokenKind::Equals),
                Some('@') => self.punctuator(start, GraphQLTokenKind::At),
                Some('[') => self.punctuator(start, GraphQLTokenKind::SquareBracketOpen),
                Some(']') => self.punctuator(start, GraphQLTokenKind::SquareBracketClose),
                Some('{') => self.punctuator(start, GraphQLTokenKind::CurlyBraceOpen),
                Some('}') => self.punctuator(start, GraphQLTokenKind::CurlyBraceClose),
                Some('|') => self.punctuator(start, GraphQLTokenKind::Pipe),

                Some('.') => self.lex_dots(start),
                Some('"') => self.lex_string(start),
                Some(c) if is_name_start(c) => self.lex_name(start),
                Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),
                Some(_) => self.lex_invalid_character(start),
            };
        }
    }

    /// Skips spaces, tabs, line terminators and the Unicode BOM.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    /// Lexes a `#` comment into pending trivia.
    fn lex_comment(&mut self, start: SourcePosition) {
        self.consume();
        let rest = self.remaining();
        // Line terminators are ASCII, so the match is always on a char
        // boundary.
        let content_len = memchr::memchr2(b'\n', b'\r', rest.as_bytes())
            .unwrap_or(rest.len());
        let content = &rest[..content_len];
        self.advance_within_line(content);

        let span = self.make_span(start);
        self.pending_trivia.push(GraphQLTriviaToken::Comment {
            value: Cow::Borrowed(content),
            span,
        });
    }

    /// Lexes `...`, or an `Error` token for a lone `.`/`..` (usually a spread
    /// that is still being typed).
    fn lex_dots(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.advance_within_line("...");
            let span = self.make_span(start);
            return self.make_token(GraphQLTokenKind::Ellipsis, span);
        }

        let dots_start = self.curr_byte_offset;
        self.consume();
        if self.peek_char() == Some('.') {
            self.consume();
        }
        let raw = &self.source[dots_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(
            GraphQLTokenKind::error(format!("Unexpected `{raw}`"), raw),
            span,
        )
    }

    /// Lexes a name. `true`, `false` and `null` get their own kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let rest = self.remaining();
        let name_len = rest
            .find(|ch: char| !is_name_continue(ch))
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        self.advance_within_line(name);
        let span = self.make_span(start);

        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        self.make_token(kind, span)
    }

    /// Lexes an integer or float literal.
    ///
    /// This is deliberately lenient about leading zeros and trailing name
    /// characters: completion only cares that the cursor is inside a number.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
            let raw = &self.source[num_start..self.curr_byte_offset];
            let span = self.make_span(start);
            return self.make_token(
                GraphQLTokenKind::error("Unexpected `-`", raw),
                span,
            );
        }
        self.consume_digits();

        if self.peek_char() == Some('.')
            && matches!(self.peek_char_nth(1), Some(ch) if ch.is_ascii_digit()) {
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if let Some('e' | 'E') = self.peek_char() {
            is_float = true;
            self.consume();
            if let Some('+' | '-') = self.peek_char() {
                self.consume();
            }
            self.consume_digits();
        }

        let raw = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind = if is_float {
            GraphQLTokenKind::FloatValue(Cow::Borrowed(raw))
        } else {
            GraphQLTokenKind::IntValue(Cow::Borrowed(raw))
        };
        self.make_token(kind, span)
    }

    fn consume_digits(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.consume();
        }
    }

    /// Lexes a string literal (single-line or block string).
    ///
    /// A single-line string that hits a line terminator or the end of input is
    /// still emitted as a `StringValue` holding the text seen so far.
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;

        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => break,
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if !matches!(self.peek_char(), None | Some('\n') | Some('\r')) {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let raw = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::string_value_borrowed(raw), span)
    }

    fn lex_block_string(
        &mut self,
        start: SourcePosition,
        str_start: usize,
    ) -> GraphQLToken<'src> {
        self.advance_within_line("\"\"\"");

        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                break;
            } else if rest.starts_with("\\\"\"\"") {
                self.advance_within_line("\\\"\"\"");
            } else if rest.starts_with("\"\"\"") {
                self.advance_within_line("\"\"\"");
                break;
            } else {
                self.consume();
            }
        }

        let raw = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::string_value_borrowed(raw), span)
    }

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let char_start = self.curr_byte_offset;
        self.consume();
        let raw = &self.source[char_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(
            GraphQLTokenKind::error(format!("Unexpected character `{raw}`"), raw),
            span,
        )
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
