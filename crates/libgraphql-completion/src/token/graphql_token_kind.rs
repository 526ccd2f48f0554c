use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::OnceLock;

/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) store only the raw
/// source text.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: `StrGraphQLTokenSource`
/// borrows string slices directly from the source text using `Cow::Borrowed`.
/// Tokens built by hand (tests, other token sources) can use `Cow::Owned`
/// with a `'static` lifetime.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A GraphQL name/identifier. Keywords are names too; see
    /// [`GraphQLKeyword`](crate::token::GraphQLKeyword).
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including optional negative sign.
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including optional negative sign.
    FloatValue(Cow<'src, str>),

    /// Raw source text of a string literal, including quotes. Unterminated
    /// strings keep whatever text was present up to the end of the line (or
    /// document, for block strings).
    StringValue(Cow<'src, str>),

    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,

    /// End of input. Always zero-length.
    Eof,

    /// A lexer error. The lexer keeps going after emitting one of these, so a
    /// single stray character never hides the rest of the document.
    Error {
        /// A human-readable error message.
        message: String,
        /// The offending source text.
        raw: Cow<'src, str>,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    /// Create a `Name` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create a `Name` token from an owned `String`.
    #[inline]
    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    /// Create a `StringValue` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn string_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::StringValue(Cow::Borrowed(s))
    }

    /// Create an `Error` token.
    #[inline]
    pub fn error(message: impl Into<String>, raw: &'src str) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            raw: Cow::Borrowed(raw),
        }
    }

    /// The literal text this token was lexed from.
    ///
    /// Punctuators return their fixed spelling and `Eof` returns `""`.
    pub fn text(&self) -> &str {
        match self {
            Self::Ampersand => "&",
            Self::At => "@",
            Self::Bang => "!",
            Self::Colon => ":",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::Dollar => "$",
            Self::Ellipsis => "...",
            Self::Equals => "=",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::Pipe => "|",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
            Self::Name(text)
                | Self::IntValue(text)
                | Self::FloatValue(text)
                | Self::StringValue(text) => text.as_ref(),
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::Eof => "",
            Self::Error { raw, .. } => raw.as_ref(),
        }
    }

    /// Returns the name text if this is a `Name` token.
    pub fn as_name(&self) -> Option<&str> {
        if let Self::Name(name) = self {
            Some(name.as_ref())
        } else {
            None
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        matches!(
            self,
            Self::Ampersand
                | Self::At
                | Self::Bang
                | Self::Colon
                | Self::CurlyBraceClose
                | Self::CurlyBraceOpen
                | Self::Dollar
                | Self::Ellipsis
                | Self::Equals
                | Self::ParenClose
                | Self::ParenOpen
                | Self::Pipe
                | Self::SquareBracketClose
                | Self::SquareBracketOpen
        )
    }

    /// Returns `true` for the tokens that neither the trackers nor the scope
    /// stacks react to (`Eof` and lexer errors).
    pub fn is_inert(&self) -> bool {
        matches!(self, Self::Eof | Self::Error { .. })
    }

    /// The coarse category of this token.
    pub fn category(&self) -> GraphQLTokenCategory {
        match self {
            Self::Name(_) => GraphQLTokenCategory::Name,
            Self::IntValue(_) => GraphQLTokenCategory::IntLiteral,
            Self::FloatValue(_) => GraphQLTokenCategory::FloatLiteral,
            Self::StringValue(_) => GraphQLTokenCategory::StringLiteral,
            Self::True | Self::False => GraphQLTokenCategory::BooleanLiteral,
            Self::Null => GraphQLTokenCategory::NullLiteral,
            Self::Eof => GraphQLTokenCategory::Eof,
            Self::Error { .. } => GraphQLTokenCategory::Error,
            _ => GraphQLTokenCategory::Punctuator,
        }
    }

    /// Returns `true` if this token is a scalar literal (string, number,
    /// boolean or null). The cursor sitting in one of these is never a
    /// completable position.
    pub fn is_scalar_literal(&self) -> bool {
        scalar_token_categories().contains(&self.category())
    }
}

/// Coarse classification of [`GraphQLTokenKind`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenCategory {
    BooleanLiteral,
    Eof,
    Error,
    FloatLiteral,
    IntLiteral,
    Name,
    NullLiteral,
    Punctuator,
    StringLiteral,
}

/// The set of token categories that represent scalar literal values.
pub fn scalar_token_categories() -> &'static HashSet<GraphQLTokenCategory> {
    static CATEGORIES: OnceLock<HashSet<GraphQLTokenCategory>> = OnceLock::new();
    CATEGORIES.get_or_init(|| {
        HashSet::from([
            GraphQLTokenCategory::BooleanLiteral,
            GraphQLTokenCategory::FloatLiteral,
            GraphQLTokenCategory::IntLiteral,
            GraphQLTokenCategory::NullLiteral,
            GraphQLTokenCategory::StringLiteral,
        ])
    })
}
