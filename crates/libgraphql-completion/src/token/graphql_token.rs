use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use crate::token::GraphQLTriviaToken;
use smallvec::SmallVec;

/// Type alias for trivia storage. Uses SmallVec to avoid heap allocation
/// for the common case of 0-2 trivia items per token.
pub type GraphQLTriviaTokenVec<'src> = SmallVec<[GraphQLTriviaToken<'src>; 2]>;

/// A GraphQL token with location (span) information and an ordered list of any
/// preceding trivia (comments, commas).
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token (including `Error` for lexer errors).
    pub kind: GraphQLTokenKind<'src>,

    /// Trivia (comments, commas) that precede this token.
    pub preceding_trivia: GraphQLTriviaTokenVec<'src>,

    /// The source location span of this token.
    pub span: GraphQLTokenSpan,
}

impl<'src> GraphQLToken<'src> {
    /// Convenience constructor for a token with no preceding trivia.
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLTokenSpan) -> Self {
        Self {
            kind,
            preceding_trivia: SmallVec::new(),
            span,
        }
    }

    /// The literal source text of this token.
    pub fn text(&self) -> &str {
        self.kind.text()
    }

    /// Returns `true` if a comma appeared between the previous token and this
    /// one.
    pub fn is_preceded_by_comma(&self) -> bool {
        self.preceding_trivia
            .iter()
            .any(|trivia| matches!(trivia, GraphQLTriviaToken::Comma { .. }))
    }
}
