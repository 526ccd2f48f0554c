use crate::token::GraphQLTokenSpan;
use std::borrow::Cow;

/// A "trivia token" is a token that doesn't affect the grammar but is still
/// preserved.
///
/// Trivia is attached to the following token as "preceding trivia". The
/// variable-definition tracker relies on comma trivia to know that one
/// variable definition has ended and another may begin.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTriviaToken<'src> {
    /// A GraphQL comment, which starts with `#` and extends to the end of the
    /// line.
    Comment {
        /// The comment text (excluding the leading `#`).
        value: Cow<'src, str>,
        span: GraphQLTokenSpan,
    },

    /// A comma separator. Commas are insignificant in GraphQL but are kept so
    /// consumers can observe list boundaries.
    Comma {
        span: GraphQLTokenSpan,
    },
}
