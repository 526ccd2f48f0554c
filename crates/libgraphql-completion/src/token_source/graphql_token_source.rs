use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]).
///
/// The completion resolver only needs an ordered, already-materialized slice
/// of tokens, so any lexer can feed it. Implementors are responsible for:
/// - Skipping whitespace
/// - Attaching trivia (comments, commas) to the next token
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   rather than stopping on bad input
/// - Emitting a final
///   [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof) token
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
