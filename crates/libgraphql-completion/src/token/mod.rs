//! Token types produced by GraphQL lexers and consumed by the completion
//! resolver.

mod graphql_keyword;
mod graphql_token;
mod graphql_token_kind;
mod graphql_token_span;
mod graphql_trivia_token;

pub use graphql_keyword::GraphQLKeyword;
pub use graphql_token::GraphQLToken;
pub use graphql_token::GraphQLTriviaTokenVec;
pub use graphql_token_kind::GraphQLTokenCategory;
pub use graphql_token_kind::GraphQLTokenKind;
pub use graphql_token_kind::scalar_token_categories;
pub use graphql_token_span::GraphQLTokenSpan;
pub use graphql_trivia_token::GraphQLTriviaToken;

#[cfg(test)]
mod tests;
