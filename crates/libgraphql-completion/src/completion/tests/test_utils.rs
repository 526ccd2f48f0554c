use crate::completion::CompletionCandidate;
use crate::completion::CompletionProvider;
use crate::completion::CompletionRequest;
use crate::completion::ContextResolver;
use crate::completion::CursorPosition;
use crate::completion::ResolvedContext;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::token::GraphQLToken;
use crate::token_source::StrGraphQLTokenSource;
use std::sync::OnceLock;

/// Marks the cursor inside test documents. It is not valid GraphQL, so it can
/// never be confused with document text.
pub const CURSOR: char = '‸';

pub const TEST_SCHEMA_SDL: &str = r#"
"""The root query type."""
type Query {
  "Look up a user by id."
  user(id: ID!, includeDeleted: Boolean = false): User
  users(filter: UserFilter, first: Int): [User!]!
  node(id: ID!): Node
  search(term: String!): [SearchResult!]
}

type Mutation {
  createUser(input: CreateUserInput!): User
}

interface Node {
  id: ID!
}

"A registered user."
type User implements Node {
  id: ID!
  name: String
  "The user's email address."
  email: String
  friends: [User!]!
  posts: [Post]
}

type Post implements Node {
  id: ID!
  title: String!
  author: User
}

union SearchResult = User | Post

input UserFilter {
  name: String
  nameContains: String
  role: Role
}

input CreateUserInput {
  name: String!
  email: String
}

enum Role {
  ADMIN
  MEMBER
}

scalar DateTime
"#;

pub fn test_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        SchemaBuilder::new()
            .load_str(None, TEST_SCHEMA_SDL)
            .expect("test schema parses")
            .build()
            .expect("test schema builds")
    })
}

/// Removes the [`CURSOR`] marker from `marked` and returns the remaining text
/// along with the marker's position (columns in characters).
pub fn split_cursor(marked: &str) -> (String, CursorPosition) {
    let marker_offset = marked.find(CURSOR).expect("document has a cursor marker");
    let before = &marked[..marker_offset];
    let line = before.matches('\n').count();
    let column = before
        .rsplit('\n')
        .next()
        .unwrap_or(before)
        .chars()
        .count();
    let text = marked.replacen(CURSOR, "", 1);
    (text, CursorPosition::new(line, column))
}

pub fn lex(text: &str) -> Vec<GraphQLToken<'_>> {
    StrGraphQLTokenSource::new(text).collect()
}

pub fn resolve<'schema, 'src>(
    schema: &'schema Schema,
    tokens: &[GraphQLToken<'src>],
    cursor: CursorPosition,
) -> ResolvedContext<'schema, 'src> {
    ContextResolver::new(schema).resolve(tokens, cursor)
}

/// Completes a document containing a [`CURSOR`] marker against the test
/// schema.
pub fn complete(marked: &str) -> Vec<CompletionCandidate> {
    let (text, cursor) = split_cursor(marked);
    let request = CompletionRequest::new("test.graphql", text, cursor);
    CompletionProvider::new(test_schema()).complete(&request)
}

pub fn labels(candidates: &[CompletionCandidate]) -> Vec<&str> {
    candidates
        .iter()
        .map(|candidate| candidate.label.as_str())
        .collect()
}

/// Labels of the candidates for a document containing a [`CURSOR`] marker.
pub fn completion_labels(marked: &str) -> Vec<String> {
    labels(&complete(marked))
        .into_iter()
        .map(str::to_string)
        .collect()
}
