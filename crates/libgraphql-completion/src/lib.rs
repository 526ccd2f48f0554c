//! Completion-context resolution for GraphQL executable documents.
//!
//! Given some (possibly incomplete) GraphQL text and a cursor position, this
//! crate works out which type is in scope for field selection, which input
//! context is in scope for arguments, and what grammatical position the cursor
//! occupies. From that it produces an ordered list of
//! [`CompletionCandidate`](completion::CompletionCandidate)s.
//!
//! ```rust
//! use libgraphql_completion::completion::CompletionProvider;
//! use libgraphql_completion::completion::CompletionRequest;
//! use libgraphql_completion::completion::CursorPosition;
//! use libgraphql_completion::schema::SchemaBuilder;
//!
//! let schema = SchemaBuilder::new()
//!     .load_str(None, "type Query { user(id: ID): User } type User { name: String }")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let request = CompletionRequest::new(
//!     "query.graphql",
//!     "{ us",
//!     CursorPosition::new(0, 4),
//! );
//! let candidates = CompletionProvider::new(&schema).complete(&request);
//! assert!(candidates.iter().any(|c| c.label == "user"));
//! ```

pub mod completion;
pub mod schema;
mod source_position;
pub mod token;
pub mod token_source;
pub mod types;

pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
