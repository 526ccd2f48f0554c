use crate::completion::ColumnEncoding;
use crate::completion::CompletionCandidate;
use crate::completion::ContextResolver;
use crate::completion::CursorPosition;
use crate::completion::FileExtensionRegionGate;
use crate::completion::QueryLanguageRegion;
use crate::completion::SuggestionBuilder;
use crate::schema::Schema;
use crate::token::GraphQLToken;
use crate::token_source::StrGraphQLTokenSource;
use std::path::PathBuf;

/// A single completion request: a document and a cursor inside it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompletionRequest {
    pub column_encoding: ColumnEncoding,
    pub file_path: PathBuf,
    pub position: CursorPosition,
    pub text: String,
}

impl CompletionRequest {
    pub fn new(
        file_path: impl Into<PathBuf>,
        text: impl Into<String>,
        position: CursorPosition,
    ) -> Self {
        Self {
            column_encoding: ColumnEncoding::default(),
            file_path: file_path.into(),
            position,
            text: text.into(),
        }
    }

    pub fn with_column_encoding(mut self, column_encoding: ColumnEncoding) -> Self {
        self.column_encoding = column_encoding;
        self
    }
}

/// Entry point for computing completions against one [`Schema`].
///
/// A provider holds no per-request state; [`complete()`](Self::complete) may
/// be called any number of times, from any number of threads.
pub struct CompletionProvider<'schema> {
    region_gate: Box<dyn QueryLanguageRegion + Send + Sync + 'schema>,
    schema: &'schema Schema,
}

impl<'schema> CompletionProvider<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            region_gate: Box::new(FileExtensionRegionGate::default()),
            schema,
        }
    }

    pub fn with_region_gate(
        mut self,
        region_gate: impl QueryLanguageRegion + Send + Sync + 'schema,
    ) -> Self {
        self.region_gate = Box::new(region_gate);
        self
    }

    pub fn complete(&self, request: &CompletionRequest) -> Vec<CompletionCandidate> {
        if !self.is_query_language_region(request) {
            log::debug!(
                "{:?} at {:?} is outside of any GraphQL region",
                request.file_path,
                request.position,
            );
            return vec![];
        }

        let tokens: Vec<GraphQLToken<'_>> =
            StrGraphQLTokenSource::new(request.text.as_str()).collect();
        let context = ContextResolver::new(self.schema)
            .with_column_encoding(request.column_encoding)
            .resolve(tokens.as_slice(), request.position);
        let candidates = SuggestionBuilder::new(self.schema).build(&context);

        log::debug!(
            "{} completion candidates for {:?} at {:?}",
            candidates.len(),
            request.file_path,
            request.position,
        );
        candidates
    }

    fn is_query_language_region(&self, request: &CompletionRequest) -> bool {
        self.region_gate.is_query_language_region(
            request.file_path.as_path(),
            request.text.as_str(),
            request.position,
        )
    }
}

impl std::fmt::Debug for CompletionProvider<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionProvider")
            .field("schema", &self.schema.query_type().name())
            .finish_non_exhaustive()
    }
}
