use crate::completion::ColumnEncoding;
use crate::completion::CompletionCandidate;
use crate::completion::CompletionCandidateKind;
use crate::completion::CompletionProvider;
use crate::completion::CompletionRequest;
use crate::completion::CursorPosition;
use crate::completion::FileExtensionRegionGate;
use crate::completion::QueryLanguageRegion;
use crate::completion::tests::test_utils::completion_labels;
use crate::completion::tests::test_utils::labels;
use crate::completion::tests::test_utils::split_cursor;
use crate::completion::tests::test_utils::test_schema;
use rayon::prelude::*;
use std::path::Path;

fn request(path: &str, marked: &str) -> CompletionRequest {
    let (text, cursor) = split_cursor(marked);
    CompletionRequest::new(path, text, cursor)
}

#[test]
fn graphql_files_are_completed() {
    let provider = CompletionProvider::new(test_schema());
    for path in ["a.graphql", "schema/b.graphqls", "c.gql", "UPPER.GRAPHQL"] {
        let candidates = provider.complete(&request(path, "{ us‸"));
        assert_eq!(labels(&candidates), vec!["user", "users"], "{path}");
    }
}

#[test]
fn other_files_are_outside_the_region() {
    let provider = CompletionProvider::new(test_schema());
    assert!(provider.complete(&request("query.ts", "{ us‸")).is_empty());
    assert!(provider.complete(&request("no_extension", "{ us‸")).is_empty());
}

#[test]
fn closures_are_region_gates() {
    let provider = CompletionProvider::new(test_schema())
        .with_region_gate(|_path: &Path, text: &str, _position: CursorPosition| {
            text.starts_with('{')
        });

    let in_region = provider.complete(&request("component.tsx", "{ us‸"));
    assert_eq!(labels(&in_region), vec!["user", "users"]);

    let out_of_region = provider.complete(&request("component.tsx", " { us‸"));
    assert!(out_of_region.is_empty());
}

#[test]
fn file_extension_gate_normalizes_extensions() {
    let gate = FileExtensionRegionGate::new([".GQL", "graphql"]);
    assert_eq!(gate.extensions(), ["gql", "graphql"]);

    let cursor = CursorPosition::new(0, 0);
    assert!(gate.is_query_language_region(Path::new("a.gql"), "", cursor));
    assert!(gate.is_query_language_region(Path::new("a.Gql"), "", cursor));
    assert!(gate.is_query_language_region(Path::new("dir/a.graphql"), "", cursor));
    assert!(!gate.is_query_language_region(Path::new("a.graphqls"), "", cursor));
    assert!(!gate.is_query_language_region(Path::new("gql"), "", cursor));
}

#[test]
fn default_gate_uses_default_extensions() {
    assert_eq!(
        FileExtensionRegionGate::default().extensions(),
        FileExtensionRegionGate::DEFAULT_EXTENSIONS,
    );
}

#[test]
fn repeated_requests_yield_identical_results() {
    let provider = CompletionProvider::new(test_schema());
    let request = request("q.graphql", "query Q($id: ID!) { user(id: $id) { ‸ } }");
    let first = provider.complete(&request);
    assert!(!first.is_empty());
    for _ in 0..5 {
        assert_eq!(provider.complete(&request), first);
    }
}

#[test]
fn concurrent_requests_share_one_schema() {
    let documents = [
        "{ ‸ }",
        "{ user(‸) }",
        "{ user { ... on ‸ } }",
        "query Q($id: ‸",
        "fragment F on ‸",
        "mu‸",
        "query Q($first: Int) { users(first: $‸) }",
        "{ users(filter: { ‸ }) }",
    ];
    let serial: Vec<Vec<String>> = documents
        .iter()
        .map(|marked| completion_labels(marked))
        .collect();

    let provider = CompletionProvider::new(test_schema());
    let parallel: Vec<Vec<String>> = documents
        .par_iter()
        .map(|marked| {
            provider
                .complete(&request("doc.graphql", marked))
                .into_iter()
                .map(|candidate| candidate.label)
                .collect()
        })
        .collect();

    assert_eq!(parallel, serial);
}

#[test]
fn utf16_columns_account_for_surrogate_pairs() {
    // The emoji is one char but two UTF-16 code units.
    let text = "{ user(id: \"😀\") { na";
    let provider = CompletionProvider::new(test_schema());

    let utf16 = CompletionRequest::new("q.graphql", text, CursorPosition::new(0, 21))
        .with_column_encoding(ColumnEncoding::Utf16CodeUnits);
    assert_eq!(labels(&provider.complete(&utf16)), vec!["name", "__typename"]);

    let chars = CompletionRequest::new("q.graphql", text, CursorPosition::new(0, 20));
    assert_eq!(labels(&provider.complete(&chars)), vec!["name", "__typename"]);
}

#[test]
fn multi_line_documents() {
    assert_eq!(
        completion_labels("query {\n  user(id: 1) {\n    ‸\n  }\n}\n"),
        vec!["id", "name", "email", "friends", "posts", "__typename"],
    );
}

#[test]
fn candidates_serialize_for_editors() {
    let candidate = CompletionCandidate::new("id", CompletionCandidateKind::Argument)
        .with_detail("ID!")
        .with_insert_text("id:");
    assert_eq!(
        serde_json::to_value(&candidate).unwrap(),
        serde_json::json!({
            "label": "id",
            "detail": "ID!",
            "kind": "argument",
            "insert_text": "id:",
        }),
    );
}

#[test]
fn provider_debug_names_the_schema_root() {
    let provider = CompletionProvider::new(test_schema());
    assert!(format!("{provider:?}").contains("Query"));
}
