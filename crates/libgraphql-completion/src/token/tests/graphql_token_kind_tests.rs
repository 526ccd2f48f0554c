use crate::token::GraphQLToken;
use crate::token::GraphQLTokenCategory;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use crate::token::GraphQLTriviaToken;
use crate::token::scalar_token_categories;
use crate::SourcePosition;
use std::borrow::Cow;

fn span(start_col: usize, end_col: usize) -> GraphQLTokenSpan {
    GraphQLTokenSpan::new(
        SourcePosition::new(0, start_col, start_col, start_col),
        SourcePosition::new(0, end_col, end_col, end_col),
    )
}

#[test]
fn scalar_token_categories_cover_literals_only() {
    let categories = scalar_token_categories();
    assert_eq!(categories.len(), 5);
    assert!(categories.contains(&GraphQLTokenCategory::StringLiteral));
    assert!(categories.contains(&GraphQLTokenCategory::IntLiteral));
    assert!(categories.contains(&GraphQLTokenCategory::FloatLiteral));
    assert!(categories.contains(&GraphQLTokenCategory::BooleanLiteral));
    assert!(categories.contains(&GraphQLTokenCategory::NullLiteral));
    assert!(!categories.contains(&GraphQLTokenCategory::Name));
}

#[test]
fn scalar_literal_classification() {
    assert!(GraphQLTokenKind::IntValue(Cow::Borrowed("1")).is_scalar_literal());
    assert!(GraphQLTokenKind::FloatValue(Cow::Borrowed("1.5")).is_scalar_literal());
    assert!(GraphQLTokenKind::string_value_borrowed("\"a\"").is_scalar_literal());
    assert!(GraphQLTokenKind::True.is_scalar_literal());
    assert!(GraphQLTokenKind::False.is_scalar_literal());
    assert!(GraphQLTokenKind::Null.is_scalar_literal());

    assert!(!GraphQLTokenKind::name_borrowed("user").is_scalar_literal());
    assert!(!GraphQLTokenKind::CurlyBraceOpen.is_scalar_literal());
    assert!(!GraphQLTokenKind::Eof.is_scalar_literal());
}

#[test]
fn text_returns_source_spelling() {
    assert_eq!(GraphQLTokenKind::Ellipsis.text(), "...");
    assert_eq!(GraphQLTokenKind::Dollar.text(), "$");
    assert_eq!(GraphQLTokenKind::name_owned("user".to_string()).text(), "user");
    assert_eq!(GraphQLTokenKind::Null.text(), "null");
    assert_eq!(GraphQLTokenKind::Eof.text(), "");
    assert_eq!(GraphQLTokenKind::error("Unexpected `..`", "..").text(), "..");
}

#[test]
fn only_eof_and_errors_are_inert() {
    assert!(GraphQLTokenKind::Eof.is_inert());
    assert!(GraphQLTokenKind::error("Unexpected character `?`", "?").is_inert());
    assert!(!GraphQLTokenKind::ParenClose.is_inert());
    assert!(!GraphQLTokenKind::name_borrowed("on").is_inert());
}

#[test]
fn as_name_only_answers_for_names() {
    assert_eq!(GraphQLTokenKind::name_borrowed("on").as_name(), Some("on"));
    assert_eq!(GraphQLTokenKind::True.as_name(), None);
    assert_eq!(GraphQLTokenKind::Colon.as_name(), None);
}

#[test]
fn is_preceded_by_comma_inspects_trivia() {
    let mut token = GraphQLToken::new(GraphQLTokenKind::Dollar, span(2, 3));
    assert!(!token.is_preceded_by_comma());

    token.preceding_trivia.push(GraphQLTriviaToken::Comment {
        value: Cow::Borrowed(" note"),
        span: span(0, 1),
    });
    assert!(!token.is_preceded_by_comma());

    token.preceding_trivia.push(GraphQLTriviaToken::Comma { span: span(1, 2) });
    assert!(token.is_preceded_by_comma());
}

#[test]
fn empty_spans() {
    assert!(span(4, 4).is_empty());
    assert!(!span(4, 5).is_empty());
}
