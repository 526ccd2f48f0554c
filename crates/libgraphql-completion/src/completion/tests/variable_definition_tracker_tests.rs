use crate::completion::VariableDefinitionState;
use crate::completion::VariableDefinitionTracker;
use crate::completion::tests::test_utils::lex;

fn track(source: &str) -> VariableDefinitionTracker {
    lex(source)
        .iter()
        .fold(VariableDefinitionTracker::new(), |tracker, token| tracker.consume(token))
}

#[test]
fn records_declared_variables_with_their_types() {
    let tracker = track("query Q($id: ID!, $ids: [ID!]!, $first: Int = 10) {");
    assert!(tracker.ended());
    assert_eq!(tracker.defined_variables(), vec!["id", "ids", "first"]);

    let types = tracker.defined_variable_types();
    assert_eq!(types.get("id").map(String::as_str), Some("ID!"));
    assert_eq!(types.get("ids").map(String::as_str), Some("[ID!]!"));
    assert_eq!(types.get("first").map(String::as_str), Some("Int"));
}

#[test]
fn anonymous_operation_with_definitions() {
    let tracker = track("query ($a: String) { a }");
    assert_eq!(tracker.defined_variables(), vec!["a"]);
    assert!(tracker.ended());
}

#[test]
fn states_through_a_definition() {
    let steps = [
        ("query Q(", VariableDefinitionState::Idle),
        ("query Q($", VariableDefinitionState::Sigil),
        ("query Q($id", VariableDefinitionState::Name),
        ("query Q($id:", VariableDefinitionState::Colon),
        ("query Q($id: [", VariableDefinitionState::Colon),
        ("query Q($id: [ID", VariableDefinitionState::TypeName),
        ("query Q($id: [ID!]", VariableDefinitionState::TypeName),
        ("query Q($id: [ID!] =", VariableDefinitionState::Idle),
    ];
    for (source, expected) in steps {
        let tracker = track(source);
        assert_eq!(tracker.state(), expected, "{source}");
        assert!(tracker.in_definitions(), "{source}");
        assert!(!tracker.ended(), "{source}");
    }
}

#[test]
fn comma_starts_a_new_definition() {
    let tracker = track("query Q($a: Int, b");
    assert_eq!(tracker.state(), VariableDefinitionState::Idle);
    assert_eq!(tracker.defined_variables(), vec!["a"]);
}

#[test]
fn closing_paren_ends_the_definitions() {
    let tracker = track("query Q($a: Int)");
    assert!(tracker.ended());
    assert!(!tracker.in_definitions());
    assert_eq!(tracker.state(), VariableDefinitionState::Idle);
}

#[test]
fn operation_body_without_definitions_ends_them() {
    assert!(!track("query Q").ended());
    assert!(track("query Q {").ended());
    assert!(track("{").ended());
}

#[test]
fn variable_usage_after_definitions() {
    let tracker = track("query Q($id: ID!) { user(id: $");
    assert!(tracker.ended());
    assert_eq!(tracker.state(), VariableDefinitionState::Sigil);

    let tracker = track("query Q($id: ID!) { user(id: $i");
    assert_eq!(tracker.state(), VariableDefinitionState::Name);

    let tracker = track("query Q($id: ID!) { user(id: $id)");
    assert_eq!(tracker.state(), VariableDefinitionState::Idle);
}

#[test]
fn arguments_inside_the_body_are_not_definitions() {
    let tracker = track("query Q($id: ID!) { user(id: $id, x: Int");
    assert!(!tracker.in_definitions());
    assert_eq!(tracker.defined_variables(), vec!["id"]);
}

#[test]
fn redeclaration_overwrites_the_type() {
    let tracker = track("query Q($a: Int, $a: String) {");
    assert_eq!(tracker.defined_variables(), vec!["a"]);
    assert_eq!(
        tracker.defined_variable_types().get("a").map(String::as_str),
        Some("String"),
    );
}

#[test]
fn default_object_values_do_not_end_the_definitions() {
    let tracker = track("query Q($f: UserFilter = { name: \"x\" }, $b: Int");
    assert!(tracker.in_definitions());
    assert!(!tracker.ended());
    assert_eq!(tracker.defined_variables(), vec!["f", "b"]);
}

#[test]
fn each_operation_has_its_own_variables() {
    let tracker = track(concat!(
        "query A($a: Int) { x }\n",
        "query B($b: Int) { y(v: $",
    ));
    assert_eq!(tracker.defined_variables(), vec!["b"]);
    assert_eq!(tracker.state(), VariableDefinitionState::Sigil);
}

#[test]
fn fields_named_like_keywords_do_not_start_operations() {
    let tracker = track("query A($a: Int) { query mutation(x: $");
    assert_eq!(tracker.defined_variables(), vec!["a"]);
    assert!(tracker.ended());
}

#[test]
fn eof_and_errors_are_ignored() {
    let tracker = track("query Q($");
    assert_eq!(tracker.state(), VariableDefinitionState::Sigil);

    let tracker = track("query Q($ ?");
    assert_eq!(tracker.state(), VariableDefinitionState::Sigil);
}
