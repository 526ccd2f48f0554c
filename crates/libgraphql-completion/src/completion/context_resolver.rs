use crate::completion::ColumnEncoding;
use crate::completion::CursorPosition;
use crate::completion::FragmentDefinitionState;
use crate::completion::FragmentDefinitionTracker;
use crate::completion::FragmentSpreadState;
use crate::completion::FragmentSpreadTracker;
use crate::completion::InputScope;
use crate::completion::ScopeStack;
use crate::completion::VariableDefinitionTracker;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::token::GraphQLKeyword;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::types::GraphQLType;

/// Everything known about the cursor's surroundings after scanning the
/// document up to the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedContext<'schema, 'src> {
    pub(crate) aborted: bool,
    pub(crate) cursor_token: Option<GraphQLToken<'src>>,
    pub(crate) fragment_definition: FragmentDefinitionTracker,
    pub(crate) fragment_spread: FragmentSpreadTracker,
    pub(crate) input_context: Option<InputScope<'schema>>,
    pub(crate) selection_context: Option<&'schema GraphQLType>,
    pub(crate) selection_locked: bool,
    pub(crate) variables: VariableDefinitionTracker,
}

impl<'schema, 'src> ResolvedContext<'schema, 'src> {
    /// `true` when the scan stopped at a token that starts at or after the
    /// cursor (the cursor sits in whitespace or past the last token).
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    /// The token the cursor is inside of (or just after), if any.
    pub fn cursor_token(&self) -> Option<&GraphQLToken<'src>> {
        self.cursor_token.as_ref()
    }

    pub fn fragment_definition(&self) -> &FragmentDefinitionTracker {
        &self.fragment_definition
    }

    pub fn fragment_spread(&self) -> &FragmentSpreadTracker {
        &self.fragment_spread
    }

    /// What argument names resolve against at the cursor.
    pub fn input_context(&self) -> Option<InputScope<'schema>> {
        self.input_context
    }

    /// The type whose fields are selectable at the cursor.
    pub fn selection_context(&self) -> Option<&'schema GraphQLType> {
        self.selection_context
    }

    /// `true` inside an argument list, where field selection is suspended.
    pub fn selection_locked(&self) -> bool {
        self.selection_locked
    }

    pub fn variables(&self) -> &VariableDefinitionTracker {
        &self.variables
    }
}

/// Scans a token stream up to a cursor and reconstructs the type context in
/// effect there.
///
/// The scan never fails: names the schema does not know are skipped,
/// unbalanced braces leave the stacks shallower or deeper than they should be,
/// and a cursor past the end of the document resolves against the state after
/// the last token.
#[derive(Clone, Copy, Debug)]
pub struct ContextResolver<'schema> {
    column_encoding: ColumnEncoding,
    schema: &'schema Schema,
}

impl<'schema> ContextResolver<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            column_encoding: ColumnEncoding::default(),
            schema,
        }
    }

    pub fn with_column_encoding(mut self, column_encoding: ColumnEncoding) -> Self {
        self.column_encoding = column_encoding;
        self
    }

    pub fn resolve<'src>(
        &self,
        tokens: &[GraphQLToken<'src>],
        cursor: CursorPosition,
    ) -> ResolvedContext<'schema, 'src> {
        let cursor = cursor.as_tuple();
        let mut scan = ScanState::new(self.schema);
        let mut aborted = false;
        let mut cursor_token = None;

        for token in tokens {
            let start = self.column_encoding.line_and_column(&token.span.start_inclusive);
            let end = self.column_encoding.line_and_column(&token.span.end_exclusive);

            if start >= cursor {
                log::trace!(
                    "token `{}` at {start:?} starts at or past the cursor {cursor:?}",
                    token.text(),
                );
                aborted = true;
                break;
            }

            scan.consume(token);

            if !token.span.is_empty() && start < cursor && cursor <= end {
                log::trace!("cursor {cursor:?} is inside token `{}`", token.text());
                cursor_token = Some(token.clone());
                break;
            }
        }

        scan.into_resolved(aborted, cursor_token)
    }
}

/// Mutable state of a single scan.
struct ScanState<'schema> {
    fragment_definition: FragmentDefinitionTracker,
    fragment_spread: FragmentSpreadTracker,
    input_stack: ScopeStack<InputScope<'schema>>,
    schema: &'schema Schema,
    self_stack: ScopeStack<&'schema GraphQLType>,
    variables: VariableDefinitionTracker,
}

impl<'schema> ScanState<'schema> {
    fn new(schema: &'schema Schema) -> Self {
        let mut self_stack = ScopeStack::new();
        self_stack.stage(schema.query_type());

        Self {
            fragment_definition: FragmentDefinitionTracker::new(),
            fragment_spread: FragmentSpreadTracker::new(),
            input_stack: ScopeStack::new(),
            schema,
            self_stack,
            variables: VariableDefinitionTracker::new(),
        }
    }

    fn at_document_top_level(&self) -> bool {
        self.self_stack.is_empty() && !self.self_stack.is_locked()
    }

    fn consume(&mut self, token: &GraphQLToken<'_>) {
        // Trackers run first so that name resolution below sees the state
        // that includes this token.
        self.variables = std::mem::take(&mut self.variables).consume(token);
        self.fragment_definition =
            std::mem::take(&mut self.fragment_definition).consume(token);
        self.fragment_spread = std::mem::take(&mut self.fragment_spread).consume(token);

        match &token.kind {
            GraphQLTokenKind::CurlyBraceOpen => {
                self.self_stack.commit();
                self.input_stack.commit();
            },
            GraphQLTokenKind::CurlyBraceClose => {
                self.self_stack.pop();
                self.input_stack.pop();
            },
            GraphQLTokenKind::ParenOpen => {
                self.self_stack.lock();
                self.input_stack.commit();
            },
            GraphQLTokenKind::ParenClose => {
                self.self_stack.unlock();
                self.input_stack.pop();
            },
            GraphQLTokenKind::Name(name) => self.consume_name(name),
            _ => (),
        }
    }

    fn consume_name(&mut self, name: &str) {
        let schema = self.schema;
        if self.at_document_top_level() {
            match GraphQLKeyword::from_name(name) {
                Some(keyword) if keyword.is_operation_type() => {
                    let root_type = OperationKind::from_keyword(keyword)
                        .and_then(|kind| schema.root_operation_type(kind));
                    match root_type {
                        Some(root_type) => self.self_stack.stage(root_type),
                        None => self.self_stack.unstage(),
                    }
                    return;
                },
                Some(GraphQLKeyword::Fragment) => {
                    // The type condition decides what the body selects from.
                    self.self_stack.unstage();
                    return;
                },
                _ => (),
            }
        }

        let selected_field = self.self_stack.top()
            .copied()
            .and_then(|type_| type_.field(name));
        let input_argument = self.input_stack.top()
            .copied()
            .and_then(|scope| scope.argument(name));

        if let Some(field) = selected_field {
            let return_type_name = field.type_annotation().innermost_type_name();
            match schema.type_by_name(return_type_name) {
                Some(return_type) => self.self_stack.stage(return_type),
                None => self.self_stack.unstage(),
            }
            self.input_stack.stage(InputScope::Field(field));
        } else if let Some(argument) = input_argument {
            let arg_type_name = argument.type_annotation().innermost_type_name();
            match schema.type_by_name(arg_type_name) {
                Some(arg_type) => self.input_stack.stage(InputScope::Type(arg_type)),
                None => self.input_stack.unstage(),
            }
        } else if self.fragment_definition.state() == FragmentDefinitionState::TypeName
            && let Some(type_condition) = schema.type_by_name(name) {
            self.self_stack.stage(type_condition);
        } else if self.fragment_spread.state() == FragmentSpreadState::TypeName
            && let Some(type_condition) = schema.type_by_name(name) {
            self.self_stack.stage(type_condition);
        }
    }

    fn into_resolved<'src>(
        self,
        aborted: bool,
        cursor_token: Option<GraphQLToken<'src>>,
    ) -> ResolvedContext<'schema, 'src> {
        ResolvedContext {
            aborted,
            cursor_token,
            fragment_definition: self.fragment_definition,
            fragment_spread: self.fragment_spread,
            input_context: self.input_stack.top().copied(),
            selection_context: self.self_stack.top().copied(),
            selection_locked: self.self_stack.is_locked(),
            variables: self.variables,
        }
    }
}
