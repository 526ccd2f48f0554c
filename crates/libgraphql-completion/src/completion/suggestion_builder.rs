use crate::completion::CandidateFilter;
use crate::completion::CompletionCandidate;
use crate::completion::CompletionCandidateKind;
use crate::completion::FragmentDefinitionState;
use crate::completion::FragmentSpreadState;
use crate::completion::InputScope;
use crate::completion::ResolvedContext;
use crate::completion::VariableDefinitionState;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::token::GraphQLKeyword;
use crate::types::Field;
use crate::types::GraphQLType;

/// Which kind of suggestions a [`ResolvedContext`] calls for. Exactly one
/// applies to any context; see [`SuggestionPolicy::select()`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SuggestionPolicy {
    /// The cursor is inside a string, number, boolean or `null`.
    ScalarLiteral,
    /// The declared type of a variable definition.
    VariableType,
    /// The type condition of an inline fragment (`... on |`).
    InlineFragmentType,
    /// The type condition of a fragment definition (`fragment F on |`).
    FragmentDefinitionType,
    /// A variable usage (`$|`).
    VariableUsage,
    /// An argument name (`user(|`) or an input object field name.
    Argument,
    /// Document top level: operation keywords and `fragment`.
    RootKeyword,
    /// A field of the type in scope.
    Field,
    Nothing,
}

impl SuggestionPolicy {
    pub fn select(context: &ResolvedContext<'_, '_>) -> Self {
        let variable_state = context.variables().state();
        let spread_state = context.fragment_spread().state();
        let definition_state = context.fragment_definition().state();

        if context.cursor_token().is_some_and(|token| token.kind.is_scalar_literal()) {
            Self::ScalarLiteral
        } else if context.variables().in_definitions()
            && matches!(
                variable_state,
                VariableDefinitionState::Colon | VariableDefinitionState::TypeName,
            ) {
            Self::VariableType
        } else if matches!(spread_state, FragmentSpreadState::On | FragmentSpreadState::TypeName) {
            Self::InlineFragmentType
        } else if matches!(
            definition_state,
            FragmentDefinitionState::On | FragmentDefinitionState::TypeName,
        ) {
            Self::FragmentDefinitionType
        } else if context.variables().ended()
            && matches!(
                variable_state,
                VariableDefinitionState::Sigil | VariableDefinitionState::Name,
            ) {
            Self::VariableUsage
        } else if context.input_context().is_some() && context.selection_locked() {
            Self::Argument
        } else if context.selection_context().is_none()
            && !context.selection_locked()
            && !context.variables().in_definitions() {
            Self::RootKeyword
        } else if context.selection_context().is_some() {
            Self::Field
        } else {
            Self::Nothing
        }
    }
}

/// Turns a [`ResolvedContext`] into the list of candidates to offer.
#[derive(Clone, Copy, Debug)]
pub struct SuggestionBuilder<'schema> {
    schema: &'schema Schema,
}

impl<'schema> SuggestionBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    pub fn build(&self, context: &ResolvedContext<'schema, '_>) -> Vec<CompletionCandidate> {
        let filter = CandidateFilter::from_cursor_token(context.cursor_token());
        let policy = SuggestionPolicy::select(context);
        log::trace!("suggestion policy: {policy:?} (filter: {filter:?})");

        match policy {
            SuggestionPolicy::ScalarLiteral | SuggestionPolicy::Nothing => vec![],

            SuggestionPolicy::VariableType => {
                // Nothing typed yet after the `:`.
                let filter = match context.variables().state() {
                    VariableDefinitionState::TypeName => filter,
                    _ => CandidateFilter::vacuous(),
                };
                self.type_candidates(
                    self.schema.input_type_names(),
                    &filter,
                )
            },

            SuggestionPolicy::InlineFragmentType => {
                let filter = match context.fragment_spread().state() {
                    FragmentSpreadState::TypeName => filter,
                    _ => CandidateFilter::vacuous(),
                };
                let compatible_type_names = self.schema
                    .selectable_type_names()
                    .into_iter()
                    .filter(|type_name| match context.selection_context() {
                        Some(selection_type) => self.is_compatible(type_name, selection_type),
                        None => true,
                    })
                    .collect();
                self.type_candidates(compatible_type_names, &filter)
            },

            SuggestionPolicy::FragmentDefinitionType => {
                let filter = match context.fragment_definition().state() {
                    FragmentDefinitionState::TypeName => filter,
                    _ => CandidateFilter::vacuous(),
                };
                self.type_candidates(self.schema.selectable_type_names(), &filter)
            },

            SuggestionPolicy::VariableUsage => {
                let sigil_only = context.cursor_token()
                    .is_some_and(|token| token.text() == "$");
                context.variables()
                    .defined_variable_types()
                    .iter()
                    .map(|(name, type_text)| (format!("${name}"), name, type_text))
                    .filter(|(label, _, _)| sigil_only || filter.matches(label))
                    .map(|(label, name, type_text)| {
                        CompletionCandidate::new(label, CompletionCandidateKind::Variable)
                            .with_detail(type_text.as_str())
                            .with_insert_text(name.as_str())
                    })
                    .collect()
            },

            SuggestionPolicy::Argument => match context.input_context() {
                Some(input_scope) => argument_candidates(input_scope),
                None => vec![],
            },

            SuggestionPolicy::RootKeyword => self.keyword_candidates(&filter),

            SuggestionPolicy::Field => match context.selection_context() {
                Some(selection_type) => field_candidates(selection_type, &filter),
                None => vec![],
            },
        }
    }

    fn is_compatible(&self, type_name: &str, selection_type: &GraphQLType) -> bool {
        self.schema
            .type_by_name(type_name)
            .is_some_and(|candidate_type| {
                self.schema.is_subtype(candidate_type, selection_type)
                    || self.schema.is_subtype(selection_type, candidate_type)
            })
    }

    fn keyword_candidates(&self, filter: &CandidateFilter) -> Vec<CompletionCandidate> {
        let mut candidates: Vec<CompletionCandidate> = OperationKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let root_type = self.schema.root_operation_type(kind)?;
                let keyword = kind.keyword().as_str();
                filter.matches(keyword).then(|| {
                    CompletionCandidate::new(keyword, CompletionCandidateKind::Keyword)
                        .with_detail(root_type.name())
                })
            })
            .collect();

        let fragment_keyword = GraphQLKeyword::Fragment.as_str();
        if filter.matches(fragment_keyword) {
            candidates.push(
                CompletionCandidate::new(fragment_keyword, CompletionCandidateKind::Keyword),
            );
        }

        candidates
    }

    fn type_candidates(
        &self,
        type_names: Vec<&str>,
        filter: &CandidateFilter,
    ) -> Vec<CompletionCandidate> {
        type_names
            .into_iter()
            .filter(|type_name| filter.matches(type_name))
            .filter_map(|type_name| self.schema.type_by_name(type_name))
            .map(|type_| {
                CompletionCandidate::new(type_.name(), CompletionCandidateKind::Type)
                    .with_detail(type_.kind().category_name())
                    .with_documentation(type_.description().map(str::to_string))
            })
            .collect()
    }
}

fn argument_candidates(input_scope: InputScope<'_>) -> Vec<CompletionCandidate> {
    let Some(arguments) = input_scope.arguments() else {
        return vec![];
    };

    arguments
        .values()
        .map(|arg| {
            CompletionCandidate::new(arg.name(), CompletionCandidateKind::Argument)
                .with_detail(arg.type_annotation().to_string())
                .with_documentation(arg.description().map(str::to_string))
                .with_insert_text(format!("{}:", arg.name()))
        })
        .collect()
}

fn field_candidates(
    owner: &GraphQLType,
    filter: &CandidateFilter,
) -> Vec<CompletionCandidate> {
    let Some(fields) = owner.fields() else {
        return vec![];
    };

    fields
        .values()
        .filter(|field| filter.matches(field.name()))
        .map(|field| {
            CompletionCandidate::new(field.name(), CompletionCandidateKind::Field)
                .with_detail(format!("{}.{}", owner.name(), field.name()))
                .with_documentation(Some(field_documentation(field)))
        })
        .collect()
}

fn field_documentation(field: &Field) -> String {
    match field.description() {
        Some(description) => format!("{description}\n\n{}", field.type_annotation()),
        None => field.type_annotation().to_string(),
    }
}
