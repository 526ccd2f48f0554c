//! Cursor-context resolution and completion candidates.
//!
//! [`ContextResolver`] scans the tokens before the cursor, maintaining two
//! [`ScopeStack`]s (the type fields are selected from, and the context
//! arguments are resolved against) along with three small trackers for the
//! grammatical position of the cursor. [`SuggestionBuilder`] turns the result
//! into [`CompletionCandidate`]s. [`CompletionProvider`] wires it all up.

mod candidate_filter;
mod completion_candidate;
mod completion_provider;
mod context_resolver;
mod cursor_position;
mod fragment_definition_tracker;
mod fragment_spread_tracker;
mod input_scope;
mod region_gate;
mod scope_stack;
mod suggestion_builder;
mod variable_definition_tracker;

pub use candidate_filter::CandidateFilter;
pub use completion_candidate::CompletionCandidate;
pub use completion_candidate::CompletionCandidateKind;
pub use completion_provider::CompletionProvider;
pub use completion_provider::CompletionRequest;
pub use context_resolver::ContextResolver;
pub use context_resolver::ResolvedContext;
pub use cursor_position::ColumnEncoding;
pub use cursor_position::CursorPosition;
pub use fragment_definition_tracker::FragmentDefinitionState;
pub use fragment_definition_tracker::FragmentDefinitionTracker;
pub use fragment_spread_tracker::FragmentSpreadState;
pub use fragment_spread_tracker::FragmentSpreadTracker;
pub use input_scope::InputScope;
pub use region_gate::FileExtensionRegionGate;
pub use region_gate::QueryLanguageRegion;
pub use scope_stack::ScopeStack;
pub use suggestion_builder::SuggestionBuilder;
pub use suggestion_builder::SuggestionPolicy;
pub use variable_definition_tracker::VariableDefinitionState;
pub use variable_definition_tracker::VariableDefinitionTracker;

#[cfg(test)]
mod tests;
