use crate::token::GraphQLKeyword;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FragmentDefinitionState {
    Idle,
    /// After a top-level `fragment`.
    Keyword,
    /// On the fragment's name.
    Name,
    /// After `on`.
    On,
    /// On the type condition.
    TypeName,
}

/// Follows the header of a named fragment definition:
/// `fragment Name on TypeName {`.
///
/// Only a `fragment` at document top level starts a header; a field called
/// `fragment` inside a selection set does not.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinitionTracker {
    depth: usize,
    state: FragmentDefinitionState,
}

impl FragmentDefinitionTracker {
    pub fn new() -> Self {
        Self {
            depth: 0,
            state: FragmentDefinitionState::Idle,
        }
    }

    pub fn consume(mut self, token: &GraphQLToken<'_>) -> Self {
        use FragmentDefinitionState as State;

        if token.kind.is_inert() {
            return self;
        }

        self.state = match (&token.kind, self.state) {
            (GraphQLTokenKind::CurlyBraceOpen, _) => {
                self.depth += 1;
                State::Idle
            },
            (GraphQLTokenKind::CurlyBraceClose, _) => {
                self.depth = self.depth.saturating_sub(1);
                State::Idle
            },
            (GraphQLTokenKind::Name(name), state) => {
                let keyword = GraphQLKeyword::from_name(name);
                match (keyword, state) {
                    (Some(GraphQLKeyword::Fragment), State::Idle) if self.depth == 0 =>
                        State::Keyword,
                    (_, State::Keyword) => State::Name,
                    (Some(GraphQLKeyword::On), State::Name) => State::On,
                    (_, State::On) => State::TypeName,
                    (_, _) => State::Idle,
                }
            },
            (_, _) => State::Idle,
        };

        self
    }

    pub fn state(&self) -> FragmentDefinitionState {
        self.state
    }
}

impl Default for FragmentDefinitionTracker {
    fn default() -> Self {
        Self::new()
    }
}
