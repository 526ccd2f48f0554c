use crate::token::GraphQLKeyword;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FragmentSpreadState {
    Idle,
    /// After `...`.
    Spread,
    /// After `... on`.
    On,
    /// On the type condition of an inline fragment.
    TypeName,
    /// On the name of a named fragment spread.
    Name,
}

/// Follows fragment spreads inside selection sets: `...Name` and
/// `... on TypeName`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpreadTracker {
    state: FragmentSpreadState,
}

impl FragmentSpreadTracker {
    pub fn new() -> Self {
        Self {
            state: FragmentSpreadState::Idle,
        }
    }

    pub fn consume(mut self, token: &GraphQLToken<'_>) -> Self {
        use FragmentSpreadState as State;

        if token.kind.is_inert() {
            return self;
        }

        self.state = match (&token.kind, self.state) {
            (GraphQLTokenKind::Ellipsis, _) => State::Spread,
            (GraphQLTokenKind::Name(name), State::Spread) =>
                if GraphQLKeyword::from_name(name) == Some(GraphQLKeyword::On) {
                    State::On
                } else {
                    State::Name
                },
            (GraphQLTokenKind::Name(_), State::On) => State::TypeName,
            (_, _) => State::Idle,
        };

        self
    }

    pub fn state(&self) -> FragmentSpreadState {
        self.state
    }
}

impl Default for FragmentSpreadTracker {
    fn default() -> Self {
        Self::new()
    }
}
