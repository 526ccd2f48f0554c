use crate::token::GraphQLKeyword;

/// The three kinds of GraphQL operation, each backed by a root operation type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

impl OperationKind {
    /// All operation kinds in the order they are offered as completions.
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];

    /// The operation keyword as written in a document (`query`, ...).
    pub fn keyword(&self) -> GraphQLKeyword {
        match self {
            Self::Mutation => GraphQLKeyword::Mutation,
            Self::Query => GraphQLKeyword::Query,
            Self::Subscription => GraphQLKeyword::Subscription,
        }
    }

    pub fn from_keyword(keyword: GraphQLKeyword) -> Option<Self> {
        match keyword {
            GraphQLKeyword::Mutation => Some(Self::Mutation),
            GraphQLKeyword::Query => Some(Self::Query),
            GraphQLKeyword::Subscription => Some(Self::Subscription),
            GraphQLKeyword::Fragment | GraphQLKeyword::On => None,
        }
    }

    /// The conventional root type name used when a schema has no explicit
    /// `schema { ... }` block.
    pub(crate) fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
