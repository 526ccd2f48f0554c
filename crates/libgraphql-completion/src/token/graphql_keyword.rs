/// The executable-document keywords that matter for completion.
///
/// GraphQL has no reserved words: `query`, `on` and friends are lexed as
/// ordinary [`Name`](crate::token::GraphQLTokenKind::Name) tokens and only
/// become keywords by position. Consumers classify a name with
/// [`GraphQLKeyword::from_name`] and decide from their own context whether
/// the keyword reading applies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLKeyword {
    Fragment,
    Mutation,
    On,
    Query,
    Subscription,
}

impl GraphQLKeyword {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fragment" => Some(Self::Fragment),
            "mutation" => Some(Self::Mutation),
            "on" => Some(Self::On),
            "query" => Some(Self::Query),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fragment => "fragment",
            Self::Mutation => "mutation",
            Self::On => "on",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// `true` for the three operation-type keywords.
    pub fn is_operation_type(&self) -> bool {
        matches!(self, Self::Query | Self::Mutation | Self::Subscription)
    }
}

impl std::fmt::Display for GraphQLKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
