use crate::types::GraphQLType;

/// The kind of a [`GraphQLType`] without its definition.
///
/// Completion cares about kinds in two places: deciding which types may be
/// offered at a position (variable types vs. fragment type conditions) and
/// labelling type candidates.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    /// Label shown next to a type candidate. Built-in and custom scalars
    /// share the `"Scalar"` label.
    pub fn category_name(&self) -> &'static str {
        if self.is_scalar() {
            return "Scalar";
        }
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::Union => "Union",
            _ => "Object",
        }
    }

    /// Kinds allowed as a variable's declared type.
    pub fn is_input(&self) -> bool {
        !self.is_selectable()
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::Scalar | Self::String,
        )
    }

    /// Kinds with a selection set, allowed as a fragment's type condition.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Bool => GraphQLTypeKind::Bool,
            GraphQLType::Enum(_) => GraphQLTypeKind::Enum,
            GraphQLType::Float => GraphQLTypeKind::Float,
            GraphQLType::ID => GraphQLTypeKind::ID,
            GraphQLType::InputObject(_) => GraphQLTypeKind::InputObject,
            GraphQLType::Int => GraphQLTypeKind::Int,
            GraphQLType::Interface(_) => GraphQLTypeKind::Interface,
            GraphQLType::Object(_) => GraphQLTypeKind::Object,
            GraphQLType::Scalar(_) => GraphQLTypeKind::Scalar,
            GraphQLType::String => GraphQLTypeKind::String,
            GraphQLType::Union(_) => GraphQLTypeKind::Union,
        }
    }
}
