use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String => None,
            GraphQLType::Enum(t) => t.description(),
            GraphQLType::InputObject(t) => t.description(),
            GraphQLType::Interface(t) => t.description(),
            GraphQLType::Object(t) => t.description(),
            GraphQLType::Scalar(t) => t.description(),
            GraphQLType::Union(t) => t.description(),
        }
    }

    /// Looks up a selectable field by name. Only object and interface types
    /// have fields; every other type answers `None`.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().and_then(|fields| fields.get(name))
    }

    /// The selectable fields of an object or interface type, in definition
    /// order.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            GraphQLType::Interface(t) => Some(t.fields()),
            GraphQLType::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// Types that can appear as variable types: scalars, enums and input
    /// objects.
    pub fn is_input_type(&self) -> bool {
        self.kind().is_input()
    }

    /// Types that can appear as a fragment's type condition: objects,
    /// interfaces and unions.
    pub fn is_selectable(&self) -> bool {
        self.kind().is_selectable()
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::Int => "Int",
            GraphQLType::String => "String",
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::Union(t) => t.name(),
        }
    }
}
