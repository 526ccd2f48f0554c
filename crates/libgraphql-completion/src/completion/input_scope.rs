use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::Parameter;
use indexmap::IndexMap;

/// The context that argument names resolve against.
///
/// Inside `user(...)` the arguments are those of the field `user`; inside an
/// input-object literal such as `filter: { ... }` they are the fields of the
/// input object type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputScope<'schema> {
    Field(&'schema Field),
    Type(&'schema GraphQLType),
}

impl<'schema> InputScope<'schema> {
    pub fn argument(&self, name: &str) -> Option<&'schema Parameter> {
        self.arguments().and_then(|args| args.get(name))
    }

    /// Arguments available in this scope, in definition order. Only fields
    /// and input object types have any.
    pub fn arguments(&self) -> Option<&'schema IndexMap<String, Parameter>> {
        match self {
            Self::Field(field) => Some(field.parameters()),
            Self::Type(GraphQLType::InputObject(inputobj_type)) =>
                Some(inputobj_type.fields()),
            Self::Type(_) => None,
        }
    }

    /// Name used in candidate details (`Query.user`, `UserFilter`).
    pub fn name(&self) -> &'schema str {
        match self {
            Self::Field(field) => field.name(),
            Self::Type(type_) => type_.name(),
        }
    }
}
