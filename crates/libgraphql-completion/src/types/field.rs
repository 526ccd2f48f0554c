use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a defined field on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}

impl Field {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The field's arguments, in definition order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
