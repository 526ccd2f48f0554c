use crate::types::TypeAnnotation;
use graphql_parser::schema::InputValue;

/// A field argument or an input-object field.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) default_value: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}

impl Parameter {
    /// The default value as it was written in the schema, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_ast(input_val: &InputValue<'_, String>) -> Self {
        Parameter {
            default_value: input_val.default_value
                .as_ref()
                .map(|value| value.to_string()),
            description: input_val.description.clone(),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }
}
