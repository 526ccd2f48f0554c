use crate::types::Parameter;
use indexmap::IndexMap;

/// An `input` type. Its fields share the shape of field arguments, so they
/// are stored as [`Parameter`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Parameter>,
    pub(crate) name: String,
}

impl InputObjectType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Parameter> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
