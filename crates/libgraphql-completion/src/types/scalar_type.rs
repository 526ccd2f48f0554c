/// A custom scalar declared with `scalar Name`. The five built-in scalars are
/// dedicated [`GraphQLType`](crate::types::GraphQLType) variants instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}

impl ScalarType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
