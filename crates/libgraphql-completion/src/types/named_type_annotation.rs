#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}

impl NamedTypeAnnotation {
    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
