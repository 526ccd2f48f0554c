#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}

impl EnumType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value_names(&self) -> Vec<&str> {
        self.values.iter().map(|value| value.as_str()).collect()
    }
}
