use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
