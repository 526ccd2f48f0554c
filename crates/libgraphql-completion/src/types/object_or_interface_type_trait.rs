use crate::types::Field;
use indexmap::IndexMap;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
pub trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
