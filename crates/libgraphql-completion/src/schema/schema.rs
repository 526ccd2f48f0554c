use crate::schema::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Represents an immutable GraphQL schema.
///
/// A [`Schema`] is never mutated after [`SchemaBuilder::build()`], so a single
/// instance can be shared by any number of concurrent completion requests.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) query_type: String,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns every type defined within this [`Schema`], in definition order.
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as the built-in scalars, which always come first.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Names of every type usable as a variable type (scalars, enums and
    /// input objects), in definition order.
    pub fn input_type_names(&self) -> Vec<&str> {
        self.types
            .values()
            .filter(|type_| type_.is_input_type())
            .map(|type_| type_.name())
            .collect()
    }

    /// Indicates whether `sub_type` can stand in for `super_type`: the two are
    /// the same type, `sub_type` implements the interface `super_type`
    /// (directly or through other interfaces), or `sub_type` is an object
    /// that is a member of the union `super_type`.
    pub fn is_subtype(&self, sub_type: &GraphQLType, super_type: &GraphQLType) -> bool {
        if sub_type.name() == super_type.name() {
            return true;
        }

        match (sub_type, super_type) {
            (GraphQLType::Object(obj), GraphQLType::Interface(iface)) =>
                self.implements_interface(obj.interface_names(), iface.name()),
            (GraphQLType::Interface(sub_iface), GraphQLType::Interface(iface)) =>
                self.implements_interface(sub_iface.interface_names(), iface.name()),
            (GraphQLType::Object(obj), GraphQLType::Union(union_)) =>
                union_.member_type_names().contains(&obj.name()),
            (_, _) => false,
        }
    }

    fn implements_interface(&self, direct_interfaces: Vec<&str>, target: &str) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut pending = direct_interfaces;
        while let Some(iface_name) = pending.pop() {
            if iface_name == target {
                return true;
            }
            if !visited.insert(iface_name) {
                continue;
            }
            if let Some(GraphQLType::Interface(iface)) = self.types.get(iface_name) {
                pending.extend(iface.interface_names());
            }
        }
        false
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type
            .as_ref()
            .and_then(|type_name| self.types.get(type_name))
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// [^note] It is ***strongly*** recommended that you use
    /// [`Schema::query_type()`] in favor of looking for a type named
    /// `"Query"`: a `schema { query: ... }` block may name a different type.
    pub fn query_type(&self) -> &GraphQLType {
        self.types
            .get(self.query_type.as_str())
            .expect("type is present in schema")
    }

    /// Returns the root operation type for `kind`, if the schema defines one.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Names of every type usable as a fragment type condition (objects,
    /// interfaces and unions), in definition order.
    pub fn selectable_type_names(&self) -> Vec<&str> {
        self.types
            .values()
            .filter(|type_| type_.is_selectable())
            .map(|type_| type_.name())
            .collect()
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type
            .as_ref()
            .and_then(|type_name| self.types.get(type_name))
    }

    pub fn type_by_name(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }
}
