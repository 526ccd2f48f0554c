use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;

fn schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, concat!(
            "\"\"\"Entry point.\"\"\"\n",
            "type Query { user(id: ID!): User }\n",
            "interface Node { id: ID! }\n",
            "\"A person.\"\n",
            "type User implements Node { id: ID! name: String }\n",
            "union Result = User\n",
            "enum Role { ADMIN MEMBER }\n",
            "input UserFilter { name: String }\n",
            "scalar DateTime\n",
        ))
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn kinds_and_categories() {
    let schema = schema();
    let kind_of = |name: &str| schema.type_by_name(name).unwrap().kind();

    assert_eq!(kind_of("User"), GraphQLTypeKind::Object);
    assert_eq!(kind_of("Node"), GraphQLTypeKind::Interface);
    assert_eq!(kind_of("Result"), GraphQLTypeKind::Union);
    assert_eq!(kind_of("Role"), GraphQLTypeKind::Enum);
    assert_eq!(kind_of("UserFilter"), GraphQLTypeKind::InputObject);
    assert_eq!(kind_of("DateTime"), GraphQLTypeKind::Scalar);
    assert_eq!(kind_of("Boolean"), GraphQLTypeKind::Bool);

    assert_eq!(GraphQLTypeKind::Bool.category_name(), "Scalar");
    assert_eq!(GraphQLTypeKind::Scalar.category_name(), "Scalar");
    assert_eq!(GraphQLTypeKind::InputObject.category_name(), "InputObject");
    assert_eq!(GraphQLTypeKind::Object.category_name(), "Object");
    assert_eq!(GraphQLTypeKind::Union.category_name(), "Union");
}

#[test]
fn input_and_selectable_types_partition_the_schema() {
    let schema = schema();
    for type_ in schema.all_types().values() {
        assert_ne!(type_.is_input_type(), type_.is_selectable(), "{}", type_.name());
    }
    assert!(schema.type_by_name("Role").unwrap().is_input_type());
    assert!(schema.type_by_name("Result").unwrap().is_selectable());
}

#[test]
fn field_lookup_only_on_object_and_interface_types() {
    let schema = schema();
    let user = schema.type_by_name("User").unwrap();
    assert_eq!(user.field("name").unwrap().type_annotation().to_string(), "String");
    assert!(user.field("nope").is_none());

    let node = schema.type_by_name("Node").unwrap();
    assert!(node.field("id").is_some());

    assert!(schema.type_by_name("UserFilter").unwrap().fields().is_none());
    assert!(schema.type_by_name("String").unwrap().field("length").is_none());
}

#[test]
fn descriptions() {
    let schema = schema();
    assert_eq!(schema.type_by_name("Query").unwrap().description(), Some("Entry point."));
    assert_eq!(schema.type_by_name("User").unwrap().description(), Some("A person."));
    assert_eq!(schema.type_by_name("Int").unwrap().description(), None);
}

#[test]
fn builtin_scalar_names() {
    assert_eq!(GraphQLType::Bool.name(), "Boolean");
    assert_eq!(GraphQLType::ID.name(), "ID");
    assert_eq!(GraphQLType::Float.kind(), GraphQLTypeKind::Float);
    assert!(GraphQLType::Float.kind().is_scalar());
}

#[test]
fn union_and_enum_members() {
    let schema = schema();
    let result = schema.type_by_name("Result").unwrap().as_union().unwrap();
    assert_eq!(result.member_type_names(), vec!["User"]);

    let GraphQLType::Enum(role) = schema.type_by_name("Role").unwrap() else {
        panic!("expected an enum");
    };
    assert_eq!(role.value_names(), vec!["ADMIN", "MEMBER"]);
}

#[test]
fn input_object_fields_are_parameters() {
    let schema = schema();
    let filter = schema.type_by_name("UserFilter").unwrap().as_input_object().unwrap();
    let name = filter.fields().get("name").unwrap();
    assert_eq!(name.name(), "name");
    assert_eq!(name.type_annotation().to_string(), "String");
    assert_eq!(name.default_value(), None);
}
