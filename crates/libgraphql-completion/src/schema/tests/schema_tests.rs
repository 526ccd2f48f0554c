use crate::schema::Schema;

fn schema() -> Schema {
    Schema::builder()
        .load_str(None, concat!(
            "type Query { node: Node }\n",
            "interface Node { id: ID! }\n",
            "interface Resource implements Node { id: ID! url: String }\n",
            "type Image implements Resource & Node { id: ID! url: String }\n",
            "type User implements Node { id: ID! }\n",
            "type Orphan { id: ID! }\n",
            "union Media = Image | Orphan\n",
            "input Filter { id: ID }\n",
            "enum Role { ADMIN }\n",
        ))
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn schema_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
}

#[test]
fn input_type_names_in_definition_order() {
    assert_eq!(schema().input_type_names(), vec![
        "Boolean", "Float", "ID", "Int", "String", "Filter", "Role",
    ]);
}

#[test]
fn selectable_type_names_in_definition_order() {
    assert_eq!(schema().selectable_type_names(), vec![
        "Query", "Node", "Resource", "Image", "User", "Orphan", "Media",
    ]);
}

mod is_subtype {
    use super::*;

    fn check(schema: &Schema, sub: &str, sup: &str) -> bool {
        schema.is_subtype(
            schema.type_by_name(sub).unwrap(),
            schema.type_by_name(sup).unwrap(),
        )
    }

    #[test]
    fn a_type_is_its_own_subtype() {
        let schema = schema();
        assert!(check(&schema, "User", "User"));
        assert!(check(&schema, "Media", "Media"));
    }

    #[test]
    fn objects_are_subtypes_of_their_interfaces() {
        let schema = schema();
        assert!(check(&schema, "User", "Node"));
        assert!(check(&schema, "Image", "Resource"));
        assert!(!check(&schema, "Node", "User"));
        assert!(!check(&schema, "Orphan", "Node"));
    }

    #[test]
    fn interface_inheritance_is_transitive() {
        let schema = schema();
        assert!(check(&schema, "Resource", "Node"));
        assert!(!check(&schema, "Node", "Resource"));
    }

    #[test]
    fn union_members_are_subtypes_of_the_union() {
        let schema = schema();
        assert!(check(&schema, "Image", "Media"));
        assert!(check(&schema, "Orphan", "Media"));
        assert!(!check(&schema, "User", "Media"));
        assert!(!check(&schema, "Media", "Image"));
    }

    #[test]
    fn cyclic_interfaces_terminate() {
        let schema = Schema::builder()
            .load_str(None, concat!(
                "type Query { a: Int }\n",
                "interface A implements B { id: ID }\n",
                "interface B implements A { id: ID }\n",
                "interface C { id: ID }\n",
            ))
            .unwrap()
            .build()
            .unwrap();

        assert!(check(&schema, "A", "B"));
        assert!(!check(&schema, "A", "C"));
    }
}
