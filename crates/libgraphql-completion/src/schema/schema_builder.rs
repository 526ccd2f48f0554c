use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedTypeAnnotation;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [Schema].
///
/// Type extensions may appear before the definition they extend (even in a
/// different file), so they are collected while loading and applied by
/// [`SchemaBuilder::build()`].
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<String>,
    pending_extensions: Vec<(PathBuf, ast::TypeExtension<'static, String>)>,
    query_type: Option<String>,
    str_load_counter: u16,
    subscription_type: Option<String>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(file_path.as_path(), ext)?;
        }

        for type_ in self.types.values_mut() {
            match type_ {
                GraphQLType::Interface(InterfaceType(data))
                    | GraphQLType::Object(ObjectType(data)) =>
                    inject_typename_field(data),
                _ => (),
            }
        }

        let query_type = self.resolve_root_type(OperationKind::Query)?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = self.resolve_root_type(OperationKind::Mutation)?;
        let subscription_type = self.resolve_root_type(OperationKind::Subscription)?;

        log::debug!(
            "built schema with {} types (query root: `{query_type}`)",
            self.types.len(),
        );

        Ok(Schema {
            query_type,
            mutation_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        let types = IndexMap::from([
            ("Boolean".to_string(), GraphQLType::Bool),
            ("Float".to_string(), GraphQLType::Float),
            ("ID".to_string(), GraphQLType::ID),
            ("Int".to_string(), GraphQLType::Int),
            ("String".to_string(), GraphQLType::String),
        ]);

        Self {
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types,
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = std::fs::read_to_string(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError {
                    file: file_path.to_path_buf(),
                    err,
                })?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            ast::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn apply_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::TypeExtension<'static, String>,
    ) -> Result<()> {
        use ast::TypeExtension;
        let ext_type_name = match &ext {
            TypeExtension::Enum(ext) => ext.name.as_str(),
            TypeExtension::InputObject(ext) => ext.name.as_str(),
            TypeExtension::Interface(ext) => ext.name.as_str(),
            TypeExtension::Object(ext) => ext.name.as_str(),
            TypeExtension::Scalar(ext) => ext.name.as_str(),
            TypeExtension::Union(ext) => ext.name.as_str(),
        };
        let Some(type_) = self.types.get_mut(ext_type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                file: file_path.to_path_buf(),
                type_name: ext_type_name.to_string(),
            });
        };

        match (type_, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                enum_type.values.extend(
                    ext.values.into_iter().map(|value| value.name),
                ),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) =>
                inputobj_type.fields.extend(ext.fields.iter().map(|input_val| (
                    input_val.name.to_string(),
                    Parameter::from_ast(input_val),
                ))),

            (GraphQLType::Interface(InterfaceType(data)), TypeExtension::Interface(ext)) =>
                data.fields.extend(ext.fields.iter().map(field_from_ast)),

            (GraphQLType::Object(ObjectType(data)), TypeExtension::Object(ext)) => {
                data.fields.extend(ext.fields.iter().map(field_from_ast));
                data.interfaces.extend(ext.implements_interfaces);
            },

            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => (),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                union_type.members.extend(ext.types),

            (type_, _) => return Err(SchemaBuildError::InvalidExtensionType {
                file: file_path.to_path_buf(),
                type_name: type_.name().to_string(),
            }),
        }

        Ok(())
    }

    fn define_type(&mut self, file_path: &Path, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name().to_string();
        if self.types.contains_key(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                file: file_path.to_path_buf(),
                type_name,
            });
        }
        self.types.insert(type_name, type_);
        Ok(())
    }

    /// Picks the explicit `schema { ... }` root for `kind` if there is one,
    /// otherwise falls back to an object type with the conventional name.
    fn resolve_root_type(&self, kind: OperationKind) -> Result<Option<String>> {
        let explicit_root = match kind {
            OperationKind::Mutation => &self.mutation_type,
            OperationKind::Query => &self.query_type,
            OperationKind::Subscription => &self.subscription_type,
        };

        if let Some(type_name) = explicit_root {
            return match self.types.get(type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Ok(Some(type_name.to_owned())),
                _ => Err(SchemaBuildError::UndefinedRootOperationType {
                    operation: kind,
                    type_name: type_name.to_owned(),
                }),
            };
        }

        let default_name = kind.default_root_type_name();
        match self.types.get(default_name) {
            Some(GraphQLType::Object(_)) => Ok(Some(default_name.to_string())),
            _ => Ok(None),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::Definition<'static, String>,
    ) -> Result<()> {
        use ast::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            // Directives never influence completion.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::SchemaDefinition<'static, String>,
    ) -> Result<()> {
        let roots = [
            (OperationKind::Query, schema_def.query, &mut self.query_type),
            (OperationKind::Mutation, schema_def.mutation, &mut self.mutation_type),
            (OperationKind::Subscription, schema_def.subscription, &mut self.subscription_type),
        ];

        for (operation, type_name, slot) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            if slot.is_some() {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    file: file_path.to_path_buf(),
                    operation,
                });
            }
            *slot = Some(type_name);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::TypeDefinition<'static, String>,
    ) -> Result<()> {
        use ast::TypeDefinition;
        let type_ = match type_def {
            TypeDefinition::Enum(enum_def) => GraphQLType::Enum(EnumType {
                description: enum_def.description,
                name: enum_def.name,
                values: enum_def.values
                    .into_iter()
                    .map(|value| value.name)
                    .collect(),
            }),

            TypeDefinition::InputObject(inputobj_def) =>
                GraphQLType::InputObject(InputObjectType {
                    description: inputobj_def.description,
                    fields: inputobj_def.fields.iter().map(|input_val| (
                        input_val.name.to_string(),
                        Parameter::from_ast(input_val),
                    )).collect(),
                    name: inputobj_def.name,
                }),

            TypeDefinition::Interface(iface_def) =>
                GraphQLType::Interface(InterfaceType(ObjectOrInterfaceTypeData {
                    description: iface_def.description,
                    fields: iface_def.fields.iter().map(field_from_ast).collect(),
                    interfaces: iface_def.implements_interfaces,
                    name: iface_def.name,
                })),

            TypeDefinition::Object(obj_def) =>
                GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                    description: obj_def.description,
                    fields: obj_def.fields.iter().map(field_from_ast).collect(),
                    interfaces: obj_def.implements_interfaces,
                    name: obj_def.name,
                })),

            TypeDefinition::Scalar(scalar_def) => GraphQLType::Scalar(ScalarType {
                description: scalar_def.description,
                name: scalar_def.name,
            }),

            TypeDefinition::Union(union_def) => GraphQLType::Union(UnionType {
                description: union_def.description,
                members: union_def.types,
                name: union_def.name,
            }),
        };

        self.define_type(file_path, type_)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn field_from_ast(field: &ast::Field<'static, String>) -> (String, Field) {
    (field.name.to_string(), Field {
        description: field.description.to_owned(),
        name: field.name.to_string(),
        parameters: field.arguments.iter().map(|input_val| (
            input_val.name.to_string(),
            Parameter::from_ast(input_val),
        )).collect(),
        type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
    })
}

fn inject_typename_field(data: &mut ObjectOrInterfaceTypeData) {
    if data.fields.contains_key("__typename") {
        return;
    }
    data.fields.insert("__typename".to_string(), Field {
        description: Some(
            "The name of the current Object type at runtime.".to_string(),
        ),
        name: "__typename".to_string(),
        parameters: IndexMap::new(),
        type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
            nullable: false,
            type_name: "String".to_string(),
        }),
    });
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple `schema` blocks define the {operation:?} root operation type ({file:?})")]
    DuplicateOperationDefinition {
        file: PathBuf,
        operation: OperationKind,
    },

    #[error("Multiple GraphQL types with the same name were defined: `{type_name}` ({file:?})")]
    DuplicateTypeDefinition {
        file: PathBuf,
        type_name: String,
    },

    #[error("Attempted to extend a type that is not defined: `{type_name}` ({file:?})")]
    ExtensionOfUndefinedType {
        file: PathBuf,
        type_name: String,
    },

    #[error("Extension kind does not match the kind of the extended type `{type_name}` ({file:?})")]
    InvalidExtensionType {
        file: PathBuf,
        type_name: String,
    },

    #[error("No query type was specified by the schema")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema string ({file:?}): {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while trying to read a schema file ({file:?})")]
    SchemaFileReadError {
        file: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("The {operation:?} root operation type `{type_name}` is not a defined object type")]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
    },
}
