use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use graphql_parser::schema::Type as AstType;

/// Represents the annotated type for a [`Field`](crate::types::Field) or a
/// [`Parameter`](crate::types::Parameter).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub(crate) fn from_ast_type(ast_type: &AstType<'_, String>) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &AstType<'_, String>, nullable: bool) -> Self {
        match ast_type {
            AstType::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_annotation: Box::new(
                        Self::from_ast_type_impl(inner, true),
                    ),
                    nullable,
                }),

            AstType::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: name.to_owned(),
                }),

            AstType::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_annotation, .. })
                => inner_type_annotation.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// Name of the type left after stripping every list and non-null wrapper
    /// (`[User!]!` → `User`).
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().graphql_type_name()
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
