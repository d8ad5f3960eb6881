//! Intermediate representation for extracted Go declarations.
//!
//! The Go reader normalizes every struct it finds into this IR before the
//! TypeScript backend renders it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every declaration gathered from one directory scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedCollection {
    /// Struct declarations, in file-then-occurrence order.
    pub records: Vec<RecordDeclaration>,
    /// Enum declarations. Never populated by the Go reader yet.
    pub enums: Vec<EnumDeclaration>,
}

/// A named struct declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDeclaration {
    /// Type name (e.g., "User").
    pub name: String,
    /// Package the struct was declared in.
    pub source_namespace: String,
    /// Named fields in declaration order.
    pub fields: Vec<FieldDeclaration>,
}

/// A named field of a struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    /// Field name as written in Go.
    pub declared_name: String,
    /// Field type.
    pub type_expression: TypeExpression,
    /// Name taken from the `json` tag, if any.
    pub tag_override_name: Option<String>,
    /// Pointer or `omitempty`.
    pub is_optional: bool,
    /// Outermost type is a pointer.
    pub is_pointer: bool,
}

/// An enum declaration (`type X int` plus an iota const block).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    pub name: String,
    pub source_namespace: String,
    pub values: Vec<EnumValue>,
}

/// One constant of an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

/// The shape of a Go field type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeExpression {
    /// A base or package-qualified identifier (`string`, `time.Time`).
    Named(String),
    /// `*T`
    Pointer(Box<TypeExpression>),
    /// `[]T` or `[N]T`
    Slice(Box<TypeExpression>),
    /// `map[K]V`
    Map {
        key: Box<TypeExpression>,
        value: Box<TypeExpression>,
    },
}

impl AggregatedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append everything gathered from one file.
    pub fn extend(&mut self, other: AggregatedCollection) {
        self.records.extend(other.records);
        self.enums.extend(other.enums);
    }

    /// Whether a struct with exactly this name has been collected.
    pub fn has_record(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.enums.is_empty()
    }
}

impl RecordDeclaration {
    pub fn new(
        name: impl Into<String>,
        source_namespace: impl Into<String>,
        fields: Vec<FieldDeclaration>,
    ) -> Self {
        Self {
            name: name.into(),
            source_namespace: source_namespace.into(),
            fields,
        }
    }
}

impl FieldDeclaration {
    /// A field with no tag; optionality follows from the pointer shape.
    pub fn new(declared_name: impl Into<String>, type_expression: TypeExpression) -> Self {
        let is_pointer = type_expression.is_pointer();
        Self {
            declared_name: declared_name.into(),
            type_expression,
            tag_override_name: None,
            is_optional: is_pointer,
            is_pointer,
        }
    }

    /// Name used in generated output.
    pub fn emitted_name(&self) -> &str {
        self.tag_override_name
            .as_deref()
            .unwrap_or(&self.declared_name)
    }
}

impl TypeExpression {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// `pkg.Ident`
    pub fn qualified(namespace: &str, name: &str) -> Self {
        Self::Named(format!("{}.{}", namespace, name))
    }

    pub fn pointer(inner: TypeExpression) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn slice(element: TypeExpression) -> Self {
        Self::Slice(Box::new(element))
    }

    pub fn map(key: TypeExpression, value: TypeExpression) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Sentinel for type syntax the reader does not model.
    pub fn any() -> Self {
        Self::Named("any".to_string())
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }
}

/// Go spelling: `*T`, `[]T`, `map[K]V`.
impl fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Pointer(inner) => write!(f, "*{}", inner),
            Self::Slice(element) => write!(f, "[]{}", element),
            Self::Map { key, value } => write!(f, "map[{}]{}", key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_nested_map() {
        let ty = TypeExpression::map(
            TypeExpression::map(TypeExpression::named("string"), TypeExpression::named("int")),
            TypeExpression::slice(TypeExpression::pointer(TypeExpression::qualified(
                "time", "Time",
            ))),
        );
        assert_eq!(ty.to_string(), "map[map[string]int][]*time.Time");
    }

    #[test]
    fn pointer_field_is_optional() {
        let field = FieldDeclaration::new(
            "Bio",
            TypeExpression::pointer(TypeExpression::named("string")),
        );
        assert!(field.is_pointer);
        assert!(field.is_optional);
        assert_eq!(field.emitted_name(), "Bio");
    }

    #[test]
    fn slice_of_pointer_is_not_a_pointer_field() {
        let field = FieldDeclaration::new(
            "Tags",
            TypeExpression::slice(TypeExpression::pointer(TypeExpression::named("string"))),
        );
        assert!(!field.is_pointer);
        assert!(!field.is_optional);
    }

    #[test]
    fn build_collection_programmatically() {
        let mut collection = AggregatedCollection::new();
        assert!(collection.is_empty());

        let mut other = AggregatedCollection::new();
        other.records.push(RecordDeclaration::new(
            "User",
            "models",
            vec![FieldDeclaration::new("ID", TypeExpression::named("int"))],
        ));
        collection.extend(other);

        assert!(collection.has_record("User"));
        assert!(!collection.has_record("user"));
        assert_eq!(collection.records.len(), 1);
    }
}
