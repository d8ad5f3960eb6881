//! Go struct extraction.
//!
//! Walks a tree-sitter Go syntax tree and turns every struct-shaped
//! `type_spec` (or `type_alias`) into a [`RecordDeclaration`].

use crate::ir::{AggregatedCollection, FieldDeclaration, RecordDeclaration, TypeExpression};
use crate::tag::{TagMetadata, unquote_tag_literal};
use tree_sitter::{Node, Parser, Tree};

/// Error that can occur when reading a Go source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("tree-sitter init: {0}")]
    Language(String),

    #[error("parser produced no syntax tree")]
    NoTree,

    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}

/// Parse Go source and extract its struct declarations into IR.
pub fn parse_go_types(source: &str) -> Result<AggregatedCollection, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&arborium_go::language().into())
        .map_err(|e| ParseError::Language(e.to_string()))?;

    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;

    if let Some(node) = first_error(tree.root_node()) {
        let pos = node.start_position();
        return Err(ParseError::Syntax {
            line: pos.row + 1,
            column: pos.column + 1,
        });
    }

    let ctx = ExtractContext::new(source);
    Ok(ctx.extract_collection(&tree))
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    Some(node)
}

struct ExtractContext<'a> {
    source: &'a str,
}

impl<'a> ExtractContext<'a> {
    fn new(source: &'a str) -> Self {
        Self { source }
    }

    fn node_text(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn extract_collection(&self, tree: &Tree) -> AggregatedCollection {
        let root = tree.root_node();
        let mut collection = AggregatedCollection::new();
        let namespace = self.package_name(root).unwrap_or_default();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() == "type_declaration" {
                self.extract_type_declaration(child, &namespace, &mut collection.records);
            }
        }

        collection
    }

    fn package_name(&self, root: Node) -> Option<String> {
        let mut cursor = root.walk();
        let clause = root
            .children(&mut cursor)
            .find(|c| c.kind() == "package_clause")?;

        let mut cursor = clause.walk();
        let ident = clause
            .children(&mut cursor)
            .find(|c| c.kind() == "package_identifier")?;
        Some(self.node_text(ident).to_string())
    }

    /// `type X struct {...}`, `type X = struct {...}`, or a grouped `type ( ... )` block.
    fn extract_type_declaration(
        &self,
        node: Node,
        namespace: &str,
        out: &mut Vec<RecordDeclaration>,
    ) {
        let mut cursor = node.walk();
        for spec in node.children(&mut cursor) {
            if !matches!(spec.kind(), "type_spec" | "type_alias") {
                continue;
            }
            if let Some(record) = self.extract_type_spec(spec, namespace) {
                out.push(record);
            }
        }
    }

    fn extract_type_spec(&self, node: Node, namespace: &str) -> Option<RecordDeclaration> {
        let name = node.child_by_field_name("name")?;
        let ty = node.child_by_field_name("type")?;
        if ty.kind() != "struct_type" {
            return None;
        }

        Some(RecordDeclaration::new(
            self.node_text(name),
            namespace,
            self.extract_struct_fields(ty),
        ))
    }

    fn extract_struct_fields(&self, struct_type: Node) -> Vec<FieldDeclaration> {
        let mut fields = Vec::new();

        let mut cursor = struct_type.walk();
        let Some(list) = struct_type
            .children(&mut cursor)
            .find(|c| c.kind() == "field_declaration_list")
        else {
            return fields;
        };

        let mut cursor = list.walk();
        for child in list.children(&mut cursor) {
            if child.kind() == "field_declaration" {
                self.extract_field_declaration(child, &mut fields);
            }
        }

        fields
    }

    /// One declaration line. `A, B int` is recorded under its first name only.
    fn extract_field_declaration(&self, node: Node, out: &mut Vec<FieldDeclaration>) {
        // Embedded field
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };

        let ty = node
            .child_by_field_name("type")
            .map(|t| self.extract_type(t))
            .unwrap_or_else(TypeExpression::any);

        let mut field = FieldDeclaration::new(self.node_text(name), ty);
        if let Some(tag) = node.child_by_field_name("tag") {
            let tag = TagMetadata::parse(&unquote_tag_literal(self.node_text(tag)));
            if tag.override_name.is_some() {
                field.tag_override_name = tag.override_name;
            }
            if tag.omit_when_empty {
                field.is_optional = true;
            }
        }
        out.push(field);
    }

    fn extract_type(&self, node: Node) -> TypeExpression {
        match node.kind() {
            "type_identifier" => TypeExpression::named(self.node_text(node)),

            "qualified_type" => {
                let package = node.child_by_field_name("package");
                let name = node.child_by_field_name("name");
                match (package, name) {
                    (Some(p), Some(n)) => {
                        TypeExpression::qualified(self.node_text(p), self.node_text(n))
                    }
                    _ => TypeExpression::any(),
                }
            }

            "pointer_type" => match self.first_named_child(node) {
                Some(inner) => TypeExpression::pointer(self.extract_type(inner)),
                None => TypeExpression::any(),
            },

            // [N]T is treated the same as []T
            "slice_type" | "array_type" => match node.child_by_field_name("element") {
                Some(element) => TypeExpression::slice(self.extract_type(element)),
                None => TypeExpression::any(),
            },

            "map_type" => {
                let key = node.child_by_field_name("key");
                let value = node.child_by_field_name("value");
                match (key, value) {
                    (Some(k), Some(v)) => {
                        TypeExpression::map(self.extract_type(k), self.extract_type(v))
                    }
                    _ => TypeExpression::any(),
                }
            }

            "parenthesized_type" => match self.first_named_child(node) {
                Some(inner) => self.extract_type(inner),
                None => TypeExpression::any(),
            },

            // interface{}, inline structs, channels, funcs, generic instantiations
            _ => TypeExpression::any(),
        }
    }

    fn first_named_child<'t>(&self, node: Node<'t>) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .find(|c| c.kind() != "comment")
    }
}
