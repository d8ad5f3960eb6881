//! TypeScript interface backend.
//!
//! Renders each collected struct as an `export interface` block. Field types
//! go through [`TypeRenderer`], which needs the whole collection so that a
//! field naming another collected struct stays a bare reference.

use crate::ir::{AggregatedCollection, FieldDeclaration, RecordDeclaration, TypeExpression};
use std::fmt::Write;

/// First line of every generated file.
pub const BANNER: &str = "/* Do not change, this code is generated from Golang structs */";

const INDENT: &str = "    ";

/// Generate the full TypeScript file for a collection.
pub fn generate_typescript(collection: &AggregatedCollection) -> String {
    TypeScriptEmitter::emit(collection)
}

/// Emits a collection as TypeScript interfaces.
pub struct TypeScriptEmitter<'a> {
    output: String,
    renderer: TypeRenderer<'a>,
}

impl<'a> TypeScriptEmitter<'a> {
    pub fn new(collection: &'a AggregatedCollection) -> Self {
        Self {
            output: String::new(),
            renderer: TypeRenderer::new(collection),
        }
    }

    /// Emit the banner and every record, separated by blank lines.
    pub fn emit(collection: &'a AggregatedCollection) -> String {
        let mut emitter = Self::new(collection);
        writeln!(emitter.output, "{}", BANNER).unwrap();
        emitter.output.push('\n');

        for record in &collection.records {
            emitter.write_record(record);
            emitter.output.push('\n');
        }

        // The last block has no blank line after it.
        if emitter.output.ends_with('\n') {
            emitter.output.pop();
        }
        emitter.output
    }

    fn write_record(&mut self, record: &RecordDeclaration) {
        writeln!(self.output, "export interface {} {{", record.name).unwrap();
        for field in &record.fields {
            self.write_field(field);
        }
        self.output.push_str("};\n");
    }

    fn write_field(&mut self, field: &FieldDeclaration) {
        let ts_type = self.renderer.render(&field.type_expression);
        let optional = if field.is_optional { "?" } else { "" };
        writeln!(
            self.output,
            "{}{}{}: {};",
            INDENT,
            field.emitted_name(),
            optional,
            ts_type
        )
        .unwrap();
    }
}

/// Maps Go type expressions to TypeScript type text.
#[derive(Debug, Clone, Copy)]
pub struct TypeRenderer<'a> {
    collection: &'a AggregatedCollection,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(collection: &'a AggregatedCollection) -> Self {
        Self { collection }
    }

    /// Render one field type.
    ///
    /// One leading pointer becomes `| null`, then one leading slice becomes
    /// `[]`. A pointer directly under that slice is nullable too, so `*[]T`
    /// and `[]*T` both render as `T[] | null`. `[]byte` is the exception: it
    /// is a string, not `number[]`.
    pub fn render(&self, ty: &TypeExpression) -> String {
        let (ty, mut nullable) = strip_pointer(ty);

        if is_byte_slice(ty) {
            let mut ts = "string".to_string();
            if nullable {
                ts.push_str(" | null");
            }
            return ts;
        }

        let mut ts = match ty {
            TypeExpression::Slice(element) => {
                let (element, element_nullable) = strip_pointer(element);
                nullable |= element_nullable;
                array_of(self.render_base(element))
            }
            other => self.render_base(other),
        };

        if nullable {
            ts.push_str(" | null");
        }
        ts
    }

    fn render_base(&self, ty: &TypeExpression) -> String {
        match ty {
            TypeExpression::Map { key, value } => self.render_map(key, value),
            TypeExpression::Named(name) if self.collection.has_record(name) => name.clone(),
            TypeExpression::Named(name) => basic_type_to_ts(name),
            // [][]T, **T and deeper shapes
            nested @ (TypeExpression::Pointer(_) | TypeExpression::Slice(_)) => self.render(nested),
        }
    }

    fn render_map(&self, key: &TypeExpression, value: &TypeExpression) -> String {
        let ts_key = match key {
            TypeExpression::Named(name) if is_integer(name) => "number",
            _ => "string",
        };
        format!("Record<{}, {}>", ts_key, self.render(value))
    }
}

fn strip_pointer(ty: &TypeExpression) -> (&TypeExpression, bool) {
    match ty {
        TypeExpression::Pointer(inner) => (inner.as_ref(), true),
        other => (other, false),
    }
}

fn is_byte_slice(ty: &TypeExpression) -> bool {
    matches!(ty, TypeExpression::Slice(element)
        if matches!(element.as_ref(), TypeExpression::Named(name) if name == "byte"))
}

fn is_integer(name: &str) -> bool {
    matches!(
        name,
        "int"
            | "int8"
            | "int16"
            | "int32"
            | "int64"
            | "uint"
            | "uint8"
            | "uint16"
            | "uint32"
            | "uint64"
    )
}

fn array_of(element: String) -> String {
    if is_top_level_union(&element) {
        format!("({})[]", element)
    } else {
        format!("{}[]", element)
    }
}

/// `a | b` at the outermost level, ignoring unions inside `Record<...>` or parens.
/// Only element types nested deeper than one slice reach this, e.g. `[][]*T`.
fn is_top_level_union(ts: &str) -> bool {
    let mut depth = 0usize;
    for (i, c) in ts.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            '|' if depth == 0 && ts[..i].ends_with(' ') => return true,
            _ => {}
        }
    }
    false
}

/// Map a named Go type to TypeScript.
///
/// The qualified name is tried first, then the bare identifier after the
/// last `.`. Unknown names pass through as the bare identifier.
pub fn basic_type_to_ts(go_type: &str) -> String {
    if let Some(ts) = lookup_basic(go_type) {
        return ts.to_string();
    }
    let bare = match go_type.rfind('.') {
        Some(idx) => &go_type[idx + 1..],
        None => go_type,
    };
    lookup_basic(bare).unwrap_or(bare).to_string()
}

fn lookup_basic(go_type: &str) -> Option<&'static str> {
    let ts = match go_type {
        "string" => "string",

        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16" | "uint32"
        | "uint64" | "float32" | "float64" | "byte" | "rune" => "number",

        "bool" => "boolean",

        "interface{}" | "any" => "any",

        "time.Time" | "Time" => "string",
        "time.Duration" | "Duration" => "number",

        "uuid.UUID" | "UUID" | "google.uuid.UUID" | "gofrs.uuid.UUID" | "satori.uuid.UUID" => {
            "string"
        }

        "json.RawMessage" | "RawMessage" => "any",

        "sql.NullString" | "NullString" => "string | null",
        "sql.NullInt64" | "NullInt64" | "sql.NullInt32" | "NullInt32" | "sql.NullInt16"
        | "NullInt16" => "number | null",
        "sql.NullFloat64" | "NullFloat64" => "number | null",
        "sql.NullBool" | "NullBool" => "boolean | null",
        "sql.NullTime" | "NullTime" => "string | null",

        "decimal.Decimal" | "Decimal" => "string",
        "big.Int" | "big.Float" | "big.Rat" => "string",

        "net.IP" | "IP" => "string",
        "net.URL" | "url.URL" | "URL" => "string",

        "[]byte" => "string",

        _ => return None,
    };
    Some(ts)
}
