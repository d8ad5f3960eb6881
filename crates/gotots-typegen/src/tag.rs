//! Struct tag parsing.
//!
//! Only the `json` key matters here: it can rename a field and mark it
//! `omitempty`.

/// What the `json` key of a struct tag says about a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMetadata {
    /// Name from the first comma segment; `None` for `-` or empty.
    pub override_name: Option<String>,
    /// `omitempty` appears among the options.
    pub omit_when_empty: bool,
}

const JSON_KEY: &str = "json:";
const SKIP_MARKER: &str = "-";
const OMIT_EMPTY: &str = "omitempty";

impl TagMetadata {
    /// Parse tag text with the surrounding backticks already removed,
    /// e.g. `json:"first_name,omitempty" db:"first_name"`.
    pub fn parse(tag: &str) -> Self {
        let Some(segment) = tag
            .split_whitespace()
            .find(|part| part.starts_with(JSON_KEY))
        else {
            return Self::default();
        };

        let value = segment[JSON_KEY.len()..].trim_matches('"');
        let mut parts = value.split(',');
        let name = parts.next().unwrap_or("");
        let omit_when_empty = parts.any(|opt| opt.trim() == OMIT_EMPTY);

        let override_name = if name.is_empty() || name == SKIP_MARKER {
            None
        } else {
            Some(name.to_string())
        };

        Self {
            override_name,
            omit_when_empty,
        }
    }
}

/// Strip the literal delimiters from a tag as it appears in source.
///
/// Raw strings lose their backticks; interpreted strings lose their quotes
/// and have `\"` and `\\` unescaped.
pub fn unquote_tag_literal(literal: &str) -> String {
    if let Some(inner) = literal
        .strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
    {
        return inner.to_string();
    }
    if let Some(inner) = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
    {
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some(next) => out.push(next),
                    None => out.push(c),
                }
            } else {
                out.push(c);
            }
        }
        return out;
    }
    literal.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name() {
        let tag = TagMetadata::parse(r#"json:"first_name""#);
        assert_eq!(tag.override_name.as_deref(), Some("first_name"));
        assert!(!tag.omit_when_empty);
    }

    #[test]
    fn name_with_omitempty() {
        let tag = TagMetadata::parse(r#"json:"bio,omitempty""#);
        assert_eq!(tag.override_name.as_deref(), Some("bio"));
        assert!(tag.omit_when_empty);
    }

    #[test]
    fn skip_marker_has_no_name() {
        let tag = TagMetadata::parse(r#"json:"-""#);
        assert_eq!(tag, TagMetadata::default());
    }

    #[test]
    fn empty_name_keeps_options() {
        let tag = TagMetadata::parse(r#"json:",omitempty""#);
        assert_eq!(tag.override_name, None);
        assert!(tag.omit_when_empty);
    }

    #[test]
    fn omitempty_must_be_an_option_token() {
        // A field literally named "omitempty" is not the option.
        let tag = TagMetadata::parse(r#"json:"omitempty""#);
        assert_eq!(tag.override_name.as_deref(), Some("omitempty"));
        assert!(!tag.omit_when_empty);

        let tag = TagMetadata::parse(r#"json:"id,string,omitempty""#);
        assert!(tag.omit_when_empty);
    }

    #[test]
    fn other_keys_are_ignored() {
        let tag = TagMetadata::parse(r#"db:"user_id" json:"userId" validate:"required""#);
        assert_eq!(tag.override_name.as_deref(), Some("userId"));

        let tag = TagMetadata::parse(r#"db:"user_id""#);
        assert_eq!(tag, TagMetadata::default());
    }

    #[test]
    fn unquote_literals() {
        assert_eq!(unquote_tag_literal(r#"`json:"id"`"#), r#"json:"id""#);
        assert_eq!(unquote_tag_literal(r#""json:\"id\"""#), r#"json:"id""#);
    }
}
