//! # Book Detail Decoder
//!
//! Normalizes the loosely-typed `*_book_details` payloads attached to trade requests
//! into a canonical [`BookDetails`] record.
//!
//! The backend does not guarantee strict JSON here: depending on how a request was
//! stored, details arrive as a JSON object, as the text of a Python dict
//! (`{'title': 'Dune', 'image': None}`), or not at all. Rendering code only ever sees
//! [`BookDetails`]; swapping in strict parsing later only touches this module.
//!
//! Decoding never fails. Anything unreadable degrades to a record titled with the raw
//! input, and a missing title becomes [`UNKNOWN_TITLE`].

use serde_json::{Map, Value};

/// Title shown when the payload carries no usable title
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Canonical book details for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub title: String,
    /// Empty when unknown
    pub author: String,
    /// Cover image reference, empty when unknown
    pub image: String,
}

impl BookDetails {
    /// Record for absent details
    pub fn unknown() -> Self {
        Self::titled(UNKNOWN_TITLE)
    }

    /// Record with only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            image: String::new(),
        }
    }
}

impl Default for BookDetails {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Decode a details payload of any shape.
///
/// - absent, `null`, `false`, `0`, `""` → `{title: "Unknown"}`
/// - object → field projection (`image` falls back to `img`)
/// - string → parsed as a Python-literal dict, see [`decode_text`]
/// - any other scalar → titled with its text
///
/// # Examples
///
/// ```rust
/// use bookswap_terminal::utils::details::decode_details;
/// use serde_json::json;
///
/// let text = json!("{'title': 'Dune', 'author': 'Herbert', 'image': None}");
/// let details = decode_details(Some(&text));
/// assert_eq!(details.title, "Dune");
/// assert_eq!(details.author, "Herbert");
/// assert_eq!(details.image, "");
/// ```
pub fn decode_details(input: Option<&Value>) -> BookDetails {
    match input {
        None | Some(Value::Null) | Some(Value::Bool(false)) => BookDetails::unknown(),
        Some(Value::Object(map)) => project(map),
        Some(Value::Array(_)) => BookDetails::unknown(),
        Some(Value::String(text)) if text.is_empty() => BookDetails::unknown(),
        Some(Value::String(text)) => decode_text(text),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => BookDetails::unknown(),
        Some(scalar) => BookDetails::titled(scalar.to_string()),
    }
}

/// Decode the text form of a details payload.
///
/// The text is rewritten from Python literal syntax to JSON (single-quoted strings
/// become double-quoted, `None`/`True`/`False` become `null`/`true`/`false`) and then
/// parsed strictly. If that fails the raw text becomes the title.
pub fn decode_text(text: &str) -> BookDetails {
    match serde_json::from_str::<Value>(&python_literal_to_json(text)) {
        Ok(Value::Object(map)) => project(&map),
        Ok(Value::Null) | Err(_) => BookDetails::titled(text),
        Ok(_) => BookDetails::unknown(),
    }
}

fn project(map: &Map<String, Value>) -> BookDetails {
    BookDetails {
        title: field_text(map, "title").unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        author: field_text(map, "author").unwrap_or_default(),
        image: field_text(map, "image")
            .or_else(|| field_text(map, "img"))
            .unwrap_or_default(),
    }
}

/// Text of a field, `None` when missing, null, empty or otherwise blank-ish
fn field_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Rewrite Python literal syntax into JSON syntax.
///
/// String contents are copied untouched apart from quote escaping, so titles such as
/// `"Ender's Game"` or `'None of This Is True'` survive. Keywords are only rewritten
/// outside strings.
fn python_literal_to_json(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                let delimiter = c;
                out.push('"');
                let mut closed = false;
                while let Some(ch) = chars.next() {
                    match ch {
                        '\\' => match chars.next() {
                            // \' is valid Python but not JSON
                            Some('\'') => out.push('\''),
                            Some(escaped) => {
                                out.push('\\');
                                out.push(escaped);
                            }
                            None => out.push('\\'),
                        },
                        ch if ch == delimiter => {
                            closed = true;
                            break;
                        }
                        '"' => out.push_str("\\\""),
                        ch => out.push(ch),
                    }
                }
                if closed {
                    out.push('"');
                }
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '_' {
                        word.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                out.push_str(match word.as_str() {
                    "None" => "null",
                    "True" => "true",
                    "False" => "false",
                    other => other,
                });
            }
            c => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> BookDetails {
        decode_details(Some(&value))
    }

    #[test]
    fn test_python_dict_text() {
        let details = decode(json!("{'title': 'Dune', 'author': 'Herbert', 'image': None}"));
        assert_eq!(
            details,
            BookDetails {
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                image: String::new(),
            }
        );
    }

    #[test]
    fn test_absent_and_falsy_inputs_are_unknown() {
        assert_eq!(decode_details(None), BookDetails::unknown());
        assert_eq!(decode(Value::Null), BookDetails::unknown());
        assert_eq!(decode(json!("")), BookDetails::unknown());
        assert_eq!(decode(json!(false)), BookDetails::unknown());
        assert_eq!(decode(json!(0)), BookDetails::unknown());
        assert_eq!(BookDetails::unknown().author, "");
        assert_eq!(BookDetails::unknown().image, "");
    }

    #[test]
    fn test_object_is_projected_with_defaults() {
        let details = decode(json!({"title": "Emma", "img": "emma.jpg", "genre": "Classic"}));
        assert_eq!(details.title, "Emma");
        assert_eq!(details.author, "");
        assert_eq!(details.image, "emma.jpg");

        let untitled = decode(json!({"author": "Austen", "image": "cover.png", "img": "other.png"}));
        assert_eq!(untitled.title, UNKNOWN_TITLE);
        assert_eq!(untitled.author, "Austen");
        assert_eq!(untitled.image, "cover.png");
    }

    #[test]
    fn test_empty_and_null_fields_default() {
        let details = decode(json!({"title": "", "author": null, "image": ""}));
        assert_eq!(details, BookDetails::unknown());
    }

    #[test]
    fn test_python_booleans_and_double_quoted_strings() {
        let details = decode(json!(
            r#"{'title': "Ender's Game", 'author': 'Card', 'img': 'ender.jpg', 'signed': True, 'lent': False}"#
        ));
        assert_eq!(details.title, "Ender's Game");
        assert_eq!(details.author, "Card");
        assert_eq!(details.image, "ender.jpg");
    }

    #[test]
    fn test_keywords_inside_strings_are_preserved() {
        let details = decode(json!("{'title': 'None of This Is True', 'author': 'Lisa Jewell'}"));
        assert_eq!(details.title, "None of This Is True");
    }

    #[test]
    fn test_escaped_single_quote() {
        let details = decode(json!(r#"{'title': 'Ender\'s Game'}"#));
        assert_eq!(details.title, "Ender's Game");
    }

    #[test]
    fn test_malformed_text_falls_back_to_raw_title() {
        for raw in ["Dune", "{'title': 'Dune'", "{title: Dune}", "None", "   ", "{'title': 'x' 'y'}"] {
            let details = decode(json!(raw));
            assert_eq!(details.title, raw, "input {:?}", raw);
            assert_eq!(details.author, "");
            assert_eq!(details.image, "");
        }
    }

    #[test]
    fn test_non_object_text_is_unknown() {
        assert_eq!(decode(json!("'Dune'")).title, UNKNOWN_TITLE);
        assert_eq!(decode(json!("[1, 2]")).title, UNKNOWN_TITLE);
        assert_eq!(decode(json!("42")).title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_other_scalars_become_titles() {
        assert_eq!(decode(json!(42)).title, "42");
        assert_eq!(decode(json!(true)).title, "true");
        assert_eq!(decode(json!([])).title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_decoded_title_is_never_empty() {
        let inputs = [
            json!(null),
            json!(""),
            json!(" "),
            json!("{}"),
            json!("{'title': ''}"),
            json!({}),
            json!({"title": null}),
            json!("{'title': None}"),
            json!("\u{0}"),
        ];
        for input in inputs {
            assert!(!decode(input.clone()).title.is_empty(), "input {}", input);
        }
    }
}
