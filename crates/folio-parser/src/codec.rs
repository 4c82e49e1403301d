//! Frontmatter codec for the restricted header subset.
//!
//! The header sits between a `---` marker pair at the top of the file. The
//! grammar accepts three value shapes:
//!
//! ```text
//! key: scalar value
//! key:
//!   - list item
//! key:
//!   - nested_key: value     (legacy mapping-list shape)
//! ```
//!
//! `decode` fails with a [`ParseError`] on anything outside the subset;
//! `encode` followed by `decode` reproduces the original mapping exactly for
//! any mapping the encoder itself can produce.

use folio_core::frontmatter::{Frontmatter, Value};
use thiserror::Error;

/// Errors from decoding a frontmatter header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The file does not start with the `---` delimiter.
    #[error("missing frontmatter header (file must start with '---')")]
    MissingHeader,

    /// The opening `---` was never closed.
    #[error("unterminated frontmatter header (no closing '---')")]
    UnterminatedHeader,

    /// Tabs are not valid indentation inside the header.
    #[error("tab indentation in frontmatter at header line {line}")]
    TabIndentation { line: usize },

    /// The same key appeared twice.
    #[error("duplicate frontmatter key '{key}'")]
    DuplicateKey { key: String },

    /// A list mixed plain items with mapping items.
    #[error("list under '{key}' mixes plain items and key-value items")]
    MixedList { key: String },

    /// A header line matched no shape in the subset grammar.
    #[error("malformed frontmatter at header line {line}: {content:?}")]
    BadLine { line: usize, content: String },
}

enum ListItem {
    Plain(String),
    Mapping(String, String),
}

/// Decode `text` into its frontmatter mapping and remaining body.
///
/// # Errors
///
/// Returns a [`ParseError`] when the delimiter pair is malformed or any
/// header line violates the subset grammar. Never panics on input.
pub fn decode(text: &str) -> Result<(Frontmatter, String), ParseError> {
    let rest = text.strip_prefix("---\n").ok_or(ParseError::MissingHeader)?;

    let (header, body) = if let Some(after) = rest.strip_prefix("---\n") {
        ("", after)
    } else if rest == "---" {
        ("", "")
    } else if let Some(end) = rest.find("\n---\n") {
        (&rest[..end], &rest[end + 5..])
    } else if let Some(stripped) = rest.strip_suffix("\n---") {
        (stripped, "")
    } else {
        return Err(ParseError::UnterminatedHeader);
    };

    let mut frontmatter = Frontmatter::new();
    let mut pending: Option<(String, Vec<ListItem>)> = None;

    for (index, line) in header.lines().enumerate() {
        let line_no = index + 2; // 1-based, counting the opening '---'

        if line.trim().is_empty() {
            continue;
        }

        let indent_len = line.len() - line.trim_start().len();
        if line[..indent_len].contains('\t') {
            return Err(ParseError::TabIndentation { line: line_no });
        }

        let trimmed = line.trim_start();
        if let Some(item) = trimmed.strip_prefix("- ") {
            let Some((_, items)) = pending.as_mut() else {
                return Err(ParseError::BadLine {
                    line: line_no,
                    content: line.to_string(),
                });
            };
            items.push(parse_list_item(item));
            continue;
        }

        // A new top-level key closes any open list.
        if let Some((key, items)) = pending.take() {
            insert_list(&mut frontmatter, key, items)?;
        }

        let (key, remainder) = split_key(line).ok_or_else(|| ParseError::BadLine {
            line: line_no,
            content: line.to_string(),
        })?;
        if frontmatter.contains_key(key) {
            return Err(ParseError::DuplicateKey {
                key: key.to_string(),
            });
        }

        match remainder {
            None => pending = Some((key.to_string(), Vec::new())),
            Some("[]") => frontmatter.insert(key, Value::List(Vec::new())),
            Some(raw) => frontmatter.insert(key, Value::Scalar(unquote(raw))),
        }
    }

    if let Some((key, items)) = pending.take() {
        insert_list(&mut frontmatter, key, items)?;
    }

    Ok((frontmatter, body.to_string()))
}

/// Encode a frontmatter mapping back into header text, delimiters included.
#[must_use]
pub fn encode(frontmatter: &Frontmatter) -> String {
    let mut out = String::from("---\n");
    for (key, value) in frontmatter.iter() {
        match value {
            Value::Scalar(scalar) => {
                out.push_str(key);
                out.push_str(": ");
                out.push_str(&quote_scalar(scalar));
                out.push('\n');
            }
            Value::List(items) if items.is_empty() => {
                out.push_str(key);
                out.push_str(": []\n");
            }
            Value::List(items) => {
                out.push_str(key);
                out.push_str(":\n");
                for item in items {
                    out.push_str("  - ");
                    out.push_str(&quote_item(item));
                    out.push('\n');
                }
            }
            Value::MappingList(entries) => {
                out.push_str(key);
                out.push_str(":\n");
                for (entry_key, entry_value) in entries {
                    out.push_str("  - ");
                    out.push_str(entry_key);
                    out.push_str(": ");
                    out.push_str(entry_value);
                    out.push('\n');
                }
            }
        }
    }
    out.push_str("---\n");
    out
}

/// Split a `key:` or `key: value` line. Returns `None` when the key part is
/// empty or contains whitespace.
fn split_key(line: &str) -> Option<(&str, Option<&str>)> {
    if let Some(key) = line.strip_suffix(':') {
        if key_is_valid(key) && !key.contains(": ") {
            return Some((key, None));
        }
    }
    let colon = line.find(": ")?;
    let key = &line[..colon];
    if !key_is_valid(key) {
        return None;
    }
    Some((key, Some(&line[colon + 2..])))
}

fn key_is_valid(key: &str) -> bool {
    !key.is_empty() && !key.contains(char::is_whitespace)
}

fn parse_list_item(item: &str) -> ListItem {
    if item.starts_with('"') {
        return ListItem::Plain(unquote(item));
    }
    if let Some(colon) = item.find(": ") {
        let key = &item[..colon];
        if key_is_valid(key) {
            return ListItem::Mapping(key.to_string(), item[colon + 2..].to_string());
        }
    }
    ListItem::Plain(item.to_string())
}

fn insert_list(
    frontmatter: &mut Frontmatter,
    key: String,
    items: Vec<ListItem>,
) -> Result<(), ParseError> {
    let mappings = items
        .iter()
        .filter(|item| matches!(item, ListItem::Mapping(..)))
        .count();

    if mappings == 0 {
        let plain = items
            .into_iter()
            .map(|item| match item {
                ListItem::Plain(value) => value,
                ListItem::Mapping(..) => unreachable!("counted above"),
            })
            .collect();
        frontmatter.insert(key, Value::List(plain));
        Ok(())
    } else if mappings == items.len() {
        let entries = items
            .into_iter()
            .map(|item| match item {
                ListItem::Mapping(entry_key, entry_value) => (entry_key, entry_value),
                ListItem::Plain(_) => unreachable!("counted above"),
            })
            .collect();
        frontmatter.insert(key, Value::MappingList(entries));
        Ok(())
    } else {
        Err(ParseError::MixedList { key })
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value != value.trim()
        || value.starts_with('"')
        || value.starts_with('#')
        || value == "[]"
}

fn quote_scalar(value: &str) -> String {
    if needs_quoting(value) {
        quote(value)
    } else {
        value.to_string()
    }
}

/// List items additionally quote anything the item grammar would re-read as
/// a mapping entry or a nested list marker.
fn quote_item(value: &str) -> String {
    let looks_like_mapping = value
        .find(": ")
        .is_some_and(|colon| key_is_valid(&value[..colon]));
    if needs_quoting(value) || looks_like_mapping || value.starts_with("- ") {
        quote(value)
    } else {
        value.to_string()
    }
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn unquote(raw: &str) -> String {
    let Some(inner) = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return raw.to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut escaped = false;
    for c in inner.chars() {
        if escaped {
            out.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use folio_core::frontmatter::{Frontmatter, Value};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{ParseError, decode, encode};

    fn fm(entries: Vec<(&str, Value)>) -> Frontmatter {
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    #[test]
    fn decodes_scalars_lists_and_body() {
        let text = "---\nname: error-handling\ndescription: How we do errors\nrelated:\n  - guides/logging.md\n  - https://example.com/post\n---\nBody text here.\n";
        let (frontmatter, body) = decode(text).unwrap();

        assert_eq!(frontmatter.get_scalar("name"), Some("error-handling"));
        assert_eq!(
            frontmatter.get("related"),
            Some(&Value::List(vec![
                "guides/logging.md".into(),
                "https://example.com/post".into(),
            ]))
        );
        assert_eq!(body, "Body text here.\n");
    }

    #[test]
    fn decodes_legacy_mapping_list() {
        let text = "---\nname: survey\nsources:\n  - url: https://example.com\n  - url: https://example.org\n---\n";
        let (frontmatter, _) = decode(text).unwrap();
        assert_eq!(
            frontmatter.get("sources"),
            Some(&Value::MappingList(vec![
                ("url".into(), "https://example.com".into()),
                ("url".into(), "https://example.org".into()),
            ]))
        );
    }

    #[test]
    fn decodes_empty_list_shapes() {
        let (frontmatter, _) = decode("---\nsources: []\n---\n").unwrap();
        assert_eq!(frontmatter.get("sources"), Some(&Value::List(vec![])));

        let (frontmatter, _) = decode("---\nsources:\n---\n").unwrap();
        assert_eq!(frontmatter.get("sources"), Some(&Value::List(vec![])));
    }

    #[rstest]
    #[case("no header at all\n", ParseError::MissingHeader)]
    #[case("---\nname: x\n", ParseError::UnterminatedHeader)]
    #[case(
        "---\nname: x\nname: y\n---\n",
        ParseError::DuplicateKey { key: "name".into() }
    )]
    #[case(
        "---\nitems:\n  - plain\n  - key: value\n---\n",
        ParseError::MixedList { key: "items".into() }
    )]
    #[case(
        "---\n- stray item\n---\n",
        ParseError::BadLine { line: 2, content: "- stray item".into() }
    )]
    #[case(
        "---\nnested: {a: 1}\njunk\n---\n",
        ParseError::BadLine { line: 3, content: "junk".into() }
    )]
    #[case(
        "---\n\t- item\n---\n",
        ParseError::TabIndentation { line: 2 }
    )]
    fn rejects_out_of_subset_input(#[case] text: &str, #[case] expected: ParseError) {
        assert_eq!(decode(text).unwrap_err(), expected);
    }

    #[test]
    fn unknown_keys_pass_through_unchanged() {
        let text = "---\nname: x\ndescription: y\nx_custom: kept verbatim\n---\n";
        let (frontmatter, _) = decode(text).unwrap();
        let reencoded = encode(&frontmatter);
        assert_eq!(reencoded, text);
    }

    #[test]
    fn round_trip_law() {
        let cases = vec![
            fm(vec![
                ("name", Value::Scalar("alpha".into())),
                ("description", Value::Scalar("with: colon inside".into())),
            ]),
            fm(vec![
                ("name", Value::Scalar(String::new())),
                ("tags", Value::List(vec!["a".into(), "b: tricky".into()])),
            ]),
            fm(vec![
                ("sources", Value::List(vec![])),
                (
                    "related",
                    Value::MappingList(vec![("path".into(), "guides/a.md".into())]),
                ),
            ]),
            fm(vec![(
                "quoted",
                Value::Scalar("\"already quoted\"".into()),
            )]),
            fm(vec![("note", Value::Scalar("  padded  ".into()))]),
        ];

        for mapping in cases {
            let (decoded, body) = decode(&encode(&mapping)).unwrap();
            assert_eq!(decoded, mapping);
            assert_eq!(body, "");
        }
    }

    #[test]
    fn empty_header_is_valid() {
        let (frontmatter, body) = decode("---\n---\nhello\n").unwrap();
        assert!(frontmatter.is_empty());
        assert_eq!(body, "hello\n");
    }
}
