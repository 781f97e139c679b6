//! Field helpers for the platform's loosely-typed JSON.
//!
//! The locator and menu endpoints are undocumented and not consistent about
//! types, so a bad field value falls back to its zero value instead of failing
//! the whole document. Syntactically invalid JSON is still an error.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Decodes `T`, or `T::default()` when the value is null or of the wrong shape.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decodes a code-keyed table, dropping entries that do not fit `T`.
pub fn lenient_map<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let table = match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries
            .into_iter()
            .filter_map(|(code, entry)| match T::deserialize(entry) {
                Ok(entry) => Some((code, entry)),
                Err(e) => {
                    tracing::debug!(%code, error = %e, "skipping malformed menu entry");
                    None
                }
            })
            .collect(),
        _ => HashMap::new(),
    };
    Ok(table)
}

/// Decodes a list element by element; a bad element becomes `T::default()`.
pub fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let list = match Value::deserialize(deserializer)? {
        Value::Array(elements) => elements
            .into_iter()
            .map(|element| T::deserialize(element).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    };
    Ok(list)
}

/// Accepts `"4336"` as well as `4336`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Accepts `20500` as well as `"20500"`.
pub fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Entry {
        #[serde(rename = "Name")]
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "lenient")]
        flag: bool,
        #[serde(default, deserialize_with = "lenient_map")]
        table: HashMap<String, Entry>,
        #[serde(default, deserialize_with = "lenient_seq")]
        codes: Vec<String>,
        #[serde(default, deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "number_or_numeric_string")]
        zip: u32,
    }

    #[test]
    fn test_wrong_types_fall_back_to_zero_values() {
        let doc: Doc =
            serde_json::from_str(r#"{"flag": "yes", "table": [], "id": null, "zip": "abc"}"#)
                .unwrap();
        assert!(!doc.flag);
        assert!(doc.table.is_empty());
        assert_eq!(doc.id, "");
        assert_eq!(doc.zip, 0);
    }

    #[test]
    fn test_malformed_table_entry_is_dropped() {
        let doc: Doc = serde_json::from_str(
            r#"{"table": {"A": {"Name": "Alpha"}, "B": {"Name": 7}, "C": "oops"}}"#,
        )
        .unwrap();
        assert_eq!(doc.table.len(), 1);
        assert_eq!(doc.table["A"], Entry { name: "Alpha".into() });
    }

    #[test]
    fn test_bad_list_element_keeps_the_rest() {
        let doc: Doc = serde_json::from_str(r#"{"codes": ["S_DX", 7, null, "S_MX"]}"#).unwrap();
        assert_eq!(doc.codes, vec!["S_DX", "", "", "S_MX"]);

        let doc: Doc = serde_json::from_str(r#"{"codes": {"S_DX": true}}"#).unwrap();
        assert!(doc.codes.is_empty());
    }

    #[test]
    fn test_numbers_and_strings_interchange() {
        let doc: Doc = serde_json::from_str(r#"{"id": 4336, "zip": " 20500 "}"#).unwrap();
        assert_eq!(doc.id, "4336");
        assert_eq!(doc.zip, 20500);

        let doc: Doc = serde_json::from_str(r#"{"id": "4336", "zip": 20500}"#).unwrap();
        assert_eq!(doc.id, "4336");
        assert_eq!(doc.zip, 20500);
    }

    #[test]
    fn test_invalid_json_still_fails() {
        assert!(serde_json::from_str::<Doc>(r#"{"flag": tru"#).is_err());
    }
}
