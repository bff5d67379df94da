//! Reading raw record documents
//!
//! A document is whatever the transport produced for a list call: a JSON
//! array of records, a single record, `null`, or a list envelope of the form
//! `{"items": [...]}`. `null` and non-object entries inside an array are kept
//! as `None` so the mappers can default them.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cli::args::InputArgs;
use crate::error::{InputError, Result};

/// Read the document named by `--input` and parse its records
pub fn read_records<T: DeserializeOwned>(args: &InputArgs) -> Result<Vec<Option<T>>> {
    let contents = if args.is_stdin() {
        log::debug!("Reading records from stdin");
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        log::debug!("Reading records from {}", args.input);
        std::fs::read_to_string(&args.input)?
    };

    parse_records(&contents)
}

/// Parse a document into records
pub fn parse_records<T: DeserializeOwned>(contents: &str) -> Result<Vec<Option<T>>> {
    if contents.trim().is_empty() {
        return Err(InputError::Empty.into());
    }

    let document: Value = serde_json::from_str(contents)?;

    let items = match document {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(mut map) if matches!(map.get("items"), Some(Value::Array(_))) => {
            match map.remove("items") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            }
        }
        Value::Object(map) => vec![Value::Object(map)],
        other => return Err(InputError::UnexpectedShape(describe(&other).to_string()).into()),
    };

    let records: Vec<Option<T>> = items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => serde_json::from_value(item)
                .inspect_err(|err| log::debug!("Skipping malformed record: {}", err))
                .ok(),
            Value::Null => None,
            other => {
                log::debug!("Skipping {} in record list", describe(&other));
                None
            }
        })
        .collect();

    log::debug!("Parsed {} records", records.len());

    Ok(records)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
