//! Reading a player roster from its JSON wire form.

use serde_json::Value;

use crate::error::BracketError;

/// Parse a JSON array of player identifiers; order is seed order.
///
/// Identifiers may be any JSON value and are returned untouched.
///
/// A `null` identifier is accepted too, but an empty slot also serialises
/// as `null`: in the generated document a player named `null` reads the
/// same as a slot awaiting a result, and [`Bracket::from_json`] reads it
/// back as empty. Hosts that need to tell them apart should not use `null`
/// as an identifier.
///
/// [`Bracket::from_json`]: crate::Bracket::from_json
pub fn parse_roster(input: &str) -> Result<Vec<Value>, BracketError> {
    let value: Value = serde_json::from_str(input)?;
    match value {
        Value::Array(players) => Ok(players),
        other => Err(BracketError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
