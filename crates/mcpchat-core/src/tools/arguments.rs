//! Tool-call argument decoding

use serde_json::Value;

use crate::types::ToolArguments;

/// Decode the model's argument string into a JSON object
///
/// Blank input, invalid JSON and non-object values all yield an empty
/// object. Use [`try_parse_arguments`] to tell those cases apart.
pub fn parse_arguments(raw: &str) -> ToolArguments {
    try_parse_arguments(raw).unwrap_or_default()
}

/// Like [`parse_arguments`], but `None` when the input is not usable
///
/// Blank input is not an error and gives `Some` of an empty object.
pub fn try_parse_arguments(raw: &str) -> Option<ToolArguments> {
    if raw.trim().is_empty() {
        return Some(ToolArguments::new());
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_passthrough() {
        let args = parse_arguments(r#"{"x":1}"#);
        assert_eq!(Value::Object(args), json!({"x": 1}));
    }

    #[test]
    fn test_key_order_kept() {
        let args = parse_arguments(r#"{"b":1,"a":2}"#);
        let keys: Vec<&str> = args.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_fallbacks() {
        assert!(parse_arguments("").is_empty());
        assert!(parse_arguments("   ").is_empty());
        assert!(parse_arguments("{not json").is_empty());
        assert!(parse_arguments("[1,2]").is_empty());
        assert!(parse_arguments("\"text\"").is_empty());
    }

    #[test]
    fn test_try_parse_distinguishes_blank() {
        assert_eq!(try_parse_arguments(""), Some(ToolArguments::new()));
        assert_eq!(try_parse_arguments("nope"), None);
    }
}
