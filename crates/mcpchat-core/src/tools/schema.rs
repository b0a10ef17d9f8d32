//! Tool descriptor to function-declaration conversion

use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::types::{Tool, ToolDeclaration};

/// Schema conversion errors
#[derive(Error, Debug, PartialEq)]
pub enum SchemaError {
    #[error("Malformed schema for tool '{tool}': {reason}")]
    Malformed { tool: String, reason: String },
}

pub type SchemaResult<T> = Result<T, SchemaError>;

/// Convert tool descriptors into the declarations offered to the model
///
/// Order and count are preserved. Each declaration's parameters are an
/// object schema built from the descriptor's `properties` and `required`.
pub fn format_tools(tools: &[Tool]) -> SchemaResult<Vec<ToolDeclaration>> {
    tools.iter().map(format_tool).collect()
}

/// Convert a single descriptor
pub fn format_tool(tool: &Tool) -> SchemaResult<ToolDeclaration> {
    let malformed = |reason: &str| SchemaError::Malformed {
        tool: tool.name.clone(),
        reason: reason.to_string(),
    };

    let schema = match &tool.input_schema {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => return Err(malformed("input schema is not an object")),
    };

    let properties = match schema.and_then(|s| s.get("properties")) {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(Value::Object(props)) => Value::Object(props.clone()),
        Some(_) => return Err(malformed("`properties` is not an object")),
    };

    let required = match schema.and_then(|s| s.get("required")) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            if !items.iter().all(Value::is_string) {
                return Err(malformed("`required` contains a non-string entry"));
            }
            items.clone()
        }
        Some(_) => return Err(malformed("`required` is not an array")),
    };

    Ok(ToolDeclaration::function(
        tool.name.clone(),
        tool.description.clone(),
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterless_tool() {
        let tools = vec![Tool::new("lookup", "Look something up")
            .with_schema(json!({"type": "object", "properties": {}}))];

        let decls = format_tools(&tools).unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name(), "lookup");
        assert!(decls[0].required().is_empty());
        assert_eq!(decls[0].function.parameters["required"], json!([]));
    }

    #[test]
    fn test_properties_and_required_copied() {
        let tool = Tool::new("get-flag", "Fetch a flag").with_schema(json!({
            "type": "object",
            "properties": {
                "projectKey": { "type": "string" },
                "featureFlagKey": { "type": "string" }
            },
            "required": ["projectKey", "featureFlagKey"],
            "additionalProperties": false
        }));

        let decl = format_tool(&tool).unwrap();
        let params = &decl.function.parameters;
        assert_eq!(params["type"], "object");
        assert_eq!(params["properties"]["projectKey"]["type"], "string");
        assert_eq!(decl.required(), vec!["projectKey", "featureFlagKey"]);
        assert!(params.get("additionalProperties").is_none());
    }

    #[test]
    fn test_missing_schema_and_description() {
        let tool = Tool::new("ping", "");
        let decl = format_tool(&tool).unwrap();
        assert_eq!(decl.function.description, "");
        assert_eq!(decl.function.parameters["properties"], json!({}));
    }

    #[test]
    fn test_order_preserved() {
        let tools: Vec<Tool> = ["c", "a", "b"].iter().map(|n| Tool::new(*n, "")).collect();
        let names: Vec<String> = format_tools(&tools)
            .unwrap()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_malformed_schema() {
        let bad_props = Tool::new("x", "").with_schema(json!({"properties": [1, 2]}));
        assert!(matches!(format_tool(&bad_props), Err(SchemaError::Malformed { ref tool, .. }) if tool == "x"));

        let bad_required = Tool::new("y", "").with_schema(json!({"properties": {}, "required": "a"}));
        assert!(format_tool(&bad_required).is_err());

        let bad_entry = Tool::new("z", "").with_schema(json!({"required": [1]}));
        assert!(format_tool(&bad_entry).is_err());
    }
}
