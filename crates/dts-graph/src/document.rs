use dts_core::errors::{ErrorInfo, SyncError};
use serde_json::{Map, Value};

/// Field that turns an object node into a leaf token.
pub const VALUE_FIELD: &str = "value";

fn document_error(id: &str, path: &[&str], message: impl Into<String>) -> SyncError {
    SyncError::Document(
        ErrorInfo::new("token_document_shape", message)
            .with_context("document", id)
            .with_context("path", path.join(".")),
    )
}

/// One hierarchical token document, validated on construction.
///
/// Object nodes carrying a `value` field are leaves; every other object node
/// is an interior node. Non-object interior entries (descriptions, comments)
/// are ignored during traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDocument {
    id: String,
    root: Map<String, Value>,
}

impl TokenDocument {
    /// Wraps a parsed JSON tree, rejecting roots that are not objects and
    /// leaves whose `value` is not a string, number or boolean.
    pub fn from_value(id: impl Into<String>, root: Value) -> Result<Self, SyncError> {
        let id = id.into();
        let Value::Object(root) = root else {
            return Err(document_error(&id, &[], "document root must be an object"));
        };
        let mut path = Vec::new();
        validate_node(&id, &root, &mut path)?;
        Ok(Self { id, root })
    }

    /// Parses and validates a document from raw JSON bytes.
    pub fn from_json_slice(id: impl Into<String>, bytes: &[u8]) -> Result<Self, SyncError> {
        let id = id.into();
        let root: Value = serde_json::from_slice(bytes).map_err(|err| {
            SyncError::Document(
                ErrorInfo::new("token_document_parse", err.to_string())
                    .with_context("document", id.clone()),
            )
        })?;
        Self::from_value(id, root)
    }

    /// Identifier recorded as the source document of every leaf.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top-level object of the document.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }
}

fn validate_node<'a>(
    id: &str,
    node: &'a Map<String, Value>,
    path: &mut Vec<&'a str>,
) -> Result<(), SyncError> {
    if let Some(value) = node.get(VALUE_FIELD) {
        return match value {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(()),
            _ => Err(document_error(
                id,
                path,
                "leaf value must be a string, number or boolean",
            )),
        };
    }
    for (key, child) in node {
        if let Value::Object(child) = child {
            path.push(key);
            validate_node(id, child, path)?;
            path.pop();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_root() {
        let err = TokenDocument::from_value("mode", json!([1, 2])).unwrap_err();
        assert_eq!(err.info().code, "token_document_shape");
    }

    #[test]
    fn rejects_structured_leaf_values() {
        let doc = json!({ "Spacing": { "S": { "value": { "px": 8 } } } });
        let err = TokenDocument::from_value("layout", doc).unwrap_err();
        assert_eq!(err.info().context["path"], "Spacing.S");
    }

    #[test]
    fn accepts_scalar_leaves_and_ignores_annotations() {
        let doc = json!({
            "$description": "layout primitives",
            "Spacing": { "S": { "value": 8, "type": "spacing" } }
        });
        let doc = TokenDocument::from_value("layout", doc).expect("valid");
        assert_eq!(doc.id(), "layout");
    }
}
