//! Tool parameter declarations.
//!
//! Each tool declares its parameters as [`ParamSpec`]s. The same list drives
//! the advertised JSON schema, argument validation, and where each value
//! lands in the outgoing request.

use assura_core::{Error, Result};
use serde_json::{Map, Value, json};

/// JSON type of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// JSON string.
    String,
    /// Whole number.
    Integer,
    /// Any number.
    Number,
    /// `true` / `false`.
    Boolean,
    /// JSON array.
    Array,
    /// JSON object.
    Object,
}

impl ParamKind {
    /// JSON-schema type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Whether `value` has this type.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

/// Where a parameter's value goes in the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into `{name}` in the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// A field of the JSON body.
    Body,
    /// Sent as the named request header.
    Header(&'static str),
    /// Consumed by authentication or tenant scoping; never forwarded.
    Auth,
}

/// One declared tool parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSpec {
    /// Argument name as the client sends it.
    pub name: String,
    /// Expected JSON type.
    pub kind: ParamKind,
    /// Whether the argument must be present.
    pub required: bool,
    /// Shown to the model in the schema.
    pub description: String,
    /// Request placement.
    pub location: ParamLocation,
}

impl ParamSpec {
    fn new(
        name: impl Into<String>,
        kind: ParamKind,
        location: ParamLocation,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            description: description.into(),
            location,
        }
    }

    /// A required string path segment.
    pub fn path(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ParamKind::String, ParamLocation::Path, description).required()
    }

    /// An optional query parameter.
    pub fn query(name: impl Into<String>, kind: ParamKind, description: impl Into<String>) -> Self {
        Self::new(name, kind, ParamLocation::Query, description)
    }

    /// An optional body field.
    pub fn body(name: impl Into<String>, kind: ParamKind, description: impl Into<String>) -> Self {
        Self::new(name, kind, ParamLocation::Body, description)
    }

    /// An optional string sent as request header `header`.
    pub fn header(
        name: impl Into<String>,
        header: &'static str,
        description: impl Into<String>,
    ) -> Self {
        Self::new(name, ParamKind::String, ParamLocation::Header(header), description)
    }

    /// An optional string used only for auth or tenant scoping.
    pub fn auth(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ParamKind::String, ParamLocation::Auth, description)
    }

    /// Mark the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn schema(&self) -> Value {
        json!({
            "type": self.kind.as_str(),
            "description": self.description,
        })
    }
}

/// Build the `type: object` input schema for a parameter list.
pub fn input_schema(params: &[ParamSpec]) -> Map<String, Value> {
    let properties: Map<String, Value> = params
        .iter()
        .map(|p| (p.name.clone(), p.schema()))
        .collect();
    let required: Vec<Value> = params
        .iter()
        .filter(|p| p.required)
        .map(|p| Value::String(p.name.clone()))
        .collect();

    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), Value::Array(required));
    }
    schema
}

/// Check raw tool arguments against a parameter list.
///
/// `null` arguments count as an empty object. Unknown keys pass through.
pub fn validate(params: &[ParamSpec], args: Value) -> Result<Map<String, Value>> {
    let map = match args {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(Error::invalid(format!(
                "arguments must be an object, got {}",
                json_type(&other)
            )));
        }
    };

    for spec in params {
        match map.get(&spec.name) {
            None | Some(Value::Null) if spec.required => {
                return Err(Error::invalid_param(&spec.name, "is required"));
            }
            None | Some(Value::Null) => {}
            Some(value) if !spec.kind.accepts(value) => {
                return Err(Error::invalid_param(
                    &spec.name,
                    format!("expected {}, got {}", spec.kind.as_str(), json_type(value)),
                ));
            }
            Some(Value::String(s))
                if spec.location == ParamLocation::Path && s.trim().is_empty() =>
            {
                return Err(Error::invalid_param(&spec.name, "must not be empty"));
            }
            Some(_) => {}
        }
    }

    Ok(map)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Tests
// ============================================================================
