//! Response validation. Pure: raw completion text in, typed artifact or error out.
//!
//! The whole artifact is accepted or rejected. Fields are never coerced or
//! defaulted; the first invalid field is reported.

use crate::domain::DomainError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Expected shape of one required field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    /// Array of strings with length bounds (inclusive).
    TextList { min: usize, max: Option<usize> },
    /// String from a fixed label set.
    Label(&'static [&'static str]),
    /// Number in `[min, max]`.
    Number { min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Required fields of one artifact type, checked in order.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSchema {
    pub artifact: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ResponseSchema {
    /// Parse and check `raw`, returning the JSON object.
    pub fn validate(&self, raw: &str) -> Result<Map<String, Value>, DomainError> {
        // Envelope clean-up only applies when the raw text is not JSON itself.
        let value: Value = match serde_json::from_str(raw.trim()) {
            Ok(value) => value,
            Err(_) => serde_json::from_str(&extract_json_object(raw)).map_err(|e| {
                DomainError::MalformedResponse(format!("invalid JSON: {}", e))
            })?,
        };
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(DomainError::MalformedResponse(format!(
                    "expected a JSON object, got {}",
                    type_name(&other)
                )));
            }
        };

        for spec in self.fields {
            let value = match object.get(spec.name) {
                None => return Err(violation(spec.name, "missing")),
                Some(Value::Null) => return Err(violation(spec.name, "null")),
                Some(v) => v,
            };
            check_field(spec, value)?;
        }
        Ok(object)
    }

    /// Validate, then deserialize into the artifact type.
    pub fn parse<A: DeserializeOwned>(&self, raw: &str) -> Result<A, DomainError> {
        let object = self.validate(raw)?;
        serde_json::from_value(Value::Object(object)).map_err(|e| DomainError::SchemaViolation {
            field: self.artifact.to_string(),
            reason: e.to_string(),
        })
    }
}

fn check_field(spec: &FieldSpec, value: &Value) -> Result<(), DomainError> {
    match spec.kind {
        FieldKind::Text => {
            if !value.is_string() {
                return Err(wrong_type(spec.name, "string", value));
            }
        }
        FieldKind::TextList { min, max } => {
            let Some(items) = value.as_array() else {
                return Err(wrong_type(spec.name, "array of strings", value));
            };
            if let Some(pos) = items.iter().position(|i| !i.is_string()) {
                return Err(violation(
                    spec.name,
                    &format!("element {} is {}, expected string", pos, type_name(&items[pos])),
                ));
            }
            if items.len() < min || max.is_some_and(|m| items.len() > m) {
                let bound = match max {
                    Some(m) => format!("{}..={}", min, m),
                    None => format!("at least {}", min),
                };
                return Err(violation(
                    spec.name,
                    &format!("has {} entries, expected {}", items.len(), bound),
                ));
            }
        }
        FieldKind::Label(labels) => {
            let Some(label) = value.as_str() else {
                return Err(wrong_type(spec.name, "string label", value));
            };
            if !labels.contains(&label) {
                return Err(violation(
                    spec.name,
                    &format!("`{}` is not one of {}", label, labels.join("|")),
                ));
            }
        }
        FieldKind::Number { min, max } => {
            let Some(n) = value.as_f64() else {
                return Err(wrong_type(spec.name, "number", value));
            };
            if !(min..=max).contains(&n) {
                return Err(violation(
                    spec.name,
                    &format!("{} is outside [{}, {}]", n, min, max),
                ));
            }
        }
    }
    Ok(())
}

fn violation(field: &str, reason: &str) -> DomainError {
    DomainError::SchemaViolation {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn wrong_type(field: &str, expected: &str, value: &Value) -> DomainError {
    violation(
        field,
        &format!("expected {}, got {}", expected, type_name(value)),
    )
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Strip a markdown code fence or surrounding prose around a JSON object.
///
/// Models sometimes wrap JSON in ```json blocks even in JSON mode. Only the
/// envelope is touched; the object itself is passed through as-is.
pub fn extract_json_object(raw_text: &str) -> String {
    let trimmed = raw_text.trim();

    // Handle markdown code blocks: ```json ... ``` or ``` ... ```
    if let Some(rest) = trimmed.strip_prefix("```") {
        let without_prefix = rest.strip_prefix("json").unwrap_or(rest);
        if let Some(end_idx) = without_prefix.rfind("```") {
            return without_prefix[..end_idx].trim().to_string();
        }
        return without_prefix.trim().to_string();
    }

    // An object nested in an array is not a bare object in prose.
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        let inside_array = trimmed.find('[').is_some_and(|b| b < start);
        if start < end && !inside_array {
            return trimmed[start..=end].to_string();
        }
    }

    trimmed.to_string()
}
