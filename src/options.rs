//! Rule options: the protected namespace.
//!
//! The host framework hands rules their options as a JSON array in the
//! `[true, "@battlestar"]` convention, where booleans are the host's
//! enable flags and the first string entry is the namespace. An absent or
//! empty namespace disables the rule entirely.

use serde_json::Value;

/// Options for the module boundary rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOptions {
    namespace: Option<String>,
}

/// Errors when parsing the host's option array.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// The raw option text is not valid JSON.
    #[error("invalid options: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
    /// The option value is valid JSON but not an array.
    #[error("options must be a JSON array, got {found}")]
    NotAnArray {
        /// JSON type name of the value actually found.
        found: &'static str,
    },
}

impl RuleOptions {
    /// Creates options with the given namespace.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
        }
    }

    /// Creates options with no namespace; the rule emits no findings.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// The configured namespace, if any. An empty string counts as absent.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    /// Builds options from the host's option array.
    ///
    /// The first string entry is taken as the namespace; booleans and any
    /// other entries are skipped. A missing string entry disables the rule.
    #[must_use]
    pub fn from_args(args: &[Value]) -> Self {
        let namespace = args
            .iter()
            .find_map(|arg| arg.as_str())
            .map(ToOwned::to_owned);
        Self { namespace }
    }

    /// Parses options from the raw JSON text of the option array.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or not an array.
    pub fn from_json_str(raw: &str) -> Result<Self, OptionsError> {
        let value: Value = serde_json::from_str(raw).map_err(|e| OptionsError::Parse {
            message: e.to_string(),
        })?;
        match value {
            Value::Array(args) => Ok(Self::from_args(&args)),
            other => Err(OptionsError::NotAnArray {
                found: json_type_name(&other),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
