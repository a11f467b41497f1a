//! Error types for template definition and reuse

use thiserror::Error;

use crate::template::TemplateKey;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A reuse ran before any definition registered its key in the owner scope
    #[error("{}", not_defined_message(.key, .debug_name))]
    NotDefined {
        key: TemplateKey,
        debug_name: Option<String>,
    },

    /// The key was defined with one props/output signature and reused with another
    #[error("reusable template {template} was defined as `{found}` but reused as `{expected}`")]
    SignatureMismatch {
        template: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl TemplateError {
    /// Create a not-defined error for a key
    pub fn not_defined(key: TemplateKey, debug_name: Option<String>) -> Self {
        Self::NotDefined { key, debug_name }
    }

    /// The key this error refers to, if it is a lookup failure
    pub fn key(&self) -> Option<&TemplateKey> {
        match self {
            TemplateError::NotDefined { key, .. } => Some(key),
            TemplateError::SignatureMismatch { .. } => None,
        }
    }
}

fn not_defined_message(key: &TemplateKey, debug_name: &Option<String>) -> String {
    match (key, debug_name.as_deref()) {
        (TemplateKey::Name(name), _) => format!(
            "Reusable template \"{}\" is not defined, have you used <DefineTemplate name=\"{}\">?",
            name, name
        ),
        (TemplateKey::Token(_), Some(name)) => {
            format!("Reusable template \"{}\" is not defined", name)
        }
        (TemplateKey::Token(_), None) => "Reusable template is not defined".to_string(),
    }
}
