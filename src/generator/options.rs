//! Generator options

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

use super::bootstrap::{MARKER_METADATA_NAME, NOTIFY_INTERFACE_METADATA_NAME};

/// Indentation used in generated fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum IndentStyle {
    Spaces(usize),
    Tabs,
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(4)
    }
}

impl IndentStyle {
    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        match self {
            IndentStyle::Spaces(width) => " ".repeat(width * level),
            IndentStyle::Tabs => "\t".repeat(level),
        }
    }
}

/// How skipped fields and types are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "interchange",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DiagnosticPolicy {
    /// Skip without diagnostics. Outcomes still record the reason.
    #[default]
    Silent,
    /// Report every skip as a warning.
    Warn,
    /// Report every skip as an error. The pass still completes.
    Error,
}

/// Options for a [`Generator`](super::Generator).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize), serde(default))]
pub struct GeneratorOptions {
    pub indent: IndentStyle,
    pub diagnostic_policy: DiagnosticPolicy,
    /// Warn when a `PropertyName` override is not a valid identifier.
    pub validate_property_names: bool,
    /// Start each fragment with `#nullable enable`.
    pub emit_nullable_directive: bool,
    /// Metadata name of the marker attribute.
    pub marker_attribute: String,
    /// Metadata name of the change-notification interface.
    pub notify_interface: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: IndentStyle::default(),
            diagnostic_policy: DiagnosticPolicy::default(),
            validate_property_names: false,
            emit_nullable_directive: true,
            marker_attribute: MARKER_METADATA_NAME.to_string(),
            notify_interface: NOTIFY_INTERFACE_METADATA_NAME.to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_diagnostic_policy(mut self, policy: DiagnosticPolicy) -> Self {
        self.diagnostic_policy = policy;
        self
    }

    pub fn with_property_name_validation(mut self, enabled: bool) -> Self {
        self.validate_property_names = enabled;
        self
    }

    pub fn with_nullable_directive(mut self, enabled: bool) -> Self {
        self.emit_nullable_directive = enabled;
        self
    }
}

#[cfg(feature = "interchange")]
impl GeneratorOptions {
    /// Parse options from JSON; missing keys take their defaults.
    pub fn from_json(input: &str) -> crate::error::Result<Self> {
        serde_json::from_str(input).map_err(|e| crate::error::Error::json(e.to_string()))
    }

    /// Parse options from YAML; missing keys take their defaults.
    pub fn from_yaml(input: &str) -> crate::error::Result<Self> {
        serde_yaml::from_str(input).map_err(|e| crate::error::Error::yaml(e.to_string()))
    }
}
