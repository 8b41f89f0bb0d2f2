//! Reporting skipped fields and types.
//!
//! The generator never fails a pass. Whether a skip surfaces as a
//! diagnostic is decided by the configured [`DiagnosticPolicy`].

use std::sync::Arc;

use crate::base::{SymbolId, TextRange};
use crate::generator::{DiagnosticPolicy, SkipReason};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message attached to a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The symbol the diagnostic is about.
    pub symbol: SymbolId,
    /// Source range of the declaration, when the host supplied one.
    pub range: Option<TextRange>,
    pub severity: Severity,
    /// Diagnostic code (e.g., "AN0001").
    pub code: &'static str,
    pub message: Arc<str>,
}

impl Diagnostic {
    pub fn new(
        symbol: SymbolId,
        severity: Severity,
        code: &'static str,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            symbol,
            range: None,
            severity,
            code,
            message: message.into(),
        }
    }

    pub fn with_range(mut self, range: Option<TextRange>) -> Self {
        self.range = range;
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes.
pub mod codes {
    /// Field name is empty after removing leading underscores.
    pub const EMPTY_PROPERTY_NAME: &str = "AN0001";
    /// Derived property name equals the field name.
    pub const PROPERTY_NAME_COLLISION: &str = "AN0002";
    /// Owning type nested in a non-type symbol.
    pub const UNSUPPORTED_CONTAINER: &str = "AN0003";
    /// Owning or containing type is not a class, struct, or interface.
    pub const UNSUPPORTED_TYPE_KIND: &str = "AN0004";
    /// Attribute argument present but unusable.
    pub const INVALID_ARGUMENT: &str = "AN0005";
    /// `PropertyName` override is not an identifier.
    pub const INVALID_IDENTIFIER: &str = "AN0006";
    /// Marker attribute type not found in the compilation.
    pub const MISSING_MARKER_TYPE: &str = "AN0007";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during one pass, filtered by a policy.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    policy: DiagnosticPolicy,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new(policy: DiagnosticPolicy) -> Self {
        Self {
            policy,
            diagnostics: Vec::new(),
        }
    }

    /// Severity a skip is reported at, or `None` when silent.
    fn skip_severity(&self) -> Option<Severity> {
        match self.policy {
            DiagnosticPolicy::Silent => None,
            DiagnosticPolicy::Warn => Some(Severity::Warning),
            DiagnosticPolicy::Error => Some(Severity::Error),
        }
    }

    /// Report a skipped item.
    pub fn skip(
        &mut self,
        symbol: SymbolId,
        name: &str,
        range: Option<TextRange>,
        reason: &SkipReason,
    ) {
        if let Some(severity) = self.skip_severity() {
            self.diagnostics.push(
                Diagnostic::new(symbol, severity, reason.code(), reason.message(name))
                    .with_range(range),
            );
        }
    }

    /// Report a non-fatal problem. Always a warning, unless silent.
    pub fn lint(
        &mut self,
        symbol: SymbolId,
        range: Option<TextRange>,
        code: &'static str,
        message: impl Into<Arc<str>>,
    ) {
        if self.policy != DiagnosticPolicy::Silent {
            self.diagnostics.push(
                Diagnostic::new(symbol, Severity::Warning, code, message).with_range(range),
            );
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
