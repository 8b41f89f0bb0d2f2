//! Per-item results of a generation pass.

use crate::base::{Name, SymbolId, TextRange};
use crate::diagnostics::{Diagnostic, codes};
use crate::model::{SymbolKind, TypeKind};

/// A named source fragment handed back to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Stable key, e.g. `Person.App_autoNotify.cs`.
    pub hint_name: String,
    pub text: String,
}

impl GeneratedSource {
    pub fn new(hint_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            hint_name: hint_name.into(),
            text: text.into(),
        }
    }
}

/// Why an item produced no output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The field name is empty once leading underscores are removed.
    EmptyName,
    /// The property would have the same name as its backing field.
    NameCollision,
    /// The owning type is nested in something other than a type.
    UnsupportedContainer(SymbolKind),
    /// The owning type, or a type containing it, cannot be declared partial.
    UnsupportedTypeKind(TypeKind),
    /// The marker attribute type is not part of the compilation.
    MissingMarkerType,
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::EmptyName => codes::EMPTY_PROPERTY_NAME,
            SkipReason::NameCollision => codes::PROPERTY_NAME_COLLISION,
            SkipReason::UnsupportedContainer(_) => codes::UNSUPPORTED_CONTAINER,
            SkipReason::UnsupportedTypeKind(_) => codes::UNSUPPORTED_TYPE_KIND,
            SkipReason::MissingMarkerType => codes::MISSING_MARKER_TYPE,
        }
    }

    /// Message for the item called `name`.
    pub fn message(&self, name: &str) -> String {
        match self {
            SkipReason::EmptyName => {
                format!("field '{}' has no name left after removing leading underscores", name)
            }
            SkipReason::NameCollision => {
                format!("property name of field '{}' is the field's own name", name)
            }
            SkipReason::UnsupportedContainer(kind) => {
                format!("type '{}' is nested in a {}", name, kind.display())
            }
            SkipReason::UnsupportedTypeKind(kind) => {
                format!("type '{}' involves a {} declaration", name, kind.display())
            }
            SkipReason::MissingMarkerType => {
                format!("marker attribute type '{}' is not declared", name)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, Outcome::Generated)
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Outcome::Skipped(reason) => Some(reason),
            Outcome::Generated => None,
        }
    }
}

/// Outcome of one owning type or one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemOutcome {
    pub symbol: SymbolId,
    pub kind: SymbolKind,
    pub name: Name,
    pub range: Option<TextRange>,
    pub outcome: Outcome,
}

/// Everything a pass produced.
#[derive(Clone, Debug, Default)]
pub struct GeneratorOutput {
    /// The bootstrap fragment first, then one fragment per owning type.
    pub sources: Vec<GeneratedSource>,
    /// Types in group order, each followed by its fields.
    pub outcomes: Vec<ItemOutcome>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratorOutput {
    pub fn source(&self, hint_name: &str) -> Option<&GeneratedSource> {
        self.sources.iter().find(|s| s.hint_name == hint_name)
    }

    pub fn outcome(&self, symbol: SymbolId) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|o| o.symbol == symbol)
            .map(|o| &o.outcome)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| !o.outcome.is_generated())
    }

    pub fn generated_properties(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.kind == SymbolKind::Field && o.outcome.is_generated())
            .count()
    }
}
