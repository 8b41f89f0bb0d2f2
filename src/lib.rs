//! # autonotify
//!
//! Synthesizes change-notifying properties for fields carrying the
//! `AutoNotify` marker attribute.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generator   → discovery, grouping, property synthesis, bootstrap
//!   ↓
//! diagnostics → skip reporting under a configurable policy
//!   ↓
//! model       → SymbolGraph trait, in-memory Compilation, snapshots
//!   ↓
//! core        → text helpers (identifier checks, casing)
//!   ↓
//! base        → primitives (SymbolId, Name, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → core → model → diagnostics → generator)
// ============================================================================

/// Foundation types: SymbolId, Name, TextRange
pub mod base;

/// Text helpers shared by the generator
pub mod core;

/// Host symbol model: the SymbolGraph query trait and its in-memory implementation
pub mod model;

/// Diagnostics for skipped fields and types
pub mod diagnostics;

/// Errors raised while building or loading a compilation
pub mod error;

/// The generation pipeline
pub mod generator;

// Re-export foundation types
pub use base::{Name, SymbolId, TextRange, TextSize};

// Re-export the entry points
pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity};
pub use error::{Error, Result};
pub use generator::{
    DiagnosticPolicy, GeneratedSource, Generator, GeneratorOptions, GeneratorOutput, Outcome,
    SkipReason,
};
pub use model::{Compilation, CompilationBuilder, SymbolGraph};
