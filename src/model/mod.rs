//! Host symbol model.
//!
//! The generator never parses source text. It reads an already-resolved
//! program through the [`SymbolGraph`] trait; [`Compilation`] is the
//! in-memory implementation.
//!
//! ## Key Types
//!
//! - [`SymbolGraph`] - Read-only query interface injected into the generator
//! - [`Compilation`] - Insertion-ordered graph built with [`CompilationBuilder`]
//! - [`FieldSymbol`], [`TypeSymbol`], [`NamespaceSymbol`] - Resolved symbols
//! - [`AttributeData`] - An attribute application with named arguments
//! - [`FieldDeclaration`] - A field declaration syntax node

mod compilation;
mod graph;
#[cfg(feature = "interchange")]
mod snapshot;
mod symbols;

pub use compilation::{Compilation, CompilationBuilder};
pub use graph::SymbolGraph;
#[cfg(feature = "interchange")]
pub use snapshot::{CompilationSnapshot, Json, SnapshotFormat, SymbolEntry, Yaml};
pub use symbols::{
    AttributeData, FieldDeclaration, FieldSymbol, NamespaceSymbol, OtherSymbol, Symbol,
    SymbolKind, TypeKind, TypeSymbol, TypedConstant,
};
