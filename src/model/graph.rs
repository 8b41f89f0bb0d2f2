//! The read-only query interface the generator depends on.

use crate::base::SymbolId;

use super::symbols::{FieldDeclaration, FieldSymbol, NamespaceSymbol, Symbol, TypeSymbol};

/// A resolved program as seen by the generator.
///
/// Hosts implement the three required methods; everything else is derived.
/// Implementations must be pure: repeated queries return the same answers
/// for the lifetime of one generation pass.
pub trait SymbolGraph {
    /// Look up a symbol by id.
    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    /// Every field declaration node in the program, in source order.
    fn field_declarations(&self) -> &[FieldDeclaration];

    /// Resolve a type by its fully-qualified metadata name
    /// (`Namespace.Outer+Inner`).
    fn type_by_metadata_name(&self, name: &str) -> Option<SymbolId>;

    fn field(&self, id: SymbolId) -> Option<&FieldSymbol> {
        match self.symbol(id)? {
            Symbol::Field(f) => Some(f),
            _ => None,
        }
    }

    fn type_symbol(&self, id: SymbolId) -> Option<&TypeSymbol> {
        match self.symbol(id)? {
            Symbol::Type(t) => Some(t),
            _ => None,
        }
    }

    fn namespace(&self, id: SymbolId) -> Option<&NamespaceSymbol> {
        match self.symbol(id)? {
            Symbol::Namespace(n) => Some(n),
            _ => None,
        }
    }

    fn containing_symbol(&self, id: SymbolId) -> Option<SymbolId> {
        self.symbol(id)?.containing()
    }

    /// The namespace a symbol is ultimately declared in.
    fn containing_namespace(&self, id: SymbolId) -> Option<SymbolId> {
        let mut current = self.containing_symbol(id)?;
        loop {
            if self.namespace(current).is_some() {
                return Some(current);
            }
            current = self.containing_symbol(current)?;
        }
    }

    /// Fully-qualified display string, e.g. `App.Models.Outer.Inner<T>`.
    ///
    /// Namespaces display as their dotted name. Returns `None` for unknown
    /// ids or for chains that never reach a namespace.
    fn display_string(&self, id: SymbolId) -> Option<String> {
        let mut parts = Vec::new();
        let mut current = id;
        loop {
            match self.symbol(current)? {
                Symbol::Namespace(ns) => {
                    if !ns.is_global() {
                        parts.push(ns.name.to_string());
                    }
                    break;
                }
                Symbol::Type(t) => parts.push(t.declared_name()),
                Symbol::Field(f) => parts.push(f.name.to_string()),
                Symbol::Other(o) => parts.push(o.name.to_string()),
            }
            current = self.containing_symbol(current)?;
        }
        parts.reverse();
        Some(parts.join("."))
    }

    /// Whether `ty` lists `interface` among its declared interfaces.
    fn declares_interface(&self, ty: SymbolId, interface: SymbolId) -> bool {
        self.type_symbol(ty)
            .is_some_and(|t| t.interfaces.contains(&interface))
    }
}
